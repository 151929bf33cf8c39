use super::record::{CompanyType, PlacementRecord};
use super::DatasetError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

pub(crate) fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<PlacementRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<DriveRow>() {
        records.push(row?.into_record()?);
    }

    Ok(records)
}

/// One row of a drive-list spreadsheet export.
#[derive(Debug, Deserialize)]
struct DriveRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Min CGPA")]
    min_cgpa: f32,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Roles Offered")]
    roles_offered: String,
    #[serde(rename = "Company Type")]
    company_type: String,
    #[serde(rename = "Visit Date")]
    visit_date: String,
    #[serde(rename = "Package (LPA)")]
    package_lpa: f32,
    #[serde(rename = "Hiring Process", default)]
    hiring_process: String,
}

impl DriveRow {
    fn into_record(self) -> Result<PlacementRecord, DatasetError> {
        let company_type =
            CompanyType::parse(&self.company_type).ok_or(DatasetError::CompanyType {
                value: self.company_type,
            })?;

        let visit_date = NaiveDate::parse_from_str(self.visit_date.trim(), "%Y-%m-%d").map_err(
            |source| DatasetError::Date {
                value: self.visit_date.clone(),
                source,
            },
        )?;

        Ok(PlacementRecord {
            company: self.company,
            year: self.year,
            min_cgpa: self.min_cgpa,
            domain: self.domain,
            roles_offered: self.roles_offered,
            company_type,
            visit_date,
            package_lpa: self.package_lpa,
            hiring_process: self.hiring_process,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "Company,Year,Min CGPA,Domain,Roles Offered,Company Type,Visit Date,Package (LPA),Hiring Process\n";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!(
            "{HEADER}Zerodha,2025,7.5,Fintech,Backend,tech,2025-07-21,18.0,OA and 2 interviews\n"
        );
        let records = parse_csv_records(Cursor::new(csv)).expect("rows parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company, "Zerodha");
        assert_eq!(records[0].company_type, CompanyType::Tech);
        assert_eq!(records[0].visit_month(), 7);
    }

    #[test]
    fn rejects_unknown_company_type() {
        let csv = format!(
            "{HEADER}Acme,2025,7.0,Media,Analyst,finance,2025-07-21,10.0,Interview\n"
        );
        let error = parse_csv_records(Cursor::new(csv)).expect_err("type rejected");
        match error {
            DatasetError::CompanyType { value } => assert_eq!(value, "finance"),
            other => panic!("expected company type error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_visit_dates() {
        let csv = format!(
            "{HEADER}Acme,2025,7.0,Media,Analyst,tech,21-07-2025,10.0,Interview\n"
        );
        let error = parse_csv_records(Cursor::new(csv)).expect_err("date rejected");
        assert!(matches!(error, DatasetError::Date { .. }));
    }

    #[test]
    fn hiring_process_defaults_to_empty() {
        let csv = "Company,Year,Min CGPA,Domain,Roles Offered,Company Type,Visit Date,Package (LPA)\n\
Acme,2024,6.5,Media,Analyst,non-tech,2024-09-02,9.5\n";
        let records = parse_csv_records(Cursor::new(csv)).expect("rows parse");
        assert_eq!(records[0].hiring_process, "");
        assert_eq!(records[0].company_type, CompanyType::NonTech);
    }
}
