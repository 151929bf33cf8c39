mod criteria;
mod filter;
mod reply;
pub mod router;
mod vocab;

pub use criteria::{CgpaMode, IntentFlags, QueryCriteria};
pub use reply::DATA_SOURCE_MISSING;
pub use vocab::{Domain, Role};

use crate::dataset::{PlacementDataset, PlacementRecord};
use std::path::PathBuf;
use tracing::debug;

/// Answers placement questions against the drive list at `data_path`.
///
/// Each call re-reads the source, so replies are always against the latest
/// records and no state survives between requests.
#[derive(Debug, Clone)]
pub struct ChatService {
    data_path: PathBuf,
}

impl ChatService {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn respond(&self, query: &str) -> String {
        let dataset = PlacementDataset::load_or_empty(&self.data_path);
        respond_with_records(query, dataset.records())
    }
}

/// Interpret one query against an already-loaded record set.
pub fn respond_with_records(query: &str, records: &[PlacementRecord]) -> String {
    if records.is_empty() {
        return DATA_SOURCE_MISSING.to_string();
    }

    let criteria = QueryCriteria::extract(query, records);
    debug!(?criteria, "extracted query criteria");

    let matches = filter::filter_records(&criteria, records);
    reply::render_reply(&criteria, &matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CompanyType;
    use chrono::NaiveDate;

    fn record(company: &str, year: i32) -> PlacementRecord {
        PlacementRecord {
            company: company.to_string(),
            year,
            min_cgpa: 7.0,
            domain: "SaaS".to_string(),
            roles_offered: "Backend".to_string(),
            company_type: CompanyType::Tech,
            visit_date: NaiveDate::from_ymd_opt(year, 8, 14).expect("valid date"),
            package_lpa: 12.0,
            hiring_process: "OA and interviews".to_string(),
        }
    }

    #[test]
    fn empty_record_sets_report_the_missing_source() {
        assert_eq!(respond_with_records("anything at all", &[]), DATA_SOURCE_MISSING);
        assert_eq!(respond_with_records("", &[]), DATA_SOURCE_MISSING);
    }

    #[test]
    fn replies_are_deterministic_for_a_fixed_snapshot() {
        let records = vec![record("Zoho", 2024), record("Amazon", 2025)];
        let first = respond_with_records("companies in 2025", &records);
        let second = respond_with_records("companies in 2025", &records);
        assert_eq!(first, second);
    }

    #[test]
    fn service_reports_missing_source_for_bad_paths() {
        let service = ChatService::new("./does-not-exist.json");
        assert_eq!(service.respond("highest package"), DATA_SOURCE_MISSING);
    }
}
