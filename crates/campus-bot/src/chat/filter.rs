use super::criteria::{CgpaMode, QueryCriteria};
use crate::dataset::PlacementRecord;

/// Conjunctive filter: a record survives only if every set criterion
/// matches. `show_all` bypasses the chain entirely.
pub(crate) fn filter_records<'a>(
    criteria: &QueryCriteria,
    records: &'a [PlacementRecord],
) -> Vec<&'a PlacementRecord> {
    if criteria.intents.show_all {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches_record(criteria, record))
        .collect()
}

fn matches_record(criteria: &QueryCriteria, record: &PlacementRecord) -> bool {
    if let Some(year) = criteria.year {
        if record.year != year {
            return false;
        }
    }

    if let Some(cgpa) = criteria.cgpa {
        let qualifies = match criteria.cgpa_mode {
            CgpaMode::Criteria => record.min_cgpa >= cgpa,
            CgpaMode::Eligible => record.min_cgpa <= cgpa,
        };
        if !qualifies {
            return false;
        }
    }

    if let Some(company) = &criteria.company {
        if !record.company.eq_ignore_ascii_case(company) {
            return false;
        }
    }

    if let Some(domain) = criteria.domain {
        if !record.domain.to_lowercase().contains(domain.keyword()) {
            return false;
        }
    }

    if let Some(role) = criteria.role {
        if !record.roles_offered.to_lowercase().contains(role.keyword()) {
            return false;
        }
    }

    if let Some(company_type) = criteria.company_type {
        if record.company_type != company_type {
            return false;
        }
    }

    if let Some(month) = criteria.month {
        if record.visit_month() != month {
            return false;
        }
    }

    true
}
