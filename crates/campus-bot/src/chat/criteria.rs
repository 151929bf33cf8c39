use super::vocab::{
    Domain, Role, COUNT_KEYWORDS, DATE_KEYWORDS, HIGHEST_KEYWORDS, HIRING_KEYWORDS,
    LOWEST_KEYWORDS, MONTHS, PACKAGE_KEYWORDS, ROLE_ASK_KEYWORDS, SHOW_ALL_KEYWORDS,
    SUPPORTED_YEARS,
};
use crate::dataset::{CompanyType, PlacementRecord};
use regex::Regex;
use std::sync::OnceLock;

/// How an extracted CGPA figure is applied to records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CgpaMode {
    /// The figure is a floor: keep records whose requirement is at least it.
    #[default]
    Criteria,
    /// The figure is the asker's own score: keep records they qualify for.
    Eligible,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntentFlags {
    pub ask_package: bool,
    pub ask_hiring: bool,
    pub ask_date: bool,
    pub ask_role: bool,
    pub highest: bool,
    pub lowest: bool,
    pub count: bool,
    pub show_all: bool,
}

/// Everything recognized in a single query. Ephemeral; one per request.
#[derive(Debug, Clone, Default)]
pub struct QueryCriteria {
    pub year: Option<i32>,
    pub cgpa: Option<f32>,
    pub cgpa_mode: CgpaMode,
    pub company: Option<String>,
    pub domain: Option<Domain>,
    pub role: Option<Role>,
    pub company_type: Option<CompanyType>,
    pub month: Option<u32>,
    pub intents: IntentFlags,
}

impl QueryCriteria {
    /// Extract filter criteria and intent flags from free text. Each field
    /// is independent; a pattern that never matches leaves its criterion
    /// unset, so extraction cannot fail.
    pub fn extract(query: &str, records: &[PlacementRecord]) -> Self {
        let query = normalize_query(query);

        let (cgpa, trailing_plus) = match extract_cgpa(&query) {
            Some((value, plus)) => (Some(value), plus),
            None => (None, false),
        };

        Self {
            year: extract_year(&query),
            cgpa,
            cgpa_mode: infer_cgpa_mode(&query, trailing_plus),
            company: detect_company(&query, records),
            domain: detect_domain(&query),
            role: detect_role(&query),
            company_type: detect_company_type(&query),
            month: detect_month(&query),
            intents: detect_intents(&query),
        }
    }

    pub fn has_any_filter(&self) -> bool {
        self.year.is_some()
            || self.cgpa.is_some()
            || self.company.is_some()
            || self.domain.is_some()
            || self.role.is_some()
            || self.company_type.is_some()
            || self.month.is_some()
    }
}

pub(crate) fn normalize_query(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let years = SUPPORTED_YEARS
            .iter()
            .map(|year| year.to_string())
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{years})\b")).expect("hardcoded year pattern")
    })
}

fn cgpa_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(\+)?").expect("hardcoded cgpa pattern"))
}

fn compare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:above|minimum|at least)\b").expect("hardcoded comparison pattern")
    })
}

fn eligible_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:eligible|my|i have|can i|for|at)\b")
            .expect("hardcoded eligibility pattern")
    })
}

fn extract_year(query: &str) -> Option<i32> {
    year_re()
        .find(query)
        .and_then(|token| token.as_str().parse().ok())
}

/// First number token in the plausible GPA range [5, 10]; year tokens fall
/// outside the range and are skipped. Also reports a trailing `+`.
fn extract_cgpa(query: &str) -> Option<(f32, bool)> {
    for caps in cgpa_re().captures_iter(query) {
        let Ok(value) = caps[1].parse::<f32>() else {
            continue;
        };
        if (5.0..=10.0).contains(&value) {
            return Some((value, caps.get(2).is_some()));
        }
    }
    None
}

fn infer_cgpa_mode(query: &str, trailing_plus: bool) -> CgpaMode {
    // Comparison signals outrank the possession list: "at least" contains
    // the possession word "at".
    if trailing_plus || compare_re().is_match(query) {
        CgpaMode::Criteria
    } else if eligible_re().is_match(query) {
        CgpaMode::Eligible
    } else {
        CgpaMode::Criteria
    }
}

/// First record in dataset order whose company name occurs in the query.
/// Dataset-order resolution is a compatibility artifact, not a contract.
fn detect_company(query: &str, records: &[PlacementRecord]) -> Option<String> {
    records
        .iter()
        .find(|record| query.contains(&record.company.to_lowercase()))
        .map(|record| record.company.clone())
}

fn detect_domain(query: &str) -> Option<Domain> {
    Domain::ordered()
        .into_iter()
        .find(|domain| query.contains(domain.keyword()))
}

fn detect_role(query: &str) -> Option<Role> {
    Role::ordered()
        .into_iter()
        .find(|role| query.contains(role.keyword()))
}

fn detect_month(query: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(keyword, _, _)| query.contains(keyword))
        .map(|(_, _, number)| *number)
}

fn detect_company_type(query: &str) -> Option<CompanyType> {
    if query.contains("non tech") || query.contains("non-tech") {
        Some(CompanyType::NonTech)
    } else if query.contains("tech") {
        Some(CompanyType::Tech)
    } else {
        None
    }
}

fn detect_intents(query: &str) -> IntentFlags {
    IntentFlags {
        ask_package: any_keyword(query, PACKAGE_KEYWORDS),
        ask_hiring: any_keyword(query, HIRING_KEYWORDS),
        ask_date: any_keyword(query, DATE_KEYWORDS),
        ask_role: any_keyword(query, ROLE_ASK_KEYWORDS),
        highest: any_keyword(query, HIGHEST_KEYWORDS),
        lowest: any_keyword(query, LOWEST_KEYWORDS),
        count: any_keyword(query, COUNT_KEYWORDS),
        show_all: any_keyword(query, SHOW_ALL_KEYWORDS),
    }
}

fn any_keyword(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(company: &str) -> PlacementRecord {
        PlacementRecord {
            company: company.to_string(),
            year: 2025,
            min_cgpa: 7.0,
            domain: "SaaS".to_string(),
            roles_offered: "Backend".to_string(),
            company_type: CompanyType::Tech,
            visit_date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
            package_lpa: 12.0,
            hiring_process: "OA and interviews".to_string(),
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(
            normalize_query("  Highest   PACKAGE\tin 2025 "),
            "highest package in 2025"
        );
    }

    #[test]
    fn extracts_supported_years_only() {
        assert_eq!(extract_year("companies in 2024"), Some(2024));
        assert_eq!(extract_year("companies in 2019"), None);
        assert_eq!(extract_year("no year here"), None);
    }

    #[test]
    fn cgpa_skips_out_of_range_tokens() {
        assert_eq!(extract_cgpa("companies in 2025 with cgpa 8"), Some((8.0, false)));
        assert_eq!(extract_cgpa("cgpa 8.5+"), Some((8.5, true)));
        assert_eq!(extract_cgpa("companies in 2025"), None);
    }

    #[test]
    fn trailing_plus_and_comparison_words_force_criteria_mode() {
        assert_eq!(infer_cgpa_mode("cgpa 8+", true), CgpaMode::Criteria);
        assert_eq!(infer_cgpa_mode("cutoff above 8", false), CgpaMode::Criteria);
        assert_eq!(infer_cgpa_mode("at least 8 cgpa", false), CgpaMode::Criteria);
    }

    #[test]
    fn possession_words_select_eligible_mode() {
        assert_eq!(infer_cgpa_mode("i have 7.2 cgpa", false), CgpaMode::Eligible);
        assert_eq!(infer_cgpa_mode("my cgpa is 7", false), CgpaMode::Eligible);
        assert_eq!(
            infer_cgpa_mode("can i sit for amazon with 7", false),
            CgpaMode::Eligible
        );
    }

    #[test]
    fn ambiguous_queries_default_to_criteria_mode() {
        assert_eq!(infer_cgpa_mode("cgpa 8 companies", false), CgpaMode::Criteria);
    }

    #[test]
    fn company_detection_is_dataset_ordered() {
        let records = vec![record("Amazon"), record("Amazon Pay")];
        assert_eq!(
            detect_company("what does amazon pay offer", &records).as_deref(),
            Some("Amazon")
        );
        assert_eq!(detect_company("tell me about flipkart", &records), None);
    }

    #[test]
    fn extract_normalizes_case_before_company_lookup() {
        let records = vec![record("Amazon")];
        let criteria = QueryCriteria::extract("What does AMAZON offer?", &records);
        assert_eq!(criteria.company.as_deref(), Some("Amazon"));
    }

    #[test]
    fn detects_domain_role_and_month() {
        assert_eq!(detect_domain("fintech companies"), Some(Domain::Fintech));
        assert_eq!(detect_role("full stack openings"), Some(Role::FullStack));
        assert_eq!(detect_month("visiting in august"), Some(8));
        assert_eq!(detect_month("no month"), None);
    }

    #[test]
    fn non_tech_wins_over_bare_tech() {
        assert_eq!(
            detect_company_type("non-tech companies"),
            Some(CompanyType::NonTech)
        );
        assert_eq!(
            detect_company_type("non tech roles"),
            Some(CompanyType::NonTech)
        );
        assert_eq!(detect_company_type("tech roles"), Some(CompanyType::Tech));
        assert_eq!(detect_company_type("all companies"), None);
    }

    #[test]
    fn intent_flags_follow_keyword_lists() {
        let intents = detect_intents("how many companies offer the highest package");
        assert!(intents.count);
        assert!(intents.highest);
        assert!(intents.ask_package);
        assert!(!intents.show_all);

        let intents = detect_intents("show all companies");
        assert!(intents.show_all);
    }

    #[test]
    fn extract_assembles_the_full_bundle() {
        let records = vec![record("Zerodha")];
        let criteria = QueryCriteria::extract("Zerodha backend package for cgpa 8+ in 2025", &records);
        assert_eq!(criteria.year, Some(2025));
        assert_eq!(criteria.cgpa, Some(8.0));
        assert_eq!(criteria.cgpa_mode, CgpaMode::Criteria);
        assert_eq!(criteria.company.as_deref(), Some("Zerodha"));
        assert_eq!(criteria.role, Some(Role::Backend));
        assert!(criteria.intents.ask_package);
        assert!(criteria.has_any_filter());
    }
}
