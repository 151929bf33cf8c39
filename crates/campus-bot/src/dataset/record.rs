use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyType {
    Tech,
    NonTech,
}

impl CompanyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::NonTech => "Non-Tech",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tech" => Some(Self::Tech),
            "non-tech" | "non tech" => Some(Self::NonTech),
            _ => None,
        }
    }
}

/// One recruiting-company entry in the placement drive list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub company: String,
    pub year: i32,
    pub min_cgpa: f32,
    pub domain: String,
    pub roles_offered: String,
    pub company_type: CompanyType,
    pub visit_date: NaiveDate,
    pub package_lpa: f32,
    pub hiring_process: String,
}

impl PlacementRecord {
    pub fn visit_month(&self) -> u32 {
        self.visit_date.month()
    }
}
