//! Fixed vocabularies the interpreter matches against query text.

/// Drive years the year extractor recognizes.
pub(crate) const SUPPORTED_YEARS: [i32; 3] = [2023, 2024, 2025];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Fintech,
    Edtech,
    Saas,
    Healthtech,
    Ecommerce,
    Logistics,
    Mobility,
    Media,
    Realestate,
    ItServices,
    Insurtech,
}

impl Domain {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Fintech,
            Self::Edtech,
            Self::Saas,
            Self::Healthtech,
            Self::Ecommerce,
            Self::Logistics,
            Self::Mobility,
            Self::Media,
            Self::Realestate,
            Self::ItServices,
            Self::Insurtech,
        ]
    }

    /// The lowercase substring looked up in queries and record fields.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Fintech => "fintech",
            Self::Edtech => "edtech",
            Self::Saas => "saas",
            Self::Healthtech => "healthtech",
            Self::Ecommerce => "ecommerce",
            Self::Logistics => "logistics",
            Self::Mobility => "mobility",
            Self::Media => "media",
            Self::Realestate => "realestate",
            Self::ItServices => "it services",
            Self::Insurtech => "insurtech",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fintech => "FinTech",
            Self::Edtech => "EdTech",
            Self::Saas => "SaaS",
            Self::Healthtech => "HealthTech",
            Self::Ecommerce => "E-commerce",
            Self::Logistics => "Logistics",
            Self::Mobility => "Mobility",
            Self::Media => "Media",
            Self::Realestate => "Real Estate",
            Self::ItServices => "IT Services",
            Self::Insurtech => "InsurTech",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Sde,
    Frontend,
    Backend,
    FullStack,
    ProductManager,
    QaEngineer,
    MlEngineer,
    DataEngineer,
    SupportEngineer,
    Analyst,
}

impl Role {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Sde,
            Self::Frontend,
            Self::Backend,
            Self::FullStack,
            Self::ProductManager,
            Self::QaEngineer,
            Self::MlEngineer,
            Self::DataEngineer,
            Self::SupportEngineer,
            Self::Analyst,
        ]
    }

    /// The lowercase substring looked up in queries and record fields.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Sde => "sde",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::FullStack => "full stack",
            Self::ProductManager => "product manager",
            Self::QaEngineer => "qa engineer",
            Self::MlEngineer => "ml engineer",
            Self::DataEngineer => "data engineer",
            Self::SupportEngineer => "support engineer",
            Self::Analyst => "analyst",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sde => "SDE",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::FullStack => "Full Stack",
            Self::ProductManager => "Product Manager",
            Self::QaEngineer => "QA Engineer",
            Self::MlEngineer => "ML Engineer",
            Self::DataEngineer => "Data Engineer",
            Self::SupportEngineer => "Support Engineer",
            Self::Analyst => "Analyst",
        }
    }
}

/// Month keyword, display label, and calendar number.
pub(crate) const MONTHS: [(&str, &str, u32); 12] = [
    ("january", "January", 1),
    ("february", "February", 2),
    ("march", "March", 3),
    ("april", "April", 4),
    ("may", "May", 5),
    ("june", "June", 6),
    ("july", "July", 7),
    ("august", "August", 8),
    ("september", "September", 9),
    ("october", "October", 10),
    ("november", "November", 11),
    ("december", "December", 12),
];

pub(crate) fn month_label(month: u32) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(_, _, number)| *number == month)
        .map(|(_, label, _)| *label)
}

pub(crate) const PACKAGE_KEYWORDS: &[&str] = &["package", "salary", "ctc", "compensation"];

pub(crate) const HIRING_KEYWORDS: &[&str] = &[
    "hiring process",
    "interview process",
    "selection process",
    "recruitment process",
    "interview rounds",
];

pub(crate) const DATE_KEYWORDS: &[&str] =
    &["visit date", "when", "schedule", "coming", "visiting"];

pub(crate) const ROLE_ASK_KEYWORDS: &[&str] = &["role", "position", "opening", "profile"];

pub(crate) const HIGHEST_KEYWORDS: &[&str] = &[
    "highest",
    "maximum",
    "max package",
    "top package",
    "best package",
];

pub(crate) const LOWEST_KEYWORDS: &[&str] = &[
    "lowest",
    "least",
    "minimum package",
    "smallest package",
];

pub(crate) const COUNT_KEYWORDS: &[&str] =
    &["how many", "count", "number of", "total companies"];

pub(crate) const SHOW_ALL_KEYWORDS: &[&str] = &[
    "show all",
    "list all",
    "all companies",
    "everything",
    "entire list",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_have_expected_sizes() {
        assert_eq!(Domain::ordered().len(), 11);
        assert_eq!(Role::ordered().len(), 10);
        assert_eq!(MONTHS.len(), 12);
    }

    #[test]
    fn month_label_maps_calendar_numbers() {
        assert_eq!(month_label(8), Some("August"));
        assert_eq!(month_label(13), None);
    }
}
