mod parser;
mod record;

pub use record::{CompanyType, PlacementRecord};

use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read placement data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid placement JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid drive-list CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unrecognized company type '{value}'")]
    CompanyType { value: String },
    #[error("invalid visit date '{value}'")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// The in-memory drive list. Loaded fresh per query and never mutated.
#[derive(Debug, Default, Clone)]
pub struct PlacementDataset {
    records: Vec<PlacementRecord>,
}

impl PlacementDataset {
    pub fn from_records(records: Vec<PlacementRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records: Vec<PlacementRecord> = serde_json::from_reader(reader)?;
        Ok(Self { records })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(Self {
            records: parser::parse_csv_records(reader)?,
        })
    }

    /// Soft-degradation loader: a missing or malformed source yields an
    /// empty dataset instead of an error, and the interpreter reports the
    /// outage to the user.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_json_path(path.as_ref()) {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "placement data unavailable, serving empty dataset"
                );
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
