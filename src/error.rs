use std::fmt;

use crate::validation::ValidationReport;

/// Error type for loading seed data and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Seed JSON could not be parsed.
    Seed(String),
    /// Two seed records share an id.
    DuplicateId { collection: String, id: u64 },
    /// A seed record breaks the field rules a submitted draft must follow.
    InvalidRecord { id: u64, report: ValidationReport },
    /// The largest id is `u64::MAX`; nothing more can be appended.
    IdsExhausted { collection: String },
    /// Config JSON could not be parsed.
    Config(String),
    /// Config file could not be read.
    Io(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Seed(msg) => write!(f, "invalid seed data: {}", msg),
            CatalogError::DuplicateId { collection, id } => {
                write!(f, "duplicate id in {}: {}", collection, id)
            }
            CatalogError::InvalidRecord { id, report } => {
                write!(f, "record {} rejected with {} field error(s)", id, report.len())
            }
            CatalogError::IdsExhausted { collection } => {
                write!(f, "no ids left in {}", collection)
            }
            CatalogError::Config(msg) => write!(f, "invalid catalog config: {}", msg),
            CatalogError::Io(msg) => write!(f, "failed to read catalog config: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

/// Error type for form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The draft failed validation. Nothing was added.
    Invalid(ValidationReport),
    /// A submission is already in flight.
    AlreadySubmitting,
    /// The accepted draft could not be appended.
    Catalog(CatalogError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(report) => {
                write!(f, "draft rejected with {} field error(s)", report.len())
            }
            SubmitError::AlreadySubmitting => write!(f, "a submission is already in progress"),
            SubmitError::Catalog(err) => write!(f, "failed to add movie: {}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationReport> for SubmitError {
    fn from(report: ValidationReport) -> Self {
        SubmitError::Invalid(report)
    }
}

impl From<CatalogError> for SubmitError {
    fn from(err: CatalogError) -> Self {
        SubmitError::Catalog(err)
    }
}
