use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing block from config file: {0}")]
    MissingSection(String),

    #[error("Length mismatch in {what}: expected {expected} entries, found {found}")]
    LengthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("Penalty not defined for keys {first} -> {second}: {reason}")]
    UndefinedPenalty {
        first: String,
        second: String,
        reason: String,
    },

    #[error("Malformed number in {field}: '{value}'")]
    Numeric {
        field: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type GradeResult<T> = Result<T, GradeError>;

/// Parses a float, tagging failures with the field they came from.
pub fn parse_number(value: &str, field: &str) -> GradeResult<f64> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|source| GradeError::Numeric {
        field: field.to_string(),
        value: trimmed.to_string(),
        source,
    })
}
