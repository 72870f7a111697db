use std::path::PathBuf;

use thiserror::Error;

/// Column plumbing and parameter problems. Bad cell *contents* never end up
/// here: they are coerced to null and filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("input file not found at: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("unsupported file extension: .{0} (expected an Excel workbook)")]
    UnsupportedFormat(String),

    #[error("workbook has no worksheet or no header row")]
    EmptyWorkbook,

    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column {position}: expected '{expected}', found '{found}'")]
    HeaderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("required column '{0}' is missing from the schema")]
    MissingColumn(String),

    #[error("unknown metric '{0}' (expected one of GP, G, A, P)")]
    UnknownMetric(String),

    #[error("invalid cohort bins: {0}")]
    InvalidBins(String),

    #[error("{bins} bin edges need {expected} labels, got {found}")]
    LabelCount {
        bins: usize,
        expected: usize,
        found: usize,
    },

    #[error("start year {start} is after end year {end}")]
    InvalidYearRange { start: i64, end: i64 },
}
