//! Error types for tabula-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabula-core
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate argument was zero or otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row ordinal out of bounds
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column ordinal out of bounds
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Merge range overlaps an existing merged region
    #[error("Range {0} overlaps merged region {1}")]
    MergedCellConflict(String, String),

    /// A cell instruction arrived before any worksheet was opened
    #[error("No worksheet has been added to the document")]
    NoWorksheet,

    /// The sink failed to turn the document into bytes
    #[error("Serialization failed: {0}")]
    Serialize(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a new "invalid argument" error with a message
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Wrap a sink-specific serialization failure
    pub fn serialize<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Serialize(Box::new(err))
    }

    /// Whether this error came from a bad coordinate rather than the sink itself
    pub fn is_coordinate(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_)
                | Error::InvalidAddress(_)
                | Error::InvalidRange(_)
                | Error::RowOutOfBounds(..)
                | Error::ColumnOutOfBounds(..)
        )
    }
}
