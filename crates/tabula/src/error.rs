//! Error types for tabula

use thiserror::Error;

use crate::export::BlobError;
use crate::layout::EntryKind;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, composing or exporting a layout
#[derive(Debug, Error)]
pub enum Error {
    /// A header or footer entry was given without a title
    #[error("{kind} \"title\" is required")]
    MissingTitle { kind: EntryKind },

    /// A header in the configuration does not say whether it is the main header
    #[error("Header \"main\" is required")]
    MissingMainFlag,

    /// The configuration has no `sheets` array
    #[error("The \"sheets\" field is required")]
    MissingSheets,

    /// A configured width or height is negative
    #[error("{field} must not be negative, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    /// The configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A sheet already has a main header
    #[error("Sheet {sheet} cannot contain multiple main headers")]
    DuplicateMainHeader { sheet: u32 },

    /// A sheet was composed without a main header
    #[error("Sheet {sheet} (\"{title}\") has no main header")]
    MissingMainHeader { sheet: u32, title: String },

    /// An entry spans less than one column
    #[error("Entry {key} in sheet {sheet} has colspan {colspan}, expected at least 1")]
    InvalidColspan {
        sheet: u32,
        key: String,
        colspan: i64,
    },

    /// A non-main header is declared on the row the main header occupies
    #[error("Sheet {sheet}: a header is declared on row {row}, which the main header occupies")]
    HeaderRowCollision { sheet: u32, row: u32 },

    /// Coordinate or sink failure
    #[error(transparent)]
    Core(#[from] tabula_core::Error),

    /// The blob store rejected the upload
    #[error("Upload failed: {0}")]
    Upload(#[from] BlobError),

    /// The serialization task panicked or was cancelled
    #[error("Serialization task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or incomplete configuration input
    Configuration,
    /// The layout model violates a structural rule
    Structural,
    /// A coordinate could not be resolved or the sink refused an instruction
    Coordinate,
    /// Serialization or upload failed
    Boundary,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingTitle { .. }
            | Error::MissingMainFlag
            | Error::MissingSheets
            | Error::InvalidDimension { .. }
            | Error::Config(_) => ErrorKind::Configuration,
            Error::DuplicateMainHeader { .. }
            | Error::MissingMainHeader { .. }
            | Error::InvalidColspan { .. }
            | Error::HeaderRowCollision { .. } => ErrorKind::Structural,
            Error::Core(tabula_core::Error::Serialize(_)) => ErrorKind::Boundary,
            Error::Core(_) => ErrorKind::Coordinate,
            Error::Upload(_) | Error::Join(_) => ErrorKind::Boundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::MissingSheets.kind(), ErrorKind::Configuration);
        assert_eq!(
            Error::DuplicateMainHeader { sheet: 1 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            Error::HeaderRowCollision { sheet: 1, row: 3 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            Error::InvalidDimension {
                field: "height",
                value: -1.0
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::from(tabula_core::Error::invalid_argument("zero")).kind(),
            ErrorKind::Coordinate
        );
        assert_eq!(
            Error::from(BlobError::InvalidKey("../x".into())).kind(),
            ErrorKind::Boundary
        );
    }

    #[test]
    fn test_messages() {
        let err = Error::MissingTitle {
            kind: EntryKind::Footer,
        };
        assert_eq!(err.to_string(), "Footer \"title\" is required");
    }
}
