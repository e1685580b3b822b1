//! Column definitions handed to a document sink

/// A registered output column
///
/// Only columns that start a named header entry are registered; columns
/// covered by the tail of a wider entry keep the sink's default width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    /// 1-based column ordinal
    pub ordinal: u32,
    /// Stable key of the header entry that defines this column
    pub key: String,
    /// Header title shown in the column
    pub title: String,
    /// Width in characters
    pub width: f64,
}

impl ColumnSpec {
    /// Create a column definition
    pub fn new<K: Into<String>, T: Into<String>>(ordinal: u32, key: K, title: T, width: f64) -> Self {
        Self {
            ordinal,
            key: key.into(),
            title: title.into(),
            width,
        }
    }
}
