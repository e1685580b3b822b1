//! The document sink seam
//!
//! A [`DocumentSink`] accepts rendering instructions for one worksheet at a
//! time and finally turns everything it received into bytes. Coordinates are
//! 1-based ordinals throughout.

use crate::cell::CellValue;
use crate::column::ColumnSpec;
use crate::error::Result;
use crate::style::{Color, StyleSet};

/// Receives rendering instructions and serializes the finished document
pub trait DocumentSink {
    /// Open a new worksheet; every following instruction targets it
    fn add_worksheet(&mut self, title: &str, options: &SheetOptions) -> Result<()>;

    /// Register output columns (width and key) on the current worksheet
    fn add_columns(&mut self, columns: &[ColumnSpec]) -> Result<()>;

    /// Write a value into a cell
    fn set_cell_value(&mut self, col: u32, row: u32, value: CellValue) -> Result<()>;

    /// Apply a complete style to a cell, replacing any previous style
    fn set_cell_style(&mut self, col: u32, row: u32, style: &StyleSet) -> Result<()>;

    /// Merge a range written in A1 notation, e.g. `"A1:C1"`
    fn merge_range(&mut self, range: &str) -> Result<()>;

    /// Set the height of a row in points
    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()>;

    /// Append rows after the last row touched so far, returning the first
    /// row ordinal written
    fn append_rows(&mut self, rows: &[Vec<CellValue>]) -> Result<u32>;

    /// Serialize every worksheet received so far
    fn serialize_to_bytes(&self) -> Result<Vec<u8>>;
}

/// Display configuration for a worksheet, passed through to the sink
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct SheetOptions {
    /// Worksheet tab color
    pub tab_color: Option<Color>,
    /// Whether gridlines are drawn in the sheet view
    pub show_grid_lines: bool,
    /// Print header/footer text
    pub header_footer: Option<HeaderFooter>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            tab_color: Some(Color::rgb(0x00, 0xFF, 0x00)),
            show_grid_lines: false,
            header_footer: None,
        }
    }
}

impl SheetOptions {
    /// Options with no tab color and gridlines shown
    pub fn plain() -> Self {
        Self {
            tab_color: None,
            show_grid_lines: true,
            header_footer: None,
        }
    }
}

/// Text printed at the top and bottom of every page
///
/// Strings use the spreadsheet header/footer codes, e.g. `&CPage &P of &N`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct HeaderFooter {
    /// Header on odd (or all) pages
    pub odd_header: Option<String>,
    /// Footer on odd (or all) pages
    pub odd_footer: Option<String>,
}

impl HeaderFooter {
    /// Whether neither a header nor a footer is set
    pub fn is_empty(&self) -> bool {
        self.odd_header.is_none() && self.odd_footer.is_none()
    }
}
