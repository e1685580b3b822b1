//! # tabula-core
//!
//! Core data structures for the tabula sheet layout engine.
//!
//! This crate provides the fundamental types shared by the layout, XLSX and
//! CLI crates:
//! - the column code codec ([`column_code`], [`cell_ref`], [`merge_range`])
//! - [`CellValue`], [`CellAddress`] and [`CellRange`]
//! - [`StyleSet`] - Cell formatting (font, fill, border, alignment)
//! - [`DocumentSink`] - the seam layout rendering writes through
//! - [`Document`], [`Worksheet`] - an in-memory document sinks can build on
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{cell_ref, merge_range, Document, SheetOptions};
//!
//! assert_eq!(cell_ref(28, 12).unwrap(), "AB12");
//! assert_eq!(merge_range(3, 4, 2).unwrap(), "C2:F2");
//!
//! let mut doc = Document::new();
//! doc.add_worksheet("Report", SheetOptions::default()).unwrap();
//! let sheet = doc.current_mut().unwrap();
//! sheet.set_value(1, 1, "Name").unwrap();
//! sheet.set_value(2, 1, 42.0).unwrap();
//! ```

pub mod cell;
pub mod column;
pub mod document;
pub mod error;
pub mod sink;
pub mod style;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    cell_ref, column_code, column_ordinal, merge_range, CellAddress, CellRange, CellValue,
};
pub use column::ColumnSpec;
pub use document::Document;
pub use error::{Error, Result};
pub use sink::{DocumentSink, HeaderFooter, SheetOptions};
pub use worksheet::{Cell, Worksheet};

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle, HorizontalAlignment,
    PatternType, StyleSet,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// MIME type of an XLSX document
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
