//! # tabula
//!
//! Declarative sheet layouts rendered to XLSX.
//!
//! A [`Workbook`] describes sheets made of multi-row headers (with merged,
//! multi-column titles), a uniformly styled data body and multi-row footers.
//! The [`SheetComposer`] resolves a layout into spreadsheet coordinates and
//! drives a [`DocumentSink`]; the [`Exporter`] serializes the result and hands
//! it to a [`BlobStore`].
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.create_sheet();
//! sheet.title = "Scores".to_string();
//!
//! let header = sheet.create_header(true).unwrap();
//! header.create_header_name("Name").unwrap();
//! header.create_header_name("Score").unwrap();
//!
//! sheet.row_data.push_row([CellValue::from("Ann"), CellValue::from(90)]);
//! sheet.row_data.push_row([CellValue::from("Bo"), CellValue::from(75)]);
//!
//! let mut sink = XlsxSink::new();
//! SheetComposer::new(&mut sink).compose_workbook(&workbook).unwrap();
//!
//! let scores = sink.document().worksheet_by_name("Scores").unwrap();
//! assert_eq!(scores.value(1, 1), CellValue::string("Name"));
//! assert_eq!(scores.value(2, 3), CellValue::Number(75.0));
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod plan;
pub mod prelude;

pub use compose::SheetComposer;
pub use config::{StylePatch, WorkbookConfig};
pub use error::{Error, ErrorKind, Result};
pub use export::{
    BasicExport, BlobError, BlobStore, Exporter, FsBlobStore, FullExport, MemoryBlobStore,
    UploadRequest,
};
pub use layout::{ColumnEntry, EntryKind, Footer, Header, RowData, Sheet, Workbook};
pub use plan::{Instruction, RecordingSink};

// Re-export core types
pub use tabula_core::{
    cell_ref, column_code, column_ordinal, merge_range, Alignment, BorderLineStyle, BorderStyle,
    CellValue, Color, ColumnSpec, DocumentSink, FillStyle, FontStyle, HeaderFooter,
    HorizontalAlignment, PatternType, SheetOptions, StyleSet,
};

// Re-export the XLSX sink
pub use tabula_xlsx::{XlsxSink, XlsxWriter};
