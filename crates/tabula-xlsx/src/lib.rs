//! # tabula-xlsx
//!
//! XLSX (Office Open XML) writer and [`DocumentSink`](tabula_core::DocumentSink)
//! implementation for tabula.

pub mod error;
pub mod sink;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use sink::XlsxSink;
pub use writer::XlsxWriter;
