//! [`DocumentSink`] that renders into an XLSX package

use tabula_core::{
    CellRange, CellValue, ColumnSpec, Document, DocumentSink, Error, Result, SheetOptions,
    StyleSet,
};

use crate::writer::XlsxWriter;

/// Collects instructions into an in-memory [`Document`] and serializes it as XLSX
#[derive(Debug, Default)]
pub struct XlsxSink {
    document: Document,
}

impl XlsxSink {
    /// Create a sink with an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// The document built so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the built document
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl DocumentSink for XlsxSink {
    fn add_worksheet(&mut self, title: &str, options: &SheetOptions) -> Result<()> {
        log::trace!("add worksheet {title}");
        self.document.add_worksheet(title, options.clone())?;
        Ok(())
    }

    fn add_columns(&mut self, columns: &[ColumnSpec]) -> Result<()> {
        self.document.current_mut()?.add_columns(columns)
    }

    fn set_cell_value(&mut self, col: u32, row: u32, value: CellValue) -> Result<()> {
        self.document.current_mut()?.set_value(col, row, value)
    }

    fn set_cell_style(&mut self, col: u32, row: u32, style: &StyleSet) -> Result<()> {
        self.document.current_mut()?.set_style(col, row, style)
    }

    fn merge_range(&mut self, range: &str) -> Result<()> {
        let range = CellRange::parse(range)?;
        self.document.current_mut()?.merge_cells(&range)
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        self.document.current_mut()?.set_row_height(row, height)
    }

    fn append_rows(&mut self, rows: &[Vec<CellValue>]) -> Result<u32> {
        self.document.current_mut()?.append_rows(rows)
    }

    fn serialize_to_bytes(&self) -> Result<Vec<u8>> {
        XlsxWriter::write_to_vec(&self.document).map_err(Error::serialize)
    }
}
