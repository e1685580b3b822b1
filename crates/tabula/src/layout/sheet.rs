//! Sheet layout: headers, body and footers

use tabula_core::{CellValue, SheetOptions, StyleSet};

use super::band::{Footer, Header};
use crate::{Error, Result};

/// Title given to sheets that never get one
pub const DEFAULT_SHEET_TITLE: &str = "Sheet 1";

/// Default body row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 45.2;

/// The data body of a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    /// Style applied to every body cell, blanks included
    pub style: StyleSet,
    /// Height of each body row in points
    pub height: f64,
    /// Values aligned positionally to the sheet's columns
    pub rows: Vec<Vec<CellValue>>,
}

impl Default for RowData {
    fn default() -> Self {
        Self {
            style: StyleSet::default(),
            height: DEFAULT_ROW_HEIGHT,
            rows: Vec::new(),
        }
    }
}

impl RowData {
    /// Append one body row
    pub fn push_row<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// A declarative sheet layout
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    id: u32,
    /// Worksheet name
    pub title: String,
    /// Display options handed to the sink untouched
    pub option: SheetOptions,
    headers: Vec<Header>,
    footers: Vec<Footer>,
    /// Body rows and their style
    pub row_data: RowData,
}

impl Sheet {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            title: DEFAULT_SHEET_TITLE.to_string(),
            option: SheetOptions::default(),
            headers: Vec::new(),
            footers: Vec::new(),
            row_data: RowData::default(),
        }
    }

    /// Position in the workbook, starting at 1
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Append a header row
    ///
    /// At most one header may be the main header; asking for a second one
    /// fails with `DuplicateMainHeader` and leaves the sheet unchanged.
    pub fn create_header(&mut self, is_main: bool) -> Result<&mut Header> {
        if is_main && self.main_header().is_some() {
            return Err(Error::DuplicateMainHeader { sheet: self.id });
        }
        let index = self.headers.len();
        self.headers.push(Header::new(index as u32 + 1, is_main));
        Ok(&mut self.headers[index])
    }

    /// Append a footer row
    pub fn create_footer(&mut self) -> &mut Footer {
        let index = self.footers.len();
        self.footers.push(Footer::new(index as u32 + 1));
        &mut self.footers[index]
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    pub fn header_by_id(&self, id: u32) -> Option<&Header> {
        self.headers.iter().find(|h| h.id() == id)
    }

    pub fn header_by_id_mut(&mut self, id: u32) -> Option<&mut Header> {
        self.headers.iter_mut().find(|h| h.id() == id)
    }

    /// The header that defines the sheet's columns
    pub fn main_header(&self) -> Option<&Header> {
        self.headers.iter().find(|h| h.is_main())
    }

    pub fn footer_by_id(&self, id: u32) -> Option<&Footer> {
        self.footers.iter().find(|f| f.id() == id)
    }

    pub fn footer_by_id_mut(&mut self, id: u32) -> Option<&mut Footer> {
        self.footers.iter_mut().find(|f| f.id() == id)
    }

    /// Output row of every header, in declaration order
    ///
    /// The main header always lands on the last header row. Every other
    /// header keeps its declared row.
    pub fn header_rows(&self) -> Vec<u32> {
        let count = self.headers.len() as u32;
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                if header.is_main() {
                    count
                } else {
                    index as u32 + 1
                }
            })
            .collect()
    }

    /// First non-main header whose declared row is taken by the main header
    pub fn header_row_collision(&self) -> Option<u32> {
        let count = self.headers.len() as u32;
        self.main_header()?;
        self.headers
            .iter()
            .zip(self.header_rows())
            .find(|(header, row)| !header.is_main() && *row == count)
            .map(|(_, row)| row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_second_main_header_fails() {
        let mut sheet = Sheet::new(1);
        sheet.create_header(false).unwrap();
        sheet.create_header(true).unwrap();
        sheet.create_header(false).unwrap();

        let err = sheet.create_header(true).unwrap_err();
        assert!(matches!(err, Error::DuplicateMainHeader { sheet: 1 }));
        assert_eq!(sheet.headers().len(), 3);
    }

    #[test]
    fn test_ids_and_lookups() {
        let mut sheet = Sheet::new(4);
        sheet.create_header(false).unwrap().height = 30.0;
        sheet.create_header(true).unwrap();
        sheet.create_footer();
        sheet.create_footer().height = 18.0;

        assert_eq!(sheet.id(), 4);
        assert_eq!(sheet.title, "Sheet 1");
        assert_eq!(sheet.header_by_id(1).unwrap().height, 30.0);
        assert_eq!(sheet.main_header().unwrap().id(), 2);
        assert_eq!(sheet.footer_by_id(2).unwrap().height, 18.0);
        assert!(sheet.footer_by_id(3).is_none());
    }

    #[test]
    fn test_header_rows_pin_main_to_last() {
        let mut sheet = Sheet::new(1);
        sheet.create_header(false).unwrap();
        sheet.create_header(true).unwrap();
        sheet.create_header(false).unwrap();
        sheet.create_header(false).unwrap();

        assert_eq!(sheet.header_rows(), vec![1, 4, 3, 4]);
        assert_eq!(sheet.header_row_collision(), Some(4));
    }

    #[test]
    fn test_header_rows_main_last() {
        let mut sheet = Sheet::new(1);
        sheet.create_header(false).unwrap();
        sheet.create_header(true).unwrap();
        assert_eq!(sheet.header_rows(), vec![1, 2]);
        assert_eq!(sheet.header_row_collision(), None);
    }

    #[test]
    fn test_header_rows_without_main() {
        let mut sheet = Sheet::new(1);
        sheet.create_header(false).unwrap();
        sheet.create_header(false).unwrap();
        assert_eq!(sheet.header_rows(), vec![1, 2]);
        assert_eq!(sheet.header_row_collision(), None);
    }

    #[test]
    fn test_row_data_defaults() {
        let mut data = RowData::default();
        data.push_row(["Ann"]);
        data.push_row([CellValue::from("Bo"), CellValue::Empty, CellValue::from(3)]);

        assert_eq!(data.height, 45.2);
        assert_eq!(data.width(), 3);
        assert_eq!(data.style, StyleSet::default());
    }
}
