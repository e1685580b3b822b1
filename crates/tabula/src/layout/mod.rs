//! The declarative layout model
//!
//! A [`Workbook`] owns [`Sheet`]s; a sheet owns its [`Header`]s, [`Footer`]s
//! and [`RowData`]. Everything is append-only and ids are positions, so the
//! model never needs back references.

mod band;
mod entry;
mod sheet;

pub use band::{Footer, Header, DEFAULT_BAND_HEIGHT};
pub use entry::{ColumnEntry, EntryKind, DEFAULT_WIDTH};
pub use sheet::{RowData, Sheet, DEFAULT_ROW_HEIGHT, DEFAULT_SHEET_TITLE};

/// Ordered collection of sheet layouts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet with default settings and return it for configuration
    pub fn create_sheet(&mut self) -> &mut Sheet {
        let index = self.sheets.len();
        self.sheets.push(Sheet::new(index as u32 + 1));
        &mut self.sheets[index]
    }

    /// Sheets in declaration order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet_by_id(&self, id: u32) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id() == id)
    }

    pub fn sheet_by_id_mut(&mut self, id: u32) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.id() == id)
    }

    /// First sheet with the given title
    pub fn sheet_by_title(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title == title)
    }
}
