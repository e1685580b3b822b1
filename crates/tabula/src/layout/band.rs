//! Header and footer bands

use super::entry::{ColumnEntry, Entries, EntryKind};
use crate::Result;

/// Default header/footer row height in points
pub const DEFAULT_BAND_HEIGHT: f64 = 20.5;

/// One header row of a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    id: u32,
    main: bool,
    /// Row height in points
    pub height: f64,
    names: Entries,
}

impl Header {
    pub(crate) fn new(id: u32, main: bool) -> Self {
        Self {
            id,
            main,
            height: DEFAULT_BAND_HEIGHT,
            names: Entries::default(),
        }
    }

    /// Position among the sheet's headers, starting at 1
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether this header defines the sheet's columns
    pub fn is_main(&self) -> bool {
        self.main
    }

    /// Append a named entry
    ///
    /// Fails with `MissingTitle` when `title` is empty.
    pub fn create_header_name(&mut self, title: &str) -> Result<&mut ColumnEntry> {
        self.names.push(EntryKind::Header, title)
    }

    /// Entries in declaration order
    pub fn header_names(&self) -> &[ColumnEntry] {
        self.names.as_slice()
    }

    pub fn header_name_by_key(&self, key: &str) -> Option<&ColumnEntry> {
        self.names.by_key(key)
    }

    pub fn header_name_by_title(&self, title: &str) -> Option<&ColumnEntry> {
        self.names.by_title(title)
    }

    /// Columns covered by all entries, counting colspans
    pub fn span(&self) -> u32 {
        self.names.span()
    }
}

/// One footer row of a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    id: u32,
    /// Row height in points
    pub height: f64,
    names: Entries,
}

impl Footer {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            height: DEFAULT_BAND_HEIGHT,
            names: Entries::default(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Append a named entry
    pub fn create_footer_name(&mut self, title: &str) -> Result<&mut ColumnEntry> {
        self.names.push(EntryKind::Footer, title)
    }

    pub fn footer_names(&self) -> &[ColumnEntry] {
        self.names.as_slice()
    }

    pub fn footer_name_by_key(&self, key: &str) -> Option<&ColumnEntry> {
        self.names.by_key(key)
    }

    pub fn footer_name_by_title(&self, title: &str) -> Option<&ColumnEntry> {
        self.names.by_title(title)
    }
}
