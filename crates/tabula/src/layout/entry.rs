//! Named column entries shared by header and footer bands

use std::fmt;

use tabula_core::StyleSet;

use crate::{Error, Result};

/// Default entry width in characters
pub const DEFAULT_WIDTH: f64 = 20.0;

/// Which kind of band an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Header,
    Footer,
}

impl EntryKind {
    /// Prefix of generated entry keys
    pub fn key_prefix(&self) -> &'static str {
        match self {
            EntryKind::Header => "header",
            EntryKind::Footer => "footer",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Header => write!(f, "Header"),
            EntryKind::Footer => write!(f, "Footer"),
        }
    }
}

/// A titled cell in a header or footer row, possibly spanning several columns
///
/// Header names and footer names have the same shape; the key prefix tells
/// them apart (`header1`, `footer1`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEntry {
    key: String,
    /// Text written into the anchor cell
    pub title: String,
    /// Column width in characters (only used for main header entries)
    pub width: f64,
    /// Number of columns covered, at least 1
    pub colspan: u32,
    /// Style of the anchor cell
    pub style: StyleSet,
}

impl ColumnEntry {
    pub(crate) fn new(key: String, title: String) -> Self {
        Self {
            key,
            title,
            width: DEFAULT_WIDTH,
            colspan: 1,
            style: StyleSet::default(),
        }
    }

    /// Stable key, e.g. `header3`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set the width
    pub fn with_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }

    /// Set the number of columns covered
    pub fn with_colspan(&mut self, colspan: u32) -> &mut Self {
        self.colspan = colspan;
        self
    }

    /// Replace the style
    pub fn with_style(&mut self, style: StyleSet) -> &mut Self {
        self.style = style;
        self
    }
}

/// Ordered entries of one band
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Entries {
    items: Vec<ColumnEntry>,
}

impl Entries {
    pub(crate) fn push(&mut self, kind: EntryKind, title: &str) -> Result<&mut ColumnEntry> {
        if title.is_empty() {
            return Err(Error::MissingTitle { kind });
        }
        let index = self.items.len();
        let key = format!("{}{}", kind.key_prefix(), index + 1);
        self.items.push(ColumnEntry::new(key, title.to_string()));
        Ok(&mut self.items[index])
    }

    pub(crate) fn as_slice(&self) -> &[ColumnEntry] {
        &self.items
    }

    pub(crate) fn by_key(&self, key: &str) -> Option<&ColumnEntry> {
        self.items.iter().find(|e| e.key == key)
    }

    pub(crate) fn by_title(&self, title: &str) -> Option<&ColumnEntry> {
        self.items.iter().find(|e| e.title == title)
    }

    /// Columns consumed by all entries together
    pub(crate) fn span(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.colspan))
    }
}
