//! Document type - the in-memory result of a rendering pass

use crate::error::{Error, Result};
use crate::sink::SheetOptions;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// An in-memory spreadsheet document
///
/// Worksheets are appended in order; the most recently added one is the
/// "current" worksheet that sink instructions are applied to.
#[derive(Debug, Default)]
pub struct Document {
    /// Worksheets in the document
    worksheets: Vec<Worksheet>,
}

impl Document {
    /// Create an empty document with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the document has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet and make it current
    pub fn add_worksheet(&mut self, name: &str, options: SheetOptions) -> Result<usize> {
        self.validate_sheet_name(name)?;

        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name, options));
        Ok(index)
    }

    /// The worksheet instructions currently target
    pub fn current(&self) -> Result<&Worksheet> {
        self.worksheets.last().ok_or(Error::NoWorksheet)
    }

    /// Mutable access to the worksheet instructions currently target
    pub fn current_mut(&mut self) -> Result<&mut Worksheet> {
        self.worksheets.last_mut().ok_or(Error::NoWorksheet)
    }

    /// Validate a sheet name against the spreadsheet naming rules
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Names compare case-insensitively
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }

        Ok(())
    }
}
