//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::column::ColumnSpec;
use crate::error::{Error, Result};
use crate::sink::SheetOptions;
use crate::style::StyleSet;

/// Contents of a single cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Cell value
    pub value: CellValue,
    /// Explicit style, `None` for an unformatted cell
    pub style: Option<StyleSet>,
}

/// A worksheet (single sheet in a document)
///
/// All public accessors take 1-based column and row ordinals.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Display configuration
    options: SheetOptions,
    /// Registered columns keyed by ordinal
    columns: BTreeMap<u32, ColumnSpec>,
    /// Cells in row-major order
    cells: BTreeMap<CellAddress, Cell>,
    /// Merged regions in insertion order
    merged: Vec<CellRange>,
    /// Custom row heights keyed by row ordinal
    row_heights: BTreeMap<u32, f64>,
    /// Highest row ordinal any instruction has touched
    last_row: u32,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S, options: SheetOptions) -> Self {
        Self {
            name: name.into(),
            options,
            columns: BTreeMap::new(),
            cells: BTreeMap::new(),
            merged: Vec::new(),
            row_heights: BTreeMap::new(),
            last_row: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the display configuration
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    // === Columns ===

    /// Register columns, replacing earlier definitions with the same ordinal
    pub fn add_columns(&mut self, columns: &[ColumnSpec]) -> Result<()> {
        for column in columns {
            CellAddress::from_ordinals(column.ordinal, 1)?;
            self.columns.insert(column.ordinal, column.clone());
        }
        Ok(())
    }

    /// Registered columns in ordinal order
    pub fn columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.values()
    }

    /// Get a registered column by its ordinal
    pub fn column(&self, ordinal: u32) -> Option<&ColumnSpec> {
        self.columns.get(&ordinal)
    }

    // === Cells ===

    /// Get a cell by ordinals
    pub fn cell(&self, col: u32, row: u32) -> Option<&Cell> {
        let addr = CellAddress::from_ordinals(col, row).ok()?;
        self.cells.get(&addr)
    }

    /// Get a cell by A1 reference
    pub fn cell_by_ref(&self, reference: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(reference)?;
        Ok(self.cells.get(&addr))
    }

    /// Get a cell value, `Empty` when the cell was never written
    pub fn value(&self, col: u32, row: u32) -> CellValue {
        self.cell(col, row)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Get the explicit style of a cell
    pub fn style(&self, col: u32, row: u32) -> Option<&StyleSet> {
        self.cell(col, row).and_then(|c| c.style.as_ref())
    }

    /// Set a cell value
    pub fn set_value<V: Into<CellValue>>(&mut self, col: u32, row: u32, value: V) -> Result<()> {
        let addr = self.touch(col, row)?;
        self.cells.entry(addr).or_default().value = value.into();
        Ok(())
    }

    /// Set a cell style, replacing any previous one
    pub fn set_style(&mut self, col: u32, row: u32, style: &StyleSet) -> Result<()> {
        let addr = self.touch(col, row)?;
        self.cells.entry(addr).or_default().style = Some(style.clone());
        Ok(())
    }

    /// Append rows after the last touched row, returning the first row ordinal written
    ///
    /// Empty values are skipped, so blank positions stay free of cells.
    pub fn append_rows(&mut self, rows: &[Vec<CellValue>]) -> Result<u32> {
        let first = self.last_row + 1;
        for (offset, values) in rows.iter().enumerate() {
            let row = first + offset as u32;
            for (index, value) in values.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                self.set_value(index as u32 + 1, row, value.clone())?;
            }
            self.last_row = self.last_row.max(row);
        }
        Ok(first)
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.cells.iter().map(|(addr, cell)| (*addr, cell))
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Highest row ordinal touched by any instruction (0 for a fresh sheet)
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    // === Rows ===

    /// Get a custom row height
    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        if !(height.is_finite() && height >= 0.0) {
            return Err(Error::invalid_argument(format!(
                "row height must be a non-negative number, got {}",
                height
            )));
        }
        self.touch(1, row)?;
        self.row_heights.insert(row, height);
        Ok(())
    }

    /// Get all custom row heights (row ordinal → height in points)
    pub fn custom_row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        // Check for overlap with existing merged regions
        if let Some(existing) = self.merged.iter().find(|m| range.overlaps(m)) {
            return Err(Error::MergedCellConflict(
                range.to_string(),
                existing.to_string(),
            ));
        }
        self.last_row = self.last_row.max(range.end.row_ordinal());
        self.merged.push(*range);
        Ok(())
    }

    /// Validate a position and record it as touched
    fn touch(&mut self, col: u32, row: u32) -> Result<CellAddress> {
        let addr = CellAddress::from_ordinals(col, row)?;
        self.last_row = self.last_row.max(row);
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet() -> Worksheet {
        Worksheet::new("Report", SheetOptions::default())
    }

    #[test]
    fn test_set_and_get_value() {
        let mut ws = sheet();
        ws.set_value(2, 3, "x").unwrap();

        assert_eq!(ws.value(2, 3), CellValue::string("x"));
        assert_eq!(ws.value(1, 1), CellValue::Empty);
        assert_eq!(ws.cell_by_ref("B3").unwrap().unwrap().value.as_str(), Some("x"));
        assert_eq!(ws.last_row(), 3);
    }

    #[test]
    fn test_rejects_zero_ordinals() {
        let mut ws = sheet();
        assert!(matches!(
            ws.set_value(0, 1, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ws.set_style(1, 0, &StyleSet::default()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ws.set_value(16_385, 1, 1.0),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }

    #[test]
    fn test_append_rows_follow_last_touched_row() {
        let mut ws = sheet();
        ws.set_row_height(2, 20.5).unwrap();

        let first = ws
            .append_rows(&[
                vec!["Ann".into(), 90.into()],
                vec!["Bo".into(), CellValue::Empty, 75.into()],
            ])
            .unwrap();

        assert_eq!(first, 3);
        assert_eq!(ws.value(1, 3), CellValue::string("Ann"));
        assert_eq!(ws.value(3, 4), CellValue::Number(75.0));
        assert!(ws.cell(2, 4).is_none());
        assert_eq!(ws.last_row(), 4);
    }

    #[test]
    fn test_style_is_kept_separately_from_value() {
        let mut ws = sheet();
        let style = StyleSet::default().bold(true);
        ws.set_style(1, 1, &style).unwrap();
        ws.set_value(1, 1, "Name").unwrap();

        assert_eq!(ws.style(1, 1), Some(&style));
        assert_eq!(ws.value(1, 1), CellValue::string("Name"));
    }

    #[test]
    fn test_merge_conflict() {
        let mut ws = sheet();
        ws.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();

        let err = ws
            .merge_cells(&CellRange::parse("C1:D1").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::MergedCellConflict(..)));

        ws.merge_cells(&CellRange::parse("A2:B2").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 2);
    }

    #[test]
    fn test_row_height_validation() {
        let mut ws = sheet();
        ws.set_row_height(1, 45.2).unwrap();
        assert_eq!(ws.row_height(1), Some(45.2));
        assert!(ws.set_row_height(1, f64::NAN).is_err());
    }
}
