//! A sink that records the rendering plan instead of building a document
//!
//! Useful to inspect what a layout resolves to without producing XLSX bytes.
//! Serializing a [`RecordingSink`] yields the instruction list as JSON.

use serde::Serialize;
use tabula_core::{
    CellAddress, CellRange, CellValue, ColumnSpec, DocumentSink, Error, Result, SheetOptions,
    StyleSet,
};

/// One call made on a [`DocumentSink`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    AddWorksheet {
        title: String,
        options: SheetOptions,
    },
    AddColumns {
        columns: Vec<ColumnSpec>,
    },
    SetCellValue {
        col: u32,
        row: u32,
        value: CellValue,
    },
    SetCellStyle {
        col: u32,
        row: u32,
        style: StyleSet,
    },
    MergeRange {
        range: String,
    },
    SetRowHeight {
        row: u32,
        height: f64,
    },
    AppendRows {
        first_row: u32,
        rows: Vec<Vec<CellValue>>,
    },
}

/// Records every instruction in order
///
/// Coordinates are validated the same way a document-building sink would,
/// so a plan that records cleanly also renders cleanly.
#[derive(Debug, Default)]
pub struct RecordingSink {
    instructions: Vec<Instruction>,
    has_sheet: bool,
    last_row: u32,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions received so far
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    fn touch(&mut self, col: u32, row: u32) -> Result<()> {
        if !self.has_sheet {
            return Err(Error::NoWorksheet);
        }
        CellAddress::from_ordinals(col, row)?;
        self.last_row = self.last_row.max(row);
        Ok(())
    }
}

impl DocumentSink for RecordingSink {
    fn add_worksheet(&mut self, title: &str, options: &SheetOptions) -> Result<()> {
        self.has_sheet = true;
        self.last_row = 0;
        self.instructions.push(Instruction::AddWorksheet {
            title: title.to_string(),
            options: options.clone(),
        });
        Ok(())
    }

    fn add_columns(&mut self, columns: &[ColumnSpec]) -> Result<()> {
        if !self.has_sheet {
            return Err(Error::NoWorksheet);
        }
        self.instructions.push(Instruction::AddColumns {
            columns: columns.to_vec(),
        });
        Ok(())
    }

    fn set_cell_value(&mut self, col: u32, row: u32, value: CellValue) -> Result<()> {
        self.touch(col, row)?;
        self.instructions
            .push(Instruction::SetCellValue { col, row, value });
        Ok(())
    }

    fn set_cell_style(&mut self, col: u32, row: u32, style: &StyleSet) -> Result<()> {
        self.touch(col, row)?;
        self.instructions.push(Instruction::SetCellStyle {
            col,
            row,
            style: style.clone(),
        });
        Ok(())
    }

    fn merge_range(&mut self, range: &str) -> Result<()> {
        let parsed = CellRange::parse(range)?;
        self.touch(parsed.end.col_ordinal(), parsed.end.row_ordinal())?;
        self.instructions.push(Instruction::MergeRange {
            range: range.to_string(),
        });
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        self.touch(1, row)?;
        self.instructions
            .push(Instruction::SetRowHeight { row, height });
        Ok(())
    }

    fn append_rows(&mut self, rows: &[Vec<CellValue>]) -> Result<u32> {
        if !self.has_sheet {
            return Err(Error::NoWorksheet);
        }
        let first_row = self.last_row + 1;
        self.last_row += rows.len() as u32;
        self.instructions.push(Instruction::AppendRows {
            first_row,
            rows: rows.to_vec(),
        });
        Ok(first_row)
    }

    fn serialize_to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.instructions).map_err(Error::serialize)
    }
}
