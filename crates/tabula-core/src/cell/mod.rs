//! Cell-related types and utilities
//!
//! This module contains:
//! - the column code codec ([`column_code`], [`column_ordinal`], [`cell_ref`], [`merge_range`])
//! - [`CellAddress`] and [`CellRange`] - A cell's location and rectangular ranges
//! - [`CellValue`] - The value stored in a cell

mod address;
mod value;

pub use address::{cell_ref, column_code, column_ordinal, merge_range, CellAddress, CellRange};
pub use value::CellValue;
