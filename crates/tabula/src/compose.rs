//! Layout resolution: turns sheet layouts into sink instructions
//!
//! For a sheet with `k` headers and `m` body rows the output is:
//!
//! | rows              | content                                  |
//! |-------------------|------------------------------------------|
//! | `1 ..= k - 1`     | non-main headers at their declared rows  |
//! | `k`               | the main header, which defines columns   |
//! | `k + 1 ..= k + m` | body rows, every grid cell body-styled   |
//! | `k + m + 1 ..`    | one row per footer, styled per entry     |

use tabula_core::style::{Color, StyleSet};
use tabula_core::{merge_range, CellValue, ColumnSpec, DocumentSink, SheetOptions};

use crate::layout::{ColumnEntry, Header, Sheet, Workbook};
use crate::{Error, Result};

/// Column width used by the basic layout
pub const BASIC_COLUMN_WIDTH: f64 = 20.0;

/// Header cell style of the basic layout: bold white text on blue
pub fn basic_header_style() -> StyleSet {
    StyleSet::plain()
        .bold(true)
        .font_color(Color::WHITE)
        .fill_color(Color::argb(0xFF, 0x53, 0x8D, 0xD5))
}

/// Drives a [`DocumentSink`] from layout models
pub struct SheetComposer<'a, S: DocumentSink> {
    sink: &'a mut S,
}

impl<'a, S: DocumentSink> SheetComposer<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Compose every sheet in declaration order
    pub fn compose_workbook(&mut self, workbook: &Workbook) -> Result<()> {
        for sheet in workbook.sheets() {
            self.compose_sheet(sheet)?;
        }
        Ok(())
    }

    /// Compose one sheet into a new worksheet
    ///
    /// The sheet is validated before the first instruction is issued.
    pub fn compose_sheet(&mut self, sheet: &Sheet) -> Result<()> {
        let main = validate(sheet)?;

        let header_rows = sheet.header_rows();
        let k = sheet.headers().len() as u32;
        let body = &sheet.row_data;
        let m = body.rows.len() as u32;
        let grid_width = main.span().max(body.width() as u32);

        tracing::debug!(
            "Composing sheet {} ({}): {} header row(s), {} body row(s), {} footer(s), {} column(s)",
            sheet.id(),
            sheet.title,
            k,
            m,
            sheet.footers().len(),
            grid_width
        );

        self.sink.add_worksheet(&sheet.title, &sheet.option)?;
        self.sink.add_columns(&columns(main))?;

        for (header, &row) in sheet.headers().iter().zip(&header_rows) {
            self.write_band(header.header_names(), row, header.height, !header.is_main())?;
        }

        if m > 0 {
            let first = self.sink.append_rows(&body.rows)?;
            tracing::trace!("Body rows appended from row {first}");
        }

        // Main row: every column of an entry's span takes the entry style
        let mut cursor = 1u32;
        for entry in main.header_names() {
            for col in cursor..cursor.saturating_add(entry.colspan) {
                self.sink.set_cell_style(col, k, &entry.style)?;
            }
            cursor = cursor.saturating_add(entry.colspan);
        }

        for row in k + 1..=k + m {
            for col in 1..=grid_width {
                self.sink.set_cell_style(col, row, &body.style)?;
            }
            self.sink.set_row_height(row, body.height)?;
        }

        for (offset, footer) in sheet.footers().iter().enumerate() {
            let row = k + m + 1 + offset as u32;
            self.write_band(footer.footer_names(), row, footer.height, true)?;
        }

        Ok(())
    }

    /// Compose the flat basic layout: one styled title row, then the values
    pub fn compose_basic(
        &mut self,
        worksheet_name: &str,
        headers: &[String],
        rows: &[Vec<CellValue>],
    ) -> Result<()> {
        self.sink
            .add_worksheet(worksheet_name, &SheetOptions::plain())?;

        let columns: Vec<ColumnSpec> = headers
            .iter()
            .enumerate()
            .map(|(index, title)| {
                ColumnSpec::new(
                    index as u32 + 1,
                    format!("header{index}"),
                    title.as_str(),
                    BASIC_COLUMN_WIDTH,
                )
            })
            .collect();
        self.sink.add_columns(&columns)?;

        let style = basic_header_style();
        for column in &columns {
            self.sink
                .set_cell_value(column.ordinal, 1, CellValue::string(column.title.as_str()))?;
            self.sink.set_cell_style(column.ordinal, 1, &style)?;
        }

        if !rows.is_empty() {
            self.sink.append_rows(rows)?;
        }
        Ok(())
    }

    /// Write one header or footer row: titles left to right, merges for wide entries
    fn write_band(
        &mut self,
        entries: &[ColumnEntry],
        row: u32,
        height: f64,
        styled: bool,
    ) -> Result<()> {
        let mut cursor = 1u32;
        for entry in entries {
            self.sink
                .set_cell_value(cursor, row, CellValue::string(entry.title.as_str()))?;
            if entry.colspan > 1 {
                self.sink
                    .merge_range(&merge_range(cursor, entry.colspan, row)?)?;
            }
            if styled {
                self.sink.set_cell_style(cursor, row, &entry.style)?;
            }
            cursor = cursor.saturating_add(entry.colspan);
        }
        self.sink.set_row_height(row, height)?;
        Ok(())
    }
}

/// Column definitions of the main header, one per entry at its start column
fn columns(main: &Header) -> Vec<ColumnSpec> {
    let mut cursor = 1u32;
    main.header_names()
        .iter()
        .map(|entry| {
            let column = ColumnSpec::new(cursor, entry.key(), entry.title.as_str(), entry.width);
            cursor = cursor.saturating_add(entry.colspan);
            column
        })
        .collect()
}

fn validate(sheet: &Sheet) -> Result<&Header> {
    let entries = sheet
        .headers()
        .iter()
        .flat_map(|h| h.header_names())
        .chain(sheet.footers().iter().flat_map(|f| f.footer_names()));
    for entry in entries {
        if entry.colspan < 1 {
            return Err(Error::InvalidColspan {
                sheet: sheet.id(),
                key: entry.key().to_string(),
                colspan: i64::from(entry.colspan),
            });
        }
    }

    let main = sheet.main_header().ok_or_else(|| Error::MissingMainHeader {
        sheet: sheet.id(),
        title: sheet.title.clone(),
    })?;

    if let Some(row) = sheet.header_row_collision() {
        return Err(Error::HeaderRowCollision {
            sheet: sheet.id(),
            row,
        });
    }
    Ok(main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Instruction, RecordingSink};

    #[test]
    fn test_missing_main_header_issues_nothing() {
        let mut workbook = Workbook::new();
        let sheet = workbook.create_sheet();
        sheet.create_header(false).unwrap().create_header_name("A").unwrap();

        let mut sink = RecordingSink::new();
        let err = SheetComposer::new(&mut sink)
            .compose_workbook(&workbook)
            .unwrap_err();
        assert!(matches!(err, Error::MissingMainHeader { sheet: 1, .. }));
        assert!(sink.instructions().is_empty());
    }

    #[test]
    fn test_zero_colspan_issues_nothing() {
        let mut workbook = Workbook::new();
        let sheet = workbook.create_sheet();
        sheet.create_header(true).unwrap().create_header_name("A").unwrap();
        sheet
            .create_footer()
            .create_footer_name("Total")
            .unwrap()
            .with_colspan(0);

        let mut sink = RecordingSink::new();
        let err = SheetComposer::new(&mut sink)
            .compose_workbook(&workbook)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColspan { ref key, .. } if key == "footer1"));
        assert!(sink.instructions().is_empty());
    }

    #[test]
    fn test_header_on_main_row_issues_nothing() {
        let mut workbook = Workbook::new();
        let sheet = workbook.create_sheet();
        sheet.create_header(true).unwrap().create_header_name("Main").unwrap();
        sheet.create_header(false).unwrap().create_header_name("Second").unwrap();
        sheet.create_header(false).unwrap().create_header_name("Third").unwrap();

        let mut sink = RecordingSink::new();
        let err = SheetComposer::new(&mut sink)
            .compose_workbook(&workbook)
            .unwrap_err();
        assert!(matches!(err, Error::HeaderRowCollision { sheet: 1, row: 3 }));
        assert_eq!(err.kind(), crate::ErrorKind::Structural);
        assert!(sink.instructions().is_empty());
    }

    #[test]
    fn test_columns_start_after_wide_entries() {
        let mut header = Header::new(1, true);
        header.create_header_name("Who").unwrap().with_colspan(2);
        header.create_header_name("Score").unwrap().with_width(12.0);

        let cols = columns(&header);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].ordinal, 1);
        assert_eq!(cols[1].ordinal, 3);
        assert_eq!(cols[1].key, "header2");
        assert_eq!(cols[1].width, 12.0);
    }

    #[test]
    fn test_basic_layout() {
        let mut sink = RecordingSink::new();
        SheetComposer::new(&mut sink)
            .compose_basic(
                "Export",
                &["Name".to_string(), "Score".to_string()],
                &[vec!["Ann".into(), 90.into()]],
            )
            .unwrap();

        let ops = sink.instructions();
        assert!(matches!(&ops[0], Instruction::AddWorksheet { title, .. } if title == "Export"));
        assert!(matches!(
            &ops[1],
            Instruction::AddColumns { columns } if columns[1].key == "header1" && columns[1].width == 20.0
        ));
        assert!(ops.iter().all(|op| !matches!(op, Instruction::MergeRange { .. })));
        assert!(ops.iter().any(|op| matches!(
            op,
            Instruction::SetCellStyle { col: 2, row: 1, style } if style.font.bold
                && style.fill.foreground == Color::argb(0xFF, 0x53, 0x8D, 0xD5)
        )));
        assert!(matches!(
            ops.last(),
            Some(Instruction::AppendRows { first_row: 2, .. })
        ));
    }
}
