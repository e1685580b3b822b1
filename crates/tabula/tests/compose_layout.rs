//! End-to-end layout resolution through the XLSX sink

use pretty_assertions::assert_eq;
use tabula::prelude::*;
use tabula::{Instruction, Sheet};
use tabula_core::{CellRange, Worksheet};

fn render(workbook: &Workbook) -> XlsxSink {
    let mut sink = XlsxSink::new();
    SheetComposer::new(&mut sink)
        .compose_workbook(workbook)
        .unwrap();
    sink
}

fn scores_sheet(sheet: &mut Sheet) {
    sheet.title = "Scores".to_string();
    let header = sheet.create_header(true).unwrap();
    header.create_header_name("Name").unwrap();
    header.create_header_name("Score").unwrap();
    sheet.row_data.push_row([CellValue::from("Ann"), CellValue::from(90)]);
    sheet.row_data.push_row([CellValue::from("Bo"), CellValue::from(75)]);
}

fn merges(ws: &Worksheet) -> Vec<String> {
    ws.merged_regions().iter().map(CellRange::to_a1_string).collect()
}

#[test]
fn test_name_score_scenario() {
    let mut workbook = Workbook::new();
    scores_sheet(workbook.create_sheet());

    let sink = render(&workbook);
    let ws = sink.document().worksheet_by_name("Scores").unwrap();

    assert_eq!(ws.value(1, 1), CellValue::string("Name"));
    assert_eq!(ws.value(2, 1), CellValue::string("Score"));
    assert_eq!(ws.value(1, 2), CellValue::string("Ann"));
    assert_eq!(ws.value(2, 2), CellValue::Number(90.0));
    assert_eq!(ws.value(1, 3), CellValue::string("Bo"));
    assert_eq!(ws.value(2, 3), CellValue::Number(75.0));
    assert!(merges(ws).is_empty());

    let columns: Vec<(u32, &str, f64)> = ws
        .columns()
        .map(|c| (c.ordinal, c.key.as_str(), c.width))
        .collect();
    assert_eq!(columns, vec![(1, "header1", 20.0), (2, "header2", 20.0)]);

    assert_eq!(ws.row_height(1), Some(20.5));
    assert_eq!(ws.row_height(2), Some(45.2));
    assert_eq!(ws.row_height(3), Some(45.2));
    assert_eq!(ws.style(2, 3), Some(&StyleSet::default()));
}

#[test]
fn test_totals_colspan_scenario() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    sheet.title = "Totals".to_string();
    sheet
        .create_header(true)
        .unwrap()
        .create_header_name("Totals")
        .unwrap()
        .with_colspan(3);

    let sink = render(&workbook);
    let ws = sink.document().worksheet_by_name("Totals").unwrap();

    assert_eq!(merges(ws), vec!["A1:C1"]);
    assert_eq!(ws.value(1, 1), CellValue::string("Totals"));
    assert_eq!(ws.columns().count(), 1);
}

#[test]
fn test_headers_keep_declared_rows() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    sheet.create_header(false).unwrap().create_header_name("Group 1").unwrap();
    sheet.create_header(false).unwrap().create_header_name("Group 2").unwrap();
    sheet.create_header(true).unwrap().create_header_name("Main").unwrap();
    sheet.row_data.push_row(["body"]);

    let sink = render(&workbook);
    let ws = sink.document().worksheet(0).unwrap();

    assert_eq!(ws.value(1, 1), CellValue::string("Group 1"));
    assert_eq!(ws.value(1, 2), CellValue::string("Group 2"));
    assert_eq!(ws.value(1, 3), CellValue::string("Main"));
    assert_eq!(ws.value(1, 4), CellValue::string("body"));
}

#[test]
fn test_header_declared_on_main_row_fails() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    sheet.create_header(true).unwrap().create_header_name("Main").unwrap();
    sheet.create_header(false).unwrap().create_header_name("Second").unwrap();
    sheet.create_header(false).unwrap().create_header_name("Third").unwrap();

    let mut sink = XlsxSink::new();
    let err = SheetComposer::new(&mut sink)
        .compose_workbook(&workbook)
        .unwrap_err();

    assert!(matches!(err, Error::HeaderRowCollision { sheet: 1, row: 3 }));
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(sink.document().sheet_count(), 0);
}

#[test]
fn test_body_style_covers_blank_cells() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    let header = sheet.create_header(true).unwrap();
    header.create_header_name("A").unwrap();
    header.create_header_name("B").unwrap();
    header.create_header_name("C").unwrap();

    let body_style = StyleSet::default()
        .fill_color(Color::argb(0xFF, 0xEE, 0xEE, 0xEE))
        .horizontal_alignment(HorizontalAlignment::Center);
    sheet.row_data.style = body_style.clone();
    sheet.row_data.push_row([CellValue::from("only")]);
    sheet
        .row_data
        .push_row([CellValue::Empty, CellValue::from(2), CellValue::Empty, CellValue::from(4)]);

    let sink = render(&workbook);
    let ws = sink.document().worksheet(0).unwrap();

    for row in 2..=3 {
        for col in 1..=4 {
            assert_eq!(ws.style(col, row), Some(&body_style), "cell {col},{row}");
        }
    }
    assert!(ws.value(2, 2).is_empty());
    assert_eq!(ws.value(4, 3), CellValue::Number(4.0));
}

#[test]
fn test_main_row_style_cascades_over_span() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    let header = sheet.create_header(true).unwrap();
    let wide = StyleSet::default().bold(true);
    header
        .create_header_name("Wide")
        .unwrap()
        .with_colspan(2)
        .with_style(wide.clone());
    header.create_header_name("Narrow").unwrap();

    let sink = render(&workbook);
    let ws = sink.document().worksheet(0).unwrap();

    assert_eq!(ws.style(1, 1), Some(&wide));
    assert_eq!(ws.style(2, 1), Some(&wide));
    assert_eq!(ws.style(3, 1), Some(&StyleSet::default()));
    assert_eq!(ws.value(3, 1), CellValue::string("Narrow"));
}

#[test]
fn test_footers_follow_body() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    sheet.create_header(false).unwrap().create_header_name("Report").unwrap();
    let main = sheet.create_header(true).unwrap();
    main.create_header_name("Name").unwrap();
    main.create_header_name("Score").unwrap();
    sheet.row_data.push_row([CellValue::from("Ann"), CellValue::from(90)]);

    let total_style = StyleSet::default().bold(true);
    let footer = sheet.create_footer();
    footer.height = 30.0;
    footer
        .create_footer_name("Total")
        .unwrap()
        .with_style(total_style.clone());
    footer.create_footer_name("90").unwrap();
    sheet
        .create_footer()
        .create_footer_name("Signed")
        .unwrap()
        .with_colspan(2);

    let sink = render(&workbook);
    let ws = sink.document().worksheet(0).unwrap();

    // k = 2 headers, m = 1 body row
    assert_eq!(ws.value(1, 4), CellValue::string("Total"));
    assert_eq!(ws.value(2, 4), CellValue::string("90"));
    assert_eq!(ws.style(1, 4), Some(&total_style));
    assert_eq!(ws.row_height(4), Some(30.0));
    assert_eq!(ws.value(1, 5), CellValue::string("Signed"));
    assert_eq!(merges(ws), vec!["A5:B5"]);
}

#[test]
fn test_header_merges_use_resolved_rows() {
    let mut workbook = Workbook::new();
    let sheet = workbook.create_sheet();
    sheet
        .create_header(false)
        .unwrap()
        .create_header_name("Q1")
        .unwrap()
        .with_colspan(2);
    let main = sheet.create_header(true).unwrap();
    main.create_header_name("Name").unwrap();
    main.create_header_name("Period").unwrap().with_colspan(2);

    let mut sink = RecordingSink::new();
    SheetComposer::new(&mut sink)
        .compose_workbook(&workbook)
        .unwrap();

    let merged: Vec<&str> = sink
        .instructions()
        .iter()
        .filter_map(|op| match op {
            Instruction::MergeRange { range } => Some(range.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(merged, vec!["A1:B1", "B2:C2"]);
}

#[test]
fn test_multiple_sheets_become_worksheets() {
    let mut workbook = Workbook::new();
    scores_sheet(workbook.create_sheet());
    let second = workbook.create_sheet();
    second.title = "Empty".to_string();
    second.create_header(true).unwrap().create_header_name("X").unwrap();

    let sink = render(&workbook);
    let doc = sink.document();
    assert_eq!(doc.sheet_count(), 2);
    assert_eq!(doc.worksheet(1).unwrap().name(), "Empty");
    assert_eq!(doc.worksheet(1).unwrap().last_row(), 1);
}

#[test]
fn test_default_titles_collide_on_second_sheet() {
    let mut workbook = Workbook::new();
    for _ in 0..2 {
        workbook
            .create_sheet()
            .create_header(true)
            .unwrap()
            .create_header_name("A")
            .unwrap();
    }

    let mut sink = XlsxSink::new();
    let err = SheetComposer::new(&mut sink)
        .compose_workbook(&workbook)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tabula_core::Error::DuplicateSheetName(_))
    ));
}
