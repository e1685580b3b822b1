//! XLSX writer

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::XlsxResult;
use crate::styles::XlsxStyleTable;
use tabula_core::{Cell, CellAddress, CellValue, Document, Worksheet};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a document to a file path
    pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(document, file)
    }

    /// Write a document into an in-memory buffer
    pub fn write_to_vec(document: &Document) -> XlsxResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        Self::write(document, &mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Write a document to a writer
    pub fn write<W: Write + Seek>(document: &Document, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        // Build a document-wide style table.
        let style_table = XlsxStyleTable::build(document);

        // Write [Content_Types].xml
        Self::write_content_types(&mut zip, document)?;

        // Write _rels/.rels
        Self::write_root_rels(&mut zip)?;

        // Write xl/workbook.xml
        Self::write_workbook_xml(&mut zip, document)?;

        // Write xl/_rels/workbook.xml.rels
        Self::write_workbook_rels(&mut zip, document)?;

        // Write xl/styles.xml
        Self::write_styles_xml(&mut zip, &style_table)?;

        for (i, sheet) in document.worksheets().enumerate() {
            Self::write_worksheet(&mut zip, sheet, i, &style_table)?;
        }

        zip.finish()?;
        log::debug!("wrote xlsx package with {} sheet(s)", document.sheet_count());
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..document.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in document.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        document: &Document,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..document.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        // Styles relationship
        let styles_rid = document.sheet_count() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        let xml = style_table.to_styles_xml();
        zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Worksheet,
        index: usize,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let sheet_options = sheet.options();

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if let Some(color) = &sheet_options.tab_color {
            content.push_str(&format!(
                "\n    <sheetPr><tabColor rgb=\"{}\"/></sheetPr>",
                color.to_argb_hex()
            ));
        }

        content.push_str(&format!(
            "\n    <sheetViews><sheetView showGridLines=\"{}\" workbookViewId=\"0\"/></sheetViews>",
            if sheet_options.show_grid_lines { 1 } else { 0 }
        ));

        content.push_str("\n    <sheetFormatPr defaultRowHeight=\"15\"/>");

        Self::write_columns(&mut content, sheet);

        content.push_str("\n    <sheetData>");

        // Rows carry cells and/or a custom height
        let mut rows: BTreeMap<u32, Vec<(CellAddress, &Cell)>> = BTreeMap::new();
        for (addr, cell) in sheet.iter_cells() {
            rows.entry(addr.row_ordinal()).or_default().push((addr, cell));
        }
        let row_numbers: BTreeSet<u32> = rows
            .keys()
            .chain(sheet.custom_row_heights().keys())
            .copied()
            .collect();

        for row in row_numbers {
            match sheet.row_height(row) {
                Some(height) => content.push_str(&format!(
                    "\n        <row r=\"{}\" ht=\"{}\" customHeight=\"1\">",
                    row, height
                )),
                None => content.push_str(&format!("\n        <row r=\"{}\">", row)),
            }

            for (addr, cell) in rows.get(&row).map(Vec::as_slice).unwrap_or_default() {
                Self::write_cell(&mut content, *addr, cell, style_table);
            }

            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>");

        // Write merged cells (if any)
        let merged_regions = sheet.merged_regions();
        if !merged_regions.is_empty() {
            content.push_str(&format!(
                "\n    <mergeCells count=\"{}\">",
                merged_regions.len()
            ));
            for range in merged_regions {
                content.push_str(&format!("\n        <mergeCell ref=\"{}\"/>", range));
            }
            content.push_str("\n    </mergeCells>");
        }

        if let Some(header_footer) = sheet_options
            .header_footer
            .as_ref()
            .filter(|hf| !hf.is_empty())
        {
            content.push_str("\n    <headerFooter>");
            if let Some(header) = &header_footer.odd_header {
                content.push_str(&format!("<oddHeader>{}</oddHeader>", escape(header.as_str())));
            }
            if let Some(footer) = &header_footer.odd_footer {
                content.push_str(&format!("<oddFooter>{}</oddFooter>", escape(footer.as_str())));
            }
            content.push_str("</headerFooter>");
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        log::debug!(
            "wrote sheet {} ({} cells, {} merges)",
            sheet.name(),
            sheet.cell_count(),
            merged_regions.len()
        );
        Ok(())
    }

    fn write_columns(content: &mut String, sheet: &Worksheet) {
        let mut columns = sheet.columns().peekable();
        if columns.peek().is_none() {
            return;
        }

        content.push_str("\n    <cols>");
        for column in columns {
            content.push_str(&format!(
                "\n        <col min=\"{0}\" max=\"{0}\" width=\"{1}\" customWidth=\"1\"/>",
                column.ordinal, column.width
            ));
        }
        content.push_str("\n    </cols>");
    }

    fn write_cell(
        content: &mut String,
        addr: CellAddress,
        cell: &Cell,
        style_table: &XlsxStyleTable,
    ) {
        let cell_ref = addr.to_a1_string();

        let xf_id = style_table.xf_id_for(cell.style.as_ref());
        let style_attr = if xf_id != 0 {
            format!(" s=\"{}\"", xf_id)
        } else {
            String::new()
        };

        match &cell.value {
            CellValue::Number(n) if n.is_finite() => {
                content.push_str(&format!(
                    "\n            <c r=\"{}\"{}><v>{}</v></c>",
                    cell_ref, style_attr, n
                ));
            }
            // NaN and infinities have no numeric cell representation
            CellValue::Number(n) => {
                content.push_str(&format!(
                    "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                    cell_ref, style_attr, n
                ));
            }
            CellValue::String(s) => {
                content.push_str(&format!(
                    "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                    cell_ref,
                    style_attr,
                    escape(s.as_str())
                ));
            }
            CellValue::Boolean(b) => {
                content.push_str(&format!(
                    "\n            <c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                    cell_ref,
                    style_attr,
                    if *b { 1 } else { 0 }
                ));
            }
            CellValue::Empty => {
                // Preserve style-only cells
                if xf_id != 0 {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"{}/>",
                        cell_ref, style_attr
                    ));
                }
            }
        }
    }
}
