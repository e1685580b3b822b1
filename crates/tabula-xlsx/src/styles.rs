//! XLSX styles (styles.xml) write helpers

use ahash::AHashMap;
use quick_xml::escape::escape;

use tabula_core::style::{
    Alignment, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle, HorizontalAlignment,
    PatternType, StyleSet,
};
use tabula_core::Document;

#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Global, deduplicated styles. Index corresponds to the cellXfs index (xfId).
    styles: Vec<StyleSet>,
    /// Reverse lookup from style to xfId
    xf_ids: AHashMap<StyleSet, u32>,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
}

impl XlsxStyleTable {
    pub(crate) fn build(document: &Document) -> Self {
        let mut table = Self {
            styles: Vec::new(),
            xf_ids: AHashMap::new(),
        };

        // Index 0 is always the untouched cell look
        table.intern(StyleSet::plain());

        for sheet in document.worksheets() {
            for (_addr, cell) in sheet.iter_cells() {
                if let Some(style) = &cell.style {
                    if !table.xf_ids.contains_key(style) {
                        table.intern(style.clone());
                    }
                }
            }
        }

        log::debug!("style table holds {} cell formats", table.styles.len());
        table
    }

    fn intern(&mut self, style: StyleSet) -> u32 {
        let id = self.styles.len() as u32;
        self.styles.push(style.clone());
        self.xf_ids.insert(style, id);
        id
    }

    /// xfId for a cell style; unformatted cells use 0
    pub(crate) fn xf_id_for(&self, style: Option<&StyleSet>) -> u32 {
        style
            .and_then(|s| self.xf_ids.get(s).copied())
            .unwrap_or(0)
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        // Build component tables
        let mut font_ids: AHashMap<&FontStyle, u32> = AHashMap::new();
        let mut fonts: Vec<&FontStyle> = Vec::new();

        let mut fill_ids: AHashMap<FillStyle, u32> = AHashMap::new();
        // Excel requires the first two fills to be: none and gray125
        let mut fills: Vec<FillStyle> = vec![
            FillStyle::none(),
            FillStyle {
                pattern: PatternType::Gray125,
                foreground: Color::Auto,
            },
        ];
        fill_ids.insert(FillStyle::none(), 0);

        let mut border_ids: AHashMap<BorderStyle, u32> = AHashMap::new();
        let mut borders: Vec<BorderStyle> = Vec::new();

        // Resolve component IDs for each style
        let mut resolved: Vec<ResolvedXfIds> = Vec::with_capacity(self.styles.len());

        for style in &self.styles {
            let font_id = *font_ids.entry(&style.font).or_insert_with(|| {
                fonts.push(&style.font);
                fonts.len() as u32 - 1
            });

            let fill_id = *fill_ids.entry(style.fill).or_insert_with(|| {
                fills.push(style.fill);
                fills.len() as u32 - 1
            });

            let border_id = *border_ids.entry(style.border).or_insert_with(|| {
                borders.push(style.border);
                borders.len() as u32 - 1
            });

            resolved.push(ResolvedXfIds {
                font_id,
                fill_id,
                border_id,
            });
        }

        // Write XML
        let mut xml = String::new();
        xml.push_str(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", fills.len()));
        for fill in &fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", borders.len()));
        for border in &borders {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        let plain = StyleSet::plain();
        for (style, ids) in self.styles.iter().zip(&resolved) {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, &plain, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
</styleSheet>"#,
        );

        xml
    }
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} auto=\"1\"/>"),
        other => format!("<{tag} rgb=\"{}\"/>", other.to_argb_hex()),
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !font.color.is_auto() {
        s.push_str(&write_color("color", &font.color));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape(font.name.as_str())));
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillStyle) -> String {
    match fill.pattern {
        PatternType::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        PatternType::Solid => format!(
            "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
            write_color("fgColor", &fill.foreground)
        ),
        pattern => format!(
            "<fill><patternFill patternType=\"{}\">{}</patternFill></fill>",
            pattern.as_str(),
            write_color("fgColor", &fill.foreground)
        ),
    }
}

fn write_border_edge(tag: &str, style: BorderLineStyle) -> String {
    match style.as_str() {
        None => format!("<{tag}/>"),
        Some(name) => format!("<{tag} style=\"{name}\"><color indexed=\"64\"/></{tag}>"),
    }
}

fn write_border(border: &BorderStyle) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", border.left));
    s.push_str(&write_border_edge("right", border.right));
    s.push_str(&write_border_edge("top", border.top));
    s.push_str(&write_border_edge("bottom", border.bottom));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn write_alignment(al: &Alignment) -> String {
    if al.horizontal == HorizontalAlignment::General {
        return String::new();
    }
    format!("<alignment horizontal=\"{}\"/>", al.horizontal.as_str())
}

fn write_xf(style: &StyleSet, plain: &StyleSet, ids: ResolvedXfIds) -> String {
    // apply flags
    let mut attrs = String::new();
    if style.font != plain.font {
        attrs.push_str(" applyFont=\"1\"");
    }
    if style.fill != plain.fill {
        attrs.push_str(" applyFill=\"1\"");
    }
    if style.border != plain.border {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if style.alignment != plain.alignment {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"0\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        ids.font_id, ids.fill_id, ids.border_id, attrs
    );

    let alignment_xml = write_alignment(&style.alignment);
    if alignment_xml.is_empty() {
        s.push_str("/>");
        return s;
    }

    s.push('>');
    s.push_str(&alignment_xml);
    s.push_str("</xf>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::SheetOptions;

    #[test]
    fn test_styles_are_deduplicated() {
        let mut doc = Document::new();
        doc.add_worksheet("One", SheetOptions::default()).unwrap();
        let sheet = doc.current_mut().unwrap();
        let body = StyleSet::default();
        let header = StyleSet::default().bold(true);
        sheet.set_style(1, 1, &header).unwrap();
        sheet.set_style(2, 1, &header).unwrap();
        sheet.set_style(1, 2, &body).unwrap();
        sheet.set_style(2, 2, &body).unwrap();

        let table = XlsxStyleTable::build(&doc);
        assert_eq!(table.styles.len(), 3);
        assert_eq!(table.xf_id_for(None), 0);
        assert_eq!(table.xf_id_for(Some(&header)), 1);
        assert_eq!(table.xf_id_for(Some(&body)), 2);
    }

    #[test]
    fn test_styles_xml_contains_house_style() {
        let mut doc = Document::new();
        doc.add_worksheet("One", SheetOptions::default()).unwrap();
        doc.current_mut()
            .unwrap()
            .set_style(1, 1, &StyleSet::default())
            .unwrap();

        let xml = XlsxStyleTable::build(&doc).to_styles_xml();
        assert!(xml.contains("<name val=\"Arial\"/>"));
        assert!(xml.contains("<sz val=\"9\"/>"));
        assert!(xml.contains("<patternFill patternType=\"gray125\">"));
        assert!(xml.contains("<fgColor rgb=\"FFFFFFFF\"/>"));
        assert!(xml.contains("<left style=\"thin\">"));
        assert!(xml.contains("<alignment horizontal=\"left\"/>"));
        assert!(xml.contains("<cellXfs count=\"2\">"));
    }
}
