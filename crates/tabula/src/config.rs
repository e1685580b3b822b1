//! Bulk layout configuration
//!
//! A [`WorkbookConfig`] is the JSON form of a whole [`Workbook`]. Field names
//! are camelCase and colors are written as `{"argb": "FF538DD5"}`:
//!
//! ```json
//! {
//!   "sheets": [{
//!     "title": "Scores",
//!     "headers": [{ "main": true, "headerNames": [{ "title": "Name" }, { "title": "Score" }] }],
//!     "rowData": { "rows": [["Ann", 90], ["Bo", 75]] }
//!   }]
//! }
//! ```
//!
//! Loading replays the configuration through the model's factories, so the
//! same validation applies as when building by hand. Optional numbers equal
//! to zero and empty titles count as "not given"; negative ones are rejected.

use serde::Deserialize;
use tabula_core::style::{
    BorderLineStyle, Color, HorizontalAlignment, PatternType, StyleSet,
};
use tabula_core::{CellValue, HeaderFooter, SheetOptions};

use crate::layout::{ColumnEntry, EntryKind, Workbook};
use crate::{Error, Result};

/// Configuration of a whole workbook
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookConfig {
    pub sheets: Option<Vec<SheetConfig>>,
}

impl WorkbookConfig {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetConfig {
    pub title: Option<String>,
    pub option: Option<SheetOptionConfig>,
    pub header_footer: Option<HeaderFooter>,
    #[serde(default)]
    pub headers: Vec<HeaderConfig>,
    pub row_data: Option<RowDataConfig>,
    pub footers: Option<Vec<FooterConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub main: Option<bool>,
    pub height: Option<f64>,
    #[serde(default)]
    pub header_names: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub height: Option<f64>,
    #[serde(default)]
    pub footer_names: Vec<EntryConfig>,
}

/// A header or footer name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryConfig {
    pub title: Option<String>,
    pub width: Option<f64>,
    pub colspan: Option<i64>,
    pub style: Option<StylePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDataConfig {
    pub style: Option<StylePatch>,
    pub height: Option<f64>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

/// Worksheet display options as `{properties: {tabColor}, views: [{showGridLines}]}`
///
/// Giving `option` replaces the defaults entirely: no tab color unless one is
/// set, gridlines shown unless the first view hides them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetOptionConfig {
    pub properties: Option<SheetPropertiesConfig>,
    #[serde(default)]
    pub views: Vec<SheetViewConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPropertiesConfig {
    pub tab_color: Option<ArgbColor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetViewConfig {
    pub show_grid_lines: Option<bool>,
}

impl SheetOptionConfig {
    /// Resolve into sink options
    pub fn to_options(&self) -> SheetOptions {
        SheetOptions {
            tab_color: self
                .properties
                .as_ref()
                .and_then(|p| p.tab_color.as_ref())
                .map(|c| c.argb),
            show_grid_lines: self
                .views
                .first()
                .and_then(|v| v.show_grid_lines)
                .unwrap_or(true),
            header_footer: None,
        }
    }
}

/// `{"argb": "..."}`, accepting `RRGGBB` and `AARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgbColor {
    pub argb: Color,
}

/// A partial style; every field left out keeps the base style's value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylePatch {
    pub font: Option<FontPatch>,
    pub fill: Option<FillPatch>,
    pub border: Option<BorderPatch>,
    pub alignment: Option<AlignmentPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontPatch {
    pub bold: Option<bool>,
    pub color: Option<ArgbColor>,
    pub name: Option<String>,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FillPatch {
    /// Fill kind; only `"pattern"` fills exist
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub pattern: Option<PatternType>,
    pub fg_color: Option<ArgbColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BorderPatch {
    pub top: Option<EdgePatch>,
    pub left: Option<EdgePatch>,
    pub bottom: Option<EdgePatch>,
    pub right: Option<EdgePatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgePatch {
    pub style: BorderLineStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignmentPatch {
    pub horizontal: Option<HorizontalAlignment>,
}

impl StylePatch {
    /// Merge onto `base` field by field
    pub fn apply(&self, mut base: StyleSet) -> StyleSet {
        if let Some(font) = &self.font {
            if let Some(bold) = font.bold {
                base.font.bold = bold;
            }
            if let Some(color) = font.color {
                base.font.color = color.argb;
            }
            if let Some(name) = &font.name {
                base.font.name = name.clone();
            }
            if let Some(size) = font.size {
                base.font.size = size;
            }
        }
        if let Some(fill) = &self.fill {
            if let Some(pattern) = fill.pattern {
                base.fill.pattern = pattern;
            }
            if let Some(color) = fill.fg_color {
                base.fill.foreground = color.argb;
            }
        }
        if let Some(border) = &self.border {
            let edges = [
                (&border.top, &mut base.border.top),
                (&border.left, &mut base.border.left),
                (&border.bottom, &mut base.border.bottom),
                (&border.right, &mut base.border.right),
            ];
            for (patch, edge) in edges {
                if let Some(patch) = patch {
                    *edge = patch.style;
                }
            }
        }
        if let Some(horizontal) = self.alignment.and_then(|a| a.horizontal) {
            base.alignment.horizontal = horizontal;
        }
        base
    }

    /// Merge onto the default style
    pub fn resolve(&self) -> StyleSet {
        self.apply(StyleSet::default())
    }
}

/// A configured width or height; zero counts as not given
fn dimension(field: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if v < 0.0 => Err(Error::InvalidDimension { field, value: v }),
        Some(v) if v == 0.0 => Ok(None),
        other => Ok(other),
    }
}

fn apply_entry(sheet: u32, entry: &mut ColumnEntry, config: &EntryConfig) -> Result<()> {
    if let Some(width) = dimension("width", config.width)? {
        entry.width = width;
    }
    match config.colspan {
        None | Some(0) => {}
        Some(colspan) => {
            entry.colspan = u32::try_from(colspan).map_err(|_| Error::InvalidColspan {
                sheet,
                key: entry.key().to_string(),
                colspan,
            })?;
        }
    }
    if let Some(style) = &config.style {
        entry.style = style.resolve();
    }
    Ok(())
}

impl Workbook {
    /// Build a workbook from a configuration
    pub fn from_config(config: &WorkbookConfig) -> Result<Self> {
        let mut workbook = Workbook::new();
        workbook.load_config(config)?;
        Ok(workbook)
    }

    /// Append every sheet of `config`
    ///
    /// Stops at the first invalid element. Sheets created before the failure
    /// stay in the workbook.
    pub fn load_config(&mut self, config: &WorkbookConfig) -> Result<()> {
        let sheets = config.sheets.as_ref().ok_or(Error::MissingSheets)?;

        for sheet_config in sheets {
            let sheet = self.create_sheet();
            let sheet_id = sheet.id();
            if let Some(title) = sheet_config.title.as_deref().filter(|t| !t.is_empty()) {
                sheet.title = title.to_string();
            }
            if let Some(option) = &sheet_config.option {
                sheet.option = option.to_options();
            }
            if let Some(header_footer) = &sheet_config.header_footer {
                sheet.option.header_footer = Some(header_footer.clone());
            }

            for header_config in &sheet_config.headers {
                let main = header_config.main.ok_or(Error::MissingMainFlag)?;
                let header = sheet.create_header(main)?;
                if let Some(height) = dimension("height", header_config.height)? {
                    header.height = height;
                }
                for name in &header_config.header_names {
                    let title = name.title.as_deref().ok_or(Error::MissingTitle {
                        kind: EntryKind::Header,
                    })?;
                    apply_entry(sheet_id, header.create_header_name(title)?, name)?;
                }
            }

            if let Some(row_data) = &sheet_config.row_data {
                if let Some(style) = &row_data.style {
                    sheet.row_data.style = style.resolve();
                }
                if let Some(height) = dimension("height", row_data.height)? {
                    sheet.row_data.height = height;
                }
                sheet.row_data.rows = row_data.rows.clone();
            }

            for footer_config in sheet_config.footers.iter().flatten() {
                let footer = sheet.create_footer();
                if let Some(height) = dimension("height", footer_config.height)? {
                    footer.height = height;
                }
                for name in &footer_config.footer_names {
                    let title = name.title.as_deref().ok_or(Error::MissingTitle {
                        kind: EntryKind::Footer,
                    })?;
                    apply_entry(sheet_id, footer.create_footer_name(title)?, name)?;
                }
            }

            tracing::debug!(
                "Loaded sheet {} ({}) with {} header(s), {} footer(s)",
                sheet.id(),
                sheet.title,
                sheet.headers().len(),
                sheet.footers().len()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_patch_merges_onto_defaults() {
        let patch: StylePatch = serde_json::from_str(
            r#"{"font": {"bold": true, "color": {"argb": "FFFFFFFF"}},
                "border": {"bottom": {"style": "double"}},
                "alignment": {"horizontal": "center"}}"#,
        )
        .unwrap();

        let style = patch.resolve();
        assert!(style.font.bold);
        assert_eq!(style.font.name, "Arial");
        assert_eq!(style.font.color, Color::WHITE);
        assert_eq!(style.border.bottom, BorderLineStyle::Double);
        assert_eq!(style.border.top, BorderLineStyle::Thin);
        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Center);
        assert_eq!(style.fill, StyleSet::default().fill);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let err = serde_json::from_str::<StylePatch>(r#"{"font": {"blod": true}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_fill_patch() {
        let patch: StylePatch = serde_json::from_str(
            r#"{"fill": {"type": "pattern", "pattern": "solid", "fgColor": {"argb": "FF538DD5"}}}"#,
        )
        .unwrap();
        let style = patch.resolve();
        assert_eq!(style.fill.pattern, PatternType::Solid);
        assert_eq!(style.fill.foreground.to_hex(), "FF538DD5");
    }

    #[test]
    fn test_option_replaces_defaults() {
        let option: SheetOptionConfig = serde_json::from_str(
            r#"{"properties": {"tabColor": {"argb": "FFFF0000"}}, "views": [{"showGridLines": false}]}"#,
        )
        .unwrap();
        let options = option.to_options();
        assert_eq!(options.tab_color, Some(Color::argb(0xFF, 0xFF, 0, 0)));
        assert!(!options.show_grid_lines);

        let bare = SheetOptionConfig::default().to_options();
        assert_eq!(bare.tab_color, None);
        assert!(bare.show_grid_lines);
    }

    #[test]
    fn test_zero_values_mean_not_given() {
        let config = WorkbookConfig::from_json(
            r#"{"sheets": [{"title": "", "headers": [{"main": true, "height": 0,
                "headerNames": [{"title": "A", "width": 0, "colspan": 0}]}]}]}"#,
        )
        .unwrap();
        let workbook = Workbook::from_config(&config).unwrap();

        let sheet = &workbook.sheets()[0];
        assert_eq!(sheet.title, "Sheet 1");
        let header = sheet.main_header().unwrap();
        assert_eq!(header.height, 20.5);
        assert_eq!(header.header_names()[0].width, 20.0);
        assert_eq!(header.header_names()[0].colspan, 1);
    }
}
