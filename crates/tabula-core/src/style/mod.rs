//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`StyleSet`] - Complete cell style (font, fill, border, alignment)
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation

mod alignment;
mod border;
mod color;
mod fill;
mod font;

pub use alignment::{Alignment, HorizontalAlignment};
pub use border::{BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::FontStyle;

/// Complete cell style
///
/// The default is the layout house style: Arial 9 in black, a solid white
/// fill, thin borders on every edge and left-aligned text. Use
/// [`StyleSet::plain`] for the spreadsheet application's untouched cell look.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSet {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
}

impl StyleSet {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Style of a cell nobody has formatted
    pub fn plain() -> Self {
        Self {
            font: FontStyle::plain(),
            fill: FillStyle::none(),
            border: BorderStyle::none(),
            alignment: Alignment {
                horizontal: HorizontalAlignment::General,
            },
        }
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set all four border edges
    pub fn border(mut self, style: BorderLineStyle) -> Self {
        self.border = BorderStyle::all(style);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }
}
