//! Fill/background style types

use std::str::FromStr;

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillStyle {
    /// Pattern kind
    pub pattern: PatternType,
    /// Foreground color (the visible color of a solid fill)
    pub foreground: Color,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::solid(Color::WHITE)
    }
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            foreground: color,
        }
    }

    /// No fill (transparent)
    pub fn none() -> Self {
        Self {
            pattern: PatternType::None,
            foreground: Color::Auto,
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        self.pattern == PatternType::None
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    /// The SpreadsheetML spelling of this pattern
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }
}

impl FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PatternType::None),
            "solid" => Ok(PatternType::Solid),
            "mediumGray" => Ok(PatternType::MediumGray),
            "darkGray" => Ok(PatternType::DarkGray),
            "lightGray" => Ok(PatternType::LightGray),
            "gray125" => Ok(PatternType::Gray125),
            "gray0625" => Ok(PatternType::Gray0625),
            other => Err(format!("unknown fill pattern '{}'", other)),
        }
    }
}
