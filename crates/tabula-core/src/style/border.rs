//! Border style types

use std::str::FromStr;

/// Border style for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    /// Top border
    pub top: BorderLineStyle,
    /// Left border
    pub left: BorderLineStyle,
    /// Bottom border
    pub bottom: BorderLineStyle,
    /// Right border
    pub right: BorderLineStyle,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::all(BorderLineStyle::Thin)
    }
}

impl BorderStyle {
    /// Set all four edges to the same style
    pub fn all(style: BorderLineStyle) -> Self {
        Self {
            top: style,
            left: style,
            bottom: style,
            right: style,
        }
    }

    /// No borders at all
    pub fn none() -> Self {
        Self::all(BorderLineStyle::None)
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|s| *s == BorderLineStyle::None)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
}

impl BorderLineStyle {
    /// The SpreadsheetML spelling, `None` for no border
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            BorderLineStyle::None => None,
            BorderLineStyle::Thin => Some("thin"),
            BorderLineStyle::Medium => Some("medium"),
            BorderLineStyle::Thick => Some("thick"),
            BorderLineStyle::Dashed => Some("dashed"),
            BorderLineStyle::Dotted => Some("dotted"),
            BorderLineStyle::Double => Some("double"),
            BorderLineStyle::Hair => Some("hair"),
        }
    }
}

impl FromStr for BorderLineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BorderLineStyle::None),
            "thin" => Ok(BorderLineStyle::Thin),
            "medium" => Ok(BorderLineStyle::Medium),
            "thick" => Ok(BorderLineStyle::Thick),
            "dashed" => Ok(BorderLineStyle::Dashed),
            "dotted" => Ok(BorderLineStyle::Dotted),
            "double" => Ok(BorderLineStyle::Double),
            "hair" => Ok(BorderLineStyle::Hair),
            other => Err(format!("unknown border style '{}'", other)),
        }
    }
}
