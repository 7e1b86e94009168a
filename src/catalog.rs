//! Catalog - Fixed Design Choices
//!
//! Palette, fonts and shadow options are versioned static data.
//! Nothing here is computed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Unknown font: {0}")]
    UnknownFont(String),

    #[error("Unknown shadow: {0}")]
    UnknownShadow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentColor {
    Blue,
    Maroon,
    Lightblue,
    Purple,
    Green,
    Black,
    White,
    Orange,
    Red,
    Beige,
}

impl GarmentColor {
    /// Color of the undyed base asset. No recolor is needed for it.
    pub const DEFAULT: GarmentColor = GarmentColor::Blue;

    /// Palette in selector order.
    pub const ALL: [GarmentColor; 10] = [
        GarmentColor::Blue,
        GarmentColor::Maroon,
        GarmentColor::Lightblue,
        GarmentColor::Purple,
        GarmentColor::Green,
        GarmentColor::Black,
        GarmentColor::White,
        GarmentColor::Orange,
        GarmentColor::Red,
        GarmentColor::Beige,
    ];

    /// Colors on which a drop shadow is never offered.
    pub const SHADOW_DISABLED: [GarmentColor; 6] = [
        GarmentColor::Lightblue,
        GarmentColor::Black,
        GarmentColor::White,
        GarmentColor::Orange,
        GarmentColor::Red,
        GarmentColor::Beige,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentColor::Blue => "blue",
            GarmentColor::Maroon => "maroon",
            GarmentColor::Lightblue => "lightblue",
            GarmentColor::Purple => "purple",
            GarmentColor::Green => "green",
            GarmentColor::Black => "black",
            GarmentColor::White => "white",
            GarmentColor::Orange => "orange",
            GarmentColor::Red => "red",
            GarmentColor::Beige => "beige",
        }
    }

    /// Selector label: the value with its first letter capitalized.
    pub fn label(&self) -> String {
        let value = self.as_str();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn disables_shadow(&self) -> bool {
        Self::SHADOW_DISABLED.contains(self)
    }
}

impl Default for GarmentColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GarmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentColor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownColor(s.to_string()))
    }
}

/// Font used for the name overlay. The number always uses the profile font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontChoice {
    #[default]
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "AlexBrush-Regular.ttf")]
    AlexBrush,
}

impl FontChoice {
    pub const ALL: [FontChoice; 2] = [FontChoice::Arial, FontChoice::AlexBrush];

    /// Family identifier understood by the rendering service.
    pub fn family(&self) -> &'static str {
        match self {
            FontChoice::Arial => "Arial",
            FontChoice::AlexBrush => "AlexBrush-Regular.ttf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontChoice::Arial => "Arial (Default)",
            FontChoice::AlexBrush => "Alex Brush",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family())
    }
}

impl FromStr for FontChoice {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "Arial" | "arial" => Ok(FontChoice::Arial),
            "AlexBrush-Regular.ttf" | "AlexBrush" | "alexbrush" => Ok(FontChoice::AlexBrush),
            _ => Err(CatalogError::UnknownFont(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowMode {
    #[default]
    None,
    Black,
}

impl ShadowMode {
    pub const ALL: [ShadowMode; 2] = [ShadowMode::None, ShadowMode::Black];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowMode::None => "none",
            ShadowMode::Black => "black",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShadowMode::None => "No Shadow",
            ShadowMode::Black => "Black Shadow",
        }
    }
}

impl fmt::Display for ShadowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadowMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ShadowMode::None),
            "black" => Ok(ShadowMode::Black),
            _ => Err(CatalogError::UnknownShadow(s.to_string())),
        }
    }
}

/// One selectable option, as listed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub value: String,
    pub label: String,
}

pub fn color_entries() -> Vec<CatalogEntry> {
    GarmentColor::ALL
        .iter()
        .map(|c| CatalogEntry { value: c.as_str().to_string(), label: c.label() })
        .collect()
}

pub fn font_entries() -> Vec<CatalogEntry> {
    FontChoice::ALL
        .iter()
        .map(|f| CatalogEntry { value: f.family().to_string(), label: f.label().to_string() })
        .collect()
}

pub fn shadow_entries() -> Vec<CatalogEntry> {
    ShadowMode::ALL
        .iter()
        .map(|s| CatalogEntry { value: s.as_str().to_string(), label: s.label().to_string() })
        .collect()
}
