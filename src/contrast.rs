//! Contrast Selector
//!
//! A curated lookup, not a luminance formula.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::GarmentColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Garments that take white lettering.
pub const WHITE_TEXT_COLORS: [GarmentColor; 5] = [
    GarmentColor::Black,
    GarmentColor::Maroon,
    GarmentColor::Blue,
    GarmentColor::Purple,
    GarmentColor::Green,
];

pub fn pick_text_color(garment: GarmentColor) -> TextColor {
    if WHITE_TEXT_COLORS.contains(&garment) {
        TextColor::White
    } else {
        TextColor::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_set() {
        for color in WHITE_TEXT_COLORS {
            assert_eq!(pick_text_color(color), TextColor::White, "{color}");
        }
    }

    #[test]
    fn test_everything_else_is_black() {
        for color in GarmentColor::ALL.iter().filter(|c| !WHITE_TEXT_COLORS.contains(c)) {
            assert_eq!(pick_text_color(*color), TextColor::Black, "{color}");
        }
        assert_eq!(pick_text_color(GarmentColor::Red), TextColor::Black);
        assert_eq!(pick_text_color(GarmentColor::Lightblue), TextColor::Black);
    }
}
