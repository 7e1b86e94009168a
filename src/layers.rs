//! Layer Model
//!
//! Plain values handed to the rendering service. Order in a
//! [`CompositionSpec`] is draw order: later layers cover earlier ones.

use serde::{Deserialize, Serialize};

use crate::catalog::GarmentColor;
use crate::contrast::TextColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    North,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::North => "north",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FitBox {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleSpec {
    pub font: String,
    pub point_size: u32,
    pub weight: FontWeight,
    pub alignment: TextAlignment,
    pub color: TextColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_box: Option<FitBox>,
}

impl TextStyleSpec {
    /// Bold, centered text; the only style the designer produces.
    pub fn bold_centered(font: impl Into<String>, point_size: u32, color: TextColor) -> Self {
        Self {
            font: font.into(),
            point_size,
            weight: FontWeight::Bold,
            alignment: TextAlignment::Center,
            color,
            fit_box: None,
        }
    }

    pub fn with_fit_box(self, width: u32, height: u32) -> Self {
        Self { fit_box: Some(FitBox { width, height }), ..self }
    }

    pub fn with_color(self, color: TextColor) -> Self {
        Self { color, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub gravity: Gravity,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Position {
    pub fn north(offset_x: i32, offset_y: i32) -> Self {
        Self { gravity: Gravity::North, offset_x, offset_y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerSpec {
    /// Base garment asset, fill-resized to the canvas.
    Base { public_id: String, width: u32, height: u32 },
    /// Region-aware recolor performed by the rendering service.
    RecolorEffect { region: String, target_color: GarmentColor },
    TextOverlay { content: String, style: TextStyleSpec, position: Position },
}

impl LayerSpec {
    pub fn text(content: impl Into<String>, style: TextStyleSpec, position: Position) -> Self {
        LayerSpec::TextOverlay { content: content.into(), style, position }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CompositionSpec {
    pub layers: Vec<LayerSpec>,
}

impl CompositionSpec {
    pub fn new(layers: Vec<LayerSpec>) -> Self {
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn recolor_target(&self) -> Option<GarmentColor> {
        self.layers.iter().find_map(|layer| match layer {
            LayerSpec::RecolorEffect { target_color, .. } => Some(*target_color),
            _ => None,
        })
    }

    pub fn text_layers(&self) -> impl Iterator<Item = (&str, &TextStyleSpec, &Position)> {
        self.layers.iter().filter_map(|layer| match layer {
            LayerSpec::TextOverlay { content, style, position } => {
                Some((content.as_str(), style, position))
            }
            _ => None,
        })
    }
}
