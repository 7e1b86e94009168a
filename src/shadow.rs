//! Shadow Policy
//!
//! Two states, gated by the garment color. Switching to a color that cannot
//! carry a shadow resets the selection instead of hiding it at render time.

use tracing::debug;

use crate::catalog::{GarmentColor, ShadowMode};
use crate::contrast::TextColor;
use crate::layers::{LayerSpec, Position, TextStyleSpec};
use crate::profile::GarmentProfile;

impl ShadowMode {
    /// Transition applied on every color change.
    pub fn after_color_change(self, color: GarmentColor) -> ShadowMode {
        if self == ShadowMode::Black && color.disables_shadow() {
            debug!(%color, "shadow reset to none");
            ShadowMode::None
        } else {
            self
        }
    }

    /// Whether this mode can be selected on `color`.
    pub fn allowed_on(self, color: GarmentColor) -> bool {
        self == ShadowMode::None || !color.disables_shadow()
    }
}

/// Shadow copies of the name, offset down-right from `name_position`.
///
/// Returned in draw order; they must precede the name layer.
pub fn shadow_layers_with(
    profile: &GarmentProfile,
    name: &str,
    style: &TextStyleSpec,
    name_position: Position,
    mode: ShadowMode,
    color: GarmentColor,
) -> Vec<LayerSpec> {
    if mode == ShadowMode::None || color.disables_shadow() {
        return vec![];
    }

    let shadow_style = style.clone().with_color(TextColor::Black);
    profile
        .shadow_offsets
        .iter()
        .map(|[dx, dy]| {
            let position = Position {
                gravity: name_position.gravity,
                offset_x: name_position.offset_x + dx,
                offset_y: name_position.offset_y + dy,
            };
            LayerSpec::text(name, shadow_style.clone(), position)
        })
        .collect()
}

/// Shadow layers under the reference profile.
pub fn shadow_layers_for(
    name: &str,
    style: &TextStyleSpec,
    mode: ShadowMode,
    color: GarmentColor,
) -> Vec<LayerSpec> {
    let profile = GarmentProfile::reference();
    let name_position = Position::north(0, profile.name.offset_y);
    shadow_layers_with(&profile, name, style, name_position, mode, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::FitBox;

    fn name_style() -> TextStyleSpec {
        TextStyleSpec::bold_centered("Arial", 40, TextColor::White).with_fit_box(180, 220)
    }

    #[test]
    fn test_none_mode_yields_nothing() {
        let layers = shadow_layers_for("John", &name_style(), ShadowMode::None, GarmentColor::Blue);
        assert!(layers.is_empty());
    }

    #[test]
    fn test_disabled_colors_yield_nothing() {
        for color in GarmentColor::SHADOW_DISABLED {
            let layers = shadow_layers_for("John", &name_style(), ShadowMode::Black, color);
            assert!(layers.is_empty(), "{color}");
        }
    }

    #[test]
    fn test_two_black_layers_stepping_down_right() {
        let layers = shadow_layers_for("John", &name_style(), ShadowMode::Black, GarmentColor::Maroon);
        assert_eq!(layers.len(), 2);

        let offsets: Vec<_> = layers
            .iter()
            .map(|layer| match layer {
                LayerSpec::TextOverlay { content, style, position } => {
                    assert_eq!(content, "John");
                    assert_eq!(style.color, TextColor::Black);
                    assert_eq!(style.point_size, 40);
                    assert_eq!(style.fit_box, Some(FitBox { width: 180, height: 220 }));
                    (position.offset_x, position.offset_y)
                }
                other => panic!("unexpected layer {other:?}"),
            })
            .collect();
        assert_eq!(offsets, vec![(4, 204), (8, 208)]);
    }

    #[test]
    fn test_color_change_resets_shadow() {
        for color in GarmentColor::ALL {
            let next = ShadowMode::Black.after_color_change(color);
            if color.disables_shadow() {
                assert_eq!(next, ShadowMode::None, "{color}");
            } else {
                assert_eq!(next, ShadowMode::Black, "{color}");
            }
            assert_eq!(ShadowMode::None.after_color_change(color), ShadowMode::None);
        }
    }

    #[test]
    fn test_allowed_on() {
        assert!(ShadowMode::Black.allowed_on(GarmentColor::Green));
        assert!(!ShadowMode::Black.allowed_on(GarmentColor::Orange));
        assert!(ShadowMode::None.allowed_on(GarmentColor::Orange));
    }
}
