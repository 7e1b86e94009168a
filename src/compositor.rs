//! Layer Compositor - Single Entry Point
//!
//! CRITICAL: compose MUST validate first. An invalid design produces no spec,
//! never a partial one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{FontChoice, GarmentColor, ShadowMode};
use crate::contrast::pick_text_color;
use crate::layers::{CompositionSpec, LayerSpec, Position, TextStyleSpec};
use crate::profile::GarmentProfile;
use crate::shadow::shadow_layers_with;
use crate::validation::{clamp_name, validate, ValidationResult};

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static COMPOSE_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_compose_call_count() -> u32 {
    COMPOSE_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_compose_call_count() {
    COMPOSE_CALL_COUNT.store(0, Ordering::SeqCst);
}

/// Everything the user chose. Equal inputs compose to equal specs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignInput {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub color: GarmentColor,
    #[serde(default)]
    pub font: FontChoice,
    #[serde(default)]
    pub shadow: ShadowMode,
}

impl DesignInput {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            color: GarmentColor::DEFAULT,
            font: FontChoice::default(),
            shadow: ShadowMode::None,
        }
    }

    pub fn with_color(self, color: GarmentColor) -> Self {
        Self { color, ..self }
    }

    pub fn with_font(self, font: FontChoice) -> Self {
        Self { font, ..self }
    }

    pub fn with_shadow(self, shadow: ShadowMode) -> Self {
        Self { shadow, ..self }
    }

    /// Applies the entry-time corrections: name clamp and shadow reset.
    pub fn normalized(self, profile: &GarmentProfile) -> Self {
        Self {
            name: clamp_name(&self.name, profile.name.max_chars),
            shadow: self.shadow.after_color_change(self.color),
            ..self
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate(&self.name, &self.number)
    }
}

/// The compositor - turns a design into an ordered layer list
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    profile: GarmentProfile,
}

impl Compositor {
    pub fn new(profile: GarmentProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &GarmentProfile {
        &self.profile
    }

    /// Compose a design
    ///
    /// Returns `None` whenever validation reports an error.
    pub fn compose(&self, input: &DesignInput) -> Option<CompositionSpec> {
        #[cfg(feature = "test-hooks")]
        COMPOSE_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        // MANDATORY: no spec for an invalid design.
        let validation = input.validate();
        if validation.has_errors() {
            debug!(errors = ?validation.errors(), "composition suppressed");
            return None;
        }

        let profile = &self.profile;
        let text_color = pick_text_color(input.color);
        let mut layers = Vec::with_capacity(6);

        let [width, height] = profile.canvas;
        layers.push(LayerSpec::Base {
            public_id: profile.base_image.clone(),
            width,
            height,
        });

        if input.color != GarmentColor::DEFAULT {
            layers.push(LayerSpec::RecolorEffect {
                region: profile.recolor_region.clone(),
                target_color: input.color,
            });
        }

        layers.push(LayerSpec::text(
            input.number.as_str(),
            TextStyleSpec::bold_centered(
                profile.number.font.as_str(),
                profile.number.size,
                text_color,
            ),
            Position::north(0, profile.number.offset_y),
        ));

        let name_size = profile.name.sizing.size_for(&input.name);
        let [fit_w, fit_h] = profile.name.fit_box;
        let name_style = TextStyleSpec::bold_centered(input.font.family(), name_size, text_color)
            .with_fit_box(fit_w, fit_h);
        let name_position = Position::north(0, profile.name.offset_y);

        layers.extend(shadow_layers_with(
            profile,
            &input.name,
            &name_style,
            name_position,
            input.shadow,
            input.color,
        ));

        layers.push(LayerSpec::text(input.name.as_str(), name_style, name_position));

        debug!(
            color = %input.color,
            font = %input.font,
            name_size,
            layers = layers.len(),
            "composed preview"
        );

        Some(CompositionSpec::new(layers))
    }
}

/// Compose under the reference profile.
pub fn compose(input: &DesignInput) -> Option<CompositionSpec> {
    Compositor::default().compose(input)
}
