//! Design Session - the single writer
//!
//! Every edit goes through a setter so validation and the shadow reset run as
//! transitions, not as render-time checks. `preview` remembers only the last
//! input it composed; any other input discards it.

use thiserror::Error;
use tracing::{debug, trace};

use crate::catalog::{FontChoice, GarmentColor, ShadowMode};
use crate::compositor::{Compositor, DesignInput};
use crate::layers::CompositionSpec;
use crate::profile::GarmentProfile;
use crate::validation::{clamp_name, ValidationResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Shadow is not available on {0}")]
    ShadowUnavailable(GarmentColor),
}

#[derive(Debug)]
pub struct DesignSession {
    compositor: Compositor,
    input: DesignInput,
    validation: ValidationResult,
    last: Option<(DesignInput, Option<CompositionSpec>)>,
}

impl DesignSession {
    /// Starts from the storefront defaults: "John", number 10, blue, Arial.
    pub fn new() -> Self {
        Self::with_profile(GarmentProfile::reference())
    }

    pub fn with_profile(profile: GarmentProfile) -> Self {
        let input = DesignInput::new("John", "10");
        let validation = input.validate();
        Self {
            compositor: Compositor::new(profile),
            input,
            validation,
            last: None,
        }
    }

    pub fn input(&self) -> &DesignInput {
        &self.input
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn shadow_selectable(&self) -> bool {
        !self.input.color.disables_shadow()
    }

    pub fn set_name(&mut self, name: &str) {
        self.input.name = clamp_name(name, self.compositor.profile().name.max_chars);
        self.revalidate();
    }

    pub fn set_number(&mut self, number: &str) {
        self.input.number = number.to_string();
        self.revalidate();
    }

    pub fn set_color(&mut self, color: GarmentColor) {
        self.input.color = color;
        let shadow = self.input.shadow.after_color_change(color);
        if shadow != self.input.shadow {
            debug!(%color, "shadow selection cleared");
        }
        self.input.shadow = shadow;
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.input.font = font;
    }

    /// Rejected, leaving the selection unchanged, when the color disables shadows.
    pub fn set_shadow(&mut self, shadow: ShadowMode) -> Result<(), SessionError> {
        if !shadow.allowed_on(self.input.color) {
            return Err(SessionError::ShadowUnavailable(self.input.color));
        }
        self.input.shadow = shadow;
        Ok(())
    }

    /// Current preview, or `None` while a field is invalid.
    pub fn preview(&mut self) -> Option<CompositionSpec> {
        if self.validation.has_errors() {
            return None;
        }
        if let Some((input, spec)) = &self.last {
            if *input == self.input {
                trace!("preview memo hit");
                return spec.clone();
            }
        }
        let spec = self.compositor.compose(&self.input);
        self.last = Some((self.input.clone(), spec.clone()));
        spec
    }

    fn revalidate(&mut self) {
        self.validation = self.input.validate();
    }
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_valid_with_preview() {
        let mut session = DesignSession::new();
        assert!(session.validation().is_valid());
        assert!(session.preview().is_some());
    }

    #[test]
    fn test_every_keystroke_revalidates() {
        let mut session = DesignSession::new();
        session.set_name("");
        assert_eq!(session.validation().name_error, "Name cannot be empty.");
        assert!(session.preview().is_none());

        session.set_name("J");
        assert!(session.validation().is_valid());

        session.set_number("  ");
        assert_eq!(session.validation().number_error, "Number cannot be empty.");
        assert!(session.preview().is_none());
    }

    #[test]
    fn test_name_is_clamped() {
        let mut session = DesignSession::new();
        session.set_name(&"N".repeat(36));
        assert_eq!(session.input().name.chars().count(), 35);
        assert!(session.validation().is_valid());
    }

    #[test]
    fn test_disabled_color_forces_shadow_off() {
        let mut session = DesignSession::new();
        session.set_shadow(ShadowMode::Black).unwrap();
        session.set_color(GarmentColor::Orange);
        assert_eq!(session.input().shadow, ShadowMode::None);
        assert!(!session.shadow_selectable());

        // stays off when moving back to a shadow-friendly color
        session.set_color(GarmentColor::Green);
        assert_eq!(session.input().shadow, ShadowMode::None);
        assert!(session.shadow_selectable());
    }

    #[test]
    fn test_shadow_rejected_on_disabled_color() {
        let mut session = DesignSession::new();
        session.set_color(GarmentColor::White);
        assert_eq!(
            session.set_shadow(ShadowMode::Black),
            Err(SessionError::ShadowUnavailable(GarmentColor::White))
        );
        assert_eq!(session.input().shadow, ShadowMode::None);
        assert!(session.set_shadow(ShadowMode::None).is_ok());
    }

    #[test]
    fn test_preview_keeps_only_last_input() {
        let mut session = DesignSession::new();
        let mut typed = String::new();
        for ch in "Bartholomew Christopherson".chars() {
            typed.push(ch);
            session.set_name(&typed);
            assert!(session.preview().is_some());
        }

        let (input, spec) = session.last.as_ref().unwrap();
        assert_eq!(input.name, "Bartholomew Christopherson");
        assert_eq!(spec.as_ref().unwrap().text_layers().last().unwrap().0, input.name);
    }

    #[test]
    fn test_preview_tracks_input() {
        let mut session = DesignSession::new();
        let first = session.preview().unwrap();
        session.set_color(GarmentColor::Maroon);
        let second = session.preview().unwrap();
        assert_ne!(first, second);
        session.set_color(GarmentColor::Blue);
        assert_eq!(session.preview().unwrap(), first);
    }
}
