//! Monogram Core - Garment Preview Composition Engine
//!
//! # The Rules
//! 1. Invalid Designs Compose to Nothing
//! 2. Layer Order Is Draw Order
//! 3. Same Design, Same Spec
//! 4. Catalog Data Is Fixed
//! 5. Pixels Belong to the Rendering Service

pub mod catalog;
pub mod profile;
pub mod validation;
pub mod sizing;
pub mod contrast;
pub mod layers;
pub mod shadow;
pub mod compositor;
pub mod hashing;
pub mod delivery;
pub mod session;

pub use catalog::{CatalogError, FontChoice, GarmentColor, ShadowMode};
pub use profile::{GarmentProfile, ProfileError, ProfileRegistry, SizingRule};
pub use validation::{clamp_name, validate, ValidationError, ValidationResult, NAME_MAX_CHARS};
pub use sizing::{compute_name_font_size, longest_chunk};
pub use contrast::{pick_text_color, TextColor};
pub use layers::{CompositionSpec, FitBox, Gravity, LayerSpec, Position, TextStyleSpec};
pub use shadow::shadow_layers_for;
pub use compositor::{compose, Compositor, DesignInput};
pub use hashing::{canonical_json, compute_request_fingerprint, fingerprint};
pub use delivery::{delivery_url, RenderRequest};
pub use session::{DesignSession, SessionError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
