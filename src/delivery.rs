//! Delivery - Composition to Transformation URL
//!
//! The rendering service is addressed by cloud name and base image id. This
//! module only describes the request; fetching, retries and caching belong to
//! the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

use crate::hashing::compute_request_fingerprint;
use crate::layers::{CompositionSpec, LayerSpec, Position, TextStyleSpec};
use crate::profile::GarmentProfile;
use crate::ENGINE_VERSION;

pub const DELIVERY_HOST: &str = "https://res.cloudinary.com";

/// One-shot request handed to the rendering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub profile_id: String,
    pub engine_version: String,
    pub url: String,
    pub fingerprint: String,
}

impl RenderRequest {
    pub fn new(profile: &GarmentProfile, spec: &CompositionSpec) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            profile_id: profile.id.clone(),
            engine_version: ENGINE_VERSION.to_string(),
            url: delivery_url(profile, spec),
            fingerprint: compute_request_fingerprint(&profile.id, ENGINE_VERSION, spec)?,
        })
    }
}

/// Renders `spec` as `<host>/<cloud>/image/upload/<steps...>/<public_id>`.
pub fn delivery_url(profile: &GarmentProfile, spec: &CompositionSpec) -> String {
    let mut public_id = profile.base_image.as_str();
    let mut steps: Vec<String> = vec![];

    for layer in &spec.layers {
        match layer {
            LayerSpec::Base { public_id: id, width, height } => {
                public_id = id.as_str();
                steps.push(format!("c_fill,h_{},w_{}", height, width));
            }
            LayerSpec::RecolorEffect { region, target_color } => {
                steps.push(format!("e_gen_recolor:prompt_{};to-color_{}", region, target_color));
            }
            LayerSpec::TextOverlay { content, style, position } => {
                steps.push(text_source(content, style));
                steps.push(layer_apply(position));
            }
        }
    }

    let mut url = format!("{}/{}/image/upload", DELIVERY_HOST, profile.cloud_name);
    for step in steps {
        url.push('/');
        url.push_str(&step);
    }
    url.push('/');
    url.push_str(public_id);
    url
}

fn text_source(content: &str, style: &TextStyleSpec) -> String {
    let mut out = format!(
        "co_{},l_text:{}_{}_bold_center:{}",
        style.color,
        style.font,
        style.point_size,
        escape_text(content)
    );
    if let Some(fit) = style.fit_box {
        // write! into a String cannot fail
        let _ = write!(out, ",c_fit,h_{},w_{}", fit.height, fit.width);
    }
    out
}

fn layer_apply(position: &Position) -> String {
    let mut out = format!("fl_layer_apply,g_{}", position.gravity.as_str());
    if position.offset_x != 0 {
        let _ = write!(out, ",x_{}", position.offset_x);
    }
    if position.offset_y != 0 {
        let _ = write!(out, ",y_{}", position.offset_y);
    }
    out
}

/// Percent-encodes overlay text. Slashes and commas are double-encoded so the
/// service does not read them as step or parameter separators after decoding.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(ch),
            '/' => out.push_str("%252F"),
            ',' => out.push_str("%252C"),
            _ => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "%{:02X}", byte);
                }
            }
        }
    }
    out
}
