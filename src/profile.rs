//! Garment Profiles - Reference Sizing as Data
//!
//! A profile pins the base asset, canvas and every offset the compositor uses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::ENGINE_VERSION;

pub type ProfileId = String;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Profile {0} requires engine >= {1}, current is {2}")]
    EngineVersionMismatch(String, String, String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentProfile {
    #[serde(default = "default_id")]
    pub id: ProfileId,
    #[serde(default = "default_engine_min_version")]
    pub engine_min_version: String,
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,
    #[serde(default = "default_base_image")]
    pub base_image: String,
    #[serde(default = "default_canvas")]
    pub canvas: [u32; 2],
    #[serde(default = "default_recolor_region")]
    pub recolor_region: String,
    #[serde(default)]
    pub number: NumberLayout,
    #[serde(default)]
    pub name: NameLayout,
    #[serde(default = "default_shadow_offsets")]
    pub shadow_offsets: Vec<[i32; 2]>,
}

fn default_id() -> ProfileId { "reference".to_string() }
fn default_engine_min_version() -> String { "1.0.0".to_string() }
fn default_cloud_name() -> String { "unique-boutique".to_string() }
fn default_base_image() -> String { "shirt-06".to_string() }
fn default_canvas() -> [u32; 2] { [500, 500] }
fn default_recolor_region() -> String { "shirt".to_string() }
fn default_shadow_offsets() -> Vec<[i32; 2]> { vec![[4, 4], [8, 8]] }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLayout {
    #[serde(default = "default_number_font")]
    pub font: String,
    #[serde(default = "default_number_size")]
    pub size: u32,
    #[serde(default = "default_number_offset")]
    pub offset_y: i32,
}

fn default_number_font() -> String { "Arial".to_string() }
fn default_number_size() -> u32 { 60 }
fn default_number_offset() -> i32 { 140 }

impl Default for NumberLayout {
    fn default() -> Self {
        Self {
            font: default_number_font(),
            size: default_number_size(),
            offset_y: default_number_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLayout {
    #[serde(default = "default_name_offset")]
    pub offset_y: i32,
    #[serde(default = "default_fit_box")]
    pub fit_box: [u32; 2],
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default)]
    pub sizing: SizingRule,
}

fn default_name_offset() -> i32 { 200 }
fn default_fit_box() -> [u32; 2] { [180, 220] }
fn default_max_chars() -> usize { 35 }

impl Default for NameLayout {
    fn default() -> Self {
        Self {
            offset_y: default_name_offset(),
            fit_box: default_fit_box(),
            max_chars: default_max_chars(),
            sizing: SizingRule::default(),
        }
    }
}

/// Step function parameters for the name size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingRule {
    #[serde(default = "default_base_size")]
    pub base_size: u32,
    #[serde(default = "default_min_size")]
    pub min_size: u32,
    #[serde(default = "default_chunk_threshold")]
    pub chunk_threshold: usize,
    #[serde(default = "default_step_chars")]
    pub step_chars: usize,
    #[serde(default = "default_step_points")]
    pub step_points: u32,
}

fn default_base_size() -> u32 { 40 }
fn default_min_size() -> u32 { 20 }
fn default_chunk_threshold() -> usize { 8 }
fn default_step_chars() -> usize { 2 }
fn default_step_points() -> u32 { 7 }

impl Default for SizingRule {
    fn default() -> Self {
        Self {
            base_size: default_base_size(),
            min_size: default_min_size(),
            chunk_threshold: default_chunk_threshold(),
            step_chars: default_step_chars(),
            step_points: default_step_points(),
        }
    }
}

impl GarmentProfile {
    /// The built-in sizing every preview uses unless a profile file overrides it.
    pub fn reference() -> Self {
        Self {
            id: default_id(),
            engine_min_version: default_engine_min_version(),
            cloud_name: default_cloud_name(),
            base_image: default_base_image(),
            canvas: default_canvas(),
            recolor_region: default_recolor_region(),
            number: NumberLayout::default(),
            name: NameLayout::default(),
            shadow_offsets: default_shadow_offsets(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        let profile: GarmentProfile = serde_json::from_str(&content)?;
        profile.check_engine_version()?;
        Ok(profile)
    }

    pub fn check_engine_version(&self) -> Result<(), ProfileError> {
        let engine_ver = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| ProfileError::InvalidVersion(ENGINE_VERSION.to_string()))?;
        let min_ver = semver::Version::parse(&self.engine_min_version)
            .map_err(|_| ProfileError::InvalidVersion(self.engine_min_version.clone()))?;

        if engine_ver < min_ver {
            return Err(ProfileError::EngineVersionMismatch(
                self.id.clone(),
                self.engine_min_version.clone(),
                ENGINE_VERSION.to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GarmentProfile {
    fn default() -> Self {
        Self::reference()
    }
}

/// Profile registry - loads every `*.json` profile in a directory
pub struct ProfileRegistry {
    profiles: HashMap<ProfileId, GarmentProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self { profiles: HashMap::new() }
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, ProfileError> {
        let mut registry = Self::new();
        if dir.exists() {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if path.extension().map_or(false, |e| e == "json") {
                    match GarmentProfile::load(&path) {
                        Ok(profile) => registry.register(profile),
                        Err(e) => warn!(path = %path.display(), error = %e, "skipping profile"),
                    }
                }
            }
        }
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&GarmentProfile> {
        self.profiles.get(id)
    }

    pub fn list(&self) -> Vec<&GarmentProfile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        profiles
    }

    pub fn register(&mut self, profile: GarmentProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(GarmentProfile::reference());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_is_reference() {
        let profile: GarmentProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, GarmentProfile::reference());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let profile: GarmentProfile =
            serde_json::from_str(r#"{"id":"hoodie","canvas":[800,800],"name":{"offsetY":260}}"#)
                .unwrap();
        assert_eq!(profile.canvas, [800, 800]);
        assert_eq!(profile.name.offset_y, 260);
        assert_eq!(profile.name.fit_box, [180, 220]);
        assert_eq!(profile.number.size, 60);
    }

    #[test]
    fn test_future_engine_rejected() {
        let mut profile = GarmentProfile::reference();
        profile.engine_min_version = "99.0.0".to_string();
        assert!(matches!(
            profile.check_engine_version(),
            Err(ProfileError::EngineVersionMismatch(..))
        ));
    }

    #[test]
    fn test_registry_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut good = fs::File::create(dir.path().join("kids.json")).unwrap();
        write!(good, r#"{{"id":"kids","canvas":[400,400]}}"#).unwrap();
        let mut bad = fs::File::create(dir.path().join("broken.json")).unwrap();
        write!(bad, "not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let registry = ProfileRegistry::load_from_dir(dir.path()).unwrap();
        assert_eq!(registry.list().len(), 1);
        assert_eq!(registry.get("kids").unwrap().canvas, [400, 400]);
    }
}
