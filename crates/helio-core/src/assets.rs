//! Texture registry and host-supplied manifest.
//!
//! The core never decodes images. It assigns a slot index to every textured
//! planet; the host fetches each slot's file and reports failures back, at
//! which point the planet falls back to its flat catalog color.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bodies::{planet_defs, PlanetVisual};

/// Host-supplied override map: planet name → texture path.
/// Loaded from a JSON string at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    pub textures: HashMap<String, String>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One texture slot.
#[derive(Debug, Clone)]
pub struct TextureEntry {
    /// Planet this texture belongs to.
    pub planet: String,
    /// Path the host should fetch.
    pub path: String,
    /// Set when the host reports the load failed.
    pub failed: bool,
}

/// Slot table for all textured planets, in catalog order.
#[derive(Debug, Clone)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// Build the registry from the catalog's default texture paths.
    pub fn from_catalog() -> Self {
        let entries = planet_defs()
            .iter()
            .filter_map(|def| match def.visual {
                PlanetVisual::Texture { path, .. } => Some(TextureEntry {
                    planet: def.name.to_string(),
                    path: path.to_string(),
                    failed: false,
                }),
                PlanetVisual::Color(_) => None,
            })
            .collect();
        Self { entries }
    }

    /// Override texture paths from a host manifest. Entries for planets
    /// without a texture slot are ignored with a warning.
    pub fn apply_manifest(&mut self, manifest: &TextureManifest) {
        for (planet, path) in &manifest.textures {
            match self.entries.iter_mut().find(|e| &e.planet == planet) {
                Some(entry) => {
                    entry.path = path.clone();
                    entry.failed = false;
                }
                None => log::warn!("texture manifest names unknown planet {planet:?}"),
            }
        }
    }

    /// Slot index for a planet, if it has one.
    pub fn slot_for(&self, planet: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|e| e.planet == planet)
            .map(|i| i as u32)
    }

    /// Mark a slot's texture as failed to load.
    pub fn mark_failed(&mut self, slot: u32) {
        match self.entries.get_mut(slot as usize) {
            Some(entry) => {
                entry.failed = true;
                log::warn!("texture {:?} failed to load, using flat color", entry.path);
            }
            None => log::warn!("texture failure reported for unknown slot {slot}"),
        }
    }

    pub fn is_failed(&self, slot: u32) -> bool {
        self.entries
            .get(slot as usize)
            .map(|e| e.failed)
            .unwrap_or(true)
    }

    pub fn path(&self, slot: u32) -> Option<&str> {
        self.entries.get(slot as usize).map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_registry_has_all_textured_planets() {
        let registry = TextureRegistry::from_catalog();
        assert_eq!(registry.len(), 4);
        for name in ["Earth", "Jupiter", "Saturn", "Neptune"] {
            assert!(registry.slot_for(name).is_some(), "missing slot for {name}");
        }
        assert!(registry.slot_for("Mercury").is_none());
    }

    #[test]
    fn manifest_overrides_path() {
        let mut registry = TextureRegistry::from_catalog();
        let manifest = TextureManifest::from_json(
            r#"{ "textures": { "Earth": "cdn/earth-2k.png", "Vulcan": "nope.png" } }"#,
        )
        .unwrap();
        registry.apply_manifest(&manifest);

        let slot = registry.slot_for("Earth").unwrap();
        assert_eq!(registry.path(slot), Some("cdn/earth-2k.png"));
        // Unknown planets are ignored, registry size unchanged.
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(TextureManifest::from_json("{ nope").is_err());
    }

    #[test]
    fn failed_slot_sticks() {
        let mut registry = TextureRegistry::from_catalog();
        let slot = registry.slot_for("Neptune").unwrap();
        assert!(!registry.is_failed(slot));
        registry.mark_failed(slot);
        assert!(registry.is_failed(slot));
        // Out-of-range slots read as failed.
        assert!(registry.is_failed(99));
    }
}
