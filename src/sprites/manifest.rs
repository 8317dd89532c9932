//! Sprite sheet manifest loading and asset management.
//!
//! Loads the sheet manifest JSON which names every animated sheet, the image
//! it lives in and how its grid plays back.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::SpriteSheetAnimator;
use crate::animation::AnimationConfig;

/// Resource containing all loaded sheet definitions.
#[derive(Resource, Default)]
pub struct SheetManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of sheet keys to their definitions.
    pub sheets: HashMap<String, SheetDef>,
    /// Loaded texture handles, keyed by sheet key.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of a single animated sheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetDef {
    /// Path to the sheet image, relative to assets/.
    pub path: String,
    /// Grid layout and playback options.
    pub animation: AnimationConfig,
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct ManifestJson {
    pub version: u32,
    #[serde(default)]
    pub sheets: HashMap<String, SheetDef>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read sheet manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sheet manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse manifest JSON. `path` is only used in the error.
pub fn parse_manifest(path: &str, contents: &str) -> Result<ManifestJson, ManifestError> {
    serde_json::from_str(contents).map_err(|source| ManifestError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Read and parse a manifest file.
pub fn read_manifest(path: &Path) -> Result<ManifestJson, ManifestError> {
    let name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: name.clone(),
        source,
    })?;
    parse_manifest(&name, &contents)
}

impl SheetManifest {
    /// Load the manifest from a JSON file and start loading every sheet image.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sheet manifest not found at {:?}, using empty manifest",
                path
            );
            return;
        }

        let manifest = match read_manifest(manifest_path) {
            Ok(m) => m,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        self.version = manifest.version;
        self.sheets = manifest.sheets;

        // Preload all textures
        for (key, def) in &self.sheets {
            let handle = asset_server.load(&def.path);
            self.textures.insert(key.clone(), handle);
        }

        info!(
            "Loaded sheet manifest v{} with {} sheets",
            self.version,
            self.sheets.len()
        );
    }

    /// Get a sheet definition by key.
    pub fn get(&self, key: &str) -> Option<&SheetDef> {
        self.sheets.get(key)
    }

    /// Get a texture handle by key.
    pub fn get_texture(&self, key: &str) -> Option<Handle<Image>> {
        self.textures.get(key).cloned()
    }

    /// Get both definition and texture for a sheet.
    pub fn get_sheet(&self, key: &str) -> Option<(&SheetDef, Handle<Image>)> {
        let def = self.sheets.get(key)?;
        let texture = self.textures.get(key)?;
        Some((def, texture.clone()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sheets.contains_key(key)
    }

    /// Get all keys matching a prefix (e.g., "fx.explosion").
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<&String> {
        let mut keys: Vec<&String> = self
            .sheets
            .keys()
            .filter(|k| k.starts_with(prefix))
            .collect();
        keys.sort();
        keys
    }

    /// Fresh animator for the sheet at `key`.
    pub fn animator(&self, key: &str) -> Option<SpriteSheetAnimator> {
        self.get(key).map(|def| SpriteSheetAnimator::new(def.animation))
    }
}

/// Spawn a textured quad playing the sheet at `key`.
///
/// Returns `None` if the manifest has no such sheet. The texture usually is
/// still loading at this point; the animator binds once it arrives.
pub fn spawn_animated_sheet(
    commands: &mut Commands,
    manifest: &SheetManifest,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    key: &str,
    size: Vec2,
    transform: Transform,
) -> Option<Entity> {
    let (def, texture) = manifest.get_sheet(key)?;

    let mesh = meshes.add(Rectangle::from_size(size));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let entity = commands
        .spawn((
            Name::new(key.to_string()),
            Mesh3d(mesh),
            MeshMaterial3d(material),
            transform,
            SpriteSheetAnimator::new(def.animation),
        ))
        .id();

    Some(entity)
}
