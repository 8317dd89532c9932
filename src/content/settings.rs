//! Content domain: animator tunables read from `animator_settings.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::loader::load_single_file;
use crate::animation::DEFAULT_BIND_WARN_AFTER;

/// Default location of the settings file.
pub const SETTINGS_PATH: &str = "assets/animator_settings.ron";

/// Resource holding settings shared by every sheet animator.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[reflect(Resource)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorSettings {
    /// Failed bind attempts before an animator logs a warning.
    pub bind_warn_after: u32,
    /// Sheet manifest JSON, relative to the working directory.
    pub manifest_path: String,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            bind_warn_after: DEFAULT_BIND_WARN_AFTER,
            manifest_path: "assets/sprites/sheets.json".to_string(),
        }
    }
}

impl AnimatorSettings {
    /// Read settings from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No animator settings at {:?}, using defaults", path);
            return Self::default();
        }

        match load_single_file::<AnimatorSettings>(path) {
            Ok(settings) => {
                info!("Loaded animator settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}; using default animator settings", e);
                Self::default()
            }
        }
    }
}

pub(crate) fn load_animator_settings(mut commands: Commands) {
    commands.insert_resource(AnimatorSettings::load_or_default(Path::new(SETTINGS_PATH)));
}
