//! Content domain: data-driven animator settings loaded at startup.

mod loader;
mod settings;

pub use loader::{ContentLoadError, load_single_file, parse_single};
pub use settings::{AnimatorSettings, SETTINGS_PATH};

use bevy::prelude::*;

use crate::content::settings::load_animator_settings;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AnimatorSettings>()
            .init_resource::<AnimatorSettings>()
            .add_systems(PreStartup, load_animator_settings);
    }
}
