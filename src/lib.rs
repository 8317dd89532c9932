//! Frame-by-frame sprite sheet animation on Bevy meshes.
//!
//! `animation` holds the engine-agnostic core. `sprites` binds it to
//! `StandardMaterial` quads, and `content` loads shared settings.

pub mod animation;
pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod sprites;

use bevy::prelude::*;

/// Adds settings loading, the sheet manifest and the animator systems.
pub struct SpriteSheetPlugin;

impl Plugin for SpriteSheetPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((content::ContentPlugin, sprites::SpritesPlugin));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
