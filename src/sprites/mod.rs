//! Sprites module for animated sprite sheets on Bevy meshes.
//!
//! This module handles:
//! - Loading the sheet manifest from JSON
//! - Binding sheet textures once their assets arrive
//! - Stepping animators every frame and writing UV offsets
//! - Rebinding when the host reports a surface came back into view

mod components;
mod events;
mod manifest;
mod surface;
mod systems;
#[cfg(test)]
mod tests;

pub use components::SpriteSheetAnimator;
pub use events::{SheetAnimationFinished, SheetTextureBound, SheetVisibilityRegained};
pub use manifest::{
    ManifestError, ManifestJson, SheetDef, SheetManifest, parse_manifest, read_manifest,
    spawn_animated_sheet,
};
pub use surface::{MaterialSurface, MaterialTexture, MaterialTextureId, top_left_translation};

use bevy::prelude::*;

use crate::sprites::systems::{
    apply_animator_settings, load_sheet_manifest, rebind_on_visibility_regained,
    tick_sprite_animators,
};

/// Reads `AnimatorSettings`, which `ContentPlugin` owns.
pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SheetManifest>()
            .add_message::<SheetVisibilityRegained>()
            .add_message::<SheetTextureBound>()
            .add_message::<SheetAnimationFinished>()
            .add_systems(Startup, load_sheet_manifest)
            .add_systems(
                Update,
                (
                    apply_animator_settings,
                    rebind_on_visibility_regained,
                    tick_sprite_animators,
                )
                    .chain(),
            );
    }
}
