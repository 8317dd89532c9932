//! Sprites domain: the animator component attached to sheet entities.

use bevy::prelude::*;

use super::surface::MaterialTextureId;
use crate::animation::{AnimationConfig, SpriteAnimator};

/// Drives a sprite sheet on an entity's `Mesh3d` + `MeshMaterial3d<StandardMaterial>`.
///
/// Derefs to the underlying `SpriteAnimator`, so `play`, `pause`, `rewind`
/// and friends are called on the component directly.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct SpriteSheetAnimator(pub SpriteAnimator<MaterialTextureId>);

impl SpriteSheetAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self(SpriteAnimator::new(config))
    }
}

impl From<AnimationConfig> for SpriteSheetAnimator {
    fn from(config: AnimationConfig) -> Self {
        Self::new(config)
    }
}
