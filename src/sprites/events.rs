//! Sprites domain: messages in and out of the sheet animators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Host signal that an entity's surface may have been recreated, e.g. a
/// tracked target coming back into view. The animator rebinds on its next tick.
#[derive(Debug)]
pub struct SheetVisibilityRegained {
    pub entity: Entity,
}

impl Message for SheetVisibilityRegained {}

/// Fired when an animator binds (or rebinds) its sheet texture
#[derive(Debug)]
pub struct SheetTextureBound {
    pub entity: Entity,
}

impl Message for SheetTextureBound {}

/// Fired when a non-looping animation stops on its last frame
#[derive(Debug)]
pub struct SheetAnimationFinished {
    pub entity: Entity,
    pub frame: u32,
}

impl Message for SheetAnimationFinished {}
