//! Animation domain: locating and configuring the sheet texture once it exists.

use std::fmt;

use bevy::log::{debug, trace, warn};

use super::config::AnimationConfig;
use super::surface::{SheetSurface, SheetTexture, Unavailable, WrapAxis, WrapMode};
use super::uv::{compute_offset, frame_repeat};

/// Attempts before a still-unbound animator logs a warning.
pub const DEFAULT_BIND_WARN_AFTER: u32 = 120;

/// Two-state machine: unbound until the host's texture is ready, then bound to
/// that texture's id until invalidated.
#[derive(Debug, Clone)]
pub struct TextureBinder<Id> {
    bound: Option<Id>,
    attempts: u32,
    warn_after: u32,
}

impl<Id> Default for TextureBinder<Id> {
    fn default() -> Self {
        Self {
            bound: None,
            attempts: 0,
            warn_after: DEFAULT_BIND_WARN_AFTER,
        }
    }
}

impl<Id: Copy + PartialEq + fmt::Debug> TextureBinder<Id> {
    pub fn new(warn_after: u32) -> Self {
        Self {
            warn_after,
            ..Self::default()
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound(&self) -> Option<Id> {
        self.bound
    }

    /// Failed attempts since creation or the last invalidation.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn warn_after(&self) -> u32 {
        self.warn_after
    }

    pub fn set_warn_after(&mut self, warn_after: u32) {
        self.warn_after = warn_after;
    }

    /// Try to bind the surface's texture and show `frame` on it.
    ///
    /// Leaves the texture untouched when any link of the chain is missing.
    /// Returns `true` immediately if already bound.
    pub fn attempt_bind<S>(&mut self, surface: &mut S, config: &AnimationConfig, frame: u32) -> bool
    where
        S: SheetSurface<TextureId = Id>,
    {
        if self.bound.is_some() {
            return true;
        }

        let mut texture = match surface.texture() {
            Ok(texture) if texture.is_image_loaded() => texture,
            Ok(_) => return self.not_ready(Unavailable::ImageLoading),
            Err(reason) => return self.not_ready(reason),
        };

        texture.set_wrap_mode(WrapAxis::U, WrapMode::Repeat);
        texture.set_wrap_mode(WrapAxis::V, WrapMode::Repeat);
        texture.set_repeat(frame_repeat(config.cols(), config.rows()));
        texture.mark_material_dirty();
        texture.set_offset(compute_offset(frame, config.cols(), config.rows()));

        let id = texture.id();
        debug!(
            "bound sprite sheet texture {:?} after {} failed attempts",
            id, self.attempts
        );
        self.bound = Some(id);
        self.attempts = 0;
        true
    }

    /// Write `frame`'s offset to the bound texture.
    ///
    /// If the surface no longer resolves to the bound texture, the binder drops
    /// back to unbound and returns `false`.
    pub fn write_offset<S>(&mut self, surface: &mut S, config: &AnimationConfig, frame: u32) -> bool
    where
        S: SheetSurface<TextureId = Id>,
    {
        let Some(bound) = self.bound else {
            return false;
        };

        match surface.texture() {
            Ok(mut texture) if texture.id() == bound => {
                texture.set_offset(compute_offset(frame, config.cols(), config.rows()));
                true
            }
            Ok(texture) => {
                debug!(
                    "sprite sheet texture changed from {:?} to {:?}, rebinding",
                    bound,
                    texture.id()
                );
                self.invalidate();
                false
            }
            Err(reason) => {
                debug!("bound sprite sheet texture lost ({}), rebinding", reason);
                self.invalidate();
                false
            }
        }
    }

    /// Forget the bound texture so the next tick binds again.
    pub fn invalidate(&mut self) {
        self.bound = None;
        self.attempts = 0;
    }

    fn not_ready(&mut self, reason: Unavailable) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        trace!("sprite sheet bind attempt {} failed: {}", self.attempts, reason);
        if self.attempts == self.warn_after {
            warn!(
                "sprite sheet texture still unavailable after {} attempts: {}",
                self.attempts, reason
            );
        }
        false
    }
}
