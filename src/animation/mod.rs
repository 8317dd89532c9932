//! Animation domain: engine-agnostic sprite sheet playback.
//!
//! A `SpriteAnimator` binds lazily to a host texture through `SheetSurface`,
//! then steps a frame index at a fixed rate and writes the matching UV offset.

mod animator;
mod binder;
mod clock;
mod config;
mod surface;
mod uv;

pub use animator::{SpriteAnimator, TickOutcome, TickReport};
pub use binder::{DEFAULT_BIND_WARN_AFTER, TextureBinder};
pub use clock::{FrameClock, FrameStep, step_frame};
pub use config::{AnimationConfig, AnimationConfigDef, ConfigError};
pub use surface::{SheetSurface, SheetTexture, Unavailable, WrapAxis, WrapMode};
pub use uv::{compute_offset, frame_cell, frame_repeat};
