//! Animation domain: validated sprite sheet configuration.

use serde::Deserialize;
use thiserror::Error;

/// Reasons an `AnimationConfig` is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },
    #[error("{field} is too large: {value}")]
    TooLarge { field: &'static str, value: i64 },
    #[error("total_frames ({total_frames}) exceeds the grid capacity of {capacity} cells")]
    TooManyFrames { total_frames: u32, capacity: u64 },
}

/// Grid layout and playback options for one sprite sheet.
///
/// Immutable once built. Cells past `total_frames` in the grid are never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AnimationConfigDef")]
pub struct AnimationConfig {
    cols: u32,
    rows: u32,
    total_frames: u32,
    fps: u32,
    looping: bool,
    autoplay: bool,
}

impl AnimationConfig {
    /// Validate and build a config with `loop` and `autoplay` both on.
    pub fn new(cols: u32, rows: u32, total_frames: u32, fps: u32) -> Result<Self, ConfigError> {
        positive("cols", cols.into())?;
        positive("rows", rows.into())?;
        positive("total_frames", total_frames.into())?;
        positive("fps", fps.into())?;

        let capacity = u64::from(cols) * u64::from(rows);
        if u64::from(total_frames) > capacity {
            return Err(ConfigError::TooManyFrames {
                total_frames,
                capacity,
            });
        }

        Ok(Self {
            cols,
            rows,
            total_frames,
            fps,
            looping: true,
            autoplay: true,
        })
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Milliseconds between two frame advances.
    pub fn frame_delay_ms(&self) -> f32 {
        1000.0 / self.fps as f32
    }

    /// Index of the last frame, where a non-looping animation stops.
    pub fn last_frame(&self) -> u32 {
        self.total_frames - 1
    }
}

fn positive(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::TooLarge { field, value })
}

/// Raw, unvalidated form read from data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfigDef {
    pub cols: i64,
    pub rows: i64,
    #[serde(alias = "totalFrames")]
    pub total_frames: i64,
    pub fps: i64,
    #[serde(rename = "loop", default = "default_true")]
    pub looping: bool,
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

fn default_true() -> bool {
    true
}

impl TryFrom<AnimationConfigDef> for AnimationConfig {
    type Error = ConfigError;

    fn try_from(def: AnimationConfigDef) -> Result<Self, Self::Error> {
        let config = AnimationConfig::new(
            positive("cols", def.cols)?,
            positive("rows", def.rows)?,
            positive("total_frames", def.total_frames)?,
            positive("fps", def.fps)?,
        )?;
        Ok(config.with_loop(def.looping).with_autoplay(def.autoplay))
    }
}
