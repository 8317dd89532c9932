//! Animation domain: per-entity animator tying the binder and clock together.

use std::fmt;

use bevy::log::debug;

use super::binder::TextureBinder;
use super::clock::{FrameClock, step_frame};
use super::config::AnimationConfig;
use super::surface::SheetSurface;

/// What a single tick did to the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The texture is not available yet; nothing else ran.
    Unbound,
    /// Paused; held on the current frame.
    Held,
    /// Playing, but no frame boundary was crossed.
    Idle,
    Advanced { frame: u32 },
    /// A non-looping animation reached its last frame and stopped.
    Finished { frame: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// Binding succeeded during this tick.
    pub just_bound: bool,
}

/// Frame animation state for one sprite sheet surface.
///
/// `Id` is the host's texture identity, kept between ticks in place of a
/// reference to the texture itself.
#[derive(Debug, Clone)]
pub struct SpriteAnimator<Id> {
    config: AnimationConfig,
    binder: TextureBinder<Id>,
    clock: FrameClock,
    current_frame: u32,
    playing: bool,
    finished: bool,
    offset_pending: bool,
    last_tick_ms: Option<f32>,
}

impl<Id: Copy + PartialEq + fmt::Debug> SpriteAnimator<Id> {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            binder: TextureBinder::default(),
            clock: FrameClock::new(config.frame_delay_ms()),
            current_frame: 0,
            playing: config.autoplay(),
            finished: false,
            offset_pending: false,
            last_tick_ms: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_bound(&self) -> bool {
        self.binder.is_bound()
    }

    pub fn bound_texture(&self) -> Option<Id> {
        self.binder.bound()
    }

    /// A non-looping animation stopped on its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn accumulated_ms(&self) -> f32 {
        self.clock.accumulated_ms()
    }

    pub fn bind_attempts(&self) -> u32 {
        self.binder.attempts()
    }

    pub fn last_tick_ms(&self) -> Option<f32> {
        self.last_tick_ms
    }

    pub fn bind_warn_after(&self) -> u32 {
        self.binder.warn_after()
    }

    pub fn set_bind_warn_after(&mut self, attempts: u32) {
        self.binder.set_warn_after(attempts);
    }

    /// Resume from the current frame. Does not rewind a finished animation.
    pub fn play(&mut self) {
        self.playing = true;
        self.finished = false;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jump back to frame 0. The new offset is written on the next bound tick.
    pub fn rewind(&mut self) {
        self.current_frame = 0;
        self.finished = false;
        self.clock.reset();
        self.offset_pending = true;
    }

    /// Rewind and play.
    pub fn replay(&mut self) {
        self.rewind();
        self.play();
    }

    /// The host's surface was recreated; bind again on the next tick.
    ///
    /// Frame and play state are kept.
    pub fn invalidate(&mut self) {
        if self.binder.is_bound() {
            debug!("sprite animator invalidated on frame {}", self.current_frame);
        }
        self.binder.invalidate();
    }

    /// Advance the animation by one host frame.
    pub fn on_tick<S>(&mut self, surface: &mut S, now_ms: f32, delta_ms: f32) -> TickReport
    where
        S: SheetSurface<TextureId = Id>,
    {
        self.last_tick_ms = Some(now_ms);

        let mut just_bound = false;
        if !self.binder.is_bound() {
            if !self.binder.attempt_bind(surface, &self.config, self.current_frame) {
                return TickReport {
                    outcome: TickOutcome::Unbound,
                    just_bound,
                };
            }
            // Binding already showed the current frame.
            just_bound = true;
            self.offset_pending = false;
        }

        if self.offset_pending {
            if !self.binder.write_offset(surface, &self.config, self.current_frame) {
                return TickReport {
                    outcome: TickOutcome::Unbound,
                    just_bound,
                };
            }
            self.offset_pending = false;
        }

        if !self.playing {
            return TickReport {
                outcome: TickOutcome::Held,
                just_bound,
            };
        }

        let steps = self.clock.accumulate(delta_ms);
        if steps == 0 {
            return TickReport {
                outcome: TickOutcome::Idle,
                just_bound,
            };
        }

        let step = step_frame(
            self.current_frame,
            steps,
            self.config.total_frames(),
            self.config.looping(),
        );
        let changed = step.frame != self.current_frame;
        self.current_frame = step.frame;

        if step.finished {
            self.playing = false;
            self.finished = true;
            self.clock.reset();
        }

        if changed {
            // On failure the binder is unbound again and rebinding shows this frame.
            self.binder
                .write_offset(surface, &self.config, self.current_frame);
        }

        let outcome = if step.finished {
            TickOutcome::Finished { frame: step.frame }
        } else if changed {
            TickOutcome::Advanced { frame: step.frame }
        } else {
            TickOutcome::Idle
        };

        TickReport {
            outcome,
            just_bound,
        }
    }
}
