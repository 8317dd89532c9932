//! Animation domain: fixed-rate frame stepping.

/// Accumulates tick time and converts it into whole frame periods.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    frame_delay_ms: f32,
    accumulated_ms: f32,
}

impl FrameClock {
    pub fn new(frame_delay_ms: f32) -> Self {
        Self {
            frame_delay_ms,
            accumulated_ms: 0.0,
        }
    }

    pub fn frame_delay_ms(&self) -> f32 {
        self.frame_delay_ms
    }

    pub fn accumulated_ms(&self) -> f32 {
        self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }

    /// Add `delta_ms` and return how many frame periods elapsed.
    ///
    /// The remainder stays accumulated. Runs in constant time however large
    /// the delta is. Negative or non-finite deltas count as zero.
    pub fn accumulate(&mut self, delta_ms: f32) -> u64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulated_ms += delta_ms;
        }
        if self.accumulated_ms < self.frame_delay_ms {
            return 0;
        }

        let steps = (self.accumulated_ms / self.frame_delay_ms).floor();
        self.accumulated_ms = (self.accumulated_ms - steps * self.frame_delay_ms).max(0.0);
        steps as u64
    }
}

/// Result of moving the frame index forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    pub frame: u32,
    /// A non-looping animation hit its last frame.
    pub finished: bool,
}

/// Advance `frame` by `steps`, wrapping to 0 when `looping` and clamping to the
/// last frame otherwise.
///
/// Same result as applying `frame += 1` with wrap/clamp `steps` times.
pub fn step_frame(frame: u32, steps: u64, total_frames: u32, looping: bool) -> FrameStep {
    let total = u64::from(total_frames);
    let target = u64::from(frame).saturating_add(steps);

    if target < total {
        return FrameStep {
            frame: target as u32,
            finished: false,
        };
    }

    if looping {
        FrameStep {
            frame: (target % total) as u32,
            finished: false,
        }
    } else {
        FrameStep {
            frame: total_frames - 1,
            finished: true,
        }
    }
}
