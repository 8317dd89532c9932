//! Debug domain: diagnostics state for sheet animators.

use bevy::prelude::*;

/// Snapshot of animator state, refreshed every frame.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct AnimatorDiagnostics {
    /// Animators holding a bound texture
    pub bound: usize,
    /// Animators still waiting for their texture
    pub waiting: usize,
    /// Animators currently advancing frames
    pub playing: usize,
    /// Finish messages seen since startup
    pub finished_total: u64,
}

impl AnimatorDiagnostics {
    pub fn summary(&self) -> String {
        format!(
            "sprite animators: {} bound, {} waiting, {} playing, {} finished",
            self.bound, self.waiting, self.playing, self.finished_total
        )
    }
}
