//! Dev tooling for sheet animators.
//!
//! Features:
//! - Per-frame counts of bound, waiting and playing animators
//! - Debug-level logging of bind and finish messages
//! - F3 logs a one-line summary

mod state;
mod systems;

pub use state::AnimatorDiagnostics;

use bevy::prelude::*;

use crate::debug::systems::{log_animator_messages, log_diagnostics_on_hotkey, update_diagnostics};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimatorDiagnostics>().add_systems(
            PostUpdate,
            (
                update_diagnostics,
                log_animator_messages,
                log_diagnostics_on_hotkey,
            )
                .chain(),
        );
    }
}
