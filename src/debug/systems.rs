//! Debug domain: diagnostics systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::state::AnimatorDiagnostics;
use crate::sprites::{SheetAnimationFinished, SheetTextureBound, SpriteSheetAnimator};

/// Recount animator states
pub(crate) fn update_diagnostics(
    animators: Query<&SpriteSheetAnimator>,
    mut diagnostics: ResMut<AnimatorDiagnostics>,
) {
    let mut bound = 0;
    let mut playing = 0;
    let mut total = 0;
    for animator in &animators {
        total += 1;
        if animator.is_bound() {
            bound += 1;
        }
        if animator.is_playing() {
            playing += 1;
        }
    }

    diagnostics.bound = bound;
    diagnostics.waiting = total - bound;
    diagnostics.playing = playing;
}

pub(crate) fn log_animator_messages(
    mut bound_events: MessageReader<SheetTextureBound>,
    mut finished_events: MessageReader<SheetAnimationFinished>,
    mut diagnostics: ResMut<AnimatorDiagnostics>,
) {
    for event in bound_events.read() {
        debug!("[DEBUG] {:?} bound its sprite sheet", event.entity);
    }
    for event in finished_events.read() {
        diagnostics.finished_total += 1;
        debug!("[DEBUG] {:?} finished on frame {}", event.entity, event.frame);
    }
}

/// Log the diagnostics summary with F3. Does nothing without keyboard input.
pub(crate) fn log_diagnostics_on_hotkey(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    diagnostics: Res<AnimatorDiagnostics>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if keyboard.just_pressed(KeyCode::F3) {
        info!("[DEBUG] {}", diagnostics.summary());
    }
}
