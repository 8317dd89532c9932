//! Sprites domain: per-frame animator systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::SpriteSheetAnimator;
use super::events::{SheetAnimationFinished, SheetTextureBound, SheetVisibilityRegained};
use super::manifest::SheetManifest;
use super::surface::MaterialSurface;
use crate::animation::TickOutcome;
use crate::content::AnimatorSettings;

/// Configure animators as they are attached to entities.
pub(crate) fn apply_animator_settings(
    settings: Res<AnimatorSettings>,
    mut added: Query<&mut SpriteSheetAnimator, Added<SpriteSheetAnimator>>,
) {
    for mut animator in &mut added {
        animator.set_bind_warn_after(settings.bind_warn_after);
    }
}

/// Drop the bound texture of animators whose surface came back into view.
pub(crate) fn rebind_on_visibility_regained(
    mut events: MessageReader<SheetVisibilityRegained>,
    mut animators: Query<&mut SpriteSheetAnimator>,
) {
    for event in events.read() {
        if let Ok(mut animator) = animators.get_mut(event.entity) {
            animator.invalidate();
        }
    }
}

/// Tick every animator once, binding textures that became available.
pub(crate) fn tick_sprite_animators(
    time: Res<Time>,
    meshes: Res<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut animators: Query<(
        Entity,
        &mut SpriteSheetAnimator,
        Option<&Mesh3d>,
        Option<&MeshMaterial3d<StandardMaterial>>,
    )>,
    mut bound_events: MessageWriter<SheetTextureBound>,
    mut finished_events: MessageWriter<SheetAnimationFinished>,
) {
    let now_ms = (time.elapsed_secs_f64() * 1000.0) as f32;
    let delta_ms = time.delta_secs() * 1000.0;

    for (entity, mut animator, mesh, material) in &mut animators {
        let mut surface = MaterialSurface {
            mesh,
            material,
            meshes: &meshes,
            materials: &mut materials,
            images: &mut images,
        };

        let report = animator.on_tick(&mut surface, now_ms, delta_ms);

        if report.just_bound {
            bound_events.write(SheetTextureBound { entity });
        }
        if let TickOutcome::Finished { frame } = report.outcome {
            finished_events.write(SheetAnimationFinished { entity, frame });
        }
    }
}

/// System to load the sheet manifest at startup.
pub(crate) fn load_sheet_manifest(
    mut manifest: ResMut<SheetManifest>,
    settings: Res<AnimatorSettings>,
    asset_server: Res<AssetServer>,
) {
    manifest.load_from_file(&settings.manifest_path, &asset_server);
}
