//! Sprites domain: tests for the manifest and the Bevy-side animator systems.

use bevy::ecs::message::{MessageReader, Messages};
use bevy::image::{ImageAddressMode, ImageSampler};
use bevy::math::{Affine2, Mat2};
use bevy::prelude::*;
use std::time::Duration;

use super::systems::{apply_animator_settings, rebind_on_visibility_regained, tick_sprite_animators};
use super::{
    ManifestError, SpritesPlugin, SheetAnimationFinished, SheetManifest, SheetTextureBound,
    SheetVisibilityRegained, SpriteSheetAnimator, parse_manifest, read_manifest,
    top_left_translation,
};
use crate::animation::{AnimationConfig, compute_offset, frame_repeat};
use crate::content::{AnimatorSettings, ContentPlugin};
use std::path::Path;

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

const MANIFEST: &str = r#"{
    "version": 2,
    "sheets": {
        "fx.explosion": {
            "path": "sprites/explosion.png",
            "animation": { "cols": 4, "rows": 2, "total_frames": 8, "fps": 24, "loop": false }
        },
        "fx.smoke": {
            "path": "sprites/smoke.png",
            "animation": { "cols": 3, "rows": 3, "totalFrames": 7, "fps": 12 }
        },
        "npc.wave": {
            "path": "sprites/wave.png",
            "animation": { "cols": 6, "rows": 1, "total_frames": 6, "fps": 8, "autoplay": false }
        }
    }
}"#;

fn loaded_manifest() -> SheetManifest {
    let json = parse_manifest("sheets.json", MANIFEST).unwrap();
    SheetManifest {
        version: json.version,
        sheets: json.sheets,
        ..default()
    }
}

#[test]
fn test_parse_manifest() {
    let manifest = loaded_manifest();
    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.sheets.len(), 3);

    let explosion = manifest.get("fx.explosion").unwrap();
    assert_eq!(explosion.path, "sprites/explosion.png");
    assert_eq!(explosion.animation.cols(), 4);
    assert!(!explosion.animation.looping());

    let smoke = manifest.get("fx.smoke").unwrap();
    assert_eq!(smoke.animation.total_frames(), 7);
    assert!(smoke.animation.looping());
    assert!(smoke.animation.autoplay());
}

#[test]
fn test_manifest_rejects_invalid_sheet() {
    let result = parse_manifest(
        "sheets.json",
        r#"{ "version": 1, "sheets": { "bad": { "path": "a.png",
            "animation": { "cols": 2, "rows": 2, "total_frames": 9, "fps": 10 } } } }"#,
    );
    match result {
        Err(ManifestError::Parse { path, source }) => {
            assert_eq!(path, "sheets.json");
            assert!(source.to_string().contains("exceeds the grid capacity"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_manifest_without_sheets_is_empty() {
    let json = parse_manifest("sheets.json", r#"{ "version": 1 }"#).unwrap();
    assert!(json.sheets.is_empty());
}

#[test]
fn test_manifest_lookups() {
    let manifest = loaded_manifest();
    assert!(manifest.contains("fx.smoke"));
    assert!(!manifest.contains("fx.fire"));
    assert_eq!(manifest.keys_with_prefix("fx."), vec!["fx.explosion", "fx.smoke"]);
    // Textures are only present after `load_from_file`.
    assert!(manifest.get_sheet("fx.smoke").is_none());
}

#[test]
fn test_manifest_animator_uses_sheet_config() {
    let manifest = loaded_manifest();
    let animator = manifest.animator("npc.wave").unwrap();
    assert!(!animator.is_playing());
    assert_eq!(animator.config().cols(), 6);
    assert!(manifest.animator("missing").is_none());
}

#[test]
fn test_shipped_manifest_images_match_their_grids() {
    let json = read_manifest(Path::new("assets/sprites/sheets.json")).unwrap();
    assert!(!json.sheets.is_empty());

    for (key, def) in &json.sheets {
        let bytes = std::fs::read(Path::new("assets").join(&def.path))
            .unwrap_or_else(|e| panic!("sheet '{}' image missing: {}", key, e));
        // PNG IHDR: width and height follow the 8-byte signature and chunk header.
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!(width % def.animation.cols(), 0, "{} width", key);
        assert_eq!(height % def.animation.rows(), 0, "{} height", key);
    }
}

// -----------------------------------------------------------------------------
// UV transform conversion
// -----------------------------------------------------------------------------

#[test]
fn test_top_row_maps_to_top_of_texture() {
    let uv_transform = Affine2 {
        matrix2: Mat2::from_diagonal(frame_repeat(4, 2)),
        translation: Vec2::ZERO,
    };

    let top = top_left_translation(&uv_transform, compute_offset(0, 4, 2));
    assert_eq!(top, Vec2::new(0.0, 0.0));

    let bottom = top_left_translation(&uv_transform, compute_offset(6, 4, 2));
    assert_eq!(bottom, Vec2::new(0.5, 0.5));
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[test]
fn test_settings_resource_comes_from_content_plugin() {
    let mut app = App::new();
    app.add_plugins(SpritesPlugin);
    assert!(!app.world().contains_resource::<AnimatorSettings>());

    app.add_plugins(ContentPlugin);
    assert!(app.world().contains_resource::<AnimatorSettings>());
}

#[derive(Resource, Default)]
struct Observed {
    bound: Vec<Entity>,
    finished: Vec<(Entity, u32)>,
}

fn observe_messages(
    mut bound: MessageReader<SheetTextureBound>,
    mut finished: MessageReader<SheetAnimationFinished>,
    mut observed: ResMut<Observed>,
) {
    for event in bound.read() {
        observed.bound.push(event.entity);
    }
    for event in finished.read() {
        observed.finished.push((event.entity, event.frame));
    }
}

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .init_resource::<Assets<Image>>()
        .init_resource::<AnimatorSettings>()
        .init_resource::<Observed>()
        .add_message::<SheetVisibilityRegained>()
        .add_message::<SheetTextureBound>()
        .add_message::<SheetAnimationFinished>()
        .add_systems(
            Update,
            (
                apply_animator_settings,
                rebind_on_visibility_regained,
                tick_sprite_animators,
                observe_messages,
            )
                .chain(),
        );
    app
}

/// Advance time by one 100ms frame period and run the schedule.
fn step(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(100));
    app.update();
}

fn sheet_material(app: &mut App) -> (Handle<Image>, Handle<StandardMaterial>) {
    let image = app
        .world_mut()
        .resource_mut::<Assets<Image>>()
        .add(Image::default());
    let material = app
        .world_mut()
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color_texture: Some(image.clone()),
            ..default()
        });
    (image, material)
}

fn spawn_quad(app: &mut App, config: AnimationConfig) -> Entity {
    let mesh = app
        .world_mut()
        .resource_mut::<Assets<Mesh>>()
        .add(Rectangle::new(1.0, 1.0));
    app.world_mut()
        .spawn((Mesh3d(mesh), SpriteSheetAnimator::new(config)))
        .id()
}

fn animator(app: &App, entity: Entity) -> &SpriteSheetAnimator {
    app.world().get::<SpriteSheetAnimator>(entity).unwrap()
}

fn uv_transform(app: &App, material: &Handle<StandardMaterial>) -> Affine2 {
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(material)
        .unwrap()
        .uv_transform
}

#[test]
fn test_binds_once_material_arrives() {
    let mut app = test_app();
    let entity = spawn_quad(&mut app, AnimationConfig::new(4, 2, 8, 10).unwrap());

    for _ in 0..3 {
        step(&mut app);
    }
    assert!(!animator(&app, entity).is_bound());
    assert_eq!(animator(&app, entity).current_frame(), 0);
    assert!(app.world().resource::<Observed>().bound.is_empty());

    let (image, material) = sheet_material(&mut app);
    app.world_mut()
        .entity_mut(entity)
        .insert(MeshMaterial3d(material.clone()));

    // Binds and advances one period in the same tick.
    step(&mut app);
    assert!(animator(&app, entity).is_bound());
    assert_eq!(animator(&app, entity).current_frame(), 1);
    assert_eq!(app.world().resource::<Observed>().bound, vec![entity]);

    let image = app
        .world()
        .resource::<Assets<Image>>()
        .get(&image)
        .unwrap();
    let ImageSampler::Descriptor(descriptor) = &image.sampler else {
        panic!("sampler was not configured");
    };
    assert_eq!(descriptor.address_mode_u, ImageAddressMode::Repeat);
    assert_eq!(descriptor.address_mode_v, ImageAddressMode::Repeat);

    let transform = uv_transform(&app, &material);
    assert_eq!(transform.matrix2, Mat2::from_diagonal(Vec2::new(0.25, 0.5)));
    assert_eq!(transform.translation, Vec2::new(0.25, 0.0));

    for _ in 0..4 {
        step(&mut app);
    }
    assert_eq!(animator(&app, entity).current_frame(), 5);
    // Frame 5 is the second cell of the bottom row.
    assert_eq!(uv_transform(&app, &material).translation, Vec2::new(0.25, 0.5));
}

#[test]
fn test_finished_message_fires_once() {
    let mut app = test_app();
    let config = AnimationConfig::new(2, 2, 4, 10).unwrap().with_loop(false);
    let entity = spawn_quad(&mut app, config);
    let (_, material) = sheet_material(&mut app);
    app.world_mut()
        .entity_mut(entity)
        .insert(MeshMaterial3d(material));

    for _ in 0..8 {
        step(&mut app);
    }
    assert_eq!(animator(&app, entity).current_frame(), 3);
    assert!(animator(&app, entity).is_finished());
    assert_eq!(app.world().resource::<Observed>().finished, vec![(entity, 3)]);
}

#[test]
fn test_visibility_regained_rebinds() {
    let mut app = test_app();
    let entity = spawn_quad(&mut app, AnimationConfig::new(2, 2, 4, 10).unwrap());
    let (_, material) = sheet_material(&mut app);
    app.world_mut()
        .entity_mut(entity)
        .insert(MeshMaterial3d(material));

    step(&mut app);
    step(&mut app);
    assert_eq!(animator(&app, entity).current_frame(), 2);

    // The host recreated the material while the target was out of view.
    let (_, recreated) = sheet_material(&mut app);
    app.world_mut()
        .entity_mut(entity)
        .insert(MeshMaterial3d(recreated.clone()));
    app.world_mut()
        .resource_mut::<Messages<SheetVisibilityRegained>>()
        .write(SheetVisibilityRegained { entity });

    step(&mut app);
    assert_eq!(app.world().resource::<Observed>().bound, vec![entity, entity]);
    assert_eq!(
        animator(&app, entity).bound_texture().map(|id| id.material),
        Some(recreated.id())
    );
    // Playback carried on from frame 2.
    assert_eq!(animator(&app, entity).current_frame(), 3);
    assert_eq!(
        uv_transform(&app, &recreated).translation,
        Vec2::new(0.5, 0.5)
    );
}

#[test]
fn test_settings_applied_on_attach() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<AnimatorSettings>()
        .bind_warn_after = 2;
    let entity = spawn_quad(&mut app, AnimationConfig::new(2, 2, 4, 10).unwrap());
    assert_eq!(
        animator(&app, entity).bind_warn_after(),
        crate::animation::DEFAULT_BIND_WARN_AFTER
    );

    for _ in 0..3 {
        step(&mut app);
    }
    assert_eq!(animator(&app, entity).bind_warn_after(), 2);
    assert_eq!(animator(&app, entity).bind_attempts(), 3);
    assert!(!animator(&app, entity).is_bound());
}
