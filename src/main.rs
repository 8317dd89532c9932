use bevy::prelude::*;

use sprite_sheet_animator::SpriteSheetPlugin;
use sprite_sheet_animator::sprites::{SheetManifest, spawn_animated_sheet};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sprite Sheet Animator".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SpriteSheetPlugin)
        .add_systems(Startup, setup_camera)
        .add_systems(PostStartup, spawn_manifest_sheets)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera3d::default(), Transform::from_xyz(0.0, 0.0, 6.0)));
}

/// Lay every sheet in the manifest out in a row facing the camera.
fn spawn_manifest_sheets(
    mut commands: Commands,
    manifest: Res<SheetManifest>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let keys = manifest.keys_with_prefix("");
    let spacing = 1.5;
    let start = -(keys.len().saturating_sub(1) as f32) * spacing / 2.0;

    for (i, key) in keys.into_iter().enumerate() {
        let transform = Transform::from_xyz(start + i as f32 * spacing, 0.0, 0.0);
        if spawn_animated_sheet(
            &mut commands,
            &manifest,
            &mut meshes,
            &mut materials,
            key,
            Vec2::splat(1.0),
            transform,
        )
        .is_none()
        {
            warn!("Sheet '{}' has no loaded texture handle", key);
        }
    }
}
