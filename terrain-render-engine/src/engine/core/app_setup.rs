use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::input::InputSystem;
use bevy::prelude::*;
use constants::render_settings::{TICK_HZ, WINDOW_SIZE};
use terrain_mesh::TerrainMesh;

// Crate engine modules
use crate::engine::camera::free_camera::{TerrainCamera, sync_camera_transform};
use crate::engine::camera::projection::{perspective_for_viewport, resize_projection};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::sample::{
    InputSample, RawPointer, accumulate_pointer_motion, sample_input,
};
use crate::engine::lighting::light_state::{
    create_ambient_light, spawn_lighting, sync_light_transform,
};
use crate::engine::loading::texture_loader::{
    TerrainAssets, check_texture_loading, start_texture_loading,
};
use crate::engine::scene::state::{SceneState, scene_tick};
use crate::engine::scene::terrain::{TerrainGeometry, spawn_terrain};
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app(terrain: TerrainMesh) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(create_ambient_light())
        .insert_resource(TerrainGeometry(terrain));

    // Initialise resources early
    app.init_resource::<SceneState>()
        .init_resource::<InputSample>()
        .init_resource::<RawPointer>()
        .init_resource::<TerrainAssets>();

    app.add_systems(Startup, (setup, start_texture_loading))
        .add_systems(
            Update,
            check_texture_loading.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (transition_to_running, spawn_terrain),
        );

    // Raw motion is folded in every frame so no tick misses any of it
    app.add_systems(PreUpdate, accumulate_pointer_motion.after(InputSystem));

    // One input sample per tick, then camera and light in a fixed order
    app.add_systems(
        FixedUpdate,
        (sample_input, scene_tick)
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(
        Update,
        (
            sync_camera_transform,
            sync_light_transform,
            resize_projection,
            fps_text_update_system,
        ),
    );

    app
}

// Startup system: camera, lights and overlay; the terrain waits for its texture
fn setup(mut commands: Commands, scene: Res<SceneState>) {
    create_terrain_camera(&mut commands, &scene);
    spawn_lighting(&mut commands, &scene.light);
    spawn_fps_overlay(&mut commands);
}

fn create_terrain_camera(commands: &mut Commands, scene: &SceneState) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective_for_viewport(WINDOW_SIZE.0, WINDOW_SIZE.1)),
        scene.camera.transform(),
        TerrainCamera,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(ImagePlugin::default_linear())
}
