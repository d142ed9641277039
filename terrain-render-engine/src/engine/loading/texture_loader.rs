use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::TEXTURE_ASSET_PATH;

use crate::engine::core::app_state::AppState;

#[derive(Resource, Default)]
pub struct TerrainAssets {
    pub texture: Handle<Image>,
}

// Start the texture load as soon as the asset server exists
pub fn start_texture_loading(mut assets: ResMut<TerrainAssets>, asset_server: Res<AssetServer>) {
    println!("Loading terrain texture: {}", TEXTURE_ASSET_PATH);
    assets.texture = asset_server.load(TEXTURE_ASSET_PATH);
}

// Move to Running once the texture is ready; a missing texture ends the app
pub fn check_texture_loading(
    assets: Res<TerrainAssets>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
    mut app_exit: EventWriter<AppExit>,
) {
    match asset_server.get_load_state(&assets.texture) {
        Some(LoadState::Loaded) => {
            println!("✓ Terrain texture loaded");
            next_state.set(AppState::Running);
        }
        Some(LoadState::Failed(err)) => {
            error!("Terrain texture {} failed to load: {}", TEXTURE_ASSET_PATH, err);
            app_exit.write(AppExit::error());
        }
        _ => {}
    }
}
