use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use constants::path::{ASSET_DIR, HEIGHTMAP_FILE};
use constants::terrain::HEIGHT_MULTIPLIER;
use terrain_mesh::{Heightmap, TerrainMesh};

use crate::engine::core::app_setup::create_app;

mod engine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Same root the asset server uses, so both images sit side by side
    let heightmap_path = FileAssetReader::get_base_path()
        .join(ASSET_DIR)
        .join(HEIGHTMAP_FILE);
    println!("Loading heightmap from: {}", heightmap_path.display());
    let heightmap = Heightmap::open(&heightmap_path, HEIGHT_MULTIPLIER)?;
    println!(
        "✓ Heightmap {}x{} loaded, peak elevation {:.2}",
        heightmap.width(),
        heightmap.depth(),
        heightmap.max_height()
    );

    let terrain = TerrainMesh::build(&heightmap);
    println!(
        "✓ Terrain mesh built: {} vertices, {} triangles",
        terrain.vertex_count(),
        terrain.triangle_count()
    );

    match create_app(terrain).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("terrain viewer exited with code {}", code).into()),
    }
}
