/// Terrain entity creation from the prebuilt triangle list
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use terrain_mesh::TerrainMesh;

use crate::engine::loading::texture_loader::TerrainAssets;

/// CPU-side terrain mesh, built before the app starts.
#[derive(Resource)]
pub struct TerrainGeometry(pub TerrainMesh);

#[derive(Component)]
pub struct Terrain;

/// Positions, flat normals, UVs and the identity index list as one triangle list.
pub fn terrain_to_mesh(terrain: &TerrainMesh) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, terrain.position_arrays());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, terrain.normal_arrays());
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, terrain.uv_arrays());
    mesh.insert_indices(Indices::U32(terrain.indices().to_vec()));
    mesh
}

/// White diffuse surface carrying the terrain texture, visible from both sides.
pub fn create_terrain_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        perceptual_roughness: 1.0,
        reflectance: 0.0,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn spawn_terrain(
    mut commands: Commands,
    geometry: Res<TerrainGeometry>,
    assets: Res<TerrainAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let terrain = &geometry.0;
    let layout = terrain.layout();

    commands.spawn((
        Mesh3d(meshes.add(terrain_to_mesh(terrain))),
        MeshMaterial3d(materials.add(create_terrain_material(assets.texture.clone()))),
        Transform::IDENTITY,
        Terrain,
    ));

    info!(
        "Terrain spawned: {} triangles ({} interior, {} skirt)",
        terrain.triangle_count(),
        layout.interior.len() / 3,
        layout.skirts().len() / 3
    );
    warn!(
        "{} skirt vertices have no generated texture coordinates and sample the texture origin",
        layout.skirts().len()
    );
}
