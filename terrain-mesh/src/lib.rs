//! Heightmap loading and flat-shaded terrain mesh generation.
//!
//! The output of [`TerrainMesh::build`] is plain CPU data (positions, normals,
//! texture coordinates and an identity index list) ready to be handed to any
//! renderer that draws indexed triangle lists.

/// Terrain loading and validation errors.
pub mod error;

/// Heightmap decoding and per-pixel height sampling.
pub mod heightmap;

/// Interior surface, skirt walls, flat normals and texture coordinates.
pub mod builder;

pub use builder::{Edge, MeshLayout, TerrainMesh};
pub use error::TerrainError;
pub use heightmap::{HeightSample, Heightmap};
