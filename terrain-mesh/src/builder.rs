/// Flat-shaded terrain mesh generation with skirt walls
use std::ops::Range;

use constants::terrain::{MIN_HEIGHTMAP_SIDE, SKIRT_BASE_HEIGHT};
use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::heightmap::Heightmap;

/// Corner offsets of one interior cell, two triangles, in emission order.
const CELL_CORNERS: [(u32, u32); 6] = [(0, 0), (1, 1), (1, 0), (0, 0), (0, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Top,
    Base,
}

/// Skirt quad vertex order for edges whose top strip is emitted left to right.
const WALL_FORWARD: [(u32, Level); 6] = [
    (0, Level::Top),
    (1, Level::Top),
    (1, Level::Base),
    (0, Level::Top),
    (1, Level::Base),
    (0, Level::Base),
];

/// Skirt quad vertex order for the opposite edges, keeps every wall facing outward.
const WALL_REVERSED: [(u32, Level); 6] = [
    (0, Level::Top),
    (1, Level::Base),
    (1, Level::Top),
    (0, Level::Top),
    (0, Level::Base),
    (1, Level::Base),
];

/// Boundary of the heightmap a skirt strip hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Row z = 0.
    North,
    /// Row z = depth - 1.
    South,
    /// Column x = 0.
    West,
    /// Column x = width - 1.
    East,
}

impl Edge {
    /// Emission order of the skirt strips.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::West, Edge::East];

    fn index(self) -> usize {
        match self {
            Edge::North => 0,
            Edge::South => 1,
            Edge::West => 2,
            Edge::East => 3,
        }
    }

    /// Number of wall quads along this edge.
    fn cells(self, width: u32, depth: u32) -> u32 {
        match self {
            Edge::North | Edge::South => width - 1,
            Edge::West | Edge::East => depth - 1,
        }
    }

    /// Grid position of a vertex `offset` steps along the edge from cell `i`.
    fn grid_position(self, i: u32, offset: u32, width: u32, depth: u32) -> (u32, u32) {
        match self {
            Edge::North => (i + offset, 0),
            Edge::South => (i + offset, depth - 1),
            Edge::West => (0, i + offset),
            Edge::East => (width - 1, i + offset),
        }
    }

    fn winding(self) -> &'static [(u32, Level); 6] {
        match self {
            Edge::North | Edge::East => &WALL_FORWARD,
            Edge::South | Edge::West => &WALL_REVERSED,
        }
    }
}

/// Vertex ranges of each generation pass inside the mesh arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshLayout {
    pub interior: Range<usize>,
    skirts: [Range<usize>; 4],
}

impl MeshLayout {
    pub fn skirt(&self, edge: Edge) -> Range<usize> {
        self.skirts[edge.index()].clone()
    }

    /// All skirt vertices. The strips are emitted back to back after the interior.
    pub fn skirts(&self) -> Range<usize> {
        self.skirts[0].start..self.skirts[3].end
    }

    /// Vertices that received generated texture coordinates.
    ///
    /// Only the interior pass is textured. Skirt vertices carry the (0, 0)
    /// placeholder.
    pub fn textured(&self) -> Range<usize> {
        self.interior.clone()
    }
}

/// Non-indexed triangle list: every triangle owns its three vertices.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
    layout: MeshLayout,
}

impl TerrainMesh {
    /// Vertex count produced for a `width` x `depth` heightmap.
    /// Grids without cells produce nothing.
    pub fn vertex_count_for(width: u32, depth: u32) -> usize {
        if width < MIN_HEIGHTMAP_SIDE || depth < MIN_HEIGHTMAP_SIDE {
            return 0;
        }
        let cells_x = width as usize - 1;
        let cells_z = depth as usize - 1;
        cells_x * cells_z * 6 + cells_x * 12 + cells_z * 12
    }

    /// Generate the full mesh in one pass over the heightmap.
    pub fn build(heightmap: &Heightmap) -> Self {
        let (width, depth) = (heightmap.width(), heightmap.depth());
        let vertex_count = Self::vertex_count_for(width, depth);

        let mut positions = Vec::with_capacity(vertex_count);
        push_interior(heightmap, &mut positions);
        let interior = 0..positions.len();

        let skirts = Edge::ALL.map(|edge| {
            let start = positions.len();
            push_skirt(heightmap, edge, &mut positions);
            start..positions.len()
        });

        debug_assert_eq!(positions.len(), vertex_count);

        let normals = flat_normals(&positions);
        let uvs = interior_texcoords(width, depth, positions.len());
        let indices = (0..positions.len() as u32).collect();

        Self {
            positions,
            normals,
            uvs,
            indices,
            layout: MeshLayout { interior, skirts },
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn layout(&self) -> &MeshLayout {
        &self.layout
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn position_arrays(&self) -> Vec<[f32; 3]> {
        self.positions.iter().map(|p| p.to_array()).collect()
    }

    pub fn normal_arrays(&self) -> Vec<[f32; 3]> {
        self.normals.iter().map(|n| n.to_array()).collect()
    }

    pub fn uv_arrays(&self) -> Vec<[f32; 2]> {
        self.uvs.iter().map(|uv| uv.to_array()).collect()
    }
}

fn grid_vertex(heightmap: &Heightmap, x: u32, z: u32) -> Vec3 {
    Vec3::new(x as f32, heightmap.height(x, z), z as f32)
}

/// Two triangles per cell, x outer loop, z inner loop.
fn push_interior(heightmap: &Heightmap, positions: &mut Vec<Vec3>) {
    for x in 0..heightmap.width() - 1 {
        for z in 0..heightmap.depth() - 1 {
            for (dx, dz) in CELL_CORNERS {
                positions.push(grid_vertex(heightmap, x + dx, z + dz));
            }
        }
    }
}

/// One wall quad per edge cell, dropping from the edge height to the base.
fn push_skirt(heightmap: &Heightmap, edge: Edge, positions: &mut Vec<Vec3>) {
    let (width, depth) = (heightmap.width(), heightmap.depth());

    for i in 0..edge.cells(width, depth) {
        for &(offset, level) in edge.winding() {
            let (x, z) = edge.grid_position(i, offset, width, depth);
            let vertex = match level {
                Level::Top => grid_vertex(heightmap, x, z),
                Level::Base => Vec3::new(x as f32, SKIRT_BASE_HEIGHT, z as f32),
            };
            positions.push(vertex);
        }
    }
}

/// Unit normal of triangle (a, b, c); zero for degenerate triangles.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// One normal per triangle, replicated to its three vertices.
fn flat_normals(positions: &[Vec3]) -> Vec<Vec3> {
    let faces: Vec<Vec3> = positions
        .par_chunks_exact(3)
        .map(|tri| face_normal(tri[0], tri[1], tri[2]))
        .collect();

    faces.iter().flat_map(|&normal| [normal; 3]).collect()
}

/// Texture coordinates for the interior pass; skirt slots stay at (0, 0).
fn interior_texcoords(width: u32, depth: u32, vertex_count: usize) -> Vec<Vec2> {
    let u_span = (width - 1) as f32;
    let v_span = (depth - 1) as f32;

    let mut uvs = vec![Vec2::ZERO; vertex_count];
    let mut index = 0;
    for x in 0..width - 1 {
        for z in 0..depth - 1 {
            for (dx, dz) in CELL_CORNERS {
                uvs[index] = Vec2::new((x + dx) as f32 / u_span, (z + dz) as f32 / v_span);
                index += 1;
            }
        }
    }
    uvs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_map(width: u32, depth: u32) -> Heightmap {
        let intensities = vec![0; (width * depth) as usize];
        Heightmap::from_intensities(width, depth, &intensities, 0.25).unwrap()
    }

    fn ramp_map() -> Heightmap {
        // 4x3, every pixel distinct so vertex heights identify their grid point
        let intensities: Vec<u8> = (0..12).map(|i| 10 + i * 7).collect();
        Heightmap::from_intensities(4, 3, &intensities, 0.25).unwrap()
    }

    fn sorted(mut corners: Vec<(i64, i64, i64)>) -> Vec<(i64, i64, i64)> {
        corners.sort();
        corners
    }

    fn key(v: Vec3) -> (i64, i64, i64) {
        (v.x as i64, (v.y * 100.0).round() as i64, v.z as i64)
    }

    #[test]
    fn flat_two_by_two_map() {
        let mesh = TerrainMesh::build(&flat_map(2, 2));

        assert_eq!(mesh.layout().interior, 0..6);
        assert_eq!(mesh.layout().skirts(), 6..30);
        assert!(mesh.positions().iter().all(|p| p.y == 0.0));
        for edge in Edge::ALL {
            assert_eq!(mesh.layout().skirt(edge).len(), 6);
        }
    }

    #[test]
    fn single_raised_corner() {
        let mut intensities = vec![0u8; 9];
        intensities[0] = 255;
        let map = Heightmap::from_intensities(3, 3, &intensities, 0.25).unwrap();
        let mesh = TerrainMesh::build(&map);

        // Cell (0, 0) is emitted first; corner (0, 0) is vertex 0 of both its triangles
        let interior = &mesh.positions()[mesh.layout().interior.clone()];
        for (i, p) in interior.iter().enumerate() {
            let expected = if p.x == 0.0 && p.z == 0.0 { 63.75 } else { 0.0 };
            assert_eq!(p.y, expected, "interior vertex {}", i);
        }
        assert_eq!(interior[0].y, 63.75);
        assert_eq!(interior[3].y, 63.75);
        assert_eq!(interior.iter().filter(|p| p.y == 63.75).count(), 2);
    }

    #[test]
    fn interior_cells_cover_quad_corners() {
        let map = ramp_map();
        let mesh = TerrainMesh::build(&map);
        let mut cells = mesh.positions()[mesh.layout().interior.clone()].chunks_exact(6);

        for x in 0..map.width() - 1 {
            for z in 0..map.depth() - 1 {
                let cell = cells.next().unwrap();
                let mut expected = Vec::new();
                for (cx, cz) in [(x, z), (x + 1, z), (x, z + 1), (x + 1, z + 1)] {
                    expected.push(key(grid_vertex(&map, cx, cz)));
                }
                // Diagonal corners are shared by both triangles
                expected.push(key(grid_vertex(&map, x, z)));
                expected.push(key(grid_vertex(&map, x + 1, z + 1)));

                let actual = cell.iter().map(|&v| key(v)).collect();
                assert_eq!(sorted(actual), sorted(expected), "cell ({}, {})", x, z);
            }
        }
        assert!(cells.next().is_none());
    }

    #[test]
    fn vertex_order_within_cell_is_fixed() {
        let map = ramp_map();
        let mesh = TerrainMesh::build(&map);
        let cell = &mesh.positions()[0..6];

        assert_eq!(cell[0], grid_vertex(&map, 0, 0));
        assert_eq!(cell[1], grid_vertex(&map, 1, 1));
        assert_eq!(cell[2], grid_vertex(&map, 1, 0));
        assert_eq!(cell[3], grid_vertex(&map, 0, 0));
        assert_eq!(cell[4], grid_vertex(&map, 0, 1));
        assert_eq!(cell[5], grid_vertex(&map, 1, 1));
        // z is the inner loop
        assert_eq!(mesh.positions()[6], grid_vertex(&map, 0, 1));
    }

    #[test]
    fn vertex_count_for_cell_less_grids_is_zero() {
        assert_eq!(TerrainMesh::vertex_count_for(0, 0), 0);
        assert_eq!(TerrainMesh::vertex_count_for(0, 5), 0);
        assert_eq!(TerrainMesh::vertex_count_for(1, 5), 0);
        assert_eq!(TerrainMesh::vertex_count_for(2, 2), 6 + 12 + 12);
    }

    #[test]
    fn arrays_are_aligned_and_indices_are_identity() {
        let mesh = TerrainMesh::build(&ramp_map());
        let n = TerrainMesh::vertex_count_for(4, 3);

        assert_eq!(n, 3 * 2 * 6 + 3 * 12 + 2 * 12);
        assert_eq!(mesh.vertex_count(), n);
        assert_eq!(mesh.normals().len(), n);
        assert_eq!(mesh.uvs().len(), n);
        assert_eq!(mesh.indices().len(), n);
        assert_eq!(mesh.triangle_count() * 3, n);
        assert!(mesh.indices().iter().enumerate().all(|(i, &idx)| idx as usize == i));
        assert_eq!(mesh.layout().skirts().end, n);
    }

    #[test]
    fn normals_are_flat_per_triangle() {
        let mesh = TerrainMesh::build(&ramp_map());

        for (tri, normals) in mesh
            .positions()
            .chunks_exact(3)
            .zip(mesh.normals().chunks_exact(3))
        {
            let expected = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize();
            assert!(normals[0].abs_diff_eq(expected, 1e-6));
            assert_eq!(normals[0], normals[1]);
            assert_eq!(normals[0], normals[2]);
        }
    }

    #[test]
    fn flat_interior_faces_up() {
        let mesh = TerrainMesh::build(&flat_map(3, 3));

        for normal in &mesh.normals()[mesh.layout().interior.clone()] {
            assert_eq!(*normal, Vec3::Y);
        }
    }

    #[test]
    fn zero_height_skirts_get_zero_normals() {
        let mesh = TerrainMesh::build(&flat_map(2, 2));

        for normal in &mesh.normals()[mesh.layout().skirts()] {
            assert_eq!(*normal, Vec3::ZERO);
        }
    }

    #[test]
    fn skirt_walls_face_outward() {
        let map = Heightmap::from_intensities(3, 3, &[40; 9], 1.0).unwrap();
        let mesh = TerrainMesh::build(&map);
        let outward = [
            (Edge::North, Vec3::NEG_Z),
            (Edge::South, Vec3::Z),
            (Edge::West, Vec3::NEG_X),
            (Edge::East, Vec3::X),
        ];

        for (edge, direction) in outward {
            for normal in &mesh.normals()[mesh.layout().skirt(edge)] {
                assert!(normal.abs_diff_eq(direction, 1e-6), "{:?}: {}", edge, normal);
            }
        }
    }

    #[test]
    fn skirts_drop_from_edge_height_to_base() {
        let map = ramp_map();
        let mesh = TerrainMesh::build(&map);

        let south = &mesh.positions()[mesh.layout().skirt(Edge::South)];
        assert_eq!(south[0], grid_vertex(&map, 0, 2));
        assert_eq!(south[1], Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(south[2], grid_vertex(&map, 1, 2));

        let east = &mesh.positions()[mesh.layout().skirt(Edge::East)];
        assert!(east.iter().all(|p| p.x == 3.0));
        for p in east {
            let top = map.height(3, p.z as u32);
            assert!(p.y == 0.0 || p.y == top);
        }
    }

    #[test]
    fn interior_texcoords_follow_grid_fraction() {
        let map = ramp_map();
        let mesh = TerrainMesh::build(&map);

        for i in mesh.layout().textured() {
            let p = mesh.positions()[i];
            let expected = Vec2::new(p.x / 3.0, p.z / 2.0);
            assert_eq!(mesh.uvs()[i], expected);
        }
        assert_eq!(mesh.uvs()[1], Vec2::new(1.0 / 3.0, 0.5));
    }

    #[test]
    fn texcoords_are_reproducible() {
        let first = TerrainMesh::build(&ramp_map());
        let second = TerrainMesh::build(&flat_map(4, 3));

        let a: Vec<[u32; 2]> = first.uvs().iter().map(|uv| [uv.x.to_bits(), uv.y.to_bits()]).collect();
        let b: Vec<[u32; 2]> = second.uvs().iter().map(|uv| [uv.x.to_bits(), uv.y.to_bits()]).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn skirt_texcoords_are_placeholders() {
        let mesh = TerrainMesh::build(&ramp_map());

        assert!(mesh.uvs()[mesh.layout().skirts()].iter().all(|uv| *uv == Vec2::ZERO));
    }

    #[test]
    fn attribute_arrays_match_vectors() {
        let mesh = TerrainMesh::build(&ramp_map());

        assert_eq!(mesh.position_arrays()[5], mesh.positions()[5].to_array());
        assert_eq!(mesh.normal_arrays().len(), mesh.vertex_count());
        assert_eq!(mesh.uv_arrays()[1], [1.0 / 3.0, 0.5]);
    }
}
