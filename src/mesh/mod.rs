//! Mesh generation for floe fields
//!
//! Generates engine-agnostic 2D mesh data from a field's cells: each floe
//! becomes a triangle fan from its centroid over the angle-ordered
//! boundary, with one color per floe.

mod colors;

pub use colors::{ColorMapper, DriftColorMapper, UniformColorMapper};

use glam::Vec2;

use crate::decor::Rgba;
use crate::field::FloeField;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering backend: upload the
/// positions and colors as vertex buffers and draw the indices as a
/// triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (2D domain coordinates)
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a mesh from a field with color mapping
///
/// Floes with fewer than 3 points cannot form a polygon and are skipped,
/// which also covers empty floes whose seed is dominated everywhere.
pub fn generate_mesh<T, C>(field: &FloeField<T>, color_mapper: &C) -> MeshData
where
    C: ColorMapper<T>,
{
    let mut mesh = MeshData::default();

    for floe in field.floes() {
        if floe.point_count() < 3 {
            continue;
        }

        let color = color_mapper.map_color(&floe.decor);
        triangulate_floe(floe.centroid, &floe.boundary(), color, &mut mesh);
    }

    mesh
}

/// Triangulate a single floe as a fan from its centroid
fn triangulate_floe(center: Vec2, boundary: &[Vec2], color: Rgba, mesh: &mut MeshData) {
    let base_idx = mesh.positions.len() as u32;

    mesh.positions.push([center.x, center.y]);
    mesh.colors.push(color);

    for vertex in boundary {
        mesh.positions.push([vertex.x, vertex.y]);
        mesh.colors.push(color);
    }

    let num_vertices = boundary.len();
    for i in 0..num_vertices {
        let next_i = (i + 1) % num_vertices;
        mesh.indices.push(base_idx); // center
        mesh.indices.push(base_idx + 1 + i as u32);
        mesh.indices.push(base_idx + 1 + next_i as u32);
    }
}
