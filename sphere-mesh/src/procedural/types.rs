//! Sphere mesh types
//!
//! Parameters, the generated flat buffers, and the narrowed GPU upload form.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Default sphere radius
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Default number of longitudinal divisions
pub const DEFAULT_SEGMENTS: u32 = 32;
/// Default number of latitudinal divisions
pub const DEFAULT_RINGS: u32 = 16;

/// Sphere generation parameters
///
/// Missing fields take their defaults when deserialized, so a table such as
/// `segments = 8` is a valid parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Sphere radius. Zero collapses every vertex to the origin, negative
    /// values mirror the sphere through the origin.
    pub radius: f64,
    /// Number of longitudinal divisions (azimuth steps per ring)
    pub segments: u32,
    /// Number of latitudinal divisions (polar steps from pole to pole)
    pub rings: u32,
}

impl SphereParams {
    pub fn new(radius: f64, segments: u32, rings: u32) -> Self {
        Self {
            radius,
            segments,
            rings,
        }
    }

    /// Unit sphere with the same number of segments and rings
    pub fn uniform(resolution: u32) -> Self {
        Self::new(DEFAULT_RADIUS, resolution, resolution)
    }

    /// Number of vertices the generator emits: `(rings + 1) × (segments + 1)`
    pub fn vertex_count(&self) -> u64 {
        (u64::from(self.rings) + 1) * (u64::from(self.segments) + 1)
    }

    /// Number of flat index values the generator emits: `2 × rings × (segments + 1)`
    pub fn index_count(&self) -> u64 {
        2 * u64::from(self.rings) * (u64::from(self.segments) + 1)
    }
}

impl Default for SphereParams {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_RINGS)
    }
}

/// Generated sphere data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereMesh {
    /// Flat positions: `[x0, y0, z0, x1, y1, z1, ...]`
    pub vertices: Vec<f64>,
    /// Flat ring-to-ring index pairs: `[a0, b0, a1, b1, ...]`
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Create empty mesh data with room for `vertex_count` vertices and
    /// `index_count` flat indices
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append a vertex
    pub(super) fn add_vertex(&mut self, position: DVec3) {
        self.vertices
            .extend_from_slice(&[position.x, position.y, position.z]);
    }

    /// Append an edge between two vertex indices
    pub(super) fn add_edge(&mut self, i0: u32, i1: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get edge (index pair) count
    pub fn index_pair_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Position of vertex `index`, if it exists
    pub fn position(&self, index: usize) -> Option<DVec3> {
        let start = index.checked_mul(3)?;
        let end = start.checked_add(3)?;
        self.vertices.get(start..end).map(DVec3::from_slice)
    }

    /// Iterate over vertex positions in generation order
    pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.vertices.chunks_exact(3).map(DVec3::from_slice)
    }

    /// Iterate over `(upper, lower)` index pairs in generation order
    pub fn index_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.indices.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Narrow positions to `f32` for upload as vertex/index buffers
    pub fn to_gpu_buffers(&self) -> GpuBuffers {
        GpuBuffers {
            vertices: self.vertices.iter().map(|&v| v as f32).collect(),
            indices: self.indices.clone(),
        }
    }
}

/// Vertex and index buffers in GPU upload layout
///
/// Positions are tightly packed `f32x3` (12 bytes/vertex), indices are `u32`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GpuBuffers {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl GpuBuffers {
    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex buffer contents as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices) // [f32] → &[u8]
    }

    /// Index buffer contents as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices) // [u32] → &[u8]
    }
}
