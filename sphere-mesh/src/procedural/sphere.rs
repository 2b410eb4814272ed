//! UV sphere generator

use glam::DVec3;
use std::f64::consts::PI;
use tracing::debug;

use super::types::{SphereMesh, SphereParams};
use crate::error::MeshError;

/// Generate a UV sphere's vertex positions and ring-to-ring index pairs
///
/// # Arguments
/// * `params` - Radius, longitudinal divisions (`segments`, min 1) and
///   latitudinal divisions (`rings`, min 1)
///
/// # Returns
/// Mesh with `(rings + 1) × (segments + 1)` vertices and
/// `rings × (segments + 1)` index pairs.
///
/// # Layout
/// - Ring 0 is the `+Y` pole, ring `rings` is the `-Y` pole. Every vertex of a
///   pole ring sits at the same point.
/// - Each ring holds `segments + 1` vertices. The last one duplicates the
///   first at `phi = 2π` to give the seam its own vertex column.
/// - Vertex `(ring, seg)` lives at index `ring × (segments + 1) + seg` and is
///   paired with the vertex at the same `seg` on `ring + 1`. The last ring
///   emits no pairs.
///
/// # Errors
/// [`MeshError::ZeroDivisions`] if `segments` or `rings` is 0, and
/// [`MeshError::TooManyVertices`] if the vertex count exceeds the `u32` index
/// range.
pub fn generate_uv_sphere(params: &SphereParams) -> Result<SphereMesh, MeshError> {
    let SphereParams {
        radius,
        segments,
        rings,
    } = *params;

    if segments == 0 || rings == 0 {
        return Err(MeshError::ZeroDivisions { segments, rings });
    }

    let vertex_count = params.vertex_count();
    if vertex_count > u64::from(u32::MAX) {
        return Err(MeshError::TooManyVertices { vertex_count });
    }

    let mut mesh =
        SphereMesh::with_capacity(vertex_count as usize, params.index_count() as usize);
    let verts_per_ring = segments + 1;

    for ring in 0..=rings {
        let theta = PI * f64::from(ring) / f64::from(rings); // 0 to PI (north pole to south pole)
        let (sin_theta, cos_theta) = theta.sin_cos();

        for seg in 0..=segments {
            let phi = 2.0 * PI * f64::from(seg) / f64::from(segments); // 0 to 2PI inclusive
            let (sin_phi, cos_phi) = phi.sin_cos();

            let direction = DVec3::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.add_vertex(radius * direction);

            if ring != rings {
                let upper = ring * verts_per_ring + seg;
                mesh.add_edge(upper, upper + verts_per_ring);
            }
        }
    }

    debug!(
        radius,
        segments,
        rings,
        vertices = mesh.vertex_count(),
        index_pairs = mesh.index_pair_count(),
        "generated uv sphere"
    );

    Ok(mesh)
}
