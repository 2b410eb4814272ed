//! Procedural sphere generation
//!
//! Vertices are flat `f64` triples `[x0, y0, z0, x1, ...]`. Indices are flat
//! `u32` pairs linking a vertex on one ring to the vertex directly below it on
//! the next ring.

mod sphere;
mod types;


pub use sphere::generate_uv_sphere;
pub use types::{GpuBuffers, SphereMesh, SphereParams};
