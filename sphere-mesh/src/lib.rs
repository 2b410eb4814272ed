//! UV sphere mesh generation
//!
//! Generates the vertex positions of a latitude/longitude sphere together with
//! the index pairs that connect each vertex to its neighbour on the next ring.
//!
//! - [`procedural`]: pure generation, no I/O
//! - [`export`]: newline-delimited `.dat` text files (write and read back)
//!
//! ```no_run
//! use sphere_mesh::{export, generate_uv_sphere, SphereParams};
//!
//! let mesh = generate_uv_sphere(&SphereParams::uniform(64))?;
//! export::write_dat_files(&mesh, ".".as_ref())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod procedural;

pub use error::MeshError;
pub use procedural::{generate_uv_sphere, GpuBuffers, SphereMesh, SphereParams};
