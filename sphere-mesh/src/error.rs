//! Error type for sphere generation

/// Error returned when sphere parameters cannot produce a mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// Both angle steps divide by the division counts.
    #[error("segments and rings must be at least 1 (got segments={segments}, rings={rings})")]
    ZeroDivisions { segments: u32, rings: u32 },

    #[error("sphere would have {vertex_count} vertices, more than u32 indices can address")]
    TooManyVertices { vertex_count: u64 },
}
