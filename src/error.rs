use thiserror::Error;

/// Errors raised while building or post-processing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The membership test rejected every cell centroid.
    #[error("no cells left after masking")]
    DegenerateSelection,

    /// A third cell claimed a geometric face already shared by two cells.
    #[error(
        "non-manifold face {verts:?} claimed by cell {cell} \
         (already owned by {owner} with neighbour {neighbour})"
    )]
    NonManifold {
        /// Canonical (sorted) vertex indices of the offending face.
        verts: [usize; 4],
        owner: usize,
        neighbour: usize,
        cell: usize,
    },

    /// A face references a vertex index outside the mesh point array.
    #[error("face {face} references invalid point index {point} (mesh has {n_points} points)")]
    InvalidPointReference {
        face: usize,
        point: usize,
        n_points: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
