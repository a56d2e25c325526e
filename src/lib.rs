pub mod boundary;
pub mod compact;
pub mod error;
pub mod grid;
pub mod mask;
pub mod mesh;
pub mod topology;
pub mod write;

pub use boundary::{classify_boundary, BoundaryFace, ClassifiedBoundary};
pub use compact::remove_unused_points;
pub use error::MeshError;
pub use grid::Grid;
pub use mask::Mask;
pub use mesh::{Mesh, MeshStats, Patch, PatchKind, Point};
pub use topology::{apply_mask, FaceRegistry};
pub use write::{write_polymesh, write_vtk_surface, VtkFormat};
