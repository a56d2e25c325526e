use std::collections::HashMap;

use tracing::info;

use crate::boundary::{classify_boundary, BoundaryFace};
use crate::error::MeshError;
use crate::grid::Grid;
use crate::mask::Mask;
use crate::mesh::Mesh;

/// A deduplicated geometric face, stored in the outward vertex order of
/// whichever cell emitted it first.
#[derive(Clone, Debug)]
struct FaceEntry {
    verts: [usize; 4],
    owner: usize,
    neighbour: Option<usize>,
}

/// Registry of unique geometric faces.
///
/// Two emissions describe the same face iff their sorted vertex indices
/// agree; vertex order and orientation are ignored for identity. The first
/// claiming cell becomes owner and fixes the stored orientation, the second
/// becomes neighbour, a third is a manifold violation.
#[derive(Debug, Default)]
pub struct FaceRegistry {
    entries: Vec<FaceEntry>,
    by_key: HashMap<[usize; 4], usize>,
}

impl FaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record that `cell` emits the face `verts` (in its own outward order).
    pub fn claim(&mut self, verts: [usize; 4], cell: usize) -> Result<(), MeshError> {
        let mut key = verts;
        key.sort_unstable();
        match self.by_key.get(&key) {
            None => {
                self.by_key.insert(key, self.entries.len());
                self.entries.push(FaceEntry {
                    verts,
                    owner: cell,
                    neighbour: None,
                });
            }
            Some(&idx) => {
                let entry = &mut self.entries[idx];
                match entry.neighbour {
                    None => entry.neighbour = Some(cell),
                    Some(neighbour) => {
                        return Err(MeshError::NonManifold {
                            verts: key,
                            owner: entry.owner,
                            neighbour,
                            cell,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Rebuild an owner/neighbour mesh from the cells of `grid` whose centroid
/// passes `mask`.
///
/// Kept cells are renumbered consecutively in structured scan order. Each
/// kept cell emits its 6 quadrilateral faces with outward-pointing vertex
/// orderings; shared faces are deduplicated into owner/neighbour pairs and
/// the exposed remainder is classified into the six boundary patches.
///
/// # Errors
/// [`MeshError::DegenerateSelection`] when no cell survives the mask, and
/// [`MeshError::NonManifold`] when three cells claim one geometric face. No
/// partial mesh is returned in either case.
pub fn apply_mask(grid: &Grid, mask: &impl Mask) -> Result<Mesh, MeshError> {
    let n_cells = grid.n_cells();

    // 1) decide which cells survive, from their centroids
    let mut keep = vec![false; n_cells];
    let mut n_kept = 0usize;
    for k in 0..grid.nz {
        for j in 0..grid.ny {
            for i in 0..grid.nx {
                let centroid = grid.cell_centroid(i, j, k);
                if mask.contains(&centroid) {
                    keep[grid.cell_index(i, j, k)] = true;
                    n_kept += 1;
                }
            }
        }
    }
    if n_kept == 0 {
        return Err(MeshError::DegenerateSelection);
    }

    // 2) old -> new cell numbering over kept cells only
    let mut cell_map: Vec<Option<usize>> = vec![None; n_cells];
    let mut next = 0usize;
    for (old, &kept) in keep.iter().enumerate() {
        if kept {
            cell_map[old] = Some(next);
            next += 1;
        }
    }

    // 3) emit 6 faces per kept cell and deduplicate
    let mut registry = FaceRegistry::new();
    for k in 0..grid.nz {
        for j in 0..grid.ny {
            for i in 0..grid.nx {
                let cell = match cell_map[grid.cell_index(i, j, k)] {
                    Some(cell) => cell,
                    None => continue,
                };
                let [p000, p100, p010, p110, p001, p101, p011, p111] = grid.cell_corners(i, j, k);

                // outward vertex order for each face of the cell box
                registry.claim([p000, p001, p011, p010], cell)?; // x-min, normal -x
                registry.claim([p100, p110, p111, p101], cell)?; // x-max, normal +x
                registry.claim([p000, p100, p101, p001], cell)?; // y-min, normal -y
                registry.claim([p010, p011, p111, p110], cell)?; // y-max, normal +y
                registry.claim([p000, p010, p110, p100], cell)?; // z-min, normal -z
                registry.claim([p001, p101, p111, p011], cell)?; // z-max, normal +z
            }
        }
    }

    // 4) internal faces first, exposed faces go to the classifier
    let mut faces = Vec::with_capacity(registry.len());
    let mut owner = Vec::with_capacity(registry.len());
    let mut neighbour = Vec::new();
    let mut candidates = Vec::new();
    for entry in &registry.entries {
        match entry.neighbour {
            Some(ngb) => {
                faces.push(entry.verts);
                owner.push(entry.owner);
                neighbour.push(ngb);
            }
            None => candidates.push(BoundaryFace {
                verts: entry.verts,
                owner: entry.owner,
            }),
        }
    }
    let n_internal = faces.len();

    let classified = classify_boundary(&grid.points, &candidates, n_internal);
    faces.extend(classified.faces);
    owner.extend(classified.owner);

    let mesh = Mesh {
        points: grid.points.clone(),
        faces,
        owner,
        neighbour,
        patches: classified.patches,
    };
    mesh.assert_consistent();

    info!(
        old_cells = n_cells,
        kept_cells = n_kept,
        internal_faces = n_internal,
        boundary_faces = mesh.n_boundary_faces(),
        "masked topology rebuilt"
    );
    Ok(mesh)
}
