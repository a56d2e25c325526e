use tracing::{info, warn};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Drop every point not referenced by a face and renumber the remainder to
/// a dense range, preserving relative order.
///
/// Face vertex indices are rewritten through the old→new map; owner,
/// neighbour and patch data are untouched. Running this on an already
/// compacted mesh changes nothing.
///
/// # Errors
/// [`MeshError::InvalidPointReference`] when a face indexes outside the
/// point array. The mesh is left exactly as it was.
pub fn remove_unused_points(mesh: &mut Mesh) -> Result<(), MeshError> {
    let n_points = mesh.points.len();
    if n_points == 0 || mesh.faces.is_empty() {
        return Ok(());
    }

    // 1) mark referenced points, validating every index up front
    let mut used = vec![false; n_points];
    for (face, verts) in mesh.faces.iter().enumerate() {
        for &point in verts {
            if point >= n_points {
                return Err(MeshError::InvalidPointReference {
                    face,
                    point,
                    n_points,
                });
            }
            used[point] = true;
        }
    }

    // 2) old -> new numbering over used points only
    let mut old_to_new: Vec<Option<usize>> = vec![None; n_points];
    let mut new_points = Vec::with_capacity(n_points);
    for (old, &is_used) in used.iter().enumerate() {
        if is_used {
            old_to_new[old] = Some(new_points.len());
            new_points.push(mesh.points[old]);
        }
    }
    if new_points.is_empty() {
        warn!("no referenced points found, skipping compaction");
        return Ok(());
    }

    // 3) rewrite face indices; every index was marked used above, so the
    //    map always hits
    for verts in &mut mesh.faces {
        for point in verts.iter_mut() {
            if let Some(new_idx) = old_to_new[*point] {
                *point = new_idx;
            }
        }
    }
    mesh.points = new_points;

    info!(
        before = n_points,
        after = mesh.points.len(),
        "compacted point set"
    );
    Ok(())
}
