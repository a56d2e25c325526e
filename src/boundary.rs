use crate::mesh::{Patch, PatchKind, Point};

/// An exposed face awaiting patch assignment.
#[derive(Clone, Debug)]
pub struct BoundaryFace {
    pub verts: [usize; 4],
    pub owner: usize,
}

/// Boundary faces grouped by patch, ready to append after the internal
/// faces of a mesh.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedBoundary {
    pub faces: Vec<[usize; 4]>,
    pub owner: Vec<usize>,
    pub patches: Vec<Patch>,
}

/// Order in which patches are appended to the face array. The `boundary`
/// file serializes patch blocks in [`PatchKind::WRITE_ORDER`] instead; only
/// the recorded (start_face, n_faces) pairs tie the two together.
pub const EMIT_ORDER: [PatchKind; 6] = [
    PatchKind::Back,
    PatchKind::Front,
    PatchKind::Bottom,
    PatchKind::Top,
    PatchKind::Right,
    PatchKind::Left,
];

/// Assign each candidate face to one of the six patches.
///
/// The face centroid is tested against the extremal planes of the bounding
/// box of `points`, in fixed priority order: min-Z (back), max-Z (front),
/// min-Y (bottom), max-Y (top), min-X (left). Everything else falls into
/// the catch-all "right" patch, which therefore absorbs both the true max-X
/// wall and any surface carved out by masking. A centroid near two planes
/// at once goes to the first matching test, not the nearest plane; this
/// tie-break is an observable contract.
///
/// # Arguments
/// * `points` - Full point set of the mesh (the box is taken over all of it).
/// * `candidates` - Exposed faces with their owners.
/// * `first_face` - Index of the first boundary face in the final face
///   array, i.e. the internal face count.
pub fn classify_boundary(
    points: &[Point],
    candidates: &[BoundaryFace],
    first_face: usize,
) -> ClassifiedBoundary {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }
    let mut extent = (max.x - min.x).max(max.y - min.y).max(max.z - min.z);
    if extent <= 0.0 {
        extent = 1.0;
    }
    let tol = 1e-8 * extent;

    let mut bins: [Vec<usize>; 6] = Default::default();
    for (idx, face) in candidates.iter().enumerate() {
        let mut fc = Point::new(0.0, 0.0, 0.0);
        for &v in &face.verts {
            let p = &points[v];
            fc.x += p.x;
            fc.y += p.y;
            fc.z += p.z;
        }
        fc.x *= 0.25;
        fc.y *= 0.25;
        fc.z *= 0.25;

        let kind = if (fc.z - min.z).abs() <= tol {
            PatchKind::Back
        } else if (fc.z - max.z).abs() <= tol {
            PatchKind::Front
        } else if (fc.y - min.y).abs() <= tol {
            PatchKind::Bottom
        } else if (fc.y - max.y).abs() <= tol {
            PatchKind::Top
        } else if (fc.x - min.x).abs() <= tol {
            PatchKind::Left
        } else {
            PatchKind::Right
        };
        let slot = match kind {
            PatchKind::Back => 0,
            PatchKind::Front => 1,
            PatchKind::Bottom => 2,
            PatchKind::Top => 3,
            PatchKind::Right => 4,
            PatchKind::Left => 5,
        };
        bins[slot].push(idx);
    }

    let mut out = ClassifiedBoundary::default();
    let mut start = first_face;
    for (slot, &kind) in EMIT_ORDER.iter().enumerate() {
        out.patches.push(Patch {
            kind,
            start_face: start,
            n_faces: bins[slot].len(),
        });
        start += bins[slot].len();
        for &idx in &bins[slot] {
            out.faces.push(candidates[idx].verts);
            out.owner.push(candidates[idx].owner);
        }
    }
    out
}
