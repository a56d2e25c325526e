use serde::Serialize;

/// A single mesh vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The six named boundary patches of a box-shaped domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PatchKind {
    Left,
    Right,
    Bottom,
    Top,
    Front,
    Back,
}

impl PatchKind {
    /// Order in which patch blocks appear in the `boundary` file. This is
    /// independent of the order patches are appended to the face array.
    pub const WRITE_ORDER: [PatchKind; 6] = [
        PatchKind::Left,
        PatchKind::Right,
        PatchKind::Bottom,
        PatchKind::Top,
        PatchKind::Front,
        PatchKind::Back,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatchKind::Left => "left",
            PatchKind::Right => "right",
            PatchKind::Bottom => "bottom",
            PatchKind::Top => "top",
            PatchKind::Front => "front",
            PatchKind::Back => "back",
        }
    }
}

/// A contiguous run of boundary faces sharing a classification.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Patch {
    pub kind: PatchKind,
    pub start_face: usize,
    pub n_faces: usize,
}

/// Size summary of a finished mesh.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct MeshStats {
    pub n_points: usize,
    pub n_faces: usize,
    pub n_internal_faces: usize,
    pub n_boundary_faces: usize,
}

/// Unstructured polyhedral mesh in owner/neighbour form.
///
/// `faces` holds all internal faces first, then the boundary faces grouped
/// by patch. `owner` has one entry per face; `neighbour` has one entry per
/// internal face only. Each face stores 4 vertex indices into `points`,
/// ordered so the implied normal points away from the owner cell.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub points: Vec<Point>,
    pub faces: Vec<[usize; 4]>,
    pub owner: Vec<usize>,
    pub neighbour: Vec<usize>,
    /// Patches in the order their faces were appended.
    pub patches: Vec<Patch>,
}

impl Mesh {
    #[inline]
    pub fn n_internal_faces(&self) -> usize {
        self.neighbour.len()
    }

    #[inline]
    pub fn n_boundary_faces(&self) -> usize {
        self.faces.len() - self.neighbour.len()
    }

    /// Look up a patch by kind.
    ///
    /// # Panics
    /// Panics when `kind` has no entry; meshes built by
    /// [`apply_mask`](crate::apply_mask) always carry all six patches.
    pub fn patch(&self, kind: PatchKind) -> Patch {
        self.patches
            .iter()
            .find(|p| p.kind == kind)
            .copied()
            .expect("mesh carries all six patches")
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            n_points: self.points.len(),
            n_faces: self.faces.len(),
            n_internal_faces: self.n_internal_faces(),
            n_boundary_faces: self.n_boundary_faces(),
        }
    }

    /// Structural invariants every finished mesh must satisfy. Violations
    /// are programming errors, not recoverable conditions.
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.owner.len(), self.faces.len());
        assert!(self.neighbour.len() <= self.faces.len());
        for (f, (&own, &ngb)) in self.owner.iter().zip(&self.neighbour).enumerate() {
            assert_ne!(own, ngb, "face {f} owns and neighbours the same cell");
        }
        let mut next = self.neighbour.len();
        let mut total = 0usize;
        for patch in &self.patches {
            assert_eq!(
                patch.start_face, next,
                "patch {:?} leaves a gap in the face array",
                patch.kind
            );
            next += patch.n_faces;
            total += patch.n_faces;
        }
        assert_eq!(next, self.faces.len());
        assert_eq!(total, self.n_boundary_faces());
    }
}
