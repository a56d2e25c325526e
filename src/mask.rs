use crate::mesh::Point;

/// Domain membership test, evaluated once per cell at its centroid.
///
/// Implementations may close over whatever geometric parameters they need;
/// the builder only asks whether a centroid lies inside the domain. The
/// predicate must be deterministic for reproducible output.
pub trait Mask {
    fn contains(&self, centroid: &Point) -> bool;
}

impl<F> Mask for F
where
    F: Fn(&Point) -> bool,
{
    #[inline]
    fn contains(&self, centroid: &Point) -> bool {
        self(centroid)
    }
}
