use crate::mesh::Point;

/// Structured background grid of hexahedral cells.
///
/// Dimensions are cell counts per axis; the point array has
/// `(nx+1)*(ny+1)*(nz+1)` entries in i-fastest order.
#[derive(Clone, Debug)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub points: Vec<Point>,
}

impl Grid {
    pub fn new(nx: usize, ny: usize, nz: usize, points: Vec<Point>) -> Self {
        assert!(nx >= 1 && ny >= 1 && nz >= 1);
        assert_eq!(points.len(), (nx + 1) * (ny + 1) * (nz + 1));
        Self { nx, ny, nz, points }
    }

    /// Sample an axis-aligned box of extents `lx × ly × lz` with uniform
    /// spacing, node (i, j, k) at `(i·dx, j·dy, k·dz)`.
    pub fn from_box(nx: usize, ny: usize, nz: usize, lx: f64, ly: f64, lz: f64) -> Self {
        let dx = lx / nx as f64;
        let dy = ly / ny as f64;
        let dz = lz / nz as f64;
        let mut points = Vec::with_capacity((nx + 1) * (ny + 1) * (nz + 1));
        for k in 0..=nz {
            for j in 0..=ny {
                for i in 0..=nx {
                    points.push(Point::new(i as f64 * dx, j as f64 * dy, k as f64 * dz));
                }
            }
        }
        Self::new(nx, ny, nz, points)
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        (self.nx + 1) * (self.ny + 1) * (self.nz + 1)
    }

    #[inline]
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    #[inline]
    pub fn point_index(&self, i: usize, j: usize, k: usize) -> usize {
        // i–j–k order (i fastest)
        debug_assert!(i <= self.nx && j <= self.ny && k <= self.nz);
        (k * (self.ny + 1) + j) * (self.nx + 1) + i
    }

    #[inline]
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny && k < self.nz);
        (k * self.ny + j) * self.nx + i
    }

    /// Point indices of the 8 corners of cell (i, j, k), in the order
    /// `[p000, p100, p010, p110, p001, p101, p011, p111]` where the digits
    /// are the i/j/k offsets.
    #[inline]
    pub fn cell_corners(&self, i: usize, j: usize, k: usize) -> [usize; 8] {
        [
            self.point_index(i, j, k),
            self.point_index(i + 1, j, k),
            self.point_index(i, j + 1, k),
            self.point_index(i + 1, j + 1, k),
            self.point_index(i, j, k + 1),
            self.point_index(i + 1, j, k + 1),
            self.point_index(i, j + 1, k + 1),
            self.point_index(i + 1, j + 1, k + 1),
        ]
    }

    /// Arithmetic mean of the 8 corner points of cell (i, j, k).
    pub fn cell_centroid(&self, i: usize, j: usize, k: usize) -> Point {
        let mut c = Point::new(0.0, 0.0, 0.0);
        for corner in self.cell_corners(i, j, k) {
            let p = &self.points[corner];
            c.x += p.x;
            c.y += p.y;
            c.z += p.z;
        }
        c.x /= 8.0;
        c.y /= 8.0;
        c.z /= 8.0;
        c
    }
}
