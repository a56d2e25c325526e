use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use foamgen::{
    apply_mask, remove_unused_points, write_polymesh, write_vtk_surface, Grid, MeshError, Point,
    VtkFormat,
};

/// Shock tube on the left, half-ellipse reflector on the right.
fn shock_tube_mask(lx: f64, ly: f64) -> impl Fn(&Point) -> bool {
    move |c: &Point| {
        let tube_end = 0.5 * lx;
        if c.x <= tube_end {
            return true;
        }
        // ellipse centred on the box midpoint with semi-axes 0.5*lx, 0.5*ly
        let xc = (c.x - 0.5 * lx) / (0.5 * lx);
        let yc = (c.y - 0.5 * ly) / (0.5 * ly);
        xc * xc + yc * yc <= 1.0
    }
}

fn main() -> Result<(), MeshError> {
    tracing_subscriber::fmt::init();

    let (nx, ny, nz) = (1000, 500, 1);
    let (lx, ly, lz) = (1.0, 0.5, 0.01);

    let out_dir: PathBuf = env::args().nth(1).unwrap_or_else(|| "polyMesh".into()).into();

    let grid = Grid::from_box(nx, ny, nz, lx, ly, lz);
    let mask = shock_tube_mask(lx, ly);

    let mut mesh = apply_mask(&grid, &mask)?;
    remove_unused_points(&mut mesh)?;
    info!(stats = ?mesh.stats(), "mesh ready");

    write_polymesh(&out_dir, &mesh)?;
    write_vtk_surface(Path::new("mesh.vtk"), &mesh, VtkFormat::Ascii)?;
    Ok(())
}
