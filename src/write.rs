use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};
use tracing::info;

use crate::error::MeshError;
use crate::mesh::{Mesh, PatchKind};

/// Output form of the debug surface file. Legacy VTK binary payloads are
/// big-endian regardless of host.
#[derive(Copy, Clone, Debug)]
pub enum VtkFormat {
    Ascii,
    Binary,
}

fn foam_header(class: &str, object: &str) -> String {
    format!(
        "FoamFile\n{{\n    version     2.0;\n    format      ascii;\n    class       {class};\n    location    \"polyMesh\";\n    object      {object};\n}}\n\n// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //\n\n"
    )
}

fn write_labels(w: &mut impl Write, header: &str, labels: &[usize]) -> std::io::Result<()> {
    w.write_all(header.as_bytes())?;
    writeln!(w, "{}\n(", labels.len())?;
    for label in labels {
        writeln!(w, "{label}")?;
    }
    writeln!(w, ")\n;\n")?;
    Ok(())
}

/// Write the five polyMesh sections (`points`, `faces`, `owner`,
/// `neighbour`, `boundary`) into `dir`, creating it if needed.
///
/// Patch blocks in `boundary` appear in the fixed name order
/// {left, right, bottom, top, front, back}; their startFace/nFaces fields
/// index into the face array regardless of that order.
///
/// # Panics
/// The mesh must carry all six boundary patches, as every mesh built by
/// [`apply_mask`](crate::apply_mask) does; writing `boundary` panics for a
/// hand-built mesh that lacks one.
pub fn write_polymesh(dir: &Path, mesh: &Mesh) -> Result<(), MeshError> {
    fs::create_dir_all(dir)?;

    {
        let mut w = BufWriter::new(File::create(dir.join("points"))?);
        w.write_all(foam_header("vectorField", "points").as_bytes())?;
        writeln!(w, "{}\n(", mesh.points.len())?;
        for p in &mesh.points {
            writeln!(w, "({} {} {})", p.x, p.y, p.z)?;
        }
        writeln!(w, ")\n;\n")?;
    }

    {
        let mut w = BufWriter::new(File::create(dir.join("faces"))?);
        w.write_all(foam_header("faceList", "faces").as_bytes())?;
        writeln!(w, "{}\n(", mesh.faces.len())?;
        for f in &mesh.faces {
            writeln!(w, "4({} {} {} {})", f[0], f[1], f[2], f[3])?;
        }
        writeln!(w, ")\n;\n")?;
    }

    {
        let mut w = BufWriter::new(File::create(dir.join("owner"))?);
        write_labels(&mut w, &foam_header("labelList", "owner"), &mesh.owner)?;
    }

    {
        let mut w = BufWriter::new(File::create(dir.join("neighbour"))?);
        write_labels(
            &mut w,
            &foam_header("labelList", "neighbour"),
            &mesh.neighbour,
        )?;
    }

    {
        let mut w = BufWriter::new(File::create(dir.join("boundary"))?);
        w.write_all(foam_header("polyBoundaryMesh", "boundary").as_bytes())?;
        writeln!(w, "{}\n(", PatchKind::WRITE_ORDER.len())?;
        for kind in PatchKind::WRITE_ORDER {
            let patch = mesh.patch(kind);
            writeln!(w, "{}", kind.name())?;
            writeln!(w, "{{")?;
            writeln!(w, "    type            patch;")?;
            writeln!(w, "    physicalType    patch;")?;
            writeln!(w, "    nFaces          {};", patch.n_faces)?;
            writeln!(w, "    startFace       {};", patch.start_face)?;
            writeln!(w, "}}")?;
        }
        writeln!(w, ")\n;\n")?;
    }

    info!(dir = %dir.display(), "polyMesh written");
    Ok(())
}

/// Dump every face of the mesh as a legacy-VTK POLYDATA surface for visual
/// topology inspection. Not solver input.
pub fn write_vtk_surface(path: &Path, mesh: &Mesh, format: VtkFormat) -> Result<(), MeshError> {
    let mut w = BufWriter::new(File::create(path)?);
    match format {
        VtkFormat::Ascii => write_vtk_ascii(&mut w, mesh)?,
        VtkFormat::Binary => write_vtk_binary(&mut w, mesh)?,
    }
    info!(path = %path.display(), "VTK surface written");
    Ok(())
}

fn vtk_preamble(w: &mut impl Write, data_mode: &str) -> std::io::Result<()> {
    writeln!(w, "# vtk DataFile Version 3.0")?;
    writeln!(w, "OpenFOAM mesh surface (faces only)")?;
    writeln!(w, "{data_mode}")?;
    writeln!(w, "DATASET POLYDATA")?;
    Ok(())
}

fn write_vtk_ascii(w: &mut impl Write, mesh: &Mesh) -> std::io::Result<()> {
    vtk_preamble(w, "ASCII")?;
    writeln!(w, "POINTS {} double", mesh.points.len())?;
    for p in &mesh.points {
        writeln!(w, "{} {} {}", p.x, p.y, p.z)?;
    }
    // one leading count plus 4 vertex indices per face
    let list_size = mesh.faces.len() * 5;
    writeln!(w, "POLYGONS {} {}", mesh.faces.len(), list_size)?;
    for f in &mesh.faces {
        writeln!(w, "4 {} {} {} {}", f[0], f[1], f[2], f[3])?;
    }
    Ok(())
}

fn write_vtk_binary(w: &mut impl Write, mesh: &Mesh) -> std::io::Result<()> {
    vtk_preamble(w, "BINARY")?;
    writeln!(w, "POINTS {} double", mesh.points.len())?;
    for p in &mesh.points {
        w.write_f64::<BigEndian>(p.x)?;
        w.write_f64::<BigEndian>(p.y)?;
        w.write_f64::<BigEndian>(p.z)?;
    }
    writeln!(w)?;
    let list_size = mesh.faces.len() * 5;
    writeln!(w, "POLYGONS {} {}", mesh.faces.len(), list_size)?;
    for f in &mesh.faces {
        w.write_i32::<BigEndian>(4)?;
        for &v in f {
            w.write_i32::<BigEndian>(v as i32)?;
        }
    }
    writeln!(w)?;
    Ok(())
}
