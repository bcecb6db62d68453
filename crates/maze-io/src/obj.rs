use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use maze_mesh_cpu::{MazeMesh, SurfaceGroup};

/// Writes the mesh as Wavefront OBJ with one `usemtl` section per surface group.
/// Empty groups are left out.
pub fn write_obj(mesh: &MazeMesh, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "# mazeworks mesh")?;
    writeln!(
        out,
        "# vertices={} triangles={}",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for p in mesh.pos.chunks_exact(3) {
        writeln!(out, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for t in mesh.uv.chunks_exact(2) {
        writeln!(out, "vt {} {}", t[0], t[1])?;
    }
    for n in mesh.norm.chunks_exact(3) {
        writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for group in SurfaceGroup::ALL {
        let idx = mesh.group(group);
        if idx.is_empty() {
            continue;
        }
        writeln!(out, "g {}", group.name())?;
        writeln!(out, "usemtl {}", group.name())?;
        for tri in idx.chunks_exact(3) {
            // OBJ indices are 1-based; position, uv and normal share an index
            let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
    }
    Ok(())
}

pub fn save_obj(mesh: &MazeMesh, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut w = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut w)?;
    w.flush()?;
    log::info!(
        target: "scene",
        "wrote {} ({} quads)",
        path.display(),
        mesh.quad_count()
    );
    Ok(())
}
