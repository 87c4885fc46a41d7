/// Triangle vertex export
///
/// Flattens every mesh object in a scene to plain text: one line per loop
/// triangle, nine space-separated floats per line (three vertices, x y z
/// each), lines joined with `\n` and no trailing newline. The downstream
/// loader splits on `\n` and requires each line to parse as exactly nine
/// floats, so a trailing newline would break it.
///
/// Coordinates are formatted with `Display` for `f32` (shortest decimal
/// string that round-trips); consumers parse floats rather than compare
/// text.
use std::fs;
use std::io;
use std::path::Path;

use nalgebra::Point3;

use crate::scene::Scene;

fn format_vertex(position: &Point3<f32>) -> String {
    format!("{} {} {}", position.x, position.y, position.z)
}

/// Produce one line per loop triangle, in scene order
///
/// Each mesh object's basis transform is applied to a working copy of its
/// vertices; the scene itself is left untouched. Non-mesh objects and
/// meshes without triangles contribute no lines.
pub fn triangle_lines(scene: &Scene) -> Vec<String> {
    let mut lines = Vec::new();

    for object in &scene.objects {
        let mesh = match object.mesh_data() {
            Some(mesh) => mesh,
            None => continue,
        };

        let world = mesh.transformed(&object.basis.matrix());
        for triangle in &world.loop_triangles {
            let positions = world.triangle_positions(triangle);
            let line = positions
                .iter()
                .map(format_vertex)
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line);
        }
    }

    lines
}

/// The full export text: LF-separated lines, no trailing newline
pub fn vertices_text(scene: &Scene) -> String {
    triangle_lines(scene).join("\n")
}

/// Write the scene's triangles to a file, overwriting existing content
///
/// The text is accumulated fully before the single write, so a failure
/// during geometry processing never leaves a truncated file. Returns the
/// number of triangles written.
pub fn write_vertices(scene: &Scene, path: &Path) -> io::Result<usize> {
    let lines = triangle_lines(scene);
    fs::write(path, lines.join("\n"))?;

    Ok(lines.len())
}
