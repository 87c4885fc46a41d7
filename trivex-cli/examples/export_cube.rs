/// Example: Export a demo scene to a .vertices file
///
/// Usage: cargo run --example export_cube -- path/to/output.vertices
use std::env;
use std::io;
use std::path::Path;

use nalgebra::Vector3;
use trivex_core::{export, BasisTransform, EulerRotation, Mesh, Object, Scene};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let output_path = if args.len() < 2 {
        eprintln!("No output path provided, writing to cube.vertices");
        "cube.vertices".to_string()
    } else {
        args[1].clone()
    };

    let mut basis = BasisTransform::identity();
    basis.translation = Vector3::new(0.0, 1.0, 0.0);
    basis.rotation = EulerRotation::from_degrees(0.0, 45.0, 0.0);

    let mut scene = Scene::new();
    scene.add_object(Object::mesh("Cube", Mesh::cube(2.0)).with_basis(basis));
    scene.add_object(Object::light("Key"));

    let written = export::write_vertices(&scene, Path::new(&output_path))?;

    println!("Wrote {} triangles to {}", written, output_path);
    Ok(())
}
