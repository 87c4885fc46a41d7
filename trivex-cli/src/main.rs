/// TriVex - Triangle Vertex Exporter
///
/// Parses an SCN scene description and writes the triangles of every mesh
/// object to a plain text file: one triangle per line, nine
/// space-separated floats per line.
///
/// Usage: trivex <scene.scn> <output.vertices>
use std::env;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use trivex_core::{export, scn};

fn main() -> io::Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <scene.scn> <output.vertices>", args[0]);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "expected a scene file and an output path",
        ));
    }

    let scene_path = &args[1];
    let output_path = Path::new(&args[2]);

    info!("Loading scene file: {}", scene_path);
    let text = fs::read_to_string(scene_path)?;

    let scene =
        scn::parse_scene(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!(
        "Parsed {} objects with {} triangles",
        scene.objects.len(),
        scene.triangle_count()
    );

    let written = export::write_vertices(&scene, output_path)?;

    println!("Wrote {} triangles to {}", written, output_path.display());
    Ok(())
}
