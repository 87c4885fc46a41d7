/// End-to-end tests: parse an SCN document, export it, write it out
use std::fs;
use std::path::PathBuf;

use trivex_core::export;
use trivex_core::scn;

const MIXED_SCENE: &str = r#"
scene
  object "Tri" mesh
    vertex 0 0 0
    vertex 1 0 0
    vertex 0 1 0
    triangle 0 1 2
  endobject
  object "Key" light
    translation 0 5 0
  endobject
  object "Quad" mesh
    translation 2 0 0
    vertex -0.5 -0.5 0
    vertex 0.5 -0.5 0
    vertex 0.5 0.5 0
    vertex -0.5 0.5 0
    triangle 0 1 2
    triangle 0 2 3
  endobject
  object "Main" camera
  endobject
endscene
"#;

fn temp_output(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("trivex-{}-{}", std::process::id(), name));
    path
}

fn parse_line(line: &str) -> Vec<f32> {
    line.split(' ').map(|token| token.parse().unwrap()).collect()
}

#[test]
fn mixed_scene_exports_mesh_triangles_only() {
    let scene = scn::parse_scene(MIXED_SCENE).unwrap();
    assert_eq!(scene.objects.len(), 4);

    let lines = export::triangle_lines(&scene);
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(parse_line(line).len(), 9);
    }
}

#[test]
fn translation_from_scene_file_shifts_coordinates() {
    let scene = scn::parse_scene(MIXED_SCENE).unwrap();
    let lines = export::triangle_lines(&scene);

    // First triangle of "Quad": local (-0.5, -0.5, 0) translated by (2, 0, 0)
    let values = parse_line(&lines[1]);
    assert!((values[0] - 1.5).abs() < 1e-6);
    assert!((values[1] - -0.5).abs() < 1e-6);
    assert!((values[2] - 0.0).abs() < 1e-6);
}

#[test]
fn written_file_round_trips() {
    let scene = scn::parse_scene(MIXED_SCENE).unwrap();
    let path = temp_output("mixed.vertices");

    let written = export::write_vertices(&scene, &path).unwrap();
    assert_eq!(written, 3);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, export::vertices_text(&scene));
    assert!(!contents.ends_with('\n'));
    assert_eq!(contents.lines().count(), 3);

    fs::remove_file(&path).unwrap();
}

#[test]
fn scene_without_meshes_writes_empty_file() {
    let scene = scn::parse_scene(
        r#"
        scene
          object "Key" light
          endobject
        endscene
        "#,
    )
    .unwrap();
    let path = temp_output("empty.vertices");

    let written = export::write_vertices(&scene, &path).unwrap();
    assert_eq!(written, 0);

    let metadata = fs::metadata(&path).unwrap();
    assert_eq!(metadata.len(), 0);

    fs::remove_file(&path).unwrap();
}

#[test]
fn rewrite_overwrites_existing_content() {
    let path = temp_output("overwrite.vertices");
    fs::write(&path, "stale content that should disappear").unwrap();

    let scene = scn::parse_scene(MIXED_SCENE).unwrap();
    export::write_vertices(&scene, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, export::vertices_text(&scene));

    fs::remove_file(&path).unwrap();
}
