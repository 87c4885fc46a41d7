/// SCN scene file parser (ASCII scene description format)
///
/// A scene is a block of objects, each with an optional transform and, for
/// mesh objects, vertex and triangle lines. Rotations are given in degrees.
///
/// ```text
/// scene
///   object "Cube" mesh
///     translation 0 0 2
///     rotation 0 45 0
///     scale 1 1 1
///     vertex -0.5 -0.5 0.5
///     vertex 0.5 -0.5 0.5
///     vertex 0.5 0.5 0.5
///     triangle 0 1 2
///   endobject
///   object "Key" light
///   endobject
/// endscene
/// ```
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{digit1, multispace0, multispace1},
    combinator::{map_res, value},
    multi::many0,
    number::complete::float,
    sequence::preceded,
    IResult,
};

use nalgebra::Vector3;

use crate::geometry::{LoopTriangle, Mesh};
use crate::scene::{Object, ObjectKind, Scene};
use crate::transform::{BasisTransform, EulerRotation};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ObjectType {
    Mesh,
    Light,
    Camera,
    Empty,
}

/// An object block as parsed, before kind-specific validation
struct RawObject {
    name: String,
    object_type: ObjectType,
    basis: BasisTransform,
    mesh: Mesh,
}

enum Attribute {
    Translation(f32, f32, f32),
    Rotation(f32, f32, f32),
    Scale(f32, f32, f32),
    Vertex(f32, f32, f32),
    Triangle(usize, usize, usize),
}

/// Parse an SCN scene file
pub fn parse_scene(input: &str) -> Result<Scene, String> {
    let raw_objects = match parse_scene_impl(input) {
        Ok((_, objects)) => objects,
        Err(e) => return Err(format!("Failed to parse scene file: {:?}", e)),
    };

    let mut scene = Scene::new();
    for raw in raw_objects {
        scene.add_object(build_object(raw)?);
    }

    Ok(scene)
}

fn build_object(raw: RawObject) -> Result<Object, String> {
    let RawObject {
        name,
        object_type,
        basis,
        mesh,
    } = raw;

    if object_type != ObjectType::Mesh
        && (!mesh.vertices.is_empty() || !mesh.loop_triangles.is_empty())
    {
        return Err(format!(
            "object \"{}\" is not a mesh but declares geometry",
            name
        ));
    }

    for triangle in &mesh.loop_triangles {
        for &index in &triangle.vertices {
            if index >= mesh.vertices.len() {
                return Err(format!(
                    "object \"{}\": triangle references vertex {} but the mesh has {} vertices",
                    name,
                    index,
                    mesh.vertices.len()
                ));
            }
        }
    }

    let kind = match object_type {
        ObjectType::Mesh => ObjectKind::Mesh(mesh),
        ObjectType::Light => ObjectKind::Light,
        ObjectType::Camera => ObjectKind::Camera,
        ObjectType::Empty => ObjectKind::Empty,
    };

    Ok(Object { name, basis, kind })
}

fn parse_scene_impl(input: &str) -> IResult<&str, Vec<RawObject>> {
    let (input, _) = preceded(multispace0, tag("scene"))(input)?;
    let (input, objects) = many0(parse_object)(input)?;
    let (input, _) = preceded(multispace0, tag("endscene"))(input)?;

    Ok((input, objects))
}

fn parse_object(input: &str) -> IResult<&str, RawObject> {
    let (input, _) = preceded(multispace0, tag("object"))(input)?;
    let (input, name) = parse_name(input)?;
    let (input, object_type) = preceded(multispace1, parse_object_type)(input)?;
    let (input, attributes) = many0(parse_attribute)(input)?;
    let (input, _) = preceded(multispace0, tag("endobject"))(input)?;

    let mut raw = RawObject {
        name: name.to_string(),
        object_type,
        basis: BasisTransform::identity(),
        mesh: Mesh::new(),
    };

    for attribute in attributes {
        match attribute {
            Attribute::Translation(x, y, z) => raw.basis.translation = Vector3::new(x, y, z),
            Attribute::Rotation(x, y, z) => {
                raw.basis.rotation = EulerRotation::from_degrees(x, y, z)
            }
            Attribute::Scale(x, y, z) => raw.basis.scale = Vector3::new(x, y, z),
            Attribute::Vertex(x, y, z) => raw.mesh.add_vertex(x, y, z),
            Attribute::Triangle(a, b, c) => raw.mesh.add_triangle(LoopTriangle::new(a, b, c)),
        }
    }

    Ok((input, raw))
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    let (input, _) = preceded(multispace1, tag("\""))(input)?;
    let (input, name) = take_while(|c: char| c != '"')(input)?;
    let (input, _) = tag("\"")(input)?;

    Ok((input, name))
}

fn parse_object_type(input: &str) -> IResult<&str, ObjectType> {
    alt((
        value(ObjectType::Mesh, tag("mesh")),
        value(ObjectType::Light, tag("light")),
        value(ObjectType::Camera, tag("camera")),
        value(ObjectType::Empty, tag("empty")),
    ))(input)
}

fn parse_attribute(input: &str) -> IResult<&str, Attribute> {
    preceded(
        multispace0,
        alt((
            parse_translation,
            parse_rotation,
            parse_scale,
            parse_vertex,
            parse_triangle,
        )),
    )(input)
}

fn parse_translation(input: &str) -> IResult<&str, Attribute> {
    let (input, _) = tag("translation")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    Ok((input, Attribute::Translation(x, y, z)))
}

fn parse_rotation(input: &str) -> IResult<&str, Attribute> {
    let (input, _) = tag("rotation")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    Ok((input, Attribute::Rotation(x, y, z)))
}

fn parse_scale(input: &str) -> IResult<&str, Attribute> {
    let (input, _) = tag("scale")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    Ok((input, Attribute::Scale(x, y, z)))
}

fn parse_vertex(input: &str) -> IResult<&str, Attribute> {
    let (input, _) = tag("vertex")(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    Ok((input, Attribute::Vertex(x, y, z)))
}

fn parse_triangle(input: &str) -> IResult<&str, Attribute> {
    let (input, _) = tag("triangle")(input)?;
    let (input, a) = parse_index(input)?;
    let (input, b) = parse_index(input)?;
    let (input, c) = parse_index(input)?;
    Ok((input, Attribute::Triangle(a, b, c)))
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace1(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;

    Ok((input, (x, y, z)))
}

fn parse_index(input: &str) -> IResult<&str, usize> {
    preceded(multispace1, map_res(digit1, str::parse))(input)
}
