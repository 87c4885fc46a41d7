/// Scene graph: an ordered collection of typed objects
use crate::geometry::Mesh;
use crate::transform::BasisTransform;

/// What an object is; only mesh objects carry geometry
#[derive(Debug, Clone)]
pub enum ObjectKind {
    Mesh(Mesh),
    Light,
    Camera,
    Empty,
}

/// A named scene object with its local basis transform
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub basis: BasisTransform,
    pub kind: ObjectKind,
}

impl Object {
    pub fn mesh(name: &str, mesh: Mesh) -> Self {
        Self {
            name: name.to_string(),
            basis: BasisTransform::identity(),
            kind: ObjectKind::Mesh(mesh),
        }
    }

    pub fn light(name: &str) -> Self {
        Self {
            name: name.to_string(),
            basis: BasisTransform::identity(),
            kind: ObjectKind::Light,
        }
    }

    pub fn camera(name: &str) -> Self {
        Self {
            name: name.to_string(),
            basis: BasisTransform::identity(),
            kind: ObjectKind::Camera,
        }
    }

    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            basis: BasisTransform::identity(),
            kind: ObjectKind::Empty,
        }
    }

    pub fn with_basis(mut self, basis: BasisTransform) -> Self {
        self.basis = basis;
        self
    }

    pub fn mesh_data(&self) -> Option<&Mesh> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

/// A scene holds objects in their native order
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Total loop triangles across all mesh objects
    pub fn triangle_count(&self) -> usize {
        self.objects
            .iter()
            .filter_map(|object| object.mesh_data())
            .map(|mesh| mesh.loop_triangles.len())
            .sum()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
