/// Geometry primitives for mesh export
use nalgebra::{Matrix4, Point3};

/// A triangulated face referencing three vertices by index
#[derive(Debug, Clone, Copy)]
pub struct LoopTriangle {
    pub vertices: [usize; 3],
}

impl LoopTriangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

/// A 3D mesh as an ordered vertex sequence plus loop triangles indexing into it
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub loop_triangles: Vec<LoopTriangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            loop_triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            loop_triangles: Vec::with_capacity(triangle_count),
        }
    }

    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) {
        self.vertices.push(Point3::new(x, y, z));
    }

    pub fn add_triangle(&mut self, triangle: LoopTriangle) {
        self.loop_triangles.push(triangle);
    }

    /// Resolve a loop triangle to its three vertex positions
    pub fn triangle_positions(&self, triangle: &LoopTriangle) -> [Point3<f32>; 3] {
        let [a, b, c] = triangle.vertices;
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Apply an affine matrix to every vertex in place
    pub fn transform(&mut self, matrix: &Matrix4<f32>) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point(vertex);
        }
    }

    /// Apply an affine matrix to a copy of the mesh, leaving this one untouched
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Self {
        let mut mesh = self.clone();
        mesh.transform(matrix);
        mesh
    }

    /// Create a simple cube mesh for testing
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::with_capacity(8, 12);

        mesh.add_vertex(-half, -half, -half); // 0
        mesh.add_vertex(half, -half, -half); // 1
        mesh.add_vertex(half, half, -half); // 2
        mesh.add_vertex(-half, half, -half); // 3
        mesh.add_vertex(-half, -half, half); // 4
        mesh.add_vertex(half, -half, half); // 5
        mesh.add_vertex(half, half, half); // 6
        mesh.add_vertex(-half, half, half); // 7

        // Front face
        mesh.add_triangle(LoopTriangle::new(4, 5, 6));
        mesh.add_triangle(LoopTriangle::new(4, 6, 7));

        // Back face
        mesh.add_triangle(LoopTriangle::new(0, 3, 2));
        mesh.add_triangle(LoopTriangle::new(0, 2, 1));

        // Top face
        mesh.add_triangle(LoopTriangle::new(3, 7, 6));
        mesh.add_triangle(LoopTriangle::new(3, 6, 2));

        // Bottom face
        mesh.add_triangle(LoopTriangle::new(0, 1, 5));
        mesh.add_triangle(LoopTriangle::new(0, 5, 4));

        // Right face
        mesh.add_triangle(LoopTriangle::new(1, 2, 6));
        mesh.add_triangle(LoopTriangle::new(1, 6, 5));

        // Left face
        mesh.add_triangle(LoopTriangle::new(0, 4, 7));
        mesh.add_triangle(LoopTriangle::new(0, 7, 3));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
