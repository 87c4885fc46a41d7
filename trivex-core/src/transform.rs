/// Object basis transforms (translation, rotation, scale)
use nalgebra::{Matrix4, Vector3};

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Per-axis Euler rotation in radians
#[derive(Debug, Clone, Copy)]
pub struct EulerRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerRotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Scene files state rotations in degrees
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: degrees_to_radians(x),
            y: degrees_to_radians(y),
            z: degrees_to_radians(z),
        }
    }

    /// Create a rotation matrix, applying rotations in order: Z, Y, X
    pub fn matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.z));

        rz * ry * rx
    }
}

impl Default for EulerRotation {
    fn default() -> Self {
        Self::zero()
    }
}

/// An object's local affine transform relative to its parent
#[derive(Debug, Clone, Copy)]
pub struct BasisTransform {
    pub translation: Vector3<f32>,
    pub rotation: EulerRotation,
    pub scale: Vector3<f32>,
}

impl BasisTransform {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: EulerRotation::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Compose the basis matrix: translation * rotation * scale
    pub fn matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&self.translation);
        let rotation = self.rotation.matrix();
        let scale = Matrix4::new_nonuniform_scaling(&self.scale);

        translation * rotation * scale
    }
}

impl Default for BasisTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((degrees_to_radians(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = EulerRotation::zero();
        assert!((rotation.matrix() - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_identity_basis() {
        let basis = BasisTransform::identity();
        assert!((basis.matrix() - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_translation_applied_last() {
        let mut basis = BasisTransform::identity();
        basis.translation = Vector3::new(2.0, 0.0, 0.0);
        basis.scale = Vector3::new(3.0, 3.0, 3.0);

        // Scale happens in local space, then translation
        let point = basis.matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((point - Point3::new(5.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_about_z() {
        let mut basis = BasisTransform::identity();
        basis.rotation = EulerRotation::from_degrees(0.0, 0.0, 90.0);

        let point = basis.matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((point - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-5);
    }
}
