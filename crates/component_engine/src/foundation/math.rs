//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the pose type shared by the transform and
//! geometry components.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Pose made of position, rotation and scale.
///
/// The matrix form is composed in TRS order (scale first, translation last).
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position, Euler rotation in degrees (X, Y, Z) and scale.
    ///
    /// This is the layout the transform component keeps in its properties.
    pub fn from_euler_degrees(position: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler_angles(
                utils::deg_to_rad(rotation_degrees.x),
                utils::deg_to_rad(rotation_degrees.y),
                utils::deg_to_rad(rotation_degrees.z),
            ),
            scale,
        }
    }

    /// Rotation as Euler angles in degrees (X, Y, Z)
    pub fn euler_degrees(&self) -> Vec3 {
        let (roll, pitch, yaw) = self.rotation.euler_angles();
        Vec3::new(
            utils::rad_to_deg(roll),
            utils::rad_to_deg(pitch),
            utils::rad_to_deg(yaw),
        )
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Apply this transform to a direction (translation ignored)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.to_matrix().transform_vector(&vector)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
