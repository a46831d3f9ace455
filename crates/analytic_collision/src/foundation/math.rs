//! Math utilities and types
//!
//! Provides the fundamental nalgebra aliases every collision shape is built from.

pub use nalgebra::{Matrix3, Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math utility functions
pub mod utils {
    use super::{Point3, Vec3};

    /// True when every component of the vector is finite
    pub fn is_finite_vector(vector: &Vec3) -> bool {
        vector.iter().all(|component| component.is_finite())
    }

    /// True when every coordinate of the point is finite
    pub fn is_finite_point(point: &Point3) -> bool {
        is_finite_vector(&point.coords)
    }

    /// Clamp each coordinate of a point into `[0, 1]`
    pub fn clamp_unit(point: &Point3) -> Point3 {
        point.map(|coordinate| coordinate.clamp(0.0, 1.0))
    }

    /// Convert a plain array into a point
    pub fn point_from_array(coords: [f32; 3]) -> Point3 {
        Point3::new(coords[0], coords[1], coords[2])
    }

    /// Convert a plain array into a vector
    pub fn vector_from_array(coords: [f32; 3]) -> Vec3 {
        Vec3::new(coords[0], coords[1], coords[2])
    }
}
