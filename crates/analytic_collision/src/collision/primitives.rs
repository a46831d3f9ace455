//! Sphere and plane primitives, plus the bare-point entry points
//!
//! Provides the two non-parametric primitives and their distance queries.
//! A bare [`Point3`] can sit on either side of any query.

use super::error::{ensure_finite_point, ensure_finite_vector, ensure_radius};
use super::error::{CollisionError, Degeneracy, ShapeKind};
use super::linear::{Line, LineSegment, Ray};
use super::parallelepiped::Parallelepiped;
use super::settings::PARALLEL_EPSILON;
use super::swept::{Capsule, InfiniteCylinder};
use super::traits::{distance_from_rhs, inflate, ShortestDistance};
use crate::foundation::math::{Point3, Vec3};

/// A solid sphere. A zero radius makes it a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub fn new(center: Point3, radius: f32) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Sphere, &center)?;
        ensure_radius(ShapeKind::Sphere, radius)?;
        Ok(Self { center, radius })
    }

    /// The center position of the sphere
    pub const fn center(&self) -> &Point3 {
        &self.center
    }

    /// The radius of the sphere
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 0.0,
        }
    }
}

impl ShortestDistance<Point3> for Sphere {
    fn shortest_distance(&self, rhs: &Point3) -> f32 {
        inflate(nalgebra::distance(&self.center, rhs), self.radius)
    }
}

impl ShortestDistance<Sphere> for Sphere {
    fn shortest_distance(&self, rhs: &Sphere) -> f32 {
        inflate(nalgebra::distance(&self.center, &rhs.center), self.radius + rhs.radius)
    }
}

distance_from_rhs!(Sphere => Plane, Line, Ray, LineSegment, InfiniteCylinder, Capsule, Parallelepiped);

/// An infinite plane through `point`, oriented by a unit `normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3,
    normal: Vec3,
}

impl Plane {
    /// Creates a plane; the normal is normalized here and must be non-zero
    pub fn new(point: Point3, normal: Vec3) -> Result<Self, CollisionError> {
        ensure_finite_point(ShapeKind::Plane, &point)?;
        ensure_finite_vector(ShapeKind::Plane, &normal)?;

        let length = normal.norm();
        if length <= f32::EPSILON {
            return Err(CollisionError::degenerate(ShapeKind::Plane, Degeneracy::ZeroNormal));
        }

        Ok(Self {
            point,
            normal: normal / length,
        })
    }

    /// A point on the plane
    pub const fn point(&self) -> &Point3 {
        &self.point
    }

    /// Unit normal
    pub const fn normal(&self) -> &Vec3 {
        &self.normal
    }

    /// Positive on the side the normal points toward
    pub fn signed_distance(&self, point: &Point3) -> f32 {
        (point - self.point).dot(&self.normal)
    }

    /// True when the normals are parallel or anti-parallel to within about `1e-4` radians
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.normal.cross(&other.normal).norm_squared() < PARALLEL_EPSILON
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            point: Point3::origin(),
            normal: Vec3::z(),
        }
    }
}

/// Signed: positive on the normal side
impl ShortestDistance<Point3> for Plane {
    fn shortest_distance(&self, rhs: &Point3) -> f32 {
        self.signed_distance(rhs)
    }
}

/// Zero unless parallel; parallel planes report the signed offset of `rhs`
impl ShortestDistance<Plane> for Plane {
    fn shortest_distance(&self, rhs: &Plane) -> f32 {
        if self.is_parallel_to(rhs) {
            self.signed_distance(&rhs.point)
        } else {
            0.0
        }
    }
}

impl ShortestDistance<Sphere> for Plane {
    fn shortest_distance(&self, rhs: &Sphere) -> f32 {
        inflate(self.signed_distance(&rhs.center).abs(), rhs.radius)
    }
}

distance_from_rhs!(Plane => Line, Ray, LineSegment, InfiniteCylinder, Capsule, Parallelepiped);

impl ShortestDistance<Point3> for Point3 {
    fn shortest_distance(&self, rhs: &Point3) -> f32 {
        nalgebra::distance(self, rhs)
    }
}

distance_from_rhs!(Point3 => Sphere, Plane, Line, Ray, LineSegment, InfiniteCylinder, Capsule, Parallelepiped);
