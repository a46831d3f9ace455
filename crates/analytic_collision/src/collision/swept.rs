//! Swept primitives: a radius around a line or a segment
//!
//! Every query measures against the axis and subtracts the radius,
//! the same way a sphere is a radius around its center.

use super::error::{ensure_radius, CollisionError, ShapeKind};
use super::linear::{Line, LineSegment};
use super::traits::{inflate, inflate_nearest, NearestPoint, ShortestDistance};
use crate::foundation::math::{Point3, Vec3};

/// A cylinder of infinite length around a [`Line`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteCylinder {
    axis: Line,
    radius: f32,
}

impl InfiniteCylinder {
    /// Cylinder around the line through two points
    pub fn new(end_point_a: Point3, end_point_b: Point3, radius: f32) -> Result<Self, CollisionError> {
        Self::around(Line::new(end_point_a, end_point_b), radius)
    }

    /// Cylinder around the line through a point along a direction
    pub fn from_direction(end_point_a: Point3, direction: Vec3, radius: f32) -> Result<Self, CollisionError> {
        Self::around(Line::from_direction(end_point_a, direction), radius)
    }

    fn around(axis: Result<Line, CollisionError>, radius: f32) -> Result<Self, CollisionError> {
        let axis = axis.map_err(|error| error.with_kind(ShapeKind::InfiniteCylinder))?;
        ensure_radius(ShapeKind::InfiniteCylinder, radius)?;
        Ok(Self { axis, radius })
    }

    /// The central axis
    pub const fn axis(&self) -> &Line {
        &self.axis
    }

    /// The cylinder radius
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// First point defining the axis
    pub const fn end_point_a(&self) -> &Point3 {
        self.axis.end_point_a()
    }

    /// Second point defining the axis
    pub const fn end_point_b(&self) -> &Point3 {
        self.axis.end_point_b()
    }
}

impl<Rhs: ?Sized> ShortestDistance<Rhs> for InfiniteCylinder
where
    Line: ShortestDistance<Rhs>,
{
    fn shortest_distance(&self, rhs: &Rhs) -> f32 {
        inflate(self.axis.shortest_distance(rhs), self.radius)
    }
}

/// A segment swept by a sphere: a cylinder with hemispherical caps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    axis: LineSegment,
    radius: f32,
}

impl Capsule {
    /// Capsule whose cap centers are the two end points
    pub fn new(end_point_a: Point3, end_point_b: Point3, radius: f32) -> Result<Self, CollisionError> {
        let axis = LineSegment::new(end_point_a, end_point_b)
            .map_err(|error| error.with_kind(ShapeKind::Capsule))?;
        ensure_radius(ShapeKind::Capsule, radius)?;
        Ok(Self { axis, radius })
    }

    /// The segment between the cap centers
    pub const fn axis(&self) -> &LineSegment {
        &self.axis
    }

    /// The capsule radius
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// First cap center
    pub const fn end_point_a(&self) -> &Point3 {
        self.axis.end_point_a()
    }

    /// Second cap center
    pub const fn end_point_b(&self) -> &Point3 {
        self.axis.end_point_b()
    }
}

/// The parameter is the interpolation value along the axis segment
impl<Rhs: ?Sized> NearestPoint<Rhs> for Capsule
where
    LineSegment: NearestPoint<Rhs>,
{
    fn nearest_point(&self, rhs: &Rhs) -> (f32, f32) {
        inflate_nearest(self.axis.nearest_point(rhs), self.radius)
    }
}

impl<Rhs: ?Sized> ShortestDistance<Rhs> for Capsule
where
    LineSegment: NearestPoint<Rhs>,
{
    fn shortest_distance(&self, rhs: &Rhs) -> f32 {
        self.nearest_point(rhs).0
    }
}
