//! Closed set of shapes with runtime dispatch
//!
//! [`Shape`] wraps the eight primitives for code that picks shapes at
//! runtime, such as collider layouts read from configuration files.
//! Every query matches both operands and forwards to the pairwise impl.

use serde::{Deserialize, Serialize};

use super::error::{CollisionError, ShapeKind};
use super::linear::{Line, LineSegment, Ray};
use super::parallelepiped::Parallelepiped;
use super::primitives::{Plane, Sphere};
use super::swept::{Capsule, InfiniteCylinder};
use super::traits::{NearestPoint, ShortestDistance};
use crate::foundation::math::utils::{point_from_array, vector_from_array};
use crate::foundation::math::{Point3, Vec3};

/// Any one of the supported primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid sphere
    Sphere(Sphere),
    /// Oriented infinite plane
    Plane(Plane),
    /// Unbounded line
    Line(Line),
    /// Half-line
    Ray(Ray),
    /// Bounded segment
    LineSegment(LineSegment),
    /// Radius around a line
    InfiniteCylinder(InfiniteCylinder),
    /// Radius around a segment
    Capsule(Capsule),
    /// Sheared box
    Parallelepiped(Parallelepiped),
}

impl Shape {
    /// Which primitive this is
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Line(_) => ShapeKind::Line,
            Self::Ray(_) => ShapeKind::Ray,
            Self::LineSegment(_) => ShapeKind::LineSegment,
            Self::InfiniteCylinder(_) => ShapeKind::InfiniteCylinder,
            Self::Capsule(_) => ShapeKind::Capsule,
            Self::Parallelepiped(_) => ShapeKind::Parallelepiped,
        }
    }

    /// Distance from this shape to `rhs`, keeping the left/right order
    fn distance_to<R>(&self, rhs: &R) -> f32
    where
        Sphere: ShortestDistance<R>,
        Plane: ShortestDistance<R>,
        Line: ShortestDistance<R>,
        Ray: ShortestDistance<R>,
        LineSegment: ShortestDistance<R>,
        InfiniteCylinder: ShortestDistance<R>,
        Capsule: ShortestDistance<R>,
        Parallelepiped: ShortestDistance<R>,
    {
        match self {
            Self::Sphere(lhs) => lhs.shortest_distance(rhs),
            Self::Plane(lhs) => lhs.shortest_distance(rhs),
            Self::Line(lhs) => lhs.shortest_distance(rhs),
            Self::Ray(lhs) => lhs.shortest_distance(rhs),
            Self::LineSegment(lhs) => lhs.shortest_distance(rhs),
            Self::InfiniteCylinder(lhs) => lhs.shortest_distance(rhs),
            Self::Capsule(lhs) => lhs.shortest_distance(rhs),
            Self::Parallelepiped(lhs) => lhs.shortest_distance(rhs),
        }
    }

    /// Nearest point on the parametric shapes; `None` for the rest
    fn nearest_on<R>(&self, rhs: &R) -> Option<(f32, f32)>
    where
        Line: NearestPoint<R>,
        Ray: NearestPoint<R>,
        LineSegment: NearestPoint<R>,
        Capsule: NearestPoint<R>,
    {
        match self {
            Self::Line(lhs) => Some(lhs.nearest_point(rhs)),
            Self::Ray(lhs) => Some(lhs.nearest_point(rhs)),
            Self::LineSegment(lhs) => Some(lhs.nearest_point(rhs)),
            Self::Capsule(lhs) => Some(lhs.nearest_point(rhs)),
            Self::Sphere(_)
            | Self::Plane(_)
            | Self::InfiniteCylinder(_)
            | Self::Parallelepiped(_) => None,
        }
    }

    /// Distance between two shapes
    ///
    /// Signed only for plane against plane; see [`Plane`].
    pub fn shortest_distance(&self, rhs: &Self) -> f32 {
        match rhs {
            Self::Sphere(rhs) => self.distance_to(rhs),
            Self::Plane(rhs) => self.distance_to(rhs),
            Self::Line(rhs) => self.distance_to(rhs),
            Self::Ray(rhs) => self.distance_to(rhs),
            Self::LineSegment(rhs) => self.distance_to(rhs),
            Self::InfiniteCylinder(rhs) => self.distance_to(rhs),
            Self::Capsule(rhs) => self.distance_to(rhs),
            Self::Parallelepiped(rhs) => self.distance_to(rhs),
        }
    }

    /// Distance to a point; signed for planes
    pub fn distance_to_point(&self, point: &Point3) -> f32 {
        self.distance_to(point)
    }

    /// `(distance, parameter)` when this shape is a line, ray, segment or capsule
    pub fn nearest_point(&self, rhs: &Self) -> Option<(f32, f32)> {
        match rhs {
            Self::Sphere(rhs) => self.nearest_on(rhs),
            Self::Plane(rhs) => self.nearest_on(rhs),
            Self::Line(rhs) => self.nearest_on(rhs),
            Self::Ray(rhs) => self.nearest_on(rhs),
            Self::LineSegment(rhs) => self.nearest_on(rhs),
            Self::InfiniteCylinder(rhs) => self.nearest_on(rhs),
            Self::Capsule(rhs) => self.nearest_on(rhs),
            Self::Parallelepiped(rhs) => self.nearest_on(rhs),
        }
    }

    /// The serializable form of this shape
    pub fn descriptor(&self) -> ShapeDescriptor {
        let array = |point: &Point3| [point.x, point.y, point.z];
        let vector = |v: &Vec3| [v.x, v.y, v.z];

        match self {
            Self::Sphere(s) => ShapeDescriptor::Sphere {
                center: array(s.center()),
                radius: s.radius(),
            },
            Self::Plane(p) => ShapeDescriptor::Plane {
                point: array(p.point()),
                normal: vector(p.normal()),
            },
            Self::Line(l) => ShapeDescriptor::Line {
                a: array(l.end_point_a()),
                b: array(l.end_point_b()),
            },
            Self::Ray(r) => ShapeDescriptor::Ray {
                a: array(r.end_point_a()),
                b: array(r.end_point_b()),
            },
            Self::LineSegment(s) => ShapeDescriptor::LineSegment {
                a: array(s.end_point_a()),
                b: array(s.end_point_b()),
            },
            Self::InfiniteCylinder(c) => ShapeDescriptor::InfiniteCylinder {
                a: array(c.end_point_a()),
                b: array(c.end_point_b()),
                radius: c.radius(),
            },
            Self::Capsule(c) => ShapeDescriptor::Capsule {
                a: array(c.end_point_a()),
                b: array(c.end_point_b()),
                radius: c.radius(),
            },
            Self::Parallelepiped(p) => ShapeDescriptor::Parallelepiped {
                point: array(p.point()),
                edge_a: vector(p.edge_a()),
                edge_b: vector(p.edge_b()),
                edge_c: vector(p.edge_c()),
            },
        }
    }
}

impl ShortestDistance<Shape> for Shape {
    fn shortest_distance(&self, rhs: &Shape) -> f32 {
        Shape::shortest_distance(self, rhs)
    }
}

impl ShortestDistance<Point3> for Shape {
    fn shortest_distance(&self, rhs: &Point3) -> f32 {
        self.distance_to_point(rhs)
    }
}

macro_rules! shape_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Self::$variant(shape)
                }
            }
        )+
    };
}

shape_from!(Sphere, Plane, Line, Ray, LineSegment, InfiniteCylinder, Capsule, Parallelepiped);

/// Plain-data form of a [`Shape`], suitable for RON or TOML files
///
/// Line-like shapes are stored as the two points `a` and `b` their
/// constructors take; conversion back to a [`Shape`] re-runs validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ShapeDescriptor {
    Sphere { center: [f32; 3], radius: f32 },
    Plane { point: [f32; 3], normal: [f32; 3] },
    Line { a: [f32; 3], b: [f32; 3] },
    Ray { a: [f32; 3], b: [f32; 3] },
    LineSegment { a: [f32; 3], b: [f32; 3] },
    InfiniteCylinder { a: [f32; 3], b: [f32; 3], radius: f32 },
    Capsule { a: [f32; 3], b: [f32; 3], radius: f32 },
    Parallelepiped {
        point: [f32; 3],
        edge_a: [f32; 3],
        edge_b: [f32; 3],
        edge_c: [f32; 3],
    },
}

impl TryFrom<ShapeDescriptor> for Shape {
    type Error = CollisionError;

    fn try_from(descriptor: ShapeDescriptor) -> Result<Self, Self::Error> {
        let p = point_from_array;
        let v = vector_from_array;

        let shape: Self = match descriptor {
            ShapeDescriptor::Sphere { center, radius } => Sphere::new(p(center), radius)?.into(),
            ShapeDescriptor::Plane { point, normal } => Plane::new(p(point), v(normal))?.into(),
            ShapeDescriptor::Line { a, b } => Line::new(p(a), p(b))?.into(),
            ShapeDescriptor::Ray { a, b } => Ray::new(p(a), p(b))?.into(),
            ShapeDescriptor::LineSegment { a, b } => LineSegment::new(p(a), p(b))?.into(),
            ShapeDescriptor::InfiniteCylinder { a, b, radius } => {
                InfiniteCylinder::new(p(a), p(b), radius)?.into()
            }
            ShapeDescriptor::Capsule { a, b, radius } => Capsule::new(p(a), p(b), radius)?.into(),
            ShapeDescriptor::Parallelepiped {
                point,
                edge_a,
                edge_b,
                edge_c,
            } => Parallelepiped::new(p(point), v(edge_a), v(edge_b), v(edge_c))?.into(),
        };

        Ok(shape)
    }
}
