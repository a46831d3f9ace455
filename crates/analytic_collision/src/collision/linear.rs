//! Line-like primitives: lines, rays and line segments
//!
//! All three store a start point, a direction and its squared length, and
//! differ only in which ends of the parameter domain are clamped. The
//! [`Linear`] trait exposes those bounds so one generic routine per query
//! serves every combination.
//!
//! The segment/segment solution follows the closest-approach construction
//! from Dan Sunday's "Distance between 3D Lines & Segments": solve the
//! unbounded 2x2 system, clamp one parameter, then re-solve the other
//! against the clamped point.

use super::error::{ensure_finite_point, ensure_finite_vector, CollisionError, Degeneracy, ShapeKind};
use super::parallelepiped::Parallelepiped;
use super::primitives::{Plane, Sphere};
use super::settings::PARALLEL_EPSILON;
use super::swept::{Capsule, InfiniteCylinder};
use super::traits::{inflate_nearest, NearestPoint, ShortestDistance};
use crate::foundation::math::{Point3, Vec3};

/// Shared view of line-like shapes used by the generic queries
pub trait Linear {
    /// True if the parameter domain is clamped below at 0
    fn has_lower_bound() -> bool;

    /// True if the parameter domain is clamped above at 1
    fn has_upper_bound() -> bool;

    /// Start point, parameter 0
    fn end_point_a(&self) -> &Point3;

    /// `end_point_b - end_point_a`
    fn direction(&self) -> &Vec3;

    /// `direction . direction`
    fn direction_sq(&self) -> f32;

    /// Clamp a parameter into this shape's domain
    fn clamp_parameter(t: f32) -> f32 {
        if Self::has_lower_bound() && t < 0.0 {
            0.0
        } else if Self::has_upper_bound() && t > 1.0 {
            1.0
        } else {
            t
        }
    }

    /// Point at parameter `t`, unclamped
    fn point_at(&self, t: f32) -> Point3 {
        self.end_point_a() + self.direction() * t
    }
}

/// Derived fields shared by the three line-like shapes
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    end_point_a: Point3,
    end_point_b: Point3,
    direction: Vec3,
    direction_sq: f32,
}

impl Axis {
    fn from_points(kind: ShapeKind, end_point_a: Point3, end_point_b: Point3) -> Result<Self, CollisionError> {
        ensure_finite_point(kind, &end_point_a)?;
        ensure_finite_point(kind, &end_point_b)?;
        Self::build(kind, end_point_a, end_point_b - end_point_a)
    }

    fn from_direction(kind: ShapeKind, end_point_a: Point3, direction: Vec3) -> Result<Self, CollisionError> {
        ensure_finite_point(kind, &end_point_a)?;
        ensure_finite_vector(kind, &direction)?;
        Self::build(kind, end_point_a, direction)
    }

    fn build(kind: ShapeKind, end_point_a: Point3, direction: Vec3) -> Result<Self, CollisionError> {
        let direction_sq = direction.norm_squared();
        if direction_sq <= 0.0 || !direction_sq.is_finite() {
            return Err(CollisionError::degenerate(kind, Degeneracy::ZeroLengthDirection));
        }

        Ok(Self {
            end_point_a,
            end_point_b: end_point_a + direction,
            direction,
            direction_sq,
        })
    }
}

macro_rules! linear_shape {
    ($(#[$meta:meta])* $name:ident, $kind:expr, lower: $lower:literal, upper: $upper:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            axis: Axis,
        }

        impl $name {
            /// Build from two distinct points
            pub fn new(end_point_a: Point3, end_point_b: Point3) -> Result<Self, CollisionError> {
                Ok(Self {
                    axis: Axis::from_points($kind, end_point_a, end_point_b)?,
                })
            }

            /// Build from a start point and a non-zero direction
            pub fn from_direction(end_point_a: Point3, direction: Vec3) -> Result<Self, CollisionError> {
                Ok(Self {
                    axis: Axis::from_direction($kind, end_point_a, direction)?,
                })
            }

            /// Start point (parameter 0)
            pub const fn end_point_a(&self) -> &Point3 {
                &self.axis.end_point_a
            }

            /// Second defining point (parameter 1)
            pub const fn end_point_b(&self) -> &Point3 {
                &self.axis.end_point_b
            }

            /// `end_point_b - end_point_a`
            pub const fn direction(&self) -> &Vec3 {
                &self.axis.direction
            }

            /// Squared length of the direction
            pub const fn direction_sq(&self) -> f32 {
                self.axis.direction_sq
            }

            /// True if the parameter domain is clamped below at 0
            pub const fn has_lower_bound() -> bool {
                $lower
            }

            /// True if the parameter domain is clamped above at 1
            pub const fn has_upper_bound() -> bool {
                $upper
            }

            /// Point at parameter `t`, unclamped
            pub fn point_at(&self, t: f32) -> Point3 {
                Linear::point_at(self, t)
            }
        }

        impl Linear for $name {
            fn has_lower_bound() -> bool {
                $lower
            }

            fn has_upper_bound() -> bool {
                $upper
            }

            fn end_point_a(&self) -> &Point3 {
                &self.axis.end_point_a
            }

            fn direction(&self) -> &Vec3 {
                &self.axis.direction
            }

            fn direction_sq(&self) -> f32 {
                self.axis.direction_sq
            }
        }

        impl NearestPoint<Point3> for $name {
            fn nearest_point(&self, rhs: &Point3) -> (f32, f32) {
                nearest_to_point(self, rhs)
            }
        }

        impl NearestPoint<Sphere> for $name {
            fn nearest_point(&self, rhs: &Sphere) -> (f32, f32) {
                inflate_nearest(nearest_to_point(self, rhs.center()), rhs.radius())
            }
        }

        impl NearestPoint<Plane> for $name {
            fn nearest_point(&self, rhs: &Plane) -> (f32, f32) {
                nearest_to_plane(self, rhs)
            }
        }

        impl NearestPoint<Line> for $name {
            fn nearest_point(&self, rhs: &Line) -> (f32, f32) {
                nearest_between(self, rhs)
            }
        }

        impl NearestPoint<Ray> for $name {
            fn nearest_point(&self, rhs: &Ray) -> (f32, f32) {
                nearest_between(self, rhs)
            }
        }

        impl NearestPoint<LineSegment> for $name {
            fn nearest_point(&self, rhs: &LineSegment) -> (f32, f32) {
                nearest_between(self, rhs)
            }
        }

        impl NearestPoint<InfiniteCylinder> for $name {
            fn nearest_point(&self, rhs: &InfiniteCylinder) -> (f32, f32) {
                inflate_nearest(nearest_between(self, rhs.axis()), rhs.radius())
            }
        }

        impl NearestPoint<Capsule> for $name {
            fn nearest_point(&self, rhs: &Capsule) -> (f32, f32) {
                inflate_nearest(nearest_between(self, rhs.axis()), rhs.radius())
            }
        }

        impl NearestPoint<Parallelepiped> for $name {
            fn nearest_point(&self, rhs: &Parallelepiped) -> (f32, f32) {
                nearest_to_parallelepiped(self, rhs)
            }
        }

        impl<Rhs: ?Sized> ShortestDistance<Rhs> for $name
        where
            $name: NearestPoint<Rhs>,
        {
            fn shortest_distance(&self, rhs: &Rhs) -> f32 {
                self.nearest_point(rhs).0
            }
        }
    };
}

linear_shape!(
    /// A line, infinite in both directions. Parameter domain `(-inf, inf)`.
    Line, ShapeKind::Line, lower: false, upper: false
);

linear_shape!(
    /// A ray from `end_point_a` through `end_point_b`. Parameter domain `[0, inf)`.
    Ray, ShapeKind::Ray, lower: true, upper: false
);

linear_shape!(
    /// A bounded segment between its end points. Parameter domain `[0, 1]`.
    LineSegment, ShapeKind::LineSegment, lower: true, upper: true
);

impl LineSegment {
    /// Segment from geometry the caller has already validated (non-zero, finite)
    pub(crate) fn from_trusted(end_point_a: Point3, direction: Vec3) -> Self {
        Self {
            axis: Axis {
                end_point_a,
                end_point_b: end_point_a + direction,
                direction,
                direction_sq: direction.norm_squared(),
            },
        }
    }
}

/// Nearest point on `lhs` to a point
pub(crate) fn nearest_to_point<L: Linear>(lhs: &L, rhs: &Point3) -> (f32, f32) {
    let u = lhs.direction();
    let uu = lhs.direction_sq();
    let uw = u.dot(&(rhs - lhs.end_point_a()));

    let offset = lhs.end_point_a() - rhs;

    if L::has_lower_bound() && uw < 0.0 {
        return (offset.norm(), 0.0);
    }
    if L::has_upper_bound() && uw > uu {
        return ((offset + u).norm(), 1.0);
    }

    let t = uw / uu;
    ((offset + u * t).norm(), t)
}

/// Nearest point on `lhs` to a plane; the distance is unsigned
pub(crate) fn nearest_to_plane<L: Linear>(lhs: &L, rhs: &Plane) -> (f32, f32) {
    let start = rhs.signed_distance(lhs.end_point_a());
    let rate = rhs.normal().dot(lhs.direction());

    // Parallel to the plane: every point is equally far
    if rate * rate <= PARALLEL_EPSILON * lhs.direction_sq() {
        return (start.abs(), 0.0);
    }

    let t = L::clamp_parameter(-start / rate);
    ((start + rate * t).abs(), t)
}

/// Clamp a re-solved `lhs` parameter, expressed as `numer / denom` with `denom > 0`
fn clamp_fraction<L: Linear>(numer: f64, denom: f64) -> f64 {
    if L::has_lower_bound() && numer < 0.0 {
        0.0
    } else if L::has_upper_bound() && numer > denom {
        denom
    } else {
        numer
    }
}

/// Closest approach between two line-like shapes; the parameter is on `lhs`
///
/// The 2x2 solve runs in `f64`: its numerators subtract products of fourth
/// powers of the input scale, which cancel badly in `f32` for long shapes.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn nearest_between<L: Linear, R: Linear>(lhs: &L, rhs: &R) -> (f32, f32) {
    let w = (lhs.end_point_a() - rhs.end_point_a()).cast::<f64>();
    let u = lhs.direction().cast::<f64>();
    let v = rhs.direction().cast::<f64>();

    let uu = u.norm_squared();
    let vv = v.norm_squared();
    let uv = u.dot(&v);
    let uw = u.dot(&w);
    let vw = v.dot(&w);

    // |u x v|^2 from the cross product, which keeps its precision for
    // nearly parallel directions
    let denom = u.cross(&v).norm_squared();

    if denom <= f64::from(PARALLEL_EPSILON) * uu * vv {
        log::trace!("Parallel directions, comparing end points");
        return nearest_between_parallel(lhs, rhs);
    }

    let (mut s_numer, mut s_denom) = (uv * vw - vv * uw, denom);
    let (mut t_numer, mut t_denom) = (uu * vw - uv * uw, denom);

    if L::has_lower_bound() && s_numer < 0.0 {
        s_numer = 0.0;
        t_numer = vw;
        t_denom = vv;
    } else if L::has_upper_bound() && s_numer > s_denom {
        s_numer = s_denom;
        t_numer = vw + uv;
        t_denom = vv;
    }

    if R::has_lower_bound() && t_numer < 0.0 {
        t_numer = 0.0;
        s_numer = clamp_fraction::<L>(-uw, uu);
        s_denom = uu;
    } else if R::has_upper_bound() && t_numer > t_denom {
        t_numer = t_denom;
        s_numer = clamp_fraction::<L>(uv - uw, uu);
        s_denom = uu;
    }

    let s = s_numer / s_denom;
    let t = t_numer / t_denom;

    ((w + u * s - v * t).norm() as f32, s as f32)
}

/// Parallel shapes are closest at an end point of one of them. Parameter 0
/// is in every domain, and two unbounded lines are equally far everywhere.
fn nearest_between_parallel<L: Linear, R: Linear>(lhs: &L, rhs: &R) -> (f32, f32) {
    let mut best = (nearest_to_point(rhs, lhs.end_point_a()).0, 0.0);
    let mut consider = |candidate: (f32, f32)| {
        if candidate.0 < best.0 {
            best = candidate;
        }
    };

    if L::has_upper_bound() {
        consider((nearest_to_point(rhs, &lhs.point_at(1.0)).0, 1.0));
    }
    consider(nearest_to_point(lhs, rhs.end_point_a()));
    if R::has_upper_bound() {
        consider(nearest_to_point(lhs, &rhs.point_at(1.0)));
    }

    best
}

/// Parameter interval over which `lhs` lies inside the box, if any
fn slab_interval<L: Linear>(lhs: &L, rhs: &Parallelepiped) -> Option<(f32, f32)> {
    let start = rhs.to_local(lhs.end_point_a());
    let direction = rhs.convert_to().transform_vector(lhs.direction());

    let mut t_min = if L::has_lower_bound() { 0.0 } else { f32::NEG_INFINITY };
    let mut t_max = if L::has_upper_bound() { 1.0 } else { f32::INFINITY };

    for axis in 0..3 {
        let origin = start[axis];
        let rate = direction[axis];

        if rate == 0.0 {
            if !(0.0..=1.0).contains(&origin) {
                return None;
            }
            continue;
        }

        let enter = -origin / rate;
        let exit = (1.0 - origin) / rate;
        t_min = t_min.max(enter.min(exit));
        t_max = t_max.min(enter.max(exit));

        if t_min > t_max {
            return None;
        }
    }

    Some((t_min, t_max))
}

/// Nearest point on `lhs` to a parallelepiped
///
/// Zero with the entry parameter if `lhs` passes through the box. Otherwise
/// the closest pair lies on a box edge, or on a finite end of `lhs` against
/// a face, so those are the only candidates tested.
pub(crate) fn nearest_to_parallelepiped<L: Linear>(lhs: &L, rhs: &Parallelepiped) -> (f32, f32) {
    if let Some((enter, exit)) = slab_interval(lhs, rhs) {
        let t = if enter.is_finite() {
            enter
        } else if exit.is_finite() {
            exit
        } else {
            0.0
        };
        return (0.0, t);
    }

    let mut best = (f32::INFINITY, 0.0);
    let mut consider = |candidate: (f32, f32)| {
        if candidate.0 < best.0 {
            best = candidate;
        }
    };

    for edge in &rhs.edges() {
        consider(nearest_between(lhs, edge));
    }
    if L::has_lower_bound() {
        consider((rhs.shortest_distance(lhs.end_point_a()), 0.0));
    }
    if L::has_upper_bound() {
        consider((rhs.shortest_distance(&lhs.point_at(1.0)), 1.0));
    }

    best
}
