//! Query traits implemented for every pair of shapes
//!
//! One impl per (left, right) pair, in the style of per-type overloads:
//! `a.shortest_distance(&b)` resolves statically to the pair's algorithm.

use super::settings::INTERSECTION_EPSILON;

/// Minimum Euclidean separation between two shapes.
///
/// Non-negative for every pair except `Plane` vs `Point3` and `Plane` vs
/// `Plane`, which are signed by the plane normal.
pub trait ShortestDistance<Rhs: ?Sized> {
    /// Distance between `self` and `rhs`
    fn shortest_distance(&self, rhs: &Rhs) -> f32;
}

/// Distance plus the parameter of the nearest point on a parametric shape.
///
/// The parameter lies in the left-hand shape's native domain:
/// `(-inf, inf)` for lines, `[0, inf)` for rays, `[0, 1]` for segments and
/// capsule axes.
pub trait NearestPoint<Rhs: ?Sized> {
    /// Returns `(distance, parameter)`
    fn nearest_point(&self, rhs: &Rhs) -> (f32, f32);
}

/// Intersection predicate built on [`ShortestDistance`]
///
/// Touching at exactly the epsilon does not count: the comparison is strict.
pub trait Intersects<Rhs: ?Sized> {
    /// Intersection against the process-wide [`INTERSECTION_EPSILON`]
    fn intersects(&self, rhs: &Rhs) -> bool {
        self.intersects_within(rhs, INTERSECTION_EPSILON)
    }

    /// Intersection against an explicit epsilon
    fn intersects_within(&self, rhs: &Rhs, epsilon: f32) -> bool;
}

impl<Lhs, Rhs> Intersects<Rhs> for Lhs
where
    Lhs: ShortestDistance<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    fn intersects_within(&self, rhs: &Rhs, epsilon: f32) -> bool {
        self.shortest_distance(rhs) < epsilon
    }
}

/// Subtract a radius from a distance, never going below zero
#[inline]
pub(crate) fn inflate(distance: f32, radius: f32) -> f32 {
    (distance - radius).max(0.0)
}

/// [`inflate`] for `(distance, parameter)` pairs
#[inline]
pub(crate) fn inflate_nearest((distance, parameter): (f32, f32), radius: f32) -> (f32, f32) {
    (inflate(distance, radius), parameter)
}

/// Implements `ShortestDistance<$rhs> for $lhs` by asking the right-hand side.
macro_rules! distance_from_rhs {
    ($lhs:ty => $($rhs:ty),+ $(,)?) => {
        $(
            impl $crate::collision::ShortestDistance<$rhs> for $lhs {
                #[inline]
                fn shortest_distance(&self, rhs: &$rhs) -> f32 {
                    $crate::collision::ShortestDistance::shortest_distance(rhs, self)
                }
            }
        )+
    };
}

pub(crate) use distance_from_rhs;
