//! Sheared boxes spanned by three edge vectors
//!
//! A parallelepiped caches the affine frame mapping world space onto its
//! local unit cube `[0, 1]^3` and back. Point queries clamp in that frame;
//! box/box overlap uses the separating axis test over face normals and
//! edge cross products.

use super::error::{ensure_finite_point, ensure_finite_vector, CollisionError, Degeneracy, ShapeKind};
use super::linear::{Line, LineSegment, Ray};
use super::primitives::{Plane, Sphere};
use super::settings::{PARALLEL_EPSILON, VOLUME_EPSILON};
use super::swept::{Capsule, InfiniteCylinder};
use super::traits::{distance_from_rhs, inflate, ShortestDistance};
use crate::foundation::math::utils::clamp_unit;
use crate::foundation::math::{Mat3, Mat4, Point3, Vec3};

/// A box with corner `point` and (possibly non-orthogonal) edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelepiped {
    point: Point3,
    edge_a: Vec3,
    edge_b: Vec3,
    edge_c: Vec3,

    convert_from: Mat4,
    convert_to: Mat4,

    center: Point3,
    extents: Vec3,
    normal_a: Vec3,
    normal_b: Vec3,
    normal_c: Vec3,
}

impl Parallelepiped {
    /// Creates a parallelepiped; the edges must span 3-space
    pub fn new(point: Point3, edge_a: Vec3, edge_b: Vec3, edge_c: Vec3) -> Result<Self, CollisionError> {
        let kind = ShapeKind::Parallelepiped;
        ensure_finite_point(kind, &point)?;
        ensure_finite_vector(kind, &edge_a)?;
        ensure_finite_vector(kind, &edge_b)?;
        ensure_finite_vector(kind, &edge_c)?;

        let edges = Mat3::from_columns(&[edge_a, edge_b, edge_c]);
        let volume = edges.determinant();
        let scale = edge_a.norm() * edge_b.norm() * edge_c.norm();
        if volume.abs() <= VOLUME_EPSILON * scale || scale == 0.0 {
            return Err(CollisionError::degenerate(kind, Degeneracy::SingularEdges));
        }

        let convert_from = Self::frame(&point, &edges);
        let convert_to = convert_from
            .try_inverse()
            .ok_or_else(|| CollisionError::degenerate(kind, Degeneracy::SingularEdges))?;

        Ok(Self::assemble(point, edge_a, edge_b, edge_c, convert_from, convert_to))
    }

    /// Local unit cube to world: the edge columns, then the corner as translation
    fn frame(point: &Point3, edges: &Mat3) -> Mat4 {
        Mat4::new_translation(&point.coords) * edges.to_homogeneous()
    }

    fn assemble(
        point: Point3,
        edge_a: Vec3,
        edge_b: Vec3,
        edge_c: Vec3,
        convert_from: Mat4,
        convert_to: Mat4,
    ) -> Self {
        Self {
            point,
            edge_a,
            edge_b,
            edge_c,
            convert_from,
            convert_to,
            center: point + (edge_a + edge_b + edge_c) * 0.5,
            extents: Vec3::new(edge_a.norm(), edge_b.norm(), edge_c.norm()) * 0.5,
            normal_a: edge_b.cross(&edge_c).normalize(),
            normal_b: edge_c.cross(&edge_a).normalize(),
            normal_c: edge_a.cross(&edge_b).normalize(),
        }
    }

    /// The corner the edges start from
    pub const fn point(&self) -> &Point3 {
        &self.point
    }

    /// First edge
    pub const fn edge_a(&self) -> &Vec3 {
        &self.edge_a
    }

    /// Second edge
    pub const fn edge_b(&self) -> &Vec3 {
        &self.edge_b
    }

    /// Third edge
    pub const fn edge_c(&self) -> &Vec3 {
        &self.edge_c
    }

    /// Local `[0, 1]^3` coordinates to world space
    pub const fn convert_from(&self) -> &Mat4 {
        &self.convert_from
    }

    /// World space to local `[0, 1]^3` coordinates
    pub const fn convert_to(&self) -> &Mat4 {
        &self.convert_to
    }

    /// Centroid
    pub const fn center(&self) -> &Point3 {
        &self.center
    }

    /// Half the length of each edge
    ///
    /// Reported for callers sizing the box. The overlap test does not read
    /// it: it projects the edge vectors, which stays exact for sheared boxes.
    pub const fn extents(&self) -> &Vec3 {
        &self.extents
    }

    /// Unit normal of the faces spanned by edges b and c
    pub const fn normal_a(&self) -> &Vec3 {
        &self.normal_a
    }

    /// Unit normal of the faces spanned by edges c and a
    pub const fn normal_b(&self) -> &Vec3 {
        &self.normal_b
    }

    /// Unit normal of the faces spanned by edges a and b
    pub const fn normal_c(&self) -> &Vec3 {
        &self.normal_c
    }

    /// World point to local coordinates
    pub fn to_local(&self, point: &Point3) -> Point3 {
        self.convert_to.transform_point(point)
    }

    /// Local coordinates to world point
    pub fn from_local(&self, local: &Point3) -> Point3 {
        self.convert_from.transform_point(local)
    }

    /// True if the point lies inside or on the boundary
    pub fn contains(&self, point: &Point3) -> bool {
        self.to_local(point).iter().all(|coordinate| (0.0..=1.0).contains(coordinate))
    }

    /// The point of the solid reached by clamping in the local frame
    ///
    /// Exact for orthogonal edges; for sheared boxes it is a point of the
    /// box, not always the nearest one.
    pub fn closest_point(&self, point: &Point3) -> Point3 {
        self.from_local(&clamp_unit(&self.to_local(point)))
    }

    /// The eight corners; bit 0, 1, 2 of the index selects edge a, b, c
    pub fn vertices(&self) -> [Point3; 8] {
        std::array::from_fn(|index| {
            let mut vertex = self.point;
            if index & 1 != 0 {
                vertex += self.edge_a;
            }
            if index & 2 != 0 {
                vertex += self.edge_b;
            }
            if index & 4 != 0 {
                vertex += self.edge_c;
            }
            vertex
        })
    }

    /// The twelve edges as segments, four along each edge vector
    pub fn edges(&self) -> [LineSegment; 12] {
        let p = self.point;
        let (a, b, c) = (self.edge_a, self.edge_b, self.edge_c);
        let edge = LineSegment::from_trusted;

        [
            edge(p, a),
            edge(p + b, a),
            edge(p + c, a),
            edge(p + b + c, a),
            edge(p, b),
            edge(p + a, b),
            edge(p + c, b),
            edge(p + a + c, b),
            edge(p, c),
            edge(p + a, c),
            edge(p + a + b, c),
            edge(p + b, c),
        ]
    }

    /// Half-width of the box projected onto `axis`, scaled by `|axis|`
    fn projection_radius(&self, axis: &Vec3) -> f32 {
        0.5 * (self.edge_a.dot(axis).abs() + self.edge_b.dot(axis).abs() + self.edge_c.dot(axis).abs())
    }

    fn separated_along(&self, other: &Self, axis: &Vec3) -> bool {
        let offset = (other.center - self.center).dot(axis).abs();
        offset > self.projection_radius(axis) + other.projection_radius(axis)
    }

    /// Separating axis test: face normals of both, then edge/edge cross products
    pub fn overlaps(&self, other: &Self) -> bool {
        let normals = [
            self.normal_a,
            self.normal_b,
            self.normal_c,
            other.normal_a,
            other.normal_b,
            other.normal_c,
        ];
        if normals.iter().any(|axis| self.separated_along(other, axis)) {
            return false;
        }

        let own_edges = [self.edge_a, self.edge_b, self.edge_c];
        let other_edges = [other.edge_a, other.edge_b, other.edge_c];
        for own in &own_edges {
            for theirs in &other_edges {
                let axis = own.cross(theirs);
                // Parallel edges give no new axis
                if axis.norm_squared() <= PARALLEL_EPSILON * own.norm_squared() * theirs.norm_squared() {
                    continue;
                }
                if self.separated_along(other, &axis) {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for Parallelepiped {
    /// The unit cube at the origin
    fn default() -> Self {
        Self::assemble(
            Point3::origin(),
            Vec3::x(),
            Vec3::y(),
            Vec3::z(),
            Mat4::identity(),
            Mat4::identity(),
        )
    }
}

impl ShortestDistance<Point3> for Parallelepiped {
    /// Zero inside; outside, the world-space length of the clamp offset
    fn shortest_distance(&self, rhs: &Point3) -> f32 {
        let local = self.to_local(rhs);
        let offset = local - clamp_unit(&local);
        self.convert_from.transform_vector(&offset).norm()
    }
}

impl ShortestDistance<Sphere> for Parallelepiped {
    fn shortest_distance(&self, rhs: &Sphere) -> f32 {
        inflate(self.shortest_distance(rhs.center()), rhs.radius())
    }
}

impl ShortestDistance<Plane> for Parallelepiped {
    /// Unsigned; zero when the corners straddle the plane
    fn shortest_distance(&self, rhs: &Plane) -> f32 {
        let (min, max) = self
            .vertices()
            .iter()
            .map(|vertex| rhs.signed_distance(vertex))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), t| (min.min(t), max.max(t)));

        if min > 0.0 {
            min
        } else if max < 0.0 {
            -max
        } else {
            0.0
        }
    }
}

impl ShortestDistance<Parallelepiped> for Parallelepiped {
    /// Zero on overlap; otherwise the closest edge/edge or corner/box pair
    fn shortest_distance(&self, rhs: &Parallelepiped) -> f32 {
        if self.overlaps(rhs) {
            return 0.0;
        }

        let own_edges = self.edges();
        let other_edges = rhs.edges();
        let edge_pairs = own_edges
            .iter()
            .flat_map(|own| other_edges.iter().map(move |theirs| own.shortest_distance(theirs)));

        let own_corners = self.vertices().into_iter().map(|vertex| rhs.shortest_distance(&vertex));
        let other_corners = rhs.vertices().into_iter().map(|vertex| self.shortest_distance(&vertex));

        edge_pairs
            .chain(own_corners)
            .chain(other_corners)
            .fold(f32::INFINITY, f32::min)
    }
}

distance_from_rhs!(Parallelepiped => Line, Ray, LineSegment, InfiniteCylinder, Capsule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::NearestPoint;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn unit_box_at(x: f32, y: f32, z: f32) -> Parallelepiped {
        Parallelepiped::new(Point3::new(x, y, z), Vec3::x(), Vec3::y(), Vec3::z()).unwrap()
    }

    fn sheared() -> Parallelepiped {
        Parallelepiped::new(
            Point3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 0.5, 3.0),
        )
        .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let b = Parallelepiped::new(Point3::origin(), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0), Vec3::z())
            .unwrap();

        assert_relative_eq!(*b.center(), Point3::new(1.0, 2.0, 0.5));
        assert_relative_eq!(*b.extents(), Vec3::new(1.0, 2.0, 0.5));
        assert_relative_eq!(*b.normal_a(), Vec3::x());
        assert_relative_eq!(*b.normal_b(), Vec3::y());
        assert_relative_eq!(*b.normal_c(), Vec3::z());
        assert_relative_eq!(b.to_local(&Point3::new(2.0, 4.0, 1.0)), Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(b.from_local(&Point3::new(0.0, 1.0, 0.0)), Point3::new(0.0, 4.0, 0.0));
        assert_relative_eq!(*b.extents() * 2.0, Vec3::new(b.edge_a().norm(), b.edge_b().norm(), b.edge_c().norm()));
    }

    #[test]
    fn test_default_is_unit_cube() {
        let cube = Parallelepiped::default();
        assert_eq!(cube, unit_box_at(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_frame_round_trip() {
        let b = sheared();
        for p in [
            Point3::new(0.3, -4.0, 7.0),
            Point3::new(10.0, 10.0, -10.0),
            *b.center(),
        ] {
            let back = b.from_local(&b.to_local(&p));
            assert_relative_eq!(back, p, epsilon = 1e-4);
        }
        assert_relative_eq!(b.to_local(b.point()), Point3::origin(), epsilon = 1e-5);
        assert_relative_eq!(b.to_local(b.center()), Point3::new(0.5, 0.5, 0.5), epsilon = 1e-5);
    }

    #[test]
    fn test_rejects_flat_edges() {
        let result = Parallelepiped::new(Point3::origin(), Vec3::x(), Vec3::y(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(
            result.unwrap_err(),
            CollisionError::DegenerateShape {
                kind: ShapeKind::Parallelepiped,
                reason: Degeneracy::SingularEdges,
            }
        );
        assert!(Parallelepiped::new(Point3::origin(), Vec3::zeros(), Vec3::y(), Vec3::z()).is_err());
    }

    #[test]
    fn test_point_distance() {
        let cube = unit_box_at(0.0, 0.0, 0.0);

        assert_eq!(cube.shortest_distance(&Point3::new(0.5, 0.5, 0.5)), 0.0);
        assert_relative_eq!(cube.shortest_distance(&Point3::new(2.0, 0.5, 0.5)), 1.0);
        assert_relative_eq!(cube.shortest_distance(&Point3::new(2.0, 2.0, 0.5)), 2.0f32.sqrt());
        assert_relative_eq!(Point3::new(0.5, -3.0, 0.5).shortest_distance(&cube), 3.0);
        assert!(cube.contains(&Point3::new(1.0, 0.0, 0.5)));
        assert!(!cube.contains(&Point3::new(1.01, 0.0, 0.5)));
    }

    #[test]
    fn test_sheared_interior_point() {
        let b = sheared();
        assert_abs_diff_eq!(b.shortest_distance(b.center()), 0.0, epsilon = 1e-5);
        assert!(b.contains(b.center()));
    }

    #[test]
    fn test_sphere_distance() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let sphere = Sphere::new(Point3::new(3.0, 0.5, 0.5), 1.0).unwrap();

        assert_relative_eq!(cube.shortest_distance(&sphere), 1.0);
        assert_relative_eq!(sphere.shortest_distance(&cube), 1.0);
    }

    #[test]
    fn test_plane_distance() {
        let cube = unit_box_at(0.0, 0.0, 0.0);

        let under = Plane::new(Point3::new(0.0, 0.0, -2.0), Vec3::z()).unwrap();
        let through = Plane::new(Point3::new(0.0, 0.0, 0.5), Vec3::new(1.0, 1.0, 1.0)).unwrap();
        let over = Plane::new(Point3::new(0.0, 0.0, 5.0), Vec3::z()).unwrap();

        assert_relative_eq!(cube.shortest_distance(&under), 2.0);
        assert_eq!(cube.shortest_distance(&through), 0.0);
        assert_relative_eq!(over.shortest_distance(&cube), 4.0);
    }

    #[test]
    fn test_box_box_face_gap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(2.0, 0.0, 0.0);

        assert!(!a.overlaps(&b));
        assert_relative_eq!(a.shortest_distance(&b), 1.0);
        assert_relative_eq!(b.shortest_distance(&a), 1.0);
    }

    #[test]
    fn test_box_box_edge_gap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(2.0, 2.0, 0.0);

        assert_relative_eq!(a.shortest_distance(&b), 2.0f32.sqrt());
    }

    #[test]
    fn test_box_box_piercing_without_contained_corners() {
        let big = Parallelepiped::new(
            Point3::origin(),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        )
        .unwrap();
        let rod = Parallelepiped::new(
            Point3::new(4.0, 4.0, -5.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, 20.0),
        )
        .unwrap();

        assert!(big.vertices().iter().all(|v| !rod.contains(v)));
        assert!(rod.vertices().iter().all(|v| !big.contains(v)));
        assert_eq!(big.shortest_distance(&rod), 0.0);
        assert_eq!(rod.shortest_distance(&big), 0.0);
    }

    #[test]
    fn test_rotated_box_vertex_toward_face() {
        // Cube turned 45 degrees about z with one vertical edge facing the x = 1 face
        let h = std::f32::consts::FRAC_1_SQRT_2;
        let diamond = Parallelepiped::new(
            Point3::new(3.0 + h, 0.5 - h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
            Vec3::z(),
        )
        .unwrap();
        let cube = unit_box_at(0.0, 0.0, 0.0);

        assert!(!cube.overlaps(&diamond));
        assert_relative_eq!(cube.shortest_distance(&diamond), 2.0, epsilon = 1e-5);
        assert_relative_eq!(diamond.shortest_distance(&cube), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_line_through_box() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let line = Line::from_direction(Point3::new(-1.0, 0.5, 0.5), Vec3::x()).unwrap();

        assert_eq!(line.nearest_point(&cube), (0.0, 1.0));
        assert_eq!(cube.shortest_distance(&line), 0.0);
    }

    #[test]
    fn test_segment_short_of_box() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let seg = LineSegment::new(Point3::new(-3.0, 0.5, 0.5), Point3::new(-2.0, 0.5, 0.5)).unwrap();

        let (distance, t) = seg.nearest_point(&cube);
        assert_relative_eq!(distance, 2.0);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_ray_pointing_away() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let ray = Ray::from_direction(Point3::new(2.0, 0.5, 0.5), Vec3::x()).unwrap();

        let (distance, t) = ray.nearest_point(&cube);
        assert_relative_eq!(distance, 1.0);
        assert_eq!(t, 0.0);

        let toward = Ray::from_direction(Point3::new(2.0, 0.5, 0.5), -Vec3::x()).unwrap();
        assert_eq!(toward.nearest_point(&cube), (0.0, 1.0));
    }

    #[test]
    fn test_line_parallel_to_edge() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let line = Line::from_direction(Point3::new(2.0, 2.0, 0.5), Vec3::z()).unwrap();

        assert_relative_eq!(line.shortest_distance(&cube), 2.0f32.sqrt());
        assert_relative_eq!(cube.shortest_distance(&line), 2.0f32.sqrt());
    }

    #[test]
    fn test_cylinder_and_capsule() {
        let cube = unit_box_at(0.0, 0.0, 0.0);
        let cylinder = InfiniteCylinder::from_direction(Point3::new(0.5, 5.0, 0.5), Vec3::x(), 1.0).unwrap();
        let capsule = Capsule::new(Point3::new(0.5, 0.5, 4.0), Point3::new(0.5, 0.5, 8.0), 0.5).unwrap();

        assert_relative_eq!(cube.shortest_distance(&cylinder), 3.0);
        assert_relative_eq!(cylinder.shortest_distance(&cube), 3.0);
        assert_relative_eq!(cube.shortest_distance(&capsule), 2.5);
        assert_relative_eq!(capsule.shortest_distance(&cube), 2.5);
    }
}
