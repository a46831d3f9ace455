use crate::collision::{
    Capsule, CollisionSettings, Intersects, Line, LineSegment, NearestPoint, Parallelepiped, Plane, Ray,
    ShortestDistance, Sphere, INTERSECTION_EPSILON,
};
use crate::foundation::math::{Point3, Vec3};
use approx::assert_relative_eq;

#[test]
fn test_sphere_above_plane() {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    let plane = Plane::new(Point3::origin(), Vec3::z()).unwrap();

    assert_relative_eq!(sphere.shortest_distance(&plane), 3.0);
    assert_relative_eq!(plane.shortest_distance(&sphere), 3.0);
}

#[test]
fn test_segments_crossing_in_projection() {
    let a = LineSegment::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap();
    let b = LineSegment::new(Point3::new(0.0, -1.0, 0.5), Point3::new(0.0, 1.0, 0.5)).unwrap();

    assert_relative_eq!(a.shortest_distance(&b), 0.5);
    assert_relative_eq!(b.shortest_distance(&a), 0.5);
}

#[test]
fn test_capsule_against_point_past_cap() {
    let capsule = Capsule::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 1.0).unwrap();
    let point = Point3::new(0.0, 0.0, -5.0);

    assert_relative_eq!(capsule.shortest_distance(&point), 4.0);
    assert_relative_eq!(point.shortest_distance(&capsule), 4.0);
}

#[test]
fn test_plane_sign_follows_side() {
    let normal = Vec3::new(1.0, 2.0, 2.0);
    let plane = Plane::new(Point3::new(1.0, 0.0, 0.0), normal).unwrap();

    let front = Point3::new(2.0, 3.0, 1.0);
    let back = Point3::new(-2.0, -3.0, 0.0);

    // Independent projection: (p - q) . n / |n|
    let projected = |p: &Point3| (p - Point3::new(1.0, 0.0, 0.0)).dot(&normal) / 3.0;

    let d_front = plane.shortest_distance(&front);
    let d_back = plane.shortest_distance(&back);

    assert!(d_front > 0.0);
    assert!(d_back < 0.0);
    assert_relative_eq!(d_front, projected(&front), epsilon = 1e-5);
    assert_relative_eq!(d_back, projected(&back), epsilon = 1e-5);
    assert_relative_eq!(front.shortest_distance(&plane), d_front);
}

#[test]
fn test_segment_containment() {
    let a = Point3::new(1.0, 2.0, 3.0);
    let b = Point3::new(5.0, -2.0, 7.0);
    let segment = LineSegment::new(a, b).unwrap();

    assert_eq!(segment.nearest_point(&a), (0.0, 0.0));
    let (distance, t) = segment.nearest_point(&b);
    assert_relative_eq!(distance, 0.0, epsilon = 1e-5);
    assert_relative_eq!(t, 1.0);
    let (distance, t) = segment.nearest_point(&nalgebra::center(&a, &b));
    assert_relative_eq!(distance, 0.0, epsilon = 1e-5);
    assert_relative_eq!(t, 0.5);
}

#[test]
fn test_ray_clamps_point_behind_origin() {
    let origin = Point3::new(1.0, 1.0, 1.0);
    let direction = Vec3::new(0.0, 3.0, 4.0);
    let ray = Ray::from_direction(origin, direction).unwrap();

    let (distance, t) = ray.nearest_point(&(origin - direction));
    assert_eq!(t, 0.0);
    assert_relative_eq!(distance, 5.0);
}

#[test]
fn test_parallel_lines_fall_back() {
    let a = Line::from_direction(Point3::origin(), Vec3::x()).unwrap();
    let b = Line::from_direction(Point3::new(0.0, 2.5, 0.0), Vec3::x()).unwrap();

    let (distance, t) = a.nearest_point(&b);
    assert!(t.is_finite());
    assert_relative_eq!(distance, 2.5);
}

#[test]
fn test_unit_box_interior_and_face() {
    let cube = Parallelepiped::new(Point3::origin(), Vec3::x(), Vec3::y(), Vec3::z()).unwrap();

    assert_eq!(cube.shortest_distance(&Point3::new(0.5, 0.5, 0.5)), 0.0);
    assert_relative_eq!(cube.shortest_distance(&Point3::new(2.0, 0.5, 0.5)), 1.0);
}

#[test]
fn test_intersection_threshold_is_strict() {
    let a = Sphere::new(Point3::origin(), 0.0).unwrap();
    let exact = Sphere::new(Point3::new(INTERSECTION_EPSILON, 0.0, 0.0), 0.0).unwrap();
    let half = Sphere::new(Point3::new(INTERSECTION_EPSILON / 2.0, 0.0, 0.0), 0.0).unwrap();

    assert!(!a.intersects(&exact));
    assert!(a.intersects(&half));
}

#[test]
fn test_intersection_threshold_from_settings() {
    let settings = CollisionSettings::new(0.5).unwrap();
    let a = Sphere::new(Point3::origin(), 1.0).unwrap();
    let exact = Sphere::new(Point3::new(2.5, 0.0, 0.0), 1.0).unwrap();
    let half = Sphere::new(Point3::new(2.25, 0.0, 0.0), 1.0).unwrap();

    assert!(!settings.intersects(&a, &exact));
    assert!(settings.intersects(&a, &half));
    assert!(!a.intersects(&half));
}
