//! Cross-shape tests: laws every pair must obey and worked scenarios

mod scenarios;

use crate::collision::{
    Capsule, InfiniteCylinder, Line, LineSegment, Parallelepiped, Plane, Ray, Shape, Sphere,
};
use crate::foundation::math::{Point3, Vec3};

/// One of each primitive, scattered so most pairs are apart
fn zoo() -> Vec<Shape> {
    crate::foundation::logging::init_for_tests();

    vec![
        Sphere::new(Point3::origin(), 1.0).unwrap().into(),
        Plane::new(Point3::new(0.0, 0.0, -5.0), Vec3::z()).unwrap().into(),
        Line::from_direction(Point3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0))
            .unwrap()
            .into(),
        Ray::from_direction(Point3::new(-4.0, 2.0, 1.0), Vec3::new(1.0, 0.5, 0.0))
            .unwrap()
            .into(),
        LineSegment::new(Point3::new(1.0, 5.0, 2.0), Point3::new(4.0, 7.0, -1.0))
            .unwrap()
            .into(),
        InfiniteCylinder::from_direction(Point3::new(0.0, -6.0, 0.0), Vec3::new(1.0, 0.0, 0.2), 0.5)
            .unwrap()
            .into(),
        Capsule::new(Point3::new(-3.0, -3.0, 3.0), Point3::new(-1.0, -4.0, 6.0), 0.75)
            .unwrap()
            .into(),
        Parallelepiped::new(
            Point3::new(5.0, 3.0, 2.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.5, 1.5, 0.0),
            Vec3::new(0.0, 0.3, 1.2),
        )
        .unwrap()
        .into(),
    ]
}

/// Plane against plane is the only signed shape/shape pair
fn is_signed(lhs: &Shape, rhs: &Shape) -> bool {
    matches!((lhs, rhs), (Shape::Plane(_), Shape::Plane(_)))
}
