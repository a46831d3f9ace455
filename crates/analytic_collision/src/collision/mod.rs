//! Analytic collision queries between simple primitives
//!
//! Every pair of shapes has a closed-form `shortest_distance`. Line-like
//! shapes (and capsules) also answer `nearest_point`, returning the
//! parameter of the closest point along their own axis. `intersects` is a
//! strict threshold on the distance.
//!
//! ```
//! use analytic_collision::collision::{Intersects, Plane, ShortestDistance, Sphere};
//! use analytic_collision::foundation::math::{Point3, Vec3};
//!
//! let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 2.0)?;
//! let floor = Plane::new(Point3::origin(), Vec3::z())?;
//!
//! assert_eq!(sphere.shortest_distance(&floor), 3.0);
//! assert!(!sphere.intersects(&floor));
//! # Ok::<(), analytic_collision::collision::CollisionError>(())
//! ```

pub mod error;
pub mod linear;
pub mod parallelepiped;
pub mod primitives;
pub mod settings;
pub mod shape;
pub mod swept;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::{CollisionError, Degeneracy, ShapeKind};
pub use linear::{Line, LineSegment, Linear, Ray};
pub use parallelepiped::Parallelepiped;
pub use primitives::{Plane, Sphere};
pub use settings::{CollisionSettings, INTERSECTION_EPSILON};
pub use shape::{Shape, ShapeDescriptor};
pub use swept::{Capsule, InfiniteCylinder};
pub use traits::{Intersects, NearestPoint, ShortestDistance};
