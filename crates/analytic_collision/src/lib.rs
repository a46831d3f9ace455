//! # Analytic Collision
//!
//! Closed-form distance and intersection queries between eight geometric
//! primitives: spheres, planes, lines, rays, line segments, infinite
//! cylinders, capsules and parallelepipeds.
//!
//! ## Features
//!
//! - **Pairwise distances**: one statically dispatched algorithm per shape pair
//! - **Nearest-point parameters**: for lines, rays, segments and capsules
//! - **Runtime dispatch**: the closed [`collision::Shape`] enum
//! - **Config files**: collider layouts and tolerances in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use analytic_collision::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let capsule = Capsule::new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 1.0)?;
//!     let segment = LineSegment::new(Point3::new(-3.0, 0.0, 4.0), Point3::new(3.0, 0.0, 4.0))?;
//!
//!     let (distance, t) = segment.nearest_point(&capsule);
//!     assert_eq!((distance, t), (0.0, 0.5));
//!
//!     let settings = CollisionSettings::default();
//!     assert!(settings.intersects(&capsule, &segment));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod foundation;
pub mod config;
pub mod collision;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        collision::{
            Capsule, CollisionError, CollisionSettings, InfiniteCylinder, Intersects, Line, LineSegment,
            NearestPoint, Parallelepiped, Plane, Ray, Shape, ShapeDescriptor, ShortestDistance, Sphere,
        },
        config::{Config, ConfigError},
        foundation::math::{Point3, Vec3},
    };
}
