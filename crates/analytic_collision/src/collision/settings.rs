//! Collision tolerances
//!
//! The intersection epsilon is the only tunable of the collision core. It is
//! read-only: either the process-wide constant or a [`CollisionSettings`]
//! value handed to the query.

use serde::{Deserialize, Serialize};

use super::traits::ShortestDistance;
use crate::config::{Config, ConfigError};

/// Distance below which two shapes are reported as intersecting
pub const INTERSECTION_EPSILON: f32 = 1.0e-4;

/// Threshold on the squared sine of the angle between two directions,
/// `|u x v|^2 / (|u|^2 |v|^2)`, below which they are treated as parallel.
/// Directions within about `1e-4` radians qualify.
pub(crate) const PARALLEL_EPSILON: f32 = 1.0e-8;

/// Relative threshold on the signed volume of parallelepiped edges
pub(crate) const VOLUME_EPSILON: f32 = 1.0e-6;

/// Tunables for intersection queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Threshold below which `shortest_distance` counts as intersecting
    pub intersection_epsilon: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            intersection_epsilon: INTERSECTION_EPSILON,
        }
    }
}

impl CollisionSettings {
    /// Create settings with a custom epsilon
    pub fn new(intersection_epsilon: f32) -> Result<Self, ConfigError> {
        let settings = Self { intersection_epsilon };
        settings.validate()?;
        Ok(settings)
    }

    /// Strict intersection test using this epsilon
    pub fn intersects<Lhs, Rhs>(&self, lhs: &Lhs, rhs: &Rhs) -> bool
    where
        Lhs: ShortestDistance<Rhs> + ?Sized,
        Rhs: ?Sized,
    {
        lhs.shortest_distance(rhs) < self.intersection_epsilon
    }
}

impl Config for CollisionSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.intersection_epsilon.is_finite() && self.intersection_epsilon > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Invalid {
                field: "intersection_epsilon",
                reason: format!("must be finite and positive, got {}", self.intersection_epsilon),
            })
        }
    }
}
