//! Construction errors for collision shapes
//!
//! Queries never fail. Everything that would make a query numerically
//! meaningless is rejected when the shape is built.

use std::fmt;

use crate::foundation::math::utils::{is_finite_point, is_finite_vector};
use crate::foundation::math::{Point3, Vec3};

/// The eight primitive shape types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Sphere`](super::Sphere)
    Sphere,
    /// [`Plane`](super::Plane)
    Plane,
    /// [`Line`](super::Line)
    Line,
    /// [`Ray`](super::Ray)
    Ray,
    /// [`LineSegment`](super::LineSegment)
    LineSegment,
    /// [`InfiniteCylinder`](super::InfiniteCylinder)
    InfiniteCylinder,
    /// [`Capsule`](super::Capsule)
    Capsule,
    /// [`Parallelepiped`](super::Parallelepiped)
    Parallelepiped,
}

impl ShapeKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Sphere,
        Self::Plane,
        Self::Line,
        Self::Ray,
        Self::LineSegment,
        Self::InfiniteCylinder,
        Self::Capsule,
        Self::Parallelepiped,
    ];

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Line => "line",
            Self::Ray => "ray",
            Self::LineSegment => "line segment",
            Self::InfiniteCylinder => "infinite cylinder",
            Self::Capsule => "capsule",
            Self::Parallelepiped => "parallelepiped",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a shape was rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// A coordinate, vector component or radius was NaN or infinite
    #[error("non-finite input")]
    NonFinite,

    /// The two defining points coincide, or the direction vector is zero
    #[error("zero-length direction")]
    ZeroLengthDirection,

    /// Radius below zero
    #[error("invalid radius {0}")]
    InvalidRadius(f32),

    /// Plane normal of zero length
    #[error("zero-length normal")]
    ZeroNormal,

    /// Parallelepiped edges do not span 3-space
    #[error("linearly dependent edges")]
    SingularEdges,
}

/// Collision errors
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CollisionError {
    /// Shape input that would make every query meaningless
    #[error("degenerate {kind}: {reason}")]
    DegenerateShape {
        /// The shape being built
        kind: ShapeKind,
        /// What was wrong with it
        reason: Degeneracy,
    },
}

impl CollisionError {
    /// Build a degenerate-shape error, logging the rejection
    pub(crate) fn degenerate(kind: ShapeKind, reason: Degeneracy) -> Self {
        log::debug!("Rejected {kind}: {reason}");
        Self::DegenerateShape { kind, reason }
    }

    /// Report an error from an inner component as belonging to the outer shape
    pub(crate) const fn with_kind(self, kind: ShapeKind) -> Self {
        match self {
            Self::DegenerateShape { reason, .. } => Self::DegenerateShape { kind, reason },
        }
    }

    /// The kind of shape that failed to build
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::DegenerateShape { kind, .. } => *kind,
        }
    }
}

/// Reject NaN or infinite coordinates
pub(crate) fn ensure_finite_point(kind: ShapeKind, point: &Point3) -> Result<(), CollisionError> {
    if is_finite_point(point) {
        Ok(())
    } else {
        Err(CollisionError::degenerate(kind, Degeneracy::NonFinite))
    }
}

/// Reject NaN or infinite vector components
pub(crate) fn ensure_finite_vector(kind: ShapeKind, vector: &Vec3) -> Result<(), CollisionError> {
    if is_finite_vector(vector) {
        Ok(())
    } else {
        Err(CollisionError::degenerate(kind, Degeneracy::NonFinite))
    }
}

/// Radii must be finite and at least zero; zero is a legal point-like shape
pub(crate) fn ensure_radius(kind: ShapeKind, radius: f32) -> Result<(), CollisionError> {
    if !radius.is_finite() {
        Err(CollisionError::degenerate(kind, Degeneracy::NonFinite))
    } else if radius < 0.0 {
        Err(CollisionError::degenerate(kind, Degeneracy::InvalidRadius(radius)))
    } else {
        Ok(())
    }
}
