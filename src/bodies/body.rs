use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A single point mass in the simulation.
///
/// The engine does not validate that `mass` is positive or that `radius` is
/// non-negative; that is the responsibility of whoever constructs the body
/// set. Degenerate values (and coincident positions) propagate as
/// infinite/NaN results through the numeric pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// The body's position in world space
    pub position: Vector3,

    /// The body's velocity
    pub velocity: Vector3,

    /// The body's acceleration, recomputed from scratch every second
    pub acceleration: Vector3,

    /// The body's mass
    pub mass: f64,

    /// The body's collision radius; two bodies collide when their center
    /// distance is less than the sum of their radii
    pub radius: f64,

    /// Whether this body participated in at least one collision during the
    /// current second; cleared again at the start of the next acceleration
    /// phase
    pub collided: bool,
}

impl Body {
    /// Creates a new body at rest at the given position
    pub fn new(position: Vector3, mass: f64, radius: f64) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            mass,
            radius,
            collided: false,
        }
    }

    /// Creates a new body with an initial velocity
    pub fn with_velocity(position: Vector3, velocity: Vector3, mass: f64, radius: f64) -> Self {
        Self {
            velocity,
            ..Self::new(position, mass, radius)
        }
    }
}
