//! Body state types.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a body within one simulation run.
///
/// Ids are ordered so collision pairs can be reported with the smaller id
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(pub u64);

impl BodyId {
    /// Create a new body ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for BodyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// A simulated sphere.
///
/// Position and velocity change as the simulation advances; `radius` and
/// `mass` are fixed for the lifetime of the body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// Center position (meters).
    pub position: Point3<f64>,
    /// Linear velocity (meters/second).
    pub velocity: Vector3<f64>,
    /// Sphere radius (meters). Always positive.
    pub radius: f64,
    /// Mass (kilograms). Always positive.
    pub mass: f64,
}

impl Body {
    /// Create a body at rest.
    #[must_use]
    pub fn new(id: BodyId, position: Point3<f64>, radius: f64, mass: f64) -> Self {
        Self {
            id,
            position,
            velocity: Vector3::zeros(),
            radius,
            mass,
        }
    }

    /// Set the initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Inverse mass, or zero if the mass is not usable.
    #[must_use]
    pub fn inverse_mass(&self) -> f64 {
        if self.mass.is_finite() && self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Check that position and velocity contain no `NaN` or `Inf`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.velocity.iter().all(|c| c.is_finite())
    }

    /// Translational kinetic energy: `½·m·v²`.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Linear momentum: `m·v`.
    #[must_use]
    pub fn linear_momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    /// Validate the body parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidBody`](crate::SimError::InvalidBody) if the
    /// radius or mass is not positive and finite, or if the state contains
    /// non-finite values.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(crate::SimError::invalid_body(format!(
                "{} radius must be positive and finite, got {}",
                self.id, self.radius
            )));
        }

        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(crate::SimError::invalid_body(format!(
                "{} mass must be positive and finite, got {}",
                self.id, self.mass
            )));
        }

        if !self.is_finite() {
            return Err(crate::SimError::invalid_body(format!(
                "{} has non-finite position or velocity",
                self.id
            )));
        }

        Ok(())
    }
}
