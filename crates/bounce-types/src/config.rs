//! Configuration types for simulation runs.
//!
//! A [`WorldParams`] carries the shared physical constants for one run; a
//! [`SimulationRequest`] bundles those with the mode-specific scene settings.

use nalgebra::{Point3, Vector3};

use crate::error::SimError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared physical parameters for every body in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldParams {
    /// Downward gravitational acceleration magnitude (m/s²).
    pub gravity: f64,
    /// Coefficient of restitution, shared by ground and body-body contacts.
    pub restitution: f64,
    /// Fixed integration timestep (seconds).
    pub dt: f64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            restitution: 0.8,
            dt: 0.05,
        }
    }
}

impl WorldParams {
    /// Parameters for a single-body gravity drop (coarser timestep).
    #[must_use]
    pub fn gravity_drop() -> Self {
        Self {
            dt: 0.1,
            ..Default::default()
        }
    }

    /// Set the gravity magnitude.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the restitution coefficient.
    #[must_use]
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set the timestep.
    #[must_use]
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestep is not positive and finite, gravity
    /// is not positive and finite, or restitution is outside `[0, 1]`.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep(self.dt));
        }

        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SimError::invalid_config(
                "gravity must be positive and finite",
            ));
        }

        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err(SimError::invalid_config(
                "restitution must be between 0 and 1",
            ));
        }

        Ok(())
    }
}

/// The supported simulation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimulationKind {
    /// Single body dropped under gravity.
    Gravity,
    /// Procedurally seeded multi-body collision run.
    Collision,
}

impl SimulationKind {
    /// The wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gravity => "gravity",
            Self::Collision => "collision",
        }
    }
}

impl std::fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SimulationKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gravity" => Ok(Self::Gravity),
            "collision" => Ok(Self::Collision),
            other => Err(SimError::UnsupportedSimulation(other.to_string())),
        }
    }
}

/// A fully specified simulation request.
///
/// Use [`SimulationRequest::collision`] or [`SimulationRequest::gravity_drop`]
/// for the per-mode defaults and override fields from there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationRequest {
    /// Which simulation to run.
    pub kind: SimulationKind,
    /// Number of discrete steps to run.
    pub time_steps: usize,
    /// Number of bodies in a collision run.
    pub num_objects: usize,
    /// Sphere radius for every seeded body (meters).
    pub object_size: f64,
    /// Shared physical parameters.
    pub world: WorldParams,
    /// Starting position for a gravity drop.
    pub initial_position: Point3<f64>,
    /// Starting velocity for a gravity drop.
    pub initial_velocity: Vector3<f64>,
}

impl SimulationRequest {
    /// Default collision run: three bodies, 200 steps at 20 Hz.
    #[must_use]
    pub fn collision() -> Self {
        Self {
            kind: SimulationKind::Collision,
            time_steps: 200,
            num_objects: 3,
            object_size: 0.5,
            world: WorldParams::default(),
            initial_position: Point3::new(0.0, 10.0, 0.0),
            initial_velocity: Vector3::zeros(),
        }
    }

    /// Default gravity drop: one body released from 10 m, 100 steps at 10 Hz.
    #[must_use]
    pub fn gravity_drop() -> Self {
        Self {
            kind: SimulationKind::Gravity,
            time_steps: 100,
            num_objects: 1,
            object_size: 0.5,
            world: WorldParams::gravity_drop(),
            initial_position: Point3::new(0.0, 10.0, 0.0),
            initial_velocity: Vector3::zeros(),
        }
    }

    /// Set the step count.
    #[must_use]
    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    /// Set the body count.
    #[must_use]
    pub fn with_num_objects(mut self, num_objects: usize) -> Self {
        self.num_objects = num_objects;
        self
    }

    /// Set the body radius.
    #[must_use]
    pub fn with_object_size(mut self, object_size: f64) -> Self {
        self.object_size = object_size;
        self
    }

    /// Set the world parameters.
    #[must_use]
    pub fn with_world(mut self, world: WorldParams) -> Self {
        self.world = world;
        self
    }

    /// Set the initial position and velocity for a gravity drop.
    #[must_use]
    pub fn with_initial_state(
        mut self,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Self {
        self.initial_position = position;
        self.initial_velocity = velocity;
        self
    }

    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns an error if any count is zero, the object size or initial
    /// state is not finite, or the world parameters fail validation.
    pub fn validate(&self) -> crate::Result<()> {
        if self.time_steps == 0 {
            return Err(SimError::invalid_config("time_steps must be at least 1"));
        }

        if self.num_objects == 0 {
            return Err(SimError::invalid_config("num_objects must be at least 1"));
        }

        if !self.object_size.is_finite() || self.object_size <= 0.0 {
            return Err(SimError::invalid_config(
                "object_size must be positive and finite",
            ));
        }

        let initial_finite = self.initial_position.coords.iter().all(|c| c.is_finite())
            && self.initial_velocity.iter().all(|c| c.is_finite());
        if !initial_finite {
            return Err(SimError::invalid_config("initial state must be finite"));
        }

        self.world.validate()
    }
}
