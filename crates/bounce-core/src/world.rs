//! Simulation world container.
//!
//! The [`World`] owns the bodies and shared parameters for one run. Every
//! run builds its own world; nothing is shared or global, so concurrent
//! runs cannot interfere.

use bounce_types::{Body, BodyId, SimError, StepSnapshot, WorldParams};
use nalgebra::{Point3, Vector3};

/// All simulation state for one run.
#[derive(Debug, Clone)]
pub struct World {
    params: WorldParams,
    bodies: Vec<Body>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldParams::default())
    }
}

impl World {
    /// Create an empty world with the given parameters.
    #[must_use]
    pub fn new(params: WorldParams) -> Self {
        Self {
            params,
            bodies: Vec::new(),
        }
    }

    // =========================================================================
    // Scene factories
    // =========================================================================

    /// Seed the standard collision scene.
    ///
    /// Body `i` starts at `((i - n/2)·2, 8 + i, 0)` with velocity
    /// `((i - n/2)·1.5, -1, 0)`, radius `object_size`, and unit mass, where
    /// `n/2` is real (not integer) division. Offset and horizontal speed
    /// share a sign, so the spheres fan outward while they fall.
    #[must_use]
    pub fn collision_scene(params: WorldParams, num_objects: usize, object_size: f64) -> Self {
        let mut world = Self::new(params);
        let half = num_objects as f64 / 2.0;

        for i in 0..num_objects {
            let offset = i as f64 - half;
            world.add_body(
                Point3::new(offset * 2.0, 8.0 + i as f64, 0.0),
                Vector3::new(offset * 1.5, -1.0, 0.0),
                object_size,
                1.0,
            );
        }

        world
    }

    /// Seed a single unit-mass body for a gravity drop.
    #[must_use]
    pub fn drop_scene(
        params: WorldParams,
        position: Point3<f64>,
        velocity: Vector3<f64>,
        radius: f64,
    ) -> Self {
        let mut world = Self::new(params);
        world.add_body(position, velocity, radius, 1.0);
        world
    }

    // =========================================================================
    // Body management
    // =========================================================================

    /// Add a body to the world. Ids are assigned sequentially from zero.
    pub fn add_body(
        &mut self,
        position: Point3<f64>,
        velocity: Vector3<f64>,
        radius: f64,
        mass: f64,
    ) -> BodyId {
        let id = BodyId::new(self.bodies.len() as u64);
        self.bodies
            .push(Body::new(id, position, radius, mass).with_velocity(velocity));
        id
    }

    /// Get the world parameters.
    #[must_use]
    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    /// Look up a body by id.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// All bodies, in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to all bodies, in insertion order.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Number of bodies.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Check whether the world has no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    // =========================================================================
    // Validation and diagnostics
    // =========================================================================

    /// Validate parameters and every body.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Diverged`] if any body state has turned
    /// non-finite, or the underlying parameter/body validation error.
    pub fn validate(&self) -> bounce_types::Result<()> {
        self.params.validate()?;

        for body in &self.bodies {
            if !body.is_finite() {
                return Err(SimError::diverged(format!(
                    "{} has non-finite state",
                    body.id
                )));
            }
            body.validate()?;
        }

        Ok(())
    }

    /// Total translational kinetic energy of all bodies.
    #[must_use]
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total linear momentum of all bodies.
    #[must_use]
    pub fn total_linear_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(Body::linear_momentum)
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Capture the current state of every body.
    #[must_use]
    pub fn snapshot(&self, step: usize) -> StepSnapshot {
        StepSnapshot::capture(step, &self.bodies)
    }
}
