//! Simulation orchestration.
//!
//! [`SimulationRunner`] drives a [`World`] through a full run and assembles
//! the report. Each discrete step performs, in order:
//!
//! 1. Integrate every body ([`SemiImplicitEuler::step_all`]).
//! 2. Snapshot the post-integration state.
//! 3. Detect contacts once, then resolve them in ascending pair order.
//! 4. Validate the world.
//!
//! Collisions resolved in a step therefore show up in the **next** step's
//! snapshot; the snapshot for step `k` is what a renderer draws for frame
//! `k`.

use bounce_contact::{detect_contacts, resolve_contact};
use bounce_types::{
    CollisionEvent, CollisionReport, GravityReport, Result, SimulationKind, SimulationReport,
    SimulationRequest, StepSnapshot,
};
use tracing::{debug, info};

use crate::integrate::SemiImplicitEuler;
use crate::world::World;

/// Outcome of one discrete step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Post-integration, pre-resolution state of every body.
    pub snapshot: StepSnapshot,
    /// Collisions that applied an impulse this step.
    pub events: Vec<CollisionEvent>,
}

/// Drives a world through a simulation and assembles the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationRunner;

impl SimulationRunner {
    /// Advance `world` by one discrete step.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Diverged`](bounce_types::SimError::Diverged) if
    /// any body ends the step with non-finite state.
    pub fn step(world: &mut World, step: usize) -> Result<StepResult> {
        // 1. Integrate
        SemiImplicitEuler::step_all(world);

        // 2. Snapshot before any impulse is applied
        let snapshot = world.snapshot(step);

        // 3. Detect once, resolve in ascending pair order
        let restitution = world.params().restitution;
        let contacts = detect_contacts(world.bodies());
        let mut events = Vec::new();
        for contact in &contacts {
            if resolve_contact(world.bodies_mut(), contact, restitution).is_some() {
                events.push(CollisionEvent::new(
                    step,
                    contact.body_a,
                    contact.body_b,
                    contact.point,
                ));
            }
        }

        // 4. Reject runs that blew up
        world.validate()?;

        Ok(StepResult { snapshot, events })
    }

    /// Run a full simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation or the simulation
    /// diverges mid-run.
    pub fn run(request: &SimulationRequest) -> Result<SimulationReport> {
        Self::run_with_progress(request, |_| {})
    }

    /// Run a full simulation, invoking `on_step` after every step.
    ///
    /// The callback sees each step's snapshot as soon as it is captured,
    /// which lets a caller stream frames while the run is still going.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation or the simulation
    /// diverges mid-run.
    pub fn run_with_progress(
        request: &SimulationRequest,
        on_step: impl FnMut(&StepSnapshot),
    ) -> Result<SimulationReport> {
        request.validate()?;

        match request.kind {
            SimulationKind::Collision => Self::run_collision(request, on_step),
            SimulationKind::Gravity => Self::run_gravity(request, on_step),
        }
    }

    fn run_collision(
        request: &SimulationRequest,
        mut on_step: impl FnMut(&StepSnapshot),
    ) -> Result<SimulationReport> {
        let mut world =
            World::collision_scene(request.world, request.num_objects, request.object_size);

        info!(
            bodies = world.body_count(),
            steps = request.time_steps,
            dt = world.params().dt,
            "starting collision run"
        );

        let mut frames = Vec::with_capacity(request.time_steps);
        let mut events = Vec::new();

        for step in 0..request.time_steps {
            let result = Self::step(&mut world, step)?;
            on_step(&result.snapshot);
            frames.push(result.snapshot);
            events.extend(result.events);
        }

        debug!(collisions = events.len(), "collision run complete");

        Ok(SimulationReport::Collision(CollisionReport::new(
            request.time_steps,
            request.num_objects,
            &frames,
            &events,
        )))
    }

    fn run_gravity(
        request: &SimulationRequest,
        mut on_step: impl FnMut(&StepSnapshot),
    ) -> Result<SimulationReport> {
        let mut world = World::drop_scene(
            request.world,
            request.initial_position,
            request.initial_velocity,
            request.object_size,
        );

        info!(
            steps = request.time_steps,
            dt = world.params().dt,
            "starting gravity drop"
        );

        let mut positions = Vec::with_capacity(request.time_steps);
        let mut velocities = Vec::with_capacity(request.time_steps);

        for step in 0..request.time_steps {
            SemiImplicitEuler::step_all(&mut world);
            world.validate()?;

            let snapshot = world.snapshot(step);
            on_step(&snapshot);

            if let Some(body) = world.bodies().first() {
                positions.push([body.position.x, body.position.y, body.position.z]);
                velocities.push([body.velocity.x, body.velocity.y, body.velocity.z]);
            }
        }

        debug!("gravity drop complete");

        Ok(SimulationReport::Gravity(GravityReport::new(
            positions, velocities,
        )))
    }
}
