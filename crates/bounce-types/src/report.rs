//! Wire-shaped simulation results.
//!
//! These types mirror the JSON contract of the playground front end:
//! coordinates as plain `[x, y, z]` arrays, collision counts alongside the
//! event list, and failures as `{"success": false, "error": ...}` data
//! rather than propagated errors. Reports are assembled from the engine's
//! snapshot and event types and never hand-edited, so the counts always
//! match the lists.

use crate::body::BodyId;
use crate::config::SimulationKind;
use crate::error::SimError;
use crate::events::{BodySnapshot, CollisionEvent, StepSnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One body's state inside a frame record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectState {
    /// Body identifier.
    pub id: BodyId,
    /// Position as `[x, y, z]`.
    pub position: [f64; 3],
    /// Velocity as `[x, y, z]`.
    pub velocity: [f64; 3],
}

impl From<&BodySnapshot> for ObjectState {
    fn from(snapshot: &BodySnapshot) -> Self {
        Self {
            id: snapshot.id,
            position: [
                snapshot.position.x,
                snapshot.position.y,
                snapshot.position.z,
            ],
            velocity: [
                snapshot.velocity.x,
                snapshot.velocity.y,
                snapshot.velocity.z,
            ],
        }
    }
}

/// All body states for one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameRecord {
    /// Step index.
    pub step: usize,
    /// Per-body states, in body order.
    pub objects: Vec<ObjectState>,
}

impl From<&StepSnapshot> for FrameRecord {
    fn from(snapshot: &StepSnapshot) -> Self {
        Self {
            step: snapshot.step,
            objects: snapshot.bodies.iter().map(ObjectState::from).collect(),
        }
    }
}

/// One recorded collision, in wire form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionRecord {
    /// Step index the collision was resolved in.
    pub step: usize,
    /// Smaller body id of the pair.
    pub object1: BodyId,
    /// Larger body id of the pair.
    pub object2: BodyId,
    /// Contact point as `[x, y, z]`.
    pub position: [f64; 3],
}

impl From<&CollisionEvent> for CollisionRecord {
    fn from(event: &CollisionEvent) -> Self {
        Self {
            step: event.step,
            object1: event.body_a,
            object2: event.body_b,
            position: [
                event.contact_point.x,
                event.contact_point.y,
                event.contact_point.z,
            ],
        }
    }
}

/// The trajectory and event payload of a collision run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionData {
    /// Number of steps that were run.
    pub time_steps: usize,
    /// One frame per step.
    pub objects: Vec<FrameRecord>,
    /// All recorded collisions, in resolution order.
    pub collisions: Vec<CollisionRecord>,
}

/// Complete result of a collision run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionReport {
    /// Always [`SimulationKind::Collision`]; serialized as `"type"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SimulationKind,
    /// Trajectory and collision payload.
    pub simulation_data: CollisionData,
    /// Number of simulated bodies.
    pub num_objects: usize,
    /// Number of recorded collisions; always equals
    /// `simulation_data.collisions.len()`.
    pub collision_count: usize,
    /// Human-readable completion summary.
    pub message: String,
}

impl CollisionReport {
    /// Assemble a report from a finished run.
    ///
    /// The collision count is taken from the event list, never supplied by
    /// the caller.
    #[must_use]
    pub fn new(
        time_steps: usize,
        num_objects: usize,
        frames: &[StepSnapshot],
        events: &[CollisionEvent],
    ) -> Self {
        let objects: Vec<FrameRecord> = frames.iter().map(FrameRecord::from).collect();
        let collisions: Vec<CollisionRecord> = events.iter().map(CollisionRecord::from).collect();
        let collision_count = collisions.len();

        Self {
            kind: SimulationKind::Collision,
            simulation_data: CollisionData {
                time_steps,
                objects,
                collisions,
            },
            num_objects,
            collision_count,
            message: format!("collision simulation completed with {collision_count} collisions"),
        }
    }
}

/// Complete result of a gravity drop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GravityReport {
    /// Always [`SimulationKind::Gravity`]; serialized as `"type"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SimulationKind,
    /// Body position after each step, as `[x, y, z]`.
    pub positions: Vec<[f64; 3]>,
    /// Body velocity after each step, as `[x, y, z]`.
    pub velocities: Vec<[f64; 3]>,
    /// Number of steps that were run.
    pub time_steps: usize,
}

impl GravityReport {
    /// Assemble a report from per-step samples.
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, velocities: Vec<[f64; 3]>) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        let time_steps = positions.len();
        Self {
            kind: SimulationKind::Gravity,
            positions,
            velocities,
            time_steps,
        }
    }
}

/// Result of any successful run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SimulationReport {
    /// Collision run result.
    Collision(CollisionReport),
    /// Gravity drop result.
    Gravity(GravityReport),
}

impl SimulationReport {
    /// Which simulation produced this report.
    #[must_use]
    pub fn kind(&self) -> SimulationKind {
        match self {
            Self::Collision(_) => SimulationKind::Collision,
            Self::Gravity(_) => SimulationKind::Gravity,
        }
    }

    /// The collision report, if this was a collision run.
    #[must_use]
    pub fn as_collision(&self) -> Option<&CollisionReport> {
        match self {
            Self::Collision(report) => Some(report),
            Self::Gravity(_) => None,
        }
    }

    /// The gravity report, if this was a gravity drop.
    #[must_use]
    pub fn as_gravity(&self) -> Option<&GravityReport> {
        match self {
            Self::Gravity(report) => Some(report),
            Self::Collision(_) => None,
        }
    }
}

/// A failed run, as data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FailureReport {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error description.
    pub error: String,
}

impl FailureReport {
    /// Build a failure from a simulation error.
    #[must_use]
    pub fn new(error: &SimError) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }

    /// Build a failure from a plain message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

impl From<SimError> for FailureReport {
    fn from(error: SimError) -> Self {
        Self::new(&error)
    }
}

/// What a caller at the transport boundary receives: either a report or a
/// structured failure. Errors never cross the boundary as `Err` or panics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RunOutcome {
    /// The run completed and produced a report.
    Report(SimulationReport),
    /// The run failed; details in the payload.
    Failure(FailureReport),
}

impl RunOutcome {
    /// Convert an engine result into an outcome.
    #[must_use]
    pub fn from_result(result: crate::Result<SimulationReport>) -> Self {
        match result {
            Ok(report) => Self::Report(report),
            Err(error) => Self::Failure(FailureReport::new(&error)),
        }
    }

    /// Check if the run failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The report, if the run succeeded.
    #[must_use]
    pub fn report(&self) -> Option<&SimulationReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, if the run failed.
    #[must_use]
    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Report(_) => None,
        }
    }
}
