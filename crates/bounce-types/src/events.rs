//! Collision events and per-step state snapshots.

use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A body-body collision recorded during a step.
///
/// The pair is ordered (`body_a < body_b`) and the contact point is the
/// midpoint of the two centers at detection time. Events are immutable once
/// recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionEvent {
    /// Step index the collision was resolved in.
    pub step: usize,
    /// Smaller body id of the pair.
    pub body_a: BodyId,
    /// Larger body id of the pair.
    pub body_b: BodyId,
    /// Midpoint of the two centers when the overlap was detected.
    pub contact_point: Point3<f64>,
}

impl CollisionEvent {
    /// Record a collision between an ordered pair of bodies.
    #[must_use]
    pub fn new(step: usize, body_a: BodyId, body_b: BodyId, contact_point: Point3<f64>) -> Self {
        debug_assert!(body_a < body_b, "collision pair must be ordered");
        Self {
            step,
            body_a,
            body_b,
            contact_point,
        }
    }

    /// Check if this event involves the given body.
    #[must_use]
    pub fn involves(&self, id: BodyId) -> bool {
        self.body_a == id || self.body_b == id
    }
}

/// State of a single body within a step snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodySnapshot {
    /// Body identifier.
    pub id: BodyId,
    /// Center position at capture time.
    pub position: Point3<f64>,
    /// Velocity at capture time.
    pub velocity: Vector3<f64>,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            position: body.position,
            velocity: body.velocity,
        }
    }
}

/// All body states captured once during a step, in body order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepSnapshot {
    /// Step index this snapshot belongs to.
    pub step: usize,
    /// One entry per body, in the world's body order.
    pub bodies: Vec<BodySnapshot>,
}

impl StepSnapshot {
    /// Capture the current state of every body.
    #[must_use]
    pub fn capture(step: usize, bodies: &[Body]) -> Self {
        Self {
            step,
            bodies: bodies.iter().map(BodySnapshot::from).collect(),
        }
    }

    /// Look up the captured state of a body by id.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Number of bodies in the snapshot.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
