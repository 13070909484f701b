//! Untrusted request decoding.
//!
//! [`RawRequest`] mirrors the JSON a browser client posts: a `type` string
//! plus an optional bag of overrides. [`RawRequest::to_request`] turns it
//! into a validated [`SimulationRequest`], and [`run_raw`] is the one-call
//! boundary that never returns `Err`; failures come back as data so the
//! caller can serialize them straight to the client.

use bounce_types::{Result, RunOutcome, SimulationRequest};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::runner::SimulationRunner;

/// Optional overrides supplied with a raw request.
///
/// Every field is optional; missing fields keep the per-mode defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParameters {
    /// Number of discrete steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_steps: Option<usize>,
    /// Number of bodies in a collision run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_objects: Option<usize>,
    /// Sphere radius for every seeded body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_size: Option<f64>,
    /// Gravitational acceleration magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    /// Coefficient of restitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f64>,
    /// Integration timestep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<f64>,
    /// Starting position for a gravity drop, as `[x, y, z]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<[f64; 3]>,
    /// Starting velocity for a gravity drop, as `[x, y, z]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<[f64; 3]>,
}

/// A simulation request as posted by a client, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Requested simulation type, e.g. `"gravity"` or `"collision"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional parameter overrides.
    #[serde(default)]
    pub parameters: RawParameters,
}

impl RawRequest {
    /// A raw request with no overrides.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            parameters: RawParameters::default(),
        }
    }

    /// Decode into a validated [`SimulationRequest`].
    ///
    /// Unset parameters fall back to the per-mode defaults of
    /// [`SimulationRequest::collision`] or
    /// [`SimulationRequest::gravity_drop`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnsupportedSimulation`](bounce_types::SimError::UnsupportedSimulation)
    /// for an unknown `type` string, or a validation error if the decoded
    /// request is unusable.
    pub fn to_request(&self) -> Result<SimulationRequest> {
        let kind = self.kind.parse::<bounce_types::SimulationKind>()?;

        let mut request = match kind {
            bounce_types::SimulationKind::Collision => SimulationRequest::collision(),
            bounce_types::SimulationKind::Gravity => SimulationRequest::gravity_drop(),
        };

        let params = &self.parameters;
        if let Some(time_steps) = params.time_steps {
            request.time_steps = time_steps;
        }
        if let Some(num_objects) = params.num_objects {
            request.num_objects = num_objects;
        }
        if let Some(object_size) = params.object_size {
            request.object_size = object_size;
        }
        if let Some(gravity) = params.gravity {
            request.world.gravity = gravity;
        }
        if let Some(restitution) = params.restitution {
            request.world.restitution = restitution;
        }
        if let Some(dt) = params.dt {
            request.world.dt = dt;
        }
        if let Some([x, y, z]) = params.initial_position {
            request.initial_position = Point3::new(x, y, z);
        }
        if let Some([x, y, z]) = params.initial_velocity {
            request.initial_velocity = Vector3::new(x, y, z);
        }

        request.validate()?;
        Ok(request)
    }
}

/// Decode and run a raw request, reporting failure as data.
///
/// This is the outermost entry point: whatever goes wrong (unknown type,
/// bad parameters, a diverging run), the caller gets a [`RunOutcome`] it
/// can serialize, never an `Err`.
#[must_use]
pub fn run_raw(raw: &RawRequest) -> RunOutcome {
    RunOutcome::from_result(
        raw.to_request()
            .and_then(|request| SimulationRunner::run(&request)),
    )
}
