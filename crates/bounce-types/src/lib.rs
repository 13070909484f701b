//! Core types for the bounce physics engine.
//!
//! This crate provides the foundational types for sphere-physics simulation
//! runs:
//!
//! - [`Body`] - Position, velocity, radius, and mass of a simulated sphere
//! - [`WorldParams`] - Gravity, restitution, and timestep shared by a run
//! - [`SimulationRequest`] - A fully specified run (mode, scene, parameters)
//! - [`CollisionEvent`] / [`StepSnapshot`] - What the engine records per step
//! - [`SimulationReport`] / [`RunOutcome`] - Wire-shaped results and failures
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no physics and no I/O. They're
//! the common language between:
//!
//! - The contact and integration crates (bounce-contact, bounce-core)
//! - Transport layers serializing results for the playground front end
//! - Tests asserting on trajectories and events
//!
//! # Coordinate System
//!
//! The discrete simulation is Y-up: gravity pulls along `-y` and the ground
//! plane sits at `y = 0`, so a resting sphere has `position.y == radius`.
//!
//! # Example
//!
//! ```
//! use bounce_types::{Body, BodyId};
//! use nalgebra::{Point3, Vector3};
//!
//! let body = Body::new(BodyId::new(0), Point3::new(0.0, 10.0, 0.0), 0.5, 1.0)
//!     .with_velocity(Vector3::new(0.0, -1.0, 0.0));
//!
//! assert!(body.validate().is_ok());
//! assert_eq!(body.position.y, 10.0);
//! ```

#![doc(html_root_url = "https://docs.rs/bounce-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
// Allow certain clippy lints that are overly pedantic for type definitions
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::cast_precision_loss,      // usize to f64 is fine for counts
)]

mod body;
mod config;
mod error;
mod events;
mod report;

pub use body::{Body, BodyId};
pub use config::{SimulationKind, SimulationRequest, WorldParams};
pub use error::SimError;
pub use events::{BodySnapshot, CollisionEvent, StepSnapshot};
pub use report::{
    CollisionData, CollisionRecord, CollisionReport, FailureReport, FrameRecord, GravityReport,
    ObjectState, RunOutcome, SimulationReport,
};

// Re-export math types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
