//! Discrete-time sphere simulation engine.
//!
//! This crate provides the simulation loop, world management, and numerical
//! integration for the bounce playground. It builds on [`bounce_types`] for
//! the data structures and [`bounce_contact`] for sphere-sphere collisions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SimulationRunner                         │
//! │  Per step: integrate → snapshot → detect → resolve          │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         World                                │
//! │  Contains: bodies, shared parameters                        │
//! │  Provides: scene seeding, validation, diagnostics           │
//! └─────────────────────────┬───────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │            SemiImplicitEuler + bounce-contact                │
//! │  Gravity, ground bounce, sphere-sphere impulses             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Two Gravity Paths
//!
//! Gravity shows up twice, on purpose:
//!
//! - [`SimulationRunner`] runs the discrete drop: a single body stepped by
//!   [`SemiImplicitEuler`], bouncing off the ground plane along **y**.
//! - [`vertex_trajectory`] samples the closed-form fall of a raw vertex
//!   cloud along **z**, with no ground and no bounce, for mesh previews.
//!
//! The two paths share constants but not code; see the module docs for the
//! exact formulas.
//!
//! # Quick Start
//!
//! ```
//! use bounce_core::{SimulationRequest, SimulationRunner};
//!
//! // One sphere released from 10 m, 100 steps at 10 Hz
//! let request = SimulationRequest::gravity_drop();
//! let report = SimulationRunner::run(&request).unwrap();
//!
//! let gravity = report.as_gravity().unwrap();
//! assert_eq!(gravity.positions.len(), 100);
//!
//! // The sphere never sinks below its own radius
//! assert!(gravity.positions.iter().all(|p| p[1] >= 0.5 - 1e-12));
//! ```
//!
//! # The Transport Boundary
//!
//! Clients talk JSON. [`RawRequest`] is the untrusted wire shape and
//! [`run_raw`] is the entry point that never returns `Err`:
//!
//! ```
//! use bounce_core::{run_raw, RawRequest};
//!
//! let outcome = run_raw(&RawRequest::new("plasma"));
//! let failure = outcome.failure().unwrap();
//! assert!(!failure.success);
//! assert!(failure.error.contains("plasma"));
//! ```
//!
//! For long runs, [`SimulationTask`] moves the work to a worker thread and
//! streams per-step snapshots over a channel.

#![doc(html_root_url = "https://docs.rs/bounce-core/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::cast_precision_loss        // Step and body counts stay far below 2^52
)]

mod free_fall;
mod integrate;
mod request;
mod runner;
mod task;
mod world;

pub use free_fall::{displacement, vertex_trajectory};
pub use integrate::SemiImplicitEuler;
pub use request::{run_raw, RawParameters, RawRequest};
pub use runner::{SimulationRunner, StepResult};
pub use task::SimulationTask;
pub use world::World;

// Re-export the collision pipeline for callers that drive a world by hand
pub use bounce_contact::{detect_contacts, resolve_contact, Contact, ContactImpulse};

// Re-export key types from bounce-types for convenience
pub use bounce_types::{
    Body, BodyId, BodySnapshot, CollisionEvent, CollisionReport, FailureReport, GravityReport,
    Result, RunOutcome, SimError, SimulationKind, SimulationReport, SimulationRequest,
    StepSnapshot, WorldParams,
};
