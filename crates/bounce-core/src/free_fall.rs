//! Closed-form free-fall sampling for vertex clouds.
//!
//! The playground's mesh preview drops a rigid vertex cloud with no bounce
//! and no per-step state; every sample is computed directly from elapsed
//! time:
//!
//! ```text
//! z(t) = z₀ − ½·g·t²
//! ```
//!
//! This is deliberately a different code path from
//! [`SemiImplicitEuler`](crate::SemiImplicitEuler): it displaces the **z**
//! axis of its input vertices, never consults the ground plane, and does not
//! iterate. The preview calls it with gravity `9.81`, `dt = 0.1`, and
//! `duration = 1.0`.

use bounce_types::{Result, SimError};
use nalgebra::Point3;

/// Vertical displacement after free-falling for `t` seconds.
#[must_use]
pub fn displacement(gravity: f64, t: f64) -> f64 {
    -0.5 * gravity * t * t
}

/// Sample the free-fall trajectory of a vertex cloud.
///
/// Produces one frame per sample time `t_k = k·dt` over the half-open
/// interval `[0, duration)`; each frame holds every input vertex displaced
/// by [`displacement`] along z. The first frame is the input itself
/// (`t = 0`).
///
/// # Errors
///
/// Returns [`SimError::InvalidTimestep`] if `dt` is not positive and
/// finite, and an invalid-configuration error if `gravity` is not finite or
/// `duration` is negative or not finite.
pub fn vertex_trajectory(
    vertices: &[Point3<f64>],
    gravity: f64,
    dt: f64,
    duration: f64,
) -> Result<Vec<Vec<Point3<f64>>>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidTimestep(dt));
    }
    if !gravity.is_finite() {
        return Err(SimError::invalid_config("gravity must be finite"));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SimError::invalid_config(
            "duration must be non-negative and finite",
        ));
    }

    // Safe cast: duration and dt are positive and finite, result is bounded
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frame_count = (duration / dt).ceil() as usize;

    let mut frames = Vec::with_capacity(frame_count);
    for k in 0..frame_count {
        let t = k as f64 * dt;
        let dz = displacement(gravity, t);
        frames.push(
            vertices
                .iter()
                .map(|v| Point3::new(v.x, v.y, v.z + dz))
                .collect(),
        );
    }

    Ok(frames)
}
