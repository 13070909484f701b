//! Sphere-sphere overlap detection.

use bounce_types::{Body, BodyId};
use nalgebra::{Point3, Vector3};

/// A detected overlap between two spheres.
///
/// Geometry (normal, distance, overlap, contact point) is frozen at
/// detection time; the resolver consumes it as-is even if earlier
/// resolutions in the same step have since moved one of the bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Index of the first body in the scanned slice.
    pub index_a: usize,
    /// Index of the second body in the scanned slice.
    pub index_b: usize,
    /// Id of the first body (always the smaller id in seeded scenes).
    pub body_a: BodyId,
    /// Id of the second body.
    pub body_b: BodyId,
    /// Unit normal from body A toward body B.
    pub normal: Vector3<f64>,
    /// Center distance at detection time.
    pub distance: f64,
    /// Penetration depth: `(r_a + r_b) - distance`.
    pub overlap: f64,
    /// Midpoint of the two centers.
    pub point: Point3<f64>,
}

/// Find every overlapping pair of spheres.
///
/// Scans all unordered pairs `(i, j)` with `i < j` in ascending order and
/// reports those whose center distance `d` satisfies `0 < d < r_i + r_j`.
/// Touching spheres (`d == r_i + r_j`) do not overlap. Coincident centers
/// (`d == 0`) have no defined contact normal and are skipped for this step;
/// that is an accepted degenerate state, not an error.
///
/// Brute-force O(n²); the scenes this engine runs are a handful of bodies.
#[must_use]
pub fn detect_contacts(bodies: &[Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let a = &bodies[i];
            let b = &bodies[j];

            let delta = b.position - a.position;
            let distance = delta.norm();
            let radius_sum = a.radius + b.radius;

            if distance >= radius_sum {
                continue;
            }
            if distance <= 0.0 {
                // Coincident centers: no direction to separate along.
                continue;
            }

            contacts.push(Contact {
                index_a: i,
                index_b: j,
                body_a: a.id,
                body_b: b.id,
                normal: delta / distance,
                distance,
                overlap: radius_sum - distance,
                point: Point3::from((a.position.coords + b.position.coords) * 0.5),
            });
        }
    }

    contacts
}
