//! Impulse-based contact resolution.
//!
//! One contact is resolved with a single restitution impulse along the
//! contact normal followed by a positional correction that splits the
//! overlap evenly:
//!
//! ```text
//! v_rel = (vB - vA) · n
//! j     = -(1 + e) · v_rel / (1/mA + 1/mB)
//! vA'   = vA - (j / mA) · n
//! vB'   = vB + (j / mB) · n
//! pA'   = pA - n · overlap / 2
//! pB'   = pB + n · overlap / 2
//! ```
//!
//! Pairs that are already separating (`v_rel > 0`) are left completely
//! untouched, positions included; they drift apart on velocity alone over
//! the following steps. That asymmetry is long-standing engine behavior and
//! callers depend on the event stream it produces, so it stays.

use bounce_types::Body;
use nalgebra::Vector3;

use crate::detect::Contact;

/// The impulse applied while resolving a contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactImpulse {
    /// Scalar impulse magnitude along the contact normal.
    pub magnitude: f64,
    /// Contact normal the impulse acted along (from A toward B).
    pub normal: Vector3<f64>,
}

/// Resolve one detected contact in place.
///
/// Applies the restitution impulse to both bodies' velocities and pushes
/// their centers apart by half the recorded overlap each. Returns the
/// applied impulse, or `None` if the pair was already separating (in which
/// case nothing is modified and no collision should be recorded).
///
/// Velocities are read at call time, so a body shared by several contacts
/// feels each impulse in turn; the geometry comes from the contact and is
/// not recomputed.
///
/// # Panics
///
/// Panics if the contact's body indices are out of range for `bodies`.
/// Contacts produced by [`detect_contacts`](crate::detect_contacts) on the
/// same slice are always in range.
pub fn resolve_contact(
    bodies: &mut [Body],
    contact: &Contact,
    restitution: f64,
) -> Option<ContactImpulse> {
    let (head, tail) = bodies.split_at_mut(contact.index_b);
    let a = &mut head[contact.index_a];
    let b = &mut tail[0];

    let normal = contact.normal;
    let relative_velocity = (b.velocity - a.velocity).dot(&normal);
    if relative_velocity > 0.0 {
        return None;
    }

    let magnitude =
        -(1.0 + restitution) * relative_velocity / (a.inverse_mass() + b.inverse_mass());

    a.velocity -= normal * (magnitude * a.inverse_mass());
    b.velocity += normal * (magnitude * b.inverse_mass());

    let correction = normal * (contact.overlap * 0.5);
    a.position -= correction;
    b.position += correction;

    Some(ContactImpulse { magnitude, normal })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::detect::detect_contacts;
    use approx::assert_relative_eq;
    use bounce_types::BodyId;
    use nalgebra::Point3;

    fn head_on_pair(speed: f64) -> Vec<Body> {
        vec![
            Body::new(BodyId::new(0), Point3::new(-0.4, 5.0, 0.0), 0.5, 1.0)
                .with_velocity(Vector3::new(speed, 0.0, 0.0)),
            Body::new(BodyId::new(1), Point3::new(0.4, 5.0, 0.0), 0.5, 1.0)
                .with_velocity(Vector3::new(-speed, 0.0, 0.0)),
        ]
    }

    #[test]
    fn test_head_on_equal_masses() {
        let mut bodies = head_on_pair(1.0);
        let contacts = detect_contacts(&bodies);
        assert_eq!(contacts.len(), 1);

        let restitution = 0.8;
        let impulse = resolve_contact(&mut bodies, &contacts[0], restitution).unwrap();

        // v_rel = -2, j = -(1.8)(-2)/2 = 1.8
        assert_relative_eq!(impulse.magnitude, 1.8, epsilon = 1e-12);

        // Equal masses: x-velocities reverse, scaled by the impulse
        assert_relative_eq!(bodies[0].velocity.x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(bodies[1].velocity.x, 0.8, epsilon = 1e-12);
        assert_relative_eq!(bodies[0].velocity.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_positions_split_overlap_evenly() {
        let mut bodies = head_on_pair(1.0);
        let contacts = detect_contacts(&bodies);
        let overlap = contacts[0].overlap;
        assert_relative_eq!(overlap, 0.2, epsilon = 1e-12);

        resolve_contact(&mut bodies, &contacts[0], 0.8).unwrap();

        assert_relative_eq!(bodies[0].position.x, -0.5, epsilon = 1e-12);
        assert_relative_eq!(bodies[1].position.x, 0.5, epsilon = 1e-12);
        // Centers now exactly one radius sum apart
        let distance = (bodies[1].position - bodies[0].position).norm();
        assert_relative_eq!(distance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_separating_pair_is_untouched() {
        // Overlapping but moving apart
        let mut bodies = head_on_pair(-1.0);
        let contacts = detect_contacts(&bodies);
        assert_eq!(contacts.len(), 1);

        let before = bodies.clone();
        let impulse = resolve_contact(&mut bodies, &contacts[0], 0.8);

        assert!(impulse.is_none());
        // No impulse and, deliberately, no positional correction either
        assert_eq!(bodies, before);
    }

    #[test]
    fn test_resting_pair_takes_impulse_branch() {
        // v_rel == 0: zero impulse, but positions still separate
        let mut bodies = head_on_pair(0.0);
        let contacts = detect_contacts(&bodies);

        let impulse = resolve_contact(&mut bodies, &contacts[0], 0.8).unwrap();

        assert_relative_eq!(impulse.magnitude, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bodies[0].velocity.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bodies[0].position.x, -0.5, epsilon = 1e-12);
        assert_relative_eq!(bodies[1].position.x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unequal_masses() {
        let mut bodies = vec![
            Body::new(BodyId::new(0), Point3::new(-0.4, 5.0, 0.0), 0.5, 1.0)
                .with_velocity(Vector3::new(1.0, 0.0, 0.0)),
            Body::new(BodyId::new(1), Point3::new(0.4, 5.0, 0.0), 0.5, 3.0),
        ];
        let contacts = detect_contacts(&bodies);

        let impulse = resolve_contact(&mut bodies, &contacts[0], 0.5).unwrap();

        // v_rel = -1, 1/mA + 1/mB = 4/3, j = 1.5/(4/3) = 1.125
        assert_relative_eq!(impulse.magnitude, 1.125, epsilon = 1e-12);
        assert_relative_eq!(bodies[0].velocity.x, 1.0 - 1.125, epsilon = 1e-12);
        assert_relative_eq!(bodies[1].velocity.x, 1.125 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_momentum_conserved_across_impulse() {
        let mut bodies = vec![
            Body::new(BodyId::new(0), Point3::new(-0.3, 5.0, 0.0), 0.5, 2.0)
                .with_velocity(Vector3::new(1.5, 0.0, 0.0)),
            Body::new(BodyId::new(1), Point3::new(0.4, 5.0, 0.0), 0.5, 0.5)
                .with_velocity(Vector3::new(-0.5, 0.0, 0.0)),
        ];
        let before: Vector3<f64> = bodies.iter().map(Body::linear_momentum).sum();

        let contacts = detect_contacts(&bodies);
        resolve_contact(&mut bodies, &contacts[0], 0.8).unwrap();

        let after: Vector3<f64> = bodies.iter().map(Body::linear_momentum).sum();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-12);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-12);
    }
}
