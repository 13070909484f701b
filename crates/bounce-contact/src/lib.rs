//! Sphere contact detection and impulse resolution.
//!
//! This crate implements the narrow scope the bounce engine needs: detect
//! which sphere pairs currently overlap, then resolve each pair with a
//! single restitution impulse and an even positional split of the overlap.
//! There is no broad phase, no swept detection, and no iterative solver;
//! detection runs once per step and each reported pair is resolved exactly
//! once, in ascending pair order.
//!
//! # Example
//!
//! ```
//! use bounce_contact::{detect_contacts, resolve_contact};
//! use bounce_types::{Body, BodyId};
//! use nalgebra::{Point3, Vector3};
//!
//! let mut bodies = vec![
//!     Body::new(BodyId::new(0), Point3::new(-0.4, 5.0, 0.0), 0.5, 1.0)
//!         .with_velocity(Vector3::new(1.0, 0.0, 0.0)),
//!     Body::new(BodyId::new(1), Point3::new(0.4, 5.0, 0.0), 0.5, 1.0)
//!         .with_velocity(Vector3::new(-1.0, 0.0, 0.0)),
//! ];
//!
//! let contacts = detect_contacts(&bodies);
//! assert_eq!(contacts.len(), 1);
//!
//! let impulse = resolve_contact(&mut bodies, &contacts[0], 0.8).unwrap();
//! assert!((impulse.magnitude - 1.8).abs() < 1e-12);
//! assert!((bodies[0].velocity.x - -0.8).abs() < 1e-12);
//! assert!((bodies[1].velocity.x - 0.8).abs() < 1e-12);
//! ```

#![doc(html_root_url = "https://docs.rs/bounce-contact/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,         // mul_add style changes aren't always clearer
)]

mod detect;
mod resolve;

pub use detect::{detect_contacts, Contact};
pub use resolve::{resolve_contact, ContactImpulse};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use bounce_types::{Body, BodyId};
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_detect_then_resolve_chain() {
        let mut bodies = vec![
            Body::new(BodyId::new(0), Point3::new(0.0, 1.0, 0.0), 0.6, 1.0)
                .with_velocity(Vector3::new(0.5, 0.0, 0.0)),
            Body::new(BodyId::new(1), Point3::new(1.0, 1.0, 0.0), 0.6, 1.0),
        ];

        let contacts = detect_contacts(&bodies);
        assert_eq!(contacts.len(), 1);

        let resolved = resolve_contact(&mut bodies, &contacts[0], 0.8);
        assert!(resolved.is_some());

        // The positional correction restores the full radius sum
        let distance = (bodies[1].position - bodies[0].position).norm();
        assert!((distance - 1.2).abs() < 1e-9);
    }
}
