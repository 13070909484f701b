//! Semi-implicit Euler integration with ground bounce.
//!
//! One body step:
//!
//! ```text
//! v.y ← v.y − g·dt
//! p   ← p + v·dt
//! if p.y < radius { p.y = radius; v.y = −v.y · e }
//! ```
//!
//! Velocity updates before position (symplectic). The ground plane at
//! `y = 0` clamps and reflects within the same step, so a body never ends a
//! step with its center below its own radius. The clamp branch always
//! negates the vertical velocity, whatever its sign.

use bounce_types::{Body, WorldParams};

use crate::world::World;

/// Semi-implicit Euler integrator for spheres over a ground plane.
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Advance one body by one timestep.
    pub fn step(body: &mut Body, params: &WorldParams) {
        body.velocity.y -= params.gravity * params.dt;
        body.position += body.velocity * params.dt;

        if body.position.y < body.radius {
            body.position.y = body.radius;
            body.velocity.y = -body.velocity.y * params.restitution;
        }
    }

    /// Advance every body in the world by one timestep.
    pub fn step_all(world: &mut World) {
        let params = *world.params();
        for body in world.bodies_mut() {
            Self::step(body, &params);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bounce_types::BodyId;
    use nalgebra::{Point3, Vector3};

    fn falling_body(y: f64) -> Body {
        Body::new(BodyId::new(0), Point3::new(0.0, y, 0.0), 0.5, 1.0)
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let params = WorldParams::gravity_drop();
        let mut body = falling_body(10.0);

        SemiImplicitEuler::step(&mut body, &params);

        // From rest: v = -g·dt, then p falls by the *new* velocity
        assert_relative_eq!(body.velocity.y, -0.981, epsilon = 1e-12);
        assert_relative_eq!(body.position.y, 10.0 - 0.0981, epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal_motion_unaffected_by_gravity() {
        let params = WorldParams::default();
        let mut body = falling_body(5.0).with_velocity(Vector3::new(2.0, 0.0, -1.0));

        SemiImplicitEuler::step(&mut body, &params);

        assert_relative_eq!(body.velocity.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(body.velocity.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(body.position.x, 2.0 * params.dt, epsilon = 1e-12);
        assert_relative_eq!(body.position.z, -1.0 * params.dt, epsilon = 1e-12);
    }

    #[test]
    fn test_ground_bounce_clamps_and_reflects() {
        let params = WorldParams::gravity_drop();
        let mut body = falling_body(0.6).with_velocity(Vector3::new(0.0, -2.0, 0.0));

        SemiImplicitEuler::step(&mut body, &params);

        // v = -2 - 0.981 = -2.981; p = 0.6 - 0.2981 = 0.3019 < 0.5
        assert_relative_eq!(body.position.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(body.velocity.y, 2.981 * 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_no_bounce_above_ground() {
        let params = WorldParams::gravity_drop();
        let mut body = falling_body(5.0);

        SemiImplicitEuler::step(&mut body, &params);

        assert!(body.position.y > body.radius);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn test_bounce_never_leaves_body_below_radius() {
        let params = WorldParams::gravity_drop();
        let mut body = falling_body(3.0);

        for _ in 0..200 {
            SemiImplicitEuler::step(&mut body, &params);
            assert!(body.position.y >= body.radius - 1e-9);
        }
    }

    #[test]
    fn test_step_all_advances_every_body() {
        let mut world = World::collision_scene(WorldParams::default(), 3, 0.5);
        let before: Vec<f64> = world.bodies().iter().map(|b| b.position.y).collect();

        SemiImplicitEuler::step_all(&mut world);

        for (body, y_before) in world.bodies().iter().zip(before) {
            assert!(body.position.y < y_before);
        }
    }
}
