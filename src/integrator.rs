//! Semi-implicit (symplectic) Euler integration.

use crate::float::Float;
use crate::vec::Vec3;

/// Advance every particle by one time step of size `dt`.
///
/// Velocity is updated from the net force first, then position from the
/// *updated* velocity. This ordering is what makes the scheme semi-implicit
/// Euler; using the pre-step velocity for the position update would be
/// explicit Euler, which is noticeably less stable for stiff springs.
///
/// `dt` is assumed positive and small enough for the spring stiffness in
/// play; no stability check or sub-stepping happens here.
pub fn integrate<F: Float>(
    positions: &mut [Vec3<F>],
    velocities: &mut [Vec3<F>],
    forces: &[Vec3<F>],
    particle_mass: F,
    gravity: Vec3<F>,
    dt: F,
) {
    debug_assert_eq!(positions.len(), velocities.len());
    debug_assert_eq!(positions.len(), forces.len());

    for i in 0..positions.len() {
        let acceleration = forces[i] / particle_mass + gravity;
        velocities[i] = velocities[i] + acceleration.scale(dt);
        positions[i] = positions[i] + velocities[i].scale(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_one_step() {
        let mut positions = [Vec3::new(0.0f64, 0.5, 0.0)];
        let mut velocities = [Vec3::zero()];
        let forces = [Vec3::zero()];
        let gravity = Vec3::new(0.0, -9.8, 0.0);
        let dt = 0.01;

        integrate(&mut positions, &mut velocities, &forces, 1.0, gravity, dt);

        // Position moves by the *new* velocity: g * dt * dt.
        assert!((velocities[0].y - (-9.8 * dt)).abs() < 1e-12);
        assert!((positions[0].y - (0.5 - 9.8 * dt * dt)).abs() < 1e-12);
    }

    #[test]
    fn force_scaled_by_inverse_mass() {
        let mut positions = [Vec3::new(0.0f32, 0.0, 0.0)];
        let mut velocities = [Vec3::zero()];
        let forces = [Vec3::new(10.0f32, 0.0, 0.0)];
        let dt = 0.1;

        integrate(&mut positions, &mut velocities, &forces, 2.0, Vec3::zero(), dt);

        assert!((velocities[0].x - 0.5).abs() < 1e-6, "a = F/m = 5, v = 0.5");
    }

    #[test]
    fn coasting_particle_moves_linearly() {
        let mut positions = [Vec3::new(0.0f32, 0.0, 0.0)];
        let mut velocities = [Vec3::new(2.0f32, 0.0, 0.0)];
        let forces = [Vec3::zero()];

        integrate(&mut positions, &mut velocities, &forces, 1.0, Vec3::zero(), 0.25);

        assert_eq!(velocities[0].x, 2.0);
        assert!((positions[0].x - 0.5).abs() < 1e-6);
    }
}
