//! Spring and damping force accumulation.

use crate::float::Float;
use crate::spring::Spring;
use crate::vec::Vec3;

/// Sum spring elastic and damping forces into `out`, one net force per
/// particle. Gravity is not included here; the integrator applies it as a
/// uniform acceleration.
///
/// Every spring is evaluated against the same position/velocity snapshot,
/// so processing order only affects the result up to floating-point
/// rounding.
///
/// # Degenerate springs
///
/// A spring whose endpoints currently coincide has no defined axis. Its
/// contribution is skipped for this step rather than producing a
/// divide-by-zero; the spring resumes acting as soon as the endpoints
/// separate.
///
/// # Panics
///
/// In debug builds, panics if a spring endpoint is out of range. Checked
/// spring construction ([`Spring::checked`]) makes this unreachable.
pub fn accumulate<F: Float>(
    positions: &[Vec3<F>],
    velocities: &[Vec3<F>],
    springs: &[Spring<F>],
    stiffness: F,
    damping: F,
    out: &mut [Vec3<F>],
) {
    for f in out.iter_mut() {
        *f = Vec3::zero();
    }

    for spring in springs {
        debug_assert!(
            spring.p0 < positions.len() && spring.p1 < positions.len(),
            "spring endpoint out of range"
        );

        let delta = positions[spring.p1] - positions[spring.p0];
        let length = delta.length();
        if length == F::zero() {
            continue;
        }
        let dir = delta / length;

        // Elastic term, positive when stretched: pulls p0 toward p1.
        let elastic = dir.scale(stiffness * (length - spring.rest_length));

        // Damping along the spring axis only.
        let rel_vel = velocities[spring.p1] - velocities[spring.p0];
        let axial = dir.scale(damping * rel_vel.dot(dir));

        let force = elastic + axial;
        out[spring.p0] = out[spring.p0] + force;
        out[spring.p1] = out[spring.p1] - force;
    }
}
