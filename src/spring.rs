//! Pairwise spring constraints between particles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A damped spring between two particles.
///
/// Endpoints are indices into the caller's position/velocity sequences.
/// Springs are plain values and immutable for the lifetime of a run; the
/// spring table is only read during a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub p0: usize,
    pub p1: usize,
    pub rest_length: F,
}

impl<F: Float> Spring<F> {
    /// Create a spring without validating the endpoint indices.
    pub fn new(p0: usize, p1: usize, rest_length: F) -> Self {
        Spring { p0, p1, rest_length }
    }

    /// Create a spring, validating endpoints against the particle count.
    pub fn checked(
        p0: usize,
        p1: usize,
        rest_length: F,
        particle_count: usize,
    ) -> Result<Self, PhysicsError> {
        if p0 >= particle_count {
            return Err(PhysicsError::ParticleOutOfBounds { index: p0, count: particle_count });
        }
        if p1 >= particle_count {
            return Err(PhysicsError::ParticleOutOfBounds { index: p1, count: particle_count });
        }
        if p0 == p1 {
            return Err(PhysicsError::DegenerateSpring { index: p0 });
        }
        if !(rest_length.is_finite() && rest_length >= F::zero()) {
            return Err(PhysicsError::InvalidRestLength);
        }
        Ok(Spring { p0, p1, rest_length })
    }

    /// Create a spring whose rest length is the current distance between
    /// its endpoints.
    pub fn from_positions(p0: usize, p1: usize, positions: &[Vec3<F>]) -> Self {
        let rest_length = positions[p0].distance(positions[p1]);
        Spring { p0, p1, rest_length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhysicsError;

    #[test]
    fn checked_rejects_out_of_range_endpoint() {
        let err = Spring::checked(0, 5, 1.0f32, 3).unwrap_err();
        assert_eq!(err, PhysicsError::ParticleOutOfBounds { index: 5, count: 3 });
    }

    #[test]
    fn checked_rejects_self_loop() {
        let err = Spring::checked(2, 2, 1.0f32, 3).unwrap_err();
        assert_eq!(err, PhysicsError::DegenerateSpring { index: 2 });
    }

    #[test]
    fn checked_rejects_negative_rest_length() {
        let err = Spring::checked(0, 1, -1.0f32, 2).unwrap_err();
        assert_eq!(err, PhysicsError::InvalidRestLength);
    }

    #[test]
    fn from_positions_captures_separation() {
        let positions = [Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0)];
        let s = Spring::from_positions(0, 1, &positions);
        assert!((s.rest_length - 5.0).abs() < 1e-6);
    }
}
