//! Error types for physics operations.

use core::fmt;

/// Errors that can occur when building or validating simulation inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Particle mass must be positive and finite.
    InvalidMass,
    /// Stiffness must be non-negative and finite.
    InvalidStiffness,
    /// Damping coefficient must be non-negative and finite.
    InvalidDamping,
    /// Rest length must be non-negative and finite.
    InvalidRestLength,
    /// Spring endpoint index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Spring connects a particle to itself.
    DegenerateSpring { index: usize },
    /// Position and velocity sequences have different lengths.
    MismatchedLengths { positions: usize, velocities: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative and finite"),
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative and finite"),
            PhysicsError::InvalidRestLength => write!(f, "rest length must be non-negative and finite"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::DegenerateSpring { index } => {
                write!(f, "spring connects particle {} to itself", index)
            }
            PhysicsError::MismatchedLengths { positions, velocities } => {
                write!(f, "{} positions but {} velocities", positions, velocities)
            }
        }
    }
}
