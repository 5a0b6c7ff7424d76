//! Configuration types for the simulation.

use crate::bounds::Bounds;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// Scalar parameters shared by every particle and spring in a run.
///
/// # Builder Pattern
/// ```
/// use springbox::config::SimConfig;
/// use springbox::vec::Vec3;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_stiffness(120.0)
///     .with_damping(0.6)
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_restitution(0.7);
/// ```
#[derive(Clone, Debug)]
pub struct SimConfig<F: Float> {
    /// Spring constant, >= 0. Default: 1.0.
    pub stiffness: F,
    /// Axial velocity-difference damping coefficient, >= 0. Default: 0.0.
    pub damping: F,
    /// Uniform particle mass, > 0. Default: 1.0.
    pub particle_mass: F,
    /// Constant gravitational acceleration. Default: zero.
    pub gravity: Vec3<F>,
    /// Fraction of wall-normal velocity kept on a bounce, expected in
    /// [0, 1]. Out-of-range values are accepted and simply amplify or
    /// over-damp. Default: 1.0.
    pub restitution: F,
    /// Box the particles are confined to. Default: the unit box.
    pub bounds: Bounds<F>,
    /// Number of sub-steps per `step` call. Higher = more stable. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            stiffness: F::one(),
            damping: F::zero(),
            particle_mass: F::one(),
            gravity: Vec3::zero(),
            restitution: F::one(),
            bounds: Bounds::unit(),
            sub_steps: 1,
        }
    }

    /// Set the spring constant.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the uniform particle mass.
    pub fn with_particle_mass(mut self, particle_mass: F) -> Self {
        self.particle_mass = particle_mass;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the restitution coefficient.
    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set the bounding box.
    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Verify the physical parameters are usable.
    ///
    /// Restitution is deliberately not range-checked; out-of-range values
    /// are meaningful (if unphysical) inputs.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.particle_mass.is_finite() && self.particle_mass > F::zero()) {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.stiffness.is_finite() && self.stiffness >= F::zero()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(self.damping.is_finite() && self.damping >= F::zero()) {
            return Err(PhysicsError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
