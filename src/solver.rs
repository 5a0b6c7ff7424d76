//! The simulation step: force accumulation, integration, collision response.

use crate::config::SimConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::forces;
use crate::integrator;
use crate::observer::StepObserver;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Check a whole system setup before the first step.
///
/// The step itself asserts on slice lengths and treats bad spring indices
/// as programmer error; this gives callers a recoverable way to vet input
/// assembled at runtime once, up front.
pub fn validate_system<F: Float>(
    positions: &[Vec3<F>],
    velocities: &[Vec3<F>],
    springs: &[Spring<F>],
    config: &SimConfig<F>,
) -> Result<(), PhysicsError> {
    if positions.len() != velocities.len() {
        return Err(PhysicsError::MismatchedLengths {
            positions: positions.len(),
            velocities: velocities.len(),
        });
    }
    for s in springs {
        Spring::checked(s.p0, s.p1, s.rest_length, positions.len())?;
    }
    config.validate()
}

/// Advance the particle system by one step of size `dt`.
///
/// The three phases run in order against caller-owned state: spring forces
/// are summed into `forces_scratch`, velocities then positions are
/// integrated semi-implicitly, and box penetrations are corrected with
/// restitution. Exactly one state transition per call; the caller drives
/// repeated steps.
///
/// `forces_scratch` is purely step-local storage; its contents on entry are
/// ignored and its contents on return are meaningless.
///
/// Not safe for concurrent calls over the same slices; a simulation is a
/// single logical timeline.
///
/// # Panics
///
/// Panics if the three slices have mismatching lengths. Non-finite inputs
/// are not sanitized; they propagate through the arithmetic as usual.
pub fn step<F: Float>(
    dt: F,
    positions: &mut [Vec3<F>],
    velocities: &mut [Vec3<F>],
    springs: &[Spring<F>],
    config: &SimConfig<F>,
    forces_scratch: &mut [Vec3<F>],
) {
    assert_eq!(
        positions.len(),
        velocities.len(),
        "positions and velocities must be index-aligned"
    );
    assert_eq!(
        positions.len(),
        forces_scratch.len(),
        "force scratch must cover every particle"
    );

    forces::accumulate(
        positions,
        velocities,
        springs,
        config.stiffness,
        config.damping,
        forces_scratch,
    );
    integrator::integrate(
        positions,
        velocities,
        forces_scratch,
        config.particle_mass,
        config.gravity,
        dt,
    );
    config
        .bounds
        .resolve(positions, velocities, config.restitution);
}

/// Reusable stepping driver owning the force scratch buffer.
///
/// [`step`] needs a per-particle force accumulator; `Solver` keeps one
/// around between calls so repeated stepping does not allocate. It also
/// applies the configured sub-step count, running the pipeline `sub_steps`
/// times at `dt / sub_steps` per call.
pub struct Solver<F: Float> {
    config: SimConfig<F>,
    forces: AllocVec<Vec3<F>>,
}

impl<F: Float> Solver<F> {
    pub fn new(config: SimConfig<F>) -> Self {
        Solver {
            config,
            forces: AllocVec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig<F> {
        &mut self.config
    }

    /// Advance the system by `dt`, split across the configured sub-steps.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        positions: &mut [Vec3<F>],
        velocities: &mut [Vec3<F>],
        springs: &[Spring<F>],
        observer: &mut O,
    ) {
        assert_eq!(
            positions.len(),
            velocities.len(),
            "positions and velocities must be index-aligned"
        );

        self.forces.resize(positions.len(), Vec3::zero());
        let sub_dt = dt / F::from_f32(self.config.sub_steps as f32);

        for _sub in 0..self.config.sub_steps {
            forces::accumulate(
                positions,
                velocities,
                springs,
                self.config.stiffness,
                self.config.damping,
                &mut self.forces,
            );
            observer.on_forces_accumulated();

            integrator::integrate(
                positions,
                velocities,
                &self.forces,
                self.config.particle_mass,
                self.config.gravity,
                sub_dt,
            );
            observer.on_integrate();

            self.config
                .bounds
                .resolve(positions, velocities, self.config.restitution);
            observer.on_collisions_resolved();
        }

        observer.on_step_complete();
    }
}
