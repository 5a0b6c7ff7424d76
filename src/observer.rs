//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation step.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after spring forces have been summed for all particles.
    fn on_forces_accumulated(&mut self) {}

    /// Called after velocities and positions have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after boundary collisions have been resolved.
    fn on_collisions_resolved(&mut self) {}

    /// Called when a simulation step (all sub-steps) is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
