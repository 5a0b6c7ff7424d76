//! Mass-spring particle simulation in a box.
//!
//! `springbox` advances a system of point particles connected by damped
//! springs under gravity, confined to an axis-aligned box with
//! restitution-scaled collision response. Each step runs three phases:
//! force accumulation, semi-implicit Euler integration, and boundary
//! collision resolution.
//!
//! # Features
//!
//! - **Damped springs**: Elastic plus axial velocity damping, equal and
//!   opposite on both endpoints
//! - **Semi-implicit Euler**: Velocity first, then position from the
//!   updated velocity, for stability with stiff springs
//! - **Box collision**: Per-axis penetration correction with a tunable
//!   restitution coefficient
//! - **Caller-owned state**: Positions and velocities live in caller
//!   slices, mutated in place each step
//! - **Observable**: Monitor step phases via the [`StepObserver`] trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! Rendering, windowing, and the outer frame loop are external concerns;
//! the core exposes only numeric state.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod spring;
pub mod forces;
pub mod integrator;
pub mod bounds;
pub mod config;
pub mod solver;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Axis, Vec3};
pub use spring::Spring;
pub use bounds::Bounds;
pub use config::SimConfig;
pub use solver::{step, validate_system, Solver};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
