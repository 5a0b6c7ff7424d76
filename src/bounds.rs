//! Axis-aligned box boundary with restitution-scaled collision response.

use crate::float::Float;
use crate::vec::{Axis, Vec3};

/// An axis-aligned bounding box that particles may not leave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec3<F>,
    pub max: Vec3<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec3<F>, max: Vec3<F>) -> Self {
        Bounds { min, max }
    }

    /// The unit box with corners (-1, -1, -1) and (1, 1, 1).
    pub fn unit() -> Self {
        Bounds {
            min: Vec3::splat(-F::one()),
            max: Vec3::splat(F::one()),
        }
    }

    /// Push penetrating particles back inside the box and reflect their
    /// velocity on the offending axes.
    ///
    /// Each axis is handled independently: the overshoot `h` past a wall is
    /// reflected back into the volume scaled by `restitution`, and the
    /// velocity component on that axis is negated and scaled the same way.
    /// A corner hit (out of bounds on several axes at once) simply resolves
    /// each axis in turn.
    ///
    /// `restitution = 0` leaves the particle on the wall plane with zero
    /// velocity on that axis; `restitution = 1` is a perfectly elastic
    /// bounce. Values outside [0, 1] are not rejected; they amplify or
    /// over-damp the bounce. Stateless: the outcome depends only on the
    /// current position, velocity, and restitution.
    pub fn resolve(
        &self,
        positions: &mut [Vec3<F>],
        velocities: &mut [Vec3<F>],
        restitution: F,
    ) {
        debug_assert_eq!(positions.len(), velocities.len());

        for (pos, vel) in positions.iter_mut().zip(velocities.iter_mut()) {
            for axis in Axis::ALL {
                if pos[axis] < self.min[axis] {
                    let h = self.min[axis] - pos[axis];
                    pos[axis] = self.min[axis] + h * restitution;
                    vel[axis] = -restitution * vel[axis];
                } else if pos[axis] > self.max[axis] {
                    let h = pos[axis] - self.max[axis];
                    pos[axis] = self.max[axis] - h * restitution;
                    vel[axis] = -restitution * vel[axis];
                }
            }
        }
    }
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Self::unit()
    }
}
