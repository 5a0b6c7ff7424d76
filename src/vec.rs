//! 3D vector type and axis indexing for physics calculations.

use crate::float::Float;
use core::ops::{Add, Sub, Neg, Mul, Div, Index, IndexMut};

/// One of the three coordinate axes.
///
/// Lets collision code walk the components of a [`Vec3`] in a fixed-size
/// loop instead of naming fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in x/y/z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// 3D vector with pure, non-mutating arithmetic.
///
/// All operations return new values; operands are never modified. Division
/// by zero follows IEEE-754 (infinities or NaN), it does not panic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self {
        Vec3 { x: F::zero(), y: F::zero(), z: F::zero() }
    }

    /// Vector with all components set to the same value.
    pub fn splat(value: F) -> Self {
        Vec3 { x: value, y: value, z: value }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// True if all three components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { self.scale(s) }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;
    fn div(self, s: F) -> Self {
        Vec3 { x: self.x / s, y: self.y / s, z: self.z / s }
    }
}

impl<F: Float> Index<Axis> for Vec3<F> {
    type Output = F;
    fn index(&self, axis: Axis) -> &F {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<F: Float> IndexMut<Axis> for Vec3<F> {
    fn index_mut(&mut self, axis: Axis) -> &mut F {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn dot_orthogonal() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        assert_eq!(i.dot(j), 0.0);
    }

    #[test]
    fn add_sub_inverse() {
        let a = Vec3::new(1.0f64, -2.0, 3.0);
        let b = Vec3::new(0.5f64, 4.0, -1.0);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn scale_and_div() {
        let v = Vec3::new(2.0f32, 4.0, -6.0);
        assert_eq!(v.scale(0.5), Vec3::new(1.0, 2.0, -3.0));
        assert_eq!(v / 2.0, Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn div_by_zero_is_non_finite_not_panic() {
        let v = Vec3::new(1.0f32, -1.0, 0.0);
        let d = v / 0.0;
        assert!(!d.x.is_finite());
        assert!(!d.y.is_finite());
    }

    #[test]
    fn axis_indexing_matches_fields() {
        let mut v = Vec3::new(1.0f32, 2.0, 3.0);
        assert_eq!(v[Axis::X], v.x);
        assert_eq!(v[Axis::Y], v.y);
        assert_eq!(v[Axis::Z], v.z);
        v[Axis::Y] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn axis_all_covers_every_component() {
        let v = Vec3::new(1.0f32, 2.0, 3.0);
        let mut sum = 0.0;
        for axis in Axis::ALL {
            sum += v[axis];
        }
        assert_eq!(sum, 6.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(3.0f32, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
