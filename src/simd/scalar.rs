//! Portable implementation of [`SimdVec4f`] for architectures without an
//! SSE2 register type.
//!
//! Semantically identical to the SSE2 implementation lane for lane; the
//! compiler is free to autovectorize it.

use std::{
    mem,
    ops::{
        Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use crate::vector::view::XYZW;

/// A 4-lane float vector.
///
/// See the [module documentation][super] for the equivalence guarantees
/// against [`Vec4f`][crate::Vec4f].
#[derive(Clone, Copy)]
#[repr(C, align(16))]
pub struct SimdVec4f([f32; 4]);

impl SimdVec4f {
    /// Creates a vector from its four lanes.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// Creates a vector with each lane initialized to `elem`.
    #[inline]
    pub fn splat(elem: f32) -> Self {
        Self([elem; 4])
    }

    /// The all-zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self([0.0; 4])
    }

    /// Loads the lanes from an array, `x` first.
    #[inline]
    pub fn from_array(elems: [f32; 4]) -> Self {
        Self(elems)
    }

    /// Stores the lanes to an array, `x` first.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    fn map2(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        Self([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)])
    }

    /// Computes the dot product between `self` and `other`, accumulating the
    /// lane products left to right.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        ((a0 * b0 + a1 * b1) + a2 * b2) + a3 * b3
    }

    /// Adds up all lanes, left to right.
    #[inline]
    pub fn sum(self) -> f32 {
        let [x, y, z, w] = self.0;
        ((x + y) + z) + w
    }

    /// Returns the smallest lane, NaN lanes ignored.
    #[inline]
    pub fn min_element(self) -> f32 {
        let [x, y, z, w] = self.0;
        x.min(y).min(z).min(w)
    }

    /// Returns the largest lane, NaN lanes ignored.
    #[inline]
    pub fn max_element(self) -> f32 {
        let [x, y, z, w] = self.0;
        x.max(y).max(z).max(w)
    }

    /// Computes the cross product of the `x`/`y`/`z` lanes of `self` and
    /// `other`; the result's `w` lane is 0 for finite `w` inputs.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3, aw] = self.0;
        let [b1, b2, b3, bw] = other.0;

        #[rustfmt::skip]
        let cross = Self([
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
            aw * bw - aw * bw,
        ]);
        cross
    }

    /// Lane-wise [`f32::min`].
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.map2(other, f32::min)
    }

    /// Lane-wise [`f32::max`].
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.map2(other, f32::max)
    }

    /// Lane-wise clamp between `min` and `max`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Lane-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.map(f32::abs))
    }

    /// Lane-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self(self.0.map(f32::sqrt))
    }

    /// Returns the squared length of this vector.
    #[inline]
    pub fn length2(self) -> f32 {
        self.dot(self)
    }

    /// Returns the length of this vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Linearly interpolates between `self` (at `t == 0`) and `other` (at
    /// `t == 1`).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Lane-wise largest integer at most equal to the lane value.
    #[inline]
    pub fn floor(self) -> Self {
        Self(self.0.map(f32::floor))
    }

    /// Lane-wise smallest integer at least equal to the lane value.
    #[inline]
    pub fn ceil(self) -> Self {
        Self(self.0.map(f32::ceil))
    }

    /// Lane-wise round to nearest integer; halfway cases round to the even
    /// neighbor.
    #[inline]
    pub fn round(self) -> Self {
        Self(self.0.map(f32::round_ties_even))
    }

    /// Lane-wise truncation toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self(self.0.map(f32::trunc))
    }

    /// Lane-wise fractional part, defined as `x - floor(x)`.
    ///
    /// The result lies in `[0, 1)` for finite lanes; infinity lanes yield
    /// NaN.
    #[inline]
    pub fn fract(self) -> Self {
        self - self.floor()
    }
}

impl Deref for SimdVec4f {
    type Target = XYZW<f32>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: four contiguous `f32` lanes, matching the `repr(C)` view.
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for SimdVec4f {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl PartialEq for SimdVec4f {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Lane-wise addition.
impl Add for SimdVec4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a + b)
    }
}

impl AddAssign for SimdVec4f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Lane-wise subtraction.
impl Sub for SimdVec4f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a - b)
    }
}

impl SubAssign for SimdVec4f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Lane-wise multiplication.
impl Mul for SimdVec4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a * b)
    }
}

impl MulAssign for SimdVec4f {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f32> for SimdVec4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|a| a * rhs))
    }
}

impl MulAssign<f32> for SimdVec4f {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Lane-wise division.
impl Div for SimdVec4f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.map2(rhs, |a, b| a / b)
    }
}

/// Vector-Scalar division (scaling).
///
/// A zero divisor violates this operation's contract; it is checked in debug
/// builds only.
impl Div<f32> for SimdVec4f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "vector division by a zero scalar");
        Self(self.0.map(|a| a / rhs))
    }
}

impl DivAssign<f32> for SimdVec4f {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Lane-wise negation.
impl Neg for SimdVec4f {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|a| -a))
    }
}
