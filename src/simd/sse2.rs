//! SSE2 implementation of [`SimdVec4f`].
//!
//! Only SSE2 intrinsics are used, so this compiles and runs on every x86_64
//! CPU without feature detection. The rounding family emulates the SSE4.1
//! `roundps` forms with convert-and-mask sequences; the 2^23 magnitude mask
//! exploits that every float of that magnitude or above is already integral.

use std::{
    mem,
    ops::{
        Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use std::arch::x86_64::*;

use crate::vector::view::XYZW;

/// Floats with a magnitude of 2^23 or above have no fractional digits left.
const INTEGRAL_BOUND: f32 = 8_388_608.0;

/// A 4-lane float vector in a 128-bit SSE register.
///
/// See the [module documentation][super] for the equivalence guarantees
/// against [`Vec4f`][crate::Vec4f].
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct SimdVec4f(__m128);

/// Mask-blend: lanes of `a` where `mask` is set, lanes of `b` elsewhere.
#[inline]
fn select(mask: __m128, a: __m128, b: __m128) -> __m128 {
    unsafe { _mm_or_ps(_mm_and_ps(mask, a), _mm_andnot_ps(mask, b)) }
}

/// Per-lane [`f32::min`]: `minps` picks its second operand when either lane
/// is NaN, so lanes where `b` is NaN are patched back to `a`.
#[inline]
fn lane_min(a: __m128, b: __m128) -> __m128 {
    unsafe {
        let min = _mm_min_ps(a, b);
        let b_nan = _mm_cmpunord_ps(b, b);
        select(b_nan, a, min)
    }
}

/// Per-lane [`f32::max`]; see [`lane_min`].
#[inline]
fn lane_max(a: __m128, b: __m128) -> __m128 {
    unsafe {
        let max = _mm_max_ps(a, b);
        let b_nan = _mm_cmpunord_ps(b, b);
        select(b_nan, a, max)
    }
}

#[inline]
fn sign_bits() -> __m128 {
    unsafe { _mm_set1_ps(-0.0) }
}

/// Round-trips each lane through `i32`, truncating toward zero.
///
/// Lanes outside the `i32` range come back as garbage and must be masked off
/// by the caller.
#[inline]
fn to_int_and_back(v: __m128) -> __m128 {
    unsafe { _mm_cvtepi32_ps(_mm_cvttps_epi32(v)) }
}

/// Lanes with a magnitude below 2^23: the ones that can carry a fractional
/// part. NaN and infinity lanes report false.
#[inline]
fn fractional_candidates(v: __m128) -> __m128 {
    unsafe {
        let magnitude = _mm_andnot_ps(sign_bits(), v);
        _mm_cmplt_ps(magnitude, _mm_set1_ps(INTEGRAL_BOUND))
    }
}

/// Transplants the sign of `src` onto zero results, so that rounding `-0.25`
/// yields `-0.0` like the scalar operations do.
#[inline]
fn restore_zero_sign(rounded: __m128, src: __m128) -> __m128 {
    unsafe { _mm_or_ps(rounded, _mm_and_ps(src, sign_bits())) }
}

impl SimdVec4f {
    /// Creates a vector from its four lanes.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        unsafe { Self(_mm_set_ps(w, z, y, x)) }
    }

    /// Creates a vector with each lane initialized to `elem`.
    #[inline]
    pub fn splat(elem: f32) -> Self {
        unsafe { Self(_mm_set1_ps(elem)) }
    }

    /// The all-zero vector.
    #[inline]
    pub fn zero() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }

    /// Loads the lanes from an array, `x` first.
    #[inline]
    pub fn from_array(elems: [f32; 4]) -> Self {
        unsafe { Self(_mm_loadu_ps(elems.as_ptr())) }
    }

    /// Stores the lanes to an array, `x` first.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        unsafe {
            let mut out = [0.0; 4];
            _mm_storeu_ps(out.as_mut_ptr(), self.0);
            out
        }
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The four lane products are accumulated left to right with scalar adds
    /// on the low lane, matching the generic fold order exactly.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        unsafe {
            let p = _mm_mul_ps(self.0, other.0);
            let s = _mm_add_ss(p, _mm_shuffle_ps::<0b01>(p, p));
            let s = _mm_add_ss(s, _mm_shuffle_ps::<0b10>(p, p));
            let s = _mm_add_ss(s, _mm_shuffle_ps::<0b11>(p, p));
            _mm_cvtss_f32(s)
        }
    }

    /// Adds up all lanes, left to right.
    #[inline]
    pub fn sum(self) -> f32 {
        unsafe {
            let v = self.0;
            let s = _mm_add_ss(v, _mm_shuffle_ps::<0b01>(v, v));
            let s = _mm_add_ss(s, _mm_shuffle_ps::<0b10>(v, v));
            let s = _mm_add_ss(s, _mm_shuffle_ps::<0b11>(v, v));
            _mm_cvtss_f32(s)
        }
    }

    /// Returns the smallest lane, NaN lanes ignored.
    #[inline]
    pub fn min_element(self) -> f32 {
        unsafe {
            let v = self.0;
            let m = lane_min(v, _mm_shuffle_ps::<0b01>(v, v));
            let m = lane_min(m, _mm_shuffle_ps::<0b10>(v, v));
            let m = lane_min(m, _mm_shuffle_ps::<0b11>(v, v));
            _mm_cvtss_f32(m)
        }
    }

    /// Returns the largest lane, NaN lanes ignored.
    #[inline]
    pub fn max_element(self) -> f32 {
        unsafe {
            let v = self.0;
            let m = lane_max(v, _mm_shuffle_ps::<0b01>(v, v));
            let m = lane_max(m, _mm_shuffle_ps::<0b10>(v, v));
            let m = lane_max(m, _mm_shuffle_ps::<0b11>(v, v));
            _mm_cvtss_f32(m)
        }
    }

    /// Computes the cross product of the `x`/`y`/`z` lanes of `self` and
    /// `other`.
    ///
    /// The `w` lane of the result is `a.w * b.w - a.w * b.w`, which is 0 for
    /// finite `w` inputs. Per component this performs exactly the two
    /// multiplies and one subtraction of the generic formula; the operands
    /// are only gathered by `yzx` lane rotations.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        unsafe {
            // (1, 2, 0, 3) lane rotation.
            const YZXW: i32 = 0b11_00_10_01;
            let a_yzx = _mm_shuffle_ps::<YZXW>(self.0, self.0);
            let b_yzx = _mm_shuffle_ps::<YZXW>(other.0, other.0);
            let c = _mm_sub_ps(_mm_mul_ps(self.0, b_yzx), _mm_mul_ps(a_yzx, other.0));
            Self(_mm_shuffle_ps::<YZXW>(c, c))
        }
    }

    /// Lane-wise [`f32::min`].
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(lane_min(self.0, other.0))
    }

    /// Lane-wise [`f32::max`].
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(lane_max(self.0, other.0))
    }

    /// Lane-wise clamp between `min` and `max`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Lane-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        unsafe { Self(_mm_andnot_ps(sign_bits(), self.0)) }
    }

    /// Lane-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_ps(self.0)) }
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
        unsafe {
            let t = to_int_and_back(self.0);
            let overshot = _mm_cmpgt_ps(t, self.0);
            let floored = _mm_sub_ps(t, _mm_and_ps(overshot, _mm_set1_ps(1.0)));
            Self(select(
                fractional_candidates(self.0),
                restore_zero_sign(floored, self.0),
                self.0,
            ))
        }
    }

    /// Lane-wise smallest integer at least equal to the lane value.
    #[inline]
    pub fn ceil(self) -> Self {
        unsafe {
            let t = to_int_and_back(self.0);
            let undershot = _mm_cmplt_ps(t, self.0);
            let ceiled = _mm_add_ps(t, _mm_and_ps(undershot, _mm_set1_ps(1.0)));
            Self(select(
                fractional_candidates(self.0),
                restore_zero_sign(ceiled, self.0),
                self.0,
            ))
        }
    }

    /// Lane-wise round to nearest integer; halfway cases round to the even
    /// neighbor (the hardware default rounding mode).
    #[inline]
    pub fn round(self) -> Self {
        unsafe {
            let r = _mm_cvtepi32_ps(_mm_cvtps_epi32(self.0));
            Self(select(
                fractional_candidates(self.0),
                restore_zero_sign(r, self.0),
                self.0,
            ))
        }
    }

    /// Lane-wise truncation toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        unsafe {
            let t = to_int_and_back(self.0);
            Self(select(
                fractional_candidates(self.0),
                restore_zero_sign(t, self.0),
                self.0,
            ))
        }
    }

    /// Lane-wise fractional part, defined as `x - floor(x)`.
    ///
    /// The result lies in `[0, 1)` for finite lanes; infinity lanes yield
    /// NaN.
    #[inline]
    pub fn fract(self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, self.floor().0)) }
    }
}

impl Deref for SimdVec4f {
    type Target = XYZW<f32>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `__m128` is 16 bytes of four `f32` lanes in memory order,
        // matching the `repr(C)` view struct.
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
        unsafe { _mm_movemask_ps(_mm_cmpeq_ps(self.0, other.0)) == 0b1111 }
    }
}

/// Lane-wise addition.
impl Add for SimdVec4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
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
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
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
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
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
        unsafe { Self(_mm_mul_ps(self.0, _mm_set1_ps(rhs))) }
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
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
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
        unsafe { Self(_mm_div_ps(self.0, _mm_set1_ps(rhs))) }
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
        unsafe { Self(_mm_xor_ps(self.0, sign_bits())) }
    }
}
