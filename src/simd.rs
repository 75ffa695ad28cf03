//! A 4-lane float vector backed by a 128-bit SIMD register.
//!
//! [`SimdVec4f`] mirrors the interface of [`Vec4f`][crate::Vec4f] but keeps
//! its lanes in a hardware vector register. On x86_64 it wraps an `__m128`
//! and every operation is a short sequence of SSE2 instructions (SSE2 is
//! part of the x86_64 baseline, so no feature detection is involved); on
//! other architectures a scalar implementation with the identical interface
//! is substituted.
//!
//! Which of the two vector types to use is a call-site decision made by
//! naming the type; nothing dispatches at runtime.
//!
//! # Equivalence to the generic path
//!
//! For every operation [`SimdVec4f`] shares with `Vec4f`, the result is
//! bit-identical to the generic implementation for identical inputs,
//! including NaN, infinities and signed zeros. Concretely:
//!
//! - `min`/`max` reproduce the NaN-ignoring [`f32::min`]/[`f32::max`]
//!   semantics, not the raw `minps`/`maxps` ones. (The sign of a zero
//!   result for a `-0.0`/`+0.0` tie is the one place equivalence is only
//!   up to `==`: the scalar operations leave it unspecified.)
//! - `sum`, `dot`, `min_element` and `max_element` reduce their lanes
//!   strictly left to right, matching the generic fold order, so float
//!   rounding cannot diverge between the two paths.
//! - `cross` performs exactly the per-component multiplies and subtraction
//!   of the generic formula, only gathered via lane shuffles.
//!
//! # Rounding operations
//!
//! `floor`, `ceil`, `round`, `trunc` and `fract` exist only on this type
//! (they map to hardware conversions). `round` rounds halfway cases to the
//! nearest even value, which is the SSE default rounding mode; `fract` is
//! defined as `x - floor(x)` and therefore lands in `[0, 1)` for finite
//! input. NaN and infinity lanes propagate per IEEE 754 through the whole
//! family.

use std::fmt;

use crate::{approx::ApproxEq, Vec4f};

#[cfg(target_arch = "x86_64")]
mod sse2;
#[cfg(target_arch = "x86_64")]
pub use sse2::SimdVec4f;

#[cfg(not(target_arch = "x86_64"))]
mod scalar;
#[cfg(not(target_arch = "x86_64"))]
pub use scalar::SimdVec4f;

impl From<[f32; 4]> for SimdVec4f {
    #[inline]
    fn from(value: [f32; 4]) -> Self {
        Self::from_array(value)
    }
}

impl From<SimdVec4f> for [f32; 4] {
    #[inline]
    fn from(value: SimdVec4f) -> Self {
        value.to_array()
    }
}

impl From<Vec4f> for SimdVec4f {
    #[inline]
    fn from(value: Vec4f) -> Self {
        Self::from_array(value.into_array())
    }
}

impl From<SimdVec4f> for Vec4f {
    #[inline]
    fn from(value: SimdVec4f) -> Self {
        value.to_array().into()
    }
}

impl fmt::Debug for SimdVec4f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Vec4f::from(*self).fmt(f)
    }
}

impl fmt::Display for SimdVec4f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Vec4f::from(*self).fmt(f)
    }
}

impl ApproxEq for SimdVec4f {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        self.to_array().abs_diff_eq(&other.to_array(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        self.to_array().rel_diff_eq(&other.to_array(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.to_array().ulps_diff_eq(&other.to_array(), ulps_tolerance)
    }
}
