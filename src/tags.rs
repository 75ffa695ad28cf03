//! Zero-sized tags for algebraically special operands.
//!
//! [`Zero`], [`Identity`] and [`Unit`] stand in for the additive identity,
//! the multiplicative identity and the one-hot unit vectors. Because the
//! tags carry their meaning in the type, arithmetic against them needs no
//! work at all: `v + Zero` hands back `v` untouched, `Zero * v` produces
//! [`Zero`] without reading `v`, and `Identity * v` is `v`. Every vector,
//! matrix and quaternion in this crate can also be *constructed* from the
//! matching tag, which produces the canonical value without going through
//! element-by-element initialization logic.
//!
//! ```
//! # use lucent_linalg::*;
//! let v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(v + Zero, v);
//! assert_eq!(Identity * v, v);
//!
//! let x_axis = Vec3f::from(Unit::<0>);
//! assert_eq!(x_axis, Vec3f::X);
//! ```

use std::ops::{Add, Mul, Sub};

use crate::{ConstOne, ConstZero};

/// The additive identity, as a value.
///
/// Converts to the *0* of any scalar type, and constructs all-zero vectors
/// and matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zero;

/// The multiplicative identity, as a value.
///
/// Converts to the *1* of any scalar type, and constructs identity matrices
/// and quaternions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

/// The one-hot unit vector along axis `I`, as a value.
///
/// Converting to a [`Vector`][crate::Vector] with fewer than `I + 1` lanes
/// is rejected at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unit<const I: usize>;

macro_rules! scalar_tag_ops {
    ($($t:ty),+) => {
        $(
            impl From<Zero> for $t {
                #[inline]
                fn from(_: Zero) -> $t {
                    <$t>::ZERO
                }
            }

            impl From<Identity> for $t {
                #[inline]
                fn from(_: Identity) -> $t {
                    <$t>::ONE
                }
            }

            impl Add<Zero> for $t {
                type Output = $t;

                #[inline]
                fn add(self, _: Zero) -> $t {
                    self
                }
            }

            impl Add<$t> for Zero {
                type Output = $t;

                #[inline]
                fn add(self, rhs: $t) -> $t {
                    rhs
                }
            }

            impl Sub<Zero> for $t {
                type Output = $t;

                #[inline]
                fn sub(self, _: Zero) -> $t {
                    self
                }
            }

            impl Mul<Zero> for $t {
                type Output = Zero;

                #[inline]
                fn mul(self, _: Zero) -> Zero {
                    Zero
                }
            }

            impl Mul<$t> for Zero {
                type Output = Zero;

                #[inline]
                fn mul(self, _: $t) -> Zero {
                    Zero
                }
            }

            impl Mul<Identity> for $t {
                type Output = $t;

                #[inline]
                fn mul(self, _: Identity) -> $t {
                    self
                }
            }

            impl Mul<$t> for Identity {
                type Output = $t;

                #[inline]
                fn mul(self, rhs: $t) -> $t {
                    rhs
                }
            }
        )+
    };
}
scalar_tag_ops!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
