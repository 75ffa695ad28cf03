//! Capability traits for the scalar types threaded through every entity in
//! this crate.
//!
//! Each trait captures one small capability (a constant, an operation
//! family) so that vector/matrix/quaternion methods can ask for exactly what
//! they use. [`Number`] bundles the common arithmetic surface; [`Promote`]
//! is the compile-time map that decides the scalar type of mixed-type
//! operations.

use std::ops;

/// Types that have a "zero" value (an additive identity) usable in `const`
/// position.
pub trait ConstZero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity) usable in
/// `const` position.
pub trait ConstOne {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types with representable extremes.
///
/// For floats these are the finite extremes ([`f32::MIN`]/[`f32::MAX`]), not
/// the infinities; the canonical empty [`Bounds`][crate::Bounds] relies on
/// that ordering.
pub trait Bounded {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized + Copy {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` in one call.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types with an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that can be raised to a (same-typed) power.
pub trait Pow {
    fn powf(self, exp: Self) -> Self;
}

/// Float types that expose their machine epsilon.
///
/// Used as the degeneracy threshold where an algorithm (eg. slerp) has to
/// switch to a fallback formula.
pub trait Epsilon {
    const EPSILON: Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and
/// [`f32::max`] functions ([`f64::min`] and [`f64::max`] respectively), so a
/// NaN operand is ignored in favor of the other operand. Built-in integer
/// types implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    ConstZero
    + ConstOne
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: ConstZero
        + ConstOne
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Compile-time scalar promotion: the result type of mixing `Self` with
/// `Rhs` in an arithmetic operation.
///
/// The map is total over the built-in numeric types and follows a single
/// rank chain,
///
/// ```text
/// i8 < u8 < i16 < u16 < i32 < u32 < i64 < u64 < i128 < u128 < f32 < f64
/// ```
///
/// with the higher-ranked operand winning. Taking the maximum over one fixed
/// chain makes promotion commutative and associative, so chained mixed-type
/// expressions resolve to the same scalar type regardless of evaluation
/// order:
///
/// ```
/// # use lucent_linalg::*;
/// # use std::any::TypeId;
/// assert_eq!(
///     TypeId::of::<<<i32 as Promote<u16>>::Output as Promote<f32>>::Output>(),
///     TypeId::of::<<i32 as Promote<<u16 as Promote<f32>>::Output>>::Output>(),
/// );
/// ```
pub trait Promote<Rhs = Self> {
    /// The scalar type mixed-type arithmetic produces.
    type Output;

    /// Converts the left-hand operand to the promoted type.
    fn promote(self) -> Self::Output;
    /// Converts the right-hand operand to the promoted type.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

/// Mixing a type with itself is the identity promotion.
impl<T> Promote for T {
    type Output = T;

    #[inline]
    fn promote(self) -> T {
        self
    }

    #[inline]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! impl_promote {
    ($lo:ty => $($hi:ty),+) => {
        $(
            impl Promote<$hi> for $lo {
                type Output = $hi;

                #[inline]
                fn promote(self) -> $hi {
                    self as $hi
                }

                #[inline]
                fn promote_rhs(rhs: $hi) -> $hi {
                    rhs
                }
            }

            impl Promote<$lo> for $hi {
                type Output = $hi;

                #[inline]
                fn promote(self) -> $hi {
                    self
                }

                #[inline]
                fn promote_rhs(rhs: $lo) -> $hi {
                    rhs as $hi
                }
            }
        )+
    };
}

impl_promote!(i8 => u8, i16, u16, i32, u32, i64, u64, i128, u128, f32, f64);
impl_promote!(u8 => i16, u16, i32, u32, i64, u64, i128, u128, f32, f64);
impl_promote!(i16 => u16, i32, u32, i64, u64, i128, u128, f32, f64);
impl_promote!(u16 => i32, u32, i64, u64, i128, u128, f32, f64);
impl_promote!(i32 => u32, i64, u64, i128, u128, f32, f64);
impl_promote!(u32 => i64, u64, i128, u128, f32, f64);
impl_promote!(i64 => u64, i128, u128, f32, f64);
impl_promote!(u64 => i128, u128, f32, f64);
impl_promote!(i128 => u128, f32, f64);
impl_promote!(u128 => f32, f64);
impl_promote!(f32 => f64);

macro_rules! impl_const_zero_one {
    ($zero:expr, $one:expr; $($types:ty),+) => {
        $(
            impl ConstZero for $types {
                const ZERO: Self = $zero;
            }

            impl ConstOne for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
impl_const_zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
impl_const_zero_one!(0.0, 1.0; f32, f64);

macro_rules! impl_bounded {
    ($($types:ty),+) => {
        $(
            impl Bounded for $types {
                const MIN: Self = <$types>::MIN;
                const MAX: Self = <$types>::MAX;
            }
        )+
    };
}
impl_bounded!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Pow for $types {
                fn powf(self, exp: Self) -> Self {
                    self.powf(exp)
                }
            }

            impl Epsilon for $types {
                const EPSILON: Self = <$types>::EPSILON;
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promoted<A, B>() -> TypeId
    where
        A: Promote<B>,
        A::Output: 'static,
    {
        TypeId::of::<A::Output>()
    }

    #[test]
    fn promote_widens() {
        assert_eq!(promoted::<i32, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<f32, i32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<u8, i16>(), TypeId::of::<i16>());
        assert_eq!(promoted::<i8, u8>(), TypeId::of::<u8>());
        assert_eq!(promoted::<f32, f64>(), TypeId::of::<f64>());
        assert_eq!(promoted::<u64, u64>(), TypeId::of::<u64>());
    }

    #[test]
    fn promote_associative() {
        // Promote<Promote<A, B>, C> == Promote<A, Promote<B, C>> for
        // representative triples.
        macro_rules! assoc {
            ($a:ty, $b:ty, $c:ty) => {
                assert_eq!(
                    promoted::<<$a as Promote<$b>>::Output, $c>(),
                    promoted::<$a, <$b as Promote<$c>>::Output>(),
                );
            };
        }
        assoc!(i8, u16, f32);
        assoc!(u32, i32, i8);
        assoc!(f32, i64, f64);
        assoc!(u8, u8, u8);
        assoc!(i64, u32, i16);
        assoc!(f64, f32, i32);
    }

    #[test]
    fn promote_values() {
        assert_eq!(Promote::<f32>::promote(2i32), 2.0f32);
        assert_eq!(<i32 as Promote<f32>>::promote_rhs(0.5), 0.5f32);
        assert_eq!(Promote::<i16>::promote(-3i8), -3i16);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(1, 2), 1);
        assert_eq!(MinMax::max(1, 2), 2);
        assert_eq!(MinMax::clamp(5, 0, 3), 3);

        // Float min/max ignore a NaN operand.
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
        assert_eq!(MinMax::max(1.0f32, f32::NAN), 1.0);
        assert_eq!(MinMax::min(-0.0f32, f32::INFINITY), -0.0);
    }

    #[test]
    fn sin_cos() {
        let (sin, cos) = 0.0f32.sin_cos();
        assert_eq!(sin, 0.0);
        assert_eq!(cos, 1.0);
    }
}
