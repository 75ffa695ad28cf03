use std::ops::{Mul, Neg};

use crate::{
    approx::ApproxEq,
    tags::Identity,
    traits::Number,
    ConstOne, ConstZero, Quat,
};

/// The Hamilton product.
///
/// `a * b` composes the rotations so that `(a * b).rotate(v)` equals
/// `a.rotate(b.rotate(v))` (`b` is applied first).
impl<T: Number> Mul for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.to_vec().into_array();
        let [bx, by, bz, bw] = rhs.to_vec().into_array();

        Quat::from_components(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

/// Negates every component.
///
/// For unit quaternions, `-q` encodes the same rotation as `q`.
impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.to_vec())
    }
}

impl<T: PartialEq + Copy> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl<T: ApproxEq + Copy> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.to_vec().abs_diff_eq(&other.to_vec(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.to_vec().rel_diff_eq(&other.to_vec(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.to_vec().ulps_diff_eq(&other.to_vec(), ulps_tolerance)
    }
}

/// Multiplying by [`Identity`] returns the quaternion unmodified.
impl<T> Mul<Identity> for Quat<T> {
    type Output = Quat<T>;

    #[inline]
    fn mul(self, _: Identity) -> Quat<T> {
        self
    }
}

/// Multiplying by [`Identity`] returns the quaternion unmodified.
impl<T> Mul<Quat<T>> for Identity {
    type Output = Quat<T>;

    #[inline]
    fn mul(self, rhs: Quat<T>) -> Quat<T> {
        rhs
    }
}

/// The identity rotation.
impl<T: ConstZero + ConstOne> From<Identity> for Quat<T> {
    #[inline]
    fn from(_: Identity) -> Self {
        Self::IDENTITY
    }
}
