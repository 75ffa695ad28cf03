use std::fmt;

use crate::{
    vec4, Abs, ConstOne, ConstZero, Epsilon, Mat3, Mat4, Matrix, MinMax, Number, Sqrt, Trig,
    Vector,
};

mod ops;
mod view;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent
/// rotations in 3D space. Nothing in this type enforces unit length; the
/// rotation-related operations assume it, and [`Quat::normalize`] makes it
/// so explicitly.
///
/// Quaternions are represented like a 4-dimensional vector, with the `x`,
/// `y` and `z` fields holding the `i`, `j` and `k` imaginary parts and `w`
/// holding the real part. The fields can be accessed by those names just
/// like on a [`Vector`].
///
/// # Conventions
///
/// - [`Quat::mul`][std::ops::Mul] is the Hamilton product: `a * b` is the
///   rotation that applies `b` first, then `a` (when rotating with
///   [`Quat::rotate`]).
/// - The matrix produced by [`Quat::to_matrix3`] has the rotated basis
///   vectors as its *rows*, so it rotates row vectors multiplied from the
///   left (`v * m == q.rotate(v)`).
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: ConstZero + ConstOne> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is
    /// multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k`
    /// imaginary parts, while the `w` component corresponds to the real
    /// number part of the quaternion.
    #[inline]
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as a 4-dimensional
    /// [`Vector`], imaginary parts first.
    #[inline]
    pub fn to_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Creates a quaternion from its four components.
    #[inline]
    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the imaginary (vector) part.
    #[inline]
    pub fn xyz(self) -> Vector<T, 3>
    where
        T: Copy,
    {
        self.vec.truncate()
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must be of unit length for the result to be a valid rotation.
    pub fn from_axis_angle(axis: Vector<T, 3>, radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Creates a quaternion from Euler angles, applied in the fixed order
    /// X (pitch), then Y (yaw), then Z (roll) — the rotation matrix
    /// `Rz · Ry · Rx`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_euler(0.0, 0.0, TAU / 4.0);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn from_euler(x: T, y: T, z: T) -> Self
    where
        T: Trig + Number,
    {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Creates the shortest-arc rotation that takes the direction of `from`
    /// to the direction of `to`.
    ///
    /// The operands do not need to be normalized, but must both have
    /// non-zero length. For (nearly) opposite directions the rotation axis
    /// is ambiguous; an arbitrary perpendicular axis is used and the result
    /// is a 180° rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let q = Quat::from_arc(Vec3f::X, Vec3f::Y);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn from_arc(from: Vector<T, 3>, to: Vector<T, 3>) -> Self
    where
        T: Number + Sqrt + Epsilon + Abs + PartialOrd,
    {
        let from = from.normalize();
        let to = to.normalize();
        let dot = from.dot(to);

        if T::ONE + dot < T::EPSILON.sqrt() {
            // Nearly opposite: rotate 180° around any perpendicular axis. A
            // 180° rotation quaternion is (axis, 0), no trigonometry needed.
            let helper = match from.furthest_axis() {
                0 => Vector::<T, 3>::X,
                1 => Vector::<T, 3>::Y,
                _ => Vector::<T, 3>::Z,
            };
            let axis = from.cross(helper).normalize();
            return Self::from_components(axis.x, axis.y, axis.z, T::ZERO);
        }

        let axis = from.cross(to);
        Self::from_components(axis.x, axis.y, axis.z, T::ONE + dot).normalize()
    }

    /// Recovers a quaternion from a 3x3 rotation matrix in this crate's
    /// row-vector convention (rows are the rotated basis vectors).
    ///
    /// Uses Shepperd's method: the construction branches on the sign of the
    /// trace and then on the largest diagonal element, so a large divisor is
    /// always available and no catastrophic cancellation occurs.
    ///
    /// The input must actually be a rotation matrix (orthogonal, determinant
    /// 1); anything else produces a meaningless result.
    pub fn from_matrix3(m: Mat3<T>) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let two = T::ONE + T::ONE;
        let four = two * two;
        let trace = m.trace();

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * two; // 4w
            Self::from_components(
                (m[(1, 2)] - m[(2, 1)]) / s,
                (m[(2, 0)] - m[(0, 2)]) / s,
                (m[(0, 1)] - m[(1, 0)]) / s,
                s / four,
            )
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = (T::ONE + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt() * two; // 4x
            Self::from_components(
                s / four,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] - m[(2, 1)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = (T::ONE + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt() * two; // 4y
            Self::from_components(
                (m[(0, 1)] + m[(1, 0)]) / s,
                s / four,
                (m[(1, 2)] + m[(2, 1)]) / s,
                (m[(2, 0)] - m[(0, 2)]) / s,
            )
        } else {
            let s = (T::ONE + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt() * two; // 4z
            Self::from_components(
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                s / four,
                (m[(0, 1)] - m[(1, 0)]) / s,
            )
        }
    }

    /// Recovers a quaternion from the rotation in the upper-left 3x3 block
    /// of a 4x4 matrix.
    ///
    /// See [`Quat::from_matrix3`] for the requirements on that block.
    pub fn from_matrix4(m: Mat4<T>) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        Self::from_matrix3(m.resize())
    }

    /// Converts this quaternion into a 3x3 rotation matrix whose rows are
    /// the rotated basis vectors.
    ///
    /// Multiplying a row vector with the result equals [`Quat::rotate`].
    pub fn to_matrix3(self) -> Mat3<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [T::ONE - two * (y * y + z * z), two * (x * y + w * z), two * (x * z - w * y)],
            [two * (x * y - w * z), T::ONE - two * (x * x + z * z), two * (y * z + w * x)],
            [two * (x * z + w * y), two * (y * z - w * x), T::ONE - two * (x * x + y * y)],
        ]);
        m
    }

    /// Converts this quaternion into a 4x4 affine rotation matrix.
    pub fn to_matrix4(self) -> Mat4<T>
    where
        T: Number,
    {
        let mut m = self.to_matrix3().resize::<4, 4>();
        m[(3, 3)] = T::ONE;
        m
    }

    /// Returns the rotation axis and angle (in radians) this quaternion
    /// encodes.
    ///
    /// The angle lies in `[0, TAU]`. For a (nearly) zero rotation the axis
    /// is ambiguous and the X axis is returned.
    pub fn to_axis_angle(self) -> (Vector<T, 3>, T)
    where
        T: Number + Sqrt + Trig + MinMax + Epsilon + PartialOrd,
    {
        let w = self.w.clamp(-T::ONE, T::ONE);
        let angle = (T::ONE + T::ONE) * w.acos();
        let sin2 = T::ONE - w * w;
        if sin2 < T::EPSILON {
            (Vector::<T, 3>::X, angle)
        } else {
            (self.xyz() / sin2.sqrt(), angle)
        }
    }

    /// Creates a quaternion from spherical direction angles: first a
    /// rotation by `elevation` around X, then by `azimuth` around Y.
    ///
    /// Inverse of [`Quat::to_spherical`] for elevations within
    /// `(-TAU/4, TAU/4)` and azimuths within `(-TAU/2, TAU/2]`.
    pub fn from_spherical(azimuth: T, elevation: T) -> Self
    where
        T: Trig + Number,
    {
        Self::from_rotation_y(azimuth) * Self::from_rotation_x(elevation)
    }

    /// Returns the spherical direction angles `(azimuth, elevation)` of the
    /// rotated +Z axis.
    pub fn to_spherical(self) -> (T, T)
    where
        T: Trig + Number + MinMax,
    {
        let forward = self.rotate(Vector::<T, 3>::Z);
        let azimuth = forward.x.atan2(forward.z);
        let elevation = -forward.y.clamp(-T::ONE, T::ONE).asin();
        (azimuth, elevation)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with
    /// this quaternion will scale the vector in addition to rotating it.
    /// When using quaternions to model rotations, it is advisable to ensure
    /// that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals
    /// one).
    ///
    /// A zero-length `self` violates this method's contract. The contract is
    /// checked in debug builds only; release builds divide through anyway
    /// and produce NaN components.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        debug_assert!(
            self.vec.length2() != T::ZERO,
            "attempt to normalize a zero-length quaternion"
        );
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the 4-dimensional dot product of the components.
    ///
    /// For unit quaternions this is the cosine of half the rotation angle
    /// between them; a negative value means `other` lies on the opposite
    /// hemisphere and `-other` encodes the same rotation closer to `self`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate, which encodes the opposite rotation (for unit
    /// quaternions).
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_components(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the multiplicative inverse: `q * q.inverse()` is the
    /// identity.
    ///
    /// For unit quaternions, prefer the equivalent and cheaper
    /// [`Quat::conjugate`].
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        let inv_len2 = T::ONE / self.length2();
        let c = self.conjugate();
        Self {
            vec: c.vec * inv_len2,
        }
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Uses the expanded double-cross form
    /// `v + 2 * (w * (q_v × v) + q_v × (q_v × v))` instead of converting to
    /// a matrix or evaluating the `q v q*` sandwich product directly.
    ///
    /// `self` must be of unit length for the result to be a pure rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_rotation_z(TAU / 4.0);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate(self, v: Vector<T, 3>) -> Vector<T, 3>
    where
        T: Number,
    {
        let u = self.xyz();
        let two = T::ONE + T::ONE;
        v + (u.cross(v) * self.w + u.cross(u.cross(v))) * two
    }

    /// Linearly interpolates the components and normalizes the result.
    ///
    /// This is a cheap approximation of [`Quat::slerp`] that is adequate
    /// when the operands are close together; unlike `slerp` it does not
    /// pick the shorter of the two arcs.
    pub fn lerp_and_normalize(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.lerp(other.vec, t),
        }
        .normalize()
    }

    /// Spherically interpolates between `self` (at `t == 0`) and `other`
    /// (at `t == 1`), along the shorter of the two arcs.
    ///
    /// Both operands must be of unit length. When the operands (almost)
    /// coincide, the sine-ratio weights degenerate to 0/0; interpolation
    /// falls back to [`Quat::lerp_and_normalize`], which is exact in that
    /// limit.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt + Trig + Epsilon + PartialOrd,
    {
        let mut other = other;
        let mut dot = self.dot(other);
        // The two hemispheres encode the same rotations; interpolating
        // towards the nearer representation takes the shorter arc.
        if dot < T::ZERO {
            other = -other;
            dot = -dot;
        }

        if dot > T::ONE - T::EPSILON {
            return self.lerp_and_normalize(other, t);
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self {
            vec: self.vec * a + other.vec * b,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vec.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec3, Identity, Vec3f};

    use super::*;

    fn assert_same_rotation(a: Quat<f32>, b: Quat<f32>) {
        // q and -q encode the same rotation.
        let dot = a.dot(b);
        assert_approx_eq!(dot.abs(), 1.0, "{a:?} vs {b:?}").abs(1e-5);
    }

    #[test]
    fn identity() {
        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
        assert_eq!(Quatf::from(Identity).to_vec(), Quatf::IDENTITY.to_vec());
        assert_eq!(Quat::IDENTITY * Quat::from_rotation_x(1.0f32), Quat::from_rotation_x(1.0));
        assert_eq!(Identity * Quat::from_rotation_x(1.0f32), Quat::from_rotation_x(1.0));
        assert_eq!(Quat::from_rotation_x(1.0f32) * Identity, Quat::from_rotation_x(1.0));
    }

    #[test]
    fn fields() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.y, 2.0);
        assert_eq!(q.z, 3.0);
        assert_eq!(q.w, 4.0);
        assert_eq!(q.xyz(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn axis_rotations() {
        let quarter = TAU / 4.0;
        assert_approx_eq!(Quat::from_rotation_z(quarter).rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
        assert_approx_eq!(Quat::from_rotation_x(quarter).rotate(Vec3f::Y), Vec3f::Z).abs(1e-6);
        assert_approx_eq!(Quat::from_rotation_y(quarter).rotate(Vec3f::Z), Vec3f::X).abs(1e-6);

        // A full turn is the identity rotation (as -q).
        let v = vec3(0.3, -0.4, 0.5);
        assert_approx_eq!(Quat::from_rotation_y(TAU).rotate(v), v).abs(1e-5);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = vec3(1.0, 2.0, -0.5).normalize();
        let q = Quat::from_axis_angle(axis, 1.2);
        let (axis2, angle2) = q.to_axis_angle();
        assert_approx_eq!(axis2, axis).abs(1e-5);
        assert_approx_eq!(angle2, 1.2).abs(1e-5);

        let (_, angle) = Quatf::IDENTITY.to_axis_angle();
        assert_approx_eq!(angle, 0.0);
    }

    #[test]
    fn euler_order() {
        let (x, y, z) = (0.3, -0.7, 1.1);
        let q = Quat::from_euler(x, y, z);
        // X is applied first, then Y, then Z.
        let qx = Quat::from_rotation_x(x);
        let qy = Quat::from_rotation_y(y);
        let qz = Quat::from_rotation_z(z);
        let v = vec3(0.2f32, 0.5, -0.8);
        assert_approx_eq!(q.rotate(v), qz.rotate(qy.rotate(qx.rotate(v)))).abs(1e-6);
    }

    #[test]
    fn mul_composes_rotations() {
        let a = Quat::from_rotation_x(0.8f32);
        let b = Quat::from_rotation_z(-0.6);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v))).abs(1e-5);
    }

    #[test]
    fn rotate_matches_matrix() {
        let q = Quat::from_euler(0.4f32, 1.3, -0.2);
        let v = vec3(1.0, -2.0, 0.5);
        assert_approx_eq!(v * q.to_matrix3(), q.rotate(v)).abs(1e-6);

        let m4 = q.to_matrix4();
        assert_eq!(m4[(3, 3)], 1.0);
        assert_eq!(m4.row(3), crate::vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn matrix_round_trip() {
        // One quaternion per branch of Shepperd's method.
        let cases = [
            Quat::from_rotation_z(0.3),                    // positive trace
            Quat::from_rotation_x(TAU / 2.0 - 0.01),       // m00 dominant
            Quat::from_rotation_y(TAU / 2.0 - 0.01),       // m11 dominant
            Quat::from_rotation_z(TAU / 2.0 - 0.01),       // m22 dominant
            Quat::from_euler(2.9, 0.1, -3.0),
            Quat::from_euler(-1.5, 1.5, 0.0),
        ];
        for q in cases {
            assert_same_rotation(Quat::from_matrix3(q.to_matrix3()), q);
            assert_same_rotation(Quat::from_matrix4(q.to_matrix4()), q);
        }
    }

    #[test]
    fn arc() {
        let q = Quat::from_arc(Vec3f::X, Vec3f::Y);
        assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);

        // Unnormalized operands are fine.
        let q = Quat::from_arc(vec3(0.0, 3.0, 0.0), vec3(0.0, 0.0, 0.2));
        assert_approx_eq!(q.rotate(Vec3f::Y), Vec3f::Z).abs(1e-6);

        // Opposite directions fall back to some perpendicular axis.
        let q = Quat::from_arc(Vec3f::X, -Vec3f::X);
        assert_approx_eq!(q.rotate(Vec3f::X), -Vec3f::X).abs(1e-6);
        assert_approx_eq!(q.length(), 1.0).abs(1e-6);
    }

    #[test]
    fn spherical_round_trip() {
        for (azimuth, elevation) in [(0.0f32, 0.0f32), (1.0, 0.5), (-2.0, -1.0), (3.0, 1.2)] {
            let q = Quat::from_spherical(azimuth, elevation);
            let (a2, e2) = q.to_spherical();
            assert_approx_eq!(a2, azimuth).abs(1e-5);
            assert_approx_eq!(e2, elevation).abs(1e-5);
        }
    }

    #[test]
    fn normalize() {
        let q = Quat::from_components(0.0, 0.0, 3.0, 4.0).normalize();
        assert_approx_eq!(q.length(), 1.0);
        assert_eq!(q.to_vec(), crate::vec4(0.0, 0.0, 0.6, 0.8));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length quaternion")]
    fn normalize_zero() {
        Quat::from_components(0.0f32, 0.0, 0.0, 0.0).normalize();
    }

    #[test]
    fn conjugate_inverts_rotation() {
        let q = Quat::from_euler(0.5f32, -0.3, 0.9);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(q.conjugate().rotate(q.rotate(v)), v).abs(1e-5);
        assert_approx_eq!(q.inverse().rotate(q.rotate(v)), v).abs(1e-5);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::from_rotation_x(0.4f32);
        let b = Quat::from_rotation_y(1.8);
        assert_approx_eq!(a.slerp(b, 0.0).to_vec(), a.to_vec()).abs(1e-6);
        assert_approx_eq!(a.slerp(b, 1.0).to_vec(), b.to_vec()).abs(1e-6);

        // Interpolating a quaternion with itself is that quaternion for
        // every t.
        assert_approx_eq!(a.slerp(a, 0.37).to_vec(), a.to_vec()).abs(1e-6);

        // The interpolate stays unit length.
        assert_approx_eq!(a.slerp(b, 0.5).length(), 1.0).abs(1e-6);
    }

    #[test]
    fn slerp_halfway_between_90_degree_rotations() {
        // Two rotations 90° apart; the halfway point must rotate a test
        // vector by exactly 45° relative to either endpoint.
        let a = Quatf::IDENTITY;
        let b = Quat::from_rotation_z(TAU / 4.0);
        let half = a.slerp(b, 0.5);

        let eighth = TAU / 8.0;
        assert_approx_eq!(half.rotate(Vec3f::X), vec3(eighth.cos(), eighth.sin(), 0.0)).abs(1e-6);
        assert_approx_eq!(
            half.rotate(Vec3f::X).abs_angle_to(a.rotate(Vec3f::X)),
            eighth
        )
        .abs(1e-5);
        assert_approx_eq!(
            half.rotate(Vec3f::X).abs_angle_to(b.rotate(Vec3f::X)),
            eighth
        )
        .abs(1e-5);
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let a = Quat::from_rotation_z(0.2f32);
        let b = Quat::from_rotation_z(0.4);
        // -b is the same rotation on the far hemisphere; slerp must treat it
        // like b instead of swinging the long way around.
        let direct = a.slerp(b, 0.5);
        let flipped = a.slerp(-b, 0.5);
        let v = vec3(1.0f32, 0.0, 0.0);
        assert_approx_eq!(direct.rotate(v), flipped.rotate(v)).abs(1e-5);
    }

    #[test]
    fn nlerp_small_angles() {
        let a = Quat::from_rotation_y(0.10f32);
        let b = Quat::from_rotation_y(0.12);
        let n = a.lerp_and_normalize(b, 0.5);
        let s = a.slerp(b, 0.5);
        assert_approx_eq!(n.to_vec(), s.to_vec()).abs(1e-5);
    }
}
