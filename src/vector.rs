use std::{array, fmt};

use crate::{
    traits::{Number, Promote, Sqrt},
    Abs, Bounded, ConstOne, ConstZero, Mat2, MinMax, Pow, Trig,
};

mod ops;
pub(crate) mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the
///   index of each element.
/// - [`Vector::from_slice`] copies up to `N` leading elements from a slice
///   and zero-fills the rest.
/// - Vectors can be created from arrays using their [`From`] implementation,
///   and from the [`Zero`][crate::Zero] and [`Unit`][crate::Unit] tags.
/// - The [`Default`] implementation of [`Vector`] initializes each element
///   with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` can be used to obtain unit vectors pointing
///   in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields
///   `x`, `y`, `z`, or `w`.
///   - Aliases `r`, `g`, `b`, and `a` are also provided, as well as aliases
///     `w` and `h` for 2-dimensional vectors.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays,
///   with the same out-of-bounds panic behavior.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying
///   elements as a slice or array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the
///   same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`]
///   allow the same operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow
///   safe transmutation when the element type `T` also allows this. The
///   elements are stored contiguously without padding, so a `Vec3f` or
///   `Vec4f` can be handed to a GPU as a raw vertex attribute.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: ConstZero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][ConstZero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Bounded, const N: usize> Vector<T, N> {
    /// A vector with each element set to the smallest representable value.
    pub const MIN: Self = Self([T::MIN; N]);
    /// A vector with each element set to the largest representable value.
    pub const MAX: Self = Self([T::MAX; N]);
}

impl<T: ConstZero + ConstOne> Vector<T, 1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE]);
}

impl<T: ConstZero + ConstOne> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: ConstZero + ConstOne> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: ConstZero + ConstOne> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from the leading elements of a slice, zero-filling
    /// any remaining elements.
    ///
    /// A slice with more than `N` elements violates this method's contract;
    /// the excess length is checked in debug builds only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = Vec4f::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v, vec4(1.0, 2.0, 0.0, 0.0));
    /// ```
    pub fn from_slice(elems: &[T]) -> Self
    where
        T: ConstZero + Copy,
    {
        debug_assert!(
            elems.len() <= N,
            "initializer with {} elements for a {}-element vector",
            elems.len(),
            N,
        );
        Self::from_fn(|i| elems.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Converts each element to another element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec3(1u8, 2, 3).cast::<f32>();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Into<U>,
    {
        self.map(T::into)
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length
    /// `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of
    /// length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns a [`Vector`] that borrows each element of `self`.
    ///
    /// *Note*: [`Vector`] also implements [`AsRef`]. This method will
    /// typically be preferred over those impls. Use fully-qualified syntax
    /// to invoke the trait methods if needed.
    #[inline]
    pub fn as_ref(&self) -> Vector<&T, N> {
        Vector::from_fn(|i| &self[i])
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The operand element types may differ; the result type is decided by
    /// the [`Promote`] map, so `Vec3<i32> · Vec3<f32>` produces an `f32`.
    ///
    /// Geometrically, the dot product provides information about the
    /// relative angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::abs_angle_to`] for computing the exact angle
    /// between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(0.5f32, 0.5, 0.5)), 3.0f32);
    /// ```
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    /// assert_approx_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
    /// assert_approx_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    /// ```
    pub fn dot<U: Copy>(self, other: Vector<U, N>) -> <T as Promote<U>>::Output
    where
        T: Promote<U> + Copy,
        <T as Promote<U>>::Output: Number,
    {
        self.zip(other)
            .map(|(a, b)| a.promote() * T::promote_rhs(b))
            .into_array()
            .into_iter()
            .reduce(|acc, p| acc + p)
            .unwrap_or(<T as Promote<U>>::Output::ZERO)
    }

    /// Adds up all elements of this vector.
    ///
    /// Elements are added left to right; the evaluation order is part of
    /// this method's contract (the SIMD implementation reproduces it
    /// bit-for-bit).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
    /// ```
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .reduce(|acc, e| acc + e)
            .unwrap_or(T::ZERO)
    }

    /// Returns the smallest element of this vector.
    ///
    /// Uses [`MinMax::min`], so NaN elements are ignored unless every
    /// element is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(4, -1, 2).min_element(), -1);
    /// ```
    pub fn min_element(self) -> T
    where
        T: MinMax,
    {
        self.into_array().into_iter().reduce(MinMax::min).unwrap()
    }

    /// Returns the largest element of this vector.
    ///
    /// Uses [`MinMax::max`], so NaN elements are ignored unless every
    /// element is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(4, -1, 2).max_element(), 4);
    /// ```
    pub fn max_element(self) -> T
    where
        T: MinMax,
    {
        self.into_array().into_iter().reduce(MinMax::max).unwrap()
    }

    /// Computes the smallest positive angle between `self` and `other`, in
    /// radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to
    /// be meaningful.
    ///
    /// Also see [`Vector::signed_angle_to`] for getting a signed result
    /// depending on the relative orientation of the vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(b.abs_angle_to(a), TAU / 4.0);  // quarter turn
    /// assert_approx_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and
    /// `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec3(-5.0, 0.5, 5.0);
    /// let clamped = v.clamp(Vector::splat(0.0), Vector::splat(1.0));
    /// assert_eq!(clamped, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Element-wise absolute value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(-1, 2, -3).abs(), vec3(1, 2, 3));
    /// ```
    pub fn abs(self) -> Self
    where
        T: Abs,
    {
        self.map(T::abs)
    }

    /// Element-wise square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec2(4.0, 9.0).sqrt(), vec2(2.0, 3.0));
    /// ```
    pub fn sqrt(self) -> Self
    where
        T: Sqrt,
    {
        self.map(T::sqrt)
    }

    /// Raises each element to the power `exp`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec2(2.0f32, 3.0).powf(2.0), vec2(4.0, 9.0));
    /// ```
    pub fn powf(self, exp: T) -> Self
    where
        T: Pow + Copy,
    {
        self.map(|e| e.powf(exp))
    }

    /// Element-wise sine.
    pub fn sin(self) -> Self
    where
        T: Trig,
    {
        self.map(T::sin)
    }

    /// Element-wise cosine.
    pub fn cos(self) -> Self
    where
        T: Trig,
    {
        self.map(T::cos)
    }

    /// Element-wise tangent.
    pub fn tan(self) -> Self
    where
        T: Trig,
    {
        self.map(T::tan)
    }

    /// Linearly interpolates between `self` (at `t == 0`) and `other` (at
    /// `t == 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let a = vec2(0.0, 4.0);
    /// let b = vec2(2.0, 8.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(1.0, 6.0));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }
}

impl<T> Vector<T, 1> {
    /// Removes the last element of this vector, yielding a vector with zero
    /// elements.
    pub fn truncate(self) -> Vector<T, 0> {
        [].into()
    }

    /// Appends another value to the vector, yielding a vector with 2
    /// dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a
    /// single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the (signed) clockwise rotation in radians needed to align
    /// `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis
    /// points to the right. If the Y axis points *down*, swap the arguments
    /// to make the method work correctly.
    ///
    /// Also see [`Vector::abs_angle_to`] for a more general way of getting
    /// the unsigned angle between vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// // The Y axis can be aligned with the X axis by rotating it clockwise
    /// // by a quarter turn.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    ///
    /// // The angle of a vector to itself is, of course, 0.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self`
    /// and `other` (extended with Z=0 in the third dimension). Since the Z
    /// coordinates of both inputs are 0, the Z coordinate is the only
    /// non-zero coordinate of the cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let x = Vec2f::X;
    /// let y = Vec2f::Y;
    /// assert_eq!(x.perp_dot(y), 1.0);
    /// assert_eq!(y.perp_dot(x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Its direction depends on the order of the arguments:
    /// swapping them will invert the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Returns the index of the largest element.
    ///
    /// Ties resolve to the lower index. The selection is a fixed sequence of
    /// three comparisons that compiles to conditional moves, not branches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(1, 3, 2).max_axis(), 1);
    /// assert_eq!(vec3(5, 5, 2).max_axis(), 0);
    /// ```
    pub fn max_axis(self) -> usize
    where
        T: PartialOrd,
    {
        let [x, y, z] = self.into_array();
        if x >= y {
            if x >= z {
                0
            } else {
                2
            }
        } else if y >= z {
            1
        } else {
            2
        }
    }

    /// Returns the index of the smallest element.
    ///
    /// Ties resolve to the lower index, mirroring [`Vector::max_axis`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(1, 3, 2).min_axis(), 0);
    /// assert_eq!(vec3(4, 2, 2).min_axis(), 1);
    /// ```
    pub fn min_axis(self) -> usize
    where
        T: PartialOrd,
    {
        let [x, y, z] = self.into_array();
        if x <= y {
            if x <= z {
                0
            } else {
                2
            }
        } else if y <= z {
            1
        } else {
            2
        }
    }

    /// Returns the index of the coordinate axis most closely aligned with
    /// this vector's direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(0.2, -0.9, 0.1).closest_axis(), 1);
    /// ```
    pub fn closest_axis(self) -> usize
    where
        T: Abs + PartialOrd,
    {
        self.abs().max_axis()
    }

    /// Returns the index of the coordinate axis least aligned with this
    /// vector's direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(vec3(0.2, -0.9, 0.1).furthest_axis(), 2);
    /// ```
    pub fn furthest_axis(self) -> usize
    where
        T: Abs + PartialOrd,
    {
        self.abs().min_axis()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 99.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Widens a 2-dimensional vector, setting the new Z lane to 0.
impl<T: ConstZero> From<Vector<T, 2>> for Vector<T, 3> {
    #[inline]
    fn from(value: Vector<T, 2>) -> Self {
        value.extend(T::ZERO)
    }
}

/// Widens a 3-dimensional vector, setting the new W lane to 0.
impl<T: ConstZero> From<Vector<T, 3>> for Vector<T, 4> {
    #[inline]
    fn from(value: Vector<T, 3>) -> Self {
        value.extend(T::ZERO)
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, Zero};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);
        assert_eq!(v.w, 0);
        assert_eq!(v.h, 1);
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v.w, 777);
        assert_eq!(v[0], 777);
        v.h = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.g, 9);
        assert_eq!(v[1], 9);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn construction() {
        assert_eq!(Vec3f::from_slice(&[1.0, 2.0, 3.0]), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vec3f::from_slice(&[1.0]), vec3(1.0, 0.0, 0.0));
        assert_eq!(Vec3f::from_slice(&[]), Vec3f::ZERO);

        assert_eq!(Vec3f::from(Zero), Vec3f::ZERO);
        assert_eq!(Vec3::from(vec2(1, 2)), vec3(1, 2, 0));
        assert_eq!(Vec4::from(vec3(1, 2, 3)), vec4(1, 2, 3, 0));

        assert_eq!(vec2(1u8, 2).cast::<u32>(), vec2(1u32, 2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "initializer with 4 elements")]
    fn from_slice_oversized() {
        Vec3f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(Vec2f::X.rotate_clockwise(TAU / 2.0), -Vec2f::X);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);

        // Mixed element types promote.
        assert_eq!(vec3(1i32, 2, 3).dot(vec3(0.5f32, 0.5, 0.5)), 3.0);
    }

    #[test]
    fn cross() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(-5.0f32, 0.25, 7.0);

        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(a.cross(b), -(b.cross(a)));
        assert_approx_eq!(a.cross(b).dot(a), 0.0).abs(1e-5);
        assert_approx_eq!(a.cross(b).dot(b), 0.0).abs(1e-5);
    }

    #[test]
    fn horizontal() {
        assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
        assert_eq!(vec3(4.0, -1.0, 2.0).min_element(), -1.0);
        assert_eq!(vec3(4.0, -1.0, 2.0).max_element(), 4.0);
        assert_eq!(vec3(f32::NAN, -1.0, 2.0).min_element(), -1.0);
    }

    #[test]
    fn axis_selection() {
        assert_eq!(vec3(3, 1, 2).max_axis(), 0);
        assert_eq!(vec3(1, 3, 2).max_axis(), 1);
        assert_eq!(vec3(1, 2, 3).max_axis(), 2);
        assert_eq!(vec3(1, 3, 2).min_axis(), 0);
        assert_eq!(vec3(3, 1, 2).min_axis(), 1);
        assert_eq!(vec3(3, 2, 1).min_axis(), 2);

        // Ties pick the lower index.
        assert_eq!(vec3(5, 5, 5).max_axis(), 0);
        assert_eq!(vec3(1, 5, 5).max_axis(), 1);
        assert_eq!(vec3(5, 5, 5).min_axis(), 0);
        assert_eq!(vec3(5, 1, 1).min_axis(), 1);

        assert_eq!(vec3(0.1, -0.9, 0.2).closest_axis(), 1);
        assert_eq!(vec3(0.1, -0.9, 0.2).furthest_axis(), 0);
    }

    #[test]
    fn elementwise() {
        assert_eq!(vec3(-1.0, 2.0, -3.0).abs(), vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(4.0, 16.0).sqrt(), vec2(2.0, 4.0));
        assert_eq!(vec2(2.0f32, 4.0).powf(2.0), vec2(4.0, 16.0));
        assert_eq!(Vec2f::ZERO.sin(), Vec2f::ZERO);
        assert_eq!(Vec2f::ZERO.cos(), vec2(1.0, 1.0));
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_approx_eq!(Vec3f::X.abs_angle_to(Vec3f::Y), TAU / 4.0);

        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);

        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
        assert_approx_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), -TAU / 2.0);
    }
}
