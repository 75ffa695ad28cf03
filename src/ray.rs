use std::fmt;

use crate::{Bounded, Number, Vec3};

/// A ray with [`f32`] components.
pub type Rayf = Ray<f32>;

/// A ray: a half-line from `origin` along `direction`, restricted to the
/// parameter range `[t_min, t_max]`.
///
/// Rays are the currency exchanged with the geometry layer for intersection
/// tests. This crate does not intersect anything itself; it only carries the
/// value and knows how to map it between coordinate spaces (see
/// [`Transform::transform_ray`][crate::Transform::transform_ray]).
///
/// `direction` is conventionally unit length, so that `t` values measure
/// distance; nothing in this type enforces that.
#[derive(Clone, Copy, PartialEq)]
pub struct Ray<T> {
    pub origin: Vec3<T>,
    pub direction: Vec3<T>,
    pub t_min: T,
    pub t_max: T,
}

impl<T> Ray<T> {
    /// Creates a ray from its origin, direction and parameter range.
    #[inline]
    pub fn new(origin: Vec3<T>, direction: Vec3<T>, t_min: T, t_max: T) -> Self {
        Self {
            origin,
            direction,
            t_min,
            t_max,
        }
    }

    /// Creates a ray with an unrestricted parameter range `[0, T::MAX]`.
    #[inline]
    pub fn unbounded(origin: Vec3<T>, direction: Vec3<T>) -> Self
    where
        T: Number + Bounded,
    {
        Self::new(origin, direction, T::ZERO, T::MAX)
    }

    /// Returns the point at parameter `t` along the ray.
    ///
    /// `t` is not clamped to the ray's parameter range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let ray = Rayf::unbounded(vec3(1.0, 0.0, 0.0), Vec3f::Z);
    /// assert_eq!(ray.at(2.0), vec3(1.0, 0.0, 2.0));
    /// ```
    pub fn at(&self, t: T) -> Vec3<T>
    where
        T: Number,
    {
        self.origin + self.direction * t
    }

    /// Returns `true` if `t` lies within the ray's parameter range
    /// (inclusive on both ends).
    pub fn contains(&self, t: T) -> bool
    where
        T: PartialOrd,
    {
        self.t_min <= t && t <= self.t_max
    }
}

impl<T: fmt::Debug> fmt::Debug for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ray")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .field("t_min", &self.t_min)
            .field("t_max", &self.t_max)
            .finish()
    }
}
