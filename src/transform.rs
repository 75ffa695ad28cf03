//! Scale-rotation-translation transforms with a lazily computed matrix.

use std::{cell::Cell, fmt, ops::Mul};

use crate::{
    vec3, Bounded, Bounds, Mat4, Matrix, MinMax, Number, Quat, Ray, Sqrt, Vec3, Vector,
};

/// A transform with [`f32`] components.
pub type Transformf = Transform<f32>;

/// An affine transform composed of a per-axis scale, a rotation and a
/// translation, applied in that order.
///
/// The equivalent 4x4 matrix and its inverse are derived state: they are
/// computed on the first matrix-reading accessor after a setter ran and
/// cached until the next setter invalidates them. Reading the matrix of an
/// unchanged transform over and over (the common per-frame pattern) pays for
/// the two matrix builds once.
///
/// Following the crate's row-vector convention, points transform as
/// `p' = p · S · R · T`: the scaled rotation occupies the upper 3x3 block of
/// the matrix and the translation its last row.
///
/// # Sharing across threads
///
/// The cache cell makes the matrix accessors mutate through `&self`, so
/// [`Transform`] is not [`Sync`] and the compiler rejects unsynchronized
/// sharing outright. Transforms are small values; to publish one to another
/// thread, send a copy.
pub struct Transform<T> {
    scale: Vec3<T>,
    rotation: Quat<T>,
    position: Vec3<T>,
    /// Forward and inverse matrix, or [`None`] while dirty.
    cache: Cell<Option<(Mat4<T>, Mat4<T>)>>,
}

impl<T> Transform<T> {
    /// Creates a transform from its scale, rotation and translation parts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let t = Transform::new(Vector::splat(2.0), Quat::IDENTITY, vec3(1.0, 0.0, 0.0));
    /// assert_eq!(t.transform_point(vec3(1.0, 0.0, 0.0)), vec3(3.0, 0.0, 0.0));
    /// ```
    pub fn new(scale: Vec3<T>, rotation: Quat<T>, position: Vec3<T>) -> Self {
        Self {
            scale,
            rotation,
            position,
            cache: Cell::new(None),
        }
    }

    /// The transform that maps every point to itself.
    pub fn identity() -> Self
    where
        T: Number,
    {
        Self::new(Vector::splat(T::ONE), Quat::IDENTITY, Vector::ZERO)
    }

    /// Creates a transform from an affine matrix by decomposing it into
    /// scale, rotation and translation.
    ///
    /// The matrix (and the inverse computed from it) is kept, so no matrix
    /// accessor on the new transform recomputes anything.
    ///
    /// The decomposition inherits the assumptions of
    /// [`Matrix::decompose_affine`]: a matrix with shear or mirroring
    /// silently yields parts that do not multiply back to the input.
    pub fn from_matrix(matrix: Mat4<T>) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        Self::from_matrix_with_inverse(matrix, matrix.invert())
    }

    /// Like [`Transform::from_matrix`], but with a precomputed inverse.
    ///
    /// `inverse` is trusted to actually invert `matrix`; it is cached as-is.
    pub fn from_matrix_with_inverse(matrix: Mat4<T>, inverse: Mat4<T>) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let (scale, rotation, position) = matrix.decompose_affine();
        Self {
            scale,
            rotation,
            position,
            cache: Cell::new(Some((matrix, inverse))),
        }
    }

    /// The per-axis scale part.
    #[inline]
    pub fn scale(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.scale
    }

    /// The rotation part.
    #[inline]
    pub fn rotation(&self) -> Quat<T>
    where
        T: Copy,
    {
        self.rotation
    }

    /// The translation part.
    #[inline]
    pub fn position(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.position
    }

    /// Replaces the scale part.
    pub fn set_scale(&mut self, scale: Vec3<T>) {
        self.scale = scale;
        self.cache.set(None);
    }

    /// Replaces the rotation part.
    pub fn set_rotation(&mut self, rotation: Quat<T>) {
        self.rotation = rotation;
        self.cache.set(None);
    }

    /// Replaces the translation part.
    pub fn set_position(&mut self, position: Vec3<T>) {
        self.position = position;
        self.cache.set(None);
    }

    /// Moves the transform by `offset` (in world space).
    pub fn translate(&mut self, offset: Vec3<T>)
    where
        T: Number,
    {
        self.position = self.position + offset;
        self.cache.set(None);
    }

    /// Applies `rotation` on top of the current rotation (in world space).
    pub fn rotate(&mut self, rotation: Quat<T>)
    where
        T: Number,
    {
        self.rotation = rotation * self.rotation;
        self.cache.set(None);
    }

    /// Applies `rotation` around the world-space point `pivot`.
    ///
    /// This orbits the transform's position around the pivot in addition to
    /// rotating its orientation.
    pub fn rotate_around(&mut self, pivot: Vec3<T>, rotation: Quat<T>)
    where
        T: Number,
    {
        self.position = pivot + rotation.rotate(self.position - pivot);
        self.rotation = rotation * self.rotation;
        self.cache.set(None);
    }

    /// Multiplies the scale part element-wise by `factor`.
    pub fn scale_by(&mut self, factor: Vec3<T>)
    where
        T: Number,
    {
        self.scale = self.scale * factor;
        self.cache.set(None);
    }

    /// Resolves (or reuses) the cached forward and inverse matrix.
    fn matrices(&self) -> (Mat4<T>, Mat4<T>)
    where
        T: Number,
    {
        if let Some(pair) = self.cache.get() {
            return pair;
        }

        let scale = Matrix::from_diagonal(self.scale.extend(T::ONE));
        let rotation = self.rotation.to_matrix4();
        let forward = scale * rotation * translation_matrix(self.position);

        let inv_scale = Matrix::from_diagonal(
            vec3(T::ONE / self.scale.x, T::ONE / self.scale.y, T::ONE / self.scale.z)
                .extend(T::ONE),
        );
        let inv_rotation = self.rotation.conjugate().to_matrix4();
        let inverse = translation_matrix(-self.position) * inv_rotation * inv_scale;

        self.cache.set(Some((forward, inverse)));
        (forward, inverse)
    }

    /// The matrix mapping local row vectors into world space.
    pub fn matrix(&self) -> Mat4<T>
    where
        T: Number,
    {
        self.matrices().0
    }

    /// The matrix mapping world row vectors back into local space.
    pub fn inverse_matrix(&self) -> Mat4<T>
    where
        T: Number,
    {
        self.matrices().1
    }

    /// Returns the inverse transform.
    ///
    /// The matrix pair is reused with the roles swapped, so this does not
    /// recompute (or re-invert) anything beyond the decomposition of the
    /// inverse matrix into its scale/rotation/translation parts.
    pub fn inverse(&self) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        let (forward, inverse) = self.matrices();
        Self::from_matrix_with_inverse(inverse, forward)
    }

    /// Transforms a point, applying scale, rotation and translation.
    ///
    /// The full affine matrix is applied in homogeneous coordinates; if the
    /// resulting `w` differs from 1 (possible only for transforms
    /// constructed from a projective matrix), the result is divided through
    /// by it. A resulting `w` of 0 violates this method's contract; it is
    /// checked in debug builds only, release builds produce non-finite
    /// components.
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let h = point.extend(T::ONE) * self.matrix();
        debug_assert!(
            h.w != T::ZERO,
            "transformed point has homogeneous coordinate w = 0"
        );
        if h.w != T::ONE {
            h.truncate() / h.w
        } else {
            h.truncate()
        }
    }

    /// Transforms a direction vector, applying only scale and rotation.
    ///
    /// Unlike [`Transform::transform_point`], the translation part does not
    /// participate: a direction has no location.
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        vector * self.matrix().resize::<3, 3>()
    }

    /// Transforms a surface normal.
    ///
    /// Normals multiply against the transposed inverse (here: the inverse
    /// matrix's rows) instead of the forward matrix, which keeps them
    /// perpendicular to their surface under non-uniform scale. The result is
    /// not re-normalized.
    pub fn transform_normal(&self, normal: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        let inverse = self.inverse_matrix();
        Vector::from_fn(|i| inverse.row(i).truncate().dot(normal))
    }

    /// Transforms a ray: the origin as a point, the direction as a vector.
    ///
    /// The direction is re-normalized afterwards (scale changes its length),
    /// so the ray's `t` values keep measuring world-space distance. The
    /// parameter range is carried over unchanged.
    pub fn transform_ray(&self, ray: Ray<T>) -> Ray<T>
    where
        T: Number + Sqrt,
    {
        Ray {
            origin: self.transform_point(ray.origin),
            direction: self.transform_vector(ray.direction).normalize(),
            t_min: ray.t_min,
            t_max: ray.t_max,
        }
    }

    /// Transforms an axis-aligned bounds by transforming its 8 corners and
    /// taking their union.
    ///
    /// The result contains the transformed input exactly under axis-aligned
    /// scale and translation; under rotation it is conservative (it contains
    /// the rotated box, but is generally larger than its tight bounds).
    pub fn transform_bounds(&self, bounds: Bounds<T, 3>) -> Bounds<T, 3>
    where
        T: Number + MinMax + Bounded,
    {
        Bounds::from_points(bounds.corners().map(|corner| self.transform_point(corner)))
    }
}

/// Composes two transforms: the result applies `self` first, then `rhs`.
///
/// The forward matrix is `self.matrix() · rhs.matrix()` and the inverse
/// `rhs.inverse_matrix() · self.inverse_matrix()`; both are computed here,
/// so the composed transform starts with its cache populated.
impl<T: Number + Sqrt + PartialOrd> Mul for Transform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_matrix_with_inverse(
            self.matrix() * rhs.matrix(),
            rhs.inverse_matrix() * self.inverse_matrix(),
        )
    }
}

fn translation_matrix<T: Number>(offset: Vec3<T>) -> Mat4<T> {
    let mut m = Matrix::IDENTITY;
    m[(3, 0)] = offset.x;
    m[(3, 1)] = offset.y;
    m[(3, 2)] = offset.z;
    m
}

impl<T: Copy> Clone for Transform<T> {
    fn clone(&self) -> Self {
        Self {
            scale: self.scale,
            rotation: self.rotation,
            position: self.position,
            cache: self.cache.clone(),
        }
    }
}

impl<T: Number> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compares the scale, rotation and translation parts; the cache state does
/// not participate.
impl<T: PartialEq + Copy> PartialEq for Transform<T> {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale
            && self.rotation == other.rotation
            && self.position == other.position
    }
}

impl<T: fmt::Debug> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("scale", &self.scale)
            .field("rotation", &self.rotation)
            .field("position", &self.position)
            .finish()
    }
}
