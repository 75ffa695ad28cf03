//! Axis-aligned bounding extents over arbitrary dimension.

use std::fmt;

use crate::{approx::ApproxEq, Bounded, MinMax, Number, Sqrt, Vector};

/// A 1-dimensional bounds (an interval on the number line).
pub type Interval<T> = Bounds<T, 1>;
/// A 1-dimensional bounds with [`f32`] extents.
pub type Intervalf = Interval<f32>;
/// A 2-dimensional bounds (a rectangle).
pub type Bounds2<T> = Bounds<T, 2>;
/// A 2-dimensional bounds with [`f32`] extents.
pub type Bounds2f = Bounds2<f32>;
/// A 3-dimensional bounds (a box).
pub type Bounds3<T> = Bounds<T, 3>;
/// A 3-dimensional bounds with [`f32`] extents.
pub type Bounds3f = Bounds3<f32>;

/// An axis-aligned box in `N` dimensions, stored as per-axis lower and upper
/// extents.
///
/// The canonical *empty* bounds ([`Bounds::EMPTY`]) has every lower extent
/// at the type's maximum and every upper extent at its minimum, so that a
/// union with it returns the other operand unchanged. Growing a bounds over
/// a set of points is therefore just a fold:
///
/// ```
/// # use lucent_linalg::*;
/// let b = [vec3(1.0, 0.0, 0.0), vec3(0.0, 2.0, -1.0)]
///     .into_iter()
///     .fold(Bounds3f::EMPTY, Bounds::union_point);
/// assert_eq!(b, Bounds::new(vec3(0.0, 0.0, -1.0), vec3(1.0, 2.0, 0.0)));
/// ```
///
/// Most operations assume `lower <= upper` on every axis ("valid" bounds);
/// [`Bounds::intersection`] of disjoint operands is the one operation that
/// returns a structurally invalid value, which callers are expected to
/// avoid by checking [`Bounds::overlaps`] first.
#[derive(Clone, Copy, Hash)]
#[repr(C)]
pub struct Bounds<T, const N: usize> {
    lower: Vector<T, N>,
    upper: Vector<T, N>,
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Bounds<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Bounds<T, N> {}

impl<T: Bounded, const N: usize> Bounds<T, N> {
    /// The canonical empty bounds: lower extents at the maximum value, upper
    /// extents at the minimum.
    ///
    /// It is the identity of [`Bounds::union`] and overlaps nothing,
    /// including itself.
    pub const EMPTY: Self = Self {
        lower: Vector::MAX,
        upper: Vector::MIN,
    };
}

impl<T, const N: usize> Bounds<T, N> {
    /// Creates a bounds from its per-axis extents.
    #[inline]
    pub fn new(lower: Vector<T, N>, upper: Vector<T, N>) -> Self {
        Self { lower, upper }
    }

    /// Creates a degenerate bounds containing the single point `point`.
    #[inline]
    pub fn from_point(point: Vector<T, N>) -> Self
    where
        T: Copy,
    {
        Self {
            lower: point,
            upper: point,
        }
    }

    /// Creates the smallest bounds containing every point in `points`.
    ///
    /// Returns [`Bounds::EMPTY`] for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let b = Bounds::from_points([vec2(1, 4), vec2(3, 0), vec2(2, 2)]);
    /// assert_eq!(b, Bounds::new(vec2(1, 0), vec2(3, 4)));
    /// ```
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector<T, N>>,
        T: Bounded + MinMax + Copy,
    {
        points.into_iter().fold(Self::EMPTY, Self::union_point)
    }

    /// The per-axis lower extents.
    #[inline]
    pub fn lower(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        self.lower
    }

    /// The per-axis upper extents.
    #[inline]
    pub fn upper(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        self.upper
    }

    /// Returns `true` if any axis has its lower extent above its upper
    /// extent, so no point is contained.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).any(|i| self.lower[i] > self.upper[i])
    }

    /// Returns the smallest bounds containing both `self` and `point`.
    ///
    /// Union is commutative and associative, with [`Bounds::EMPTY`] as its
    /// identity.
    pub fn union_point(self, point: Vector<T, N>) -> Self
    where
        T: MinMax + Copy,
    {
        Self {
            lower: self.lower.min(point),
            upper: self.upper.max(point),
        }
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let b = Bounds::new(vec3(0.0, 0.0, 0.0), vec3(2.0, 2.0, 2.0));
    /// let grown = b.union(Bounds::from_point(vec3(3.0, 3.0, 3.0)));
    /// assert_eq!(grown, Bounds::new(vec3(0.0, 0.0, 0.0), vec3(3.0, 3.0, 3.0)));
    /// ```
    pub fn union(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    /// Returns the bounds covered by both `self` and `other`.
    ///
    /// If the operands do not overlap, the result has `lower > upper` on
    /// some axis and most operations on it are meaningless; check
    /// [`Bounds::overlaps`] before calling this.
    pub fn intersection(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self {
            lower: self.lower.max(other.lower),
            upper: self.upper.min(other.upper),
        }
    }

    /// Returns `true` if `self` and `other` share at least one point.
    ///
    /// The extents are inclusive, so bounds that merely touch do overlap.
    pub fn overlaps(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self.lower[i] <= other.upper[i] && other.lower[i] <= self.upper[i])
    }

    /// Returns `true` if `point` lies within the bounds; the extents are
    /// inclusive on both ends.
    pub fn contains(&self, point: Vector<T, N>) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self.lower[i] <= point[i] && point[i] <= self.upper[i])
    }

    /// Returns `true` if `point` lies within the bounds, with the upper
    /// extents treated as exclusive.
    ///
    /// Useful for binning points into adjacent cells without counting the
    /// ones on a shared face twice.
    pub fn contains_exclusive(&self, point: Vector<T, N>) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self.lower[i] <= point[i] && point[i] < self.upper[i])
    }

    /// Grows the bounds by `margin` on every side.
    ///
    /// A negative margin shrinks it instead, possibly below empty.
    pub fn expand(self, margin: T) -> Self
    where
        T: Number,
    {
        Self {
            lower: self.lower.map(|e| e - margin),
            upper: self.upper.map(|e| e + margin),
        }
    }

    /// The per-axis extent of the bounds.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Number,
    {
        self.upper - self.lower
    }

    /// The center point of the bounds.
    pub fn center(&self) -> Vector<T, N>
    where
        T: Number,
    {
        (self.lower + self.upper) / (T::ONE + T::ONE)
    }

    /// Interpolates within the bounds: the per-axis `t` of 0 maps to the
    /// lower extent, 1 to the upper.
    pub fn lerp(&self, t: Vector<T, N>) -> Vector<T, N>
    where
        T: Number,
    {
        self.lower + self.diagonal() * t
    }

    /// The inverse of [`Bounds::lerp`]: the per-axis relative position of
    /// `point` within the bounds.
    ///
    /// A zero-extent axis yields a non-finite component.
    pub fn offset(&self, point: Vector<T, N>) -> Vector<T, N>
    where
        T: Number,
    {
        (point - self.lower) / self.diagonal()
    }

    /// The squared distance from `point` to the nearest point of the
    /// bounds; 0 if the point is inside.
    pub fn distance2(&self, point: Vector<T, N>) -> T
    where
        T: Number + MinMax,
    {
        let mut total = T::ZERO;
        for i in 0..N {
            let d = (self.lower[i] - point[i]).max(point[i] - self.upper[i]).max(T::ZERO);
            total = total + d * d;
        }
        total
    }

    /// The distance from `point` to the nearest point of the bounds; 0 if
    /// the point is inside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let b = Bounds::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
    /// assert_eq!(b.distance(vec3(0.5, 0.5, 0.5)), 0.0);
    /// assert_eq!(b.distance(vec3(0.5, 0.5, 3.0)), 2.0);
    /// ```
    pub fn distance(&self, point: Vector<T, N>) -> T
    where
        T: Number + MinMax + Sqrt,
    {
        self.distance2(point).sqrt()
    }

    /// The center and radius of a sphere containing the bounds.
    ///
    /// The radius is only valid if the center lies inside the bounds, which
    /// holds for every non-empty bounds; for an empty one the radius is 0.
    pub fn bounding_sphere(&self) -> (Vector<T, N>, T)
    where
        T: Number + MinMax + Sqrt + PartialOrd,
    {
        let center = self.center();
        let radius = if self.contains(center) {
            (self.upper - center).length()
        } else {
            T::ZERO
        };
        (center, radius)
    }
}

impl<T> Bounds<T, 3> {
    /// The 8 corner points of a 3-dimensional bounds.
    pub fn corners(&self) -> [Vector<T, 3>; 8]
    where
        T: Copy,
    {
        let (l, u) = (self.lower, self.upper);
        [
            crate::vec3(l.x, l.y, l.z),
            crate::vec3(u.x, l.y, l.z),
            crate::vec3(l.x, u.y, l.z),
            crate::vec3(u.x, u.y, l.z),
            crate::vec3(l.x, l.y, u.z),
            crate::vec3(u.x, l.y, u.z),
            crate::vec3(l.x, u.y, u.z),
            crate::vec3(u.x, u.y, u.z),
        ]
    }
}

impl<T> Interval<T> {
    /// Creates a 1-dimensional bounds from scalar endpoints.
    pub fn from_endpoints(lower: T, upper: T) -> Self {
        Self {
            lower: crate::vec1(lower),
            upper: crate::vec1(upper),
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Bounds<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T: Eq, const N: usize> Eq for Bounds<T, N> {}

impl<T: ApproxEq, const N: usize> ApproxEq for Bounds<T, N> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.lower.abs_diff_eq(&other.lower, abs_tolerance)
            && self.upper.abs_diff_eq(&other.upper, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.lower.rel_diff_eq(&other.lower, rel_tolerance)
            && self.upper.rel_diff_eq(&other.upper, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.lower.ulps_diff_eq(&other.lower, ulps_tolerance)
            && self.upper.ulps_diff_eq(&other.upper, ulps_tolerance)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Bounds<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounds")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec1, vec2, vec3};

    use super::*;

    fn unit_box() -> Bounds3f {
        Bounds::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0))
    }

    #[test]
    fn union_laws() {
        let b = unit_box();
        assert_eq!(Bounds3f::EMPTY.union(b), b);
        assert_eq!(b.union(Bounds::EMPTY), b);
        assert_eq!(b.union(b), b);

        let c = Bounds::new(vec3(-1.0, 0.5, 0.5), vec3(0.5, 2.0, 0.75));
        assert_eq!(b.union(c), c.union(b));

        let d = Bounds::from_point(vec3(9.0, -9.0, 0.0));
        assert_eq!(b.union(c).union(d), b.union(c.union(d)));
    }

    #[test]
    fn union_scenario() {
        let b = Bounds::new(vec3(0.0, 0.0, 0.0), vec3(2.0, 2.0, 2.0));
        let grown = b.union_point(vec3(3.0, 3.0, 3.0));
        assert_eq!(grown, Bounds::new(vec3(0.0, 0.0, 0.0), vec3(3.0, 3.0, 3.0)));
    }

    #[test]
    fn overlap_and_containment() {
        let b = unit_box();
        assert!(b.overlaps(&b));
        assert!(b.contains(b.center()));
        assert!(!b.is_empty());
        assert!(Bounds3f::EMPTY.is_empty());
        assert!(!Bounds3f::EMPTY.overlaps(&Bounds3f::EMPTY));

        let shifted = Bounds::new(vec3(0.5, 0.5, 0.5), vec3(1.5, 1.5, 1.5));
        assert!(b.overlaps(&shifted));
        assert!(shifted.overlaps(&b));

        let touching = Bounds::new(vec3(1.0, 0.0, 0.0), vec3(2.0, 1.0, 1.0));
        assert!(b.overlaps(&touching));

        let disjoint = Bounds::new(vec3(2.0, 2.0, 2.0), vec3(3.0, 3.0, 3.0));
        assert!(!b.overlaps(&disjoint));

        // Upper extents are inclusive for `contains`, exclusive for
        // `contains_exclusive`.
        assert!(b.contains(vec3(1.0, 1.0, 1.0)));
        assert!(!b.contains_exclusive(vec3(1.0, 1.0, 1.0)));
        assert!(b.contains_exclusive(vec3(0.0, 0.0, 0.0)));
    }

    #[test]
    fn intersection() {
        let b = unit_box();
        let shifted = Bounds::new(vec3(0.5, 0.5, 0.5), vec3(1.5, 1.5, 1.5));
        assert_eq!(
            b.intersection(shifted),
            Bounds::new(vec3(0.5, 0.5, 0.5), vec3(1.0, 1.0, 1.0)),
        );

        // Disjoint operands produce an inverted (empty) result.
        let disjoint = Bounds::new(vec3(2.0, 0.0, 0.0), vec3(3.0, 1.0, 1.0));
        assert!(!b.overlaps(&disjoint));
        assert!(b.intersection(disjoint).is_empty());
    }

    #[test]
    fn expand() {
        let b = unit_box().expand(0.5);
        assert_eq!(b, Bounds::new(vec3(-0.5, -0.5, -0.5), vec3(1.5, 1.5, 1.5)));
        assert!(unit_box().expand(-0.75).is_empty());
    }

    #[test]
    fn metrics() {
        let b = Bounds::new(vec3(0.0, 0.0, 0.0), vec3(2.0, 4.0, 6.0));
        assert_eq!(b.diagonal(), vec3(2.0, 4.0, 6.0));
        assert_eq!(b.center(), vec3(1.0, 2.0, 3.0));
        assert_eq!(b.lerp(vec3(0.5, 0.25, 0.0)), vec3(1.0, 1.0, 0.0));
        assert_eq!(b.offset(vec3(1.0, 1.0, 0.0)), vec3(0.5, 0.25, 0.0));

        assert_eq!(b.distance2(vec3(1.0, 1.0, 1.0)), 0.0);
        assert_eq!(b.distance(vec3(-2.0, 0.0, 0.0)), 2.0);
        assert_eq!(b.distance2(vec3(3.0, 5.0, 6.0)), 2.0);
    }

    #[test]
    fn bounding_sphere() {
        let b = Bounds::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0));
        let (center, radius) = b.bounding_sphere();
        assert_eq!(center, vec3(0.0, 0.0, 0.0));
        assert_eq!(radius, 3.0f32.sqrt());

        let (_, radius) = Bounds3f::EMPTY.bounding_sphere();
        assert_eq!(radius, 0.0);
    }

    #[test]
    fn corners() {
        let corners = unit_box().corners();
        assert_eq!(corners.len(), 8);
        assert!(corners.iter().all(|c| unit_box().contains(*c)));
        assert_eq!(Bounds::from_points(corners), unit_box());
    }

    #[test]
    fn interval() {
        let i = Intervalf::from_endpoints(1.0, 3.0);
        assert_eq!(i.center(), vec1(2.0));
        assert_eq!(i.diagonal(), vec1(2.0));
        assert!(i.contains(vec1(3.0)));
        assert!(!i.contains(vec1(3.5)));

        let j = Intervalf::from_endpoints(2.0, 5.0);
        assert!(i.overlaps(&j));
        assert_eq!(i.union(j), Intervalf::from_endpoints(1.0, 5.0));
        assert_eq!(i.intersection(j), Intervalf::from_endpoints(2.0, 3.0));

        assert_eq!(Interval::EMPTY.union(i), i);

        // Integer intervals work too.
        let k = Interval::from_endpoints(1u32, 4);
        assert!(k.contains(vec1(2)));
    }
}
