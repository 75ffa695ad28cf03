use std::ops::{Index, IndexMut, Mul};

use crate::{
    approx::ApproxEq,
    tags::{Identity, Zero},
    traits::Number,
    ConstOne, ConstZero, Matrix, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Matrix * Column Vector: element `i` of the result is the dot product of
/// row `i` with the vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Row Vector * Matrix: element `j` of the result is the dot product of the
/// vector with column `j`.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.column(col)))
    }
}

/// Matrix * Matrix: element `(i, j)` of the result is the dot product of row
/// `i` of the left operand with column `j` of the right operand.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| self.row(i).dot(rhs.column(j)))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Scaling by [`Zero`] yields [`Zero`] without reading the operand.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Zero {
    type Output = Zero;

    #[inline]
    fn mul(self, _: Matrix<T, R, C>) -> Zero {
        Zero
    }
}

/// Multiplying by [`Identity`] returns the matrix unmodified.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Identity {
    type Output = Matrix<T, R, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
        rhs
    }
}

/// The all-zero matrix.
impl<T: ConstZero, const R: usize, const C: usize> From<Zero> for Matrix<T, R, C> {
    #[inline]
    fn from(_: Zero) -> Self {
        Self::ZERO
    }
}

/// The identity matrix, filled via the Kronecker delta.
///
/// Only square matrices have an identity, which is why this impl requires
/// `R == C`.
impl<T: ConstZero + ConstOne, const N: usize> From<Identity> for Matrix<T, N, N> {
    fn from(_: Identity) -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}
