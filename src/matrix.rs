use std::{
    array, fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
};

use crate::{vec3, ConstOne, ConstZero, Number, Quat, Sqrt, Trig, Vector};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The elements are stored as `R` contiguous rows of `C` elements each, with
/// no padding. A `Mat4f` is therefore exactly 16 contiguous floats in
/// reading order, which is the layout GPU constant buffers expect; the
/// [`bytemuck::Pod`] impl allows viewing it as raw bytes for upload.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a
///   matrix with raw elements, as well as creating them from an array of
///   row or column vectors.
/// - [`Matrix::from_row_slice`] fills the matrix from a flat slice in
///   row-major (reading) order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure
///   with its row and column.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`]
///   can be used to create a matrix with a specified diagonal and zero
///   outside of its diagonal.
/// - [`Matrix::rotation_clockwise`] and
///   [`Matrix::rotation_counterclockwise`] allow creating 2D rotation
///   matrices from a rotation angle.
/// - The [`Zero`][crate::Zero] and [`Identity`][crate::Identity] tags
///   convert into the corresponding canonical matrices (the latter only for
///   square matrices).
///
/// Additionally, some associated constants for commonly used matrices are
/// defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a square matrix with 1 on its diagonal and 0
///   everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use lucent_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s
/// instead and can be used for checked indexing. Whole rows and columns can
/// be extracted with [`Matrix::row`] and [`Matrix::column`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in
    /// [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] from a flat slice in row-major order, zero-
    /// filling any remaining elements.
    ///
    /// A slice with more than `R * C` elements violates this method's
    /// contract; the excess length is checked in debug builds only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Mat2::from_row_slice(&[0, 1, 2, 3]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]));
    /// ```
    pub fn from_row_slice(elems: &[T]) -> Self
    where
        T: ConstZero + Copy,
    {
        debug_assert!(
            elems.len() <= R * C,
            "initializer with {} elements for a {}x{} matrix",
            elems.len(),
            R,
            C,
        );
        Self::from_fn(|row, col| elems.get(row * C + col).copied().unwrap_or(T::ZERO))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (r, row) in self.0.into_iter().enumerate() {
            for (c, elem) in row.into_iter().enumerate() {
                out.0[c][r] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if
    /// out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Extracts a row as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Extracts a column as a [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// ```
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns a matrix with the contents of `self`, but a potentially
    /// different size.
    ///
    /// Elements not present in `self` will be initialized with
    /// [`T::ZERO`][`ConstZero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: ConstZero,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                mem::replace(&mut self[(row, col)], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with
    /// `elem`, without dropping the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(row, col)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[row][col] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: ConstZero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // Because `[T::ZERO; N]` requires `T` to be `Copy`, we use this
        // gross hack to duplicate `T::ZERO` without that `Copy` bound.
        let mut mat = Self::new_uninit();
        let mut row = 0;
        while row < R {
            let mut col = 0;
            while col < C {
                mat.0[row][col] = MaybeUninit::new(T::ZERO);
                col += 1;
            }
            row += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety
    /// invariant the caller needs to uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: ConstZero + ConstOne, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square
    /// matrix.
    ///
    /// *Note*: This method is restricted to square matrices due to
    /// limitations in Rust's const generics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to
    /// allow type inference of the created [`Matrix`]. To create a
    /// non-square matrix from its diagonal, use [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: ConstZero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the
    /// diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Inverts this 1x1 matrix.
    ///
    /// A singular `self` (zero [`determinant()`]) violates this method's
    /// contract. The contract is checked in debug builds only; release
    /// builds divide through anyway and produce non-finite elements.
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        debug_assert!(det != T::ZERO, "attempt to invert a non-invertible matrix");

        Matrix::from_rows([[T::ONE / self[(0, 0)]]])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// A singular `self` (zero [`determinant()`]) violates this method's
    /// contract. The contract is checked in debug builds only; release
    /// builds divide through anyway and produce non-finite elements.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(Mat2::<i32>::IDENTITY.invert(), Mat2::<i32>::IDENTITY);
    /// assert_eq!(Mat2f::IDENTITY.invert(), Mat2f::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        debug_assert!(det != T::ZERO, "attempt to invert a non-invertible matrix");

        let [[a, b], [c, d]] = self.0;
        Matrix::from_rows([[d, -b], [-c, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY
    /// plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the
    /// XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix, computed by cofactor
    /// expansion along the first row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverts this 3x3 matrix via its adjugate and determinant.
    ///
    /// A singular `self` (zero [`determinant()`]) violates this method's
    /// contract. The contract is checked in debug builds only; release
    /// builds divide through anyway and produce non-finite elements.
    ///
    /// [`determinant()`]: Self::determinant
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        debug_assert!(det != T::ZERO, "attempt to invert a non-invertible matrix");

        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        #[rustfmt::skip]
        let adjugate = Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        adjugate * (T::ONE / det)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// 2x2 sub-determinants of the top and bottom half, shared between
    /// [`determinant`][Self::determinant] and [`invert`][Self::invert].
    #[rustfmt::skip]
    fn subfactors(&self) -> ([T; 6], [T; 6]) {
        let m = &self.0;
        let s = [
            m[0][0] * m[1][1] - m[1][0] * m[0][1],
            m[0][0] * m[1][2] - m[1][0] * m[0][2],
            m[0][0] * m[1][3] - m[1][0] * m[0][3],
            m[0][1] * m[1][2] - m[1][1] * m[0][2],
            m[0][1] * m[1][3] - m[1][1] * m[0][3],
            m[0][2] * m[1][3] - m[1][2] * m[0][3],
        ];
        let c = [
            m[2][0] * m[3][1] - m[3][0] * m[2][1],
            m[2][0] * m[3][2] - m[3][0] * m[2][2],
            m[2][0] * m[3][3] - m[3][0] * m[2][3],
            m[2][1] * m[3][2] - m[3][1] * m[2][2],
            m[2][1] * m[3][3] - m[3][1] * m[2][3],
            m[2][2] * m[3][3] - m[3][2] * m[2][3],
        ];
        (s, c)
    }

    /// Returns the [determinant] of the matrix, computed from the closed
    /// cofactor form (no elimination, so the result is reproducible
    /// digit-for-digit across inputs).
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.subfactors();
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Inverts this 4x4 matrix via its adjugate and determinant.
    ///
    /// A singular `self` (zero [`determinant()`]) violates this method's
    /// contract. The contract is checked in debug builds only; release
    /// builds divide through anyway and produce non-finite elements.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use lucent_linalg::*;
    /// assert_eq!(Mat4f::IDENTITY.invert(), Mat4f::IDENTITY);
    /// ```
    #[rustfmt::skip]
    pub fn invert(&self) -> Self {
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.subfactors();
        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        debug_assert!(det != T::ZERO, "attempt to invert a non-invertible matrix");
        let inv = T::ONE / det;

        let m = &self.0;
        Matrix::from_rows([
            [
                ( m[1][1] * c5 - m[1][2] * c4 + m[1][3] * c3) * inv,
                (-m[0][1] * c5 + m[0][2] * c4 - m[0][3] * c3) * inv,
                ( m[3][1] * s5 - m[3][2] * s4 + m[3][3] * s3) * inv,
                (-m[2][1] * s5 + m[2][2] * s4 - m[2][3] * s3) * inv,
            ],
            [
                (-m[1][0] * c5 + m[1][2] * c2 - m[1][3] * c1) * inv,
                ( m[0][0] * c5 - m[0][2] * c2 + m[0][3] * c1) * inv,
                (-m[3][0] * s5 + m[3][2] * s2 - m[3][3] * s1) * inv,
                ( m[2][0] * s5 - m[2][2] * s2 + m[2][3] * s1) * inv,
            ],
            [
                ( m[1][0] * c4 - m[1][1] * c2 + m[1][3] * c0) * inv,
                (-m[0][0] * c4 + m[0][1] * c2 - m[0][3] * c0) * inv,
                ( m[3][0] * s4 - m[3][1] * s2 + m[3][3] * s0) * inv,
                (-m[2][0] * s4 + m[2][1] * s2 - m[2][3] * s0) * inv,
            ],
            [
                (-m[1][0] * c3 + m[1][1] * c1 - m[1][2] * c0) * inv,
                ( m[0][0] * c3 - m[0][1] * c1 + m[0][2] * c0) * inv,
                (-m[3][0] * s3 + m[3][1] * s1 - m[3][2] * s0) * inv,
                ( m[2][0] * s3 - m[2][1] * s1 + m[2][2] * s0) * inv,
            ],
        ])
    }

    /// Splits an affine transformation matrix into per-axis scale, rotation
    /// and translation, returned in that order.
    ///
    /// The translation is row 3's leading 3 elements; each axis scale is the
    /// length of the corresponding upper row's leading 3 elements; the
    /// rotation is recovered from the scale-normalized 3x3 block.
    ///
    /// This assumes the upper 3x3 block is a rotation times a positive
    /// per-axis scale. A matrix with shear (or mirroring) silently yields a
    /// decomposition that does not multiply back to the input; no attempt is
    /// made to detect that.
    pub fn decompose_affine(&self) -> (Vector<T, 3>, Quat<T>, Vector<T, 3>)
    where
        T: Sqrt + PartialOrd,
    {
        let translation = self.row(3).truncate();
        let rows = [
            self.row(0).truncate(),
            self.row(1).truncate(),
            self.row(2).truncate(),
        ];
        let scale = vec3(rows[0].length(), rows[1].length(), rows[2].length());
        let rotation = Matrix::from_rows([
            rows[0] / scale.x,
            rows[1] / scale.y,
            rows[2] / scale.z,
        ]);
        (scale, Quat::from_matrix3(rotation), translation)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec2, vec4, Identity, Zero};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::from_row_slice(&[1, 2, 3, 4, 5, 6]),
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
        );
        assert_eq!(
            Mat2::from_row_slice(&[1, 2, 3]),
            Mat2::from_rows([[1, 2], [3, 0]]),
        );
    }

    #[test]
    fn rows_and_columns() {
        let mat = Matrix::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mat.row(0), vec3(0, 1, 2));
        assert_eq!(mat.row(1), vec3(3, 4, 5));
        assert_eq!(mat.column(0), vec2(0, 3));
        assert_eq!(mat.column(2), vec2(2, 5));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::<i32>::from(Zero), Mat3::<i32>::ZERO);
        assert_eq!(Mat3f::from(Identity), Mat3f::IDENTITY);
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn vec_mat_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = vec * mat;
        assert_eq!(out, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);

        // Row times matrix equals transposed matrix times column.
        assert_eq!(out, mat.transpose() * vec);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_laws() {
        let v2 = vec2(4, 5);
        let v3 = vec3(1, -2, 3);
        let v4 = vec4(1, -2, 3, -4);
        assert_eq!(Mat2::IDENTITY * v2, v2);
        assert_eq!(v2 * Mat2::IDENTITY, v2);
        assert_eq!(Mat3::IDENTITY * v3, v3);
        assert_eq!(v3 * Mat3::IDENTITY, v3);
        assert_eq!(Mat4::IDENTITY * v4, v4);
        assert_eq!(v4 * Mat4::IDENTITY, v4);

        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(Identity * mat, mat);
        assert_eq!(Zero * mat, Zero);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [3, 2, 0, 1],
            [4, 0, 1, 2],
            [3, 0, 2, 1],
            [9, 2, 3, 1],
        ]);
        assert_eq!(testmat.determinant(), 24);
        assert_eq!(testmat.transpose().determinant(), 24);
    }

    #[test]
    fn invert() {
        #[rustfmt::skip]
        let mat = Mat3f::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_approx_eq!(mat * mat.invert(), Mat3f::IDENTITY).abs(1e-6);
        assert_approx_eq!(mat.invert() * mat, Mat3f::IDENTITY).abs(1e-6);

        #[rustfmt::skip]
        let mat = Mat4f::from_rows([
            [3.0, 2.0, 0.0, 1.0],
            [4.0, 0.0, 1.0, 2.0],
            [3.0, 0.0, 2.0, 1.0],
            [9.0, 2.0, 3.0, 1.0],
        ]);
        assert_approx_eq!(mat * mat.invert(), Mat4f::IDENTITY).abs(1e-5);
        assert_approx_eq!(mat.invert() * mat, Mat4f::IDENTITY).abs(1e-5);

        // A pure translation inverts to the opposite translation.
        #[rustfmt::skip]
        let mat = Mat4f::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [2.0, 3.0, 4.0, 1.0],
        ]);
        assert_eq!(mat.invert().row(3), vec4(-2.0, -3.0, -4.0, 1.0));
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.invert());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, ccw.invert());

        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(PI);
        assert_approx_eq!(cw, cw.invert()).abs(1e-6);
    }

    #[test]
    fn decompose() {
        // Scale (2, 3, 4), no rotation, translation (5, 6, 7).
        #[rustfmt::skip]
        let mat = Mat4f::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [5.0, 6.0, 7.0, 1.0],
        ]);
        let (scale, rotation, translation) = mat.decompose_affine();
        assert_approx_eq!(scale, vec3(2.0, 3.0, 4.0));
        assert_approx_eq!(rotation.to_vec(), Quat::IDENTITY.to_vec());
        assert_approx_eq!(translation, vec3(5.0, 6.0, 7.0));
    }
}
