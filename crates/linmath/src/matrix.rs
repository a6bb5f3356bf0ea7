use std::{
    array, fmt,
    ops::{Add, Sub},
};

use crate::{Error, Number, One, Result, Vector, Zero};

mod inverse;
mod ops;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square, row-major matrix with `N` rows and `N` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_slice`] reads `N * N` elements in row-major order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::unit`], [`Matrix::row_of_ones`] and [`Matrix::column_of_ones`] create matrices
///   that are zero except for a single element, row or column.
/// - The transform builders like [`Matrix::translation`] and [`Matrix::rotation_z`] create affine
///   transforms for row vectors.
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::ONE`] is a matrix with every element set to 1.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// A plain `usize` index addresses the elements in row-major order, so `mat[i]` is the same as
/// `mat[(i / N, i % N)]`:
///
/// ```
/// # use linmath::*;
/// let mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// assert_eq!(mat[2], 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// # Products
///
/// The `*` operator multiplies matrices *element-wise*, like every other arithmetic operator. The
/// matrix product is [`Matrix::dot`]. Products with vectors are [`Matrix::mul_vector`] (`M·v`,
/// column vector) and [`Vector::mul_matrix`] (`v·M`, row vector).
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero, const N: usize> Matrix<T, N> {
    const ZERO_ROW: [T; N] = [T::ZERO; N];

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Self::ZERO_ROW; N]);
}

impl<T: One, const N: usize> Matrix<T, N> {
    const ONE_ROW: [T; N] = [T::ONE; N];

    /// A matrix with every element set to 1.
    pub const ONE: Self = Self([Self::ONE_ROW; N]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };

    /// Returns a matrix with a 1 at the row-major position `index` and 0 everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N * N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Mat2::<i32>::unit(1), Matrix::from_rows([
    ///     [0, 1],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn unit(index: usize) -> Self {
        assert!(
            index < N * N,
            "index {index} out of range for a {N}x{N} matrix"
        );
        Self::from_fn(|row, col| {
            if row * N + col == index {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Returns a matrix whose row `row` is all ones, and which is zero everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `N`.
    pub fn row_of_ones(row: usize) -> Self {
        assert!(row < N, "row {row} out of range for a {N}x{N} matrix");
        Self::from_fn(|r, _| if r == row { T::ONE } else { T::ZERO })
    }

    /// Returns a matrix whose column `col` is all ones, and which is zero everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Mat3::<i32>::column_of_ones(2), Mat3::<i32>::row_of_ones(2).transposed());
    /// assert_eq!(Mat2::<i32>::column_of_ones(0), Matrix::from_rows([
    ///     [1, 0],
    ///     [1, 0],
    /// ]));
    /// ```
    pub fn column_of_ones(col: usize) -> Self {
        assert!(col < N, "column {col} out of range for a {N}x{N} matrix");
        Self::from_fn(|_, c| if c == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
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
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self
    where
        T: Copy,
    {
        Self::from_rows(columns).transposed()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; N]; N])
    }

    /// Creates a matrix from `N * N` elements given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `values` doesn't contain exactly `N * N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Mat2::from_slice(&[1, 2, 3, 4])?;
    /// assert_eq!(mat.row(1), vec2(3, 4));
    /// assert!(Mat2::from_slice(&[1, 2, 3]).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        if values.len() != N * N {
            return Err(Error::LengthMismatch {
                expected: N * N,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|row, col| values[row * N + col].clone()))
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Merges two [`Matrix`]es into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Matrix<U, N>) -> Matrix<(T, U), N> {
        let rows = Vector::from(self.0).zip(Vector::from(other.0));
        Matrix(
            rows.map(|(a, b)| Vector::from(a).zip(Vector::from(b)).into_array())
                .into_array(),
        )
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a reference to the rows of this matrix.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; N]; N] {
        &self.0
    }

    /// Returns a reference to all elements of this matrix in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns a mutable reference to all elements of this matrix in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns row `row` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `N`.
    pub fn row(&self, row: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from(self.0[row])
    }

    /// Returns column `col` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `N`.
    pub fn column(&self, col: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Unpacks this matrix into its row vectors.
    ///
    /// The inverse of [`Matrix::from_rows`].
    pub fn rows(self) -> [Vector<T, N>; N] {
        self.0.map(Vector::from)
    }

    /// Unpacks this matrix into its column vectors.
    ///
    /// The inverse of [`Matrix::from_columns`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.columns(), [vec2(1, 3), vec2(2, 4)]);
    /// ```
    pub fn columns(self) -> [Vector<T, N>; N]
    where
        T: Copy,
    {
        self.transposed().rows()
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Returns a copy of this matrix with rows and columns swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    ///     [6, 7, 8],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3, 6],
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    /// ]));
    /// ```
    pub fn transposed(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Swaps the rows and columns of this matrix in place.
    pub fn transpose(&mut self)
    where
        T: Copy,
    {
        for row in 0..N {
            for col in row + 1..N {
                let tmp = self.0[row][col];
                self.0[row][col] = self.0[col][row];
                self.0[col][row] = tmp;
            }
        }
    }

    /// Returns the matrix product of `self` and `other`.
    ///
    /// Element `(i, j)` of the result is the dot product of row `i` of `self` and column `j` of
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [5, 6],
    ///     [7, 8],
    /// ]);
    /// assert_eq!(a.dot(b), Matrix::from_rows([
    ///     [19, 22],
    ///     [43, 50],
    /// ]));
    /// ```
    pub fn dot(self, other: Self) -> Self
    where
        T: Number,
    {
        Self::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self.0[i][k] * other.0[k][j]))
    }

    /// Multiplies `self` with `vector`, interpreted as a column vector (`M·v`).
    ///
    /// See [`Vector::mul_matrix`] for the row orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(m.mul_vector(vec2(1, 1)), vec2(3, 7));
    /// ```
    pub fn mul_vector(self, vector: Vector<T, N>) -> Vector<T, N>
    where
        T: Number,
    {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, k| acc + self.0[row][k] * vector[k]))
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 0],
    /// ]));
    /// ```
    pub fn resize<const M: usize>(self) -> Matrix<T, M>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < N && col < N {
                self.0[row][col]
            } else {
                T::ZERO
            }
        })
    }

    /// Adds one to every element, returning the updated matrix.
    pub fn increment(&mut self) -> Self
    where
        T: One + Add<Output = T> + Copy,
    {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = *elem + T::ONE);
        *self
    }

    /// Adds one to every element, returning the matrix as it was before.
    pub fn post_increment(&mut self) -> Self
    where
        T: One + Add<Output = T> + Copy,
    {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every element, returning the updated matrix.
    pub fn decrement(&mut self) -> Self
    where
        T: One + Sub<Output = T> + Copy,
    {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = *elem - T::ONE);
        *self
    }

    /// Subtracts one from every element, returning the matrix as it was before.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + Sub<Output = T> + Copy,
    {
        let old = *self;
        self.decrement();
        old
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
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

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    #[inline]
    fn from(rows: [[T; N]; N]) -> Self {
        Self(rows)
    }
}

impl<T, const N: usize> From<Matrix<T, N>> for [[T; N]; N] {
    #[inline]
    fn from(mat: Matrix<T, N>) -> Self {
        mat.0
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}
