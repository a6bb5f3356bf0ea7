//! Determinants, adjugates and inverses.
//!
//! Sizes up to 4x4 use closed-form expressions. Larger matrices use fraction-free (Bareiss)
//! elimination, which takes O(N³) steps and only ever performs exact divisions, so integer
//! matrices get exact results too.

use crate::{traits::Number, Error, Matrix, Result};

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// The determinant of the empty 0x0 matrix is 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [-2, -1,  2],
    ///     [ 2,  1,  4],
    ///     [-3,  3, -1],
    /// ]);
    /// assert_eq!(mat.determinant(), 54);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        match N {
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            3 => {
                let m = |row: usize, col: usize| self[(row, col)];
                m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                    - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                    + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
            }
            4 => {
                let (s, c) = self.block_minors();
                s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
            }
            _ => self.leading_determinant(N),
        }
    }

    /// Returns the cofactor of the element at `(row, col)`.
    ///
    /// That is the determinant of the matrix with `row` and `col` removed, negated if `row + col`
    /// is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than `N`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "position ({row}, {col}) out of range for a {N}x{N} matrix"
        );
        let minor = self.leading_minor(N, row, col).leading_determinant(N - 1);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields the identity matrix scaled by the
    /// determinant. Unlike the inverse, the adjugate always exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.adjugate(), Matrix::from_rows([
    ///     [ 4, -2],
    ///     [-3,  1],
    /// ]));
    /// assert_eq!(mat.dot(mat.adjugate()), Mat2::IDENTITY * mat.determinant());
    /// ```
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let m = |row: usize, col: usize| self[(row, col)];
        match N {
            0 => *self,
            1 => Self::ONE,
            2 => {
                #[rustfmt::skip]
                let adj = [
                    [ m(1, 1), -m(0, 1)],
                    [-m(1, 0),  m(0, 0)],
                ];
                Self::from_fn(|row, col| adj[row][col])
            }
            3 => Self::from_fn(|row, col| {
                // For 3x3 matrices, cyclic index order already yields the cofactor's sign.
                let (r1, r2) = ((col + 1) % 3, (col + 2) % 3);
                let (c1, c2) = ((row + 1) % 3, (row + 2) % 3);
                m(r1, c1) * m(r2, c2) - m(r1, c2) * m(r2, c1)
            }),
            4 => {
                let (s, c) = self.block_minors();

                #[rustfmt::skip]
                let adj = [
                    [
                         m(1, 1) * c[5] - m(1, 2) * c[4] + m(1, 3) * c[3],
                        -m(0, 1) * c[5] + m(0, 2) * c[4] - m(0, 3) * c[3],
                         m(3, 1) * s[5] - m(3, 2) * s[4] + m(3, 3) * s[3],
                        -m(2, 1) * s[5] + m(2, 2) * s[4] - m(2, 3) * s[3],
                    ],
                    [
                        -m(1, 0) * c[5] + m(1, 2) * c[2] - m(1, 3) * c[1],
                         m(0, 0) * c[5] - m(0, 2) * c[2] + m(0, 3) * c[1],
                        -m(3, 0) * s[5] + m(3, 2) * s[2] - m(3, 3) * s[1],
                         m(2, 0) * s[5] - m(2, 2) * s[2] + m(2, 3) * s[1],
                    ],
                    [
                         m(1, 0) * c[4] - m(1, 1) * c[2] + m(1, 3) * c[0],
                        -m(0, 0) * c[4] + m(0, 1) * c[2] - m(0, 3) * c[0],
                         m(3, 0) * s[4] - m(3, 1) * s[2] + m(3, 3) * s[0],
                        -m(2, 0) * s[4] + m(2, 1) * s[2] - m(2, 3) * s[0],
                    ],
                    [
                        -m(1, 0) * c[3] + m(1, 1) * c[1] - m(1, 2) * c[0],
                         m(0, 0) * c[3] - m(0, 1) * c[1] + m(0, 2) * c[0],
                        -m(3, 0) * s[3] + m(3, 1) * s[1] - m(3, 2) * s[0],
                         m(2, 0) * s[3] - m(2, 1) * s[1] + m(2, 2) * s[0],
                    ],
                ];
                Self::from_fn(|row, col| adj[row][col])
            }
            _ => match self.eliminate() {
                Some((_, adj)) => adj,
                // Singular: elimination breaks down, but the adjugate may still be nonzero.
                None => Self::from_fn(|row, col| self.cofactor(col, row)),
            },
        }
    }

    /// Returns the inverse of this matrix.
    ///
    /// The inverse is computed as the adjugate divided by the determinant. For integer matrices,
    /// this only yields the exact inverse if the determinant is 1 or -1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_eq!(mat.inversed()?, Matrix::from_rows([
    ///     [ 0.6, -0.7],
    ///     [-0.2,  0.4],
    /// ]));
    ///
    /// assert!(Mat3f::ZERO.inversed().is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn inversed(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("refusing to invert a singular {N}x{N} matrix");
            return Err(Error::SingularMatrix);
        }
        Ok(self.adjugate().map(|elem| elem / det))
    }

    /// Inverts this matrix in place.
    ///
    /// On error, `self` is left unchanged. See [`Matrix::inversed`].
    pub fn inverse(&mut self) -> Result<()> {
        *self = self.inversed()?;
        Ok(())
    }

    /// Computes the six 2x2 minors of the top two rows (`s`) and of the bottom two rows (`c`) of
    /// a 4x4 matrix.
    ///
    /// Minor `k` of each set uses the column pairs `(0,1) (0,2) (0,3) (1,2) (1,3) (2,3)`.
    fn block_minors(&self) -> ([T; 6], [T; 6]) {
        const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let minor = |top: usize, (a, b): (usize, usize)| {
            self[(top, a)] * self[(top + 1, b)] - self[(top, b)] * self[(top + 1, a)]
        };
        (PAIRS.map(|pair| minor(0, pair)), PAIRS.map(|pair| minor(2, pair)))
    }

    /// Returns the determinant of the top-left `n`x`n` block, using fraction-free elimination.
    ///
    /// Intermediate values are products of two minors, so integer matrices need headroom beyond
    /// the determinant itself. Pivots are only checked against zero, so this is no substitute for
    /// a pivoting LU decomposition when working with ill-conditioned floating-point matrices.
    fn leading_determinant(&self, n: usize) -> T {
        if n == 0 {
            return T::ONE;
        }

        let mut m = self.0;
        let mut negate = false;
        let mut prev = T::ONE;
        for k in 0..n - 1 {
            if m[k][k] == T::ZERO {
                match (k + 1..n).find(|&row| m[row][k] != T::ZERO) {
                    Some(pivot) => {
                        m.swap(k, pivot);
                        negate = !negate;
                    }
                    None => return T::ZERO,
                }
            }
            for i in k + 1..n {
                for j in k + 1..n {
                    m[i][j] = (m[i][j] * m[k][k] - m[i][k] * m[k][j]) / prev;
                }
            }
            prev = m[k][k];
        }

        if negate {
            -m[n - 1][n - 1]
        } else {
            m[n - 1][n - 1]
        }
    }

    /// Runs fraction-free Gauss-Jordan elimination on `[self | I]`, returning the determinant
    /// and the adjugate.
    ///
    /// After eliminating column `k`, the left block is `det * I` and the right block is the
    /// adjugate (both negated if an odd number of rows were swapped). Returns `None` if the
    /// matrix is singular.
    fn eliminate(&self) -> Option<(T, Self)> {
        let (mut a, mut b) = (self.0, Self::IDENTITY.0);
        let mut negate = false;
        let mut prev = T::ONE;
        for k in 0..N {
            if a[k][k] == T::ZERO {
                let pivot = (k + 1..N).find(|&row| a[row][k] != T::ZERO)?;
                a.swap(k, pivot);
                b.swap(k, pivot);
                negate = !negate;
            }

            let (pivot_a, pivot_b) = (a[k], b[k]);
            let pivot = pivot_a[k];
            for i in (0..N).filter(|&i| i != k) {
                let factor = a[i][k];
                for j in 0..N {
                    a[i][j] = (pivot * a[i][j] - factor * pivot_a[j]) / prev;
                    b[i][j] = (pivot * b[i][j] - factor * pivot_b[j]) / prev;
                }
            }
            prev = pivot;
        }

        let adj = Self(b);
        if negate {
            Some((-prev, -adj))
        } else {
            Some((prev, adj))
        }
    }

    /// Copies the top-left `n`x`n` block, minus `row` and `col`, into the top-left corner of a
    /// copy of `self`.
    fn leading_minor(&self, n: usize, row: usize, col: usize) -> Self {
        let mut minor = *self;
        for r in 0..n - 1 {
            let src_r = if r < row { r } else { r + 1 };
            for c in 0..n - 1 {
                let src_c = if c < col { c } else { c + 1 };
                minor.0[r][c] = self.0[src_r][src_c];
            }
        }
        minor
    }
}
