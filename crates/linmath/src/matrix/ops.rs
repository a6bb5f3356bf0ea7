use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::Matrix;

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Row-major flat indexing.
impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < N * N,
            "index {index} out of range for a {N}x{N} matrix"
        );
        &self.0[index / N][index % N]
    }
}

/// Row-major flat indexing.
impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(
            index < N * N,
            "index {index} out of range for a {N}x{N} matrix"
        );
        &mut self.0[index / N][index % N]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

/// Element-wise negation.
impl<T, const N: usize> Neg for Matrix<T, N>
where
    T: Neg,
{
    type Output = Matrix<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Like vectors, matrices support every arithmetic operator element-wise and with a scalar
// right-hand side. `Mul` is element-wise as well; the matrix product is `Matrix::dot`.
macro_rules! elementwise {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident;)+) => {
        $(
            impl<T, const N: usize> $op<Matrix<T, N>> for Matrix<T, N>
            where
                T: $op,
            {
                type Output = Matrix<T::Output, N>;

                fn $f(self, rhs: Matrix<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$f(r))
                }
            }

            impl<T, const N: usize> $op_assign<Matrix<T, N>> for Matrix<T, N>
            where
                T: $op_assign,
            {
                fn $f_assign(&mut self, rhs: Matrix<T, N>) {
                    self.0
                        .iter_mut()
                        .flatten()
                        .zip(rhs.0.into_iter().flatten())
                        .for_each(|(lhs, rhs)| lhs.$f_assign(rhs));
                }
            }

            impl<T, const N: usize> $op<T> for Matrix<T, N>
            where
                T: $op + Copy,
            {
                type Output = Matrix<T::Output, N>;

                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$f(rhs))
                }
            }

            impl<T, const N: usize> $op_assign<T> for Matrix<T, N>
            where
                T: $op_assign + Copy,
            {
                fn $f_assign(&mut self, rhs: T) {
                    self.0
                        .iter_mut()
                        .flatten()
                        .for_each(|lhs| lhs.$f_assign(rhs));
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
}
