//! Approximate equality via the [`approx`] crate.
//!
//! Vectors and matrices are approximately equal if all of their corresponding elements are, using
//! the same tolerance for every element.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

macro_rules! approx_impls {
    ($($ty:ident),+) => {$(
        impl<T: AbsDiffEq, const N: usize> AbsDiffEq for $ty<T, N>
        where
            T::Epsilon: Clone,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
            }
        }

        impl<T: RelativeEq, const N: usize> RelativeEq for $ty<T, N>
        where
            T::Epsilon: Clone,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
            }
        }

        impl<T: UlpsEq, const N: usize> UlpsEq for $ty<T, N>
        where
            T::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
            }
        }
    )+};
}

approx_impls!(Vector, Matrix);
