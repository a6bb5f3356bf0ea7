//! Small, generic linear algebra: fixed-size vectors and square matrices.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an `N`-element vector, with the aliases [`Vec2`], [`Vec3`] and [`Vec4`]
//!   for the common sizes. Vectors with up to 4 elements also expose them as `x`, `y`, `z`, `w`.
//! - [`Matrix<T, N>`] is a square, row-major `N`x`N` matrix, with the aliases [`Mat2`], [`Mat3`]
//!   and [`Mat4`].
//! - The [`convert`] module converts between the fixed sizes.
//! - The [`text`] module implements the whitespace-separated text format used by the
//!   [`Display`][std::fmt::Display] and [`FromStr`][std::str::FromStr] impls, as well as
//!   [`TextReader`] for reading values from streams.
//!
//! Every operation is written once, for any `N`. Determinants and inverses additionally have
//! closed-form versions for sizes 2 to 4, which produce the same results as the general algorithm.
//!
//! ```
//! use linmath::*;
//!
//! let v = vec3(1.0, 0.0, 0.0);
//! assert_eq!(v.cross(Vec3::Y), Vec3::Z);
//!
//! let m = Matrix::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! assert_eq!(m.transposed(), Matrix::from_rows([
//!     [1.0, 3.0],
//!     [2.0, 4.0],
//! ]));
//! assert_eq!(m.dot(m.inversed()?), Mat2::IDENTITY);
//! # Ok::<_, Error>(())
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices and vectors, further
//!   simplifying their API.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Keep element-wise operations and algebraic products apart: `*` is always element-wise, the
//!   matrix product is [`Matrix::dot`], and products of matrices and vectors are named by their
//!   orientation ([`Matrix::mul_vector`] and [`Vector::mul_matrix`]).
//! - Report domain errors (singular matrices, zero-length vectors) as [`Error`]s instead of
//!   silently producing infinities or NaNs.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! # Crate Features
//!
//! - `bytemuck` (enabled by default): implements `Pod` and `Zeroable` for vectors and matrices.
//! - `approx` (enabled by default): implements the approximate equality traits of the [`approx`]
//!   crate for vectors and matrices.
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/
//! [`approx`]: https://docs.rs/approx

#[cfg(feature = "approx")]
mod approx_eq;
pub mod convert;
mod error;
mod matrix;
pub mod text;
mod traits;
mod vector;

pub use error::{Error, Result};
pub use matrix::*;
pub use text::TextReader;
pub use traits::*;
pub use vector::*;
