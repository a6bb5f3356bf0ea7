//! Error type shared by all fallible operations.

use thiserror::Error;

/// Errors returned by fallible vector and matrix operations.
///
/// Pure arithmetic never fails; only operations with a division whose divisor can be zero
/// (inversion, normalization), constructors that take runtime-sized input, and text parsing
/// return this type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to invert a matrix whose determinant is zero.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// Attempted to normalize a vector of length zero.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// Attempted a sum-normalization of a vector whose components add up to zero.
    #[error("cannot normalize a vector whose components sum to zero")]
    ZeroSum,

    /// A slice or token list had the wrong number of elements.
    #[error("expected {expected} values, found {found}")]
    LengthMismatch {
        /// Number of scalars the target type holds.
        expected: usize,
        /// Number of scalars that were supplied.
        found: usize,
    },

    /// A scalar token could not be parsed.
    #[error("invalid value {token:?} at position {index}: {reason}")]
    Parse {
        /// 0-based position of the token within the value being read.
        index: usize,
        /// The offending token.
        token: String,
        /// Message of the scalar type's parse error.
        reason: String,
    },

    /// The input stream ended in the middle of a value.
    #[error("unexpected end of input: expected {expected} values, found {found}")]
    UnexpectedEof {
        /// Number of scalars the target type holds.
        expected: usize,
        /// Number of scalars read before the stream ended.
        found: usize,
    },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`][std::result::Result] defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
