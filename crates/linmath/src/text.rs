//! Whitespace-separated text format.
//!
//! Vectors are written as their elements separated by single spaces. Matrices are written one row
//! per line, in the same format. Any formatting flags (like precision) apply to every element:
//!
//! ```
//! # use linmath::*;
//! assert_eq!(vec3(1, 2, 3).to_string(), "1 2 3");
//! assert_eq!(format!("{:.1}", vec2(0.26, 1.0)), "0.3 1.0");
//! assert_eq!(Mat2::<i32>::IDENTITY.to_string(), "1 0\n0 1");
//! ```
//!
//! Reading accepts any whitespace (including newlines) between elements. [`FromStr`] requires the
//! string to contain exactly the right number of elements, while [`TextReader`] consumes elements
//! from a stream and can read several values in a row. Failed reads never produce a partially
//! filled value.

use std::{fmt, io::BufRead, str::FromStr};

use crate::{Error, Matrix, Result, Vector};

fn write_elems<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elems: &[T]) -> fmt::Result {
    for (i, elem) in elems.iter().enumerate() {
        if i != 0 {
            f.write_str(" ")?;
        }
        fmt::Display::fmt(elem, f)?;
    }
    Ok(())
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elems(f, self.as_slice())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.as_rows().iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write_elems(f, row)?;
        }
        Ok(())
    }
}

fn parse_token<T>(index: usize, token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    token.parse().map_err(|e: T::Err| {
        log::debug!("failed to parse value {index} ({token:?}): {e}");
        Error::Parse {
            index,
            token: token.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Parses all whitespace-separated tokens in `s`, which must contain exactly `expected` of them.
fn parse_exact<T>(s: &str, expected: usize) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let found = s.split_whitespace().count();
    if found != expected {
        log::debug!("expected {expected} values, found {found}");
        return Err(Error::LengthMismatch { expected, found });
    }
    s.split_whitespace()
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect()
}

fn into_vector<T, const N: usize>(values: Vec<T>) -> Result<Vector<T, N>> {
    <[T; N]>::try_from(values)
        .map(Vector::from)
        .map_err(|values| Error::LengthMismatch {
            expected: N,
            found: values.len(),
        })
}

fn into_matrix<T, const N: usize>(rows: Vec<[T; N]>) -> Result<Matrix<T, N>> {
    <[[T; N]; N]>::try_from(rows)
        .map(Matrix::from)
        .map_err(|rows| Error::LengthMismatch {
            expected: N * N,
            found: rows.len() * N,
        })
}

/// Parses `N` whitespace-separated elements.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let v: Vec3<f32> = " 1.5  -2\n3 ".parse()?;
/// assert_eq!(v, vec3(1.5, -2.0, 3.0));
///
/// assert!("1 2".parse::<Vec3<f32>>().is_err());
/// assert!("1 x 3".parse::<Vec3<f32>>().is_err());
/// # Ok::<_, Error>(())
/// ```
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        into_vector(parse_exact(s, N)?)
    }
}

/// Parses `N * N` whitespace-separated elements in row-major order.
///
/// Line breaks are not required to match the row boundaries.
impl<T, const N: usize> FromStr for Matrix<T, N>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut values = parse_exact(s, N * N)?.into_iter();
        let rows = (0..N)
            .map(|_| into_vector::<T, N>(values.by_ref().take(N).collect()).map(Vector::into_array))
            .collect::<Result<Vec<_>>>()?;
        into_matrix(rows)
    }
}

/// Reads vectors, matrices and scalars in the text format from a [`BufRead`] stream.
///
/// Elements are whitespace-separated tokens. Values do not need to be on their own line, and a
/// single value may span multiple lines.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// use std::io::Cursor;
///
/// let input = "1 2\n3 4\n5 6 7\n";
/// let mut reader = TextReader::new(Cursor::new(input));
/// let mat: Mat2<i32> = reader.read_matrix()?;
/// let vec: Vec3<i32> = reader.read_vector()?;
/// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
/// assert_eq!(vec, vec3(5, 6, 7));
/// assert!(reader.read_scalar::<i32>().is_err());
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug)]
pub struct TextReader<R> {
    reader: R,
    line: String,
    /// Byte offset of the unconsumed part of `line`.
    pos: usize,
}

impl<R: BufRead> TextReader<R> {
    /// Creates a [`TextReader`] pulling text from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Returns the underlying reader.
    ///
    /// Any part of the current line that hasn't been consumed yet is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads a single scalar.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnexpectedEof`] if the stream has no more tokens, [`Error::Parse`] if
    /// the token is not a valid `T`, and [`Error::Io`] if the underlying reader fails.
    pub fn read_scalar<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let [value] = self.read_array(0, 1)?;
        Ok(value)
    }

    /// Reads the `N` elements of a vector.
    ///
    /// See [`TextReader::read_scalar`] for possible errors.
    pub fn read_vector<T, const N: usize>(&mut self) -> Result<Vector<T, N>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.read_array(0, N).map(Vector::from)
    }

    /// Reads the `N * N` elements of a matrix in row-major order.
    ///
    /// See [`TextReader::read_scalar`] for possible errors.
    pub fn read_matrix<T, const N: usize>(&mut self) -> Result<Matrix<T, N>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut rows = Vec::with_capacity(N);
        for row in 0..N {
            rows.push(self.read_array::<T, N>(row * N, N * N)?);
        }
        into_matrix(rows)
    }

    /// Reads `N` elements that start at index `offset` of a value holding `total` elements.
    fn read_array<T, const N: usize>(&mut self, offset: usize, total: usize) -> Result<[T; N]>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut values = Vec::with_capacity(N);
        while values.len() < N {
            let index = offset + values.len();
            let Some(token) = self.next_token()? else {
                log::debug!("input ended after {index} of {total} values");
                return Err(Error::UnexpectedEof {
                    expected: total,
                    found: index,
                });
            };
            values.push(parse_token(index, &token)?);
        }
        into_vector(values).map(Vector::into_array)
    }

    /// Returns the next whitespace-delimited token, reading more lines as needed.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = self.line[self.pos..].trim_start();
            if !rest.is_empty() {
                let start = self.line.len() - rest.len();
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                self.pos = start + len;
                return Ok(Some(self.line[start..self.pos].to_string()));
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{vec2, vec3, vec4, Mat2, Mat3, Mat3f, Vec2, Vec3, Vec4f};

    #[test]
    fn display_vector() {
        assert_eq!(vec3(1, -2, 3).to_string(), "1 -2 3");
        assert_eq!(vec2(0.5, 2.0).to_string(), "0.5 2");
        assert_eq!(format!("{:.2}", vec2(1.0, 2.5)), "1.00 2.50");
        assert_eq!(format!("{:>2}", vec2(1, 2)), " 1  2");
    }

    #[test]
    fn display_matrix() {
        assert_eq!(Mat3::<i32>::IDENTITY.to_string(), "1 0 0\n0 1 0\n0 0 1");
        assert_eq!(
            format!("{:.1}", Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]])),
            "1.0 2.0\n3.0 4.0"
        );
    }

    #[test]
    fn parse() {
        assert_eq!("4 5".parse::<Vec2<i32>>().unwrap(), vec2(4, 5));
        assert_eq!(
            "1 2\n3 4".parse::<Mat2<u8>>().unwrap(),
            Mat2::from_rows([[1, 2], [3, 4]])
        );
        assert_eq!(
            "1 2 3 4".parse::<Mat2<u8>>().unwrap(),
            Mat2::from_rows([[1, 2], [3, 4]])
        );
    }

    #[test]
    fn parse_owned_elements() {
        let mat = "a b\nc d".parse::<Mat2<String>>().unwrap();
        assert_eq!(mat[(0, 1)], "b");
        assert_eq!(mat[(1, 0)], "c");
        assert_eq!(mat, Mat2::from_slice(&["a", "b", "c", "d"].map(String::from)).unwrap());

        let v = "x y z".parse::<Vec3<String>>().unwrap();
        assert_eq!(v, Vec3::from_slice(&["x", "y", "z"].map(String::from)).unwrap());
    }

    #[test]
    fn parse_errors() {
        let err = "1 2 3 4 5".parse::<Vec4f>().unwrap_err();
        assert!(
            matches!(
                err,
                Error::LengthMismatch {
                    expected: 4,
                    found: 5
                }
            ),
            "{err}"
        );

        let err = "1 2 three".parse::<Vec3<i32>>().unwrap_err();
        match err {
            Error::Parse { index, token, .. } => {
                assert_eq!(index, 2);
                assert_eq!(token, "three");
            }
            _ => panic!("unexpected error {err:?}"),
        }

        assert!("".parse::<Mat2<f32>>().is_err());
    }

    #[test]
    fn identity_roundtrip() {
        let text = Mat3f::IDENTITY.to_string();
        assert_eq!(text.parse::<Mat3f>().unwrap(), Mat3f::IDENTITY);
    }

    #[test]
    fn float_roundtrip() {
        let v = vec4(0.1f64, -1.0 / 3.0, 1e-300, 12345.678);
        assert_eq!(v.to_string().parse::<Vector<f64, 4>>().unwrap(), v);
    }

    #[test]
    fn reader_spans_lines() {
        let mut reader = TextReader::new(Cursor::new("  1\n\n 2 3 4\n  \t5\n6"));
        assert_eq!(reader.read_vector::<i32, 2>().unwrap(), vec2(1, 2));
        assert_eq!(reader.read_scalar::<i32>().unwrap(), 3);
        assert_eq!(reader.read_vector::<i32, 3>().unwrap(), vec3(4, 5, 6));
        assert!(matches!(
            reader.read_scalar::<i32>(),
            Err(Error::UnexpectedEof {
                expected: 1,
                found: 0
            })
        ));
    }

    #[test]
    fn reader_eof() {
        let mut reader = TextReader::new(Cursor::new("1 2 3\n4 5"));
        let err = reader.read_matrix::<i32, 3>().unwrap_err();
        assert!(
            matches!(
                err,
                Error::UnexpectedEof {
                    expected: 9,
                    found: 5
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn reader_parse_error() {
        let mut reader = TextReader::new(Cursor::new("1.5 nope"));
        let err = reader.read_vector::<f32, 2>().unwrap_err();
        assert!(matches!(err, Error::Parse { index: 1, .. }), "{err}");

        let mut reader = TextReader::new(Cursor::new("1 2
3 -"));
        let err = reader.read_matrix::<f32, 2>().unwrap_err();
        assert!(matches!(err, Error::Parse { index: 3, .. }), "{err}");
    }

    #[test]
    fn reader_io_error() {
        let mut reader = TextReader::new(Cursor::new(&b"1 \xff 2"[..]));
        let err = reader.read_vector::<i32, 2>().unwrap_err();
        assert!(matches!(err, Error::Io(_)), "{err}");
    }

    #[test]
    fn write_then_read() {
        let m = Mat3::from_fn(|row, col| row as i64 * 10 - col as i64);
        let v = vec3(7, 8, 9);
        let text = format!("{m}\n{v}\n");
        let mut reader = TextReader::new(text.as_bytes());
        assert_eq!(reader.read_matrix::<i64, 3>().unwrap(), m);
        assert_eq!(reader.read_vector::<i64, 3>().unwrap(), v);
    }
}
