//! Conversions between the fixed-size vector and matrix types of different rank.
//!
//! Growing a value keeps the existing elements in place and fills the new ones with zero (vectors
//! also have `_with` variants taking the new elements). Shrinking drops the trailing elements, or
//! the trailing rows and columns.
//!
//! Matrices are converted structurally: the smaller matrix is the top-left block of the larger one.
//! This is *not* a change of basis. In particular, widening an affine transform zeroes the new
//! diagonal element, so homogeneous points no longer keep `w = 1`.
//!
//! All of these are thin wrappers around [`Vector::resize`] and [`Matrix::resize`], which work for
//! any rank.

use crate::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4, Zero};

/// Extends a [`Vec2`] with a zero `z` element.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// use linmath::convert::*;
///
/// assert_eq!(vec2_to_3(vec2(1, 2)), vec3(1, 2, 0));
/// assert_eq!(vec3_to_2(vec2_to_3(vec2(1, 2))), vec2(1, 2));
/// ```
pub fn vec2_to_3<T: Zero>(v: Vec2<T>) -> Vec3<T> {
    v.extend(T::ZERO)
}

/// Extends a [`Vec2`] with the given `z` element.
pub fn vec2_to_3_with<T>(v: Vec2<T>, z: T) -> Vec3<T> {
    v.extend(z)
}

/// Extends a [`Vec2`] with zero `z` and `w` elements.
pub fn vec2_to_4<T: Zero>(v: Vec2<T>) -> Vec4<T> {
    v.resize()
}

/// Extends a [`Vec2`] with the given `z` and `w` elements.
pub fn vec2_to_4_with<T>(v: Vec2<T>, z: T, w: T) -> Vec4<T> {
    v.extend(z).extend(w)
}

/// Extends a [`Vec3`] with a zero `w` element.
pub fn vec3_to_4<T: Zero>(v: Vec3<T>) -> Vec4<T> {
    v.extend(T::ZERO)
}

/// Extends a [`Vec3`] with the given `w` element.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// use linmath::convert::vec3_to_4_with;
///
/// // Homogeneous coordinates of a point.
/// assert_eq!(vec3_to_4_with(vec3(1.0, 2.0, 3.0), 1.0), vec4(1.0, 2.0, 3.0, 1.0));
/// ```
pub fn vec3_to_4_with<T>(v: Vec3<T>, w: T) -> Vec4<T> {
    v.extend(w)
}

/// Drops the `z` element of a [`Vec3`].
pub fn vec3_to_2<T>(v: Vec3<T>) -> Vec2<T> {
    v.truncate()
}

/// Drops the `z` and `w` elements of a [`Vec4`].
pub fn vec4_to_2<T>(v: Vec4<T>) -> Vec2<T> {
    v.truncate().truncate()
}

/// Drops the `w` element of a [`Vec4`].
pub fn vec4_to_3<T>(v: Vec4<T>) -> Vec3<T> {
    v.truncate()
}

/// Places a [`Mat2`] into the top-left corner of an otherwise zero 3x3 matrix.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// use linmath::convert::{mat2_to_3, mat3_to_2};
///
/// let mat = Matrix::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// assert_eq!(mat2_to_3(mat), Matrix::from_rows([
///     [1, 2, 0],
///     [3, 4, 0],
///     [0, 0, 0],
/// ]));
/// assert_eq!(mat3_to_2(mat2_to_3(mat)), mat);
/// ```
pub fn mat2_to_3<T: Zero + Copy>(mat: Mat2<T>) -> Mat3<T> {
    mat.resize()
}

/// Places a [`Mat2`] into the top-left corner of an otherwise zero 4x4 matrix.
pub fn mat2_to_4<T: Zero + Copy>(mat: Mat2<T>) -> Mat4<T> {
    mat.resize()
}

/// Places a [`Mat3`] into the top-left corner of an otherwise zero 4x4 matrix.
pub fn mat3_to_4<T: Zero + Copy>(mat: Mat3<T>) -> Mat4<T> {
    mat.resize()
}

/// Returns the top-left 2x2 block of a [`Mat3`].
pub fn mat3_to_2<T: Zero + Copy>(mat: Mat3<T>) -> Mat2<T> {
    mat.resize()
}

/// Returns the top-left 2x2 block of a [`Mat4`].
pub fn mat4_to_2<T: Zero + Copy>(mat: Mat4<T>) -> Mat2<T> {
    mat.resize()
}

/// Returns the top-left 3x3 block of a [`Mat4`].
pub fn mat4_to_3<T: Zero + Copy>(mat: Mat4<T>) -> Mat3<T> {
    mat.resize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, vec4, Matrix};

    #[test]
    fn vectors() {
        let v = vec2(1, 2);
        assert_eq!(vec2_to_3_with(v, 7), vec3(1, 2, 7));
        assert_eq!(vec2_to_4(v), vec4(1, 2, 0, 0));
        assert_eq!(vec2_to_4_with(v, 7, 8), vec4(1, 2, 7, 8));
        assert_eq!(vec3_to_4(vec3(1, 2, 3)), vec4(1, 2, 3, 0));

        let w = vec4(1, 2, 3, 4);
        assert_eq!(vec4_to_3(w), vec3(1, 2, 3));
        assert_eq!(vec4_to_2(w), v);
        assert_eq!(vec4_to_2(vec2_to_4(v)), v);
        assert_eq!(vec4_to_3(vec3_to_4(vec3(5, 6, 7))), vec3(5, 6, 7));
    }

    #[rustfmt::skip]
    #[test]
    fn matrices() {
        let m3 = Mat3::from_fn(|row, col| row * 3 + col + 1);
        assert_eq!(mat3_to_4(m3), Matrix::from_rows([
            [1, 2, 3, 0],
            [4, 5, 6, 0],
            [7, 8, 9, 0],
            [0, 0, 0, 0],
        ]));
        assert_eq!(mat4_to_3(mat3_to_4(m3)), m3);
        assert_eq!(mat3_to_2(m3), Matrix::from_rows([
            [1, 2],
            [4, 5],
        ]));

        let m2 = mat3_to_2(m3);
        assert_eq!(mat2_to_4(m2), Matrix::from_rows([
            [1, 2, 0, 0],
            [4, 5, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]));
        assert_eq!(mat4_to_2(mat2_to_4(m2)), m2);
        assert_eq!(mat2_to_3(Mat2::<i32>::IDENTITY).trace(), 2);
    }

    #[test]
    fn rotation_block() {
        // The 2D rotation block survives widening; the homogeneous part does not.
        let rot = mat2_to_3(Mat2::rotation(0.0));
        assert_eq!(vec3(1.0, 0.0, 0.0).mul_matrix(rot), vec3(1.0, 0.0, 0.0));
        assert_eq!(vec3(1.0, 0.0, 1.0).mul_matrix(rot), vec3(1.0, 0.0, 0.0));
    }
}
