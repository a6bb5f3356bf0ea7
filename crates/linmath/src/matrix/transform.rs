//! Builders for affine transformation matrices.
//!
//! All transforms are meant to be applied to *row* vectors via [`Vector::mul_matrix`], so a
//! translation lives in the last row, and transforms compose left to right: `a.dot(b)` applies
//! `a` first, then `b`. Positive angles rotate counterclockwise (when looking down the rotation
//! axis towards the origin).
//!
//! [`Vector::mul_matrix`]: crate::Vector::mul_matrix

use crate::{
    traits::{Number, Trig},
    Matrix,
};

impl<T: Number + Trig> Matrix<T, 2> {
    /// Creates a 2x2 matrix rotating the XY plane by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let rot = Mat2::rotation(std::f64::consts::FRAC_PI_2);
    /// assert!((Vec2::X.mul_matrix(rot) - Vec2::Y).length() < 1e-15);
    /// ```
    pub fn rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();

        #[rustfmt::skip]
        let rot = Self::from_rows([
            [ c, s],
            [-s, c],
        ]);
        rot
    }

    /// Creates a 2x2 matrix rotating the XY plane by `degrees`.
    pub fn rotation_degrees(degrees: T) -> Self {
        Self::rotation(degrees.to_radians())
    }
}

impl<T: Number> Matrix<T, 2> {
    /// Creates a 2x2 matrix scaling X by `sx` and Y by `sy`.
    pub fn scale(sx: T, sy: T) -> Self {
        Self::from_diagonal([sx, sy])
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Creates a 3x3 matrix translating homogeneous 2D points by `(tx, ty)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let point = vec3(1, 2, 1);
    /// assert_eq!(point.mul_matrix(Mat3::translation(10, 20)), vec3(11, 22, 1));
    /// ```
    pub fn translation(tx: T, ty: T) -> Self {
        #[rustfmt::skip]
        let mat = Self::from_rows([
            [T::ONE,  T::ZERO, T::ZERO],
            [T::ZERO, T::ONE,  T::ZERO],
            [tx,      ty,      T::ONE],
        ]);
        mat
    }

    /// Creates a 3x3 matrix scaling homogeneous 2D points by `(sx, sy)`.
    pub fn scale(sx: T, sy: T) -> Self {
        Self::from_diagonal([sx, sy, T::ONE])
    }
}

impl<T: Number + Trig> Matrix<T, 3> {
    /// Creates a 3x3 matrix rotating homogeneous 2D points about the origin by `radians`.
    pub fn rotation(radians: T) -> Self {
        Matrix::<T, 2>::rotation(radians).extend_affine()
    }

    /// Creates a 3x3 matrix rotating homogeneous 2D points about the origin by `degrees`.
    pub fn rotation_degrees(degrees: T) -> Self {
        Self::rotation(degrees.to_radians())
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Creates a 4x4 matrix translating homogeneous 3D points by `(tx, ty, tz)`.
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let mut mat = Self::IDENTITY;
        mat[(3, 0)] = tx;
        mat[(3, 1)] = ty;
        mat[(3, 2)] = tz;
        mat
    }

    /// Creates a 4x4 matrix scaling homogeneous 3D points by `(sx, sy, sz)`.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Self::from_diagonal([sx, sy, sz, T::ONE])
    }
}

impl<T: Number + Trig> Matrix<T, 4> {
    /// Creates a 4x4 matrix rotating about the X axis by `radians`.
    ///
    /// Positive angles rotate Y towards Z.
    pub fn rotation_x(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let rot = Self::from_rows([
            [l,  o, o, o],
            [o,  c, s, o],
            [o, -s, c, o],
            [o,  o, o, l],
        ]);
        rot
    }

    /// Creates a 4x4 matrix rotating about the Y axis by `radians`.
    ///
    /// Positive angles rotate Z towards X.
    pub fn rotation_y(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let rot = Self::from_rows([
            [c, o, -s, o],
            [o, l,  o, o],
            [s, o,  c, o],
            [o, o,  o, l],
        ]);
        rot
    }

    /// Creates a 4x4 matrix rotating about the Z axis by `radians`.
    ///
    /// Positive angles rotate X towards Y.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let rot = Mat4::rotation_z(std::f64::consts::FRAC_PI_2);
    /// assert!((Vec4::X.mul_matrix(rot) - Vec4::Y).length() < 1e-15);
    /// ```
    pub fn rotation_z(radians: T) -> Self {
        Matrix::<T, 2>::rotation(radians)
            .extend_affine::<3>()
            .extend_affine::<4>()
    }

    /// Creates a 4x4 matrix rotating about the X axis by `degrees`.
    pub fn rotation_x_degrees(degrees: T) -> Self {
        Self::rotation_x(degrees.to_radians())
    }

    /// Creates a 4x4 matrix rotating about the Y axis by `degrees`.
    pub fn rotation_y_degrees(degrees: T) -> Self {
        Self::rotation_y(degrees.to_radians())
    }

    /// Creates a 4x4 matrix rotating about the Z axis by `degrees`.
    pub fn rotation_z_degrees(degrees: T) -> Self {
        Self::rotation_z(degrees.to_radians())
    }
}

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Embeds `self` into the top-left corner of a matrix one size larger, with a 1 in the new
    /// bottom-right corner (and zeroes in the rest of the new row and column).
    fn extend_affine<const M: usize>(self) -> Matrix<T, M> {
        debug_assert_eq!(M, N + 1);
        let mut mat = self.resize::<M>();
        mat[(N, N)] = T::ONE;
        mat
    }
}

#[cfg(all(test, feature = "approx"))]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec2, vec3, vec4, Mat2, Mat3, Mat4, Vec3, Vec4};

    #[test]
    fn rotation_2d() {
        let rot = Mat2::rotation(FRAC_PI_2);
        assert_abs_diff_eq!(vec2(1.0, 0.0).mul_matrix(rot), vec2(0.0, 1.0), epsilon = 1e-15);
        assert_abs_diff_eq!(vec2(0.0, 1.0).mul_matrix(rot), vec2(-1.0, 0.0), epsilon = 1e-15);

        assert_eq!(Mat2::rotation(0.0), Mat2::IDENTITY);
        assert_relative_eq!(
            Mat2::rotation_degrees(30.0),
            Mat2::rotation(PI / 6.0),
            epsilon = 1e-12
        );

        // Rotations are orthogonal.
        let rot = Mat2::rotation(0.4);
        assert_relative_eq!(rot.inversed().unwrap(), rot.transposed(), epsilon = 1e-15);
        assert_relative_eq!(rot.determinant(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn affine_2d() {
        let point = vec3(1.0, 1.0, 1.0);
        let moved = point.mul_matrix(Mat3::translation(2.0, -1.0));
        assert_eq!(moved, vec3(3.0, 0.0, 1.0));
        assert_eq!(point.mul_matrix(Mat3::scale(2.0, 3.0)), vec3(2.0, 3.0, 1.0));

        // Directions (w = 0) are unaffected by translation.
        let dir = vec3(1.0, 1.0, 0.0);
        assert_eq!(dir.mul_matrix(Mat3::translation(5.0, 5.0)), dir);

        let rot = Mat3::rotation_degrees(90.0);
        assert_abs_diff_eq!(Vec3::X.mul_matrix(rot), Vec3::Y, epsilon = 1e-15);
        assert_eq!(rot[(2, 2)], 1.0);
    }

    #[test]
    fn compose_left_to_right() {
        // Rotate first, then translate.
        let transform = Mat3::rotation(FRAC_PI_2).dot(Mat3::translation(10.0, 0.0));
        let point = vec3(1.0, 0.0, 1.0);
        assert_abs_diff_eq!(point.mul_matrix(transform), vec3(10.0, 1.0, 1.0), epsilon = 1e-12);

        // Translate first, then rotate.
        let transform = Mat3::translation(10.0, 0.0).dot(Mat3::rotation(FRAC_PI_2));
        assert_abs_diff_eq!(point.mul_matrix(transform), vec3(0.0, 11.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn affine_3d() {
        let point = vec4(1, 2, 3, 1);
        assert_eq!(
            point.mul_matrix(Mat4::translation(10, 20, 30)),
            vec4(11, 22, 33, 1)
        );
        assert_eq!(point.mul_matrix(Mat4::scale(2, 3, 4)), vec4(2, 6, 12, 1));
        assert_eq!(Mat4::translation(1, 2, 3).row(3), vec4(1, 2, 3, 1));
    }

    #[test]
    fn rotation_3d() {
        let x = Mat4::rotation_x(FRAC_PI_2);
        let y = Mat4::rotation_y(FRAC_PI_2);
        let z = Mat4::rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(Vec4::Y.mul_matrix(x), Vec4::Z, epsilon = 1e-15);
        assert_abs_diff_eq!(Vec4::Z.mul_matrix(y), Vec4::X, epsilon = 1e-15);
        assert_abs_diff_eq!(Vec4::X.mul_matrix(z), Vec4::Y, epsilon = 1e-15);

        // The rotation axis is fixed.
        assert_eq!(Vec4::X.mul_matrix(x), Vec4::X);
        assert_eq!(Vec4::Y.mul_matrix(y), Vec4::Y);
        assert_eq!(Vec4::Z.mul_matrix(z), Vec4::Z);

        let eps = 1e-12;
        assert_relative_eq!(Mat4::rotation_y_degrees(45.0), Mat4::rotation_y(PI / 4.0), epsilon = eps);
        assert_relative_eq!(Mat4::rotation_x_degrees(-60.0), Mat4::rotation_x(-PI / 3.0), epsilon = eps);
        assert_relative_eq!(Mat4::rotation_z_degrees(180.0), Mat4::rotation_z(PI), epsilon = eps);
        assert_relative_eq!(
            Mat4::rotation_z(0.7).dot(Mat4::rotation_z(-0.7)),
            Mat4::IDENTITY,
            epsilon = 1e-15
        );
    }

    #[test]
    fn rotation_3d_is_proper() {
        for angle in [0.5, -1.25, 3.0] {
            for rot in [
                Mat4::rotation_x(angle),
                Mat4::rotation_y(angle),
                Mat4::rotation_z(angle),
            ] {
                assert_relative_eq!(rot.determinant(), 1.0, epsilon = 1e-12);
                assert_eq!(rot.row(3), Vec4::W);
                assert_eq!(rot.column(3), Vec4::W);
                assert_relative_eq!(rot.inversed().unwrap(), rot.transposed(), epsilon = 1e-12);
            }
        }

        let rot = Mat4::rotation_z(0.5);
        assert_eq!(rot.row(2), Vec4::Z);
        assert_eq!(Vec4::Z.mul_matrix(rot), Vec4::Z);
    }
}
