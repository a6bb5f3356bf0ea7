//! End-to-end usage: the documented example scenarios, error reporting and text I/O.

use std::io::{Cursor, Write};

use linmath::{vec2, vec3, Error, Mat2, Mat3, Mat3f, Mat4, Matrix, TextReader, Vec3, Vec4};

fn init_logger() {
    env_logger::builder()
        .filter_module("linmath", log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn identity_has_unit_determinant() {
    assert_eq!(Mat2::<f64>::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat2::<i32>::IDENTITY.determinant(), 1);
}

#[test]
fn zero_rotation_keeps_point() {
    let point = vec3(1.0, 0.0, 0.0);
    assert_eq!(point.mul_matrix(Mat3::rotation(0.0)), point);
    assert_eq!(point.mul_matrix(Mat3::rotation_degrees(0.0)), point);
    assert_eq!(Mat3::rotation(0.0).mul_vector(point), point);
}

#[test]
fn cross_of_basis_vectors() {
    assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
}

#[test]
fn transpose_2x2() {
    let mat = Mat2::from_slice(&[1, 2, 3, 4]).unwrap();
    assert_eq!(mat.transposed(), Mat2::from_slice(&[1, 3, 2, 4]).unwrap());
}

#[test]
fn length_of_3_4() {
    assert_eq!(vec2(3.0, 4.0).length(), 5.0);
}

#[test]
fn identity_text_roundtrip() -> anyhow::Result<()> {
    let text = Mat3f::IDENTITY.to_string();
    let parsed: Mat3f = text.parse()?;
    assert_eq!(parsed, Mat3f::IDENTITY);
    Ok(())
}

#[test]
fn stream_roundtrip() -> anyhow::Result<()> {
    let transform = Mat4::rotation_z_degrees(30.0).dot(Mat4::translation(1.0, -2.0, 0.5));
    let point = Vec4::<f64>::W;

    let mut out = Vec::new();
    writeln!(out, "{transform}")?;
    writeln!(out, "{point}")?;
    write!(out, "{}", 42)?;

    let mut reader = TextReader::new(Cursor::new(out));
    let transform2: Mat4<f64> = reader.read_matrix()?;
    let point2: Vec4<f64> = reader.read_vector()?;
    let answer: u8 = reader.read_scalar()?;

    assert_eq!(transform2, transform);
    assert_eq!(point2, point);
    assert_eq!(answer, 42);
    let moved = point2.mul_matrix(transform2);
    assert!((moved - Vec4::from([1.0, -2.0, 0.5, 1.0])).length() < 1e-12, "{moved:?}");

    // Rotating about Z keeps the Z axis and the homogeneous row intact.
    assert_eq!(transform2.row(2), Vec4::Z);
    assert_eq!(Vec4::Z.mul_matrix(transform2), Vec4::Z);
    Ok(())
}

#[test]
fn errors_are_reported() {
    init_logger();

    let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    let err = singular.inversed().unwrap_err();
    assert!(matches!(err, Error::SingularMatrix));
    assert_eq!(err.to_string(), "matrix is singular (determinant is zero)");

    let mut zero = Vec3::<f32>::ZERO;
    assert!(matches!(zero.normalize(), Err(Error::ZeroLength)));

    let err = "1 2 x 4".parse::<Mat2<i32>>().unwrap_err();
    assert!(
        err.to_string().starts_with("invalid value \"x\" at position 2"),
        "{err}"
    );

    let err = Vec3::<u8>::from_slice(&[1, 2]).unwrap_err();
    assert_eq!(err.to_string(), "expected 3 values, found 2");
}

#[test]
fn errors_convert_to_anyhow() {
    fn invert(text: &str) -> anyhow::Result<Mat2<f64>> {
        let mat: Mat2<f64> = text.parse()?;
        Ok(mat.inversed()?)
    }

    assert!(invert("2 0 0 2").is_ok());
    assert!(invert("1 1 1 1").is_err());
    assert!(invert("1 1 1").is_err());
}
