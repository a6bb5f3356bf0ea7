use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the scalar contract of every algebraic operation in this crate (dot products,
/// determinants, inverses, transforms). Element-wise operators are bounded on the individual
/// operator traits instead, so they also work for types that aren't [`Number`]s (like unsigned
/// integers, which lack [`Neg`][ops::Neg]).
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed by the rotation builders.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes sine and cosine of `self` (in radians) at once.
    fn sin_cos(self) -> (Self, Self);
    /// Converts an angle in degrees to radians (`self * π / 180`).
    fn to_radians(self) -> Self;
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                #[inline]
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    $types::cos(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    $types::sin_cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    self * std::$types::consts::PI / 180.0
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(<i32 as Zero>::ZERO, 0);
        assert_eq!(<u8 as One>::ONE, 1);
        assert_eq!(<f64 as One>::ONE, 1.0);
    }

    #[test]
    fn degrees() {
        assert!((Trig::to_radians(180.0f64) - std::f64::consts::PI).abs() < 1e-12);
        assert!((Trig::to_radians(90.0f32) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(Trig::to_radians(0.0f32), 0.0);
    }
}
