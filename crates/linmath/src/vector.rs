use std::{
    array,
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

use crate::{
    traits::{Number, Sqrt},
    Error, Matrix, One, Result, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// Vectors are plain values: copies are independent, every operation without a `&mut self`
/// receiver returns a new vector, and the mutating variants (like [`Vector::normalize`]) exist
/// separately from their pure counterparts (like [`Vector::normalized`]).
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices
///   with [`Vector::from_slice`] (which fails if the slice has the wrong length).
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::ZERO`] and [`Vector::ONE`] have every element set to 0 and 1, respectively.
/// - [`Vector::unit`] creates a basis vector. For vectors with up to 4 dimensions, `Vector::X`,
///   `Vector::Y`, `Vector::Z` and `Vector::W` are provided as constants.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic when the
///   index is out of range. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the
///   underlying elements.
///
/// # Comparison
///
/// `==` compares vectors element-wise. Vectors can additionally be ordered by their length with
/// [`Vector::cmp_length`]; this ordering is deliberately not exposed via [`PartialOrd`], since
/// two different vectors can have the same length.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One, const N: usize> Vector<T, N> {
    /// Returns the basis vector with a 1 at index `axis` and 0 everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vector::<i32, 5>::unit(3), [0, 0, 0, 1, 0]);
    /// assert_eq!(Vec3::<f32>::unit(1), Vec3f::Y);
    /// ```
    pub fn unit(axis: usize) -> Self {
        assert!(
            axis < N,
            "axis {axis} out of range for a {N}-dimensional vector"
        );
        Self::from_fn(|i| if i == axis { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a slice holding exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `values.len()` is not `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3::from_slice(&[1, 2, 3]).unwrap(), vec3(1, 2, 3));
    /// assert!(Vec3::from_slice(&[1, 2]).is_err());
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        if values.len() != N {
            return Err(Error::LengthMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|i| values[i].clone()))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a vector with `M` elements, copying over the first elements of `self`.
    ///
    /// Extra elements are filled with [`T::ZERO`][Zero::ZERO]; elements that don't fit are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<3>(), vec3(1, 2, 3));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero,
    {
        let mut iter = self.0.into_iter();
        Vector::from_fn(|_| iter.next().unwrap_or(T::ZERO))
    }

    /// Returns the sum of all elements.
    pub fn sum(&self) -> T
    where
        T: Number,
    {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the (Euclidean) length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns a copy of `self` divided by its length, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`] if the length of `self` is zero. Non-finite lengths are not
    /// rejected and propagate into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalized()?;
    /// assert_eq!(z, Vec3::Z);
    /// assert!(Vec3f::ZERO.normalized().is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn normalized(self) -> Result<Self>
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length == T::ZERO {
            log::trace!("refusing to normalize a zero-length vector");
            return Err(Error::ZeroLength);
        }
        Ok(self.map(|elem| elem / length))
    }

    /// Divides `self` by its length in place.
    ///
    /// On error, `self` is left unchanged. See [`Vector::normalized`].
    pub fn normalize(&mut self) -> Result<()>
    where
        T: Number + Sqrt,
    {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a copy of `self` divided by the sum of its elements.
    ///
    /// This "linear" normalization is meant for vectors with non-negative elements (for example
    /// weights), whose elements sum to 1 afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSum`] if the elements sum to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec4(1.0, 1.0, 2.0, 0.0).normalized_sum()?, vec4(0.25, 0.25, 0.5, 0.0));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn normalized_sum(self) -> Result<Self>
    where
        T: Number,
    {
        let sum = self.sum();
        if sum == T::ZERO {
            log::trace!("refusing to sum-normalize a vector whose elements sum to zero");
            return Err(Error::ZeroSum);
        }
        Ok(self.map(|elem| elem / sum))
    }

    /// Divides `self` by the sum of its elements in place.
    ///
    /// On error, `self` is left unchanged. See [`Vector::normalized_sum`].
    pub fn normalize_sum(&mut self) -> Result<()>
    where
        T: Number,
    {
        *self = self.normalized_sum()?;
        Ok(())
    }

    /// Compares the lengths of `self` and `other`.
    ///
    /// Squared lengths are compared, which orders identically but needs no square root (and
    /// thus also works for integer vectors).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(vec2(3, 4).cmp_length(&vec2(0, 5)), Some(Ordering::Equal));
    /// assert!(vec2(1, 1).cmp_length(&vec2(0, 2)).unwrap().is_lt());
    /// ```
    pub fn cmp_length(&self, other: &Self) -> Option<Ordering>
    where
        T: Number + PartialOrd,
    {
        self.length2().partial_cmp(&other.length2())
    }

    /// Multiplies `self`, interpreted as a row vector, with `matrix` (`v·M`).
    ///
    /// This is the orientation used when composing transforms left to right, as done by the
    /// transform builders on [`Matrix`]. See [`Matrix::mul_vector`] for the column orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(vec2(1, 1).mul_matrix(m), vec2(4, 6));
    /// ```
    pub fn mul_matrix(self, matrix: Matrix<T, N>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|col| (0..N).fold(T::ZERO, |acc, k| acc + self[k] * matrix[(k, col)]))
    }

    /// Adds one to every element, returning the updated vector.
    pub fn increment(&mut self) -> Self
    where
        T: One + Add<Output = T> + Copy,
    {
        self.0.iter_mut().for_each(|elem| *elem = *elem + T::ONE);
        *self
    }

    /// Adds one to every element, returning the vector as it was before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut v = vec2(1, 5);
    /// assert_eq!(v.post_increment(), vec2(1, 5));
    /// assert_eq!(v, vec2(2, 6));
    /// assert_eq!(v.increment(), vec2(3, 7));
    /// ```
    pub fn post_increment(&mut self) -> Self
    where
        T: One + Add<Output = T> + Copy,
    {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every element, returning the updated vector.
    pub fn decrement(&mut self) -> Self
    where
        T: One + Sub<Output = T> + Copy,
    {
        self.0.iter_mut().for_each(|elem| *elem = *elem - T::ONE);
        *self
    }

    /// Subtracts one from every element, returning the vector as it was before.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + Sub<Output = T> + Copy,
    {
        let old = *self;
        self.decrement();
        old
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, z].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, w].into()
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Swapping the
    /// arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v, [777, 1]);
        v[1] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.get(2), None);
        if let Some(elem) = v.get_mut(0) {
            *elem = 3;
        }
        assert_eq!(v, vec2(3, 9));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range() {
        let v = vec3(1, 2, 3);
        let i = v.as_slice().len();
        let _ = v[i];
    }

    #[test]
    fn factories() {
        assert_eq!(Vec4::<i32>::ZERO, [0, 0, 0, 0]);
        assert_eq!(Vec2::<u8>::ONE, [1, 1]);
        assert_eq!(Vec2::<i32>::X, Vec2::unit(0));
        assert_eq!(Vec4::<i32>::W, Vec4::unit(3));
        assert_eq!(Vector::<i64, 6>::unit(5)[5], 1);
        assert_eq!(Vector::<i64, 6>::unit(5).sum(), 1);
    }

    #[test]
    #[should_panic(expected = "axis 3 out of range")]
    fn unit_out_of_range() {
        Vec3::<f32>::unit(3);
    }

    #[test]
    fn from_slice() {
        assert_eq!(Vec2::from_slice(&[1, 2]).unwrap(), vec2(1, 2));
        let err = Vec4::<f32>::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), vec3(1, 3, -5).length2());

        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);

        let a = vec3(2, -1, 4);
        let b = vec3(-3, 5, 1);
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(vec2(3, 4).length2(), 25);
    }

    #[test]
    fn normalize() {
        let mut v = vec3(2.0, -3.0, 6.0);
        v.normalize().unwrap();
        assert_relative_eq!(v.length(), 1.0);
        #[cfg(feature = "approx")]
        assert_relative_eq!(v, vec3(2.0 / 7.0, -3.0 / 7.0, 6.0 / 7.0));

        let mut zero = Vec2f::ZERO;
        assert!(matches!(zero.normalize(), Err(Error::ZeroLength)));
        assert_eq!(zero, Vec2f::ZERO);
    }

    #[test]
    fn normalize_sum() {
        let mut v = vec3(1.0, 3.0, 4.0);
        v.normalize_sum().unwrap();
        assert_eq!(v, vec3(0.125, 0.375, 0.5));
        assert_eq!(v.sum(), 1.0);

        assert!(matches!(
            vec2(1.0, -1.0).normalized_sum(),
            Err(Error::ZeroSum)
        ));
    }

    #[test]
    fn cmp_length() {
        assert_eq!(
            vec3(1.0, 0.0, 0.0).cmp_length(&vec3(0.0, 0.0, -1.0)),
            Some(Ordering::Equal)
        );
        // Equal length does not imply equality.
        assert_ne!(vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert_eq!(vec2(5, 0).cmp_length(&vec2(3, 3)), Some(Ordering::Greater));
        assert_eq!(
            vec2(f32::NAN, 0.0).cmp_length(&vec2(1.0, 0.0)),
            None
        );
    }

    #[test]
    fn increment_decrement() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.increment(), vec3(2, 3, 4));
        assert_eq!(v.post_increment(), vec3(2, 3, 4));
        assert_eq!(v, vec3(3, 4, 5));
        assert_eq!(v.decrement(), vec3(2, 3, 4));
        assert_eq!(v.post_decrement(), vec3(2, 3, 4));
        assert_eq!(v, vec3(1, 2, 3));

        let mut unsigned = vec2(0u8, 254);
        unsigned.increment();
        assert_eq!(unsigned, vec2(1, 255));
    }

    #[test]
    fn extend_truncate() {
        let v = vec2(1, 2);
        assert_eq!(v.extend(3), vec3(1, 2, 3));
        assert_eq!(v.extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), v);
        assert_eq!(v.resize::<3>().truncate(), v);
    }

    #[test]
    fn mul_matrix() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(Vec3::X.mul_matrix(m), m.row(0));
        assert_eq!(vec3(1, 0, 1).mul_matrix(m), vec3(8, 10, 12));
        assert_eq!(vec3(1, 1, 1).mul_matrix(Matrix::IDENTITY), vec3(1, 1, 1));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(1, -2)), "(1, -2)");
    }
}
