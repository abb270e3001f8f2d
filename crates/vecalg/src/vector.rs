use std::{
    array, fmt,
    mem::{ManuallyDrop, MaybeUninit},
};

use num_traits::AsPrimitive;

use crate::{
    dim::Sink, Const, Dimension, MinMax, One, Pack, PackInto, Pattern, Permutation, Promote,
    Promoted, Scalar, Sqrt, Swizzle, SwizzleMut, Zero,
};

mod ops;
#[cfg(feature = "serde")]
mod serde;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - [`Vector::new`] flattens a list of scalars, vectors and swizzles (in any combination) into
///   a vector. The total number of components must equal `N`, which is checked at compile time.
/// - [`compose`][crate::compose] and the [`vector!`][crate::vector] macro do the same, but infer
///   the arity and element type from the arguments.
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   values of the same type.
/// - [`Vector::splat`] and [`Vector::broadcast`] copy a single value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::uninit`] skips initialization entirely.
/// - [`Vector::ZERO`] (and the [`Default`] impl) is a vector containing all-zeroes, and for
///   vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing along the given axis.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or
///   `w`. These alias the storage at index 0, 1, 2 and 3.
/// - Multi-component accessors like `v.zyx()` return a [`Swizzle`] view, and their `_mut`
///   counterparts (only available if no component is repeated) return a [`SwizzleMut`].
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   storage.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One + Copy, const N: usize> Vector<T, N> {
    const fn unit(axis: usize) -> Self {
        let mut elems = [T::ZERO; N];
        elems[axis] = T::ONE;
        Self(elems)
    }
}

macro_rules! unit_vectors {
    ($($n:literal: [$($axis:ident = $index:literal),+];)+) => {
        $(
            impl<T: Zero + One + Copy> Vector<T, $n> {
                $(
                    #[doc = concat!("A unit vector pointing in the ", stringify!($axis), " direction.")]
                    pub const $axis: Self = Self::unit($index);
                )+
            }
        )+
    };
}
unit_vectors! {
    1: [X = 0];
    2: [X = 0, Y = 1];
    3: [X = 0, Y = 1, Z = 2];
    4: [X = 0, Y = 1, Z = 2, W = 3];
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from a list of components.
    ///
    /// `pack` is either a single scalar, vector or swizzle, or a tuple of them. Arguments are
    /// consumed left to right and each contributes its components in order; every component is
    /// converted to `T` with `as` semantics. The total number of components has to be exactly `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let x = vec2(9, 8);
    /// let y = vec2(7, 6);
    /// assert_eq!(Vec4i::new((x, y)), [9, 8, 7, 6]);
    /// assert_eq!(Vec3i::new((1, x)), [1, 9, 8]);
    /// assert_eq!(Vec3i::new((y, 5)), [7, 6, 5]);
    ///
    /// // Mixed element types are converted.
    /// let c = 1u8;
    /// assert_eq!(Vec4i::new((3, 2.0, c, 0 * c)), [3, 2, 1, 0]);
    ///
    /// // Swizzles contribute their re-projected components.
    /// let v567 = vec3(5, 6, 7);
    /// assert_eq!(Vec3i::new(v567.zyx()), [7, 6, 5]);
    /// assert_eq!(Vec4i::new((0, x.xxx())), [0, 9, 9, 9]);
    /// ```
    ///
    /// Passing the wrong number of components does not compile:
    ///
    /// ```compile_fail
    /// # use vecalg::*;
    /// let v = Vec3i::new((1, vec3(2, 3, 4)));
    /// ```
    #[inline]
    pub fn new<P>(pack: P) -> Self
    where
        T: Scalar,
        P: PackInto<T, Dim = Const<N>>,
    {
        let mut elems = [T::ZERO; N];
        pack.flatten(&mut Sink::new(&mut elems));
        Self(elems)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
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

    /// Creates a vector with each element initialized to `value`, converted to `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = Vec4f::broadcast(7u8);
    /// assert_eq!(v, [7.0; 4]);
    /// ```
    #[inline]
    pub fn broadcast<U>(value: U) -> Self
    where
        U: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::splat(value.as_())
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector whose elements are left uninitialized.
    ///
    /// No value is written to the storage; use [`Vector::assume_init`] once every element has
    /// been written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let mut v = Vec3f::uninit();
    /// for (i, elem) in v.as_mut_slice().iter_mut().enumerate() {
    ///     elem.write(i as f32);
    /// }
    /// let v = unsafe { v.assume_init() };
    /// assert_eq!(v, [0.0, 1.0, 2.0]);
    /// ```
    #[inline]
    pub fn uninit() -> Vector<MaybeUninit<T>, N> {
        Vector::from_fn(|_| MaybeUninit::uninit())
    }

    /// Assigns a new value to every element, with the same rules as [`Vector::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let mut v = vec4(0, 0, 0, 0);
    /// v.set((vec2(1, 2), 3.0, 4u8));
    /// assert_eq!(v, [1, 2, 3, 4]);
    ///
    /// let w = vec3(5.5, 6.5, 7.5);
    /// v.set((w.zyx(), 8));
    /// assert_eq!(v, [7, 6, 5, 8]);
    /// ```
    #[inline]
    pub fn set<P>(&mut self, pack: P)
    where
        T: Scalar,
        P: PackInto<T, Dim = Const<N>>,
    {
        *self = Self::new(pack);
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec2(1, 2).zip(vec2("a", "b"));
    /// assert_eq!(v, vec2((1, "a"), (2, "b")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Converts every element to `U` with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec4(3.0f32, 2.0, 1.0, 0.0).cast::<i32>();
    /// assert_eq!(v, [3, 2, 1, 0]);
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|elem| elem.as_())
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

    /// Returns a read-only view of the components selected by the pattern `P`.
    ///
    /// This is the generic form of the named accessors like [`Vector::zyx`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec3(5, 6, 7);
    /// let s = v.swizzle::<pattern::ZZX, 3>();
    /// assert_eq!(s, [7, 7, 5]);
    /// ```
    ///
    /// Patterns referencing components past the end of the vector are rejected when the program
    /// is built:
    ///
    /// ```compile_fail
    /// # use vecalg::*;
    /// let v = vec2(5, 6);
    /// let s = v.swizzle::<pattern::ZYX, 3>();
    /// ```
    #[inline]
    pub fn swizzle<P, const K: usize>(&self) -> Swizzle<'_, T, N, K, P>
    where
        P: Pattern<K>,
    {
        Swizzle::new(&self.0)
    }

    /// Returns a writable view of the components selected by the pattern `P`.
    ///
    /// Only patterns without repeated components ([`Permutation`]s) can be written through.
    #[inline]
    pub fn swizzle_mut<P, const K: usize>(&mut self) -> SwizzleMut<'_, T, N, K, P>
    where
        P: Permutation<K>,
    {
        SwizzleMut::new(&mut self.0)
    }

    /// Replaces `self` with its own `P` swizzle (the in-place form of `v = v.zyx()`).
    ///
    /// All components are read before any of them is written, so the result does not depend on
    /// the order in which the pattern visits the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let mut v = vec3(5, 6, 7);
    /// v.swizzle_assign::<pattern::ZYX>();
    /// assert_eq!(v, [7, 6, 5]);
    ///
    /// v.swizzle_assign::<pattern::XXY>();
    /// assert_eq!(v, [7, 7, 6]);
    /// ```
    pub fn swizzle_assign<P>(&mut self)
    where
        P: Pattern<N>,
        T: Copy,
    {
        let staged = self.swizzle::<P, N>().to_vector();
        *self = staged;
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// `other` may be any vector or swizzle with the same number of components. The result has
    /// the [`Promoted`] type of both element types, and is accumulated left to right starting
    /// from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    ///
    /// let c = vec3(0.5, 0.5, 0.5);
    /// assert_eq!(a.dot(c), -0.5);
    /// ```
    pub fn dot<R>(self, other: R) -> Promoted<T, R::Scalar>
    where
        T: Promote<R::Scalar>,
        R: Dimension<Dim = Const<N>>,
    {
        (0..N).fold(<Promoted<T, R::Scalar> as Zero>::ZERO, |acc, i| {
            acc + self.0[i].widen() * T::widen_rhs(other.component(i))
        })
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Promote<Output = T>,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Promote<Output = T> + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, Vec3d::Z);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Promote<Output = T> + Sqrt,
    {
        self / self.length()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec3(-1, 5, 20).clamp(Vector::splat(0), Vector::splat(10));
    /// assert_eq!(v, [0, 5, 10]);
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T, const N: usize> Vector<MaybeUninit<T>, N> {
    /// Extracts the initialized elements.
    ///
    /// # Safety
    ///
    /// Every element must have been initialized.
    pub unsafe fn assume_init(self) -> Vector<T, N> {
        let this = ManuallyDrop::new(self);
        // Safety: `MaybeUninit<T>` has the same layout as `T`, and the caller guarantees that every
        // element is initialized.
        unsafe { (&*this as *const Self).cast::<Vector<T, N>>().read() }
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        Vector([x, value])
    }

    vecalg_macros::swizzle_accessors!(1);
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a single element.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.into_array();
        Vector([x])
    }

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        Vector([x, y, value])
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of both vectors extended with Z=0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Promote<Output = T>,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }

    vecalg_macros::swizzle_accessors!(2);
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// `other` may be any 3-component vector or swizzle; the result has the [`Promoted`] element
    /// type. Swapping the operands inverts the direction of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(x.cross(z.yzx()), z);
    /// ```
    pub fn cross<R>(self, other: R) -> Vector<Promoted<T, R::Scalar>, 3>
    where
        T: Promote<R::Scalar>,
        R: Dimension<Dim = Const<3>>,
    {
        let [s0, s1, s2] = self.0.map(|elem| elem.widen());
        let [u0, u1, u2] = [0, 1, 2].map(|i| T::widen_rhs(other.component(i)));

        Vector([
            s1 * u2 - u1 * s2,
            s2 * u0 - u2 * s0,
            s0 * u1 - u0 * s1,
        ])
    }

    vecalg_macros::swizzle_accessors!(3);
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        Vector([x, y, z])
    }

    vecalg_macros::swizzle_accessors!(4);
}

impl<T: Scalar, const N: usize> Dimension for Vector<T, N> {
    type Scalar = T;
    type Dim = Const<N>;

    #[inline]
    fn component(&self, index: usize) -> T {
        self.0[index]
    }
}

impl<T: Scalar, const N: usize> Pack for Vector<T, N> {
    type Scalar = T;
    type Dim = Const<N>;
}

impl<T, U, const N: usize> PackInto<U> for Vector<T, N>
where
    T: Scalar + AsPrimitive<U>,
    U: Copy + 'static,
{
    #[inline]
    fn flatten(self, sink: &mut Sink<'_, U>) {
        sink.extend(self);
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
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

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
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

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
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

        let mut v = vec4(0, 1, 2, 3);
        assert_eq!((v.x, v.y, v.z, v.w), (0, 1, 2, 3));

        v.z = 777;
        assert_eq!(v[2], 777);
        v[3] = 9;
        assert_eq!(v.w, 9);
        assert_eq!(v, [0, 1, 777, 9]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0)), "(0.50, 1.00)");
    }

    #[test]
    fn single_value() {
        let v = Vector::<i32, 4>::splat(7);
        assert_eq!(v, [7, 7, 7, 7]);

        let w = Vec3i::broadcast(8.9);
        assert_eq!(w, [8, 8, 8]);
    }

    #[test]
    fn flattening() {
        let c = 1u8;
        let v = Vec4i::new((3, 2.0, c, 0 * c));
        assert_eq!(v, [3, 2, 1, 0]);

        let f = vec4(3.0f32, 2.0, 1.0, 0.0);
        let w = Vec4i::new(f);
        assert_eq!(w, [3, 2, 1, 0]);

        let x = vec2(9, 8);
        let y = vec2(7, 6);
        assert_eq!(Vec4i::new((x, y)), [9, 8, 7, 6]);
        assert_eq!(Vec3i::new((1, x)), [1, 9, 8]);
        assert_eq!(Vec3i::new((y, 5)), [7, 6, 5]);
        assert_eq!(Vector::<u8, 8>::new((f, w)), [3, 2, 1, 0, 3, 2, 1, 0]);
    }

    #[test]
    fn uninit() {
        let mut v = Vec2i::uninit();
        v[0].write(4);
        v[1].write(5);
        assert_eq!(unsafe { v.assume_init() }, [4, 5]);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec3d::default(), Vec3d::ZERO);
        assert_eq!(Vector::<u16, 6>::default(), [0; 6]);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);

        let mixed: f64 = vec2(1, 2).dot(vec2(0.25, 0.5));
        assert_eq!(mixed, 1.25);

        let v = vec3(1, 2, 3);
        assert_eq!(v.dot(v.zyx()), 3 + 4 + 3);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::Y.cross(Vec3i::Z), Vec3i::X);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);

        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a.cross(b), [-3, 6, -3]);
        assert_eq!(a.cross(a), [0, 0, 0]);

        let promoted: Vec3f = a.cross(vec3(4.0f32, 5.0, 6.0));
        assert_eq!(promoted, [-3.0, 6.0, -3.0]);
    }

    #[test]
    fn length() {
        assert_eq!(vec3(2, 3, 6).length2(), 49);
        assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
        assert_relative_eq!(vec2(1.0f32, 1.0).normalize().length(), 1.0);
    }

    #[test]
    fn min_max() {
        let a = vec3(-1.0, 2.0, f32::NAN);
        let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
        assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
        assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    }

    #[test]
    fn resize() {
        assert_eq!(vec1(1).extend(2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate().truncate(), vec1(1));
        assert_eq!(vec2(1, 2).truncate(), [1]);
    }

    #[test]
    fn swizzle_assign() {
        let mut v = vec3(5, 6, 7);
        v.swizzle_assign::<crate::pattern::ZYX>();
        assert_eq!(v, [7, 6, 5]);

        let mut v = vec2(1, 2);
        v.swizzle_assign::<crate::pattern::YX>();
        assert_eq!(v, [2, 1]);

        let mut v = vec4(1, 2, 3, 4);
        v.swizzle_assign::<crate::pattern::WWXY>();
        assert_eq!(v, [4, 4, 1, 2]);
    }
}
