//! Swizzle views: re-projections of a vector's components.
//!
//! A swizzle is described by a [`Pattern`], a zero-sized type listing which source component each
//! slot of the view reads. Patterns may repeat components (`xxy`); only repetition-free patterns
//! ([`Permutation`]s) can be written through.
//!
//! Views borrow their source vector, so a view never outlives the vector, and a vector cannot be
//! modified while a read-only view of it exists. Reading a vector through a view and writing the
//! same vector at once therefore requires materializing the view first (with
//! [`Swizzle::to_vector`], or by using [`Vector::swizzle_assign`]):
//!
//! ```
//! # use vecalg::*;
//! let mut v = vec2(1, 2);
//! v += v.yx().to_vector();
//! assert_eq!(v, [3, 3]);
//! ```
//!
//! ```compile_fail
//! # use vecalg::*;
//! let mut v = vec2(1, 2);
//! v += v.yx();
//! ```

use std::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use num_traits::AsPrimitive;

use crate::{dim::Sink, Const, Dimension, Pack, PackInto, Promote, Promoted, Scalar, Vector};

mod ops;

/// Returns whether `indices` contains no repeated value.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// assert!(is_unique(&[2, 1, 0]));
/// assert!(!is_unique(&[0, 1, 0]));
/// assert!(is_unique(&[]));
/// ```
pub const fn is_unique(indices: &[usize]) -> bool {
    let mut i = 0;
    while i < indices.len() {
        let mut j = i + 1;
        while j < indices.len() {
            if indices[i] == indices[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Number of components a source vector needs for every index in `indices` to be valid.
const fn source_arity(indices: &[usize]) -> usize {
    let mut arity = 0;
    let mut i = 0;
    while i < indices.len() {
        if indices[i] + 1 > arity {
            arity = indices[i] + 1;
        }
        i += 1;
    }
    arity
}

/// A swizzle pattern producing `N` components.
///
/// All named patterns (`XY` through `WWWW`) are provided in the [`pattern`] module. Custom
/// patterns can be defined by implementing this trait; using a pattern on a vector that is too
/// small for its indices fails to build.
///
/// ```compile_fail
/// # use vecalg::*;
/// struct Last;
/// impl Pattern<1> for Last {
///     const INDICES: [usize; 1] = [7];
/// }
///
/// let v = vec4(1, 2, 3, 4);
/// let s = v.swizzle::<Last, 1>();
/// ```
pub trait Pattern<const N: usize> {
    /// Source index read by each slot of the view.
    const INDICES: [usize; N];

    /// Smallest source arity this pattern can be applied to.
    const SOURCE_ARITY: usize = source_arity(&Self::INDICES);
}

/// A [`Pattern`] that does not repeat any source component.
///
/// Only these patterns can be used with [`SwizzleMut`]. Implementing this trait for a pattern with
/// repeated indices makes any use of it as a [`SwizzleMut`] fail to build.
///
/// ```compile_fail
/// # use vecalg::*;
/// struct Twice;
/// impl Pattern<2> for Twice {
///     const INDICES: [usize; 2] = [0, 0];
/// }
/// impl Permutation<2> for Twice {}
///
/// let mut v = vec2(1, 2);
/// v.swizzle_mut::<Twice, 2>().set(vec2(3, 4));
/// ```
pub trait Permutation<const N: usize>: Pattern<N> {}

/// Named swizzle patterns.
///
/// The pattern `ZYX` reads the source components `[2, 1, 0]`, and so on.
pub mod pattern {
    vecalg_macros::swizzle_patterns!();
}

/// A read-only view of `N` components of an `M`-component vector, selected by the pattern `P`.
///
/// Created by the named accessors (`v.zyx()`) or by [`Vector::swizzle`]. A swizzle can be used in
/// place of a [`Vector`] with the same number of components: as a construction argument, as an
/// operand of `+`, `-`, `*`, `/`, [`Vector::dot`] and [`Vector::cross`], and as the source of an
/// assignment.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// let v = vec4(1, 2, 3, 4);
/// let s = v.wzx();
/// assert_eq!(s[0], 4);
/// assert_eq!(s, [4, 3, 1]);
///
/// let w: Vec3i = s.into();
/// assert_eq!(w, [4, 3, 1]);
/// assert_eq!(s + w, [8, 6, 2]);
/// assert_eq!(2 * s, [8, 6, 2]);
/// ```
pub struct Swizzle<'a, T, const M: usize, const N: usize, P> {
    source: &'a [T; M],
    pattern: PhantomData<P>,
}

impl<'a, T, const M: usize, const N: usize, P> Swizzle<'a, T, M, N, P>
where
    P: Pattern<N>,
{
    const IN_BOUNDS: () = assert!(
        P::SOURCE_ARITY <= M,
        "swizzle pattern reads past the end of the source vector"
    );

    /// Creates a view of `source`.
    #[inline]
    pub fn new(source: &'a [T; M]) -> Self {
        let () = Self::IN_BOUNDS;
        Self {
            source,
            pattern: PhantomData,
        }
    }

    /// Returns the source indices read by this view.
    #[inline]
    pub fn indices(&self) -> [usize; N] {
        P::INDICES
    }

    /// Returns the component at `index` of this view.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn get(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.source[P::INDICES[index]]
    }

    /// Copies the viewed components into a new [`Vector`].
    #[inline]
    pub fn to_vector(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.get(i))
    }

    /// Computes the dot product between the viewed components and `other`.
    ///
    /// See [`Vector::dot`].
    pub fn dot<R>(&self, other: R) -> Promoted<T, R::Scalar>
    where
        T: Promote<R::Scalar>,
        R: Dimension<Dim = Const<N>>,
    {
        self.to_vector().dot(other)
    }
}

impl<'a, T, const M: usize, P> Swizzle<'a, T, M, 3, P>
where
    P: Pattern<3>,
{
    /// Computes the cross product of the viewed components and `other`.
    ///
    /// See [`Vector::cross`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let v = vec4(0, 1, 0, 1);
    /// assert_eq!(v.wxz().cross(v.xyz()), [0, 0, 1]);
    /// ```
    pub fn cross<R>(&self, other: R) -> Vector<Promoted<T, R::Scalar>, 3>
    where
        T: Promote<R::Scalar>,
        R: Dimension<Dim = Const<3>>,
    {
        self.to_vector().cross(other)
    }
}

impl<'a, T, const M: usize, const N: usize, P> Clone for Swizzle<'a, T, M, N, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const M: usize, const N: usize, P> Copy for Swizzle<'a, T, M, N, P> {}

impl<'a, T, const M: usize, const N: usize, P> Index<usize> for Swizzle<'a, T, M, N, P>
where
    P: Pattern<N>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.source[P::INDICES[index]]
    }
}

impl<'a, T, const M: usize, const N: usize, P> From<Swizzle<'a, T, M, N, P>> for Vector<T, N>
where
    T: Copy,
    P: Pattern<N>,
{
    #[inline]
    fn from(swizzle: Swizzle<'a, T, M, N, P>) -> Self {
        swizzle.to_vector()
    }
}

/// A writable view of `N` distinct components of an `M`-component vector.
///
/// Created by the named `_mut` accessors (`v.zx_mut()`) or by [`Vector::swizzle_mut`]. Writes go
/// to the source component the pattern maps each slot to.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// let mut v = vec3(1, 2, 3);
/// v.zx_mut().set(vec2(10, 30));
/// assert_eq!(v, [30, 2, 10]);
///
/// v.yz_mut()[1] = 0;
/// assert_eq!(v, [30, 2, 0]);
///
/// let mut xy = v.xy_mut();
/// xy += vec2(1, 1);
/// assert_eq!(v, [31, 3, 0]);
/// ```
pub struct SwizzleMut<'a, T, const M: usize, const N: usize, P> {
    source: &'a mut [T; M],
    pattern: PhantomData<P>,
}

impl<'a, T, const M: usize, const N: usize, P> SwizzleMut<'a, T, M, N, P>
where
    P: Permutation<N>,
{
    const VALID: () = {
        assert!(
            P::SOURCE_ARITY <= M,
            "swizzle pattern reads past the end of the source vector"
        );
        assert!(
            is_unique(&P::INDICES),
            "cannot write through a swizzle pattern with repeated components"
        );
    };

    /// Creates a writable view of `source`.
    #[inline]
    pub fn new(source: &'a mut [T; M]) -> Self {
        let () = Self::VALID;
        Self {
            source,
            pattern: PhantomData,
        }
    }

    /// Returns the component at `index` of this view.
    #[inline]
    pub fn get(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.source[P::INDICES[index]]
    }

    /// Copies the viewed components into a new [`Vector`].
    #[inline]
    pub fn to_vector(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.get(i))
    }

    /// Reborrows this view as a read-only [`Swizzle`].
    #[inline]
    pub fn as_swizzle(&self) -> Swizzle<'_, T, M, N, P> {
        Swizzle::new(&*self.source)
    }

    /// Assigns new values to the viewed components.
    ///
    /// `pack` follows the rules of [`Vector::new`]. All values are computed before the first one
    /// is written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecalg::*;
    /// let mut v = vec4(0.0, 0.0, 0.0, 0.0);
    /// v.wzy_mut().set((1, vec2(2.5, 3.5)));
    /// assert_eq!(v, [0.0, 3.5, 2.5, 1.0]);
    /// ```
    pub fn set<S>(&mut self, pack: S)
    where
        T: Scalar,
        S: PackInto<T, Dim = Const<N>>,
    {
        let staged = Vector::<T, N>::new(pack);
        self.store(staged);
    }

    pub(crate) fn store(&mut self, values: Vector<T, N>) {
        for (&index, value) in P::INDICES.iter().zip(values.into_array()) {
            self.source[index] = value;
        }
    }
}

impl<'a, T, const M: usize, const N: usize, P> Index<usize> for SwizzleMut<'a, T, M, N, P>
where
    P: Permutation<N>,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.source[P::INDICES[index]]
    }
}

impl<'a, T, const M: usize, const N: usize, P> IndexMut<usize> for SwizzleMut<'a, T, M, N, P>
where
    P: Permutation<N>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.source[P::INDICES[index]]
    }
}

macro_rules! view_traits {
    ($($view:ident: $bound:ident),+) => {
        $(
            impl<'a, T, const M: usize, const N: usize, P> Dimension for $view<'a, T, M, N, P>
            where
                T: Scalar,
                P: $bound<N>,
            {
                type Scalar = T;
                type Dim = Const<N>;

                #[inline]
                fn component(&self, index: usize) -> T {
                    self.get(index)
                }
            }

            impl<'a, T, const M: usize, const N: usize, P> Pack for $view<'a, T, M, N, P>
            where
                T: Scalar,
                P: $bound<N>,
            {
                type Scalar = T;
                type Dim = Const<N>;
            }

            impl<'a, T, U, const M: usize, const N: usize, P> PackInto<U> for $view<'a, T, M, N, P>
            where
                T: Scalar + AsPrimitive<U>,
                U: Copy + 'static,
                P: $bound<N>,
            {
                #[inline]
                fn flatten(self, sink: &mut Sink<'_, U>) {
                    sink.extend(self);
                }
            }

            impl<'a, T, const M: usize, const N: usize, P> fmt::Debug for $view<'a, T, M, N, P>
            where
                T: fmt::Debug,
                P: $bound<N>,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut tup = f.debug_tuple("");
                    for index in P::INDICES {
                        tup.field(&self.source[index]);
                    }
                    tup.finish()
                }
            }

            impl<'a, T, U, const M: usize, const N: usize, P> PartialEq<Vector<U, N>>
                for $view<'a, T, M, N, P>
            where
                T: PartialEq<U>,
                P: $bound<N>,
            {
                fn eq(&self, other: &Vector<U, N>) -> bool {
                    (0..N).all(|i| self[i] == other[i])
                }
            }

            impl<'a, T, U, const M: usize, const N: usize, P> PartialEq<[U; N]>
                for $view<'a, T, M, N, P>
            where
                T: PartialEq<U>,
                P: $bound<N>,
            {
                fn eq(&self, other: &[U; N]) -> bool {
                    (0..N).all(|i| self[i] == other[i])
                }
            }

            impl<'a, T, U, const M: usize, const N: usize, P> PartialEq<$view<'a, U, M, N, P>>
                for Vector<T, N>
            where
                T: PartialEq<U>,
                P: $bound<N>,
            {
                fn eq(&self, other: &$view<'a, U, M, N, P>) -> bool {
                    (0..N).all(|i| self[i] == other[i])
                }
            }
        )+
    };
}
view_traits!(Swizzle: Pattern, SwizzleMut: Permutation);

impl<'a, 'b, T, U, const M: usize, const K: usize, const N: usize, P, Q>
    PartialEq<Swizzle<'b, U, K, N, Q>> for Swizzle<'a, T, M, N, P>
where
    T: PartialEq<U>,
    P: Pattern<N>,
    Q: Pattern<N>,
{
    fn eq(&self, other: &Swizzle<'b, U, K, N, Q>) -> bool {
        (0..N).all(|i| self[i] == other[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, vec4, Vec2i, Vec3i, Vec4i};

    #[test]
    fn read() {
        let v = vec3(5, 6, 7);
        assert_eq!(v.zyx(), [7, 6, 5]);
        assert_eq!(v.xx(), [5, 5]);
        assert_eq!(v.zzzz(), [7, 7, 7, 7]);
        assert_eq!(v.zyx().indices(), [2, 1, 0]);
        assert_eq!(v.yz().get(1), 7);

        let v = vec2(1, 2);
        assert_eq!(Vec4i::new((v.xx(), v.yy())), [1, 1, 2, 2]);
    }

    #[test]
    fn assign_from_self() {
        let mut v = vec3(5, 6, 7);
        v = v.zyx().into();
        assert_eq!(v, [7, 6, 5]);

        let mut w = vec3(5, 6, 7);
        w.swizzle_assign::<pattern::ZYX>();
        assert_eq!(w, v);
    }

    #[test]
    fn write() {
        let mut v = vec4(1, 2, 3, 4);
        v.wx_mut().set(vec2(10, 40));
        assert_eq!(v, [40, 2, 3, 10]);

        v.zyx_mut()[0] = 0;
        assert_eq!(v.z, 0);

        let mut yz = v.yz_mut();
        yz += vec2(1, 1);
        yz *= 2;
        assert_eq!(yz.to_vector(), [6, 2]);
        assert_eq!(v, [40, 6, 2, 10]);
    }

    #[test]
    fn write_from_other_view() {
        let src = vec3(1.5, 2.5, 3.5);
        let mut dst = Vec3i::ZERO;
        dst.zyx_mut().set(src.xyz());
        assert_eq!(dst, [3, 2, 1]);

        let staged = dst.yz().to_vector();
        dst.zy_mut().set(staged);
        assert_eq!(dst, [3, 1, 2]);
    }

    #[test]
    fn as_operand() {
        let v = vec3(1, 2, 3);
        let w = vec4(4, 5, 6, 7);

        assert_eq!(v.zyx() + w.xyz(), [7, 7, 7]);
        assert_eq!(w.wzyx() - w, [3, 1, -1, -3]);
        assert_eq!(v.xy() * 2.5, [2.5, 5.0]);
        assert_eq!(-v.yx(), [-2, -1]);
        assert_eq!(v.xyz().dot(v), 14);
        assert_eq!(v.xyz().cross(v.xyz()), Vec3i::ZERO);
    }

    #[test]
    fn debug() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(format!("{:?}", v.wyx()), "(4, 2, 1)");
        let mut u = Vec2i::ZERO;
        assert_eq!(format!("{:?}", u.yx_mut()), "(0, 0)");
    }

    #[test]
    fn patterns() {
        assert_eq!(<pattern::ZYX as Pattern<3>>::INDICES, [2, 1, 0]);
        assert_eq!(<pattern::XXY as Pattern<3>>::SOURCE_ARITY, 2);
        assert_eq!(<pattern::WX as Pattern<2>>::SOURCE_ARITY, 4);
        assert!(is_unique(&<pattern::WZYX as Pattern<4>>::INDICES));
        assert!(!is_unique(&<pattern::XYZX as Pattern<4>>::INDICES));
        assert_eq!(source_arity(&[]), 0);
    }
}
