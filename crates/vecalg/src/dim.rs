//! Dimension bookkeeping for construction arguments and operands.
//!
//! Every value that can contribute components to a [`Vector`] implements [`Dimension`], which
//! reports how many scalar slots it fills (1 for a bare scalar, `N` for a vector or swizzle of
//! arity `N`) and which element type those slots have.
//!
//! The dimension is tracked as a *type* ([`Const<N>`]) rather than only as a constant, which
//! allows argument packs (tuples) to compute their total arity in the type system: the
//! [`Pack::Dim`] of `(Vec2<i32>, f32)` is `Const<3>`, and [`Vector::new`] only accepts packs whose
//! `Dim` matches the vector being built. Type-level sums are available up to
//! [`MAX_PACK_DIMENSION`] components.

use num_traits::AsPrimitive;

use crate::{Promote, Promoted, Scalar, Vector};

/// Largest total number of components a multi-argument [`Pack`] may contribute.
pub const MAX_PACK_DIMENSION: usize = 16;

/// Type-level natural number.
///
/// `Const<N>` stands in for the number `N` in trait bounds, so that arities can be added
/// together via [`DimAdd`] and compared via associated type equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// A type-level arity.
pub trait Arity: Sized {
    /// The number represented by this type.
    const DIM: usize;

    /// The vector type with this arity and element type `T`.
    type Vector<T>;

    /// Builds the vector of this arity from an argument pack of the same arity.
    fn collect<T, P>(pack: P) -> Self::Vector<T>
    where
        T: Scalar,
        P: PackInto<T, Dim = Self>;
}

impl<const N: usize> Arity for Const<N> {
    const DIM: usize = N;

    type Vector<T> = Vector<T, N>;

    #[inline]
    fn collect<T, P>(pack: P) -> Vector<T, N>
    where
        T: Scalar,
        P: PackInto<T, Dim = Self>,
    {
        Vector::new(pack)
    }
}

/// Type-level addition of arities.
#[diagnostic::on_unimplemented(
    message = "argument packs are limited to 16 components in total",
    label = "cannot add `{Self}` and `{Rhs}`"
)]
pub trait DimAdd<Rhs> {
    /// The sum of `Self` and `Rhs`.
    type Output: Arity;
}

/// Shorthand for the type-level sum of two arities.
pub type DimSum<A, B> = <A as DimAdd<B>>::Output;

vecalg_macros::dimension_table!(16);

/// Values that contribute a fixed number of scalar components.
///
/// Implemented for the primitive numeric types (dimension 1), [`Vector`] and
/// [`Swizzle`][crate::Swizzle].
#[diagnostic::on_unimplemented(message = "`{Self}` cannot be used as vector components")]
pub trait Dimension {
    /// Element type of the components.
    type Scalar: Scalar;

    /// Number of components, as a type.
    type Dim: Arity;

    /// Number of components.
    const DIM: usize = <Self::Dim as Arity>::DIM;

    /// Returns the component at `index`.
    ///
    /// `index` must be less than [`Self::DIM`].
    fn component(&self, index: usize) -> Self::Scalar;
}

/// An ordered list of construction arguments.
///
/// Implemented for the primitive scalars, [`Vector`] and [`Swizzle`][crate::Swizzle] (packs of
/// one), for tuples of 1 to 16 [`Dimension`] types, and for the empty pack `()`.
///
/// The total arity is the sum of the arguments' arities, and the element type is the
/// [`Promoted`] type of all argument element types, reduced from the right.
#[diagnostic::on_unimplemented(message = "`{Self}` is not a valid list of vector components")]
pub trait Pack {
    /// The promoted element type of all arguments.
    type Scalar: Scalar;

    /// Total number of components.
    type Dim: Arity;
}

/// Argument packs whose components can all be converted to `T`.
pub trait PackInto<T>: Pack {
    /// Writes every component, in argument order, to `sink`.
    fn flatten(self, sink: &mut Sink<'_, T>);
}

/// Destination of a [`PackInto::flatten`] operation.
pub struct Sink<'a, T> {
    slots: &'a mut [T],
    filled: usize,
}

impl<'a, T> Sink<'a, T> {
    pub(crate) fn new(slots: &'a mut [T]) -> Self {
        Self { slots, filled: 0 }
    }

    /// Appends a single value.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.slots[self.filled] = value;
        self.filled += 1;
    }

    /// Appends every component of `arg`, converted to `T` with `as` semantics.
    #[inline]
    pub fn extend<D>(&mut self, arg: D)
    where
        D: Dimension,
        D::Scalar: AsPrimitive<T>,
        T: Copy + 'static,
    {
        for i in 0..D::DIM {
            self.push(arg.component(i).as_());
        }
    }

    /// Returns the number of slots written so far.
    pub fn filled(&self) -> usize {
        self.filled
    }
}

macro_rules! scalar_dimension {
    ($($types:ty),+) => {
        $(
            impl Dimension for $types {
                type Scalar = $types;
                type Dim = Const<1>;

                #[inline]
                fn component(&self, _: usize) -> $types {
                    *self
                }
            }

            impl Pack for $types {
                type Scalar = $types;
                type Dim = Const<1>;
            }

            impl<T> PackInto<T> for $types
            where
                T: Copy + 'static,
                $types: AsPrimitive<T>,
            {
                #[inline]
                fn flatten(self, sink: &mut Sink<'_, T>) {
                    sink.push(self.as_());
                }
            }
        )+
    };
}
scalar_dimension!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! tuple_packs {
    ($head:ident) => {
        impl<$head: Dimension> Pack for ($head,) {
            type Scalar = $head::Scalar;
            type Dim = $head::Dim;
        }

        impl<T, $head> PackInto<T> for ($head,)
        where
            T: Copy + 'static,
            $head: Dimension,
            <$head as Dimension>::Scalar: AsPrimitive<T>,
        {
            #[inline]
            fn flatten(self, sink: &mut Sink<'_, T>) {
                sink.extend(self.0);
            }
        }
    };
    ($head:ident, $($tail:ident),+) => {
        impl<$head, $($tail),+> Pack for ($head, $($tail),+)
        where
            $head: Dimension,
            ($($tail,)+): Pack,
            <$head as Dimension>::Scalar: Promote<<($($tail,)+) as Pack>::Scalar>,
            <$head as Dimension>::Dim: DimAdd<<($($tail,)+) as Pack>::Dim>,
        {
            type Scalar = Promoted<<$head as Dimension>::Scalar, <($($tail,)+) as Pack>::Scalar>;
            type Dim = DimSum<<$head as Dimension>::Dim, <($($tail,)+) as Pack>::Dim>;
        }

        impl<T, $head, $($tail),+> PackInto<T> for ($head, $($tail),+)
        where
            T: Copy + 'static,
            Self: Pack,
            $head: Dimension,
            <$head as Dimension>::Scalar: AsPrimitive<T>,
            ($($tail,)+): PackInto<T>,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn flatten(self, sink: &mut Sink<'_, T>) {
                let ($head, $($tail),+) = self;
                sink.extend($head);
                ($($tail,)+).flatten(sink);
            }
        }

        tuple_packs!($($tail),+);
    };
}
tuple_packs!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

// The empty pack contributes no components. Its element type never takes part in promotion.
impl Pack for () {
    type Scalar = u8;
    type Dim = Const<0>;
}

impl<T> PackInto<T> for () {
    #[inline]
    fn flatten(self, _: &mut Sink<'_, T>) {}
}

/// Builds a vector from an argument pack, inferring both its element type and arity.
///
/// The element type is the [`Promoted`] type of all arguments, and the arity is the sum of their
/// arities. The [`vector!`][crate::vector] macro offers the same functionality without the extra
/// parentheses.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// let v = compose((1, vec2(2, 3)));
/// assert_eq!(v, Vec3i::new((1, 2, 3)));
///
/// // `i32` and `f32` promote to `f32`.
/// let v: Vec4f = compose((vec2(1, 2), 3.0f32, 4));
/// assert_eq!(v, [1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn compose<P>(pack: P) -> <P::Dim as Arity>::Vector<P::Scalar>
where
    P: Pack + PackInto<<P as Pack>::Scalar>,
{
    <P::Dim as Arity>::collect(pack)
}

/// Returns the number of scalar components a value of type `D` contributes.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// assert_eq!(dimension_of::<f32>(), 1);
/// assert_eq!(dimension_of::<Vec3i>(), 3);
/// assert_eq!(dimension_of::<(Vec2f, u8, Vec4<i16>)>(), 7);
/// ```
pub const fn dimension_of<D: Pack>() -> usize {
    <D::Dim as Arity>::DIM
}
