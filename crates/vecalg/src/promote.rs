//! Numeric promotion between element types.

use crate::Scalar;

/// Numeric promotion: the common type of `Self` and `Rhs`.
///
/// The common type can represent every value of both operands without narrowing where possible,
/// following the usual widening rules:
///
/// - floating point × floating point → the wider float (`f32` × `f64` → `f64`)
/// - integer × floating point → the floating point type
/// - integers of equal signedness → the wider integer
/// - signed × unsigned, both narrower than 32 bits → `i32` (`i8` × `u8` → `i32`)
/// - other signed × unsigned → the signed type if it is strictly wider, otherwise the unsigned
///   type of the larger width (`i32` × `u32` → `u32`, `i64` × `u32` → `i64`)
///
/// Promotion is symmetric, and every type promotes to itself.
///
/// Arithmetic between vectors (and between vectors and scalars) computes in the promoted type and
/// returns vectors of the promoted type. Compound assignment computes in the promoted type and
/// converts the result back via [`Promote::narrow`].
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// let sum: Vec3f = vec3(1, 2, 3) + vec3(0.5f32, 0.5, 0.5);
/// assert_eq!(sum, vec3(1.5, 2.5, 3.5));
///
/// let product: Vec2d = vec2(1.5f32, 2.0) * 2.0f64;
/// assert_eq!(product, vec2(3.0, 4.0));
/// ```
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    /// The common type.
    type Output: Scalar;

    /// Converts `self` to the common type.
    fn widen(self) -> Promoted<Self, Rhs>;

    /// Converts the right-hand operand to the common type.
    fn widen_rhs(rhs: Rhs) -> Promoted<Self, Rhs>;

    /// Converts a value of the common type back to `Self` (with `as` semantics).
    fn narrow(value: Promoted<Self, Rhs>) -> Self;
}

/// Shorthand for the common type of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

vecalg_macros::promotion_table!();

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promotes_to<L, R, O>()
    where
        L: Promote<R>,
        R: Promote<L>,
        O: 'static,
    {
        assert_eq!(TypeId::of::<Promoted<L, R>>(), TypeId::of::<O>());
        assert_eq!(TypeId::of::<Promoted<R, L>>(), TypeId::of::<O>());
    }

    #[test]
    fn table() {
        promotes_to::<i32, i32, i32>();
        promotes_to::<i32, f32, f32>();
        promotes_to::<i64, f32, f32>();
        promotes_to::<f32, f64, f64>();
        promotes_to::<u8, i64, i64>();
        promotes_to::<u16, u64, u64>();
        promotes_to::<i32, u32, u32>();
        promotes_to::<i64, u32, i64>();
        promotes_to::<i8, u64, u64>();
        promotes_to::<i8, u8, i32>();
        promotes_to::<i8, u16, i32>();
        promotes_to::<i16, u16, i32>();
        promotes_to::<i16, u8, i32>();
        promotes_to::<i8, u32, u32>();
        promotes_to::<i8, i8, i8>();
    }

    #[test]
    fn conversions() {
        assert_eq!(<i32 as Promote<f64>>::widen(3), 3.0);
        assert_eq!(<i32 as Promote<f64>>::widen_rhs(2.5), 2.5);
        assert_eq!(<i32 as Promote<f64>>::narrow(2.9), 2);
        assert_eq!(<u8 as Promote<i8>>::widen_rhs(-1), -1);
        assert_eq!(<u8 as Promote<i8>>::narrow(-1), u8::MAX);
        assert_eq!(<i16 as Promote<u8>>::widen_rhs(200), 200);
    }
}
