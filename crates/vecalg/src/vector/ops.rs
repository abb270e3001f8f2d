//! Implementations of `std::ops` and comparison traits.
//!
//! Binary arithmetic computes in the [`Promoted`] type of both operands. The right-hand side of
//! `+` and `-` can be any [`Dimension`] of matching arity, which includes vectors of other element
//! types and swizzles.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Const, Dimension, Promote, Promoted, Scalar};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $op:tt;)+) => {
        $(
            /// Element-wise operation against any operand of the same arity.
            impl<T, R, const N: usize> $trait<R> for Vector<T, N>
            where
                T: Promote<R::Scalar>,
                R: Dimension<Dim = Const<N>>,
            {
                type Output = Vector<Promoted<T, R::Scalar>, N>;

                fn $method(self, rhs: R) -> Self::Output {
                    Vector::from_fn(|i| self.0[i].widen() $op T::widen_rhs(rhs.component(i)))
                }
            }

            /// Element-wise operation, converting the result back to `T`.
            impl<T, R, const N: usize> $assign_trait<R> for Vector<T, N>
            where
                T: Promote<R::Scalar>,
                R: Dimension<Dim = Const<N>>,
            {
                fn $assign_method(&mut self, rhs: R) {
                    for (i, lhs) in self.0.iter_mut().enumerate() {
                        let value = *lhs;
                        *lhs = T::narrow(value.widen() $op T::widen_rhs(rhs.component(i)));
                    }
                }
            }
        )+
    };
}
elementwise_ops! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
}

macro_rules! scalar_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $op:tt;)+) => {
        $(
            /// Vector-scalar operation (scaling).
            impl<T, U, const N: usize> $trait<U> for Vector<T, N>
            where
                U: Scalar,
                T: Promote<U>,
            {
                type Output = Vector<Promoted<T, U>, N>;

                fn $method(self, rhs: U) -> Self::Output {
                    let rhs = T::widen_rhs(rhs);
                    self.map(|elem| elem.widen() $op rhs)
                }
            }

            /// Vector-scalar operation (scaling), converting the result back to `T`.
            impl<T, U, const N: usize> $assign_trait<U> for Vector<T, N>
            where
                U: Scalar,
                T: Promote<U>,
            {
                fn $assign_method(&mut self, rhs: U) {
                    let rhs = T::widen_rhs(rhs);
                    for lhs in &mut self.0 {
                        let value = *lhs;
                        *lhs = T::narrow(value.widen() $op rhs);
                    }
                }
            }
        )+
    };
}
scalar_ops! {
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

// Scalar-vector operations have to name the scalar type, since `impl<U> Mul<Vector<..>> for U` is
// not allowed.
macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            impl<U, const N: usize> Mul<Vector<U, N>> for $types
            where
                U: Scalar,
                $types: Promote<U>,
            {
                type Output = Vector<Promoted<$types, U>, N>;

                fn mul(self, rhs: Vector<U, N>) -> Self::Output {
                    let lhs = <$types as Promote<U>>::widen(self);
                    rhs.map(|elem| lhs * <$types as Promote<U>>::widen_rhs(elem))
                }
            }

            impl<U, const N: usize> Div<Vector<U, N>> for $types
            where
                U: Scalar,
                $types: Promote<U>,
            {
                type Output = Vector<Promoted<$types, U>, N>;

                fn div(self, rhs: Vector<U, N>) -> Self::Output {
                    let lhs = <$types as Promote<U>>::widen(self);
                    rhs.map(|elem| lhs / <$types as Promote<U>>::widen_rhs(elem))
                }
            }
        )+
    };
}
scalar_lhs_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq, AbsDiffEq};

    use crate::*;

    #[test]
    fn promoted_arithmetic() {
        let sum = vec3(1, 2, 3) + vec3(0.5f32, 0.5, 0.5);
        let _: &Vec3f = &sum;
        assert_eq!(sum, [1.5, 2.5, 3.5]);

        let diff = vec2(1.0f32, 2.0) - vec2(0.5f64, 0.5);
        let _: &Vec2d = &diff;
        assert_eq!(diff, [0.5, 1.5]);

        let ints = vec2(1u8, 2) + vec2(1000i32, 2000);
        let _: &Vec2i = &ints;
        assert_eq!(ints, [1001, 2002]);
    }

    #[test]
    fn swizzle_operands() {
        let v = vec3(1, 2, 3);
        assert_eq!(v + v.zyx(), [4, 4, 4]);
        assert_eq!(v - v.xxx(), [0, 1, 2]);

        let w = vec4(10, 20, 30, 40);
        assert_eq!(v + w.wzy(), [41, 32, 23]);
    }

    #[test]
    fn compound_assignment() {
        let mut v = vec3(1, 2, 3);
        v += vec3(1, 1, 1);
        assert_eq!(v, [2, 3, 4]);
        v -= vec3(0.5, 0.5, 0.5);
        assert_eq!(v, [1, 2, 3]);

        v *= 3;
        assert_eq!(v, [3, 6, 9]);
        v /= 2.0;
        assert_eq!(v, [1, 3, 4]);

        let mut s = vec2(1, 2);
        let t = vec2(10, 20);
        s += t.yx();
        assert_eq!(s, [21, 12]);
    }

    #[test]
    fn scalar_arithmetic() {
        let v = vec3(1, 2, 3);
        assert_eq!(v * 2, [2, 4, 6]);
        assert_eq!(2 * v, [2, 4, 6]);
        assert_eq!(v * 0.5, [0.5, 1.0, 1.5]);
        assert_eq!(v / 2, [0, 1, 1]);
        assert_eq!(6 / v, [6, 3, 2]);
        assert_eq!(1.5f32 / vec2(3u8, 6), [0.5, 0.25]);
    }

    #[test]
    fn negation() {
        assert_eq!(-vec3(1, -2, 0), [-1, 2, 0]);
        assert_eq!(-Vec2f::X, [-1.0, 0.0]);
    }

    #[test]
    fn approx() {
        let a = vec3(0.1f32 + 0.2, 1.0, 2.0);
        let b = vec3(0.3f32, 1.0, 2.0);
        assert_abs_diff_eq!(a, b);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert!(!vec2(1.0, 2.0).abs_diff_eq(&vec2(1.0, 2.1), 0.05));
    }

    #[test]
    fn comparisons() {
        assert_eq!(vec2(1, 2), vec2(1u8, 2u8).map(i32::from));
        assert_eq!([1, 2], vec2(1, 2));
        assert_eq!(vec2(1, 2), [1, 2][..]);
        assert_ne!(vec2(1, 2), [2, 1]);
    }
}
