//! Arithmetic on swizzles.
//!
//! Read-only views compute like the vector they project. Writable views additionally support the
//! compound assignment operators, which write the result back through the view.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Const, Dimension, Pattern, Permutation, Promote, Promoted, Scalar, Vector};

use super::{Swizzle, SwizzleMut};

impl<'a, T, const M: usize, const N: usize, P> Neg for Swizzle<'a, T, M, N, P>
where
    T: Neg + Copy,
    P: Pattern<N>,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        -self.to_vector()
    }
}

macro_rules! swizzle_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident;)+) => {
        $(
            impl<'a, T, R, const M: usize, const N: usize, P> $trait<R> for Swizzle<'a, T, M, N, P>
            where
                T: Promote<R::Scalar>,
                R: Dimension<Dim = Const<N>>,
                P: Pattern<N>,
            {
                type Output = Vector<Promoted<T, R::Scalar>, N>;

                fn $method(self, rhs: R) -> Self::Output {
                    self.to_vector().$method(rhs)
                }
            }

            impl<'a, T, R, const M: usize, const N: usize, P> $assign_trait<R>
                for SwizzleMut<'a, T, M, N, P>
            where
                T: Promote<R::Scalar>,
                R: Dimension<Dim = Const<N>>,
                P: Permutation<N>,
            {
                fn $assign_method(&mut self, rhs: R) {
                    let mut values = self.to_vector();
                    values.$assign_method(rhs);
                    self.store(values);
                }
            }
        )+
    };
}
swizzle_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

macro_rules! swizzle_scalar_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident;)+) => {
        $(
            impl<'a, T, U, const M: usize, const N: usize, P> $trait<U> for Swizzle<'a, T, M, N, P>
            where
                U: Scalar,
                T: Promote<U>,
                P: Pattern<N>,
            {
                type Output = Vector<Promoted<T, U>, N>;

                fn $method(self, rhs: U) -> Self::Output {
                    self.to_vector().$method(rhs)
                }
            }

            impl<'a, T, U, const M: usize, const N: usize, P> $assign_trait<U>
                for SwizzleMut<'a, T, M, N, P>
            where
                U: Scalar,
                T: Promote<U>,
                P: Permutation<N>,
            {
                fn $assign_method(&mut self, rhs: U) {
                    let mut values = self.to_vector();
                    values.$assign_method(rhs);
                    self.store(values);
                }
            }
        )+
    };
}
swizzle_scalar_ops! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            impl<'a, U, const M: usize, const N: usize, P> Mul<Swizzle<'a, U, M, N, P>> for $types
            where
                U: Scalar,
                P: Pattern<N>,
                $types: Promote<U>,
            {
                type Output = Vector<Promoted<$types, U>, N>;

                fn mul(self, rhs: Swizzle<'a, U, M, N, P>) -> Self::Output {
                    self * rhs.to_vector()
                }
            }

            impl<'a, U, const M: usize, const N: usize, P> Div<Swizzle<'a, U, M, N, P>> for $types
            where
                U: Scalar,
                P: Pattern<N>,
                $types: Promote<U>,
            {
                type Output = Vector<Promoted<$types, U>, N>;

                fn div(self, rhs: Swizzle<'a, U, M, N, P>) -> Self::Output {
                    self / rhs.to_vector()
                }
            }
        )+
    };
}
scalar_lhs_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn scalar_both_sides() {
        let v = vec4(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v.xz() * 0.5, [1.0, 3.0]);
        assert_eq!(0.5 * v.xz(), [1.0, 3.0]);
        assert_eq!(v.wy() / 2, [4.0, 2.0]);
        assert_eq!(24.0 / v.zyx(), [4.0, 6.0, 12.0]);
    }

    #[test]
    fn compound_through_view() {
        let mut v = vec3(1, 2, 3);
        {
            let mut zx = v.zx_mut();
            zx -= vec2(1, 1);
            zx /= 2;
        }
        assert_eq!(v, [0, 2, 1]);

        let other = vec4(10, 20, 30, 40);
        let mut yz = v.yz_mut();
        yz += other.wx();
        assert_eq!(v, [0, 42, 11]);
    }
}
