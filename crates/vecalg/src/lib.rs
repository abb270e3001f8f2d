//! Fixed-size vector algebra with swizzling.
//!
//! # Overview
//!
//! [`Vector<T, N>`] is a plain, `Copy`able array of `N` numeric elements. On top of that, this
//! library provides:
//!
//! - **Swizzling**: vectors with up to 4 components can be re-projected through any combination of
//!   their named components (`v.zyx()`, `v.xx()`, `v.wzyx()`, ...). The result is a [`Swizzle`],
//!   a borrowing view that can be used anywhere a vector of the same arity is accepted.
//!   Duplicate-free patterns also have writable counterparts (`v.zx_mut()`) returning a
//!   [`SwizzleMut`].
//! - **Flattening construction**: [`Vector::new`] accepts a tuple of scalars, vectors and
//!   swizzles in any order, as long as their combined number of components matches the vector's
//!   arity. The check happens at compile time.
//! - **Numeric promotion**: mixing element types in arithmetic produces the type that can
//!   represent both operands ([`Promote`]), so `Vec3i + Vec3f` yields a `Vec3f`.
//!
//! ```
//! # use vecalg::*;
//! let v12 = vec2(1, 2);
//! let v = Vector::<i32, 4>::new((v12.xx(), v12.yy()));
//! assert_eq!(v, [1, 1, 2, 2]);
//!
//! let mixed = vec3(1, 2, 3) + vec3(0.5, 0.5, 0.5);
//! assert_eq!(mixed, [1.5, 2.5, 3.5]);
//!
//! let composed = vector![0.0f32, v12.yx()];
//! assert_eq!(composed, vec3(0.0f32, 2.0, 1.0));
//! ```
//!
//! # Compile-time checks
//!
//! Every contract violation that the type system can see is rejected at compile time rather
//! than at runtime:
//!
//! - Constructing a vector from the wrong number of components:
//!
//! ```compile_fail
//! # use vecalg::*;
//! let v = Vector::<i32, 4>::new((1, 2, 3));
//! ```
//!
//! - Adding vectors of different arity:
//!
//! ```compile_fail
//! # use vecalg::*;
//! let v = vec3(1, 2, 3) + vec2(1, 2);
//! ```
//!
//! - Taking the cross product of anything that is not 3-dimensional:
//!
//! ```compile_fail
//! # use vecalg::*;
//! let v = vec3(1, 2, 3).cross(vec4(1, 2, 3, 4));
//! ```
//!
//! - Writing through a swizzle with repeated components:
//!
//! ```compile_fail
//! # use vecalg::*;
//! let mut v = vec3(1, 2, 3);
//! v.xxy_mut().set(vec3(4, 5, 6));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only statically sized vectors. Arity is a const generic parameter.
//! - Element types are primitive numbers (or user types implementing the numeric traits of this
//!   crate). Non-[`Copy`] numbers are not supported.
//! - No matrices, tensors, SIMD-specific layouts or unit types.

mod dim;
mod promote;
mod swizzle;
mod traits;
mod vector;

pub use dim::*;
pub use promote::*;
pub use swizzle::{is_unique, pattern, Pattern, Permutation, Swizzle, SwizzleMut};
pub use traits::*;
pub use vector::*;

/// Builds a vector from a list of scalars, vectors and swizzles, inferring its element type and
/// arity.
///
/// This is shorthand for [`compose`] with a tuple of the arguments.
///
/// # Examples
///
/// ```
/// # use vecalg::*;
/// let xy = vec2(1u8, 2);
/// let v = vector![xy, 3.5f32];
/// assert_eq!(v, Vec3f::new((1.0, 2.0, 3.5)));
/// ```
#[macro_export]
macro_rules! vector {
    ($($arg:expr),+ $(,)?) => {
        $crate::compose(($($arg,)+))
    };
}
