//! Named component access (`v.x`, `v.y`, `v.z`, `v.w`).

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! named_components {
    ($($n:literal => $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[doc = concat!("Field access target of [`Vector<T, ", stringify!($n), ">`].")]
            #[repr(C)]
            pub struct $name<T> {
                $(pub $field: T,)+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &$name<T> {
                    // Safety: `Vector<T, N>` is a transparent `[T; N]`, and the target is `N`
                    // consecutive `T`s followed by a zero-sized field.
                    unsafe { &*(self as *const Self).cast::<$name<T>>() }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut $name<T> {
                    unsafe { &mut *(self as *mut Self).cast::<$name<T>>() }
                }
            }
        )+
    };
}

named_components! {
    1 => X { x },
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
