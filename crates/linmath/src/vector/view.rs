//! Named element access (`v.x`, `v.y`, ...) for vectors with 2 to 4 elements.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ( $( $name:ident [$n:literal] { $($field:ident),+ } )+ ) => {
        $(
            /// Field view of a vector's elements, reachable through [`Deref`].
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: the view is `repr(C)` with exactly `$n` fields of type `T` followed
                    // by a ZST, so it has the layout of `[T; $n]`.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see above.
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    XY[2] { x, y }
    XYZ[3] { x, y, z }
    XYZW[4] { x, y, z, w }
}
