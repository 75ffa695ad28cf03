//! Named-field access for quaternions.
//!
//! [`Quat`] dereferences to the same `x`/`y`/`z`/`w` view struct as a
//! 4-dimensional [`Vector`][crate::Vector]; `x`, `y` and `z` are the `i`,
//! `j` and `k` imaginary parts, `w` the real part.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{vector::view::XYZW, Quat};

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `Quat` is `repr(transparent)` over a 4-element vector,
        // which has the same layout as the `repr(C)` view.
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
