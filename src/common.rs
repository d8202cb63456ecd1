// Copyright 2026 the Bezclip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezclip requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sqrt(self) -> Self => sqrt;
}

/// Largest absolute coordinate over a set of points, never less than 1.
///
/// Used to turn relative epsilons into absolute distances, so that clipping
/// behaves the same for curves drawn in unit space and in pixel space.
pub(crate) fn magnitude<'a>(points: impl IntoIterator<Item = &'a crate::Point>) -> f64 {
    points
        .into_iter()
        .fold(1.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()))
}
