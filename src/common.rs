// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common constants and numeric helpers.

#![allow(missing_docs)]

use arrayvec::ArrayVec;

/// Process-wide tolerance for equality and degeneracy tests.
pub const EPSILON: f64 = 1e-7;

/// Flatness tolerance used when the crossing engine replaces a curved
/// edge by a polyline.
pub const SPLINE_APPROXIMATION_RATIO: f64 = 0.1;

/// Maximum recursive subdivision depth when flattening a curve.
pub const DEFAULT_FLATTENING_LIMIT: usize = 10;

/// Distance factor placing the control points of a cubic approximating a
/// quarter circle: 4/3 · (√2 − 1).
pub const KAPPA: f64 = 0.5522847498307933;

/// Is the value zero within [`EPSILON`]?
#[inline]
pub fn is_epsilon_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Are the two values equal within [`EPSILON`]?
#[inline]
pub fn is_epsilon_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Defines a trait that chooses between libstd or libm implementations of
/// the float methods the crate relies on.
#[cfg(not(feature = "std"))]
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        pub(crate) trait FloatFuncs: Sized {
            /// Special implementation for signum, because libm doesn't have it.
            fn signum(self) -> Self;

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        impl FloatFuncs for f64 {
            #[inline]
            fn signum(self) -> f64 {
                if self.is_nan() {
                    f64::NAN
                } else {
                    1.0_f64.copysign(self)
                }
            }

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("planar requires either the `std` or `libm` feature")
            })+
        }
    }
}

#[cfg(not(feature = "std"))]
define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Find real roots of the quadratic equation c0 + c1·x + c2·x² = 0.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            // Degenerate case
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        // Sort just to be friendly and make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::solve_quadratic;

    #[test]
    fn quadratic_roots() {
        let roots = solve_quadratic(-5.0, 0.0, 1.0);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] + 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((roots[1] - 5.0_f64.sqrt()).abs() < 1e-12);

        assert!(solve_quadratic(5.0, 0.0, 1.0).is_empty());

        let linear = solve_quadratic(5.0, 1.0, 0.0);
        assert_eq!(linear.len(), 1);
        assert!((linear[0] + 5.0).abs() < 1e-12);

        let double = solve_quadratic(1.0, 2.0, 1.0);
        assert_eq!(double.len(), 1);
        assert!((double[0] + 1.0).abs() < 1e-12);
    }
}
