//! Sign utilities for bracketing algorithms.
//! - `same_sign`     : `true` if `x * y > 0`
//! - `opposite_sign` : `true` if `x * y < 0`
//!
//! Both compare the plain product, so a zero factor is neither. Bisection
//! relies on this: a zero product moves the right endpoint, never the left.

/// Returns `true` if the product `x * y` is strictly positive.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x * y > 0.0
}


/// Returns `true` if the product `x * y` is strictly negative.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}
