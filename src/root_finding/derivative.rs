//! Numeric first derivative.

/// Default perturbation for [`first_derivative`].
pub const DEFAULT_STEP: f64 = 1e-3;

/// Estimates f'(x) with the centered difference
///
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`
///
/// Second-order accurate: the truncation error is `O(epsilon^2)` and vanishes
/// for polynomials of degree two or less.
///
/// # Notes
/// - Evaluates `func` exactly twice, at `x + epsilon` then `x - epsilon`.
/// - No validation: `epsilon == 0` or a function undefined near `x`
///   yields NaN or an infinity.
pub fn first_derivative<F>(mut func: F, x: f64, epsilon: f64) -> f64
where F: FnMut(f64) -> f64 {
    let f_plus  = func(x + epsilon);
    let f_minus = func(x - epsilon);
    (f_plus - f_minus) / (2.0 * epsilon)
}
