use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::driver::{refine, Evaluator, Pass, Progress};
use super::report::{Residual, RootFindingReport, Stencil, ToleranceSatisfied};
use super::signs::same_sign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ `tol`      - 1e-8, compared against the bracket half-width
/// └ `max_iter` - 100
///
/// # Validation:
/// └ Performed by the setters.
///    ├ `tol`      > 0 and finite
///    └ `max_iter` >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + 0.5 * (b - a)
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on `[a, b]`
/// and that `func(a) * func(b) <= 0`. Neither is checked: a bracket without
/// a sign change still runs, it just converges somewhere meaningless.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Left endpoint of the search interval.
/// ├ `b`    - Right endpoint of the search interval.
/// └ `cfg`  - Tolerance and iteration cap. See [`BisectionCfg`]
///
/// # Returns
///
/// A [`RootFindingReport`] with
/// ├ `root`       : the last midpoint computed
/// ├ `residual`   : [`Residual::HalfWidth`] of the final bracket,
/// │                or [`Residual::FunctionValue`] `0.0` on an exact hit
/// └ `stencil`    : [`Stencil::Bracket`] with the final `[a, b]`
///
/// # Behavior
/// ├ Only `f(a)` is retained; `f(b)` is evaluated nowhere.
/// ├ Each pass evaluates the midpoint `x` once and returns it if
/// │   `f(x) == 0` or `0.5 * (b - a) < tol`.
/// ├ Otherwise `a = x` when `f(a) * f(x) > 0`, else `b = x`.
/// │   └ A zero product moves `b`, never `a`.
/// └ On the iteration limit the report carries the last midpoint and the
///   half-width after the final narrowing, and a warning is logged.
///
/// # Notes
/// └ `a == b` still runs one pass, returning `x == a`.
#[must_use]
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {
    let tol = cfg.tol();
    let mut evaluator = Evaluator::new(func);

    let mut fa = evaluator.eval(a);

    let seed = Progress {
        estimate: calculate_bisection(a, b),
        residual: Residual::HalfWidth(0.5 * (b - a)),
    };

    let refined = refine(ALGORITHM, cfg.max_iter(), seed, || {
        let half_width = 0.5 * (b - a);
        let midpoint   = calculate_bisection(a, b);
        let fm         = evaluator.eval(midpoint);

        if fm == 0.0 {
            return Pass::Converged {
                root      : midpoint,
                satisfied : ToleranceSatisfied::ExactRoot,
                residual  : Residual::FunctionValue(0.0),
            };
        }
        if half_width < tol {
            return Pass::Converged {
                root      : midpoint,
                satisfied : ToleranceSatisfied::WidthTolReached,
                residual  : Residual::HalfWidth(half_width),
            };
        }

        // shrink interval
        if same_sign(fa, fm) {
            a  = midpoint;
            fa = fm;
        } else {
            b = midpoint;
        }

        Pass::Continue(Progress {
            estimate: midpoint,
            residual: Residual::HalfWidth(0.5 * (b - a)),
        })
    });

    RootFindingReport {
        root                : refined.root,
        iterations          : refined.iterations,
        evaluations         : evaluator.evals(),
        termination_reason  : refined.termination,
        tolerance_satisfied : refined.satisfied,
        residual            : refined.residual,
        stencil             : Stencil::bracket(a, b),
        algorithm_name      : ALGORITHM.algorithm_name(),
    }
}
