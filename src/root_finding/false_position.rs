use super::algorithms::{Algorithm, BracketFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::driver::{refine, Evaluator, Pass, Progress};
use super::report::{Residual, RootFindingReport, Stencil, ToleranceSatisfied};
use super::signs::opposite_sign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::FalsePosition);

/// False position configuration
///
/// # Defaults
///
/// ┌ `tol`      - 1e-8, compared against `|x - x1|`
/// └ `max_iter` - 100; both seeds count, so at most 99 passes
///
/// # Validation:
/// └ Performed by the setters.
///    ├ `tol`      > 0 and finite
///    └ `max_iter` >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FalsePositionCfg {
    common: CommonCfg,
}
impl FalsePositionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(FalsePositionCfg);

/// Calculates the x-intercept of the chord through
/// `(x0, fx0)` and `(x1, fx1)`, anchored at `x0`.
#[inline]
fn calculate_chord_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> f64 {
    x0 - fx0 * (x1 - x0) / (fx1 - fx0)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// This method assumes that `func` is continuous between `x0` and `x1` and
/// that `func(x0) * func(x1) < 0`. Neither is checked.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `x0`   - First bracket point.
/// ├ `x1`   - Second bracket point.
/// └ `cfg`  - Tolerance and iteration cap. See [`FalsePositionCfg`]
///
/// # Returns
///
/// A [`RootFindingReport`] with
/// ├ `root`     : last chord intercept, or `x1` if no pass ran
/// ├ `residual` : [`Residual::Step`] `|x - x1|` on convergence,
/// │              [`Residual::FunctionValue`] `|f(x0)|` on the iteration limit
/// └ `stencil`  : [`Stencil::Bracket`] with the `[x0, x1]` pair that formed
///                the last intercept (iteration order, not sorted)
///
/// # Behavior
/// ├ Intercept: `x = x0 - f(x0) * (x1 - x0) / (f(x1) - f(x0))`
/// ├ Tolerance: return `x` if `|x - x1| < tol`
/// ├ Otherwise `f` is evaluated again at the current `x0`, giving `q`.
/// │   ├ `f(x1) * q < 0` keeps `x0`
/// │   └ otherwise `x0 = x1`
/// └ Then `x1 = x` with a fresh `f(x)`.
///
/// # Notes
/// └ The re-evaluation at `x0` happens every non-converged pass, so a pass
///   costs two calls to `func`. Callers counting side effects can rely on it.
#[must_use]
pub fn false_position<F>(
    func: F,
    mut x0: f64,
    mut x1: f64,
    cfg: FalsePositionCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {
    let tol = cfg.tol();
    let mut evaluator = Evaluator::new(func);

    let mut fx0 = evaluator.eval(x0);
    let mut fx1 = evaluator.eval(x1);

    let mut bounds = (x0, x1);
    let seed = Progress { estimate: x1, residual: Residual::FunctionValue(fx0.abs()) };

    let refined = refine(ALGORITHM, cfg.max_iter(), seed, || {
        bounds = (x0, x1);

        let x    = calculate_chord_x_intercept((x0, fx0), (x1, fx1));
        let step = (x - x1).abs();

        if step < tol {
            return Pass::Converged {
                root      : x,
                satisfied : ToleranceSatisfied::StepSizeReached,
                residual  : Residual::Step(step),
            };
        }

        let q = evaluator.eval(x0);
        if !opposite_sign(fx1, q) {
            x0  = x1;
            fx0 = fx1;
        }
        x1  = x;
        fx1 = evaluator.eval(x);

        Pass::Continue(Progress { estimate: x, residual: Residual::FunctionValue(q.abs()) })
    });

    RootFindingReport {
        root                : refined.root,
        iterations          : refined.iterations,
        evaluations         : evaluator.evals(),
        termination_reason  : refined.termination,
        tolerance_satisfied : refined.satisfied,
        residual            : refined.residual,
        stencil             : Stencil::bracket(bounds.0, bounds.1),
        algorithm_name      : ALGORITHM.algorithm_name(),
    }
}
