use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::driver::{refine, Evaluator, Pass, Progress};
use super::report::{Residual, RootFindingReport, Stencil, ToleranceSatisfied};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Notes
/// - Both seeds count against `max_iter`, so at most `max_iter - 1`
///   refinement passes run.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// The denominator `fx1 - fx0` is not guarded; equal function values give
/// an infinite or NaN intercept.
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> f64 {
    x1 - fx1 * (x1 - x0) / (fx1 - fx0)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SecantCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`     : last secant intercept, or `x1` if no pass ran
/// - `residual` : [`Residual::Step`] `|x - x1|` of the last pass
/// - `stencil`  : the pair `{x1, x0}` that formed the last step
///
/// # Behavior
/// - Update:
///     x = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
/// - Tolerance: return `x` if `|x - x1| < tol`
/// - Otherwise shift the window `x0 = x1`, `x1 = x` with a single new
///   evaluation `f(x)`.
///
/// # Warning
/// - Near-equal `f(x0)` and `f(x1)` produce large or NaN steps; they surface
///   only as non-convergence. For guaranteed convergence, use a
///   **bracketed method** (e.g. bisection)
#[must_use]
pub fn secant<F>(
    func: F,
    mut x0: f64,
    mut x1: f64,
    cfg: SecantCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {
    let tol = cfg.tol();
    let mut evaluator = Evaluator::new(func);

    let mut fx0 = evaluator.eval(x0);
    let mut fx1 = evaluator.eval(x1);

    let mut parents = (x1, x0);
    let seed = Progress { estimate: x1, residual: Residual::Step((x1 - x0).abs()) };

    let refined = refine(ALGORITHM, cfg.max_iter(), seed, || {
        parents = (x1, x0);

        let x    = calculate_secant_x_intercept((x0, fx0), (x1, fx1));
        let step = (x - x1).abs();

        if step < tol {
            return Pass::Converged {
                root      : x,
                satisfied : ToleranceSatisfied::StepSizeReached,
                residual  : Residual::Step(step),
            };
        }

        x0  = x1;
        fx0 = fx1;
        x1  = x;
        fx1 = evaluator.eval(x);

        Pass::Continue(Progress { estimate: x, residual: Residual::Step(step) })
    });

    RootFindingReport {
        root                : refined.root,
        iterations          : refined.iterations,
        evaluations         : evaluator.evals(),
        termination_reason  : refined.termination,
        tolerance_satisfied : refined.satisfied,
        residual            : refined.residual,
        stencil             : Stencil::doubleton(parents.0, parents.1),
        algorithm_name      : ALGORITHM.algorithm_name(),
    }
}
