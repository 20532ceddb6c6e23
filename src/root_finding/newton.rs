//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::derivative::first_derivative;
use super::driver::{refine, Evaluator, Pass, Progress};
use super::report::{Residual, RootFindingReport, Stencil, ToleranceSatisfied};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);

/// Perturbation for the centered-difference derivative. Not configurable.
pub const DERIVATIVE_STEP: f64 = 1e-3;


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with a central finite-difference derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `x0`    : initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`        : last iterate
/// - `evaluations` : three per pass (two derivative probes, one `f(x0)`)
/// - `residual`    : [`Residual::Step`] `|x - x0|` of the last pass
/// - `stencil`     : previous iterate used to form the step
///
/// # Behavior
/// - Derivative: [`first_derivative`] at `x0` with `h =` [`DERIVATIVE_STEP`]
/// - Step: `x = x0 - f(x0) / f'(x0)`; return `x` if `|x - x0| < tol`
///
/// # Warning
/// - A vanishing derivative estimate is not guarded. The step becomes huge,
///   infinite or NaN and the iteration runs on to the cap.
/// - Convergence is *local only*. For guaranteed convergence, use a
///   **bracketed method** (e.g. bisection)
#[must_use]
pub fn newton<F>(
    func: F,
    x0: f64,
    cfg: NewtonCfg,
) -> RootFindingReport
where F: FnMut(f64) -> f64 {
    let tol = cfg.tol();
    let mut evaluator = Evaluator::new(func);

    let mut prev   = x0;
    let mut parent = x0;
    let seed = Progress { estimate: x0, residual: Residual::Step(0.0) };

    let refined = refine(ALGORITHM, cfg.max_iter(), seed, || {
        parent = prev;

        let dfx  = first_derivative(|x| evaluator.eval(x), prev, DERIVATIVE_STEP);
        let fx   = evaluator.eval(prev);
        let x    = prev - fx / dfx;
        let step = (x - prev).abs();

        if step < tol {
            return Pass::Converged {
                root      : x,
                satisfied : ToleranceSatisfied::StepSizeReached,
                residual  : Residual::Step(step),
            };
        }

        prev = x;
        Pass::Continue(Progress { estimate: x, residual: Residual::Step(step) })
    });

    RootFindingReport {
        root                : refined.root,
        iterations          : refined.iterations,
        evaluations         : evaluator.evals(),
        termination_reason  : refined.termination,
        tolerance_satisfied : refined.satisfied,
        residual            : refined.residual,
        stencil             : Stencil::singleton(parent),
        algorithm_name      : ALGORITHM.algorithm_name(),
    }
}
