//! Fixed-point iteration

use super::algorithms::{Algorithm, OpenFamily};
use super::config::{CommonCfg, impl_common_cfg};
use super::driver::{refine, Evaluator, Pass, Progress};
use super::report::{Residual, RootFindingReport, Stencil, ToleranceSatisfied};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);

/// Fixed-point configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerance and `max_iter`.
///
/// # Construction
/// - Use [`FixedPointCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a fixed point `x = g(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// # Arguments
/// - `func` : the iteration map `g`, not the `f` of `f(x) = 0`
/// - `x0`   : initial guess
/// - `cfg`  : [`FixedPointCfg`] (tolerance, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`     : last iterate `x = g(x0)`
/// - `residual` : [`Residual::Step`] `|x - x0|` of the last pass
/// - `stencil`  : the iterate `x0` that produced `root`
///
/// # Behavior
/// - Update: `x = g(x0)`; return `x` if `|x - x0| < tol`, else `x0 = x`.
/// - No divergence detection: a growing step still runs to the cap.
#[must_use]
pub fn fixed_point<F>(
    func: F,
    x0: f64,
    cfg: FixedPointCfg
) -> RootFindingReport
where F: FnMut(f64) -> f64 {
    let tol = cfg.tol();
    let mut evaluator = Evaluator::new(func);

    let mut prev   = x0;
    let mut parent = x0;
    let seed = Progress { estimate: x0, residual: Residual::Step(0.0) };

    let refined = refine(ALGORITHM, cfg.max_iter(), seed, || {
        parent   = prev;
        let x    = evaluator.eval(prev);
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
