//! Shared refinement loop for all root-finding algorithms.
//!
//! Every method follows the same skeleton:
//!
//! Initialize → loop { Evaluate → CheckConvergence → [Return | Update] } → report on cap
//!
//! The method supplies one refinement pass as a closure returning [`Pass`];
//! [`refine`] owns the iteration counter, the convergence exit and the
//! non-convergence diagnostic.

use super::algorithms::Algorithm;
use super::report::{Residual, TerminationReason, ToleranceSatisfied};


/// Counts calls made to the user function.
pub(crate) struct Evaluator<F> {
    func: F,
    evals: usize,
}
impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> f64 {
        self.evals += 1;
        (self.func)(x)
    }

    pub(crate) fn evals(&self) -> usize { self.evals }
}


/// Latest estimate and the measure printed if the cap is hit right after it.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Progress {
    pub estimate: f64,
    pub residual: Residual,
}


/// Outcome of one refinement pass.
#[derive(Debug, Copy, Clone)]
pub(crate) enum Pass {
    /// Tolerance met; `root` is returned as is.
    Converged {
        root: f64,
        satisfied: ToleranceSatisfied,
        residual: Residual,
    },
    /// State updated; keep refining.
    Continue(Progress),
}


/// Result of [`refine`], before method-specific fields are attached.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Refined {
    pub root: f64,
    pub iterations: usize,
    pub termination: TerminationReason,
    pub satisfied: ToleranceSatisfied,
    pub residual: Residual,
}


/// Runs `pass` until it converges or the iteration counter exceeds `max_iter`.
///
/// # Arguments
/// - `algorithm` : method in use; fixes the counter origin and the diagnostic label
/// - `max_iter`  : iteration cap, validated >= 1 by the config
/// - `seed`      : returned when no pass runs (two-point methods with `max_iter = 1`)
/// - `pass`      : one refinement step
///
/// # Notes
/// - The counter starts at [`Algorithm::first_iteration`] and is incremented
///   after each non-converged pass, before the cap test.
/// - On the iteration limit a `tracing::warn!` event is emitted and the last
///   estimate is returned; this is never an error.
pub(crate) fn refine<P>(
    algorithm: Algorithm,
    max_iter: usize,
    seed: Progress,
    mut pass: P,
) -> Refined
where P: FnMut() -> Pass {
    let mut iteration = algorithm.first_iteration();
    let mut passes    = 0;
    let mut last      = seed;

    while iteration <= max_iter {
        passes += 1;
        match pass() {
            Pass::Converged { root, satisfied, residual } => {
                tracing::debug!(
                    algorithm  = algorithm.algorithm_name(),
                    iterations = passes,
                    root,
                    "{} converged", algorithm.display_name()
                );
                return Refined {
                    root,
                    iterations  : passes,
                    termination : TerminationReason::ToleranceReached,
                    satisfied,
                    residual,
                };
            }
            Pass::Continue(progress) => last = progress,
        }
        iteration += 1;
    }

    tracing::warn!(
        algorithm = algorithm.algorithm_name(),
        max_iter,
        residual  = last.residual.value(),
        "{} not converged after {} iterations. Final {}",
        algorithm.display_name(), max_iter, last.residual
    );

    Refined {
        root        : last.estimate,
        iterations  : passes,
        termination : TerminationReason::IterationLimit,
        satisfied   : ToleranceSatisfied::ToleranceNotReached,
        residual    : last.residual,
    }
}
