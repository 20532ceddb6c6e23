//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::ExactRoot`]
///     - [`crate::root_finding::algorithms::BracketFamily::Bisection`]
///     - f(x) == 0 at the midpoint
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - [`crate::root_finding::algorithms::BracketFamily::Bisection`]
///     - [a, b] -> 0.5 * (b - a) < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - open methods and false position
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Tolerance not reached, with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ToleranceSatisfied {
    ExactRoot,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Convergence measure carried by a report.
///
/// Each method tracks its own quantity:
/// - [`Residual::HalfWidth`]     : bisection, `0.5 * (b - a)`
/// - [`Residual::Step`]          : fixed point, newton, secant, `|x_n - x_{n-1}|`
/// - [`Residual::FunctionValue`] : false position on iteration limit, `|f(x0)|`;
///                                 bisection on an exact hit, `0.0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Residual {
    HalfWidth(f64),
    Step(f64),
    FunctionValue(f64),
}
impl Residual {
    pub fn value(&self) -> f64 {
        match *self {
            Residual::HalfWidth(v) | Residual::Step(v) | Residual::FunctionValue(v) => v,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Residual::HalfWidth(_)     => "tolerance",
            Residual::Step(_)          => "difference",
            Residual::FunctionValue(_) => "function value",
        }
    }
}
impl std::fmt::Display for Residual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is {}", self.kind(), self.value())
    }
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval (false position keeps `[x0, x1]`
///       in iteration order, not sorted)
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterate(s) used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate (converged or last computed)
/// - `iterations`          : refinement passes performed
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `residual`            : final convergence measure ([`Residual`])
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RootFindingReport {
    pub root                : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub residual            : Residual,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}
impl RootFindingReport {
    /// Root estimate, whether or not the tolerance was met.
    #[inline]
    pub fn value(&self) -> f64 { self.root }

    #[inline]
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
impl From<RootFindingReport> for f64 {
    fn from(report: RootFindingReport) -> f64 { report.root }
}
