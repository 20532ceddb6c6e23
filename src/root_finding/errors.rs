//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : invalid global parameters (e.g. max_iter)
//! └ [`ToleranceError`]   : invalid input tolerances
//!
//! Both are raised while building a configuration. The solvers themselves
//! never fail: running out of iterations is reported through
//! [`crate::root_finding::report::TerminationReason::IterationLimit`].


use thiserror::Error;


/// Root-finding configuration errors.
///
/// ┌ Invalid global configuration (e.g. max_iter < 1)
/// └ Wraps tolerance errors so one `?` chain covers every setter
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}


/// Tolerance configuration errors.
///
/// └ Invalid input tolerance (`tol`)
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid `tol` tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
