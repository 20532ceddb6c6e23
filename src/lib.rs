//! Root approximation for continuous functions of one real variable.
//!
//! Five classical methods live under [`root_finding`]:
//! - bracketing : [`root_finding::bisection`], [`root_finding::false_position`]
//! - open       : [`root_finding::fixed_point`], [`root_finding::newton`], [`root_finding::secant`]
//!
//! Every solver returns a [`root_finding::report::RootFindingReport`]. Running out
//! of iterations is not an error: the last estimate is returned, the report is
//! marked [`root_finding::report::TerminationReason::IterationLimit`] and a
//! `tracing` warning is emitted.
//!
//! ```
//! use rootapprox::root_finding::bisection::{bisection, BisectionCfg};
//!
//! let report = bisection(|x: f64| 2.0 * x - 1.0, -1.0, 1.0, BisectionCfg::new());
//! assert!(report.converged());
//! assert!((report.value() - 0.5).abs() < 1e-8);
//! ```

pub mod root_finding;
