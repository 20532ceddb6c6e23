use std::cell::Cell;

use approx::assert_abs_diff_eq;
use rootapprox::root_finding::errors::RootFindingError;
use rootapprox::root_finding::newton::{newton, NewtonCfg, DERIVATIVE_STEP};
use rootapprox::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() {
    let f   = |x: f64| x * x - 2.0;
    let res = newton(f, 1.0, NewtonCfg::new());

    assert_eq!(res.termination_reason,  TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 1.41421356237310, epsilon = 1e-8);
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "newton");
}

#[test]
fn finds_cos_fixed_point() {
    let f   = |x: f64| x.cos() - x;
    let res = newton(f, 1.0, NewtonCfg::new());

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 0.73908513321516064166, epsilon = 1e-8);
}

#[test]
fn three_evaluations_per_pass() {
    let calls = Cell::new(0usize);
    let f = |x: f64| { calls.set(calls.get() + 1); x * x - 2.0 };

    let res = newton(f, 1.0, NewtonCfg::new());

    assert_eq!(res.evaluations, calls.get());
    assert_eq!(res.evaluations, 3 * res.iterations);
}

#[test]
fn probes_at_fixed_step() -> TestResult {
    let mut probes = Vec::new();
    let cfg = NewtonCfg::new().set_max_iter(1)?;
    let _ = newton(|x: f64| { probes.push(x); x * x - 2.0 }, 1.0, cfg);

    assert_eq!(probes, vec![1.0 + DERIVATIVE_STEP, 1.0 - DERIVATIVE_STEP, 1.0]);
    Ok(())
}

#[test]
fn single_iteration_reports_step() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = NewtonCfg::new().set_max_iter(1)?;
    let res = newton(f, 1.0, cfg);

    assert!(!res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 1);
    assert_abs_diff_eq!(res.root, 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(res.residual.value(), 0.5, epsilon = 1e-9);
    assert_eq!(res.stencil.stencil(), &[1.0]);
    Ok(())
}

#[test]
fn flat_function_does_not_panic() -> TestResult {
    // zero derivative estimate: the step is infinite and then NaN
    let f   = |_x: f64| 2.0;
    let cfg = NewtonCfg::new().set_max_iter(5)?;
    let res = newton(f, 1.0, cfg);

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 5);
    assert!(!res.root.is_finite());
    Ok(())
}

#[test]
fn repeated_runs_are_bit_identical() {
    let f   = |x: f64| x * x - 2.0;
    let one = newton(f, 1.0, NewtonCfg::new());
    let two = newton(f, 1.0, NewtonCfg::new());

    assert_eq!(one.root.to_bits(), two.root.to_bits());
}
