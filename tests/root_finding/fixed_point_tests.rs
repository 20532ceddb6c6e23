use approx::assert_abs_diff_eq;
use rootapprox::root_finding::errors::RootFindingError;
use rootapprox::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use rootapprox::root_finding::report::{Residual, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() {
    let g   = |x: f64| 0.5 * (x + 2.0 / x);
    let res = fixed_point(g, 1.0, FixedPointCfg::new());

    assert_eq!(res.termination_reason,  TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 1.41421356237310, epsilon = 1e-8);
    assert!((res.root - g(res.root)).abs() < 1e-8);
    assert!(res.iterations <= 100);
    assert_eq!(res.evaluations, res.iterations);
}

#[test]
fn result_is_a_fixed_point_of_the_map() {
    let g   = |x: f64| 0.5 * (10.0 - x.powi(3)).sqrt();
    let res = fixed_point(g, 1.5, FixedPointCfg::new());

    assert!(res.converged());
    assert!((res.root - g(res.root)).abs() < 1e-8);
    assert_eq!(res.algorithm_name, "fixed_point");
}

#[test]
fn divergent_map_runs_to_the_cap() -> TestResult {
    // x_n = 2^(n+1) - 1, the step doubles each pass
    let g   = |x: f64| 2.0 * x + 1.0;
    let cfg = FixedPointCfg::new().set_max_iter(10)?;
    let res = fixed_point(g, 1.0, cfg);

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 10);
    assert_eq!(res.root, 2047.0);
    assert_eq!(res.residual, Residual::Step(1024.0));
    assert_eq!(res.stencil.stencil(), &[1023.0]);
    Ok(())
}

#[test]
fn single_iteration_reports_step() -> TestResult {
    let g   = |x: f64| 0.5 * (x + 2.0 / x);
    let cfg = FixedPointCfg::new().set_max_iter(1)?;
    let res = fixed_point(g, 1.0, cfg);

    assert!(!res.converged());
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.root, 1.5);
    assert_eq!(res.residual, Residual::Step(0.5));
    Ok(())
}

#[test]
fn starting_at_the_fixed_point_converges_in_one_pass() {
    let g   = |x: f64| x.cos();
    let x0  = 0.739085133215160641;
    let res = fixed_point(g, x0, FixedPointCfg::new());

    assert!(res.converged());
    assert_eq!(res.iterations, 1);
    assert_eq!(res.stencil.stencil(), &[x0]);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let g   = |x: f64| 0.5 * (x + 2.0 / x);
    let one = fixed_point(g, 1.0, FixedPointCfg::new());
    let two = fixed_point(g, 1.0, FixedPointCfg::new());

    assert_eq!(one.root.to_bits(), two.root.to_bits());
}
