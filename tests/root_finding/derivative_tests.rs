use approx::assert_abs_diff_eq;
use rootapprox::root_finding::derivative::{first_derivative, DEFAULT_STEP};

#[test]
fn square_at_two() {
    let f   = |x: f64| x * x;
    let dfx = first_derivative(f, 2.0, DEFAULT_STEP);

    assert_abs_diff_eq!(dfx, 4.0, epsilon = 1e-3);
}

#[test]
fn exact_for_quadratics() {
    let f   = |x: f64| 3.0 * x * x - 2.0 * x + 7.0;
    let dfx = first_derivative(f, 1.5, 0.25);

    assert_abs_diff_eq!(dfx, 7.0, epsilon = 1e-12);
}

#[test]
fn cubic_error_is_second_order() {
    // f''' = 6, so the centered difference is off by exactly epsilon^2
    let f = |x: f64| x.powi(3);
    for &eps in &[1e-1, 1e-2] {
        let dfx = first_derivative(f, 1.0, eps);
        assert_abs_diff_eq!(dfx - 3.0, eps * eps, epsilon = 1e-9);
    }
}

#[test]
fn evaluates_twice() {
    let mut probes = Vec::new();
    let _ = first_derivative(|x: f64| { probes.push(x); x.sin() }, 1.0, 0.5);

    assert_eq!(probes, vec![1.5, 0.5]);
}

#[test]
fn zero_step_is_not_finite() {
    let dfx = first_derivative(|x: f64| x.exp(), 1.0, 0.0);
    assert!(dfx.is_nan());
}
