//! Convergence tests for the three schemes
//!
//! These tests verify that each scheme exhibits its expected convergence
//! rate when the step is halved over a fixed time interval.

use rashevsky_rs::solver::{EulerScheme, Scheme, SchemeKind, TaylorScheme, TrapezoidScheme};

mod common;
use common::{ReferenceProblem, final_error, max_step_error, relative_error};

const STEPS_LIST: [usize; 4] = [40, 80, 160, 320];

fn convergence_ratios<F>(final_error_for: F) -> Vec<f64>
where
    F: Fn(&ReferenceProblem) -> f64,
{
    let errors: Vec<f64> = STEPS_LIST
        .iter()
        .map(|&steps| final_error_for(&ReferenceProblem::fast_growth(steps)))
        .collect();

    errors.windows(2).map(|w| w[0] / w[1]).collect()
}

#[test]
fn test_euler_first_order_convergence() {
    // Euler: error ~ O(h), halving h halves the error
    let ratios = convergence_ratios(|problem| {
        final_error(&EulerScheme::new(&problem.coefficients()), problem)
    });

    for (i, ratio) in ratios.iter().enumerate() {
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);
        assert!(
            *ratio > 1.8 && *ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_taylor_second_order_convergence() {
    // Taylor 2: error ~ O(h²), halving h divides the error by 4
    let ratios = convergence_ratios(|problem| {
        final_error(&TaylorScheme::new(&problem.coefficients()), problem)
    });

    for (i, ratio) in ratios.iter().enumerate() {
        println!("Taylor convergence ratio {}->{}: {}", i, i + 1, ratio);
        assert!(
            *ratio > 3.6 && *ratio < 4.6,
            "Convergence ratio {} not second-order",
            ratio
        );
    }
}

#[test]
fn test_trapezoid_second_order_convergence() {
    let ratios = convergence_ratios(|problem| {
        final_error(&TrapezoidScheme::new(&problem.coefficients()), problem)
    });

    for (i, ratio) in ratios.iter().enumerate() {
        println!("Trapezoid convergence ratio {}->{}: {}", i, i + 1, ratio);
        assert!(
            *ratio > 3.8 && *ratio < 4.2,
            "Convergence ratio {} not second-order",
            ratio
        );
    }
}

#[test]
fn test_declared_orders_match_observed() {
    for kind in SchemeKind::ALL {
        let coarse = ReferenceProblem::fast_growth(80);
        let fine = ReferenceProblem::fast_growth(160);

        let e_coarse = final_error(&kind.build(&coarse.coefficients()), &coarse);
        let e_fine = final_error(&kind.build(&fine.coefficients()), &fine);

        let observed = (e_coarse / e_fine).log2();
        assert!(
            (observed - kind.order() as f64).abs() < 0.15,
            "{}: observed order {} versus declared {}",
            kind,
            observed,
            kind.order()
        );
    }
}

#[test]
fn test_second_order_schemes_beat_euler_at_equal_step() {
    for steps in STEPS_LIST {
        let problem = ReferenceProblem::fast_growth(steps);
        let coefficients = problem.coefficients();

        let euler = max_step_error(&EulerScheme::new(&coefficients), &problem);
        let taylor = max_step_error(&TaylorScheme::new(&coefficients), &problem);
        let trapezoid = max_step_error(&TrapezoidScheme::new(&coefficients), &problem);

        assert!(taylor < euler, "{} steps: Taylor {} >= Euler {}", steps, taylor, euler);
        assert!(
            trapezoid < euler,
            "{} steps: trapezoid {} >= Euler {}",
            steps,
            trapezoid,
            euler
        );
    }
}

#[test]
fn test_reference_problem_final_values() {
    let problem = ReferenceProblem::reference();
    let coefficients = problem.coefficients();
    let exact = problem.exact_final();

    // 1 - 0.99·exp(-0.1)
    assert!((exact - 0.1042109561).abs() < 1e-10);

    let euler = EulerScheme::new(&coefficients);
    let taylor = TaylorScheme::new(&coefficients);
    let trapezoid = TrapezoidScheme::new(&coefficients);

    assert!(final_error(&taylor, &problem) < 1e-7);
    assert!(final_error(&trapezoid, &problem) < 1e-7);
    assert!(final_error(&euler, &problem) < 1e-4);
    assert!(relative_error(
        rashevsky_rs::solver::integrate(&euler, problem.params.p0, problem.params.steps),
        exact
    ) < 1e-3);

    println!(
        "{}: Euler {:e}, Taylor {:e}, trapezoid {:e}",
        problem.label,
        final_error(&euler, &problem),
        final_error(&taylor, &problem),
        final_error(&trapezoid, &problem)
    );
}

#[test]
fn test_schemes_stay_bounded_for_moderate_steps() {
    // h·k = 0.5: every scheme approaches 1 from below
    let problem = ReferenceProblem::fast_growth(10);
    let coefficients = problem.coefficients();

    for kind in SchemeKind::ALL {
        let scheme = kind.build(&coefficients);
        let mut p = problem.params.p0;
        for _ in 0..problem.params.steps {
            let next = scheme.step(p);
            assert!(next > p && next < 1.0, "{}: {} -> {}", kind, p, next);
            p = next;
        }
    }
}
