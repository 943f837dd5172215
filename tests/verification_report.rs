//! Integration tests for the verification run and its report
//!
//! Covers the full pipeline used by the binary up to the benchmark:
//! parameters → coefficients → lockstep verification → text report.

use approx::assert_relative_eq;

use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
use rashevsky_rs::report;
use rashevsky_rs::solver::SchemeKind;
use rashevsky_rs::verification::{ROW_INTERVAL, run_verification, verify_full};

mod common;
use common::ReferenceProblem;

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_rows_cover_every_fifth_step() {
    let problem = ReferenceProblem::reference();
    let rows = run_verification(&problem.params, &problem.coefficients());

    let steps: Vec<usize> = rows.iter().map(|r| r.step).collect();
    assert_eq!(steps, (0..=50).step_by(ROW_INTERVAL).collect::<Vec<_>>());

    let first = rows[0];
    assert_relative_eq!(first.exact, 0.01, epsilon = 1e-15);
    assert_eq!(first.euler, 0.01);
    assert_eq!(first.taylor2, 0.01);
    assert_eq!(first.trapezoid, 0.01);
}

#[test]
fn test_second_order_closer_than_euler_at_every_step() {
    let problem = ReferenceProblem::reference();
    let data = verify_full(&problem.params, &problem.coefficients()).unwrap();

    let euler = data.errors(SchemeKind::Euler).unwrap();
    let taylor = data.errors(SchemeKind::Taylor2).unwrap();
    let trapezoid = data.errors(SchemeKind::Trapezoid).unwrap();

    for i in 1..=problem.params.steps {
        assert!(taylor[i] < euler[i], "step {}: {} >= {}", i, taylor[i], euler[i]);
        assert!(trapezoid[i] < euler[i], "step {}: {} >= {}", i, trapezoid[i], euler[i]);
    }
}

#[test]
fn test_second_order_rows_closer_than_euler() {
    let problem = ReferenceProblem::reference();
    let rows = run_verification(&problem.params, &problem.coefficients());

    for row in rows.iter().skip(1) {
        let [e_euler, e_taylor, e_trap] = row.errors();
        assert!(e_taylor < e_euler, "step {}: {} >= {}", row.step, e_taylor, e_euler);
        assert!(e_trap < e_euler, "step {}: {} >= {}", row.step, e_trap, e_euler);
    }
}

#[test]
fn test_rows_match_full_comparison() {
    let problem = ReferenceProblem::reference();
    let coefficients = problem.coefficients();

    let lockstep = run_verification(&problem.params, &coefficients);
    let full = verify_full(&problem.params, &coefficients).unwrap();

    // Both paths apply the same recurrences to the same coefficients
    assert_eq!(lockstep, full.rows(ROW_INTERVAL).unwrap());
}

#[test]
fn test_final_values_agree_with_exact() {
    let problem = ReferenceProblem::reference();
    let data = verify_full(&problem.params, &problem.coefficients()).unwrap();
    let exact = data.exact_final().unwrap();

    let value = |kind| data.trajectory(kind).unwrap().final_value().unwrap();

    assert_relative_eq!(value(SchemeKind::Taylor2), exact, epsilon = 1e-7);
    assert_relative_eq!(value(SchemeKind::Trapezoid), exact, epsilon = 1e-7);
    assert_relative_eq!(value(SchemeKind::Euler), exact, epsilon = 1e-4);
    assert_relative_eq!(
        value(SchemeKind::Taylor2),
        value(SchemeKind::Trapezoid),
        epsilon = 1e-6
    );
}

#[test]
fn test_verification_is_deterministic() {
    let problem = ReferenceProblem::reference();
    let coefficients = problem.coefficients();

    let first = run_verification(&problem.params, &coefficients);
    let second = run_verification(&problem.params, &coefficients);

    assert_eq!(first, second);
}

#[test]
fn test_oversized_step_stays_finite_but_leaves_unit_interval() {
    let problem = ReferenceProblem::oversized_step();
    let rows = run_verification(&problem.params, &problem.coefficients());

    assert!(rows.iter().all(|r| r.is_finite()));
    assert!(rows.iter().any(|r| r.euler > 1.0 || r.euler < 0.0));
}

#[test]
fn test_invalid_parameters_rejected() {
    let params = ModelParameters::default().with_step_size(0.0);
    let coefficients = RecurrenceCoefficients::from_parameters(&params);

    let error = verify_full(&params, &coefficients).unwrap_err();
    assert!(error.contains("Step size"));
}

#[test]
fn test_report_verification_section() {
    let problem = ReferenceProblem::reference();
    let rows = run_verification(&problem.params, &problem.coefficients());

    let text = render(|out| {
        report::write_banner(out, &problem.params)?;
        report::write_verification_table(out, &rows)
    });
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "Taller 1 - Benchmark Rust");
    assert_eq!(lines[2], "Parametros: b=0.02 d=0.015 r=0.1 k=0.002 h=1");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "--- Verificacion: solucion en una trayectoria ---");

    let last = lines.last().unwrap();
    assert!(last.starts_with("   50    0.10421096"));
    assert_eq!(last.len(), 61);
}

#[test]
fn test_error_analysis_report() {
    let problem = ReferenceProblem::reference();
    let data = verify_full(&problem.params, &problem.coefficients()).unwrap();

    let rows = data.rows(10).unwrap();
    let text = render(|out| {
        report::write_error_table(out, &rows)?;
        report::write_final_summary(out, &data)
    });

    assert!(text.contains("Err Trap"));
    assert!(text.contains("Resumen p(50):"));
    assert!(text.contains("  Taylor2  : 0.1042108963"));
    assert!(text.contains("  Trapecio : 0.1042109860"));
}
