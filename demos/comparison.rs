//! Example: error analysis of the three schemes
//!
//! Runs every scheme over the full trajectory, prints the extended error
//! table and the final summary, then writes the comparison figure and the
//! CSV data to the temporary directory.
//!
//! Two step sizes are compared:
//!
//! - h = 1.0 (the reference run, 50 steps)
//! - h = 0.5 (same time span, 100 steps)
//!
//! ```bash
//! cargo run --release --example comparison
//! RUST_LOG=debug cargo run --example comparison
//! ```

use env_logger::Env;

use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
use rashevsky_rs::output::export::{CsvConfig, CsvMetadata};
use rashevsky_rs::output::{
    PlotConfig, export_comparison_csv, export_trajectory_csv, plot_comparison,
};
use rashevsky_rs::report;
use rashevsky_rs::solver::SchemeKind;
use rashevsky_rs::verification::verify_full;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Rashevsky model - Error analysis");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    let reference = ModelParameters::default();
    let runs = vec![
        ("h1", reference),
        (
            "h05",
            reference
                .with_step_size(reference.h / 2.0)
                .with_steps(reference.steps * 2),
        ),
    ];

    let mut stdout = std::io::stdout();

    for (label, params) in &runs {
        let coefficients = RecurrenceCoefficients::from_parameters(params);
        let data = verify_full(params, &coefficients)?;

        println!("Parametros: {}  ({} pasos)\n", params, params.steps);

        // One row every 5 time units, whatever the step
        let interval = ((5.0 / params.h).round() as usize).max(1);
        report::write_error_table(&mut stdout, &data.rows(interval)?)?;
        println!();
        report::write_final_summary(&mut stdout, &data)?;

        for kind in SchemeKind::ALL {
            if let Some(trajectory) = data.trajectory(kind) {
                println!(
                    "  {:<20} max |e| = {:.3e}  rms = {:.3e}",
                    kind.name(),
                    trajectory.max_abs_error(&data.exact),
                    trajectory.rms_error(&data.exact)
                );
            }
        }

        // ====== Figure ======

        let plot_path = tmp_dir.join(format!("rashevsky_comparison_{}.png", label));
        let plot_config = PlotConfig::default().title(format!(
            "Modelo de Rashevsky: comparacion de metodos (h = {})",
            params.h
        ));
        plot_comparison(&data, &plot_path.to_string_lossy(), Some(&plot_config))?;
        println!("\n  Figure: {}", plot_path.display());

        // ====== CSV ======

        let mut metadata = CsvMetadata::from_parameters(params);
        metadata.add_custom("run".to_string(), label.to_string());
        let csv_config = CsvConfig::default().with_metadata(metadata);

        let csv_path = tmp_dir.join(format!("rashevsky_comparison_{}.csv", label));
        export_comparison_csv(&data, &csv_path.to_string_lossy(), Some(&csv_config))?;
        println!("  CSV   : {}", csv_path.display());

        if let Some(trapezoid) = data.trajectory(SchemeKind::Trapezoid) {
            let path = tmp_dir.join(format!("rashevsky_trapezoid_{}.csv", label));
            export_trajectory_csv(trapezoid, &path.to_string_lossy(), None)?;
            println!("  CSV   : {}", path.display());
        }

        println!("\n═══════════════════════════════════════════════════════\n");
    }

    Ok(())
}
