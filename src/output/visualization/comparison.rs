//! Comparison figure for the three schemes
//!
//! Two stacked panels sharing the time axis:
//!
//! - **top**: exact solution and the three approximations
//! - **bottom**: absolute error of each scheme on a logarithmic axis
//!
//! The error at `t = 0` is zero up to rounding, so [`ERROR_FLOOR`] is added
//! to every error before it goes on the log axis.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rashevsky_rs::output::visualization::plot_comparison;
//!
//! let data = verify_full(&params, &coefficients)?;
//! plot_comparison(&data, "comparison.png", None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::solver::SchemeKind;
use crate::verification::ComparisonData;

/// Offset added to errors before plotting them on a log axis
pub const ERROR_FLOOR: f64 = 1e-16;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// (min, max) of a series, ignoring non-finite values
fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Add a 10% margin around a range, never collapsing to zero width
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let margin = if span > 0.0 { 0.1 * span } else { 0.1 * lo.abs().max(1.0) };
    (lo - margin, hi + margin)
}

fn draw_solution_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &ComparisonData,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let t_max = data.time_points.last().copied().unwrap_or(1.0);

    let all_values = data
        .exact
        .iter()
        .chain(data.trajectories.iter().flat_map(|t| t.values.iter()));
    let (y_min, y_max) = finite_range(all_values).ok_or("No finite values to plot")?;
    let (y_min, y_max) = padded(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", 24.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_max, y_min..y_max)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
        if config.show_grid {
            mesh.draw()?;
        } else {
            mesh.disable_mesh().draw()?;
        }
    }

    let exact_style = config.exact_color.stroke_width(config.line_width + 1);
    chart
        .draw_series(LineSeries::new(
            data.time_points.iter().zip(data.exact.iter()).map(|(t, p)| (*t, *p)),
            exact_style,
        ))?
        .label("Solucion exacta")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], exact_style));

    for trajectory in &data.trajectories {
        let color = config.scheme_color(trajectory.kind);
        let style = color.stroke_width(config.line_width);

        chart
            .draw_series(LineSeries::new(
                data.time_points
                    .iter()
                    .zip(trajectory.values.iter())
                    .map(|(t, p)| (*t, *p)),
                style,
            ))?
            .label(trajectory.kind.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart.draw_series(
            data.time_points
                .iter()
                .zip(trajectory.values.iter())
                .map(|(t, p)| Circle::new((*t, *p), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_error_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &ComparisonData,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let t_max = data.time_points.last().copied().unwrap_or(1.0);

    let series: Vec<(SchemeKind, Vec<f64>)> = SchemeKind::ALL
        .iter()
        .filter_map(|&kind| {
            data.errors(kind)
                .map(|e| (kind, e.iter().map(|v| v + ERROR_FLOOR).collect()))
        })
        .collect();

    let (e_min, e_max) = finite_range(series.iter().flat_map(|(_, e)| e.iter()))
        .ok_or("No finite errors to plot")?;
    let e_max = if e_max > e_min { e_max * 10.0 } else { e_min * 100.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(&config.error_title, ("sans-serif", 24.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..t_max, (e_min..e_max).log_scale())?;

    let exponent_labels = |v: &f64| format!("{:.0e}", v);
    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.xlabel)
            .y_desc(&config.error_ylabel)
            .y_label_formatter(&exponent_labels);
        if config.show_grid {
            mesh.draw()?;
        } else {
            mesh.disable_mesh().draw()?;
        }
    }

    for (kind, errors) in &series {
        let style = config.scheme_color(*kind).stroke_width(config.line_width);

        chart
            .draw_series(LineSeries::new(
                data.time_points.iter().zip(errors.iter()).map(|(t, e)| (*t, *e)),
                style,
            ))?
            .label(format!("Error {}", kind.column_header()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_comparison_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ComparisonData,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let panels = root.split_evenly((2, 1));
    draw_solution_panel(&panels[0], data, config)?;
    draw_error_panel(&panels[1], data, config)?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the solution and error panels of a comparison
///
/// The backend is chosen from the extension: `.svg` gives SVG, anything else
/// a bitmap (PNG).
///
/// # Errors
///
/// Returns error if:
/// - the comparison holds no step, lacks a scheme or has series of
///   different lengths
/// - every value is non-finite
/// - the file cannot be written
pub fn plot_comparison(
    data: &ComparisonData,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    data.validate()?;

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, data, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, data, config)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelParameters, RecurrenceCoefficients};
    use crate::verification::verify_full;
    use tempfile::NamedTempFile;

    fn default_data() -> ComparisonData {
        let params = ModelParameters::default();
        let coefficients = RecurrenceCoefficients::from_parameters(&params);
        verify_full(&params, &coefficients).unwrap()
    }

    #[test]
    fn test_finite_range() {
        let values = [0.5, f64::NAN, -1.0, 2.0, f64::INFINITY];
        assert_eq!(finite_range(values.iter()), Some((-1.0, 2.0)));
        assert_eq!(finite_range([f64::NAN].iter()), None);
    }

    #[test]
    fn test_padded_never_collapses() {
        let (lo, hi) = padded(0.5, 0.5);
        assert!(lo < 0.5 && hi > 0.5);

        let (lo, hi) = padded(0.0, 1.0);
        assert!((lo + 0.1).abs() < 1e-15);
        assert!((hi - 1.1).abs() < 1e-15);
    }

    #[test]
    fn test_plot_png_comparison() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        plot_comparison(&default_data(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_svg_comparison() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let config = PlotConfig::default().size(640, 480).title("SVG");
        plot_comparison(&default_data(), path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_rejects_empty() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let mut data = default_data();
        data.time_points.clear();

        assert!(plot_comparison(&data, path.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn test_plot_comparison_rejects_length_mismatch() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let mut data = default_data();
        data.exact = nalgebra::DVector::from_vec(data.exact.as_slice()[..10].to_vec());

        let err = plot_comparison(&data, path.to_str().unwrap(), None).unwrap_err();
        assert!(err.to_string().contains("Data length mismatch"), "{}", err);
    }
}
