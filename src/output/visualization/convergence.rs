//! Log-log error convergence chart
//!
//! One series per (method, milestone): the absolute error at the milestone
//! plotted against the grid spacing. On log-log axes a method of order p
//! shows up as a straight line of slope p, so Euler and RK4 separate at a
//! glance.
//!
//! ```rust,ignore
//! use conv_rs::output::visualization::{plot_error_convergence, PlotConfig};
//!
//! let table = sweep(&model, &config)?;
//! plot_error_convergence(&table, "error_convergence.png", None)?;
//!
//! // Or as SVG with a custom title
//! let plot_config = PlotConfig::error_convergence("Arctan model");
//! plot_error_convergence(&table, "error_convergence.svg", Some(&plot_config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::error::{ConvError, Result};
use crate::output::table::ResultTable;
use crate::solver::Method;

// =================================================================================================
// Data Extraction
// =================================================================================================

/// Points (step size, error) of one method at milestone `position`
///
/// Missing samples and errors that are not strictly positive are dropped,
/// since neither has a place on a logarithmic axis. Points are sorted by
/// step size.
pub fn series(table: &ResultTable, method: Method, position: usize) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = table
        .for_method(method)
        .iter()
        .filter_map(|r| r.error_at(position).map(|e| (r.step_size, e)))
        .filter(|&(_, e)| e.is_finite() && e > 0.0)
        .collect();

    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

/// Legend label of one series, e.g. `"Euler, x=0.2"`
pub fn series_label(method: Method, milestone: f64) -> String {
    format!("{}, x={}", method.label(), milestone)
}

struct Series {
    method: Method,
    position: usize,
    label: String,
    points: Vec<(f64, f64)>,
}

fn collect_series(table: &ResultTable) -> Vec<Series> {
    Method::ALL
        .iter()
        .flat_map(|&method| {
            table
                .milestones()
                .iter()
                .enumerate()
                .map(move |(position, &milestone)| Series {
                    method,
                    position,
                    label: series_label(method, milestone),
                    points: series(table, method, position),
                })
        })
        .filter(|s| !s.points.is_empty())
        .collect()
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot error against grid spacing on log-log axes
///
/// Six series for the reference study (2 methods × 3 milestones). Euler
/// points are marked with crosses, RK4 points with triangles.
///
/// # Arguments
///
/// * `table`       — Result of [`sweep`](crate::output::sweep)
/// * `output_path` — Output file path (`.svg` selects the SVG backend, anything else PNG)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// - [`ConvError::EmptyTable`] if no strictly positive error is available
/// - [`ConvError::Plot`] if the backend cannot write to `output_path`
pub fn plot_error_convergence(
    table: &ResultTable,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let series = collect_series(table);
    if series.is_empty() {
        return Err(ConvError::EmptyTable);
    }

    let default_config = PlotConfig::error_convergence(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_range, y_range) = axis_ranges(&series);

    let outcome = if output_path.ends_with(".svg") {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_convergence_impl(backend, &series, config, x_range, y_range)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_convergence_impl(backend, &series, config, x_range, y_range)
    };

    outcome.map_err(|e| ConvError::Plot(e.to_string()))?;
    log::debug!("error convergence chart written to {}", output_path);
    Ok(())
}

// =================================================================================================
// Internal Implementation
// =================================================================================================

/// Padded (x, y) bounds over all series; x by a factor 1.5, y by a decade
fn axis_ranges(series: &[Series]) -> ((f64, f64), (f64, f64)) {
    let points = || series.iter().flat_map(|s| s.points.iter());

    let x_min = points().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    ((x_min / 1.5, x_max * 1.5), (y_min / 10.0, y_max * 10.0))
}

fn plot_convergence_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[Series],
    config: &PlotConfig,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 22).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    let fmt_exp = |v: &f64| format!("{:.0e}", v);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&fmt_exp)
        .y_label_formatter(&fmt_exp);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    // One colour per milestone; the marker tells the methods apart
    for s in series {
        let color = config.get_series_color(s.position);
        let line_style = ShapeStyle::from(&color).stroke_width(config.line_width);
        let size = config.marker_size as i32;

        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), line_style))?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        match s.method {
            Method::Euler => {
                chart.draw_series(
                    s.points
                        .iter()
                        .map(|&p| Cross::new(p, size, ShapeStyle::from(&color).stroke_width(2))),
                )?;
            }
            Method::RungeKutta4 => {
                chart.draw_series(
                    s.points
                        .iter()
                        .map(|&p| TriangleMarker::new(p, size, color.filled())),
                )?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
