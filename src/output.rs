//! Rendering of a sampled curve: SVG charts through `plotters` and CSV tables
//! through `csv`.

use crate::sampling::config::ChartConfig;
use crate::sampling::types::{PricedPoint, PricingResult};
use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Write;
use std::path::Path;

fn draw_curve<DB>(
    root: &DrawingArea<DB, Shift>,
    result: &PricingResult,
    chart: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (first, last) = match (result.points.first(), result.points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(anyhow!("cannot chart an empty curve")),
    };

    let (y_min, y_max) = result
        .points
        .iter()
        .fold((result.price, result.price), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });
    let padding = (y_max - y_min).max(1e-6) * 0.05;
    let y_min = (y_min - padding).max(0.0); // prices are never negative
    let y_max = y_max + padding;

    root.fill(&WHITE)
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;
    let mut ctx = ChartBuilder::on(root)
        .margin(20)
        .caption(&chart.title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first.underlying_price..last.underlying_price, y_min..y_max)
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;

    let line: Vec<(f64, f64)> = result
        .points
        .iter()
        .map(|p| (p.underlying_price, p.price))
        .collect();
    ctx.draw_series(vec![PathElement::new(line, BLUE.stroke_width(2))])
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;

    // requested spot
    ctx.draw_series(std::iter::once(Circle::new(
        (result.params.underlying_price, result.price),
        4,
        RED.filled(),
    )))
    .map_err(|e| anyhow!("chart rendering failed: {e}"))?;

    root.present()
        .map_err(|e| anyhow!("chart rendering failed: {e}"))?;
    Ok(())
}

/// Writes the curve as an SVG file.
pub fn render_svg(result: &PricingResult, chart: &ChartConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (chart.width, chart.height)).into_drawing_area();
    draw_curve(&root, result, chart).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "price chart saved");
    Ok(())
}

/// Renders the curve into an SVG document held in memory.
pub fn render_svg_string(result: &PricingResult, chart: &ChartConfig) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (chart.width, chart.height)).into_drawing_area();
        draw_curve(&root, result, chart)?;
    }
    Ok(svg)
}

/// Writes `underlying_price,price` rows with a header line.
pub fn write_curve_csv<W: Write>(points: &[PricedPoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(point).context("failed to write curve row")?;
    }
    wtr.flush().context("failed to flush curve csv")?;
    Ok(())
}
