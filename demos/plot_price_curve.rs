// Example: plot_price_curve.rs
// Prices one option, samples its curve and writes an SVG chart plus a CSV table.
//
// Usage:
//     cargo run --example plot_price_curve -- <S> <K> <T> <r> <sigma> <call|put> [config.toml]
//
// Outputs price_curve.svg and price_curve.csv in the working directory.

use std::env;
use std::fs::File;

use anyhow::{bail, Result};
use curve_lib::{
    calculate, render_svg, write_curve_csv, CalculateRequest, CurveConfig, NumericField,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 6 {
        bail!("usage: plot_price_curve <S> <K> <T> <r> <sigma> <call|put> [config.toml]");
    }

    let config = match args.get(6) {
        Some(path) => CurveConfig::from_file(path)?,
        None => CurveConfig::standard(),
    };

    let text = |i: usize| NumericField::Text(args[i].clone());
    let request = CalculateRequest {
        underlying_price: text(0),
        strike_price: text(1),
        time_to_maturity: text(2),
        risk_free_rate: text(3),
        sigma: text(4),
        option_type: args[5].clone(),
    };

    let result = calculate(&request, &config)?;
    println!(
        "{} price at S={}: {:.4}",
        result.params.option_type, result.params.underlying_price, result.price
    );

    render_svg(&result, &config.chart, "price_curve.svg")?;
    write_curve_csv(&result.points, File::create("price_curve.csv")?)?;
    println!("Chart saved to price_curve.svg, table to price_curve.csv");
    Ok(())
}
