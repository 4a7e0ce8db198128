//! # Curve-Lib: Black-Scholes Pricing and Price-Curve Sampling
//!
//! `curve-lib` prices European options in closed form under the Black-Scholes
//! model and samples the option price across a range of underlying prices, ready
//! to be charted.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form call and put prices with strict domain checks
//! - **Curve Sampling**: evenly spaced price curve around the current spot, optionally in parallel
//! - **Request Boundary**: loose JSON request parsing and a chart-neutral JSON response
//! - **Output**: SVG charts and CSV tables of a sampled curve
//!
//! ## Quick Start
//!
//! ```rust
//! use curve_lib::{price, sample, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//! let call = price(&params)?;
//! assert!((call - 10.4506).abs() < 1e-3);
//!
//! let curve = sample(&params, 100)?;
//! assert_eq!(curve.len(), 100);
//! assert_eq!(curve[0].underlying_price, 50.0);
//! assert_eq!(curve[99].underlying_price, 150.0);
//! # Ok::<(), curve_lib::DomainError>(())
//! ```
//!
//! ## Error Policy
//!
//! Every invalid input fails with [`DomainError`] before the formula runs. A
//! vanishing diffusion term (`σ·√T < 1e-12`) is an error too; the engine never
//! substitutes the intrinsic value. Curve sampling is all-or-nothing.
//!
//! ## Configuration Presets
//!
//! - `standard()`: 100 points over `[0.5·S, 1.5·S]`
//! - `coarse()`: 11 points, for previews
//! - `fine()`: 1001 points, evaluated in parallel

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod model_params;
pub mod models;
pub mod output;
pub mod request;
pub mod sampling;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{DomainError, DomainResult};
pub use model_params::{OptionParameters, OptionType};
pub use models::bs::{bs_call_price, bs_price, bs_put_price, BlackScholes, DEGENERATE_EPSILON};
pub use models::traits::PricingModel;
pub use models::utils::normal_cdf;
pub use output::{render_svg, render_svg_string, write_curve_csv};
pub use request::{CalculateRequest, CalculateResponse, ChartSeries, NumericField};
pub use sampling::{
    config::{ChartConfig, CurveConfig},
    pipeline::{sample_curve, underlying_grid, CurveSampler},
    types::{PricedPoint, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sampling settings.
///
/// # Example
///
/// ```rust
/// use curve_lib::default_configs;
///
/// let config = default_configs::standard();
/// assert_eq!(config.point_count, 100);
/// ```
pub mod default_configs {
    use crate::sampling::config::CurveConfig;

    /// 100 points over `[0.5·S, 1.5·S]`, evaluated sequentially.
    pub fn standard() -> CurveConfig {
        CurveConfig::standard()
    }

    /// 11 points, for quick previews and tests.
    pub fn coarse() -> CurveConfig {
        CurveConfig::coarse()
    }

    /// 1001 points evaluated on the rayon pool.
    pub fn fine() -> CurveConfig {
        CurveConfig::fine()
    }
}

/// Black-Scholes price of a single European option.
///
/// # Errors
///
/// [`DomainError`] when `S`, `K`, `T` or `σ` is not strictly positive, any field
/// is non-finite, or `σ·√T` is degenerate.
pub fn price(params: &OptionParameters) -> DomainResult<f64> {
    bs_price(params)
}

/// Sample `point_count` prices over `[0.5·S, 1.5·S]`, ascending in the
/// underlying price.
///
/// # Errors
///
/// [`DomainError::TooFewPoints`] when `point_count < 2`, plus anything
/// [`price`] rejects. No partial curve is ever returned.
pub fn sample(params: &OptionParameters, point_count: usize) -> DomainResult<Vec<PricedPoint>> {
    sample_with_config(params, &CurveConfig::standard().with_point_count(point_count))
}

/// Sample the curve with an explicit range, point count and evaluation mode.
pub fn sample_with_config(
    params: &OptionParameters,
    config: &CurveConfig,
) -> DomainResult<Vec<PricedPoint>> {
    sample_curve(&BlackScholes, params, config)
}

/// Price the requested option and sample its curve in one step.
///
/// This is the whole computation behind a "calculate" request: parse the loose
/// fields, price at the requested spot, then sample the surrounding range.
///
/// # Example
///
/// ```rust
/// use curve_lib::{calculate, default_configs, CalculateRequest, CalculateResponse};
///
/// let request = CalculateRequest::from_json(
///     r#"{"S": "100", "K": "100", "T": "1", "r": "0.05", "sigma": "0.2", "optionType": "put"}"#,
/// )?;
/// let config = default_configs::standard();
/// let result = calculate(&request, &config)?;
/// assert!((result.price - 5.5735).abs() < 1e-3);
///
/// let body = CalculateResponse::new(&result, &config.chart).to_json()?;
/// assert!(body.contains("\"graph\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn calculate(request: &CalculateRequest, config: &CurveConfig) -> DomainResult<PricingResult> {
    let params = request.to_parameters()?;
    let price = bs_price(&params)?;
    let points = sample_with_config(&params, config)?;

    tracing::debug!(
        option_type = %params.option_type,
        price,
        point_count = points.len(),
        "calculated price and curve"
    );

    Ok(PricingResult {
        params,
        price,
        points,
    })
}
