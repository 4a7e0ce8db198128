use crate::error::{DomainError, DomainResult};
use crate::model_params::OptionParameters;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::sampling::config::CurveConfig;
use crate::sampling::types::PricedPoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Drives a pricing model across a range of underlying prices
pub struct CurveSampler<M: PricingModel = BlackScholes> {
    model: M,
    config: CurveConfig,
}

impl CurveSampler<BlackScholes> {
    pub fn new(config: CurveConfig) -> Self {
        Self::with_model(BlackScholes, config)
    }
}

impl<M: PricingModel> CurveSampler<M> {
    pub fn with_model(model: M, config: CurveConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Sample the curve for `params`
    pub fn run(&self, params: &OptionParameters) -> DomainResult<Vec<PricedPoint>> {
        sample_curve(&self.model, params, &self.config)
    }
}

/// Evenly spaced underlying prices over `[lower_factor·S, upper_factor·S]`.
///
/// Both endpoints are included; the last value is pinned to the upper bound so
/// accumulated rounding in `lo + i·step` cannot leave it short.
pub fn underlying_grid(
    underlying_price: f64,
    lower_factor: f64,
    upper_factor: f64,
    point_count: usize,
) -> DomainResult<Vec<f64>> {
    if point_count < 2 {
        return Err(DomainError::TooFewPoints(point_count));
    }
    let lo = lower_factor * underlying_price;
    let hi = upper_factor * underlying_price;
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo < hi) {
        return Err(DomainError::InvalidRange {
            lower: lower_factor,
            upper: upper_factor,
        });
    }

    let step = (hi - lo) / (point_count - 1) as f64;
    let last = point_count - 1;
    Ok((0..point_count)
        .map(|i| if i == last { hi } else { lo + i as f64 * step })
        .collect())
}

/// Price every grid point with `model`.
///
/// Validation runs before any pricing. A failure at any sample aborts the
/// whole curve; callers never see a partial result.
pub fn sample_curve<M: PricingModel>(
    model: &M,
    params: &OptionParameters,
    config: &CurveConfig,
) -> DomainResult<Vec<PricedPoint>> {
    if let Err(e) = params.validate().and_then(|_| config.validate()) {
        tracing::warn!(error = %e, "curve sampling rejected");
        return Err(e);
    }

    let grid = underlying_grid(
        params.underlying_price,
        config.lower_factor,
        config.upper_factor,
        config.point_count,
    )?;

    let price_at = |s: f64| -> DomainResult<PricedPoint> {
        let price = model.price(&params.with_underlying_price(s))?;
        Ok(PricedPoint {
            underlying_price: s,
            price,
        })
    };

    let points = evaluate(&grid, config.parallel_eval, price_at)?;

    tracing::debug!(
        model = model.model_name(),
        option_type = %params.option_type,
        point_count = points.len(),
        lo = grid[0],
        hi = grid[grid.len() - 1],
        parallel = config.parallel_eval,
        "sampled price curve"
    );
    Ok(points)
}

#[cfg(feature = "parallel")]
fn evaluate<F>(grid: &[f64], parallel: bool, price_at: F) -> DomainResult<Vec<PricedPoint>>
where
    F: Fn(f64) -> DomainResult<PricedPoint> + Sync + Send,
{
    if parallel {
        // indexed collect keeps grid order
        grid.par_iter().map(|&s| price_at(s)).collect()
    } else {
        grid.iter().map(|&s| price_at(s)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate<F>(grid: &[f64], parallel: bool, price_at: F) -> DomainResult<Vec<PricedPoint>>
where
    F: Fn(f64) -> DomainResult<PricedPoint>,
{
    if parallel {
        tracing::debug!("parallel_eval requested without the `parallel` feature");
    }
    grid.iter().map(|&s| price_at(s)).collect()
}
