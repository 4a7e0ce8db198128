// Closed-form Black-Scholes pricing for European calls and puts (no dividend
// yield). Inputs are validated before the formula runs; a degenerate diffusion
// term is an error, there is no intrinsic-value fallback.

use crate::error::{DomainError, DomainResult};
use crate::model_params::{OptionParameters, OptionType};
use crate::models::traits::PricingModel;
use crate::models::utils::{log_moneyness, normal_cdf};

/// Smallest accepted `sigma * sqrt(T)`.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// The Black-Scholes pricing engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black_scholes"
    }

    fn price(&self, params: &OptionParameters) -> DomainResult<f64> {
        bs_price(params)
    }
}

/// `(d1, d2)` for a validated parameter set with a non-degenerate
/// `sigma * sqrt(T)`.
fn d1_d2(params: &OptionParameters, sigma_sqrt_t: f64) -> (f64, f64) {
    let sigma = params.volatility;
    let d1 = (log_moneyness(params.underlying_price, params.strike_price)
        + (params.risk_free_rate + 0.5 * sigma * sigma) * params.time_to_maturity)
        / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European option under Black-Scholes assumptions.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T),  d2 = d1 − σ·√T
/// call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// # Errors
///
/// * [`DomainError::NonPositive`] / [`DomainError::NonFinite`] for inputs
///   outside the model domain
/// * [`DomainError::DegenerateDiffusion`] when `σ·√T < 1e-12`
/// * [`DomainError::NonFiniteResult`] if the arithmetic overflows
pub fn bs_price(params: &OptionParameters) -> DomainResult<f64> {
    if let Err(e) = params.validate() {
        tracing::warn!(error = %e, "rejected option parameters");
        return Err(e);
    }

    let sigma_sqrt_t = params.volatility * params.time_to_maturity.sqrt();
    if sigma_sqrt_t < DEGENERATE_EPSILON {
        tracing::warn!(sigma_sqrt_t, "degenerate diffusion term");
        return Err(DomainError::DegenerateDiffusion {
            value: sigma_sqrt_t,
            epsilon: DEGENERATE_EPSILON,
        });
    }

    let (d1, d2) = d1_d2(params, sigma_sqrt_t);
    let s = params.underlying_price;
    let pv_strike = params.discounted_strike();

    let price = match params.option_type {
        OptionType::Call => s * normal_cdf(d1) - pv_strike * normal_cdf(d2),
        OptionType::Put => pv_strike * normal_cdf(-d2) - s * normal_cdf(-d1),
    };

    if !price.is_finite() {
        return Err(DomainError::NonFiniteResult {
            value: price,
            underlying_price: s,
            strike_price: params.strike_price,
        });
    }

    tracing::trace!(option_type = %params.option_type, d1, d2, price, "priced option");
    // rounding can leave deep out-of-the-money prices a hair below zero
    Ok(price.max(0.0))
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> DomainResult<f64> {
    bs_price(&OptionParameters::new(S, K, T, r, sigma, OptionType::Call)?)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> DomainResult<f64> {
    bs_price(&OptionParameters::new(S, K, T, r, sigma, OptionType::Put)?)
}
