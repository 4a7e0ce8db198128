pub mod bs;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::DomainResult;
    use crate::model_params::OptionParameters;

    /// A closed-form European pricer the curve sampler can drive.
    ///
    /// Implementations must be pure: identical parameters give bit-identical
    /// prices, and invalid parameters fail instead of producing NaN/Inf.
    pub trait PricingModel: Send + Sync {
        fn model_name(&self) -> &str;
        fn price(&self, params: &OptionParameters) -> DomainResult<f64>;
    }
}

/// Numerical helpers shared by the models
pub mod utils {
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`. Going through `erfc` rather than
    /// `1 + erf` keeps full relative precision in the lower tail, where the
    /// put formula evaluates `Φ(-d1)` and `Φ(-d2)`.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Calculate log-moneyness: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

}
