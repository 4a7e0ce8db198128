//! Error type shared by the pricing engine, the curve sampler and the request
//! boundary.
//!
//! Every failure the pure core can produce is a [`DomainError`]: either the
//! inputs violate the Black-Scholes domain (non-positive spot, strike, maturity
//! or volatility, non-finite numbers) or the formula would degenerate
//! numerically. These are deterministic input failures, so nothing here is
//! retryable.

use thiserror::Error;

/// Invalid-input or numerically degenerate condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("sigma * sqrt(T) = {value:e} is below {epsilon:e}; the diffusion term is degenerate")]
    DegenerateDiffusion { value: f64, epsilon: f64 },

    #[error("pricing produced a non-finite value ({value}) for S={underlying_price}, K={strike_price}")]
    NonFiniteResult {
        value: f64,
        underlying_price: f64,
        strike_price: f64,
    },

    #[error("curve sampling needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("invalid sampling range: lower factor {lower}, upper factor {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("unknown option type '{0}', expected 'call' or 'put'")]
    UnknownOptionType(String),

    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = DomainError::NonPositive {
            field: "volatility",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "volatility must be > 0, got 0");

        let err = DomainError::UnknownOptionType("straddle".into());
        assert!(err.to_string().contains("straddle"));
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            let sampled: DomainResult<()> = Err(DomainError::TooFewPoints(1));
            sampled?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<DomainError>().is_some());
    }
}
