//! Input value types for the pricing engine.
//!
//! [`OptionParameters`] carries the five Black-Scholes scalars plus the
//! [`OptionType`] selector. Construction through [`OptionParameters::new`]
//! validates the domain; the engine re-validates on every call so a value
//! assembled field-by-field can never reach the formula unchecked.

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// European exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff if exercised immediately.
    pub fn intrinsic(self, underlying_price: f64, strike_price: f64) -> f64 {
        match self {
            OptionType::Call => (underlying_price - strike_price).max(0.0),
            OptionType::Put => (strike_price - underlying_price).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(DomainError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Inputs for one Black-Scholes valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Spot price of the underlying (S)
    pub underlying_price: f64,
    /// Strike (K)
    pub strike_price: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualized continuously-compounded rate (r), may be negative
    pub risk_free_rate: f64,
    /// Annualized volatility of log-returns (sigma)
    pub volatility: f64,
    pub option_type: OptionType,
}

fn require_finite(field: &'static str, value: f64) -> DomainResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { field, value })
    }
}

fn require_positive(field: &'static str, value: f64) -> DomainResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositive { field, value })
    }
}

impl OptionParameters {
    /// Creates a validated parameter set.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> DomainResult<Self> {
        let params = Self {
            underlying_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks `S, K, T, sigma > 0` and that every field is finite.
    pub fn validate(&self) -> DomainResult<()> {
        require_positive("underlying_price", self.underlying_price)?;
        require_positive("strike_price", self.strike_price)?;
        require_positive("time_to_maturity", self.time_to_maturity)?;
        require_finite("risk_free_rate", self.risk_free_rate)?;
        require_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Copy of `self` with a different spot. Used by the curve sampler.
    pub fn with_underlying_price(&self, underlying_price: f64) -> Self {
        Self {
            underlying_price,
            ..*self
        }
    }

    /// Same contract with the other exercise right.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Strike discounted to today: `K * exp(-r * T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike_price * (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// Model-free no-arbitrage lower bound on the European price.
    pub fn lower_bound(&self) -> f64 {
        let pv_strike = self.discounted_strike();
        match self.option_type {
            OptionType::Call => (self.underlying_price - pv_strike).max(0.0),
            OptionType::Put => (pv_strike - self.underlying_price).max(0.0),
        }
    }

    pub fn intrinsic_value(&self) -> f64 {
        self.option_type
            .intrinsic(self.underlying_price, self.strike_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_parameters_validation() {
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).is_ok());
        // negative rates are allowed
        assert!(OptionParameters::new(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Put).is_ok());

        assert_eq!(
            OptionParameters::new(0.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call),
            Err(DomainError::NonPositive {
                field: "underlying_price",
                value: 0.0
            })
        );
        assert!(OptionParameters::new(100.0, -5.0, 1.0, 0.05, 0.2, OptionType::Call).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).is_err());
        assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call).is_err());
        assert!(matches!(
            OptionParameters::new(100.0, 100.0, 1.0, f64::NAN, 0.2, OptionType::Call),
            Err(DomainError::NonFinite {
                field: "risk_free_rate",
                ..
            })
        ));
        assert!(matches!(
            OptionParameters::new(f64::INFINITY, 100.0, 1.0, 0.05, 0.2, OptionType::Call),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" PUT ".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!("Call".parse::<OptionType>(), Ok(OptionType::Call));
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(DomainError::UnknownOptionType(_))
        ));
    }

    #[test]
    fn test_intrinsic_and_lower_bound() {
        assert_eq!(OptionType::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(80.0, 100.0), 20.0);

        let params = OptionParameters::new(120.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
        let expected = 120.0 - 100.0 * (-0.05_f64).exp();
        assert!((params.lower_bound() - expected).abs() < 1e-12);
        assert_eq!(params.with_option_type(OptionType::Put).lower_bound(), 0.0);
    }

    #[test]
    fn test_with_underlying_price_keeps_other_fields() {
        let params = OptionParameters::new(100.0, 90.0, 0.5, 0.03, 0.25, OptionType::Put).unwrap();
        let moved = params.with_underlying_price(150.0);
        assert_eq!(moved.underlying_price, 150.0);
        assert_eq!(moved.strike_price, 90.0);
        assert_eq!(moved.time_to_maturity, 0.5);
        assert_eq!(moved.option_type, OptionType::Put);
    }
}
