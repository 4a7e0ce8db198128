use crate::model_params::OptionParameters;
use serde::Serialize;

/// One sample on the price curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricedPoint {
    pub underlying_price: f64,
    pub price: f64,
}

/// Price for the requested parameters together with the sampled curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    /// Parameters the scalar price was computed for
    pub params: OptionParameters,
    /// Model price at `params.underlying_price`
    pub price: f64,
    /// Curve samples in ascending underlying price
    pub points: Vec<PricedPoint>,
}

impl PricingResult {
    /// Underlying prices of the curve, in order
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.underlying_price).collect()
    }

    /// Option prices of the curve, in order
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}
