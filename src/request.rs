//! Request/response shapes for an external transport layer.
//!
//! A web form posts the five scalars as loosely typed JSON (numbers or numeric
//! strings) plus an `optionType` selector; the reply carries the scalar price
//! and a chart-library-neutral line series of the sampled curve.

use crate::error::{DomainError, DomainResult};
use crate::model_params::{OptionParameters, OptionType};
use crate::sampling::config::ChartConfig;
use crate::sampling::types::PricingResult;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A JSON number, or a string holding one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    fn parse(&self, field: &'static str) -> DomainResult<f64> {
        match self {
            NumericField::Number(v) => Ok(*v),
            NumericField::Text(s) => s.trim().parse::<f64>().map_err(|_| DomainError::InvalidNumber {
                field,
                value: s.clone(),
            }),
        }
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        NumericField::Number(v)
    }
}

/// Body of a price-and-curve request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(rename = "S")]
    pub underlying_price: NumericField,
    #[serde(rename = "K")]
    pub strike_price: NumericField,
    #[serde(rename = "T")]
    pub time_to_maturity: NumericField,
    #[serde(rename = "r")]
    pub risk_free_rate: NumericField,
    pub sigma: NumericField,
    #[serde(rename = "optionType")]
    pub option_type: String,
}

impl CalculateRequest {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("malformed calculate request")
    }

    /// Converts the loose fields into validated [`OptionParameters`].
    pub fn to_parameters(&self) -> DomainResult<OptionParameters> {
        let option_type: OptionType = self.option_type.parse()?;
        OptionParameters::new(
            self.underlying_price.parse("S")?,
            self.strike_price.parse("K")?,
            self.time_to_maturity.parse("T")?,
            self.risk_free_rate.parse("r")?,
            self.sigma.parse("sigma")?,
            option_type,
        )
    }
}

impl From<&OptionParameters> for CalculateRequest {
    fn from(p: &OptionParameters) -> Self {
        Self {
            underlying_price: p.underlying_price.into(),
            strike_price: p.strike_price.into(),
            time_to_maturity: p.time_to_maturity.into(),
            risk_free_rate: p.risk_free_rate.into(),
            sigma: p.volatility.into(),
            option_type: p.option_type.to_string(),
        }
    }
}

/// A single line trace with its labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Reply to a [`CalculateRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub price: f64,
    pub graph: ChartSeries,
}

impl CalculateResponse {
    pub fn new(result: &PricingResult, chart: &ChartConfig) -> Self {
        Self {
            price: result.price,
            graph: ChartSeries {
                title: chart.title.clone(),
                x_label: chart.x_label.clone(),
                y_label: chart.y_label.clone(),
                name: "Option Price".to_string(),
                x: result.xs(),
                y: result.ys(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize calculate response")
    }
}
