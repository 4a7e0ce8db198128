use crate::error::{DomainError, DomainResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Labels and canvas size for the rendered price curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 768,
            title: "Option Price vs Stock Price".to_string(),
            x_label: "Stock Price".to_string(),
            y_label: "Option Price".to_string(),
        }
    }
}

/// Main configuration struct for curve sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of samples across the range, endpoints included
    #[serde(default = "default_point_count")]
    pub point_count: usize,

    /// Lower end of the range as a multiple of the spot
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,

    /// Upper end of the range as a multiple of the spot
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,

    /// Price the samples on the rayon thread pool
    #[serde(default)]
    pub parallel_eval: bool,

    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl CurveConfig {
    /// 100 points over `[0.5·S, 1.5·S]`
    pub fn standard() -> Self {
        Self {
            point_count: default_point_count(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
            parallel_eval: false,
            chart: ChartConfig::default(),
        }
    }

    /// Few points, for quick previews and tests
    pub fn coarse() -> Self {
        Self {
            point_count: 11,
            ..Self::standard()
        }
    }

    /// Dense curve evaluated in parallel
    pub fn fine() -> Self {
        Self {
            point_count: 1001,
            parallel_eval: true,
            ..Self::standard()
        }
    }

    /// Same range with a different number of points.
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("invalid curve configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Checks the point count and that `0 < lower_factor < upper_factor`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.point_count < 2 {
            return Err(DomainError::TooFewPoints(self.point_count));
        }
        let (lower, upper) = (self.lower_factor, self.upper_factor);
        if !(lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper) {
            return Err(DomainError::InvalidRange { lower, upper });
        }
        Ok(())
    }
}

fn default_point_count() -> usize {
    100
}

fn default_lower_factor() -> f64 {
    0.5
}

fn default_upper_factor() -> f64 {
    1.5
}
