use serde::Deserialize;
use thiserror::Error;

/// Configuration for the mixture optimizer.
///
/// Deserializes from a partial document; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Weight of the cost term against the nutrient penalties.
    pub cost_weight: f64,

    /// Fraction of a declared nutrient maximum that the optimizer aims below.
    pub max_fraction_allowed: f64,

    /// Penalty weight of macro nutrients, on both sides of the band.
    pub macro_weight: f64,

    /// Ceiling ratio of macro nutrients, relative to their target.
    pub max_macro_ratio: f64,

    /// Whether to scale the result so every nutrient reaches its target.
    pub serving_size_correction: bool,

    /// Maximum number of descent iterations.
    pub max_iters: usize,

    /// First step size tried by the line search.
    pub initial_step: f64,

    /// Step size below which the line search gives up.
    pub min_step: f64,
}

/// Errors that can occur when validating a mixture optimizer config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cost_weight must be finite and non-negative")]
    CostWeight,

    #[error("max_fraction_allowed must be finite and positive")]
    MaxFraction,

    #[error("macro_weight must be finite and positive")]
    MacroWeight,

    #[error("max_macro_ratio must be finite and positive")]
    MaxMacroRatio,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("min_step must be positive and smaller than initial_step")]
    MinStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cost_weight: 0.07,
            max_fraction_allowed: 0.9,
            macro_weight: 3.0,
            max_macro_ratio: 1.1,
            serving_size_correction: true,
            max_iters: 50_000,
            initial_step: 2.0,
            min_step: 1e-12,
        }
    }
}

impl Config {
    /// Validates the weights, ratios, iteration limit and step sizes.
    ///
    /// # Errors
    ///
    /// Returns the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !self.cost_weight.is_finite() || self.cost_weight < 0.0 {
            return Err(ConfigError::CostWeight);
        }
        if !positive(self.max_fraction_allowed) {
            return Err(ConfigError::MaxFraction);
        }
        if !positive(self.macro_weight) {
            return Err(ConfigError::MacroWeight);
        }
        if !positive(self.max_macro_ratio) {
            return Err(ConfigError::MaxMacroRatio);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !positive(self.initial_step) {
            return Err(ConfigError::InitialStep);
        }
        if !positive(self.min_step) || self.min_step >= self.initial_step {
            return Err(ConfigError::MinStep);
        }
        Ok(())
    }
}
