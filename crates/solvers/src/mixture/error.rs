use super::ConfigError;

/// Errors that stop a mixture optimization before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no ingredients to mix")]
    NoIngredients,

    #[error("no recognized nutrient has a positive target")]
    NoTargets,
}
