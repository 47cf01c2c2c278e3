use std::fmt;

use nutrimix_core::Nutrient;

use super::Exclusion;

/// An assumption the optimizer made about incomplete input, or a warning
/// about the quality of its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Container or serving size is missing, so the item cost is taken as
    /// the cost of one serving.
    MissingContainerData { ingredient: String },

    /// The ingredient was left out of the mixture.
    IngredientExcluded {
        ingredient: String,
        reason: Exclusion,
    },

    /// A targeted nutrient is missing or unusable and counts as zero.
    MissingNutrient {
        ingredient: String,
        nutrient: Nutrient,
    },

    /// Serving size is missing, so servings are reported as the quantity.
    MissingServingSize { ingredient: String },

    /// The iteration limit was reached before the line search converged.
    IterationLimit { iters: usize },

    /// No ingredient in the mixture supplies this nutrient, so scaling the
    /// mixture cannot bring it to target.
    UncoverableNutrient { nutrient: Nutrient },

    /// The serving-size correction scaled the mixture up by more than 10%.
    LargeServingCorrection { factor: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainerData { ingredient } => write!(
                f,
                "no container or serving size for {ingredient}; \
                 assuming the item cost is per serving"
            ),
            Self::IngredientExcluded { ingredient, reason } => {
                write!(f, "{ingredient} {reason}; it will not be used")
            }
            Self::MissingNutrient {
                ingredient,
                nutrient,
            } => write!(f, "{ingredient} lists no usable {nutrient}; counting it as zero"),
            Self::MissingServingSize { ingredient } => write!(
                f,
                "serving size unlisted for {ingredient}; assuming a serving of 1"
            ),
            Self::IterationLimit { iters } => write!(
                f,
                "stopped after {iters} iterations without converging; the mixture is approximate"
            ),
            Self::UncoverableNutrient { nutrient } => {
                write!(f, "no ingredient in the mixture supplies {nutrient}")
            }
            Self::LargeServingCorrection { factor } => write!(
                f,
                "serving size correction above 10% ({:.2}%); consider reducing the cost weight",
                (factor - 1.0) * 100.0
            ),
        }
    }
}

/// Collects diagnostics during one optimization.
///
/// Every pushed diagnostic is also logged at `warn` level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.0.push(diagnostic);
    }

    /// Iterates over the recorded diagnostics in order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
