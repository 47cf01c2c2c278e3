use crate::{Ingredient, Nutrient, NutrientTargets};

/// Percentages below this count as under target.
///
/// Leaves a little slack for rounding in the displayed percentage.
const LOW_PERCENT: f64 = 99.0;

/// How well a mixture covers one nutrient target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Below the target.
    Low,

    /// At or above the target and not above a declared ceiling.
    Ok,

    /// Above a declared ceiling.
    High,
}

/// One row of a [`NutrientReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientLine {
    pub nutrient: Nutrient,

    /// Target amount from the profile.
    pub target: f64,

    /// Declared ceiling, if positive.
    pub max: Option<f64>,

    /// Amount contained in the mixture.
    pub amount: f64,

    /// Amount as a percentage of the target, if the target is positive.
    pub percent: Option<f64>,

    pub coverage: Coverage,
}

/// Nutrient totals of a mixture measured against a target profile.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientReport {
    /// One line per targeted nutrient, in target order.
    pub lines: Vec<NutrientLine>,

    /// Total price of the mixture.
    pub price: f64,
}

impl NutrientReport {
    /// Measures `quantities` (one per ingredient, in each ingredient's unit)
    /// against `targets`.
    ///
    /// Ingredients lacking a nutrient contribute nothing to it, and
    /// ingredients without usable cost data contribute nothing to the price.
    ///
    /// # Panics
    ///
    /// Panics if `quantities` and `ingredients` differ in length.
    #[must_use]
    pub fn new(ingredients: &[Ingredient], quantities: &[f64], targets: &NutrientTargets) -> Self {
        assert_eq!(
            ingredients.len(),
            quantities.len(),
            "one quantity per ingredient"
        );

        let lines = targets
            .iter()
            .map(|(nutrient, target)| {
                let amount = ingredients
                    .iter()
                    .zip(quantities)
                    .filter_map(|(ingredient, &q)| ingredient.nutrient_in(nutrient, q))
                    .sum::<f64>();
                let max = targets.max(nutrient).filter(|m| *m > 0.0);
                let percent = (target > 0.0).then(|| amount / target * 100.0);
                let coverage = match (percent, max) {
                    (Some(p), _) if p < LOW_PERCENT => Coverage::Low,
                    (_, Some(m)) if amount > m => Coverage::High,
                    _ => Coverage::Ok,
                };
                NutrientLine {
                    nutrient,
                    target,
                    max,
                    amount,
                    percent,
                    coverage,
                }
            })
            .collect();

        let price = ingredients
            .iter()
            .zip(quantities)
            .filter_map(|(ingredient, &q)| ingredient.price_of(q))
            .sum();

        Self { lines, price }
    }

    /// Returns the line for a nutrient, if it is targeted.
    #[must_use]
    pub fn line(&self, nutrient: Nutrient) -> Option<&NutrientLine> {
        self.lines.iter().find(|line| line.nutrient == nutrient)
    }
}
