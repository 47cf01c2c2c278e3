use std::fmt;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use nutrimix_core::{Ingredient, Nutrient, NutrientTargets};

use super::{Config, Diagnostic, Diagnostics, Error};

/// Costs at or below this are treated as missing.
const MIN_COST: f64 = 1e-7;

/// Ceiling ratio of nutrients without a usable maximum.
const UNLIMITED_RATIO: f64 = 1000.0;

/// Why an ingredient was left out of the mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The cost is zero or negative.
    NoCost,

    /// The cost is missing or not a number.
    UnusableCost,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCost => f.write_str("does not have a cost"),
            Self::UnusableCost => f.write_str("has no usable cost"),
        }
    }
}

/// Cost of one serving, or the reason the ingredient is not used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cost {
    Included(f64),
    Excluded(Exclusion),
}

impl Cost {
    /// Returns the cost per serving if the ingredient is used.
    #[must_use]
    pub fn per_serving(self) -> Option<f64> {
        match self {
            Self::Included(cost) => Some(cost),
            Self::Excluded(_) => None,
        }
    }

    #[must_use]
    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded(_))
    }
}

/// An ingredient as the optimizer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientTerm {
    pub name: String,
    pub cost: Cost,
}

/// A targeted nutrient and the shape of its penalty.
///
/// Outputs are normalized so that `1.0` means the target is exactly met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTerm {
    pub nutrient: Nutrient,

    /// Target amount, in the nutrient's own unit.
    pub amount: f64,

    /// Normalized output above which the upper penalty applies.
    pub max_per_min: f64,

    /// Weight of the penalty below target.
    pub low_weight: f64,

    /// Weight of the penalty above `max_per_min`.
    pub high_weight: f64,
}

impl TargetTerm {
    /// Returns the penalty for a normalized output.
    #[must_use]
    pub fn penalty(&self, output: f64) -> f64 {
        if output < 1.0 {
            self.low_weight * (1.0 - output).powi(2)
        } else if output > self.max_per_min {
            self.high_weight * (self.max_per_min - output).powi(2)
        } else {
            0.0
        }
    }

    /// Returns the slope used by the gradient for a normalized output.
    ///
    /// This is half the derivative of [`TargetTerm::penalty`].
    #[must_use]
    pub fn slope(&self, output: f64) -> f64 {
        if output < 1.0 {
            self.low_weight * (output - 1.0)
        } else if output > self.max_per_min {
            self.high_weight * (output - self.max_per_min)
        } else {
            0.0
        }
    }
}

/// An optimization problem assembled from ingredient records and targets.
///
/// The matrix has one row per ingredient and one column per target; entry
/// `(i, t)` is the fraction of target `t` supplied by one serving of
/// ingredient `i`. Rows of excluded ingredients are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    ingredients: Vec<IngredientTerm>,
    targets: Vec<TargetTerm>,
    matrix: Array2<f64>,
    costs: Array1<f64>,
    cost_weight: f64,
}

impl Problem {
    /// Builds the problem, recording every assumption in `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoIngredients`] for an empty ingredient list and
    /// [`Error::NoTargets`] when no target amount is positive.
    pub fn build(
        ingredients: &[Ingredient],
        targets: &NutrientTargets,
        config: &Config,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, Error> {
        if ingredients.is_empty() {
            return Err(Error::NoIngredients);
        }

        let targets: Vec<TargetTerm> = targets
            .iter()
            .filter(|(_, amount)| amount.is_finite() && *amount > 0.0)
            .map(|(nutrient, amount)| target_term(nutrient, amount, targets.max(nutrient), config))
            .collect();

        if targets.is_empty() {
            return Err(Error::NoTargets);
        }

        let terms: Vec<IngredientTerm> = ingredients
            .iter()
            .map(|ingredient| IngredientTerm {
                name: ingredient.name.clone(),
                cost: cost_of(ingredient, diagnostics),
            })
            .collect();

        let mut matrix = Array2::zeros((ingredients.len(), targets.len()));
        for ((ingredient, term), mut row) in ingredients.iter().zip(&terms).zip(matrix.rows_mut()) {
            if term.cost.is_excluded() {
                continue;
            }
            for (target, entry) in targets.iter().zip(row.iter_mut()) {
                match ingredient.nutrients.get(target.nutrient) {
                    Some(value) => *entry = value / target.amount,
                    None => diagnostics.push(Diagnostic::MissingNutrient {
                        ingredient: ingredient.name.clone(),
                        nutrient: target.nutrient,
                    }),
                }
            }
        }

        let costs = terms
            .iter()
            .map(|term| term.cost.per_serving().unwrap_or(0.0))
            .collect();

        Ok(Self {
            ingredients: terms,
            targets,
            matrix,
            costs,
            cost_weight: config.cost_weight,
        })
    }

    #[must_use]
    pub fn ingredients(&self) -> &[IngredientTerm] {
        &self.ingredients
    }

    #[must_use]
    pub fn targets(&self) -> &[TargetTerm] {
        &self.targets
    }

    /// Returns the ingredient-by-target matrix of normalized contributions.
    #[must_use]
    pub fn matrix(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    /// Returns the cost per serving of each ingredient, zero if excluded.
    #[must_use]
    pub fn costs(&self) -> ArrayView1<'_, f64> {
        self.costs.view()
    }

    #[must_use]
    pub fn cost_weight(&self) -> f64 {
        self.cost_weight
    }

    /// Returns the normalized output of every target for `servings`.
    #[must_use]
    pub fn outputs(&self, servings: ArrayView1<'_, f64>) -> Array1<f64> {
        self.matrix.t().dot(&servings)
    }

    /// Returns the price of `servings`.
    #[must_use]
    pub fn price(&self, servings: ArrayView1<'_, f64>) -> f64 {
        self.costs.dot(&servings)
    }
}

fn target_term(nutrient: Nutrient, amount: f64, max: Option<f64>, config: &Config) -> TargetTerm {
    if nutrient.is_macro() {
        return TargetTerm {
            nutrient,
            amount,
            max_per_min: config.max_macro_ratio,
            low_weight: config.macro_weight,
            high_weight: config.macro_weight,
        };
    }

    let max_per_min = match max {
        Some(max) if max > amount => config.max_fraction_allowed * max / amount,
        _ => UNLIMITED_RATIO,
    };

    TargetTerm {
        nutrient,
        amount,
        max_per_min,
        low_weight: 1.0,
        high_weight: 1.0,
    }
}

fn cost_of(ingredient: &Ingredient, diagnostics: &mut Diagnostics) -> Cost {
    let container = ingredient
        .container_size
        .filter(|size| size.is_finite() && *size > 0.0);

    let cost = match (ingredient.serving_size(), container) {
        (Some(serving), Some(container)) => ingredient.item_cost.map(|c| c * serving / container),
        _ => {
            diagnostics.push(Diagnostic::MissingContainerData {
                ingredient: ingredient.name.clone(),
            });
            ingredient.item_cost
        }
    };

    let cost = match cost {
        Some(cost) if !cost.is_finite() => Cost::Excluded(Exclusion::UnusableCost),
        Some(cost) if cost <= MIN_COST => Cost::Excluded(Exclusion::NoCost),
        Some(cost) => Cost::Included(cost),
        None => Cost::Excluded(Exclusion::UnusableCost),
    };

    if let Cost::Excluded(reason) = cost {
        diagnostics.push(Diagnostic::IngredientExcluded {
            ingredient: ingredient.name.clone(),
            reason,
        });
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn build(ingredients: &[Ingredient], targets: &NutrientTargets) -> (Problem, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let problem = Problem::build(ingredients, targets, &Config::default(), &mut diagnostics)
            .expect("problem should build");
        (problem, diagnostics)
    }

    #[test]
    fn selects_positive_targets_in_order() {
        let targets = NutrientTargets::new()
            .with(Nutrient::Iron, 10.0)
            .with(Nutrient::Cholesterol, 0.0)
            .with(Nutrient::Calories, 2000.0)
            .with(Nutrient::Zinc, -1.0);
        let ingredients = [Ingredient::new("Oats").item_cost(1.0)];

        let (problem, _) = build(&ingredients, &targets);

        let selected: Vec<_> = problem.targets().iter().map(|t| t.nutrient).collect();
        assert_eq!(selected, vec![Nutrient::Iron, Nutrient::Calories]);
    }

    #[test]
    fn ceiling_ratios_and_weights() {
        let targets = NutrientTargets::new()
            .with(Nutrient::Sodium, 10.0)
            .with_max(Nutrient::Sodium, 15.0)
            .with(Nutrient::Zinc, 10.0)
            .with_max(Nutrient::Zinc, 8.0)
            .with(Nutrient::Iron, 10.0)
            .with(Nutrient::Protein, 100.0)
            .with_max(Nutrient::Protein, 500.0);
        let ingredients = [Ingredient::new("Oats").item_cost(1.0)];

        let (problem, _) = build(&ingredients, &targets);
        let [sodium, zinc, iron, protein] = problem.targets() else {
            panic!("expected four targets");
        };

        assert_relative_eq!(sodium.max_per_min, 1.35);
        assert_relative_eq!(sodium.low_weight, 1.0);

        // A maximum below the target is ignored.
        assert_relative_eq!(zinc.max_per_min, UNLIMITED_RATIO);
        assert_relative_eq!(iron.max_per_min, UNLIMITED_RATIO);

        // Macros ignore their maximum and use the macro settings.
        assert_relative_eq!(protein.max_per_min, 1.1);
        assert_relative_eq!(protein.low_weight, 3.0);
        assert_relative_eq!(protein.high_weight, 3.0);
    }

    #[test]
    fn penalty_is_one_sided() {
        let term = TargetTerm {
            nutrient: Nutrient::Sodium,
            amount: 10.0,
            max_per_min: 1.35,
            low_weight: 2.0,
            high_weight: 1.0,
        };

        assert_relative_eq!(term.penalty(0.5), 0.5);
        assert_relative_eq!(term.penalty(1.0), 0.0);
        assert_relative_eq!(term.penalty(1.3), 0.0);
        assert_relative_eq!(term.penalty(1.45), 0.01, epsilon = 1e-12);

        assert_relative_eq!(term.slope(0.5), -1.0);
        assert_relative_eq!(term.slope(1.2), 0.0);
        assert_relative_eq!(term.slope(1.45), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn costs_and_matrix() {
        let targets = NutrientTargets::new()
            .with(Nutrient::Protein, 50.0)
            .with(Nutrient::Iron, 10.0);
        let ingredients = [
            Ingredient::new("Whey")
                .serving(30.0)
                .container(900.0, 30.0)
                .nutrient(Nutrient::Protein, 25.0),
            Ingredient::new("Spinach")
                .item_cost(0.5)
                .nutrient(Nutrient::Protein, 3.0)
                .nutrient(Nutrient::Iron, 2.0),
        ];

        let (problem, diagnostics) = build(&ingredients, &targets);

        assert_eq!(problem.ingredients()[0].cost, Cost::Included(1.0));
        assert_eq!(problem.ingredients()[1].cost, Cost::Included(0.5));

        let m = problem.matrix();
        assert_relative_eq!(m[[0, 0]], 0.5);
        assert_relative_eq!(m[[0, 1]], 0.0);
        assert_relative_eq!(m[[1, 0]], 0.06);
        assert_relative_eq!(m[[1, 1]], 0.2);

        assert_eq!(
            diagnostics.into_vec(),
            vec![
                Diagnostic::MissingContainerData {
                    ingredient: "Spinach".into()
                },
                Diagnostic::MissingNutrient {
                    ingredient: "Whey".into(),
                    nutrient: Nutrient::Iron
                },
            ]
        );
    }

    #[test]
    fn excluded_ingredients_have_zero_rows() {
        let targets = NutrientTargets::new().with(Nutrient::Iron, 10.0);
        let ingredients = [
            Ingredient::new("Free")
                .serving(1.0)
                .container(1.0, 0.0)
                .nutrient(Nutrient::Iron, 10.0),
            Ingredient::new("Unpriced")
                .serving(1.0)
                .nutrient(Nutrient::Iron, 10.0),
        ];

        let (problem, diagnostics) = build(&ingredients, &targets);

        assert_eq!(
            problem.ingredients()[0].cost,
            Cost::Excluded(Exclusion::NoCost)
        );
        assert_eq!(
            problem.ingredients()[1].cost,
            Cost::Excluded(Exclusion::UnusableCost)
        );
        assert!(problem.matrix().iter().all(|v| *v == 0.0));
        assert!(problem.costs().iter().all(|v| *v == 0.0));
        assert!(diagnostics.iter().any(|d| matches!(
            d,
            Diagnostic::IngredientExcluded {
                reason: Exclusion::NoCost,
                ..
            }
        )));
    }

    #[test]
    fn invalid_values_count_as_missing() {
        let targets = NutrientTargets::new().with(Nutrient::Iron, 10.0);
        let ingredients = [
            Ingredient::new("Bran")
                .serving(1.0)
                .container(1.0, 1.0)
                .nutrient(Nutrient::Iron, f64::NAN),
            Ingredient::new("Saffron")
                .serving(1.0)
                .container(1.0, f64::INFINITY)
                .nutrient(Nutrient::Iron, 10.0),
            Ingredient::new("Iron pill")
                .serving(1.0)
                .container(1.0, 1.0)
                .nutrient(Nutrient::Iron, 10.0),
        ];

        let (problem, diagnostics) = build(&ingredients, &targets);

        assert_eq!(problem.ingredients()[0].cost, Cost::Included(1.0));
        assert_eq!(
            problem.ingredients()[1].cost,
            Cost::Excluded(Exclusion::UnusableCost)
        );
        assert_eq!(problem.ingredients()[2].cost, Cost::Included(1.0));

        let m = problem.matrix();
        assert_relative_eq!(m[[0, 0]], 0.0);
        assert_relative_eq!(m[[1, 0]], 0.0);
        assert_relative_eq!(m[[2, 0]], 1.0);
        assert_relative_eq!(problem.costs()[1], 0.0);

        assert_eq!(
            diagnostics.into_vec(),
            vec![
                Diagnostic::IngredientExcluded {
                    ingredient: "Saffron".into(),
                    reason: Exclusion::UnusableCost,
                },
                Diagnostic::MissingNutrient {
                    ingredient: "Bran".into(),
                    nutrient: Nutrient::Iron,
                },
            ]
        );
    }

    #[test]
    fn unparseable_nutrient_in_json_counts_as_missing() {
        let targets = NutrientTargets::new().with(Nutrient::Iron, 10.0);
        let bran: Ingredient = serde_json::from_str(
            r#"{"name": "Bran", "serving": 1, "container_size": 1, "item_cost": 1, "iron": "n/a"}"#,
        )
        .unwrap();

        let (problem, diagnostics) = build(&[bran], &targets);

        assert_relative_eq!(problem.matrix()[[0, 0]], 0.0);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::MissingNutrient {
                ingredient: "Bran".into(),
                nutrient: Nutrient::Iron,
            }]
        );
    }

    #[test]
    fn empty_inputs_are_errors() {
        let mut diagnostics = Diagnostics::new();
        let config = Config::default();
        let targets = NutrientTargets::new().with(Nutrient::Iron, 10.0);

        assert_eq!(
            Problem::build(&[], &targets, &config, &mut diagnostics),
            Err(Error::NoIngredients)
        );

        let ingredients = [Ingredient::new("Oats").item_cost(1.0)];
        let zero = NutrientTargets::new().with(Nutrient::Iron, 0.0);
        assert_eq!(
            Problem::build(&ingredients, &zero, &config, &mut diagnostics),
            Err(Error::NoTargets)
        );
    }

    #[test]
    fn outputs_and_price() {
        let targets = NutrientTargets::new()
            .with(Nutrient::Iron, 10.0)
            .with(Nutrient::Zinc, 5.0);
        let ingredients = [
            Ingredient::new("A")
                .item_cost(2.0)
                .nutrient(Nutrient::Iron, 5.0)
                .nutrient(Nutrient::Zinc, 1.0),
            Ingredient::new("B")
                .item_cost(1.0)
                .nutrient(Nutrient::Iron, 0.0)
                .nutrient(Nutrient::Zinc, 5.0),
        ];

        let (problem, _) = build(&ingredients, &targets);
        let servings = ndarray::array![2.0, 0.5];

        let outputs = problem.outputs(servings.view());
        assert_relative_eq!(outputs[0], 1.0);
        assert_relative_eq!(outputs[1], 0.9);
        assert_relative_eq!(problem.price(servings.view()), 4.5);
    }
}
