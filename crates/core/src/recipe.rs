use serde::Deserialize;
use thiserror::Error;

use crate::{Ingredient, NutrientTargets};

/// A recipe document: ingredient records plus the nutrient profile they aim at.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub name: Option<String>,

    pub ingredients: Vec<Ingredient>,

    pub nutrient_targets: NutrientTargets,
}

/// Errors that can occur when merging recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("no recipes to merge")]
    Empty,
}

impl Recipe {
    /// Parses a recipe from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or lacks the
    /// `ingredients` or `nutrientTargets` fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Merges several recipes into their average.
///
/// Ingredients are matched by name. Nominal amounts of matching ingredients
/// are summed, then every amount is divided by the number of recipes, so an
/// ingredient that appears in only one of two recipes ends up at half its
/// amount. The other fields of an ingredient come from its first appearance.
/// The nutrient targets of the last recipe win.
///
/// # Errors
///
/// Returns [`MergeError::Empty`] if `recipes` yields nothing.
pub fn merge<I>(recipes: I) -> Result<Recipe, MergeError>
where
    I: IntoIterator<Item = Recipe>,
{
    let mut count = 0_usize;
    let mut names = Vec::new();
    let mut ingredients: Vec<Ingredient> = Vec::new();
    let mut nutrient_targets = None;

    for recipe in recipes {
        count += 1;
        names.extend(recipe.name);

        for ingredient in recipe.ingredients {
            match ingredients.iter_mut().find(|i| i.name == ingredient.name) {
                Some(existing) => existing.amount += ingredient.amount,
                None => ingredients.push(ingredient),
            }
        }

        nutrient_targets = Some(recipe.nutrient_targets);
    }

    let nutrient_targets = nutrient_targets.ok_or(MergeError::Empty)?;

    #[allow(clippy::cast_precision_loss)]
    let divisor = count as f64;
    for ingredient in &mut ingredients {
        ingredient.amount /= divisor;
    }

    let name = (!names.is_empty()).then(|| names.join(" + "));

    Ok(Recipe {
        name,
        ingredients,
        nutrient_targets,
    })
}
