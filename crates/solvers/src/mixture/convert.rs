use nutrimix_core::Ingredient;

use super::{Diagnostic, Diagnostics};

/// Converts servings into quantities in each ingredient's own unit.
///
/// Ingredients with a missing or unusable serving size keep their servings
/// as the quantity, recorded as [`Diagnostic::MissingServingSize`].
///
/// # Panics
///
/// Panics if `servings` and `ingredients` differ in length.
pub fn to_quantities(
    ingredients: &[Ingredient],
    servings: &[f64],
    diagnostics: &mut Diagnostics,
) -> Vec<f64> {
    assert_eq!(ingredients.len(), servings.len(), "one value per ingredient");

    ingredients
        .iter()
        .zip(servings)
        .map(|(ingredient, &s)| {
            ingredient.quantity_from_servings(s).unwrap_or_else(|| {
                diagnostics.push(Diagnostic::MissingServingSize {
                    ingredient: ingredient.name.clone(),
                });
                s
            })
        })
        .collect()
}

/// Converts quantities in each ingredient's own unit into servings.
///
/// The inverse of [`to_quantities`]; quantities of ingredients without a
/// usable serving size pass through unchanged.
///
/// # Panics
///
/// Panics if `quantities` and `ingredients` differ in length.
#[must_use]
pub fn to_servings(ingredients: &[Ingredient], quantities: &[f64]) -> Vec<f64> {
    assert_eq!(ingredients.len(), quantities.len(), "one value per ingredient");

    ingredients
        .iter()
        .zip(quantities)
        .map(|(ingredient, &q)| ingredient.servings_from_quantity(q).unwrap_or(q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Oats").serving(40.0),
            Ingredient::new("Pill"),
            Ingredient::new("Oil").serving(13.5),
        ]
    }

    #[test]
    fn servings_to_quantities() {
        let mut diagnostics = Diagnostics::new();

        let quantities = to_quantities(&ingredients(), &[2.5, 3.0, 0.0], &mut diagnostics);

        assert_eq!(quantities, vec![100.0, 3.0, 0.0]);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::MissingServingSize {
                ingredient: "Pill".into()
            }]
        );
    }

    #[test]
    fn round_trip_recovers_servings() {
        let servings = [1.234_567, 0.5, 2.718_281_8];

        let quantities = to_quantities(&ingredients(), &servings, &mut Diagnostics::new());
        let back = to_servings(&ingredients(), &quantities);

        for (a, b) in servings.iter().zip(&back) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }
}
