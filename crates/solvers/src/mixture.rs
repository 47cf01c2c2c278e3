//! Cost-minimizing ingredient mixtures.
//!
//! # Algorithm
//!
//! Every targeted nutrient becomes a soft constraint on its normalized output
//! (achieved amount divided by the target amount). Outputs below `1` are
//! penalized by a lower half-parabola, outputs above the nutrient's ceiling
//! ratio by an upper one, and anything in between is free. A small cost term
//! pulls the mixture toward cheaper ingredients:
//!
//! ```text
//! f(x) = Σ_t penalty_t(output_t) + w · Σ_i cost_i · x_i
//! ```
//!
//! The solver starts from an empty mixture and runs projected gradient
//! descent: each iteration moves along the negative gradient, clamps every
//! quantity at zero, and picks the step with a backtracking line search that
//! is refined by parabolic interpolation. Iteration stops when no step along
//! the negative gradient improves the objective.
//!
//! Because the penalties are soft, a significant cost weight leaves some
//! nutrients slightly under target. Unless disabled, a final serving-size
//! correction scales the whole mixture up so the worst-covered nutrient
//! reaches exactly 100%.
//!
//! Quantities are in servings internally and converted back to each
//! ingredient's own unit at the end.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every accepted step, carrying the
//! iteration number, the step taken, the new objective and the current
//! servings. Observers can return [`Action::StopEarly`] to halt; the mixture
//! reached so far is still corrected and returned.
//!
//! # Diagnostics
//!
//! Incomplete input never aborts a run. Ingredients without cost data are
//! excluded, missing nutrient values count as zero, and so on; each such
//! assumption is recorded as a [`Diagnostic`] in the returned [`Solution`]
//! and logged at `warn` level.

mod action;
mod config;
mod convert;
mod correction;
mod descent;
mod diagnostic;
mod error;
mod event;
mod gradient;
mod line_search;
mod objective;
mod problem;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use convert::{to_quantities, to_servings};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::Error;
pub use event::Event;
pub use problem::{Cost, Exclusion, IngredientTerm, Problem, TargetTerm};
pub use solution::{Solution, Status};

use nutrimix_core::{Ingredient, NutrientTargets, Observer};

use descent::descend;

/// Finds a cost-minimizing mixture of `ingredients` that meets `targets`.
///
/// The observer receives an [`Event`] after every accepted step.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config is invalid, if there are no ingredients,
/// or if no target is a recognized nutrient with a positive amount.
pub fn optimize<Obs>(
    ingredients: &[Ingredient],
    targets: &NutrientTargets,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let mut diagnostics = Diagnostics::new();
    let problem = Problem::build(ingredients, targets, config, &mut diagnostics)?;

    let descent = descend(&problem, config, &mut observer);
    let mut servings = descent.servings;

    if descent.status == Status::MaxIters {
        diagnostics.push(Diagnostic::IterationLimit {
            iters: descent.iters,
        });
    }

    let correction = config
        .serving_size_correction
        .then(|| correction::correct(&problem, &mut servings, &mut diagnostics));

    let objective = problem.objective(servings.view());
    let price = problem.price(servings.view());
    let servings = servings.to_vec();
    let quantities = to_quantities(ingredients, &servings, &mut diagnostics);

    tracing::info!(
        status = ?descent.status,
        iters = descent.iters,
        objective,
        price,
        "mixture optimized"
    );

    Ok(Solution {
        status: descent.status,
        quantities,
        servings,
        objective,
        price,
        correction,
        iters: descent.iters,
        diagnostics: diagnostics.into_vec(),
    })
}

/// Finds a cost-minimizing mixture without observer support.
///
/// This is a convenience wrapper around [`optimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`optimize`].
pub fn optimize_unobserved(
    ingredients: &[Ingredient],
    targets: &NutrientTargets,
    config: &Config,
) -> Result<Solution, Error> {
    optimize(ingredients, targets, config, ())
}
