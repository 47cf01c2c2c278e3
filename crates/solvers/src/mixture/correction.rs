use ndarray::Array1;

use super::{Diagnostic, Diagnostics, Problem};

/// Corrections above this factor suggest the cost weight is too aggressive.
const LARGE_CORRECTION: f64 = 1.1;

/// Scales `servings` up so the worst-covered target reaches 100%.
///
/// Returns the factor applied, which is never below 1. Targets that nothing
/// in the mixture supplies cannot be fixed by scaling and are skipped.
pub(super) fn correct(
    problem: &Problem,
    servings: &mut Array1<f64>,
    diagnostics: &mut Diagnostics,
) -> f64 {
    let outputs = problem.outputs(servings.view());

    let mut factor = 1.0_f64;
    for (target, &achieved) in problem.targets().iter().zip(&outputs) {
        if achieved > 0.0 {
            factor = factor.max(1.0 / achieved);
        } else {
            diagnostics.push(Diagnostic::UncoverableNutrient {
                nutrient: target.nutrient,
            });
        }
    }

    if factor > LARGE_CORRECTION {
        diagnostics.push(Diagnostic::LargeServingCorrection { factor });
    } else {
        tracing::info!("mixture scaled up by {:.2}%", (factor - 1.0) * 100.0);
    }

    servings.mapv_inplace(|s| s * factor);
    factor
}
