use ndarray::{Array1, ArrayView1};

use crate::vector::projected_step;

use super::{Config, Problem};

/// Outcome of a line search along a descent direction.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum LineSearch {
    /// A step that lowers the objective.
    Accepted {
        /// Multiple of the direction that was taken.
        step: f64,

        /// The projected point reached by the step.
        point: Array1<f64>,

        /// Objective value at `point`.
        objective: f64,
    },

    /// No step down to the minimum step size lowers the objective.
    Exhausted,
}

/// A trial point along the search direction.
struct Trial {
    step: f64,
    point: Array1<f64>,
    objective: f64,
}

impl Trial {
    fn at(
        problem: &Problem,
        x: ArrayView1<'_, f64>,
        direction: ArrayView1<'_, f64>,
        step: f64,
    ) -> Self {
        let point = projected_step(x, direction, step);
        let objective = problem.objective(point.view());
        Self {
            step,
            point,
            objective,
        }
    }
}

/// Searches for a step along `direction` that lowers the objective below `fx`.
///
/// Steps start at `initial_step` and halve until one improves on `fx`. The
/// accepted step is then refined: its midpoint is sampled, a parabola is fit
/// through the three values, and the lowest of the full, half and
/// interpolated steps wins. Earlier candidates win ties.
pub(super) fn search(
    problem: &Problem,
    x: ArrayView1<'_, f64>,
    direction: ArrayView1<'_, f64>,
    fx: f64,
    config: &Config,
) -> LineSearch {
    let mut step = config.initial_step;
    let full = loop {
        let trial = Trial::at(problem, x, direction, step);
        if trial.objective < fx {
            break trial;
        }
        step *= 0.5;
        if step < config.min_step {
            return LineSearch::Exhausted;
        }
    };

    let half = Trial::at(problem, x, direction, 0.5 * step);
    let fraction = parabolic_minimum([0.0, 0.5, 1.0], [fx, half.objective, full.objective]);
    let interpolated = (fraction.is_finite() && fraction > 0.0)
        .then(|| Trial::at(problem, x, direction, fraction * step));

    let best = [Some(half), interpolated]
        .into_iter()
        .flatten()
        .fold(full, |best, trial| {
            if trial.objective < best.objective {
                trial
            } else {
                best
            }
        });

    LineSearch::Accepted {
        step: best.step,
        point: best.point,
        objective: best.objective,
    }
}

/// Returns the abscissa of the vertex of the parabola through three points.
///
/// The result is not finite when the points are collinear.
pub(super) fn parabolic_minimum(x: [f64; 3], f: [f64; 3]) -> f64 {
    let left = (x[1] - x[0]) * (f[1] - f[2]);
    let right = (x[1] - x[2]) * (f[1] - f[0]);
    let top = (x[1] - x[0]) * left - (x[1] - x[2]) * right;
    let bottom = 2.0 * (left - right);
    x[1] - top / bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use nutrimix_core::{Ingredient, Nutrient, NutrientTargets};

    use crate::mixture::Diagnostics;

    #[test]
    fn vertex_of_exact_parabola() {
        // f(x) = (x - 0.3)^2 + 1
        let f = |x: f64| (x - 0.3).powi(2) + 1.0;
        let vertex = parabolic_minimum([0.0, 0.5, 1.0], [f(0.0), f(0.5), f(1.0)]);
        assert_relative_eq!(vertex, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_have_no_vertex() {
        let vertex = parabolic_minimum([0.0, 0.5, 1.0], [3.0, 2.0, 1.0]);
        assert!(!vertex.is_finite());
    }

    fn single_iron_problem() -> Problem {
        let targets = NutrientTargets::new().with(Nutrient::Iron, 10.0);
        let ingredients = [Ingredient::new("Iron pill")
            .serving(1.0)
            .container(1.0, 1.0)
            .nutrient(Nutrient::Iron, 10.0)];
        Problem::build(
            &ingredients,
            &targets,
            &Config::default(),
            &mut Diagnostics::new(),
        )
        .unwrap()
    }

    #[test]
    fn accepted_step_improves_and_stays_feasible() {
        let problem = single_iron_problem();
        let x = array![0.0];
        let fx = problem.objective(x.view());
        let direction = -problem.gradient(x.view());

        let LineSearch::Accepted {
            step,
            point,
            objective,
        } = search(&problem, x.view(), direction.view(), fx, &Config::default())
        else {
            panic!("expected an accepted step");
        };

        assert!(step > 0.0);
        assert!(objective < fx);
        assert!(point[0] >= 0.0);
        assert_relative_eq!(objective, problem.objective(point.view()));
    }

    #[test]
    fn uphill_direction_is_exhausted() {
        let problem = single_iron_problem();
        let x = array![0.5];
        let fx = problem.objective(x.view());

        // Moving away from the target only makes things worse.
        let direction = array![-1.0];

        let outcome = search(&problem, x.view(), direction.view(), fx, &Config::default());
        assert_eq!(outcome, LineSearch::Exhausted);
    }

    #[test]
    fn picks_the_lowest_candidate() {
        let problem = single_iron_problem();
        let x = array![0.0];
        let fx = problem.objective(x.view());
        let direction = array![1.0];

        // Step 2 reaches 2.0, the midpoint 1.0 and the vertex 1.43.
        let LineSearch::Accepted { step, objective, .. } =
            search(&problem, x.view(), direction.view(), fx, &Config::default())
        else {
            panic!("expected an accepted step");
        };

        for candidate in [2.0, 1.43] {
            assert!(objective < problem.objective(array![candidate].view()));
        }
        assert_relative_eq!(step, 1.0);
        assert_relative_eq!(objective, 0.07);
    }
}
