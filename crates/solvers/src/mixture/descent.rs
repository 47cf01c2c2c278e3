use ndarray::Array1;
use nutrimix_core::Observer;

use crate::vector::{norm, scale};

use super::{
    Action, Config, Event, Problem, Status,
    line_search::{LineSearch, search},
};

/// Where projected gradient descent ended.
pub(super) struct Descent {
    pub(super) servings: Array1<f64>,
    pub(super) status: Status,
    pub(super) iters: usize,
}

/// Runs projected gradient descent from the empty mixture.
///
/// Each iteration searches along the negative gradient; the accepted point is
/// already clamped at zero. Stops when the line search is exhausted, when the
/// observer asks to, or after `max_iters` line searches.
pub(super) fn descend<Obs>(problem: &Problem, config: &Config, observer: &mut Obs) -> Descent
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut servings: Array1<f64> = Array1::zeros(problem.ingredients().len());
    let mut objective = problem.objective(servings.view());

    for iter in 1..=config.max_iters {
        let gradient = problem.gradient(servings.view());
        let direction = scale(gradient.view(), -1.0);

        match search(problem, servings.view(), direction.view(), objective, config) {
            LineSearch::Exhausted => {
                tracing::debug!(
                    iter,
                    objective,
                    gradient_norm = norm(gradient.view()),
                    "line search exhausted"
                );
                return Descent {
                    servings,
                    status: Status::Converged,
                    iters: iter,
                };
            }
            LineSearch::Accepted {
                step,
                point,
                objective: value,
            } => {
                servings = point;
                objective = value;

                let event = Event {
                    iter,
                    step,
                    objective,
                    servings: servings.view(),
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Descent {
                        servings,
                        status: Status::StoppedByObserver,
                        iters: iter,
                    };
                }
            }
        }
    }

    Descent {
        servings,
        status: Status::MaxIters,
        iters: config.max_iters,
    }
}
