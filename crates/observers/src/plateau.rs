use nutrimix_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the objective stops improving.
///
/// An event counts as stalled when it lowers the best objective seen so far
/// by no more than `tolerance` relative to that best. After `patience`
/// consecutive stalled events the observer asks the solver to stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Plateau {
    tolerance: f64,
    patience: usize,
    best: Option<f64>,
    stalled: usize,
}

impl Plateau {
    /// Creates a plateau detector.
    ///
    /// A patience of zero is treated as one.
    #[must_use]
    pub fn new(tolerance: f64, patience: usize) -> Self {
        Self {
            tolerance: tolerance.abs(),
            patience: patience.max(1),
            best: None,
            stalled: 0,
        }
    }
}

impl<E, A> Observer<E, A> for Plateau
where
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();

        let Some(best) = self.best else {
            self.best = Some(objective);
            return None;
        };

        if best - objective > self.tolerance * best.abs() {
            self.stalled = 0;
        } else {
            self.stalled += 1;
        }
        self.best = Some(best.min(objective));

        if self.stalled >= self.patience {
            tracing::debug!(objective, stalled = self.stalled, "objective plateaued");
            return Some(A::stop_early());
        }
        None
    }
}
