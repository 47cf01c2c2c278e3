use nutrimix_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Records the objective of every observed iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveHistory {
    points: Vec<(usize, f64)>,
}

impl ObjectiveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(iteration, objective)` pairs in order.
    #[must_use]
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Returns the first recorded objective.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.points.first().map(|(_, objective)| *objective)
    }

    /// Returns the last recorded objective.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.points.last().map(|(_, objective)| *objective)
    }

    /// Returns true if every recorded objective is below the one before it.
    #[must_use]
    pub fn is_strictly_decreasing(&self) -> bool {
        self.points.windows(2).all(|pair| pair[1].1 < pair[0].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<E, A> Observer<E, A> for ObjectiveHistory
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push((event.iteration(), event.objective()));
        None
    }
}

/// Allows `&mut ObjectiveHistory` to be passed to solvers that take an
/// observer by value, so the history can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut ObjectiveHistory
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
