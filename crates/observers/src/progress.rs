use nutrimix_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Logs solver progress at `debug` level every `every` iterations.
///
/// Never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLog {
    every: usize,
}

impl ProgressLog {
    /// Creates a logger that reports every `every` iterations.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    /// Returns true if the given iteration is reported.
    #[must_use]
    pub fn reports(&self, iteration: usize) -> bool {
        iteration % self.every == 0
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        if self.reports(iter) {
            tracing::debug!(iter, objective = event.objective(), "solver progress");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_on_interval() {
        let log = ProgressLog::new(100);
        assert!(!log.reports(1));
        assert!(log.reports(100));
        assert!(!log.reports(150));
        assert!(log.reports(300));
    }

    #[test]
    fn zero_interval_reports_everything() {
        let log = ProgressLog::new(0);
        assert!((1..10).all(|i| log.reports(i)));
    }
}
