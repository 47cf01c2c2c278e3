use super::Diagnostic;

/// Indicates how the descent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No step along the negative gradient improves the objective.
    Converged,

    /// Reached the iteration limit; the mixture is approximate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a mixture optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Quantity of each ingredient in its own unit, in input order.
    pub quantities: Vec<f64>,

    /// Servings of each ingredient, in input order.
    pub servings: Vec<f64>,

    /// Objective value at the returned servings.
    pub objective: f64,

    /// Price of the returned mixture.
    pub price: f64,

    /// Serving-size correction factor, if the correction ran.
    pub correction: Option<f64>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Assumptions and warnings collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}
