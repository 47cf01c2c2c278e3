//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so the
//! observers in this crate do not depend on one solver's event layout.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration number
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nutrimix_core::Observer;
//! use nutrimix_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use nutrimix_solvers::mixture;

/// An event that carries an iteration number.
pub trait HasIteration {
    /// Returns the iteration number, starting at 1.
    fn iteration(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for mixture::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for mixture::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl CanStopEarly for mixture::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
