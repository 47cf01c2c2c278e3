//! Reusable observers for the nutrimix solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ProgressLog`] — logs the objective every few iterations through `tracing`
//! - [`ObjectiveHistory`] — records the objective of every iteration
//! - [`Plateau`] — stops the solver once the objective stops improving
//!
//! [`Observer`]: nutrimix_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod plateau;
mod progress;

pub use history::ObjectiveHistory;
pub use plateau::Plateau;
pub use progress::ProgressLog;
