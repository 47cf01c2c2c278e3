//! Numerical solvers for the nutrimix recipe optimizer.
//!
//! # Modules
//!
//! - [`mixture`] — penalty-method projected gradient descent that finds a
//!   cheap ingredient mixture meeting a nutrient profile
//! - [`vector`] — small vector helpers shared by the solvers

pub mod mixture;
pub mod vector;
