//! Core types for the nutrimix recipe optimizer.
//!
//! This crate defines the domain data that the solver and the command line
//! front end share:
//!
//! - [`Nutrient`] — the closed set of recognized nutrients
//! - [`Ingredient`] — an ingredient record with cost, serving and nutrient data
//! - [`NutrientTargets`] — a daily nutrient profile with optional ceilings
//! - [`Recipe`] and [`merge`] — recipe documents and their averaging
//! - [`NutrientReport`] — nutrient totals of a mixture against a profile
//! - [`Observer`] — receives solver events and optionally returns control actions

mod ingredient;
mod number;
mod nutrient;
mod observer;
mod recipe;
mod report;
mod targets;

pub use ingredient::{Ingredient, NutrientAmounts};
pub use nutrient::{MAX_SUFFIX, Nutrient, UnknownNutrient};
pub use observer::Observer;
pub use recipe::{MergeError, Recipe, merge};
pub use report::{Coverage, NutrientLine, NutrientReport};
pub use targets::NutrientTargets;
