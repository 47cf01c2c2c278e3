//! `nutrimix`: optimizes a DIY food recipe for price.
//!
//! Reads one or more recipe documents, averages them, finds the cheapest
//! ingredient amounts that meet the nutrient targets, and prints the
//! ingredient and nutrient tables.

mod cli;
mod load;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use nutrimix_core::{NutrientReport, Observer};
use nutrimix_observers::{ObjectiveHistory, Plateau, ProgressLog};
use nutrimix_solvers::mixture::{self, Action, Event};
use tracing_subscriber::EnvFilter;

use cli::{Cli, PLATEAU_PATIENCE};

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so the tables on stdout stay clean.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let recipe = load::read_recipes(&args.recipes)?;
    let mut config = load::read_config(args.config.as_deref())?;
    args.apply(&mut config);

    if let Some(name) = &recipe.name {
        println!("{}\n", name.bold());
    }

    let mut history = ObjectiveHistory::new();
    let mut progress = args.progress_every.map(ProgressLog::new);
    let mut plateau = args
        .stop_plateau
        .map(|tolerance| Plateau::new(tolerance, PLATEAU_PATIENCE));

    let observer = |event: &Event<'_>| -> Option<Action> {
        let _: Option<Action> = history.observe(event);
        if let Some(progress) = progress.as_mut() {
            let _: Option<Action> = progress.observe(event);
        }
        plateau.as_mut().and_then(|plateau| plateau.observe(event))
    };

    let solution = mixture::optimize(
        &recipe.ingredients,
        &recipe.nutrient_targets,
        &config,
        observer,
    )
    .context("failed to optimize the recipe")?;

    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        tracing::info!(first, last, steps = history.len(), "objective history");
    }

    let nominal: Vec<f64> = recipe.ingredients.iter().map(|i| i.amount).collect();
    let nominal_price =
        NutrientReport::new(&recipe.ingredients, &nominal, &recipe.nutrient_targets).price;
    let report = NutrientReport::new(
        &recipe.ingredients,
        &solution.quantities,
        &recipe.nutrient_targets,
    );

    println!(
        "{}",
        render::ingredient_table(&recipe.ingredients, &solution.quantities)
    );
    println!("{}", render::nutrient_table(&report));
    print!("{}", render::summary(&solution, nominal_price));
    eprint!("{}", render::diagnostics(&solution.diagnostics));

    Ok(())
}
