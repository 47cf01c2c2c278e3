use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use nutrimix_core::{Recipe, merge};
use nutrimix_solvers::mixture::Config;

/// Reads every recipe file and merges them into their average.
pub fn read_recipes(paths: &[PathBuf]) -> Result<Recipe> {
    let recipes = paths
        .iter()
        .map(|path| read_recipe(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(count = recipes.len(), "recipes loaded");
    Ok(merge(recipes)?)
}

/// Reads one recipe document.
pub fn read_recipe(path: &Path) -> Result<Recipe> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read recipe {}", path.display()))?;
    Recipe::from_json(&json).with_context(|| format!("failed to parse recipe {}", path.display()))
}

/// Reads solver settings, or returns the defaults when no file is given.
pub fn read_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Parses solver settings from TOML; missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}
