//! Plain-text tables for the terminal.
//!
//! Nutrient coverage is colour coded: cyan is too little, green is just
//! right, red is too much.

use colored::Colorize;
use nutrimix_core::{Coverage, Ingredient, NutrientReport};
use nutrimix_solvers::mixture::{Diagnostic, Solution, Status};

/// Lays out `rows` under `head`, left-aligning the first column.
///
/// `paint` styles a padded cell given its row and column index.
fn table<P>(head: &[&str], rows: &[Vec<String>], paint: P) -> String
where
    P: Fn(usize, usize, String) -> String,
{
    let mut widths: Vec<usize> = head.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let pad = |column: usize, text: &str, width: usize| {
        if column == 0 {
            format!("{text:<width$}")
        } else {
            format!("{text:>width$}")
        }
    };

    let header: Vec<String> = head
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(c, (&h, &w))| pad(c, h, w).bold().to_string())
        .collect();
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();

    let mut out = format!("{}\n{}\n", header.join("  "), rule.join("  "));
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(c, (cell, &w))| paint(r, c, pad(c, cell.as_str(), w)))
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

/// Renders official and optimized amounts side by side.
pub fn ingredient_table(ingredients: &[Ingredient], quantities: &[f64]) -> String {
    let rows: Vec<Vec<String>> = ingredients
        .iter()
        .zip(quantities)
        .map(|(ingredient, quantity)| {
            vec![
                ingredient.name.clone(),
                format!("{} {}", ingredient.amount, ingredient.unit),
                format!("{quantity:.2} {}", ingredient.unit),
            ]
        })
        .collect();

    table(&["Ingredient", "Official", "Optimized"], &rows, |_, _, cell| {
        cell
    })
}

/// Renders each targeted nutrient with its coverage.
pub fn nutrient_table(report: &NutrientReport) -> String {
    let rows: Vec<Vec<String>> = report
        .lines
        .iter()
        .map(|line| {
            vec![
                line.nutrient.to_string(),
                line.target.to_string(),
                line.max.map(|m| m.to_string()).unwrap_or_default(),
                format!("{:.2}", line.amount),
                line.percent.map(|p| format!("{p:.0}%")).unwrap_or_default(),
            ]
        })
        .collect();

    table(
        &["Nutrient", "Target", "Max", "Recipe", "% of Target"],
        &rows,
        |r, c, cell| {
            if c != 4 {
                return cell;
            }
            match report.lines[r].coverage {
                Coverage::Low => cell.cyan().bold().to_string(),
                Coverage::Ok => cell.green().to_string(),
                Coverage::High => cell.red().bold().reversed().to_string(),
            }
        },
    )
}

/// Renders one warning line per diagnostic.
pub fn diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{} {d}\n", "warning:".yellow().bold()))
        .collect()
}

/// Renders the run summary and the daily prices.
pub fn summary(solution: &Solution, nominal_price: f64) -> String {
    let status = match solution.status {
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit reached",
        Status::StoppedByObserver => "stopped early",
    };

    let mut out = format!(
        "Optimization {status} after {} iterations.\n",
        solution.iters
    );
    if let Some(factor) = solution.correction {
        out.push_str(&format!(
            "Servings scaled up by {:.2}%.\n",
            (factor - 1.0) * 100.0
        ));
    }
    out.push_str(&format!(
        "Price per day: {} (official recipe: ${nominal_price:.2})\n",
        format!("${:.2}", solution.price).bold()
    ));
    out
}
