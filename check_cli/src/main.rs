//! # Loadcheck CLI Application
//!
//! Terminal stand-in for the load check form: search the material catalog,
//! pick a material, enter quantity / support / distribution, and get the
//! pass/fail assessment. The most recent check is cached to a JSON slot and
//! recovered on the next run.

use std::io::{self, BufRead, Write};
use std::path::Path;

use check_core::catalog::MaterialKind;
use check_core::evaluate::{EvaluationResult, LoadStatus};
use check_core::limits::{Distribution, SupportType};
use check_core::session::{CheckSession, Submission};
use check_core::store::JsonFileStore;

/// Cache slot for the most recent check, next to wherever the tool runs
const LAST_CHECK_SLOT: &str = "loadcheck_last.json";

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_line(prompt, &default.to_string())
        .parse()
        .unwrap_or(default)
}

fn status_icon(status: LoadStatus) -> &'static str {
    match status {
        LoadStatus::Pass => "[OK]",
        LoadStatus::NearLimit => "[WARN]",
        LoadStatus::Overloaded => "[FAIL]",
    }
}

fn print_result(result: &EvaluationResult) {
    println!("═══════════════════════════════════════");
    println!("  LOAD CHECK RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Material:     {}", result.material);
    println!("  Quantity:     {}", result.quantity);
    println!("  Support:      {}", result.support.key());
    println!("  Distribution: {}", result.distribution.key());
    println!();
    println!("Check:");
    println!("  Total Weight:   {:.2} lb", result.total_weight_lb);
    println!("  Adjusted Limit: {:.2} lb", result.adjusted_limit_lb);
    println!(
        "  Status:         {} ({:.0}% of limit) {}",
        result.status,
        result.utilization_percent(),
        status_icon(result.status)
    );
    if let Some(warning) = &result.warning {
        println!();
        println!("  Warning: {}", warning);
    }
    println!("═══════════════════════════════════════");
}

fn main() {
    println!("Loadcheck CLI - Support Capacity Checker");
    println!("========================================");
    println!();

    let store = JsonFileStore::new(Path::new(LAST_CHECK_SLOT));
    let mut session = CheckSession::new().with_store(Box::new(store));

    if let Some(last) = session.restore_last() {
        println!(
            "Last check recovered: {} x {} on {} ({}) -> {} at {}",
            last.quantity,
            last.material,
            last.support.key(),
            last.distribution.key(),
            last.status,
            last.checked_at.format("%Y-%m-%d %H:%M UTC"),
        );
        println!();
    }

    // Filter step
    let query = prompt_line("Search materials (blank for all): ", "");
    let kind_input = prompt_line("Type filter (rigid/stackable/loose, blank for all): ", "");
    let kinds: Vec<MaterialKind> = kind_input
        .split(',')
        .filter_map(MaterialKind::from_key)
        .collect();

    let options = session.options(&query, &kinds);
    if options.is_empty() {
        println!("No materials match '{}'.", query);
        return;
    }

    println!();
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.display_label());
    }
    println!();

    let choice = prompt_usize("Select material [1]: ", 1);
    let Some(option) = options.get(choice.saturating_sub(1)) else {
        println!("No material at position {}.", choice);
        return;
    };

    if let Err(e) = session.select(Some(&option.name)) {
        eprintln!("Error: {}", e);
        return;
    }

    let notes = session.notes();
    if !notes.text.is_empty() {
        println!();
        println!("Notes: {}", notes.text);
    }
    println!();

    // Submission step; quantity parses to NaN like an empty form field
    let quantity: f64 = prompt_line("Quantity [1]: ", "1").parse().unwrap_or(f64::NAN);

    println!("Supports:");
    for support in SupportType::ALL {
        println!("  {:<10} {}", support.key(), support.display_name());
    }
    let support = prompt_line("Support [scaffold]: ", "scaffold");

    println!("Distributions:");
    for distribution in Distribution::ALL {
        println!("  {:<12} {}", distribution.key(), distribution.display_name());
    }
    let distribution = prompt_line("Distribution [centered]: ", "centered");

    let submission = Submission {
        material: option.name.clone(),
        quantity,
        support,
        distribution,
    };

    println!();
    match session.submit(&submission) {
        Ok(result) => {
            print_result(&result);

            let notes = session.notes();
            if !notes.text.is_empty() {
                println!();
                println!("Notes: {}", notes.text);
            }

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
