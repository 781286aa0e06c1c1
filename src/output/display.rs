//! Display functions for command results

use super::formatters::{columns, green_pattern, upper_letters};
use crate::commands::FilterResult;
use colored::Colorize;

const WORDS_PER_ROW: usize = 10;

/// Print the result of a one-shot filter
///
/// At most `limit` candidates are listed; the count always covers all of them.
pub fn print_filter_result(result: &FilterResult, limit: Option<usize>) {
    let constraints = &result.constraints;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Grey:   {}",
        upper_letters(constraints.grey()).bright_black().bold()
    );
    println!(
        "Green:  {}",
        green_pattern(constraints.green()).green().bold()
    );
    let orange: Vec<String> = constraints
        .orange()
        .iter()
        .map(|slot| {
            if slot.is_empty() {
                "-".to_string()
            } else {
                upper_letters(slot)
            }
        })
        .collect();
    println!("Orange: {}", orange.join(" | ").yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if !result.ignored_grey.is_empty() {
        println!(
            "{}",
            format!(
                "Ignored grey letters already marked green/orange: {}",
                result.ignored_grey.to_uppercase()
            )
            .yellow()
        );
    }

    println!(
        "\n📋 Available words: {}/{}",
        result.candidates.len().to_string().bright_yellow().bold(),
        result.total_words
    );

    if result.candidates.is_empty() {
        println!("{}", "\n❌ No words match these letters".red().bold());
        return;
    }

    let shown = limit.unwrap_or(result.candidates.len());
    let listed: Vec<String> = result
        .candidates
        .iter()
        .take(shown)
        .map(|w| w.to_uppercase())
        .collect();

    println!();
    for row in columns(&listed, WORDS_PER_ROW) {
        println!("  {row}");
    }

    if result.candidates.len() > listed.len() {
        println!(
            "{}",
            format!("  … and {} more", result.candidates.len() - listed.len()).bright_black()
        );
    }
}
