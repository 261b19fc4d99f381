//! Display functions for command results

use super::formatters::{blank_cost_label, wrap_words};
use crate::commands::{AnagramResult, BenchmarkResult, SearchResult, SubwordsResult};
use colored::Colorize;

const LINE_WIDTH: usize = 72;

/// Print the anagrams of a word
pub fn print_anagram_result(result: &AnagramResult) {
    println!(
        "\nAnagrams of {}:",
        result.word.to_uppercase().bright_yellow().bold()
    );
    if result.anagrams.is_empty() {
        println!("   {}", "none".bright_black());
        return;
    }
    let words: Vec<&str> = result.anagrams.iter().map(String::as_str).collect();
    for line in wrap_words(&words, LINE_WIDTH) {
        println!("   {line}");
    }
}

/// Print the subwords of a set of letters, one line per word length
pub fn print_subwords_result(result: &SubwordsResult) {
    println!(
        "\n{} words from {}:",
        result.words.len().to_string().bright_cyan().bold(),
        result.letters.to_uppercase().bright_yellow().bold()
    );

    let mut start = 0;
    while start < result.words.len() {
        let len = result.words[start].chars().count();
        let end = result.words[start..]
            .iter()
            .position(|w| w.chars().count() != len)
            .map_or(result.words.len(), |offset| start + offset);

        let words: Vec<&str> = result.words[start..end].iter().map(String::as_str).collect();
        println!("\n   {}", format!("{len} letters").cyan());
        for line in wrap_words(&words, LINE_WIDTH) {
            println!("   {line}");
        }
        start = end;
    }
}

/// Print pattern search results grouped by blank cost
pub fn print_search_result(result: &SearchResult<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RACK:".bright_cyan().bold(),
        result.tiles.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for options in &result.options {
        let shown = if options.pattern.is_empty() {
            "(any)"
        } else {
            options.pattern.as_str()
        };
        println!(
            "\n🔎 {} {}",
            shown.bright_white().bold(),
            format!("({} words)", options.word_count()).bright_black()
        );

        if options.groups.is_empty() {
            println!("   {}", "no matches".bright_black());
        }
        for group in &options.groups {
            let label = blank_cost_label(&group.blank_cost);
            let label = if group.blanks() == 0 {
                label.green()
            } else {
                label.yellow()
            };
            println!("   {label}");
            for line in wrap_words(&group.words, LINE_WIDTH) {
                println!("      {line}");
            }
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks tested:     {}", result.racks);
    println!("   Subwords found:   {}", result.total_subwords);
    println!(
        "   Pattern matches:  {} in {} blank groups",
        result.total_pattern_words, result.total_groups
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );
}
