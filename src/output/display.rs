//! Display functions for command results

use super::formatters::{format_honeycomb, score_bar};
use crate::commands::{AnalysisResult, SearchResult};
use crate::search::HoneycombScore;
use colored::Colorize;

/// Print the ranked results of a full search
pub fn print_search_result(result: &SearchResult, count: usize, verbose: bool) {
    let summary = &result.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HONEYCOMB SEARCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run summary:".bright_cyan().bold());
    println!("   Corpus words:       {}", summary.corpus_size);
    println!("   Combinations:       {}", summary.combination_count);
    println!("   Honeycombs scored:  {}", summary.honeycombs_scored);
    println!(
        "   Scoring time:       {:.2}s",
        summary.duration.as_secs_f64()
    );

    let max_score = result.scores.best().first().map_or(0, |e| e.score);

    println!("\n🏆 {}", format!("Top {count}:").bright_cyan().bold());
    for entry in result.scores.top(count) {
        print_entry(entry, max_score, verbose);
    }

    println!("\n🐝 {}", format!("Bottom {count}:").bright_cyan().bold());
    for entry in result.scores.bottom(count) {
        print_entry(entry, max_score, verbose);
    }

    let best = result.scores.best();
    if best.len() > 1 {
        println!(
            "\n{}",
            format!("{} honeycombs tie for the maximum score", best.len()).yellow()
        );
    }
}

fn print_entry(entry: &HoneycombScore, max_score: u32, verbose: bool) {
    let bar = score_bar(entry.score, max_score, 24);
    print!(
        "   {} {} {}",
        format_honeycomb(&entry.honeycomb).bright_yellow(),
        bar.green(),
        format!("{:>6}", entry.score).bold()
    );
    if verbose {
        print!("  ({} words)", entry.word_count);
    }
    println!();
}

/// Print the result of analyzing a single honeycomb
pub fn print_analysis_result(result: &AnalysisResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HONEYCOMB ANALYSIS:".bright_cyan().bold(),
        format_honeycomb(&result.honeycomb).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Total score: {}",
        format!("{}", result.score).bright_yellow().bold()
    );
    println!("   Legal words: {}", result.words.len());

    let pangrams = result.words.iter().filter(|w| w.pangram).count();
    println!("   Pangrams:    {pangrams}");

    if verbose {
        println!();
        for word in &result.words {
            let marker = if word.pangram {
                "★".bright_yellow().to_string()
            } else {
                " ".to_string()
            };
            println!(
                "   {} {:<16} {:>4}",
                marker,
                word.text,
                format!("{}", word.points).bold()
            );
        }
    }
}
