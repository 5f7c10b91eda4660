//! Honeycomb Solver - CLI
//!
//! Exhaustive Spelling Bee honeycomb optimizer: finds the 7-letter
//! combination and center letter maximizing the total score of all legal
//! dictionary words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use honeycomb_solver::{
    commands::{analyze_honeycomb, run_search},
    core::{PuzzleRules, Word},
    output::{print_analysis_result, print_search_result},
    wordlists::{SAMPLE, loader},
};
use indicatif::ProgressBar;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "honeycomb_solver",
    about = "Exhaustive Spelling Bee honeycomb optimizer using letter bitmasks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sample' (bundled demo list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// Letter excluded from all words and combinations
    #[arg(long, global = true, default_value = "s")]
    banned_letter: char,

    /// Minimum accepted word length
    #[arg(long, global = true, default_value = "4")]
    min_length: usize,

    /// Score every 7-letter combination, not just those with a pangram
    #[arg(long, global = true)]
    no_pangram: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full search and report the best and worst honeycombs (default)
    Solve {
        /// How many top and bottom honeycombs to print
        #[arg(short = 'k', long, default_value = "5")]
        count: usize,

        /// Show per-honeycomb word counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one specific honeycomb
    Analyze {
        /// The 7 letters of the combination, in any order
        letters: String,

        /// The required center letter
        center: char,

        /// List every legal word with its points
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Build the puzzle rules from the global flags
fn build_rules(cli: &Cli) -> Result<PuzzleRules> {
    if !cli.banned_letter.is_ascii_alphabetic() {
        bail!("Banned letter must be a letter, got '{}'", cli.banned_letter);
    }
    Ok(PuzzleRules {
        banned_letter: cli.banned_letter.to_ascii_lowercase() as u8,
        min_word_length: cli.min_length,
        require_pangram: !cli.no_pangram,
    })
}

/// Load the corpus based on the -w flag
fn load_corpus(wordlist: &str, rules: &PuzzleRules) -> Result<Vec<Word>> {
    match wordlist {
        "sample" => Ok(loader::words_from_slice(SAMPLE, rules)),
        path => loader::load_from_file(path, rules)
            .with_context(|| format!("Failed to load word list from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = build_rules(&cli)?;
    let corpus = load_corpus(&cli.wordlist, &rules)?;

    // Default to a full search if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        count: 5,
        verbose: false,
    });

    match command {
        Commands::Solve { count, verbose } => run_solve_command(&corpus, &rules, count, verbose),
        Commands::Analyze {
            letters,
            center,
            verbose,
        } => run_analyze_command(&letters, center, &corpus, verbose),
    }
}

fn run_solve_command(
    corpus: &[Word],
    rules: &PuzzleRules,
    count: usize,
    verbose: bool,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Scoring honeycombs over {} words...",
        corpus.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = run_search(corpus, rules).map_err(|e| anyhow::anyhow!(e));
    spinner.finish_and_clear();

    print_search_result(&result?, count, verbose);
    Ok(())
}

fn run_analyze_command(letters: &str, center: char, corpus: &[Word], verbose: bool) -> Result<()> {
    let result = analyze_honeycomb(letters, center, corpus).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result, verbose);
    Ok(())
}
