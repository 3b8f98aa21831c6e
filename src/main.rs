//! Ordmask - CLI
//!
//! Masked-word candidate finder for crosswords and word games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use ordmask::{
    commands::{collect_statistics, run_find, run_interactive},
    index::{WordIndex, build_index_parallel},
    output::print_index_statistics,
    wordlists::{ORDLISTA, loader},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "ordmask",
    about = "Masked-word candidate finder for crosswords and word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a .txt/.json word list
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt loop (default)
    Interactive,

    /// Resolve a single mask query
    Find {
        /// Mask and optional inclusion letters, e.g. 'b_l' or '____ a'
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show statistics for the built index
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;
    let index = build_with_spinner(&corpus);

    println!(
        "{}",
        format!("Indexed words: {}", index.word_count()).green()
    );

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(&index).map_err(|e| anyhow::anyhow!(e)),
        Commands::Find { query } => {
            run_find(&index, &query.join(" ")).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            print_index_statistics(&collect_statistics(&index));
            Ok(())
        }
    }
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(ORDLISTA)),
        path => Ok(loader::load_from_file(path)?),
    }
}

/// Build the index behind a startup spinner
fn build_with_spinner(corpus: &[String]) -> WordIndex {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Indexing {} words...", corpus.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let index = build_index_parallel(corpus);

    spinner.finish_and_clear();
    index
}
