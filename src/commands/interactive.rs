//! Interactive prompt loop
//!
//! Reads one word mask per iteration and prints the matching candidates with
//! a count. Empty input is rejected here, before the resolver is called.

use crate::index::WordIndex;
use crate::output::print_candidates;
use crate::resolver::resolve_query;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive prompt loop
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_interactive(index: &WordIndex) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Ordmask - Candidate Finder                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Describe a word with '_' for each unknown letter.");
    println!("Optionally add a second token of letters the word must contain.");
    println!("Examples: 'b_l', 'k_tt', '____ a'\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(line) = read_line("Enter a word mask")? else {
            // End of input
            println!();
            return Ok(());
        };

        if line.is_empty() {
            println!("{}\n", "You must enter a word mask".bright_red());
            continue;
        }

        match line.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
            query => {
                println!();
                let candidates = resolve_query(index, query);
                print_candidates(&candidates);
                println!();
            }
        }
    }
}

/// Read one trimmed line, or None at end of input
fn read_line(prompt: &str) -> Result<Option<String>, String> {
    print!("{}: ", prompt.bright_yellow());
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
