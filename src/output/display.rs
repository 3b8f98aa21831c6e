//! Display functions for command results

use super::formatters::histogram_bar;
use crate::commands::IndexStatistics;
use colored::Colorize;

/// Print the candidate list for a resolved query, count first
pub fn print_candidates(candidates: &[&str]) {
    println!(
        "There are {} possible words matching the given mask:",
        candidates.len().to_string().bright_green()
    );

    for candidate in candidates {
        println!("  * {}", candidate.bright_green());
    }
}

/// Print the index statistics report
pub fn print_index_statistics(stats: &IndexStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "INDEX STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Indexed words:   {}",
        stats.total_words.to_string().bright_green()
    );
    println!("  Distinct words:  {}", stats.distinct_words);
    println!("  Position keys:   {}", stats.position_keys);

    if let Some((shortest, longest)) = stats.length_range {
        println!("  Word lengths:    {shortest} to {longest}");
    }

    if !stats.distribution.is_empty() {
        let max_count = stats
            .distribution
            .iter()
            .map(|&(_, count)| count)
            .max()
            .unwrap_or(0);

        println!("\n  Words per length:");
        for &(length, count) in &stats.distribution {
            println!(
                "  {length:>4}  {}  {count}",
                histogram_bar(count, max_count, 30).cyan()
            );
        }
    }

    println!();
}
