//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENTROPY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n📊 Against {} possible answers:\n", result.total_candidates);

    for (rank, entry) in result.entries.iter().enumerate() {
        let bar = entropy_bar(entry.entropy, result.total_candidates, 30);
        let marker = if entry.is_candidate {
            "●".green()
        } else {
            "○".bright_black()
        };

        println!(
            "{:>3}. {} {} [{}] {}",
            rank + 1,
            marker,
            entry.word.to_uppercase().bright_yellow().bold(),
            bar.green(),
            format!("{:.3} bits", entry.entropy).bright_yellow()
        );
        println!(
            "        {:.1}x reduction, {:.1} expected remaining, worst case {}",
            entry.expected_reduction, entry.expected_remaining, entry.max_partition
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} ({guesses} guesses)", word.to_uppercase().red());
        }
    }
}
