//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, MultiSolveResult, SolveResult, TestAllStatistics};
use crate::solver::Turn;
use colored::Colorize;

fn expected_label(expected: Option<f64>) -> String {
    expected.map_or_else(|| "unscored".to_string(), |value| format!("{value:.3}"))
}

fn print_turn(number: usize, turn: &Turn, emoji: &str, verbose: bool) {
    println!(
        "\nTurn {}: {} {}",
        number,
        turn.guess.text().to_uppercase(),
        emoji
    );

    if verbose {
        println!("  Candidates: {} → {}", turn.pool_before, turn.pool_after);
        println!(
            "  Expected:   {} ({} guesses)",
            expected_label(turn.expected_remaining),
            turn.policy
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (turn, feedback)) in result.game.turns.iter().zip(&result.feedback).enumerate() {
        print_turn(i + 1, turn, &feedback_to_emoji(feedback), verbose);
    }

    println!();
    match result.game.guesses_used() {
        Some(used) if used > result.game.turns.len() => println!(
            "{}",
            format!("✅ Deduced {}, solved in {used} guesses", result.answer)
                .green()
                .bold()
        ),
        Some(used) => println!("{}", format!("✅ Solved in {used} guesses!").green().bold()),
        None => println!(
            "{}",
            format!("❌ Stopped after {} guesses", result.game.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a multi-board run
pub fn print_multi_result(result: &MultiSolveResult, verbose: bool) {
    let answers: Vec<String> = result
        .answers
        .iter()
        .map(|answer| answer.text().to_uppercase())
        .collect();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving {} boards: {}",
        answers.len(),
        answers.join(" ").bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.game.turns.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, turn.guess.text().to_uppercase());
        if verbose {
            println!(
                "  Expected:   {} total ({} guesses)",
                expected_label(turn.expected_remaining),
                turn.policy
            );
        }
        let pools: Vec<String> = turn
            .pools_before
            .iter()
            .zip(&turn.pools_after)
            .map(|(before, after)| {
                if *after == 0 {
                    "done".green().to_string()
                } else {
                    format!("{before}→{after}")
                }
            })
            .collect();
        println!("  Boards:     {}", pools.join("  "));
    }

    println!();
    for (answer, solved_on) in result.answers.iter().zip(&result.game.solved_on) {
        match solved_on {
            Some(turn) => println!("  {} solved on turn {turn}", answer.text().to_uppercase()),
            None => println!("  {} {}", answer.text().to_uppercase(), "unsolved".red()),
        }
    }

    println!();
    match result.turns_used() {
        Some(turns) => println!(
            "{}",
            format!("✅ All boards solved in {turns} guesses!").green().bold()
        ),
        None => println!(
            "{}",
            format!("❌ Stopped after {} guesses", result.game.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EXPECTED REMAINING:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(result.expected_remaining, total, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.3} candidates remain", result.expected_remaining).bright_yellow()
    );
    if total > 0.0 {
        println!(
            "   Reduction:   {:.1}% of the pool eliminated on average",
            (1.0 - result.expected_remaining / total) * 100.0
        );
    }
    println!(
        "   Possible:    {}",
        if result.in_pool {
            "yes, could be the answer".green()
        } else {
            "no, probe word only".yellow()
        }
    );

    if let Some(comparison) = &result.comparison {
        println!("\n📈 {}", "Compared with every guess:".bright_cyan().bold());
        println!(
            "   Rank:        {} of {}",
            comparison.rank + 1,
            comparison.total_guesses
        );
        println!("   Best:        {}", comparison.best.to_string().green());
        println!("   Worst:       {}", comparison.worst.to_string().red());
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }

    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Stopped unsolved:    {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!(
                "  {} ({} guesses)",
                word.text().to_uppercase().yellow(),
                guesses
            );
        }
    }
}
