//! Display functions for command results

use colored::Colorize;

use super::formatters::create_progress_bar;
use crate::core::Word;
use crate::game::MAX_GUESSES;
use crate::stats::Statistics;

/// Print the end-of-game banner
pub fn print_game_over(won: bool, target: &Word, rows_used: usize) {
    println!();
    if won {
        let performance = match rows_used {
            1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
            2 => ("⭐ Excellent!", "Outstanding performance!"),
            3 => ("💫 Great!", "Very well played!"),
            4 => ("✨ Good!", "Nice work!"),
            5 => ("👍 Solved!", "Got it!"),
            _ => ("😅 Phew!", "Down to the wire!"),
        };

        println!("{}", "═".repeat(60).bright_cyan());
        println!("{}", "    🎉  Y O U   W O N !  🎉    ".bright_green().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        println!("\n  {}", performance.0.bright_yellow().bold());
        println!("  {}", performance.1.bright_white());
        println!(
            "\n  Solved in {} of {} {}",
            rows_used.to_string().bright_cyan().bold(),
            MAX_GUESSES,
            if rows_used == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("{}", "═".repeat(60).bright_cyan());
        println!("{}", "    Game over    ".bright_red().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        println!(
            "\n  The word was {}",
            target.text().bright_yellow().bold()
        );
    }
    println!();
}

/// Print lifetime statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_pct = stats.win_rate() * 100.0;
    let bar = create_progress_bar(win_pct, 100.0, 30);

    println!("\n   Played:          {}", stats.games_played);
    println!("   Won:             {}", stats.games_won);
    println!(
        "   Win rate:        [{}] {}",
        bar.green(),
        format!("{win_pct:.0}%").bright_yellow()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().bright_cyan()
    );
    println!(
        "   Max streak:      {}",
        stats.max_streak.to_string().bright_cyan().bold()
    );
    println!();
}
