//! Display functions for command results

use crate::commands::SimulationResult;
use crate::core::MAX_MISSES;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {}",
        result.wins.to_string().green().bold()
    );
    println!(
        "   Lost:             {}",
        result.losses.to_string().red().bold()
    );
    println!(
        "   Net score:        {}",
        result.net_score.to_string().bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for misses in 0..=MAX_MISSES {
        if let Some(&count) = result.miss_distribution.get(&misses) {
            let pct = (count as f64 / result.total_rounds as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
    println!();
}
