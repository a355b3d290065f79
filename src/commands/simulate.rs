//! Simulation command
//!
//! Plays many automated rounds with a scripted guesser and collects outcome
//! statistics. Rounds run in parallel; each gets its own seeded RNG so a run
//! is reproducible regardless of scheduling.

use crate::core::{Outcome, Word};
use crate::engine::{EmptyWordList, GuessEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// English letters, most common first
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Order in which the automated guesser tries letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPolicy {
    /// English letter-frequency order
    Frequency,
    /// A fresh random order each round
    Random,
}

impl GuessPolicy {
    /// Parse a policy name, defaulting to frequency order
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "random" => Self::Random,
            _ => Self::Frequency,
        }
    }

    fn letter_order(self, rng: &mut StdRng) -> Vec<char> {
        match self {
            Self::Frequency => FREQUENCY_ORDER.chars().collect(),
            Self::Random => {
                let mut letters: Vec<char> = ('a'..='z').collect();
                letters.shuffle(rng);
                letters
            }
        }
    }
}

/// Result of one simulated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub word: String,
    pub outcome: Outcome,
    pub misses: u8,
    pub guesses: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub net_score: i64,
    pub miss_distribution: HashMap<u8, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `count` automated rounds and aggregate the outcomes
///
/// The guesser works through a letter order given by `policy` until the
/// round ends; round `i` uses `seed + i` for both word selection and (for
/// the random policy) letter ordering.
///
/// # Errors
///
/// Returns [`EmptyWordList`] if `words` is empty.
pub fn run_simulation(
    words: &[Word],
    count: usize,
    policy: GuessPolicy,
    seed: u64,
) -> Result<SimulationResult, EmptyWordList> {
    if words.is_empty() {
        return Err(EmptyWordList);
    }

    let engine = GuessEngine::new(words);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let result = play_round(&engine, policy, &mut rng);
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let wins = results
        .iter()
        .filter(|r| r.outcome == Outcome::Victory)
        .count();
    let losses = results.len() - wins;

    let mut miss_distribution: HashMap<u8, usize> = HashMap::new();
    let mut total_guesses = 0;
    for result in &results {
        *miss_distribution.entry(result.misses).or_insert(0) += 1;
        total_guesses += result.guesses;
    }

    Ok(SimulationResult {
        total_rounds: results.len(),
        wins,
        losses,
        net_score: wins as i64 - losses as i64,
        miss_distribution,
        average_guesses: total_guesses as f64 / results.len() as f64,
        duration,
        rounds_per_second: results.len() as f64 / duration.as_secs_f64(),
    })
}

fn play_round(
    engine: &GuessEngine<'_>,
    policy: GuessPolicy,
    rng: &mut StdRng,
) -> Result<RoundResult, EmptyWordList> {
    let mut round = engine.start_round(rng)?;
    let order = policy.letter_order(rng);
    let mut guesses = 0;

    // 26 distinct letters always reach a terminal outcome: either the word
    // completes or the seventh miss lands first.
    for letter in order {
        match round.apply_guess(letter) {
            Ok(report) => {
                guesses += 1;
                if report.outcome.is_terminal() {
                    break;
                }
            }
            Err(_) => break,
        }
    }

    Ok(RoundResult {
        word: round.word().text().to_string(),
        outcome: round.outcome(),
        misses: round.misses(),
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn simulation_empty_word_list_fails() {
        let words: Vec<Word> = Vec::new();
        assert!(run_simulation(&words, 10, GuessPolicy::Frequency, 0).is_err());
    }

    #[test]
    fn simulation_every_round_terminal() {
        let words = words(&["cat", "dog", "rhythm", "banana"]);
        let result = run_simulation(&words, 50, GuessPolicy::Random, 123).unwrap();

        assert_eq!(result.total_rounds, 50);
        assert_eq!(result.wins + result.losses, 50);
    }

    #[test]
    fn simulation_deterministic_under_seed() {
        let words = words(&["cat", "dog", "rhythm", "banana", "puzzle"]);

        let a = run_simulation(&words, 40, GuessPolicy::Random, 7).unwrap();
        let b = run_simulation(&words, 40, GuessPolicy::Random, 7).unwrap();

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.losses, b.losses);
        assert_eq!(a.net_score, b.net_score);
        assert_eq!(a.miss_distribution, b.miss_distribution);
    }

    #[test]
    fn simulation_net_score_consistent() {
        let words = words(&["cat", "dog", "bird"]);
        let result = run_simulation(&words, 30, GuessPolicy::Frequency, 99).unwrap();

        assert_eq!(
            result.net_score,
            result.wins as i64 - result.losses as i64
        );
    }

    #[test]
    fn simulation_distribution_sums_to_total() {
        let words = words(&["cat", "dog", "rhythm"]);
        let result = run_simulation(&words, 25, GuessPolicy::Random, 5).unwrap();

        let sum: usize = result.miss_distribution.values().sum();
        assert_eq!(sum, result.total_rounds);
    }

    #[test]
    fn frequency_policy_wins_common_word() {
        // "eta" is spelled from the three most frequent letters, so the
        // frequency guesser finds it without a single miss.
        let words = words(&["eta"]);
        let result = run_simulation(&words, 5, GuessPolicy::Frequency, 0).unwrap();

        assert_eq!(result.wins, 5);
        assert_eq!(result.miss_distribution.get(&0), Some(&5));
    }

    #[test]
    fn policy_from_name() {
        assert_eq!(GuessPolicy::from_name("random"), GuessPolicy::Random);
        assert_eq!(GuessPolicy::from_name("frequency"), GuessPolicy::Frequency);
        assert_eq!(GuessPolicy::from_name("anything"), GuessPolicy::Frequency);
    }
}
