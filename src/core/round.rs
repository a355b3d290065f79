//! Round state and guess application
//!
//! A Round tracks the hidden word, the letters guessed so far, and the miss
//! counter. The masked display is derived from the word and the guessed set,
//! so every occurrence of a letter is revealed in the same guess.

use crate::core::word::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Maximum number of wrong guesses before the round is lost
pub const MAX_MISSES: u8 = 7;

/// Placeholder shown for letters not yet revealed
pub const PLACEHOLDER: char = '?';

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Victory,
    Failure,
}

impl Outcome {
    /// Whether the round has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for rejected guesses
///
/// A rejected guess never mutates the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The input was not a single alphabetic character
    NotALetter(char),
    /// The round already reached a terminal outcome
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// How a guess landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    /// The letter occurs in the word; all its positions are now revealed
    Hit,
    /// The letter does not occur in the word
    Miss,
    /// The letter was already tried; nothing changed
    Repeat,
}

/// Per-guess notification payload for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub kind: GuessKind,
    pub letter: char,
    pub masked: String,
    pub misses: u8,
    pub outcome: Outcome,
}

/// State of one alphabet letter from the guesser's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unused,
    Hit,
    Miss,
}

/// One play-through of a hidden word
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    guessed: FxHashSet<char>,
    wrong: FxHashSet<char>,
    misses: u8,
    outcome: Outcome,
}

impl Round {
    /// Start a round over the given word with nothing revealed
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            guessed: FxHashSet::default(),
            wrong: FxHashSet::default(),
            misses: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Current masked display, one character per hidden-word character
    ///
    /// Revealed letters show themselves; everything else shows [`PLACEHOLDER`].
    #[must_use]
    pub fn masked(&self) -> String {
        self.word
            .text()
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { PLACEHOLDER })
            .collect()
    }

    /// Number of wrong guesses so far (0..=[`MAX_MISSES`])
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u8 {
        self.misses
    }

    /// Current outcome
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the round has reached a terminal outcome
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// How a given alphabet letter has been used in this round
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_lowercase();
        if self.guessed.contains(&letter) {
            LetterState::Hit
        } else if self.wrong.contains(&letter) {
            LetterState::Miss
        } else {
            LetterState::Unused
        }
    }

    /// Apply a guessed letter
    ///
    /// Case-insensitive. A hit reveals every occurrence of the letter at
    /// once; a miss advances the miss counter. The outcome transitions to
    /// `Victory` in the same call that reveals the last letter, and to
    /// `Failure` in the same call that lands the seventh miss. Re-guessing a
    /// used letter is an idempotent no-op reported as [`GuessKind::Repeat`].
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` if the outcome is already terminal,
    /// or `GuessError::NotALetter` if the input is not alphabetic. Neither
    /// mutates the round.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessReport, GuessError> {
        if self.outcome.is_terminal() {
            return Err(GuessError::RoundOver);
        }

        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter(letter));
        }

        let letter = letter.to_ascii_lowercase();

        // A used letter never double-counts a miss
        if self.guessed.contains(&letter) || self.wrong.contains(&letter) {
            return Ok(self.report(GuessKind::Repeat, letter));
        }

        if self.word.has_letter(letter) {
            self.guessed.insert(letter);

            if self.masked() == self.word.text() {
                self.outcome = Outcome::Victory;
            }

            Ok(self.report(GuessKind::Hit, letter))
        } else {
            self.wrong.insert(letter);
            self.misses += 1;

            if self.misses == MAX_MISSES {
                self.outcome = Outcome::Failure;
            }

            Ok(self.report(GuessKind::Miss, letter))
        }
    }

    fn report(&self, kind: GuessKind, letter: char) -> GuessReport {
        GuessReport {
            kind,
            letter,
            masked: self.masked(),
            misses: self.misses,
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(Word::new(word).unwrap())
    }

    #[test]
    fn new_round_all_masked() {
        let round = round("cat");
        assert_eq!(round.masked(), "???");
        assert_eq!(round.masked().len(), round.word().len());
        assert_eq!(round.misses(), 0);
        assert_eq!(round.outcome(), Outcome::InProgress);
    }

    #[test]
    fn hit_reveals_letter() {
        let mut round = round("cat");
        let report = round.apply_guess('c').unwrap();

        assert_eq!(report.kind, GuessKind::Hit);
        assert_eq!(report.masked, "c??");
        assert_eq!(report.misses, 0);
        assert_eq!(report.outcome, Outcome::InProgress);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut round = round("banana");
        let report = round.apply_guess('a').unwrap();
        assert_eq!(report.masked, "?a?a?a");

        let report = round.apply_guess('n').unwrap();
        assert_eq!(report.masked, "?anana");
    }

    #[test]
    fn miss_increments_counter() {
        let mut round = round("cat");
        let report = round.apply_guess('x').unwrap();

        assert_eq!(report.kind, GuessKind::Miss);
        assert_eq!(report.masked, "???");
        assert_eq!(report.misses, 1);
        assert_eq!(report.outcome, Outcome::InProgress);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut round = round("cat");
        let report = round.apply_guess('C').unwrap();
        assert_eq!(report.kind, GuessKind::Hit);
        assert_eq!(report.masked, "c??");
    }

    #[test]
    fn repeat_hit_is_idempotent() {
        let mut round = round("cat");
        round.apply_guess('c').unwrap();
        let report = round.apply_guess('c').unwrap();

        assert_eq!(report.kind, GuessKind::Repeat);
        assert_eq!(report.masked, "c??");
        assert_eq!(report.misses, 0);
    }

    #[test]
    fn repeat_miss_never_double_counts() {
        let mut round = round("cat");
        round.apply_guess('x').unwrap();
        let report = round.apply_guess('x').unwrap();

        assert_eq!(report.kind, GuessKind::Repeat);
        assert_eq!(report.misses, 1);
    }

    #[test]
    fn non_letter_rejected_without_mutation() {
        let mut round = round("cat");
        assert_eq!(round.apply_guess('3'), Err(GuessError::NotALetter('3')));
        assert_eq!(round.apply_guess('!'), Err(GuessError::NotALetter('!')));
        assert_eq!(round.misses(), 0);
        assert_eq!(round.masked(), "???");
    }

    #[test]
    fn victory_on_last_reveal_same_call() {
        let mut round = round("cat");

        let report = round.apply_guess('x').unwrap();
        assert_eq!(report.misses, 1);
        assert_eq!(report.masked, "???");

        let report = round.apply_guess('c').unwrap();
        assert_eq!(report.masked, "c??");
        assert_eq!(report.outcome, Outcome::InProgress);

        let report = round.apply_guess('a').unwrap();
        assert_eq!(report.masked, "ca?");
        assert_eq!(report.outcome, Outcome::InProgress);

        let report = round.apply_guess('t').unwrap();
        assert_eq!(report.masked, "cat");
        assert_eq!(report.outcome, Outcome::Victory);
    }

    #[test]
    fn failure_on_seventh_miss_same_call() {
        let mut round = round("dog");

        for (i, letter) in ['x', 'y', 'z', 'q', 'w', 'v'].iter().enumerate() {
            let report = round.apply_guess(*letter).unwrap();
            assert_eq!(report.misses, u8::try_from(i + 1).unwrap());
            assert_eq!(report.outcome, Outcome::InProgress);
        }

        let report = round.apply_guess('u').unwrap();
        assert_eq!(report.misses, MAX_MISSES);
        assert_eq!(report.outcome, Outcome::Failure);
    }

    #[test]
    fn terminal_round_rejects_guesses() {
        let mut round = round("a");
        round.apply_guess('a').unwrap();
        assert_eq!(round.outcome(), Outcome::Victory);

        assert_eq!(round.apply_guess('b'), Err(GuessError::RoundOver));
        // Rejection leaves the round untouched
        assert_eq!(round.misses(), 0);
        assert_eq!(round.outcome(), Outcome::Victory);
    }

    #[test]
    fn misses_monotone_and_capped() {
        let mut round = round("dog");
        let mut last = 0;

        for letter in 'a'..='z' {
            match round.apply_guess(letter) {
                Ok(report) => {
                    assert!(report.misses >= last);
                    assert!(report.misses <= MAX_MISSES);
                    last = report.misses;
                }
                Err(GuessError::RoundOver) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(round.misses(), MAX_MISSES);
        assert_eq!(round.outcome(), Outcome::Failure);
    }

    #[test]
    fn letter_state_tracking() {
        let mut round = round("cat");
        round.apply_guess('c').unwrap();
        round.apply_guess('x').unwrap();

        assert_eq!(round.letter_state('c'), LetterState::Hit);
        assert_eq!(round.letter_state('C'), LetterState::Hit);
        assert_eq!(round.letter_state('x'), LetterState::Miss);
        assert_eq!(round.letter_state('t'), LetterState::Unused);
    }

    #[test]
    fn masked_length_matches_word_length() {
        for text in ["a", "cat", "banana", "lighthouse"] {
            let mut round = round(text);
            assert_eq!(round.masked().len(), text.len());
            round.apply_guess('a').ok();
            assert_eq!(round.masked().len(), text.len());
        }
    }
}
