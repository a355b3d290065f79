//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O or
//! presentation concerns. All types here are pure and fully testable.

mod round;
mod word;

pub use round::{
    GuessError, GuessKind, GuessReport, LetterState, MAX_MISSES, Outcome, PLACEHOLDER, Round,
};
pub use word::{Word, WordError};
