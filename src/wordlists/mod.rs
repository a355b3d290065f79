//! Word lists for Hangman
//!
//! Provides the embedded word list compiled into the binary plus a loader
//! for user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
