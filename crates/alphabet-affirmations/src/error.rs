//! Error types for the alphabet-affirmations crate.
//!
//! Generation and name extraction are total and never fail. The enums here
//! cover the edges around them: loading a word bank from JSON and applying a
//! user-supplied custom word.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a word bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    /// The word bank file could not be read.
    #[error("failed to read word bank file at '{path}': {message}")]
    IoError {
        /// Path to the word bank file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The word bank JSON is malformed or missing required fields.
    #[error("invalid word bank JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The word bank version is not supported.
    #[error("unsupported word bank version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A key in the `letters` object is not a single ASCII letter.
    #[error("invalid word bank letter: '{value}'")]
    InvalidLetter {
        /// The offending key.
        value: String,
    },

    /// The same letter appears twice once keys are upper-cased.
    #[error("letter {letter} appears more than once in the word bank")]
    DuplicateLetter {
        /// The repeated letter.
        letter: char,
    },

    /// A letter of the alphabet has no candidate words.
    #[error("letter {letter} has no candidate words")]
    MissingLetter {
        /// The letter without candidates.
        letter: char,
    },

    /// A candidate word is blank.
    #[error("blank word for letter {letter} at index {index}")]
    EmptyWord {
        /// Letter owning the blank word.
        letter: char,
        /// Index of the blank word in that letter's list.
        index: usize,
    },
}

/// Errors returned when a caller replaces a generated word with its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomizationError {
    /// The letter is outside A-Z.
    #[error("'{letter}' is not a letter of the alphabet")]
    InvalidLetter {
        /// The rejected letter.
        letter: char,
    },

    /// The custom word is empty after trimming.
    #[error("custom word must not be blank")]
    EmptyWord,

    /// The custom word matches the word already in the set.
    #[error("'{word}' is already the current word")]
    UnchangedWord {
        /// The word that was resubmitted.
        word: String,
    },
}
