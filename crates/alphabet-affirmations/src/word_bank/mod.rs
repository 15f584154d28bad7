//! Per-letter candidate word lists.
//!
//! The crate ships a standard bank of child-friendly words. Callers may load
//! their own from JSON; loaded banks must cover every letter A-Z. Banks built
//! with [`WordBank::from_lists`] skip that check, and lookups against an
//! empty letter fall back to a word derived from the letter itself.

mod standard;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::alphabet::{ALPHABET_LEN, letter_index};
use crate::error::WordBankError;

/// Current supported word bank document version.
const SUPPORTED_VERSION: u32 = 1;

/// Suffix appended to a letter when it has no candidates.
const FALLBACK_SUFFIX: &str = "mazing";

static STANDARD: LazyLock<WordBank> = LazyLock::new(|| {
    WordBank::from_lists(
        standard::WORDS
            .iter()
            .map(|(letter, words)| (*letter, words.iter().copied())),
    )
});

/// Returns the fallback word for `letter`, such as `Qmazing`.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::fallback_word;
///
/// assert_eq!(fallback_word('q'), "Qmazing");
/// ```
#[must_use]
pub fn fallback_word(letter: char) -> String {
    format!("{}{FALLBACK_SUFFIX}", letter.to_ascii_uppercase())
}

/// Read-only mapping from letter to candidate words.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::WordBank;
///
/// let bank = WordBank::standard();
/// assert!(bank.words_for('a').iter().any(|word| word == "Amazing"));
/// assert_eq!(bank.word_at('A', 0), "Amazing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    letters: [Vec<String>; ALPHABET_LEN],
}

impl WordBank {
    /// Returns the bank shipped with the crate.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a bank from `(letter, words)` pairs without completeness checks.
    ///
    /// Letters are matched case-insensitively; entries for characters outside
    /// A-Z are ignored and a repeated letter replaces the earlier list.
    /// Letters that never appear have no candidates.
    #[must_use]
    pub fn from_lists<I, L, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, L)>,
        L: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut letters: [Vec<String>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        for (letter, words) in entries {
            if let Some(slot) = letter_index(letter).and_then(|index| letters.get_mut(index)) {
                *slot = words.into_iter().map(Into::into).collect();
            }
        }
        Self { letters }
    }

    /// Parses a word bank from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`WordBankError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - A key is not a single ASCII letter, or repeats a letter
    /// - A word is blank
    /// - Any letter A-Z has no words
    ///
    /// # Example
    ///
    /// ```
    /// use alphabet_affirmations::{WordBank, WordBankError};
    ///
    /// let result = WordBank::from_json(r#"{"version": 1, "letters": {"A": ["Amazing"]}}"#);
    /// assert_eq!(result, Err(WordBankError::MissingLetter { letter: 'B' }));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, WordBankError> {
        let raw: RawWordBank =
            serde_json::from_str(json).map_err(|e| WordBankError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a word bank from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`WordBankError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, WordBankError> {
        let contents = fs::read_to_string(path).map_err(|e| WordBankError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawWordBank) -> Result<Self, WordBankError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(WordBankError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut letters: [Option<Vec<String>>; ALPHABET_LEN] = std::array::from_fn(|_| None);
        for (key, words) in raw.letters {
            let (letter, index) = parse_letter_key(&key)?;
            let slot = letters
                .get_mut(index)
                .ok_or(WordBankError::InvalidLetter { value: key })?;
            if slot.is_some() {
                return Err(WordBankError::DuplicateLetter { letter });
            }
            *slot = Some(trim_words(letter, words)?);
        }

        let mut complete: [Vec<String>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        for ((letter, parsed), target) in ('A'..='Z').zip(letters).zip(complete.iter_mut()) {
            match parsed {
                Some(words) if !words.is_empty() => *target = words,
                _ => return Err(WordBankError::MissingLetter { letter }),
            }
        }

        Ok(Self { letters: complete })
    }

    /// Returns the candidates for `letter`, ignoring case.
    ///
    /// Characters outside A-Z have no candidates.
    #[must_use]
    pub fn words_for(&self, letter: char) -> &[String] {
        letter_index(letter)
            .and_then(|index| self.letters.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the candidate at `index`, wrapping past the end of the list.
    ///
    /// An empty letter yields [`fallback_word`].
    #[must_use]
    pub fn word_at(&self, letter: char, index: usize) -> String {
        let words = self.words_for(letter);
        index
            .checked_rem(words.len())
            .and_then(|wrapped| words.get(wrapped))
            .map_or_else(|| fallback_word(letter), Clone::clone)
    }

    /// Returns `true` if every letter A-Z has at least one candidate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(|words| !words.is_empty())
    }
}

fn parse_letter_key(key: &str) -> Result<(char, usize), WordBankError> {
    let mut chars = key.chars();
    let parsed = match (chars.next(), chars.next()) {
        (Some(letter), None) => {
            letter_index(letter).map(|index| (letter.to_ascii_uppercase(), index))
        }
        _ => None,
    };
    parsed.ok_or_else(|| WordBankError::InvalidLetter {
        value: key.to_owned(),
    })
}

fn trim_words(letter: char, words: Vec<String>) -> Result<Vec<String>, WordBankError> {
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let trimmed = word.trim();
            if trimmed.is_empty() {
                Err(WordBankError::EmptyWord { letter, index })
            } else {
                Ok(trimmed.to_owned())
            }
        })
        .collect()
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawWordBank {
    version: u32,
    letters: BTreeMap<String, Vec<String>>,
}
