//! Hand-picked word swaps for custom-tier alphabets.

use tracing::debug;

use crate::alphabet::{AlphabetSet, letter_index};
use crate::error::CustomizationError;
use crate::word_bank::{WordBank, fallback_word};

/// Maximum number of alternatives offered for one letter.
pub const ALTERNATIVE_LIMIT: usize = 6;

/// Suggests replacement words for `letter`, excluding `current`.
///
/// Candidates come from `bank` in list order, without duplicates. A letter
/// with no candidates offers its fallback word instead.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{ALTERNATIVE_LIMIT, WordBank, alternatives_for};
///
/// let options = alternatives_for(WordBank::standard(), 'a', "Amazing");
/// assert_eq!(options.len(), ALTERNATIVE_LIMIT);
/// assert!(!options.iter().any(|word| word == "Amazing"));
/// ```
#[must_use]
pub fn alternatives_for(bank: &WordBank, letter: char, current: &str) -> Vec<String> {
    let candidates = bank.words_for(letter);
    if candidates.is_empty() {
        return letter_index(letter)
            .map(|_| fallback_word(letter))
            .filter(|word| word != current)
            .into_iter()
            .collect();
    }

    let mut alternatives: Vec<String> = Vec::with_capacity(ALTERNATIVE_LIMIT);
    for word in candidates {
        if alternatives.len() == ALTERNATIVE_LIMIT {
            break;
        }
        if word != current && !alternatives.contains(word) {
            alternatives.push(word.clone());
        }
    }
    alternatives
}

/// Returns a copy of `set` with `letter` changed to the trimmed `word`.
///
/// # Errors
///
/// Returns [`CustomizationError`] if `letter` is outside A-Z, if `word` is
/// blank, or if it matches the word already chosen for `letter`.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{CustomizationError, apply_custom_word, generate_alphabet};
///
/// let set = generate_alphabet(42);
/// let custom = apply_custom_word(&set, 'b', "  Bouncy ").expect("valid swap");
///
/// assert_eq!(custom.word_for('B'), Some("Bouncy"));
/// assert_eq!(
///     apply_custom_word(&set, 'b', ""),
///     Err(CustomizationError::EmptyWord)
/// );
/// ```
pub fn apply_custom_word(
    set: &AlphabetSet,
    letter: char,
    word: &str,
) -> Result<AlphabetSet, CustomizationError> {
    let current = set
        .word_for(letter)
        .ok_or(CustomizationError::InvalidLetter { letter })?;

    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(CustomizationError::EmptyWord);
    }
    if trimmed == current {
        return Err(CustomizationError::UnchangedWord {
            word: trimmed.to_owned(),
        });
    }

    debug!(letter = %letter.to_ascii_uppercase(), word = trimmed, "applied custom word");
    Ok(set.with_word(letter, trimmed))
}
