//! Affirmation value types.
//!
//! An [`AlphabetSet`] is the unit of output: exactly one [`Affirmation`] per
//! letter A-Z in alphabetical order. Sets are never mutated in place; a
//! reroll or a word swap produces a new set.

use std::ops::Deref;

use serde::Serialize;

/// Number of letters in an alphabet set.
pub const ALPHABET_LEN: usize = 26;

/// Returns the zero-based position of `letter` in A-Z, ignoring case.
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        ('A'..='Z').position(|candidate| candidate == upper)
    } else {
        None
    }
}

/// One letter of the alphabet paired with its affirmation word.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::Affirmation;
///
/// let affirmation = Affirmation::new('b', "Brave");
/// assert_eq!(affirmation.letter, 'B');
/// assert_eq!(affirmation.word, "Brave");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Affirmation {
    /// Upper-case letter A-Z.
    pub letter: char,
    /// Word chosen for the letter.
    pub word: String,
}

impl Affirmation {
    /// Creates an affirmation, normalising the letter to upper case.
    #[must_use]
    pub fn new(letter: char, word: impl Into<String>) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            word: word.into(),
        }
    }

    /// Returns `true` if this affirmation belongs to `letter`, ignoring case.
    #[must_use]
    pub const fn is_for(&self, letter: char) -> bool {
        self.letter.eq_ignore_ascii_case(&letter)
    }
}

/// A complete A-Z affirmation set.
///
/// Dereferences to a slice of [`Affirmation`] in alphabetical order and
/// serialises as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AlphabetSet {
    affirmations: Vec<Affirmation>,
}

impl AlphabetSet {
    /// Builds a set from one word per letter, taken in A-Z order.
    pub(crate) fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let affirmations = ('A'..='Z')
            .zip(words)
            .map(|(letter, word)| Affirmation::new(letter, word))
            .collect();
        Self { affirmations }
    }

    /// Validates a caller-supplied list, for example one restored from a
    /// saved collection.
    ///
    /// Returns `None` unless the list holds exactly 26 entries whose letters
    /// run A-Z in order (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use alphabet_affirmations::{Affirmation, AlphabetSet};
    ///
    /// let list: Vec<_> = ('a'..='z').map(|l| Affirmation::new(l, "Word")).collect();
    /// assert!(AlphabetSet::from_affirmations(list).is_some());
    /// assert!(AlphabetSet::from_affirmations(vec![]).is_none());
    /// ```
    #[must_use]
    pub fn from_affirmations(list: Vec<Affirmation>) -> Option<Self> {
        if list.len() != ALPHABET_LEN {
            return None;
        }
        let in_order = list
            .iter()
            .zip('A'..='Z')
            .all(|(affirmation, letter)| affirmation.is_for(letter));
        if !in_order {
            return None;
        }
        let affirmations = list
            .into_iter()
            .map(|affirmation| Affirmation::new(affirmation.letter, affirmation.word))
            .collect();
        Some(Self { affirmations })
    }

    /// Returns the word chosen for `letter`, ignoring case.
    #[must_use]
    pub fn word_for(&self, letter: char) -> Option<&str> {
        letter_index(letter)
            .and_then(|index| self.affirmations.get(index))
            .map(|affirmation| affirmation.word.as_str())
    }

    /// Returns a new set with `letter`'s word replaced.
    ///
    /// The receiver is left untouched. A character outside A-Z yields an
    /// unchanged copy.
    #[must_use]
    pub fn with_word(&self, letter: char, word: impl Into<String>) -> Self {
        let mut affirmations = self.affirmations.clone();
        if let Some(slot) = letter_index(letter).and_then(|index| affirmations.get_mut(index)) {
            slot.word = word.into();
        }
        Self { affirmations }
    }

    /// Returns the 26 words in A-Z order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.affirmations
            .iter()
            .map(|affirmation| affirmation.word.as_str())
            .collect()
    }

    /// Consumes the set, returning the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Affirmation> {
        self.affirmations
    }
}

impl Deref for AlphabetSet {
    type Target = [Affirmation];

    fn deref(&self) -> &Self::Target {
        &self.affirmations
    }
}

impl AsRef<[Affirmation]> for AlphabetSet {
    fn as_ref(&self) -> &[Affirmation] {
        &self.affirmations
    }
}
