//! Name-first ordering of an alphabet.
//!
//! The reader shows the letters of the child's name first, in the order
//! they appear in the name, followed by the remaining letters in A-Z order.
//! The preview helpers pick a few of the remaining letters as a teaser and
//! blur their words.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::alphabet::Affirmation;

/// Number of non-name letters shown in the teaser preview.
pub const TEASER_LETTER_COUNT: usize = 4;

/// Character used to blur hidden letters of a word.
const MASK_CHAR: char = '•';

/// An alphabet partitioned around a child's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameExtraction {
    /// Affirmations for each distinct letter of the name, in name order.
    pub name_letters: Vec<Affirmation>,
    /// Remaining affirmations in their original order.
    pub other_letters: Vec<Affirmation>,
    /// `name_letters` followed by `other_letters`.
    pub reader_sequence: Vec<Affirmation>,
}

/// Partitions `full_alphabet` into the letters of `child_name` and the rest.
///
/// The name is lower-cased and stripped of every character outside `a-z`;
/// each letter is kept on its first occurrence only. A name without letters
/// leaves `name_letters` empty and passes the alphabet through unchanged.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{extract_name_letters, generate_alphabet};
///
/// let alphabet = generate_alphabet(7);
/// let extraction = extract_name_letters("Anna", &alphabet);
///
/// let letters: Vec<char> = extraction.name_letters.iter().map(|a| a.letter).collect();
/// assert_eq!(letters, ['A', 'N']);
/// assert_eq!(extraction.other_letters.len(), 24);
/// ```
#[must_use]
pub fn extract_name_letters(child_name: &str, full_alphabet: &[Affirmation]) -> NameExtraction {
    let name_chars = distinct_name_letters(child_name);

    let name_letters: Vec<Affirmation> = name_chars
        .iter()
        .filter_map(|&letter| full_alphabet.iter().find(|a| a.is_for(letter)))
        .cloned()
        .collect();

    let other_letters: Vec<Affirmation> = full_alphabet
        .iter()
        .filter(|a| !name_chars.iter().any(|&letter| a.is_for(letter)))
        .cloned()
        .collect();

    let reader_sequence = create_reader_sequence(&name_letters, &other_letters);

    NameExtraction {
        name_letters,
        other_letters,
        reader_sequence,
    }
}

fn distinct_name_letters(child_name: &str) -> Vec<char> {
    let mut letters: Vec<char> = Vec::new();
    for letter in child_name.to_lowercase().chars() {
        if letter.is_ascii_lowercase() && !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters
}

/// Concatenates name letters and the remaining letters into reading order.
#[must_use]
pub fn create_reader_sequence(
    name_letters: &[Affirmation],
    other_letters: &[Affirmation],
) -> Vec<Affirmation> {
    name_letters.iter().chain(other_letters).cloned().collect()
}

/// Picks up to [`TEASER_LETTER_COUNT`] random entries from `other_letters`.
///
/// Every call reshuffles, so repeated calls show different teasers.
#[must_use]
pub fn sample_teaser_letters(other_letters: &[Affirmation]) -> Vec<Affirmation> {
    sample_teaser_letters_with(other_letters, &mut rand::rng())
}

/// Like [`sample_teaser_letters`], drawing from `rng`.
#[must_use]
pub fn sample_teaser_letters_with<R>(other_letters: &[Affirmation], rng: &mut R) -> Vec<Affirmation>
where
    R: Rng + ?Sized,
{
    let mut shuffled = other_letters.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(TEASER_LETTER_COUNT);
    shuffled
}

/// Returns `true` once the reading position has passed every name letter.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::has_finished_name_letters;
///
/// assert!(!has_finished_name_letters(1, 2));
/// assert!(has_finished_name_letters(2, 2));
/// ```
#[must_use]
pub const fn has_finished_name_letters(current_index: usize, name_letter_count: usize) -> bool {
    current_index >= name_letter_count
}

/// Blurs all but the first character of `word` for the paywall preview.
///
/// At least one mask character is always shown, so single-letter words do
/// not reveal their length.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::mask_word;
///
/// assert_eq!(mask_word("Brave"), "B••••");
/// assert_eq!(mask_word("Z"), "Z•");
/// ```
#[must_use]
pub fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return MASK_CHAR.to_string();
    };
    let hidden = chars.count().max(1);
    std::iter::once(first)
        .chain(std::iter::repeat_n(MASK_CHAR, hidden))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::alphabet::{ALPHABET_LEN, AlphabetSet};

    #[fixture]
    fn alphabet() -> AlphabetSet {
        AlphabetSet::from_words(('A'..='Z').map(|letter| format!("{letter}-word")))
    }

    fn letters(list: &[Affirmation]) -> String {
        list.iter().map(|a| a.letter).collect()
    }

    #[rstest]
    fn anna_keeps_first_occurrences(alphabet: AlphabetSet) {
        let extraction = extract_name_letters("Anna", &alphabet);
        assert_eq!(letters(&extraction.name_letters), "AN");
    }

    #[rstest]
    fn bo_moves_letters_to_front(alphabet: AlphabetSet) {
        let extraction = extract_name_letters("Bo", &alphabet);

        assert_eq!(letters(&extraction.name_letters), "BO");
        assert_eq!(
            letters(&extraction.other_letters),
            "ACDEFGHIJKLMNPQRSTUVWXYZ"
        );
        assert_eq!(
            letters(&extraction.reader_sequence),
            "BOACDEFGHIJKLMNPQRSTUVWXYZ"
        );
        assert_eq!(extraction.name_letters.first(), alphabet.get(1));
    }

    #[rstest]
    #[case("123")]
    #[case("")]
    #[case("  -- !! ")]
    #[case("ëñ")]
    fn names_without_ascii_letters_pass_alphabet_through(
        alphabet: AlphabetSet,
        #[case] name: &str,
    ) {
        let extraction = extract_name_letters(name, &alphabet);
        assert!(extraction.name_letters.is_empty());
        assert_eq!(extraction.other_letters.as_slice(), &*alphabet);
        assert_eq!(extraction.reader_sequence.as_slice(), &*alphabet);
    }

    #[rstest]
    #[case("Mary-Jane O'Neil")]
    #[case("Quinn")]
    #[case("abcdefghijklmnopqrstuvwxyz")]
    #[case("X Æ A-12")]
    fn partitions_cover_alphabet_without_overlap(alphabet: AlphabetSet, #[case] name: &str) {
        let extraction = extract_name_letters(name, &alphabet);

        assert_eq!(
            extraction.name_letters.len() + extraction.other_letters.len(),
            ALPHABET_LEN
        );
        let name_set: HashSet<char> = extraction.name_letters.iter().map(|a| a.letter).collect();
        let other_set: HashSet<char> = extraction.other_letters.iter().map(|a| a.letter).collect();
        assert!(name_set.is_disjoint(&other_set));
        assert_eq!(name_set.len() + other_set.len(), ALPHABET_LEN);
    }

    #[rstest]
    fn accented_letters_are_dropped(alphabet: AlphabetSet) {
        let extraction = extract_name_letters("Zoë", &alphabet);
        assert_eq!(letters(&extraction.name_letters), "ZO");
    }

    #[rstest]
    fn extraction_is_idempotent(alphabet: AlphabetSet) {
        assert_eq!(
            extract_name_letters("Olivia", &alphabet),
            extract_name_letters("Olivia", &alphabet)
        );
    }

    #[rstest]
    fn lookup_ignores_letter_case(alphabet: AlphabetSet) {
        let lowered: Vec<Affirmation> = alphabet
            .iter()
            .map(|a| Affirmation {
                letter: a.letter.to_ascii_lowercase(),
                word: a.word.clone(),
            })
            .collect();

        let extraction = extract_name_letters("EVE", &lowered);
        assert_eq!(letters(&extraction.name_letters), "ev");
        assert_eq!(extraction.other_letters.len(), 24);
    }

    #[test]
    fn reader_sequence_concatenates() {
        let name = [Affirmation::new('b', "Brave")];
        let others = [Affirmation::new('a', "Amazing")];
        assert_eq!(
            create_reader_sequence(&name, &others),
            vec![Affirmation::new('B', "Brave"), Affirmation::new('A', "Amazing")]
        );
    }

    #[rstest]
    fn teaser_samples_four_distinct_other_letters(alphabet: AlphabetSet) {
        let extraction = extract_name_letters("Bo", &alphabet);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let teaser = sample_teaser_letters_with(&extraction.other_letters, &mut rng);

        assert_eq!(teaser.len(), TEASER_LETTER_COUNT);
        let unique: HashSet<char> = teaser.iter().map(|a| a.letter).collect();
        assert_eq!(unique.len(), TEASER_LETTER_COUNT);
        assert!(teaser.iter().all(|a| extraction.other_letters.contains(a)));
    }

    #[test]
    fn teaser_returns_everything_when_few_letters_remain() {
        let others = [Affirmation::new('a', "Amazing"), Affirmation::new('c', "Curious")];
        let teaser = sample_teaser_letters(&others);

        assert_eq!(teaser.len(), 2);
        assert!(others.iter().all(|a| teaser.contains(a)));
    }

    #[rstest]
    fn teaser_varies_between_calls(alphabet: AlphabetSet) {
        let distinct: HashSet<Vec<char>> = (0..20)
            .map(|_| sample_teaser_letters(&alphabet).iter().map(|a| a.letter).collect())
            .collect();
        assert!(distinct.len() > 1);
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(0, 3, false)]
    #[case(2, 3, false)]
    #[case(3, 3, true)]
    #[case(9, 3, true)]
    fn finished_name_letters_compares_index(
        #[case] index: usize,
        #[case] count: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(has_finished_name_letters(index, count), expected);
    }

    #[rstest]
    #[case("Amazing", "A••••••")]
    #[case("Zen", "Z••")]
    #[case("Q", "Q•")]
    #[case("", "•")]
    #[case("Éclair", "É•••••")]
    fn mask_word_blurs_tail(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(mask_word(word), expected);
    }
}
