//! Alphabet generation from a word bank.
//!
//! Seeded generation runs one [`SeededStream`] per call and draws exactly one
//! value per letter A-Z, so the same seed always yields the same
//! [`AlphabetSet`]. The random variants draw a uniform index per letter from
//! an OS-seeded generator and make no reproducibility promise.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::alphabet::AlphabetSet;
use crate::seed::SessionContext;
use crate::stream::SeededStream;
use crate::word_bank::{WordBank, fallback_word};

/// Generates the seeded alphabet for `seed` from the standard word bank.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{derive_seed, generate_alphabet};
///
/// let seed = derive_seed("emma-123-0");
/// let alphabet = generate_alphabet(seed);
///
/// assert_eq!(alphabet.len(), 26);
/// assert_eq!(alphabet, generate_alphabet(seed));
/// ```
#[must_use]
pub fn generate_alphabet(seed: u32) -> AlphabetSet {
    generate_alphabet_with(WordBank::standard(), seed)
}

/// Generates the seeded alphabet for `seed` from `bank`.
///
/// Each letter draws the next stream value and picks
/// `floor(value * candidates)`. A letter without candidates still consumes
/// its draw and receives the fallback word.
#[must_use]
pub fn generate_alphabet_with(bank: &WordBank, seed: u32) -> AlphabetSet {
    let mut stream = SeededStream::new(seed);
    let alphabet = AlphabetSet::from_words(('A'..='Z').map(|letter| {
        let words = bank.words_for(letter);
        stream
            .next_index(words.len())
            .and_then(|index| words.get(index))
            .map_or_else(|| substitute_fallback(letter), Clone::clone)
    }));
    debug!(seed, "generated seeded alphabet");
    alphabet
}

/// Generates the seeded alphabet for `child_name` under `context`.
///
/// The seed comes from [`SessionContext::seed`], so rerolling the context
/// before calling again produces a different, equally reproducible set.
#[must_use]
pub fn generate_for_session(context: &SessionContext, child_name: &str) -> AlphabetSet {
    generate_for_session_with(WordBank::standard(), context, child_name)
}

/// Like [`generate_for_session`], drawing from `bank`.
#[must_use]
pub fn generate_for_session_with(
    bank: &WordBank,
    context: &SessionContext,
    child_name: &str,
) -> AlphabetSet {
    let seed = context.seed(child_name);
    debug!(
        attempt = context.attempt(),
        personalised = context.identity().is_some(),
        "deriving session alphabet"
    );
    generate_alphabet_with(bank, seed)
}

/// Generates an alphabet by stepping through each letter's list.
///
/// Letter `n` (A = 0) takes candidate `(offset + n) % candidates`.
#[must_use]
pub fn generate_consistent_alphabet(offset: usize) -> AlphabetSet {
    generate_consistent_alphabet_with(WordBank::standard(), offset)
}

/// Like [`generate_consistent_alphabet`], drawing from `bank`.
#[must_use]
pub fn generate_consistent_alphabet_with(bank: &WordBank, offset: usize) -> AlphabetSet {
    AlphabetSet::from_words(
        ('A'..='Z')
            .enumerate()
            .map(|(position, letter)| bank.word_at(letter, offset.wrapping_add(position))),
    )
}

/// Generates a non-reproducible alphabet from the standard word bank.
#[must_use]
pub fn generate_random_alphabet() -> AlphabetSet {
    with_exploration_rng(|rng| generate_random_alphabet_with(WordBank::standard(), rng))
}

/// Generates an alphabet with a uniform random pick per letter from `bank`.
#[must_use]
pub fn generate_random_alphabet_with<R>(bank: &WordBank, rng: &mut R) -> AlphabetSet
where
    R: Rng + ?Sized,
{
    AlphabetSet::from_words(('A'..='Z').map(|letter| pick_uniform(bank, letter, rng)))
}

/// Draws one new random word for `letter` from the standard word bank.
///
/// The caller merges it into its own set, for example with
/// [`AlphabetSet::with_word`].
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{WordBank, regenerate_word};
///
/// let word = regenerate_word('k');
/// assert!(WordBank::standard().words_for('K').contains(&word));
/// ```
#[must_use]
pub fn regenerate_word(letter: char) -> String {
    with_exploration_rng(|rng| regenerate_word_with(WordBank::standard(), letter, rng))
}

/// Draws one uniformly random candidate for `letter` from `bank`.
#[must_use]
pub fn regenerate_word_with<R>(bank: &WordBank, letter: char, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    pick_uniform(bank, letter, rng)
}

fn pick_uniform<R>(bank: &WordBank, letter: char, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let words = bank.words_for(letter);
    if words.is_empty() {
        return substitute_fallback(letter);
    }
    words
        .get(rng.random_range(0..words.len()))
        .map_or_else(|| substitute_fallback(letter), Clone::clone)
}

fn substitute_fallback(letter: char) -> String {
    warn!(%letter, "word bank has no candidates for letter; using fallback word");
    fallback_word(letter)
}

/// Runs `f` with an OS-seeded `ChaCha20` generator, or a clock-seeded small
/// generator when the OS entropy source is unavailable.
fn with_exploration_rng<T>(f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    match ChaCha20Rng::try_from_os_rng() {
        Ok(mut rng) => f(&mut rng),
        Err(error) => {
            warn!(%error, "OS entropy unavailable; using clock-seeded generator");
            let mut rng = SmallRng::seed_from_u64(clock_seed());
            f(&mut rng)
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32)
        })
}
