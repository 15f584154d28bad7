//! Deterministic, name-seeded alphabet affirmations.
//!
//! Every child gets 26 positive words, one per letter A-Z. The words for a
//! given name, identity and reroll attempt are reproducible: the seed key is
//! hashed into a 32-bit seed that drives an xorshift32 stream over a fixed
//! word bank.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seed derivation from personalised or anonymous session keys
//! - Seeded, offset-based and random alphabet generation
//! - Name-first reading order with a masked teaser of the remaining letters
//! - Loading replacement word banks from JSON
//! - Custom word swaps and collection/mint payload shaping
//!
//! # Example
//!
//! ```
//! use alphabet_affirmations::{SessionContext, extract_name_letters, generate_for_session};
//!
//! let mut context = SessionContext::new("anon-token").with_identity(123);
//! let alphabet = generate_for_session(&context, "Emma");
//! assert_eq!(alphabet.word_for('A'), Some("Adventurous"));
//!
//! let extraction = extract_name_letters("Emma", &alphabet);
//! assert_eq!(extraction.name_letters.len(), 3);
//!
//! context.reroll();
//! assert_ne!(generate_for_session(&context, "Emma"), alphabet);
//! ```

mod alphabet;
pub mod cli;
mod collection;
mod customize;
mod error;
mod generator;
mod names;
mod seed;
mod stream;
mod word_bank;

pub use alphabet::{ALPHABET_LEN, Affirmation, AlphabetSet};
pub use collection::{
    CollectionDraft, MintRequest, MintTier, THUMBNAIL_LETTER_COUNT, collection_title,
};
pub use customize::{ALTERNATIVE_LIMIT, alternatives_for, apply_custom_word};
pub use error::{CustomizationError, WordBankError};
pub use generator::{
    generate_alphabet, generate_alphabet_with, generate_consistent_alphabet,
    generate_consistent_alphabet_with, generate_for_session, generate_for_session_with,
    generate_random_alphabet, generate_random_alphabet_with, regenerate_word,
    regenerate_word_with,
};
pub use names::{
    NameExtraction, TEASER_LETTER_COUNT, create_reader_sequence, extract_name_letters,
    has_finished_name_letters, mask_word, sample_teaser_letters, sample_teaser_letters_with,
};
pub use seed::{SessionContext, anonymous_seed_key, derive_seed, personalized_seed_key};
pub use stream::SeededStream;
pub use word_bank::{WordBank, fallback_word};
