//! Shaping generated alphabets for persistence and minting.
//!
//! Nothing here stores or sends data. The types are plain serialisable
//! values handed to whichever collaborator keeps collections or mints them.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Affirmation, AlphabetSet};

/// Number of leading letters shown on a collection card.
pub const THUMBNAIL_LETTER_COUNT: usize = 4;

/// Pricing tier of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MintTier {
    /// Words drawn by the generator.
    Random,
    /// Words hand-picked by the buyer.
    Custom,
}

impl MintTier {
    /// Maps the minting contract's numeric tier; zero is random.
    ///
    /// # Example
    ///
    /// ```
    /// use alphabet_affirmations::MintTier;
    ///
    /// assert_eq!(MintTier::from_contract_value(0), MintTier::Random);
    /// assert_eq!(MintTier::from_contract_value(3), MintTier::Custom);
    /// ```
    #[must_use]
    pub const fn from_contract_value(value: u8) -> Self {
        if value == 0 { Self::Random } else { Self::Custom }
    }

    /// Returns the numeric tier understood by the minting contract.
    #[must_use]
    pub const fn contract_value(self) -> u8 {
        match self {
            Self::Random => 0,
            Self::Custom => 1,
        }
    }
}

/// Builds the display title of a child's next collection.
///
/// `prior_count` is the number of collections of the same tier the child
/// already has. Random collections are numbered from the second one on;
/// custom collections are labelled instead.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::{MintTier, collection_title};
///
/// assert_eq!(collection_title("Emma", MintTier::Random, 0), "Emma");
/// assert_eq!(collection_title("Emma", MintTier::Random, 1), "Emma #2");
/// assert_eq!(collection_title("Emma", MintTier::Custom, 4), "Emma (Custom)");
/// ```
#[must_use]
pub fn collection_title(child_name: &str, tier: MintTier, prior_count: usize) -> String {
    match tier {
        MintTier::Random if prior_count == 0 => child_name.to_owned(),
        MintTier::Random => format!("{child_name} #{}", prior_count.saturating_add(1)),
        MintTier::Custom => format!("{child_name} (Custom)"),
    }
}

/// A collection ready to be saved by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDraft {
    /// Display title, see [`collection_title`].
    pub title: String,
    /// Child's name as entered.
    pub child_name: String,
    /// Tier the collection was minted under.
    pub tier: MintTier,
    /// The 26 affirmations.
    pub affirmations: Vec<Affirmation>,
    /// Number of affirmations.
    pub letter_count: usize,
    /// Leading letters shown on the collection card.
    pub thumbnail_letters: Vec<char>,
    /// Identity of the owner, when signed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fid: Option<u64>,
}

impl CollectionDraft {
    /// Builds a draft from a finished alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use alphabet_affirmations::{CollectionDraft, MintTier, generate_alphabet};
    ///
    /// let set = generate_alphabet(42);
    /// let draft = CollectionDraft::new("Emma", &set, Some(123), MintTier::Random, 1);
    ///
    /// assert_eq!(draft.title, "Emma #2");
    /// assert_eq!(draft.thumbnail_letters, ['A', 'B', 'C', 'D']);
    /// ```
    #[must_use]
    pub fn new(
        child_name: &str,
        set: &AlphabetSet,
        user_fid: Option<u64>,
        tier: MintTier,
        prior_count: usize,
    ) -> Self {
        Self {
            title: collection_title(child_name, tier, prior_count),
            child_name: child_name.to_owned(),
            tier,
            affirmations: set.to_vec(),
            letter_count: set.len(),
            thumbnail_letters: set
                .iter()
                .take(THUMBNAIL_LETTER_COUNT)
                .map(|affirmation| affirmation.letter)
                .collect(),
            user_fid,
        }
    }
}

/// Payload for the minting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    /// Tier being purchased.
    pub tier: MintTier,
    /// Location of the token metadata.
    pub metadata_uri: String,
    /// The 26 words in A-Z order.
    pub words: Vec<String>,
}

impl MintRequest {
    /// Builds a mint request for `set`.
    #[must_use]
    pub fn new(tier: MintTier, metadata_uri: impl Into<String>, set: &AlphabetSet) -> Self {
        Self {
            tier,
            metadata_uri: metadata_uri.into(),
            words: set.words().into_iter().map(str::to_owned).collect(),
        }
    }
}
