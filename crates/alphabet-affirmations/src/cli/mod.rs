//! CLI support for previewing a child's alphabet.
//!
//! This module provides parsing and preview helpers for the `affirmations`
//! binary. The binary delegates to these functions so they can be exercised
//! in tests without spawning a subprocess.

mod error;
mod settings;

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

pub use error::CliError;
pub use settings::AffirmationsSettings;

use crate::alphabet::Affirmation;
use crate::generator::{generate_alphabet_with, generate_random_alphabet_with};
use crate::names::{NameExtraction, extract_name_letters, mask_word, sample_teaser_letters_with};
use crate::seed::SessionContext;
use crate::word_bank::WordBank;

/// Parsed options for the preview CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    name: String,
    fid: Option<u64>,
    session_token: Option<String>,
    attempt: u32,
    random: bool,
    word_bank_path: Option<PathBuf>,
}

impl Options {
    /// Returns the child's name as supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use alphabet_affirmations::cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--name".to_string(), "Emma".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.name(), "Emma");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the signed-in identity, if supplied.
    #[must_use]
    pub const fn fid(&self) -> Option<u64> {
        self.fid
    }

    /// Returns the session token override, if supplied.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Returns the reroll counter to generate at.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns `true` when the random tier was requested.
    #[must_use]
    pub const fn is_random(&self) -> bool {
        self.random
    }

    /// Returns the word bank path override, if supplied.
    #[must_use]
    pub fn word_bank_path(&self) -> Option<&Path> {
        self.word_bank_path.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Name-first preview of a generated alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Child's name as supplied.
    pub child_name: String,
    /// Seed the alphabet was generated from; `None` for random alphabets.
    pub seed: Option<u32>,
    /// The alphabet split around the child's name.
    pub extraction: NameExtraction,
    /// Sampled letters shown masked after the name letters.
    pub teaser: Vec<Affirmation>,
}

impl Preview {
    /// Number of letters neither in the name nor in the teaser.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.extraction
            .other_letters
            .len()
            .saturating_sub(self.teaser.len())
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self
            .seed
            .map_or_else(|| "random".to_owned(), |seed| format!("seed {seed}"));
        writeln!(f, "{}'s alphabet ({origin})", self.child_name)?;
        for affirmation in &self.extraction.name_letters {
            writeln!(f, "  {}  {}", affirmation.letter, affirmation.word)?;
        }
        if !self.teaser.is_empty() {
            writeln!(f)?;
            for affirmation in &self.teaser {
                writeln!(f, "  {}  {}", affirmation.letter, mask_word(&affirmation.word))?;
            }
        }
        writeln!(f, "... and {} more surprises", self.hidden_count())
    }
}

/// Parses CLI arguments into preview options.
///
/// # Errors
///
/// Returns [`CliError`] when `--name` is missing or blank, a flag lacks its
/// value, a number cannot be parsed, or an argument is not recognised.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--name".to_string(),
///     "Emma".to_string(),
///     "--fid".to_string(),
///     "123".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut name: Option<String> = None;
    let mut fid: Option<u64> = None;
    let mut session_token: Option<String> = None;
    let mut attempt: u32 = 0;
    let mut random = false;
    let mut word_bank_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--name" => name = Some(next_value(&mut args, "--name")?),
            "--fid" => {
                let value = next_value(&mut args, "--fid")?;
                fid = Some(parse_number(&value, "--fid")?);
            }
            "--session" => session_token = Some(next_value(&mut args, "--session")?),
            "--attempt" => {
                let value = next_value(&mut args, "--attempt")?;
                attempt = parse_number(&value, "--attempt")?;
            }
            "--random" => random = true,
            "--word-bank" => {
                let value = next_value(&mut args, "--word-bank")?;
                word_bank_path = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_name = name
        .filter(|value| !value.trim().is_empty())
        .ok_or(CliError::MissingName)?;
    Ok(ParseOutcome::Options(Options {
        name: resolved_name,
        fid,
        session_token,
        attempt,
        random,
        word_bank_path,
    }))
}

/// Generates the alphabet described by `options` and prepares its preview.
///
/// # Errors
///
/// Returns [`CliError`] when a configured word bank cannot be loaded.
pub fn build_preview(
    options: &Options,
    settings: &AffirmationsSettings,
) -> Result<Preview, CliError> {
    build_preview_with(options, settings, &mut rand::rng())
}

/// Like [`build_preview`], drawing random choices from `rng`.
///
/// Seeded alphabets do not touch `rng`; it only drives the random tier and
/// the teaser sample.
///
/// # Errors
///
/// Returns [`CliError`] when a configured word bank cannot be loaded.
pub fn build_preview_with<R>(
    options: &Options,
    settings: &AffirmationsSettings,
    rng: &mut R,
) -> Result<Preview, CliError>
where
    R: Rng + ?Sized,
{
    let bank = load_bank(options.word_bank_path().or_else(|| settings.word_bank_path()))?;

    let (alphabet, seed) = if options.random {
        (generate_random_alphabet_with(&bank, rng), None)
    } else {
        let context = session_context(options, settings);
        let seed = context.seed(&options.name);
        (generate_alphabet_with(&bank, seed), Some(seed))
    };

    let extraction = extract_name_letters(&options.name, &alphabet);
    let teaser = sample_teaser_letters_with(&extraction.other_letters, rng);
    info!(
        name_letters = extraction.name_letters.len(),
        seeded = seed.is_some(),
        "built alphabet preview"
    );

    Ok(Preview {
        child_name: options.name.clone(),
        seed,
        extraction,
        teaser,
    })
}

/// Renders a preview as plain text.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::cli::{
///     AffirmationsSettings, ParseOutcome, build_preview, format_preview, parse_args,
/// };
///
/// let args = ["--name", "Bo", "--fid", "7"].map(String::from);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// let settings = AffirmationsSettings {
///     word_bank_path: None,
///     preview_delay_ms: 0,
///     session_token: None,
/// };
///
/// let preview = build_preview(&options, &settings).expect("preview");
/// let text = format_preview(&preview);
///
/// assert!(text.starts_with("Bo's alphabet (seed "));
/// assert!(text.contains("... and 20 more surprises"));
/// ```
#[must_use]
pub fn format_preview(preview: &Preview) -> String {
    preview.to_string()
}

fn load_bank(path: Option<&Path>) -> Result<Cow<'static, WordBank>, CliError> {
    let Some(file) = path else {
        return Ok(Cow::Borrowed(WordBank::standard()));
    };
    Ok(Cow::Owned(WordBank::from_file(file)?))
}

fn session_context(options: &Options, settings: &AffirmationsSettings) -> SessionContext {
    let token = options
        .session_token()
        .or_else(|| settings.session_token())
        .map_or_else(SessionContext::generate_session_token, str::to_owned);
    let mut context = SessionContext::new(token).with_attempt(options.attempt);
    if let Some(fid) = options.fid {
        context = context.with_identity(fid);
    }
    context
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
