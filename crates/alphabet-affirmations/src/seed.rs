//! Seed derivation from names, identities and reroll counters.
//!
//! A seed key is a plain string such as `emma-123-0`. [`derive_seed`] folds
//! it into a `u32` with a multiply-by-31 rolling hash that wraps at signed
//! 32 bits on every step, so the same key always maps to the same seed.

use std::fmt;

use uuid::Uuid;

/// Folds `key` into a non-negative 32-bit seed.
///
/// Each UTF-16 code unit is mixed in as `acc * 31 + unit` with signed 32-bit
/// wraparound; the absolute value of the final accumulator is returned. The
/// empty string maps to 0.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::derive_seed;
///
/// assert_eq!(derive_seed(""), 0);
/// assert_eq!(derive_seed("a"), 97);
/// assert_eq!(derive_seed("emma-123-0"), derive_seed("emma-123-0"));
/// assert_ne!(derive_seed("emma-123-0"), derive_seed("emma-123-1"));
/// ```
#[must_use]
pub fn derive_seed(key: &str) -> u32 {
    let accumulator = key.encode_utf16().fold(0_i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    accumulator.unsigned_abs()
}

fn normalise_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Builds the seed key for a caller with a stable numeric identity.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::personalized_seed_key;
///
/// assert_eq!(personalized_seed_key(" Emma ", 123, 0), "emma-123-0");
/// ```
#[must_use]
pub fn personalized_seed_key(name: &str, identity: u64, attempt: u32) -> String {
    format!("{}-{identity}-{attempt}", normalise_name(name))
}

/// Builds the seed key for an anonymous caller identified by a session token.
#[must_use]
pub fn anonymous_seed_key(name: &str, session_token: &str, attempt: u32) -> String {
    format!("{}-{session_token}-{attempt}", normalise_name(name))
}

type AttemptCallback = Box<dyn FnMut(u32) + Send>;

/// Caller-owned generation context.
///
/// Carries the session token, the optional platform identity and the current
/// reroll counter. The optional callback fires whenever [`reroll`] advances
/// the counter so the caller can persist it wherever it keeps session state.
///
/// [`reroll`]: SessionContext::reroll
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use alphabet_affirmations::SessionContext;
///
/// let saved = Arc::new(Mutex::new(0));
/// let sink = Arc::clone(&saved);
/// let mut context = SessionContext::new("session-abc")
///     .with_identity(123)
///     .on_attempt_change(move |attempt| {
///         if let Ok(mut slot) = sink.lock() {
///             *slot = attempt;
///         }
///     });
///
/// assert_eq!(context.seed_key("Emma"), "emma-123-0");
/// assert_eq!(context.reroll(), 1);
/// assert_eq!(context.seed_key("Emma"), "emma-123-1");
/// assert_eq!(*saved.lock().expect("lock"), 1);
/// ```
pub struct SessionContext {
    session_token: String,
    identity: Option<u64>,
    attempt: u32,
    on_attempt: Option<AttemptCallback>,
}

impl SessionContext {
    /// Creates a context for `session_token` with no identity and attempt 0.
    #[must_use]
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            identity: None,
            attempt: 0,
            on_attempt: None,
        }
    }

    /// Generates a fresh random session token.
    #[must_use]
    pub fn generate_session_token() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Sets the stable numeric identity used for personalised keys.
    #[must_use]
    pub const fn with_identity(mut self, identity: u64) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Restores a previously persisted reroll counter.
    #[must_use]
    pub const fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Registers a callback invoked with the new counter after each reroll.
    #[must_use]
    pub fn on_attempt_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.on_attempt = Some(Box::new(callback));
        self
    }

    /// Returns the session token.
    #[must_use]
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// Returns the identity, if one was supplied.
    #[must_use]
    pub const fn identity(&self) -> Option<u64> {
        self.identity
    }

    /// Returns the current reroll counter.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns the seed key for `name` at the current attempt.
    ///
    /// Uses the personalised form when an identity is present and the
    /// session-token form otherwise.
    #[must_use]
    pub fn seed_key(&self, name: &str) -> String {
        self.identity.map_or_else(
            || anonymous_seed_key(name, &self.session_token, self.attempt),
            |identity| personalized_seed_key(name, identity, self.attempt),
        )
    }

    /// Returns the seed for `name` at the current attempt.
    #[must_use]
    pub fn seed(&self, name: &str) -> u32 {
        derive_seed(&self.seed_key(name))
    }

    /// Advances the reroll counter and notifies the callback.
    ///
    /// The counter saturates at `u32::MAX`.
    pub fn reroll(&mut self) -> u32 {
        self.attempt = self.attempt.saturating_add(1);
        if let Some(callback) = self.on_attempt.as_mut() {
            callback(self.attempt);
        }
        self.attempt
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("session_token", &self.session_token)
            .field("identity", &self.identity)
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}
