//! Preview settings loaded via `OrthoConfig`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::error::CliError;

/// Settings shared by every preview run.
///
/// Values come from `AFFIRMATIONS_*` environment variables and the
/// configuration files `OrthoConfig` discovers.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AFFIRMATIONS")]
pub struct AffirmationsSettings {
    /// Word bank JSON file replacing the standard bank.
    pub word_bank_path: Option<PathBuf>,
    /// Pause before the preview is printed, in milliseconds.
    #[ortho_config(default = 0)]
    pub preview_delay_ms: u64,
    /// Session token reused across anonymous runs.
    pub session_token: Option<String>,
}

impl AffirmationsSettings {
    /// Loads settings for the program called `program`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a source cannot be read or holds an
    /// invalid value.
    pub fn load(program: &str) -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|err| CliError::Config {
            message: err.to_string(),
        })
    }

    /// Return the configured word bank path, if any.
    #[must_use]
    pub fn word_bank_path(&self) -> Option<&Path> {
        self.word_bank_path.as_deref()
    }

    /// Return the configured preview delay, zero when unset.
    #[must_use]
    pub const fn preview_delay(&self) -> Duration {
        Duration::from_millis(self.preview_delay_ms)
    }

    /// Return the configured session token, if any.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}
