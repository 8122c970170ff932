use anyhow::{anyhow, Result};
use std::env;
use tracing::trace;

use crate::utils::constants::BACKEND_URL_ENV;

/// ================================
/// Process-wide client settings
/// ================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Backend base URL, e.g. "http://127.0.0.1:3030".
    /// Stored verbatim; a malformed value surfaces inside the client
    /// implementation on first use, not here.
    pub backend_url: String,
}

impl Settings {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Read the settings from the process environment.
    ///
    /// Errs only when `BACKEND_URL` is unset or not valid unicode.
    pub fn from_env() -> Result<Settings> {
        let backend_url = env::var(BACKEND_URL_ENV)
            .map_err(|e| anyhow!("{} is not usable: {}", BACKEND_URL_ENV, e))?;
        trace!(backend_url = %backend_url, "loaded client settings from environment");
        Ok(Settings { backend_url })
    }
}
