use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Environment variable naming the signup endpoint base URL.
const BASE_URL_VAR: &str = "WAITLIST_BASE_URL";

/// Environment variable overriding where the submitted-flag file lives.
const STATE_DIR_VAR: &str = "WAITLIST_STATE_DIR";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the signup endpoint; `/waitlist` is appended on submit.
    pub base_url: String,
    /// Directory holding the `waitlist_submitted` marker file.
    pub state_dir: PathBuf,
}

impl Config {
    /// Load the configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var(BASE_URL_VAR)
            .with_context(|| format!("{BASE_URL_VAR} must be set to the signup endpoint"))?;
        let state_dir = env::var_os(STATE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            base_url,
            state_dir,
        })
    }
}
