use std::path::{Path, PathBuf};

use consult_domain::{ModelId, Temperature};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::Result;

/// Prefix shared by every environment override, e.g. `CONSULT_MODEL`.
pub const ENV_PREFIX: &str = "CONSULT";

/// Runtime configuration of the consultation desk.
#[derive(Debug, Clone, Setters, Serialize, Deserialize, PartialEq)]
#[setters(into)]
pub struct ConsultConfig {
    /// Chat-completion model every submission is sent to.
    pub model: ModelId,
    /// Sampling temperature used for every submission.
    pub temperature: Temperature,
    /// Base URL of the OpenAI-compatible API; `chat/completions` is joined
    /// onto it.
    pub base_url: Url,
    /// Address the web form listens on.
    pub bind: String,
    /// TOML secrets store consulted when the environment has no key.
    pub secrets_path: PathBuf,
    /// Name of the variable, in both the environment and the secrets store,
    /// that holds the API key.
    pub api_key_var: String,
}

impl ConsultConfig {
    /// Loads configuration from two sources in order of precedence:
    /// 1. Embedded JSON defaults (`consult.json` in the crate root)
    /// 2. Environment variables prefixed with `CONSULT_` (highest priority)
    ///
    /// Nested keys use `__` as separator. Examples:
    /// - `CONSULT_MODEL` -> `model`
    /// - `CONSULT_TEMPERATURE` -> `temperature`
    /// - `CONSULT_BASE_URL` -> `base_url`
    ///
    /// # Errors
    /// Fails when an override cannot be parsed into its field, including a
    /// temperature outside `0.0..=2.0`.
    pub fn from_env() -> Result<Self> {
        const DEFAULT_CONFIG: &str = include_str!("../consult.json");

        let config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Json,
            ))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        debug!(model = %config.model, temperature = %config.temperature, "Configuration loaded");
        Ok(config)
    }

    /// Loads variables from a `.env` file in `dir` into the process
    /// environment. Variables already set are left untouched and a missing
    /// file is not an error.
    pub fn load_dotenv(dir: &Path) {
        match dotenvy::from_path(dir.join(".env")) {
            Ok(()) => debug!(path = %dir.join(".env").display(), "Loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(error = %error, "Ignoring unreadable .env file"),
        }
    }
}
