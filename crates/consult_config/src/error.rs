#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read secrets file {}: {source}", path.display())]
    SecretsRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Secrets file {} is not valid TOML: {source}", path.display())]
    SecretsParse {
        path: std::path::PathBuf,
        source: toml_edit::TomlError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
