use std::path::PathBuf;

use consult_domain::{ApiKey, CredentialProvider};
use tracing::{debug, warn};

use crate::{ConsultConfig, Error, Result};

/// One place an API key may be stored.
pub trait CredentialSource: Send + Sync {
    /// Short description used in logs.
    fn name(&self) -> String;

    /// Returns the stored value, or `None` when this source has nothing to
    /// offer. Blank values count as nothing.
    fn lookup(&self) -> Result<Option<ApiKey>>;
}

/// Reads the key from a process environment variable.
pub struct EnvironmentSource {
    var: String,
}

impl EnvironmentSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvironmentSource {
    fn name(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn lookup(&self) -> Result<Option<ApiKey>> {
        Ok(std::env::var(&self.var).ok().and_then(non_blank))
    }
}

/// Reads the key from a top-level string entry of a TOML secrets file.
pub struct SecretsFileSource {
    path: PathBuf,
    key: String,
}

impl SecretsFileSource {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into() }
    }
}

impl CredentialSource for SecretsFileSource {
    fn name(&self) -> String {
        format!("secrets file {}", self.path.display())
    }

    fn lookup(&self) -> Result<Option<ApiKey>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(Error::SecretsRead { path: self.path.clone(), source }),
        };

        let document = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|source| Error::SecretsParse { path: self.path.clone(), source })?;

        Ok(document
            .get(&self.key)
            .and_then(|item| item.as_str())
            .map(str::to_string)
            .and_then(non_blank))
    }
}

fn non_blank(value: String) -> Option<ApiKey> {
    let value = value.trim();
    (!value.is_empty()).then(|| ApiKey::from(value))
}

/// Evaluates credential sources in order and hands out the first key found.
pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// The standard chain: process environment first, then the secrets file.
    pub fn from_config(config: &ConsultConfig) -> Self {
        Self::new(vec![
            Box::new(EnvironmentSource::new(&config.api_key_var)),
            Box::new(SecretsFileSource::new(
                &config.secrets_path,
                &config.api_key_var,
            )),
        ])
    }

    /// Returns the first key any source yields. A source that fails to read
    /// is logged and skipped.
    pub fn resolve(&self) -> Option<ApiKey> {
        for source in &self.sources {
            match source.lookup() {
                Ok(Some(key)) => {
                    debug!(source = %source.name(), "Resolved API key");
                    return Some(key);
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(source = %source.name(), error = %error, "Skipping credential source")
                }
            }
        }
        debug!("No API key found in any credential source");
        None
    }
}

impl CredentialProvider for CredentialResolver {
    fn api_key(&self) -> Option<ApiKey> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    struct Fixed(Option<&'static str>);

    impl CredentialSource for Fixed {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn lookup(&self) -> Result<Option<ApiKey>> {
            Ok(self.0.map(ApiKey::from))
        }
    }

    struct Broken;

    impl CredentialSource for Broken {
        fn name(&self) -> String {
            "broken".to_string()
        }

        fn lookup(&self) -> Result<Option<ApiKey>> {
            Err(Error::SecretsRead {
                path: PathBuf::from("broken"),
                source: std::io::Error::other("denied"),
            })
        }
    }

    fn secrets_file(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_first_source_wins() {
        let fixture = CredentialResolver::new(vec![
            Box::new(Fixed(Some("first"))),
            Box::new(Fixed(Some("second"))),
        ]);
        let actual = fixture.resolve();
        let expected = Some(ApiKey::from("first"));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_falls_through_empty_and_failing_sources() {
        let fixture = CredentialResolver::new(vec![
            Box::new(Fixed(None)),
            Box::new(Broken),
            Box::new(Fixed(Some("last"))),
        ]);
        let actual = fixture.api_key();
        let expected = Some(ApiKey::from("last"));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_sources_yield_none() {
        let fixture = CredentialResolver::new(vec![Box::new(Fixed(None))]);
        assert_eq!(fixture.resolve(), None);
    }

    #[test]
    #[serial]
    fn test_environment_source() {
        unsafe {
            std::env::set_var("CONSULT_TEST_API_KEY", " sk-env ");
        }
        let actual = EnvironmentSource::new("CONSULT_TEST_API_KEY").lookup().unwrap();
        assert_eq!(actual, Some(ApiKey::from("sk-env")));

        unsafe {
            std::env::set_var("CONSULT_TEST_API_KEY", "   ");
        }
        let actual = EnvironmentSource::new("CONSULT_TEST_API_KEY").lookup().unwrap();
        assert_eq!(actual, None);

        unsafe {
            std::env::remove_var("CONSULT_TEST_API_KEY");
        }
    }

    #[test]
    fn test_secrets_file_source() {
        let file = secrets_file("OPENAI_API_KEY = \"sk-file\"\nOTHER = 1\n");
        let actual = SecretsFileSource::new(file.path(), "OPENAI_API_KEY")
            .lookup()
            .unwrap();
        assert_eq!(actual, Some(ApiKey::from("sk-file")));
    }

    #[test]
    fn test_secrets_file_missing_key_or_file() {
        let file = secrets_file("OTHER = \"x\"\n");
        let actual = SecretsFileSource::new(file.path(), "OPENAI_API_KEY")
            .lookup()
            .unwrap();
        assert_eq!(actual, None);

        let actual = SecretsFileSource::new("/nonexistent/secrets.toml", "OPENAI_API_KEY")
            .lookup()
            .unwrap();
        assert_eq!(actual, None);
    }

    #[test]
    fn test_secrets_file_non_string_value_is_ignored() {
        let file = secrets_file("OPENAI_API_KEY = 42\n");
        let actual = SecretsFileSource::new(file.path(), "OPENAI_API_KEY")
            .lookup()
            .unwrap();
        assert_eq!(actual, None);
    }

    #[test]
    fn test_secrets_file_malformed() {
        let file = secrets_file("OPENAI_API_KEY = \n");
        let actual = SecretsFileSource::new(file.path(), "OPENAI_API_KEY").lookup();
        assert!(matches!(actual, Err(Error::SecretsParse { .. })));
    }

    #[test]
    #[serial]
    fn test_from_config_reads_environment_then_secrets_file() {
        let file = secrets_file("CONSULT_TEST_CONFIGURED_KEY = \"sk-file\"\n");
        let config = ConsultConfig::from_env()
            .unwrap()
            .secrets_path(file.path())
            .api_key_var("CONSULT_TEST_CONFIGURED_KEY");
        let fixture = CredentialResolver::from_config(&config);

        unsafe {
            std::env::remove_var("CONSULT_TEST_CONFIGURED_KEY");
        }
        let actual = fixture.api_key();
        let expected = Some(ApiKey::from("sk-file"));
        assert_eq!(actual, expected);

        unsafe {
            std::env::set_var("CONSULT_TEST_CONFIGURED_KEY", "sk-env");
        }
        let actual = fixture.api_key();
        let expected = Some(ApiKey::from("sk-env"));
        assert_eq!(actual, expected);

        unsafe {
            std::env::remove_var("CONSULT_TEST_CONFIGURED_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_environment_takes_precedence_over_secrets_file() {
        let file = secrets_file("CONSULT_TEST_CHAIN_KEY = \"sk-file\"\n");
        let fixture = CredentialResolver::new(vec![
            Box::new(EnvironmentSource::new("CONSULT_TEST_CHAIN_KEY")),
            Box::new(SecretsFileSource::new(file.path(), "CONSULT_TEST_CHAIN_KEY")),
        ]);

        unsafe {
            std::env::remove_var("CONSULT_TEST_CHAIN_KEY");
        }
        assert_eq!(fixture.resolve(), Some(ApiKey::from("sk-file")));

        unsafe {
            std::env::set_var("CONSULT_TEST_CHAIN_KEY", "sk-env");
        }
        assert_eq!(fixture.resolve(), Some(ApiKey::from("sk-env")));

        unsafe {
            std::env::remove_var("CONSULT_TEST_CHAIN_KEY");
        }
    }
}
