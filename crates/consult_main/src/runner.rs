use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use consult_app::ConsultService;
use consult_config::{ConsultConfig, CredentialResolver};
use consult_domain::ExpertRole;
use consult_provider::OpenAIProvider;

use crate::ask::ask;
use crate::cli::{Cli, Command};
use crate::server;

/// Wires the provider and the consult service from configuration.
pub fn build_service(config: &ConsultConfig) -> ConsultService<OpenAIProvider> {
    let credentials = Arc::new(CredentialResolver::from_config(config));
    let provider = OpenAIProvider::new(config.base_url.clone(), credentials);
    ConsultService::new(
        Arc::new(provider),
        config.model.clone(),
        config.temperature,
    )
}

pub async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    ConsultConfig::load_dotenv(&cwd);
    let config = ConsultConfig::from_env().context("Invalid configuration")?;

    match cli.command {
        Command::Ask { role, text } => {
            let text = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())
                    .context("Failed to read question from stdin")?,
            };
            ask(&build_service(&config), ExpertRole::parse(&role), text).await
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            server::serve(&bind, build_service(&config)).await
        }
        Command::Roles => {
            for role in ExpertRole::selectable() {
                println!("{role}\t{}", role.label());
            }
            Ok(())
        }
    }
}
