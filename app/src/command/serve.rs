use std::sync::Arc;

use packrs_config::Config;
use packrs_core::CardCatalog;
use packrs_http::{AppState, run_server};
use packrs_providers::PokemonTcgClient;
use tracing::info;

use crate::command::CommandStrategy;

/// Input for the serve command.
pub struct ServeInput {
    /// Optional bind address (overrides config)
    pub bind: Option<String>,
}

/// Strategy for running the HTTP pack service.
pub struct ServeStrategy;

impl CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let bind = input.bind.unwrap_or_else(|| config.server.bind.clone());

        if config.providers.pokemon_tcg.api_key.is_empty() {
            info!("No API key configured; using anonymous (rate-limited) catalog access");
        }

        let catalog: Arc<dyn CardCatalog> = Arc::new(PokemonTcgClient::new(
            config.providers.pokemon_tcg.api_key.clone(),
        ));
        let state = Arc::new(AppState::new(catalog, config.pack.default_count));

        info!("Pack service starting on {bind}. Press Ctrl+C to stop.");
        run_server(state, &bind).await?;

        Ok(())
    }
}
