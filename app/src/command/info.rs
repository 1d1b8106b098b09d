use packrs_config::Config;
use packrs_core::CardCatalog;
use packrs_providers::PokemonTcgClient;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Outputs the configured API key (masked), server and pack settings, and a
/// live catalog connectivity probe.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== packrs Configuration ===\n");

        println!("API Key:");
        let api_key = &config.providers.pokemon_tcg.api_key;
        if api_key.is_empty() {
            println!("  Pokemon TCG: (not set - anonymous access)");
        } else if api_key.len() > 8 {
            let masked = format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..]);
            println!("  Pokemon TCG: {masked}");
        } else {
            println!("  Pokemon TCG: ***");
        }
        println!();

        println!("Server:");
        println!("  Bind: {}", config.server.bind);
        println!();

        println!("Pack:");
        println!("  Default Count: {}", config.pack.default_count);
        println!();

        println!("Catalog:");
        info!("Probing catalog connectivity");
        let client = PokemonTcgClient::new(api_key.clone());
        match client.query_page(1, 1).await {
            Ok(_) => println!("  Status: Reachable"),
            Err(e) => {
                println!("  Status: Unreachable");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}
