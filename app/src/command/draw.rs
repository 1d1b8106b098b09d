use packrs_config::Config;
use packrs_core::PackFetcher;
use packrs_http::MAX_PACK_SIZE;
use packrs_providers::PokemonTcgClient;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::command::CommandStrategy;

/// Input for the draw command.
pub struct DrawInput {
    /// Number of cards to draw (falls back to the configured default)
    pub count: Option<usize>,
    /// Seed for deterministic page choice and shuffling
    pub seed: Option<u64>,
}

/// Strategy for drawing one pack and printing it as JSON.
pub struct DrawStrategy;

impl CommandStrategy for DrawStrategy {
    type Input = DrawInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let count = input.count.unwrap_or(config.pack.default_count);
        if !(1..=MAX_PACK_SIZE).contains(&count) {
            anyhow::bail!("Invalid count {count}. Must be between 1 and {MAX_PACK_SIZE}.");
        }

        let fetcher = PackFetcher::new(PokemonTcgClient::new(
            config.providers.pokemon_tcg.api_key.clone(),
        ));

        let cards = if let Some(seed) = input.seed {
            info!("Drawing {count} cards with seed {seed}");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            fetcher.fetch_batch_with_rng(count, &mut rng).await?
        } else {
            info!("Drawing {count} cards");
            fetcher.fetch_batch(count).await?
        };

        println!("{}", serde_json::to_string_pretty(&cards)?);

        Ok(())
    }
}
