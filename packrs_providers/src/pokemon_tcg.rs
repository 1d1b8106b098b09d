use async_trait::async_trait;
use packrs_core::{CardCatalog, CatalogCard};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// Public endpoint of the Pokémon TCG catalog.
const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// HTTP client for the Pokémon TCG card catalog.
///
/// The API key is optional: the catalog accepts anonymous requests at a
/// lower rate limit, so the `X-Api-Key` header is only sent when a key is
/// configured.
#[derive(Clone)]
pub struct PokemonTcgClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Response envelope of the catalog's `/cards` operations.
#[derive(Debug, Deserialize)]
struct CardListResponse {
    data: Vec<CatalogCard>,
}

impl PokemonTcgClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating PokemonTcgClient");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Helper method to send one `/cards` request with the given query.
    async fn get_cards(&self, query: &[(&str, String)]) -> anyhow::Result<Vec<CatalogCard>> {
        let mut request = self.client.get(format!("{}/cards", self.base_url));

        if !self.api_key.is_empty() {
            request = request.header("X-Api-Key", &self.api_key);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await?
            .error_for_status()?
            .json::<CardListResponse>()
            .await?;

        Ok(response.data)
    }
}

#[async_trait]
impl CardCatalog for PokemonTcgClient {
    async fn query_page(&self, page: u32, page_size: u32) -> anyhow::Result<Vec<CatalogCard>> {
        self.get_cards(&[("page", page.to_string()), ("pageSize", page_size.to_string())])
            .await
    }

    async fn default_listing(&self) -> anyhow::Result<Vec<CatalogCard>> {
        self.get_cards(&[]).await
    }
}
