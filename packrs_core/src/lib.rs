#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use std::sync::Arc;

pub mod card;
pub mod error;
pub mod fetcher;

pub use card::{Ability, Attack, CardImages, CatalogCard, PackCard};
pub use error::FetchError;
pub use fetcher::{CATALOG_PAGE_SIZE, MAX_CATALOG_PAGES, PackFetcher};

/// Read access to the external card catalog.
///
/// The fetch algorithm only ever needs these two operations, so tests run
/// against in-memory stubs and the provider crate supplies the real client.
#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// Fetch one fixed-size page of the card listing.
    async fn query_page(&self, page: u32, page_size: u32) -> anyhow::Result<Vec<CatalogCard>>;

    /// Fetch the catalog's default listing (server-side defaults, first page).
    async fn default_listing(&self) -> anyhow::Result<Vec<CatalogCard>>;
}

#[async_trait]
impl<T> CardCatalog for Arc<T>
where
    T: CardCatalog + ?Sized,
{
    async fn query_page(&self, page: u32, page_size: u32) -> anyhow::Result<Vec<CatalogCard>> {
        (**self).query_page(page, page_size).await
    }

    async fn default_listing(&self) -> anyhow::Result<Vec<CatalogCard>> {
        (**self).default_listing().await
    }
}
