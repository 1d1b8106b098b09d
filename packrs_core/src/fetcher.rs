//! The batch fetcher: bounded-retry pagination, dedupe, filter, sample.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::CardCatalog;
use crate::card::{CatalogCard, PackCard};
use crate::error::FetchError;

/// Fixed page size requested from the catalog.
pub const CATALOG_PAGE_SIZE: u32 = 250;

/// Random page numbers are drawn from `1..=MAX_CATALOG_PAGES`.
pub const MAX_CATALOG_PAGES: u32 = 50;

/// Page-request budget before falling back to the default listing.
const MAX_ATTEMPTS: u32 = 3;

/// Assembles randomized card batches from a catalog.
///
/// Each fetch owns its accumulator and random source; a fetcher can be
/// shared freely across concurrent invocations.
pub struct PackFetcher<C> {
    catalog: C,
}

impl<C: CardCatalog> PackFetcher<C> {
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Fetch up to `count` unique, image-bearing cards in randomized order.
    ///
    /// Returns fewer than `count` cards (never zero) when the catalog could
    /// not supply enough qualifying records within the attempt budget.
    pub async fn fetch_batch(&self, count: usize) -> Result<Vec<PackCard>, FetchError> {
        let mut rng = StdRng::from_entropy();
        self.fetch_batch_with_rng(count, &mut rng).await
    }

    /// Like [`Self::fetch_batch`], with a caller-supplied random source so
    /// page choice and shuffling can be made deterministic.
    pub async fn fetch_batch_with_rng<R: Rng + Send>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<PackCard>, FetchError> {
        let mut pool: Vec<CatalogCard> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut saw_auth_error = false;
        let mut attempts = 0u32;

        while count_with_images(&pool) < count && attempts < MAX_ATTEMPTS {
            attempts += 1;
            let page = rng.gen_range(1..=MAX_CATALOG_PAGES);
            info!("Attempt {attempts}: fetching page {page} from the card catalog");

            match self.catalog.query_page(page, CATALOG_PAGE_SIZE).await {
                Ok(cards) => merge_unique(&mut pool, &mut seen_ids, cards),
                Err(e) => {
                    warn!("Attempt {attempts} to fetch cards failed: {e}");
                    saw_auth_error |= FetchError::is_auth_message(&e.to_string());

                    if attempts >= MAX_ATTEMPTS {
                        warn!("Random page fetches exhausted, falling back to the default listing");
                        match self.catalog.default_listing().await {
                            Ok(cards) => merge_unique(&mut pool, &mut seen_ids, cards),
                            Err(fallback_error) => {
                                saw_auth_error |=
                                    FetchError::is_auth_message(&fallback_error.to_string());
                                return Err(FetchError::classify(
                                    saw_auth_error,
                                    format!(
                                        "Failed to fetch card data from the catalog: {fallback_error}"
                                    ),
                                ));
                            }
                        }
                    }
                }
            }
        }

        if pool.is_empty() {
            return Err(FetchError::classify(
                saw_auth_error,
                "No cards returned from the catalog after multiple attempts".to_string(),
            ));
        }

        let mut matching: Vec<CatalogCard> = pool
            .into_iter()
            .filter(|card| card.image_url().is_some())
            .collect();

        if matching.is_empty() {
            return Err(FetchError::classify(
                saw_auth_error,
                "No cards with images found in the fetched batches".to_string(),
            ));
        }

        matching.shuffle(rng);

        if matching.len() < count {
            warn!(
                "Only {} cards with images found after {attempts} attempts, requested {count}; returning all of them",
                matching.len()
            );
        } else {
            matching.truncate(count);
        }

        Ok(matching
            .into_iter()
            .filter_map(CatalogCard::into_pack_card)
            .collect())
    }
}

fn count_with_images(pool: &[CatalogCard]) -> usize {
    pool.iter()
        .filter(|card| card.image_url().is_some())
        .count()
}

/// Merge new records into the pool, keeping the first occurrence of each id.
fn merge_unique(
    pool: &mut Vec<CatalogCard>,
    seen_ids: &mut HashSet<String>,
    cards: Vec<CatalogCard>,
) {
    for card in cards {
        if seen_ids.insert(card.id.clone()) {
            pool.push(card);
        }
    }
}
