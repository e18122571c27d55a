use std::sync::Arc;

use tracing::{info, instrument};

use crate::models::listing::Listing;
use crate::models::query::{NormalizedQuery, SearchQuery};
use crate::services::listing_transformer::to_listing;
use crate::services::provider::{JobProvider, ProviderError};
use crate::services::query_normalizer::QueryNormalizer;

#[derive(Debug, Clone)]
pub struct SearchOutput {
    /// Parameters actually sent to the provider.
    pub query: NormalizedQuery,
    pub jobs: Vec<Listing>,
}

/// Runs one search: normalize, call the provider, transform the postings.
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn JobProvider>,
    normalizer: QueryNormalizer,
}

impl SearchService {
    pub fn new(provider: Arc<dyn JobProvider>, normalizer: QueryNormalizer) -> Self {
        Self {
            provider,
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutput, ProviderError> {
        self.search_for_role(query, None).await
    }

    /// Like [`search`](Self::search), but tags every listing with `role`.
    #[instrument(skip(self, query))]
    pub async fn search_for_role(
        &self,
        query: &SearchQuery,
        role: Option<&str>,
    ) -> Result<SearchOutput, ProviderError> {
        let normalized = self.normalizer.normalize(query);
        let keyword = query.keyword.clone().unwrap_or_default();

        let postings = self.provider.search(&normalized).await?;
        let jobs: Vec<Listing> = postings
            .into_iter()
            .map(|posting| to_listing(posting, &keyword, role))
            .collect();

        info!(keyword = %keyword, count = jobs.len(), "Job search completed");

        Ok(SearchOutput {
            query: normalized,
            jobs,
        })
    }
}
