pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::{Config, SearchDefaults};
use crate::error::Result;
use crate::services::{
    batch_service::BatchSearchService,
    pacing::{FixedDelayPacer, Pacer},
    provider::JobProvider,
    provider_client::HttpJobProvider,
    query_normalizer::QueryNormalizer,
    search_service::SearchService,
};

#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub batch_service: BatchSearchService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let provider = HttpJobProvider::new(&config.provider_url, config.provider_timeout)?;
        let pacer = FixedDelayPacer::new(config.batch_pacing);
        Ok(Self::with_provider(
            Arc::new(provider),
            config.defaults.clone(),
            Arc::new(pacer),
        ))
    }

    pub fn with_provider(
        provider: Arc<dyn JobProvider>,
        defaults: SearchDefaults,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        let search_service = SearchService::new(provider, QueryNormalizer::new(defaults));
        let batch_service = BatchSearchService::new(search_service.clone(), pacer);

        Self {
            search_service,
            batch_service,
        }
    }
}
