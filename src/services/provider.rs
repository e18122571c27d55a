use async_trait::async_trait;

use crate::models::posting::RawPosting;
use crate::models::query::NormalizedQuery;

/// Source of raw job postings. Results come back in the provider's own order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(&self, query: &NormalizedQuery) -> Result<Vec<RawPosting>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Reported(String),

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}
