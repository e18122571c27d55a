pub mod batch_service;
pub mod listing_transformer;
pub mod pacing;
pub mod provider;
pub mod provider_client;
pub mod query_normalizer;
pub mod search_service;
