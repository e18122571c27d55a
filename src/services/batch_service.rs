use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::models::batch::{BatchError, BatchItem, BatchOutcome, BatchResult, CommonFilters};
use crate::models::listing::Listing;
use crate::models::query::SearchQuery;
use crate::services::pacing::Pacer;
use crate::services::search_service::SearchService;

/// Runs a batch of searches one at a time, pacing calls to the provider.
#[derive(Clone)]
pub struct BatchSearchService {
    searcher: SearchService,
    pacer: Arc<dyn Pacer>,
}

impl BatchSearchService {
    pub fn new(searcher: SearchService, pacer: Arc<dyn Pacer>) -> Self {
        Self { searcher, pacer }
    }

    /// Items run strictly in order. A failed item is logged and skipped; it never
    /// aborts the batch.
    #[instrument(skip_all, fields(items = items.len()))]
    pub async fn run(&self, items: &[BatchItem], common: &CommonFilters) -> BatchResult {
        let mut collected: Vec<Listing> = Vec::new();
        let mut errors: Vec<BatchError> = Vec::new();

        for item in items {
            match self.run_item(item, common).await {
                BatchOutcome::Listings(listings) => collected.extend(listings),
                BatchOutcome::Failed(failure) => {
                    warn!(keyword = %failure.keyword, error = %failure.error, "Batch item failed");
                    errors.push(failure);
                }
            }
            self.pacer.wait().await;
        }

        let jobs = dedup_by_link(collected);
        info!(
            total = jobs.len(),
            failed = errors.len(),
            "Batch search completed"
        );

        BatchResult {
            total_count: jobs.len(),
            jobs,
            errors: (!errors.is_empty()).then_some(errors),
        }
    }

    async fn run_item(&self, item: &BatchItem, common: &CommonFilters) -> BatchOutcome {
        let query = self.item_query(item, common);
        match self
            .searcher
            .search_for_role(&query, Some(item.effective_role()))
            .await
        {
            Ok(output) => BatchOutcome::Listings(output.jobs),
            Err(err) => BatchOutcome::Failed(BatchError {
                keyword: item.keyword.clone(),
                error: err.to_string(),
            }),
        }
    }

    /// Merge one item with the common filters. Limit and page resolve item, then
    /// common, then the batch defaults.
    pub fn item_query(&self, item: &BatchItem, common: &CommonFilters) -> SearchQuery {
        let defaults = self.searcher.normalizer().defaults();
        SearchQuery {
            keyword: Some(item.keyword.clone()),
            location: common.location.clone(),
            experience_level: common.experience_level.clone(),
            job_type: common.job_type.clone(),
            remote_filter: common.remote_filter.clone(),
            date_since_posted: common.date_since_posted.clone(),
            salary: common.salary.clone(),
            limit: Some(item.limit.or(common.limit).unwrap_or(defaults.batch_limit)),
            page: Some(item.page.or(common.page).unwrap_or(defaults.page)),
            sort_by: common.sort_by.clone(),
            skills: Vec::new(),
        }
    }
}

/// Keep the first listing seen for each link.
pub fn dedup_by_link(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .filter(|listing| seen.insert(listing.link.clone()))
        .collect()
}
