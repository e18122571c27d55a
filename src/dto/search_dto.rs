use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::batch::{BatchItem, BatchResult, CommonFilters};
use crate::models::listing::Listing;
use crate::models::query::NormalizedQuery;
use crate::services::search_service::SearchOutput;
use crate::utils::serde_flex::deserialize_null_default;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub query: NormalizedQuery,
    pub jobs: Vec<Listing>,
}

impl From<SearchOutput> for SearchResponse {
    fn from(output: SearchOutput) -> Self {
        Self {
            success: true,
            count: output.jobs.len(),
            query: output.query,
            jobs: output.jobs,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchSearchRequest {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub searches: Vec<BatchItem>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub common_filters: CommonFilters,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchSearchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: BatchResult,
}

impl From<BatchResult> for BatchSearchResponse {
    fn from(result: BatchResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_request_accepts_camel_case_and_nulls() {
        let req: BatchSearchRequest = serde_json::from_str(
            r#"{"searches":[{"keyword":"rust","role":"Backend","limit":"3"}],
                "commonFilters":{"location":"Pune","remoteFilter":"remote","limit":5}}"#,
        )
        .unwrap();
        assert_eq!(req.searches.len(), 1);
        assert_eq!(req.searches[0].limit, Some(3));
        assert_eq!(req.common_filters.location.as_deref(), Some("Pune"));
        assert_eq!(req.common_filters.remote_filter.as_deref(), Some("remote"));

        let req: BatchSearchRequest =
            serde_json::from_str(r#"{"searches":null,"commonFilters":null}"#).unwrap();
        assert!(req.searches.is_empty());
    }

    #[test]
    fn large_batches_are_accepted() {
        let searches: Vec<_> = (0..40).map(|i| json!({ "keyword": format!("kw{i}") })).collect();
        let req: BatchSearchRequest =
            serde_json::from_value(json!({ "searches": searches })).unwrap();
        assert_eq!(req.searches.len(), 40);
        assert_eq!(req.searches[39].keyword, "kw39");
    }

    #[test]
    fn batch_response_flattens_result() {
        let value = serde_json::to_value(BatchSearchResponse::from(BatchResult::default())).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["total_count"], 0);
        assert_eq!(value["jobs"], json!([]));
        assert!(value.get("errors").is_none());
    }
}
