use axum::Json;
use utoipa::OpenApi;

use crate::dto::search_dto::{BatchSearchRequest, BatchSearchResponse, SearchResponse};
use crate::models::batch::{BatchError, BatchItem, BatchResult, CommonFilters};
use crate::models::listing::Listing;
use crate::models::query::{NormalizedQuery, SearchQuery};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::search::search_jobs,
        crate::routes::search::batch_search,
    ),
    components(schemas(
        SearchQuery,
        NormalizedQuery,
        Listing,
        SearchResponse,
        BatchItem,
        CommonFilters,
        BatchError,
        BatchResult,
        BatchSearchRequest,
        BatchSearchResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
