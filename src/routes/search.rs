use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::search_dto::{BatchSearchRequest, BatchSearchResponse, SearchResponse},
    error::Result,
    models::query::SearchQuery,
    AppState,
};

#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Listings found by the provider", body = SearchResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Provider or internal failure")
    )
)]
#[axum::debug_handler]
pub async fn search_jobs(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchQuery>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(query) = payload?;
    let output = state.search_service.search(&query).await?;
    Ok(Json(SearchResponse::from(output)))
}

#[utoipa::path(
    post,
    path = "/batch-search",
    request_body = BatchSearchRequest,
    responses(
        (status = 200, description = "Merged and deduplicated listings", body = BatchSearchResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal failure")
    )
)]
#[axum::debug_handler]
pub async fn batch_search(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BatchSearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload?;
    let result = state
        .batch_service
        .run(&request.searches, &request.common_filters)
        .await;
    Ok(Json(BatchSearchResponse::from(result)))
}
