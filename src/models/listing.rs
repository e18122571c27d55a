use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const LISTING_SOURCE: &str = "external-provider";

/// Canonical job listing. Every field except `search_role` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub company_logo: String,
    pub location: String,
    pub posted_date: String,
    pub posted_ago: String,
    pub salary: String,
    /// Identity of the listing for deduplication.
    pub link: String,
    pub source: String,
    pub search_keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_role: Option<String>,
}
