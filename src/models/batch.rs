use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::listing::Listing;
use crate::utils::serde_flex::{
    deserialize_count_flexible, deserialize_null_default, deserialize_text_flexible,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub keyword: String,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub page: Option<u32>,
}

impl BatchItem {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Role stamped on listings: the explicit role, else the keyword.
    pub fn effective_role(&self) -> &str {
        match self.role.as_deref() {
            Some(role) if !role.is_empty() => role,
            _ => &self.keyword,
        }
    }
}

/// Filters shared by every item of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonFilters {
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub remote_filter: Option<String>,
    pub date_since_posted: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub limit: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchError {
    pub keyword: String,
    pub error: String,
}

/// What happened to one batch item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Listings(Vec<Listing>),
    Failed(BatchError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchResult {
    pub total_count: usize,
    pub jobs: Vec<Listing>,
    /// Present only when at least one item failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BatchError>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_falls_back_to_keyword() {
        assert_eq!(BatchItem::new("rust").effective_role(), "rust");
        assert_eq!(
            BatchItem::new("rust").with_role("Backend Engineer").effective_role(),
            "Backend Engineer"
        );
        assert_eq!(BatchItem::new("rust").with_role("").effective_role(), "rust");
    }

    #[test]
    fn null_keyword_reads_as_empty() {
        let item: BatchItem = serde_json::from_str(r#"{"keyword":null,"role":"r"}"#).unwrap();
        assert_eq!(item.keyword, "");
        assert_eq!(item.effective_role(), "r");
    }

    #[test]
    fn empty_result_omits_errors_key() {
        let value = serde_json::to_value(BatchResult::default()).unwrap();
        assert_eq!(value["total_count"], 0);
        assert!(value.get("errors").is_none());
    }
}
