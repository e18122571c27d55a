use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::serde_flex::{
    deserialize_count_flexible, deserialize_null_default, deserialize_text_flexible,
};

/// One user-intent search. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: Option<String>,
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
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub skills: Vec<String>,
}

/// Provider-ready parameters. Absent fields impose no filter and are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_since_posted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl NormalizedQuery {
    /// Present parameters as `(provider key, value)` pairs.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("keyword", &self.keyword),
            ("location", &self.location),
            ("dateSincePosted", &self.date_since_posted),
            ("jobType", &self.job_type),
            ("remoteFilter", &self.remote_filter),
            ("salary", &self.salary),
            ("experienceLevel", &self.experience_level),
            ("limit", &self.limit),
            ("page", &self.page),
            ("sortBy", &self.sort_by),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

impl From<NormalizedQuery> for SearchQuery {
    fn from(query: NormalizedQuery) -> Self {
        Self {
            keyword: query.keyword,
            location: query.location,
            experience_level: query.experience_level,
            job_type: query.job_type,
            remote_filter: query.remote_filter,
            date_since_posted: query.date_since_posted,
            salary: query.salary,
            limit: query.limit.and_then(|v| v.parse().ok()),
            page: query.page.and_then(|v| v.parse().ok()),
            sort_by: query.sort_by,
            skills: Vec::new(),
        }
    }
}
