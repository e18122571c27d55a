use serde::{Deserialize, Serialize};

use crate::utils::serde_flex::deserialize_text_flexible;

/// A result record as the provider returns it. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosting {
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub ago_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_flexible")]
    pub job_url: Option<String>,
}
