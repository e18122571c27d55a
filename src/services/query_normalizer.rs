use crate::config::SearchDefaults;
use crate::models::query::{NormalizedQuery, SearchQuery};

/// Skills beyond this count are not appended to the keyword.
pub const MAX_KEYWORD_SKILLS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct QueryNormalizer {
    defaults: SearchDefaults,
}

impl QueryNormalizer {
    pub fn new(defaults: SearchDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SearchDefaults {
        &self.defaults
    }

    pub fn normalize(&self, query: &SearchQuery) -> NormalizedQuery {
        let d = &self.defaults;
        NormalizedQuery {
            keyword: non_empty(enhance_keyword(query.keyword.as_deref(), &query.skills)),
            location: or_default(&query.location, &d.location),
            experience_level: present(&query.experience_level),
            job_type: present(&query.job_type),
            remote_filter: present(&query.remote_filter),
            date_since_posted: or_default(&query.date_since_posted, &d.date_since_posted),
            salary: present(&query.salary),
            limit: Some(query.limit.unwrap_or(d.search_limit).to_string()),
            page: Some(query.page.unwrap_or(d.page).to_string()),
            sort_by: or_default(&query.sort_by, &d.sort_by),
        }
    }
}

/// Append up to three skills to the keyword. The result only goes to the provider.
pub fn enhance_keyword(keyword: Option<&str>, skills: &[String]) -> String {
    let keyword = keyword.unwrap_or_default();
    if skills.is_empty() {
        return keyword.to_string();
    }
    let extra = skills
        .iter()
        .take(MAX_KEYWORD_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", keyword, extra).trim().to_string()
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

fn or_default(value: &Option<String>, default: &str) -> Option<String> {
    present(value).or_else(|| non_empty(default.to_string()))
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
