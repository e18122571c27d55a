use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::models::posting::RawPosting;
use crate::models::query::NormalizedQuery;
use crate::services::provider::{JobProvider, ProviderError};

#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderBody {
    Postings(Vec<RawPosting>),
    Wrapped { jobs: Vec<RawPosting> },
    Failure(FailureBody),
}

#[derive(Deserialize)]
struct FailureBody {
    error: Option<String>,
    message: Option<String>,
}

impl FailureBody {
    fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.is_empty())
    }
}

/// [`JobProvider`] backed by an HTTP listing service.
#[derive(Clone)]
pub struct HttpJobProvider {
    client: Client,
    jobs_url: Url,
}

impl HttpJobProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::Config(format!("Invalid JOB_PROVIDER_URL {}: {}", base_url, e)))?;
        let jobs_url = Url::parse(&format!("{}/jobs", base.as_str().trim_end_matches('/')))
            .map_err(|e| Error::Config(format!("Invalid JOB_PROVIDER_URL {}: {}", base_url, e)))?;
        Ok(Self { client, jobs_url })
    }

    pub fn request_url(&self, query: &NormalizedQuery) -> Url {
        let mut url = self.jobs_url.clone();
        url.query_pairs_mut().extend_pairs(query.params());
        url
    }
}

#[async_trait]
impl JobProvider for HttpJobProvider {
    #[instrument(skip(self, query), fields(keyword = query.keyword.as_deref().unwrap_or("")))]
    async fn search(
        &self,
        query: &NormalizedQuery,
    ) -> std::result::Result<Vec<RawPosting>, ProviderError> {
        let url = self.request_url(query);
        debug!(%url, "Querying job provider");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

/// Turn a provider HTTP response into postings or a [`ProviderError`].
pub fn parse_response(
    status: StatusCode,
    body: &str,
) -> std::result::Result<Vec<RawPosting>, ProviderError> {
    if !status.is_success() {
        let message = serde_json::from_str::<FailureBody>(body)
            .ok()
            .and_then(FailureBody::into_message)
            .unwrap_or_else(|| body.trim().to_string());
        warn!(status = status.as_u16(), %message, "Job provider rejected request");
        return Err(ProviderError::Status {
            status: status.as_u16(),
            message,
        });
    }

    match serde_json::from_str::<ProviderBody>(body) {
        Ok(ProviderBody::Postings(postings)) | Ok(ProviderBody::Wrapped { jobs: postings }) => {
            Ok(postings)
        }
        Ok(ProviderBody::Failure(failure)) => match failure.into_message() {
            Some(message) => Err(ProviderError::Reported(message)),
            None => Err(ProviderError::Malformed(
                "expected a list of postings".to_string(),
            )),
        },
        Err(err) => Err(ProviderError::Malformed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_only_present_params() {
        let provider =
            HttpJobProvider::with_client(Client::new(), "http://provider.local/").unwrap();
        let query = NormalizedQuery {
            keyword: Some("rust developer".into()),
            location: Some("India".into()),
            limit: Some("5".into()),
            ..Default::default()
        };
        let url = provider.request_url(&query);
        assert_eq!(url.path(), "/jobs");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("keyword".to_string(), "rust developer".to_string()),
                ("location".to_string(), "India".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let result = HttpJobProvider::with_client(Client::new(), "not a url");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn parses_plain_and_wrapped_lists() {
        let body = r#"[{"position":"Dev","jobUrl":"https://jobs/1","salary":50000}]"#;
        let postings = parse_response(StatusCode::OK, body).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].salary.as_deref(), Some("50000"));
        assert_eq!(postings[0].company, None);

        let body = r#"{"jobs":[{"position":"A"},{"position":"B"}]}"#;
        let postings = parse_response(StatusCode::OK, body).unwrap();
        let titles: Vec<_> = postings.iter().filter_map(|p| p.position.as_deref()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn reported_error_keeps_message_verbatim() {
        let err = parse_response(StatusCode::OK, r#"{"error":"LinkedIn blocked"}"#).unwrap_err();
        assert_eq!(err.to_string(), "LinkedIn blocked");
    }

    #[test]
    fn error_status_uses_body_message() {
        let err = parse_response(StatusCode::TOO_MANY_REQUESTS, r#"{"message":"slow down"}"#)
            .unwrap_err();
        match err {
            ProviderError::Status { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_response(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        assert_eq!(err.to_string(), "Provider returned status 502: upstream down");
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
