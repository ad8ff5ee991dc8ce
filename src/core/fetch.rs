use crate::domain::model::{json_kind, JobRecord};
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_API_ENDPOINT: &str = "https://remotive.io/api/remote-jobs";
pub const DEFAULT_SEARCH_TERM: &str = "data";

const JOBS_FIELD: &str = "jobs";

/// Issues the listings request and pulls the `jobs` array out of the body.
pub struct JobFetcher {
    client: Client,
    endpoint: String,
    search: String,
}

impl JobFetcher {
    pub fn new(endpoint: impl Into<String>, search: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, search)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            search: search.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Vec<JobRecord>> {
        tracing::debug!(
            "Making API request to: {}?search={}",
            self.endpoint,
            self.search
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("search", self.search.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::HttpStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());

        let payload: Value = serde_json::from_slice(&body)?;
        extract_jobs(payload)
    }
}

/// 從回應中取出 `jobs` 陣列，每個元素都必須是物件
pub fn extract_jobs(payload: Value) -> Result<Vec<JobRecord>> {
    let jobs = match payload {
        Value::Object(mut body) => body.remove(JOBS_FIELD),
        _ => None,
    }
    .ok_or_else(|| EtlError::MissingFieldError {
        field: JOBS_FIELD.to_string(),
    })?;

    match jobs {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| JobRecord::from_value(index, item))
            .collect(),
        other => Err(EtlError::InvalidJobsError {
            found: json_kind(&other).to_string(),
        }),
    }
}
