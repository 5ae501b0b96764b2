//! HTTP client for the alignment service
//!
//! Jobs are submitted with `POST {base}/submit` (JSON [`PairwiseRequest`],
//! answered by [`SubmitResponse`]) and polled with
//! `GET {base}/results?uuid={job}` (answered by [`PollResponse`]).

use strux_settings::{id, Settings};

use crate::error::{AlignError, AlignResult};
use crate::service::{AlignmentService, ServiceFuture};
use crate::wire::{JobId, PairwiseRequest, PollResponse, SubmitResponse};

/// User-Agent header for HTTP requests
const USER_AGENT: &str = concat!("strux/", env!("CARGO_PKG_VERSION"));

/// [`AlignmentService`] backed by a remote HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpAlignmentService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAlignmentService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpAlignmentService {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service at the `alignment_service_url` setting
    pub fn from_settings(settings: &Settings) -> AlignResult<Self> {
        let url = settings.get_string(id::alignment_service_url);
        if url.is_empty() {
            return Err(AlignError::InvalidRequest(
                "alignment_service_url is not set".into(),
            ));
        }
        Ok(Self::new(url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn submit_url(&self) -> String {
        format!("{}/submit", self.base_url)
    }

    fn results_url(&self) -> String {
        format!("{}/results", self.base_url)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> AlignResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(AlignError::transport(format!(
            "HTTP error {}: {}",
            status.as_u16(),
            url
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AlignError::InvalidResponse(e.to_string()))
}

impl AlignmentService for HttpAlignmentService {
    fn submit<'a>(&'a self, request: &'a PairwiseRequest) -> ServiceFuture<'a, JobId> {
        Box::pin(async move {
            let url = self.submit_url();
            let response = self
                .client
                .post(&url)
                .header("User-Agent", USER_AGENT)
                .json(request)
                .send()
                .await
                .map_err(|e| AlignError::transport(e.to_string()))?;
            let body: SubmitResponse = read_json(response, &url).await?;
            Ok(body.job_id)
        })
    }

    fn poll<'a>(&'a self, job: &'a JobId) -> ServiceFuture<'a, PollResponse> {
        Box::pin(async move {
            let url = self.results_url();
            let response = self
                .client
                .get(&url)
                .query(&[("uuid", job.as_str())])
                .header("User-Agent", USER_AGENT)
                .send()
                .await
                .map_err(|e| AlignError::transport(e.to_string()))?;
            read_json(response, &url).await
        })
    }
}
