//! The GET probe and its captured observation.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use crate::error::CheckError;

/// Everything a check may assert on from one HTTP response.
///
/// Captured in full when the response arrives and consumed immediately by
/// the issuing check; nothing is retained across checks.
#[derive(Debug)]
pub struct Observation {
    url: String,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Observation {
    /// Assemble an observation (used by [`Probe::get`] and by tests).
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            status,
            headers,
            body: body.into(),
        }
    }

    /// The URL this observation came from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Response status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Case-insensitive header lookup; `None` when absent or non-UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Minimal GET client over the deployed resources.
///
/// One request per call, no retries, no custom headers, no non-GET verbs.
/// Timeouts are whatever the underlying client defaults to.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    client: reqwest::Client,
}

impl Probe {
    /// Create a probe with default client settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `{base}{path}` and capture the response.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Transport`] when the request cannot be
    /// completed (DNS failure, connection refused, timeout) or the body
    /// cannot be read.
    pub async fn get(&self, base: &str, path: &str) -> Result<Observation, CheckError> {
        let url = format!("{base}{path}");
        tracing::debug!(%url, "probing");

        let transport = |source: reqwest::Error| CheckError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(transport)?;

        tracing::debug!(%url, %status, body_len = body.len(), "observed");
        Ok(Observation::new(url, status, headers, body))
    }
}
