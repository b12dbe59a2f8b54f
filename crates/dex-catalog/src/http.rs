//! reqwest-backed transport.
//!
//! Status-code checks are centralized in [`check_response`] so the lookup
//! modules only deal with URLs and payload shapes.

use std::time::Duration;

use async_trait::async_trait;
use dex_config::ApiConfig;

use crate::error::{FetchStep, TransportError};
use crate::transport::CatalogTransport;

/// Production [`CatalogTransport`] over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the configured user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` if the client cannot be built
    /// (e.g. TLS backend initialisation failure).
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::with_settings(&config.user_agent, config.timeout())
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get_json(
        &self,
        url: &str,
        step: FetchStep,
    ) -> Result<serde_json::Value, TransportError> {
        tracing::debug!(%step, url, "catalog GET");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| TransportError::Http { step, source })?;
        let resp = check_response(resp, step).await?;
        read_json(resp, step).await
    }
}

/// Read a successful response body as JSON.
///
/// A body that cannot be read is [`TransportError::Http`]; a body that is not
/// JSON is [`TransportError::Decode`].
async fn read_json(
    resp: reqwest::Response,
    step: FetchStep,
) -> Result<serde_json::Value, TransportError> {
    let body = resp
        .bytes()
        .await
        .map_err(|source| TransportError::Http { step, source })?;
    serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
        step,
        reason: e.to_string(),
    })
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Any other status becomes
/// [`TransportError::Api`] carrying the status code and response body.
pub async fn check_response(
    resp: reqwest::Response,
    step: FetchStep,
) -> Result<reqwest::Response, TransportError> {
    if !resp.status().is_success() {
        return Err(TransportError::Api {
            step,
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp, FetchStep::List).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found_keeps_body() {
        let resp = mock_response(404, "Not Found");
        let err = check_response(resp, FetchStep::RecordById)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::Api {
                step: FetchStep::RecordById,
                status: 404,
                ref message,
            } if message == "Not Found"
        ));
    }

    #[tokio::test]
    async fn check_response_rate_limit_is_plain_api_error() {
        let resp = mock_response(429, "");
        let err = check_response(resp, FetchStep::TotalCount)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Api { status: 429, .. }));
        assert_eq!(err.step(), FetchStep::TotalCount);
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(503, "upstream down");
        let err = check_response(resp, FetchStep::Species).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch Pokemon species details: API error (503): upstream down"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let err = read_json(mock_response(200, "hello"), FetchStep::Species)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::Decode {
                step: FetchStep::Species,
                ..
            }
        ));
        assert!(
            err.to_string()
                .starts_with("Failed to fetch Pokemon species details: unexpected response")
        );
    }

    #[tokio::test]
    async fn json_body_is_parsed() {
        let value = read_json(mock_response(200, r#"{"count": 1302}"#), FetchStep::TotalCount)
            .await
            .unwrap();
        assert_eq!(value["count"], 1302);
    }

    #[test]
    fn transport_builds_from_default_config() {
        assert!(HttpTransport::new(&ApiConfig::default()).is_ok());
    }
}
