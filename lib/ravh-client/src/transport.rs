//! Authenticated HTTP transport to the control plane

use json_patch::Patch;
use ravh_core::patch::JSON_PATCH_CONTENT_TYPE;
use ravh_core::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport configuration
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Budget for a single HTTP call, including reading the body
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// Issues bearer-authenticated requests against the control plane.
///
/// Only 200 and 201 count as success. Failures are returned as they
/// happen; nothing is retried.
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    /// Create a transport with the default 10 second timeout
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(token, TransportConfig::default())
    }

    pub fn with_config(token: &str, config: TransportConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| {
                ClientError::InvalidConfiguration("token is not a valid header value".to_string())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the raw body
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, url, self.client.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST `body` as JSON
    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<()> {
        let body = serde_json::to_vec(body)?;
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        self.send(Method::POST, url, request).await?;
        Ok(())
    }

    /// PATCH with an RFC 6902 document
    pub async fn patch(&self, url: &str, patch: &Patch) -> Result<()> {
        let body = serde_json::to_vec(patch)?;
        let request = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .body(body);

        self.send(Method::PATCH, url, request).await?;
        Ok(())
    }

    pub async fn delete(&self, url: &str) -> Result<()> {
        self.send(Method::DELETE, url, self.client.delete(url)).await?;
        Ok(())
    }

    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<Response> {
        debug!(%method, url, "Sending request");

        let response = request.send().await?;
        let status = response.status();

        if Self::is_success(status) {
            debug!(%method, url, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%method, url, status = status.as_u16(), "Control plane rejected request");

        Err(ClientError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    fn is_success(status: StatusCode) -> bool {
        status == StatusCode::OK || status == StatusCode::CREATED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_success_statuses() {
        assert!(Transport::is_success(StatusCode::OK));
        assert!(Transport::is_success(StatusCode::CREATED));
        assert!(!Transport::is_success(StatusCode::ACCEPTED));
        assert!(!Transport::is_success(StatusCode::NO_CONTENT));
        assert!(!Transport::is_success(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_token_must_be_header_safe() {
        assert!(matches!(
            Transport::new("bad\ntoken"),
            Err(ClientError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/things"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("s3cret").unwrap();
        let body = transport
            .get(&format!("{}/things", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, b"hello");
    }

    #[tokio::test]
    async fn test_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string(r#"{"error":"unavailable"}"#))
            .mount(&server)
            .await;

        let transport = Transport::new("t").unwrap();
        let err = transport
            .get(&format!("{}/things", server.uri()))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("503"), "{}", message);
        assert!(message.contains("unavailable"), "{}", message);
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_accepted_is_not_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let transport = Transport::new("t").unwrap();
        let err = transport
            .delete(&format!("{}/things/a", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(202));
    }

    #[tokio::test]
    async fn test_post_sends_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "name": "a" })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("t").unwrap();
        transport
            .post(&format!("{}/things", server.uri()), &json!({ "name": "a" }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(header("content-type", JSON_PATCH_CONTENT_TYPE))
            .and(body_json(json!([{ "op": "replace", "path": "/spec/cidr", "value": "10.0.1.0/24" }])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let patch: Patch = serde_json::from_value(json!([
            { "op": "replace", "path": "/spec/cidr", "value": "10.0.1.0/24" }
        ]))
        .unwrap();

        let transport = Transport::new("t").unwrap();
        transport
            .patch(&format!("{}/things/a", server.uri()), &patch)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let transport = Transport::with_config(
            "t",
            TransportConfig {
                timeout: Duration::from_millis(50),
            },
        )
        .unwrap();

        let err = transport
            .get(&format!("{}/slow", server.uri()))
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{:?}", err);
    }
}
