//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! One instance is built per run and shared by every scenario, so connection
//! reuse follows reqwest's defaults.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::{Duration, Instant};

use petstore_application::ports::{HttpClient, HttpClientError};
use petstore_domain::{
    request::{HttpMethod, RequestSpec},
    response::ResponseSpec,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use tracing::debug;

use crate::http::{BodyBuildError, BuiltBody, build_body};

const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("petstore-suite/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ReqwestHttpClient`].
#[derive(Debug, Clone)]
pub struct ReqwestHttpClientBuilder {
    base_url: Url,
    timeout: Option<Duration>,
    fixtures_dir: Option<PathBuf>,
}

impl ReqwestHttpClientBuilder {
    /// Sets a per-request timeout. Without one, transport defaults apply.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the directory relative fixture paths resolve against.
    #[must_use]
    pub fn fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    /// Builds the client.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "petstore-suite/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn build(self) -> Result<ReqwestHttpClient, HttpClientError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(ReqwestHttpClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            fixtures_dir: self.fixtures_dir,
        })
    }
}

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` together with the base URL every request
/// resolves against.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
    fixtures_dir: Option<PathBuf>,
}

impl ReqwestHttpClient {
    /// Starts building a client for `base_url`.
    #[must_use]
    pub const fn builder(base_url: Url) -> ReqwestHttpClientBuilder {
        ReqwestHttpClientBuilder {
            base_url,
            timeout: None,
            fixtures_dir: None,
        }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps body building failures to setup errors.
    fn map_body_error(error: BodyBuildError) -> HttpClientError {
        match error {
            BodyBuildError::FileNotFound { path } => HttpClientError::Fixture {
                path,
                message: "file not found".to_string(),
            },
            BodyBuildError::FileReadError { path, message } => {
                HttpClientError::Fixture { path, message }
            }
            BodyBuildError::InvalidConfig { message }
            | BodyBuildError::SerializationError { message } => {
                HttpClientError::InvalidBody(message)
            }
        }
    }

    /// Maps reqwest errors to port `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return timeout_error(self.timeout, error);
        }

        let host = error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let message = format!("{error:?}");
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(error.to_string());
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error.to_string())
    }
}

/// A timeout only carries a duration when one was configured.
fn timeout_error(timeout: Option<Duration>, error: &dyn std::fmt::Display) -> HttpClientError {
    match timeout {
        Some(timeout) => HttpClientError::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        },
        None => HttpClientError::ConnectionFailed(format!("timed out: {error}")),
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        let id = request.id;
        let method = request.method;
        let url = request.resolve_url(&self.base_url);
        let body = request.body.clone();

        Box::pin(async move {
            let url = url.map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

            // Fixtures are read before anything goes on the wire.
            let built = build_body(&body, self.fixtures_dir.as_deref())
                .await
                .map_err(Self::map_body_error)?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url.clone());

            builder = builder.header(ACCEPT, "application/json");
            if let Some(content_type) = built.content_type() {
                builder = builder.header(CONTENT_TYPE, content_type);
            }

            builder = match built {
                BuiltBody::None => builder,
                BuiltBody::Text { content, .. } => builder.body(content),
                BuiltBody::Multipart(form) => builder.multipart(form),
            };

            debug!(request_id = %id, %method, %url, "sending request");
            let start = Instant::now();

            let response = builder.send().await.map_err(|e| self.map_error(&e))?;

            let status = response.status().as_u16();
            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| {
                    HttpClientError::ConnectionFailed(format!("failed to read body: {e}"))
                })?
                .to_vec();

            let duration = start.elapsed();
            debug!(
                request_id = %id,
                status,
                elapsed_ms = duration.as_millis(),
                size = body_bytes.len(),
                "received response"
            );

            Ok(ResponseSpec::new(status, response_headers, body_bytes, duration))
        })
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use petstore_domain::request::{FormDataField, RequestBody};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ReqwestHttpClient {
        let base = Url::parse(&format!("{}/v2", server.base_url())).unwrap();
        ReqwestHttpClient::builder(base).build().unwrap()
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Put),
            Method::PUT
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_base_url_is_kept() {
        let base = Url::parse("https://petstore.swagger.io/v2").unwrap();
        let client = ReqwestHttpClient::builder(base)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://petstore.swagger.io/v2");
    }

    #[test]
    fn test_missing_fixture_maps_to_setup_error() {
        let err = ReqwestHttpClient::map_body_error(BodyBuildError::FileNotFound {
            path: "/fixtures/image.jpg".to_string(),
        });
        assert!(err.is_setup_error());
    }

    #[tokio::test]
    async fn test_post_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/v2/pet/")
                    .header("content-type", "application/json")
                    .header("accept", "application/json")
                    .json_body(json!({"id": 999, "name": "Doggie"}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"id": 999, "name": "Doggie"}));
            })
            .await;

        let request = RequestSpec::post("add pet", "/pet/")
            .with_body(RequestBody::json(json!({"id": 999, "name": "Doggie"})));
        let response = client_for(&server).execute(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(
            response.get_header("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            response.body_as_json().unwrap(),
            json!({"id": 999, "name": "Doggie"})
        );
    }

    #[tokio::test]
    async fn test_get_with_path_and_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::GET)
                    .path("/v2/user/login")
                    .query_param("username", "john_doe")
                    .query_param("password", "123456789");
                then.status(200).json_body(json!({"message": "logged in"}));
            })
            .await;

        let request = RequestSpec::get("login", "/user/login")
            .with_query("username", "john_doe")
            .with_query("password", "123456789");
        let response = client_for(&server).execute(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_post_form_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/v2/pet/999")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body("name=Puppy&status=available");
                then.status(200);
            })
            .await;

        let request = RequestSpec::post("form", "/pet/{petId}")
            .with_path_param("petId", 999)
            .with_body(RequestBody::form([("name", "Puppy"), ("status", "available")]));
        let response = client_for(&server).execute(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_missing_fixture_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST);
                then.status(200);
            })
            .await;
        let fixtures = tempfile::tempdir().unwrap();
        let base = Url::parse(&format!("{}/v2", server.base_url())).unwrap();
        let client = ReqwestHttpClient::builder(base)
            .fixtures_dir(fixtures.path())
            .build()
            .unwrap();

        let request = RequestSpec::post("upload", "/pet/{petId}/uploadImage")
            .with_path_param("petId", 999)
            .with_body(RequestBody::form_data(vec![FormDataField::file(
                "file",
                "image.jpg",
            )]));
        let err = client.execute(&request).await.expect_err("fixture is missing");

        assert!(matches!(err, HttpClientError::Fixture { .. }));
        assert_eq!(mock.calls_async().await, 0);
    }

    #[tokio::test]
    async fn test_multipart_upload_on_the_wire() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/v2/pet/999/uploadImage")
                    .header("accept", "application/json")
                    .header_matches("content-type", "multipart/form-data; boundary=.*")
                    .body_includes(r#"name="file"; filename="image.jpg""#)
                    .body_includes("not really a jpeg");
                then.status(200)
                    .json_body(json!({"code": 200, "type": "unknown", "message": "uploaded"}));
            })
            .await;
        let fixtures = tempfile::tempdir().unwrap();
        std::fs::write(fixtures.path().join("image.jpg"), "not really a jpeg").unwrap();
        let base = Url::parse(&format!("{}/v2", server.base_url())).unwrap();
        let client = ReqwestHttpClient::builder(base)
            .fixtures_dir(fixtures.path())
            .build()
            .unwrap();

        let request = RequestSpec::post("upload", "/pet/{petId}/uploadImage")
            .with_path_param("petId", 999)
            .with_body(RequestBody::form_data(vec![FormDataField::file(
                "file",
                "image.jpg",
            )]));
        let response = client.execute(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_timeout_reports_configured_duration() {
        let err = timeout_error(Some(Duration::from_secs(5)), &"operation timed out");
        assert_eq!(err, HttpClientError::Timeout { timeout_ms: 5000 });
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }

    #[test]
    fn test_timeout_without_configured_duration() {
        let err = timeout_error(None, &"operation timed out");
        assert_eq!(
            err,
            HttpClientError::ConnectionFailed("timed out: operation timed out".to_string())
        );
        assert!(!err.to_string().contains("0 ms"));
        assert!(!err.is_setup_error());
    }

    #[tokio::test]
    async fn test_missing_path_param_is_invalid_url() {
        let base = Url::parse("http://127.0.0.1:9/v2").unwrap();
        let client = ReqwestHttpClient::builder(base).build().unwrap();

        let request = RequestSpec::get("pet", "/pet/{petId}");
        let err = client.execute(&request).await.expect_err("param is missing");

        assert!(matches!(err, HttpClientError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let base = Url::parse("http://127.0.0.1:1/v2").unwrap();
        let client = ReqwestHttpClient::builder(base)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let request = RequestSpec::get("inventory", "/store/inventory");
        let err = client.execute(&request).await.expect_err("nothing listens on port 1");

        assert!(!err.is_setup_error());
    }
}
