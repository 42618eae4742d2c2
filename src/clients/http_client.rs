//! HTTP client for Selling Partner API communication.
//!
//! This module provides the [`HttpClient`] type that performs the actual
//! network call for every client method.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{parse_errors, ApiResponse};
use crate::config::SpApiConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the LWA access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-amz-access-token";

/// HTTP client for making requests to the Selling Partner API.
///
/// The client handles:
/// - Base URI resolution from the configured region, sandbox flag or override
/// - Default headers including User-Agent and the access token
/// - Response parsing into [`ApiResponse`]
///
/// Each request is attempted once. Throttled (429) responses are logged and
/// returned to the caller as errors.
///
/// # Example
///
/// ```rust,ignore
/// use sp_api_shipping::{SpApiConfig, AccessToken};
/// use sp_api_shipping::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = SpApiConfig::builder()
///     .access_token(AccessToken::new("Atza|token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/shipping/v1/account")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://sellingpartnerapi-na.amazon.com`).
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &SpApiConfig) -> Result<Self, HttpError> {
        let base_uri = config.endpoint().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SP-API Shipping Rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!(
            base_uri = %base_uri,
            marketplace = %config.marketplace(),
            "Created Selling Partner API HTTP client"
        );

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Selling Partner API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // Gateways answer 5xx with HTML; keep it for diagnostics
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = ApiResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        if code == 429 {
            tracing::warn!(
                path = %request.path,
                rate_limit = ?response.rate_limit,
                request_id = ?response.request_id(),
                "Selling Partner API throttled the request"
            );
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            errors: parse_errors(&response.body),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response into the JSON message of [`HttpResponseError`].
    fn serialize_error(response: &ApiResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl, Marketplace};
    use serde_json::json;

    fn create_test_config() -> SpApiConfig {
        SpApiConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_region_endpoint() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://sellingpartnerapi-na.amazon.com");

        let config = SpApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .marketplace(Marketplace::UK)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "https://sellingpartnerapi-eu.amazon.com");
    }

    #[test]
    fn test_client_construction_with_endpoint_override() {
        let config = SpApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .endpoint(BaseUrl::new("http://127.0.0.1:3000").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("SP-API Shipping Rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = SpApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_access_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_serialize_error_includes_errors_and_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-amzn-requestid".to_string(), vec!["req-1".to_string()]);
        let response = ApiResponse::new(
            400,
            headers,
            json!({"errors": [{"code": "InvalidInput", "message": "bad"}]}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["errors"][0]["code"], "InvalidInput");
        assert!(parsed["error_reference"]
            .as_str()
            .unwrap()
            .contains("req-1"));
    }

    #[test]
    fn test_serialize_error_without_details_is_empty_object() {
        let response = ApiResponse::new(500, HashMap::new(), json!({}));
        assert_eq!(HttpClient::serialize_error(&response), "{}");
    }
}
