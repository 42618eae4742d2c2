//! Request dispatch shared by the API clients.
//!
//! Resolves an [`Endpoint`] and its arguments into an [`HttpRequest`] and
//! sends it through the [`HttpClient`].

use std::collections::HashMap;

use crate::api::endpoint::{Endpoint, PayloadKind};
use crate::api::ApiError;
use crate::clients::{ApiResponse, DataType, HttpClient, HttpRequest};

/// Caller arguments forwarded to an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Arguments {
    /// Query parameters for GET and DELETE endpoints.
    Query(Option<HashMap<String, String>>),
    /// A JSON body for POST, PUT and PATCH endpoints.
    Body(Option<serde_json::Value>),
}

impl Arguments {
    /// Serializes `body` into body arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `body` cannot be represented as JSON.
    pub fn body<B: serde::Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        Ok(Self::Body(Some(serde_json::to_value(body)?)))
    }

    const fn kind(&self) -> PayloadKind {
        match self {
            Self::Query(_) => PayloadKind::Query,
            Self::Body(_) => PayloadKind::Body,
        }
    }
}

/// Sends one call to `endpoint`.
///
/// Body endpoints always send a JSON object: a missing or `null` body
/// becomes `{}`.
///
/// # Errors
///
/// - Path parameter errors from [`fill_path`](crate::api::fill_path)
/// - [`ApiError::ArgumentKind`] if `args` do not match the endpoint
/// - [`ApiError::Http`] for request validation, network and response errors
pub async fn dispatch(
    http_client: &HttpClient,
    endpoint: &Endpoint,
    path_params: &[&str],
    args: Arguments,
) -> Result<ApiResponse, ApiError> {
    let path = endpoint.path(path_params)?;

    if args.kind() != endpoint.payload_kind() {
        return Err(ApiError::ArgumentKind {
            operation: endpoint.name,
            expected: endpoint.payload_kind(),
        });
    }

    let mut builder = HttpRequest::builder(endpoint.http_method, &path);
    match args {
        Arguments::Query(Some(query)) => builder = builder.query(query),
        Arguments::Query(None) => {}
        Arguments::Body(body) => {
            let body = match body {
                None | Some(serde_json::Value::Null) => serde_json::json!({}),
                Some(value) => value,
            };
            builder = builder.body(body).body_type(DataType::Json);
        }
    }

    let request = builder.build().map_err(|e| ApiError::Http(e.into()))?;

    tracing::debug!(
        operation = endpoint.name,
        method = endpoint.http_method.as_str(),
        path = %path,
        "Dispatching Selling Partner API request"
    );

    http_client.request(request).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::UsagePlan;
    use crate::clients::HttpMethod;
    use crate::config::{AccessToken, BaseUrl, SpApiConfig};
    use serde_json::json;

    const GET_ENDPOINT: Endpoint = Endpoint::new(
        "get_account",
        HttpMethod::Get,
        "/shipping/v1/account",
        &[],
        UsagePlan::new(5.0, 15),
    );

    fn unreachable_client() -> HttpClient {
        // Nothing listens here; every test below fails before sending.
        let config = SpApiConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .endpoint(BaseUrl::new("http://127.0.0.1:9").unwrap())
            .build()
            .unwrap();
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_arguments_body_serializes() {
        let args = Arguments::body(&json!({"rateId": "r1"})).unwrap();
        assert_eq!(args, Arguments::Body(Some(json!({"rateId": "r1"}))));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_body_for_query_endpoint() {
        let client = unreachable_client();
        let result = dispatch(&client, &GET_ENDPOINT, &[], Arguments::Body(None)).await;

        assert!(matches!(
            result,
            Err(ApiError::ArgumentKind {
                operation: "get_account",
                expected: PayloadKind::Query
            })
        ));
    }

    #[tokio::test]
    async fn test_dispatch_validates_path_before_sending() {
        let client = unreachable_client();
        let result = dispatch(&client, &GET_ENDPOINT, &["x"], Arguments::Query(None)).await;

        assert!(matches!(result, Err(ApiError::PathParameterCount { .. })));
    }
}
