//! HTTP response types.
//!
//! This module provides [`ApiResponse`], the uniform wrapper every client
//! method returns, and [`ApiErrorDetail`] for entries of the SP-API
//! `errors` array.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One entry of the `errors` array in a Selling Partner API response.
///
/// # Example
///
/// ```rust
/// use sp_api_shipping::clients::ApiErrorDetail;
///
/// let detail: ApiErrorDetail = serde_json::from_str(
///     r#"{"code":"InvalidInput","message":"Invalid shipmentId","details":""}"#,
/// ).unwrap();
/// assert_eq!(detail.code, "InvalidInput");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// An error code that identifies the type of error.
    #[serde(default)]
    pub code: String,
    /// A message that describes the error condition.
    #[serde(default)]
    pub message: String,
    /// Additional details that can help the caller understand or fix the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A response from the Selling Partner API.
///
/// Contains the status code, headers and body, plus the rate limit Amazon
/// advertises in `x-amzn-RateLimit-Limit`.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Requests per second allowed for this operation (from `x-amzn-RateLimit-Limit`).
    pub rate_limit: Option<f64>,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`, parsing the rate limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = headers
            .get("x-amzn-ratelimit-limit")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request id Amazon assigned to this call, if present.
    ///
    /// Include it when reporting problems to Amazon support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-amzn-requestid")
            .or_else(|| self.header("x-amz-request-id"))
    }

    /// Returns the `payload` member of the response envelope.
    ///
    /// Responses that are not wrapped in an envelope are returned whole.
    #[must_use]
    pub fn payload(&self) -> &serde_json::Value {
        self.body.get("payload").unwrap_or(&self.body)
    }

    /// Deserializes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the payload does not match `T`.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(self.payload())
    }

    /// Returns the entries of the `errors` array, if any.
    ///
    /// Entries that do not have the expected shape are skipped.
    #[must_use]
    pub fn errors(&self) -> Vec<ApiErrorDetail> {
        parse_errors(&self.body)
    }

    /// Returns the pagination token, if the response has one.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        let payload = self.payload();
        payload
            .get("nextToken")
            .or_else(|| payload.get("NextToken"))
            .or_else(|| self.body.get("nextToken"))
            .or_else(|| {
                self.body
                    .get("pagination")
                    .and_then(|pagination| pagination.get("nextToken"))
            })
            .and_then(serde_json::Value::as_str)
    }
}

/// Parses the `errors` array of a response body.
pub(crate) fn parse_errors(body: &serde_json::Value) -> Vec<ApiErrorDetail> {
    body.get("errors")
        .and_then(serde_json::Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| ApiErrorDetail::deserialize(e).ok())
                .collect()
        })
        .unwrap_or_default()
}
