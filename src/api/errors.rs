//! Error type for API client operations.
//!
//! [`ApiError`] wraps [`HttpError`] and adds the failures that can happen
//! before a request is sent: missing path parameters and bodies that do not
//! serialize.
//!
//! # Example
//!
//! ```rust,ignore
//! use sp_api_shipping::api::ApiError;
//!
//! match client.get_shipment("", None).await {
//!     Err(ApiError::MissingPathParameter { name, .. }) => {
//!         println!("{name} is required");
//!     }
//!     Err(ApiError::Http(e)) if e.is_throttled() => {
//!         println!("Throttled, slow down");
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

use thiserror::Error;

use crate::api::endpoint::PayloadKind;
use crate::clients::HttpError;

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required path parameter was empty.
    #[error("Missing required path parameter '{name}' for {operation}.")]
    MissingPathParameter {
        /// The operation being called.
        operation: &'static str,
        /// The name of the missing parameter.
        name: &'static str,
    },

    /// The number of path parameters does not match the endpoint template.
    #[error("{operation} expects {expected} path parameter(s), got {actual}.")]
    PathParameterCount {
        /// The operation being called.
        operation: &'static str,
        /// Number of placeholders in the endpoint template.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Arguments were supplied in a form the endpoint does not accept.
    #[error("{operation} forwards its arguments as {expected:?}.")]
    ArgumentKind {
        /// The operation being called.
        operation: &'static str,
        /// How the endpoint forwards arguments.
        expected: PayloadKind,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_missing_path_parameter_message() {
        let error = ApiError::MissingPathParameter {
            operation: "get_shipment",
            name: "shipmentId",
        };
        let message = error.to_string();
        assert!(message.contains("shipmentId"));
        assert!(message.contains("get_shipment"));
    }

    #[test]
    fn test_path_parameter_count_message() {
        let error = ApiError::PathParameterCount {
            operation: "retrieve_shipping_label",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "retrieve_shipping_label expects 2 path parameter(s), got 1."
        );
    }

    #[test]
    fn test_wraps_http_errors() {
        let error: ApiError = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":[{"code":"NotFound"}]}"#.to_string(),
            errors: vec![],
            error_reference: None,
        })
        .into();

        assert_eq!(error.status(), Some(404));
        assert!(error.to_string().contains("NotFound"));

        let error: ApiError =
            HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType).into();
        assert_eq!(error.status(), None);
    }
}
