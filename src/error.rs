//! Error types for client configuration.
//!
//! This module contains the error type returned while building an
//! [`SpApiConfig`](crate::SpApiConfig) and its validated newtypes.
//!
//! # Example
//!
//! ```rust
//! use sp_api_shipping::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant carries a message that says what was wrong and what a
/// valid value looks like.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid LWA access token.")]
    EmptyAccessToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://sellingpartnerapi-na.amazon.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Marketplace code is not recognized.
    #[error("Unknown marketplace '{code}'. Expected a two-letter country code such as 'US' or 'DE'.")]
    UnknownMarketplace {
        /// The unrecognized marketplace code.
        code: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
