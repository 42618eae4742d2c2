//! # Amazon Selling Partner API: Shipping
//!
//! A Rust client for the Amazon Selling Partner API (SP-API) Shipping v1
//! and Easy Ship operations.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SpApiConfig`] and [`SpApiConfigBuilder`]
//! - Marketplace and region tables with production and sandbox endpoints
//! - A declarative endpoint registry with validated path templating
//! - [`ShippingClient`] with one async method per remote operation
//! - A uniform [`ApiResponse`] wrapper with payload, errors and rate limit
//! - Typed request and response models
//!
//! Obtaining and refreshing the LWA access token is left to the caller.
//! Requests are sent once; throttling is reported, not retried.
//!
//! ## Quick Start
//!
//! ```rust
//! use sp_api_shipping::{AccessToken, Marketplace, Region, SpApiConfig};
//!
//! let config = SpApiConfig::builder()
//!     .access_token(AccessToken::new("Atza|your-access-token").unwrap())
//!     .marketplace(Marketplace::UK)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.region(), Region::Europe);
//! assert_eq!(config.endpoint(), "https://sellingpartnerapi-eu.amazon.com");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use sp_api_shipping::ShippingClient;
//! use sp_api_shipping::api::shipping::models::Account;
//!
//! let client = ShippingClient::new(&config)?;
//!
//! let response = client.get_account(None).await?;
//! let account: Account = response.payload_as()?;
//! println!("Shipper account {}", account.account_id);
//! ```
//!
//! ## Error Handling
//!
//! Every client method returns [`ApiError`]. HTTP failures are wrapped in
//! [`HttpError`], which exposes the status code and the parsed `errors`
//! array of the response:
//!
//! ```rust,ignore
//! use sp_api_shipping::{ApiError, HttpError};
//!
//! match client.cancel_shipment("89108749065090").await {
//!     Ok(_) => println!("Canceled"),
//!     Err(ApiError::Http(HttpError::Response(e))) => {
//!         for detail in &e.errors {
//!             println!("{}: {}", detail.code, detail.message);
//!         }
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events and never
//! installs a subscriber. Client construction and each dispatched operation
//! log at `debug`; throttled responses log at `warn`.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, Marketplace, Region, SpApiConfig, SpApiConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorDetail, ApiResponse, DataType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponseError, InvalidHttpRequestError,
};

// Re-export API types
pub use api::{ApiError, Endpoint, Operation, ShippingClient, UsagePlan};
