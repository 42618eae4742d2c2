//! HTTP client types for Selling Partner API communication.
//!
//! This module is the request dispatch layer shared by every API client:
//! it turns a resolved path, HTTP method and either query parameters or a
//! JSON body into a network call, and wraps the result in an [`ApiResponse`].
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ApiResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Errors raised while sending a request
//!
//! # Example
//!
//! ```rust,ignore
//! use sp_api_shipping::{SpApiConfig, AccessToken};
//! use sp_api_shipping::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = SpApiConfig::builder()
//!     .access_token(AccessToken::new("Atza|token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/shipping/v1/account")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiErrorDetail, ApiResponse};
