//! Endpoint declarations and path templating.
//!
//! Every client method is backed by one [`Endpoint`]: a URL template, the
//! HTTP method, the ordered names of its path parameters and the usage plan
//! Amazon documents for it.
//!
//! # Path Templates
//!
//! Templates use positional `{}` placeholders that are filled left to right:
//!
//! ```rust
//! use sp_api_shipping::api::{Endpoint, UsagePlan, fill_path};
//! use sp_api_shipping::HttpMethod;
//!
//! const GET_SHIPMENT: Endpoint = Endpoint::new(
//!     "get_shipment",
//!     HttpMethod::Get,
//!     "/shipping/v1/shipments/{}",
//!     &["shipmentId"],
//!     UsagePlan::new(5.0, 15),
//! );
//!
//! let path = fill_path(&GET_SHIPMENT, &["89108749065090"]).unwrap();
//! assert_eq!(path, "/shipping/v1/shipments/89108749065090");
//! ```

use std::time::Duration;

use crate::api::ApiError;
use crate::clients::HttpMethod;

/// Placeholder token in endpoint templates.
const PLACEHOLDER: &str = "{}";

/// Rate and burst Amazon documents for an operation.
///
/// These numbers are advisory; nothing in this crate enforces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsagePlan {
    /// Sustained requests per second.
    pub rate: f64,
    /// Maximum requests accepted in a burst.
    pub burst: u32,
}

impl UsagePlan {
    /// Creates a new usage plan.
    #[must_use]
    pub const fn new(rate: f64, burst: u32) -> Self {
        Self { rate, burst }
    }

    /// Returns the spacing between requests that keeps a caller at `rate`.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        if self.rate <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(1.0 / self.rate)
    }
}

/// How an endpoint forwards caller arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// As URL query parameters.
    Query,
    /// As a JSON request body.
    Body,
}

/// A remote operation: URL template, HTTP method and metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    /// The snake_case operation name.
    pub name: &'static str,
    /// The HTTP method of the operation.
    pub http_method: HttpMethod,
    /// The URL template with `{}` placeholders.
    pub template: &'static str,
    /// Path parameter names, in placeholder order.
    pub path_params: &'static [&'static str],
    /// Documented rate limits.
    pub usage_plan: UsagePlan,
}

impl Endpoint {
    /// Creates a new `Endpoint`.
    ///
    /// This is a `const fn` so endpoints can be declared as constants.
    #[must_use]
    pub const fn new(
        name: &'static str,
        http_method: HttpMethod,
        template: &'static str,
        path_params: &'static [&'static str],
        usage_plan: UsagePlan,
    ) -> Self {
        Self {
            name,
            http_method,
            template,
            path_params,
            usage_plan,
        }
    }

    /// Returns how this endpoint forwards caller arguments.
    ///
    /// GET and DELETE send query parameters; every other method sends a body.
    #[must_use]
    pub const fn payload_kind(&self) -> PayloadKind {
        match self.http_method {
            HttpMethod::Get | HttpMethod::Delete => PayloadKind::Query,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => PayloadKind::Body,
        }
    }

    /// Returns the number of `{}` placeholders in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }

    /// Resolves the template with the given path parameter values.
    ///
    /// # Errors
    ///
    /// See [`fill_path`].
    pub fn path(&self, values: &[&str]) -> Result<String, ApiError> {
        fill_path(self, values)
    }
}

/// Substitutes path parameter values into an endpoint template.
///
/// Values are percent-encoded so that a value can never add a path segment.
///
/// # Errors
///
/// - [`ApiError::PathParameterCount`] if `values` does not have one entry
///   per declared path parameter
/// - [`ApiError::MissingPathParameter`] if a value is empty or whitespace
pub fn fill_path(endpoint: &Endpoint, values: &[&str]) -> Result<String, ApiError> {
    if values.len() != endpoint.path_params.len() {
        return Err(ApiError::PathParameterCount {
            operation: endpoint.name,
            expected: endpoint.path_params.len(),
            actual: values.len(),
        });
    }

    if let Some((name, _)) = endpoint
        .path_params
        .iter()
        .zip(values)
        .find(|(_, value)| value.trim().is_empty())
    {
        return Err(ApiError::MissingPathParameter {
            operation: endpoint.name,
            name: *name,
        });
    }

    let mut segments = endpoint.template.split(PLACEHOLDER);
    let mut path = String::with_capacity(endpoint.template.len());
    path.push_str(segments.next().unwrap_or_default());
    for (value, segment) in values.iter().zip(segments) {
        path.push_str(&urlencoding::encode(value));
        path.push_str(segment);
    }

    Ok(path)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint>();
    assert_send_sync::<UsagePlan>();
};
