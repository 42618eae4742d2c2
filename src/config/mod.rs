//! Configuration types for the Selling Partner API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SpApiConfig`]: The configuration shared by every client
//! - [`SpApiConfigBuilder`]: A builder for constructing [`SpApiConfig`] instances
//! - [`AccessToken`]: A validated LWA access token with masked debug output
//! - [`BaseUrl`]: A validated endpoint override
//! - [`Marketplace`] and [`Region`]: Where requests are sent
//!
//! # Example
//!
//! ```rust
//! use sp_api_shipping::{SpApiConfig, AccessToken, Marketplace};
//!
//! let config = SpApiConfig::builder()
//!     .access_token(AccessToken::new("Atza|token").unwrap())
//!     .marketplace(Marketplace::DE)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint(), "https://sellingpartnerapi-eu.amazon.com");
//! ```

mod newtypes;
mod region;

pub use newtypes::{AccessToken, BaseUrl};
pub use region::{Marketplace, Region};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for Selling Partner API clients.
///
/// # Endpoint Resolution
///
/// The endpoint is resolved in this order:
/// 1. An explicit [`endpoint`](SpApiConfigBuilder::endpoint) override
/// 2. The configured [`Region`], or the marketplace's region when none is set
/// 3. The sandbox variant of that region when `sandbox` is enabled
///
/// # Thread Safety
///
/// `SpApiConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SpApiConfig {
    access_token: AccessToken,
    marketplace: Marketplace,
    region: Region,
    sandbox: bool,
    endpoint: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl SpApiConfig {
    /// Creates a new builder for constructing an `SpApiConfig`.
    #[must_use]
    pub fn builder() -> SpApiConfigBuilder {
        SpApiConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the marketplace.
    #[must_use]
    pub const fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    /// Returns the region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns whether requests go to the sandbox endpoint.
    #[must_use]
    pub const fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the resolved endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match &self.endpoint {
            Some(url) => url.as_ref(),
            None if self.sandbox => self.region.sandbox_endpoint(),
            None => self.region.endpoint(),
        }
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify SpApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpApiConfig>();
};

/// Builder for constructing [`SpApiConfig`] instances.
///
/// `access_token` is required.
///
/// # Defaults
///
/// - `marketplace`: `Marketplace::US`
/// - `region`: the marketplace's region
/// - `sandbox`: `false`
/// - `endpoint`, `user_agent_prefix`, `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sp_api_shipping::{SpApiConfig, AccessToken, BaseUrl};
///
/// let config = SpApiConfig::builder()
///     .access_token(AccessToken::new("Atza|token").unwrap())
///     .endpoint(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct SpApiConfigBuilder {
    access_token: Option<AccessToken>,
    marketplace: Option<Marketplace>,
    region: Option<Region>,
    sandbox: bool,
    endpoint: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl SpApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the marketplace.
    #[must_use]
    pub const fn marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace = Some(marketplace);
        self
    }

    /// Overrides the region derived from the marketplace.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sends requests to the sandbox endpoint of the region.
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Overrides the endpoint entirely, e.g. for a proxy.
    #[must_use]
    pub fn endpoint(mut self, endpoint: BaseUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`SpApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<SpApiConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;
        let marketplace = self.marketplace.unwrap_or(Marketplace::US);

        Ok(SpApiConfig {
            access_token,
            marketplace,
            region: self.region.unwrap_or_else(|| marketplace.region()),
            sandbox: self.sandbox,
            endpoint: self.endpoint,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
