//! Selling Partner API operations.
//!
//! This module provides:
//! - [`Endpoint`] declarations and path templating via [`fill_path`]
//! - [`dispatch`] which turns an endpoint and its arguments into a request
//! - [`ShippingClient`] with one method per Shipping and Easy Ship operation
//! - [`ApiError`] for everything that can go wrong on the way

pub mod dispatch;
pub mod endpoint;
mod errors;
pub mod shipping;

pub use dispatch::{dispatch, Arguments};
pub use endpoint::{fill_path, Endpoint, PayloadKind, UsagePlan};
pub use errors::ApiError;
pub use shipping::{Operation, ShippingClient};
