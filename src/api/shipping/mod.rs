//! Client for the Shipping v1 and Easy Ship APIs.
//!
//! [`ShippingClient`] exposes one async method per remote operation. Each
//! method validates its path parameters, forwards the caller's arguments
//! and returns the raw [`ApiResponse`]; use [`ApiResponse::payload_as`]
//! with the types in [`models`] and [`easy_ship`] for typed access.
//!
//! # Example
//!
//! ```rust,ignore
//! use sp_api_shipping::{AccessToken, Marketplace, ShippingClient, SpApiConfig};
//! use sp_api_shipping::api::shipping::models::CreateShipmentResult;
//!
//! let config = SpApiConfig::builder()
//!     .access_token(AccessToken::new("Atza|token")?)
//!     .marketplace(Marketplace::US)
//!     .build()?;
//! let client = ShippingClient::new(&config)?;
//!
//! let response = client.create_shipment(&request).await?;
//! let result: CreateShipmentResult = response.payload_as()?;
//! println!("Created shipment {}", result.shipment_id);
//! ```

pub mod easy_ship;
pub mod endpoints;
pub mod models;

use std::collections::HashMap;

use serde::Serialize;

pub use endpoints::Operation;

use crate::api::dispatch::{dispatch, Arguments};
use crate::api::ApiError;
use crate::clients::{ApiResponse, HttpClient};
use crate::config::{Marketplace, SpApiConfig};

/// Query parameters forwarded by GET operations.
pub type Query = Option<HashMap<String, String>>;

/// Client for the Shipping v1 and Easy Ship APIs.
///
/// The client is cheap to share: wrap it in an `Arc` to use it from
/// several tasks.
#[derive(Debug)]
pub struct ShippingClient {
    http_client: HttpClient,
    config: SpApiConfig,
}

// Verify ShippingClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShippingClient>();
};

impl ShippingClient {
    /// Creates a new client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &SpApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            config: config.clone(),
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &SpApiConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the configured marketplace.
    #[must_use]
    pub const fn marketplace(&self) -> Marketplace {
        self.config.marketplace()
    }

    /// Creates a new shipment.
    ///
    /// `POST /shipping/v1/shipments`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn create_shipment<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::CreateShipment, &[], body).await
    }

    /// Returns the entire shipment object for `shipment_id`.
    ///
    /// `GET /shipping/v1/shipments/{shipmentId}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingPathParameter`] if `shipment_id` is blank,
    /// or [`ApiError::Http`] if the call fails.
    pub async fn get_shipment(
        &self,
        shipment_id: &str,
        query: Query,
    ) -> Result<ApiResponse, ApiError> {
        self.send_query(Operation::GetShipment, &[shipment_id], query)
            .await
    }

    /// Cancels a shipment. Sends an empty JSON object as the body.
    ///
    /// `POST /shipping/v1/shipments/{shipmentId}/cancel`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingPathParameter`] if `shipment_id` is blank,
    /// or [`ApiError::Http`] if the call fails.
    pub async fn cancel_shipment(&self, shipment_id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Operation::CancelShipment, &[shipment_id], Arguments::Body(None))
            .await
    }

    /// Purchases shipping labels based on a given rate.
    ///
    /// `POST /shipping/v1/shipments/{shipmentId}/purchaseLabels`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if `shipment_id` is blank, the body does not
    /// serialize or the call fails.
    pub async fn purchase_labels<B>(
        &self,
        shipment_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::PurchaseLabels, &[shipment_id], body)
            .await
    }

    /// Retrieves the label of one container of a shipment.
    ///
    /// `POST /shipping/v1/shipments/{shipmentId}/containers/{trackingId}/label`
    ///
    /// Both ids are required: `tracking_id` selects the container and is
    /// validated like any other path parameter, even though some older
    /// bindings left it out of the path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if either id is blank, the body does not
    /// serialize or the call fails.
    pub async fn retrieve_shipping_label<B>(
        &self,
        shipment_id: &str,
        tracking_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(
            Operation::RetrieveShippingLabel,
            &[shipment_id, tracking_id],
            body,
        )
        .await
    }

    /// Creates a shipment and purchases its labels in one call.
    ///
    /// `POST /shipping/v1/purchaseShipment`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn purchase_shipment<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::PurchaseShipment, &[], body).await
    }

    /// Gets service rates.
    ///
    /// `POST /shipping/v1/rates`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn get_rates<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::GetRates, &[], body).await
    }

    /// Verifies that the current account is valid.
    ///
    /// `GET /shipping/v1/account`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the call fails.
    pub async fn get_account(&self, query: Query) -> Result<ApiResponse, ApiError> {
        self.send_query(Operation::GetAccount, &[], query).await
    }

    /// Returns the tracking information of a shipment.
    ///
    /// `GET /shipping/v1/tracking/{trackingId}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingPathParameter`] if `tracking_id` is blank,
    /// or [`ApiError::Http`] if the call fails.
    pub async fn get_tracking_information(
        &self,
        tracking_id: &str,
        query: Query,
    ) -> Result<ApiResponse, ApiError> {
        self.send_query(Operation::GetTrackingInformation, &[tracking_id], query)
            .await
    }

    /// Lists the handover time slots available for an Easy Ship order.
    ///
    /// `POST /easyship/v0/timeSlots`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn get_time_slots<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::GetTimeSlots, &[], body).await
    }

    /// Returns the scheduled package of an Easy Ship order.
    ///
    /// `GET /easyship/v0/packages`
    ///
    /// Build the query with
    /// [`GetScheduledPackageQuery::into_query`](easy_ship::GetScheduledPackageQuery::into_query).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the call fails.
    pub async fn get_packages(&self, query: Query) -> Result<ApiResponse, ApiError> {
        self.send_query(Operation::GetPackages, &[], query).await
    }

    /// Schedules an Easy Ship package.
    ///
    /// `POST /easyship/v0/packages`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn create_scheduled_packages<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::CreateScheduledPackages, &[], body)
            .await
    }

    /// Moves Easy Ship packages to new time slots.
    ///
    /// `PATCH /easyship/v0/packages`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body does not serialize or the call fails.
    pub async fn update_scheduled_packages<B>(&self, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_body(Operation::UpdateScheduledPackages, &[], body)
            .await
    }

    async fn send_body<B>(
        &self,
        operation: Operation,
        path_params: &[&str],
        body: &B,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        // Path errors take precedence over body errors
        operation.endpoint().path(path_params)?;
        let args = Arguments::body(body)?;
        self.send(operation, path_params, args).await
    }

    async fn send_query(
        &self,
        operation: Operation,
        path_params: &[&str],
        query: Query,
    ) -> Result<ApiResponse, ApiError> {
        self.send(operation, path_params, Arguments::Query(query))
            .await
    }

    async fn send(
        &self,
        operation: Operation,
        path_params: &[&str],
        args: Arguments,
    ) -> Result<ApiResponse, ApiError> {
        dispatch(&self.http_client, operation.endpoint(), path_params, args).await
    }
}
