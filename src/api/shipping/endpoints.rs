//! Endpoint registry for the Shipping and Easy Ship APIs.

use std::fmt;

use crate::api::endpoint::{Endpoint, UsagePlan};
use crate::clients::HttpMethod;

const SHIPPING_PLAN: UsagePlan = UsagePlan::new(5.0, 15);
const TRACKING_PLAN: UsagePlan = UsagePlan::new(1.0, 1);
const EASY_SHIP_PLAN: UsagePlan = UsagePlan::new(1.0, 5);

/// Create a new shipment.
pub const CREATE_SHIPMENT: Endpoint = Endpoint::new(
    "create_shipment",
    HttpMethod::Post,
    "/shipping/v1/shipments",
    &[],
    SHIPPING_PLAN,
);

/// Return the entire shipment object for a shipment id.
pub const GET_SHIPMENT: Endpoint = Endpoint::new(
    "get_shipment",
    HttpMethod::Get,
    "/shipping/v1/shipments/{}",
    &["shipmentId"],
    SHIPPING_PLAN,
);

/// Cancel a shipment.
pub const CANCEL_SHIPMENT: Endpoint = Endpoint::new(
    "cancel_shipment",
    HttpMethod::Post,
    "/shipping/v1/shipments/{}/cancel",
    &["shipmentId"],
    SHIPPING_PLAN,
);

/// Purchase shipping labels based on a given rate.
pub const PURCHASE_LABELS: Endpoint = Endpoint::new(
    "purchase_labels",
    HttpMethod::Post,
    "/shipping/v1/shipments/{}/purchaseLabels",
    &["shipmentId"],
    SHIPPING_PLAN,
);

/// Retrieve a shipping label by shipment id and tracking id.
///
/// Labels are addressed per container, so `trackingId` is required
/// alongside `shipmentId`. Some older bindings only filled `shipmentId`
/// and called `/shipping/v1/shipments/{shipmentId}/label`, which Amazon
/// does not document.
pub const RETRIEVE_SHIPPING_LABEL: Endpoint = Endpoint::new(
    "retrieve_shipping_label",
    HttpMethod::Post,
    "/shipping/v1/shipments/{}/containers/{}/label",
    &["shipmentId", "trackingId"],
    SHIPPING_PLAN,
);

/// Create a shipment and purchase its labels in one call.
pub const PURCHASE_SHIPMENT: Endpoint = Endpoint::new(
    "purchase_shipment",
    HttpMethod::Post,
    "/shipping/v1/purchaseShipment",
    &[],
    SHIPPING_PLAN,
);

/// Get service rates.
pub const GET_RATES: Endpoint = Endpoint::new(
    "get_rates",
    HttpMethod::Post,
    "/shipping/v1/rates",
    &[],
    SHIPPING_PLAN,
);

/// Verify that the current account is valid.
pub const GET_ACCOUNT: Endpoint = Endpoint::new(
    "get_account",
    HttpMethod::Get,
    "/shipping/v1/account",
    &[],
    SHIPPING_PLAN,
);

/// Return the tracking information of a shipment.
pub const GET_TRACKING_INFORMATION: Endpoint = Endpoint::new(
    "get_tracking_information",
    HttpMethod::Get,
    "/shipping/v1/tracking/{}",
    &["trackingId"],
    TRACKING_PLAN,
);

/// List handover time slots for an Easy Ship order.
pub const GET_TIME_SLOTS: Endpoint = Endpoint::new(
    "get_time_slots",
    HttpMethod::Post,
    "/easyship/v0/timeSlots",
    &[],
    EASY_SHIP_PLAN,
);

/// Return the scheduled package of an Easy Ship order.
pub const GET_PACKAGES: Endpoint = Endpoint::new(
    "get_packages",
    HttpMethod::Get,
    "/easyship/v0/packages",
    &[],
    EASY_SHIP_PLAN,
);

/// Schedule an Easy Ship package.
pub const CREATE_SCHEDULED_PACKAGES: Endpoint = Endpoint::new(
    "create_scheduled_packages",
    HttpMethod::Post,
    "/easyship/v0/packages",
    &[],
    EASY_SHIP_PLAN,
);

/// Reschedule Easy Ship packages.
pub const UPDATE_SCHEDULED_PACKAGES: Endpoint = Endpoint::new(
    "update_scheduled_packages",
    HttpMethod::Patch,
    "/easyship/v0/packages",
    &[],
    EASY_SHIP_PLAN,
);

/// Every operation exposed by [`ShippingClient`](super::ShippingClient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /shipping/v1/shipments`
    CreateShipment,
    /// `GET /shipping/v1/shipments/{shipmentId}`
    GetShipment,
    /// `POST /shipping/v1/shipments/{shipmentId}/cancel`
    CancelShipment,
    /// `POST /shipping/v1/shipments/{shipmentId}/purchaseLabels`
    PurchaseLabels,
    /// `POST /shipping/v1/shipments/{shipmentId}/containers/{trackingId}/label`
    RetrieveShippingLabel,
    /// `POST /shipping/v1/purchaseShipment`
    PurchaseShipment,
    /// `POST /shipping/v1/rates`
    GetRates,
    /// `GET /shipping/v1/account`
    GetAccount,
    /// `GET /shipping/v1/tracking/{trackingId}`
    GetTrackingInformation,
    /// `POST /easyship/v0/timeSlots`
    GetTimeSlots,
    /// `GET /easyship/v0/packages`
    GetPackages,
    /// `POST /easyship/v0/packages`
    CreateScheduledPackages,
    /// `PATCH /easyship/v0/packages`
    UpdateScheduledPackages,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateShipment,
        Self::GetShipment,
        Self::CancelShipment,
        Self::PurchaseLabels,
        Self::RetrieveShippingLabel,
        Self::PurchaseShipment,
        Self::GetRates,
        Self::GetAccount,
        Self::GetTrackingInformation,
        Self::GetTimeSlots,
        Self::GetPackages,
        Self::CreateScheduledPackages,
        Self::UpdateScheduledPackages,
    ];

    /// Returns the endpoint backing this operation.
    #[must_use]
    pub const fn endpoint(&self) -> &'static Endpoint {
        match self {
            Self::CreateShipment => &CREATE_SHIPMENT,
            Self::GetShipment => &GET_SHIPMENT,
            Self::CancelShipment => &CANCEL_SHIPMENT,
            Self::PurchaseLabels => &PURCHASE_LABELS,
            Self::RetrieveShippingLabel => &RETRIEVE_SHIPPING_LABEL,
            Self::PurchaseShipment => &PURCHASE_SHIPMENT,
            Self::GetRates => &GET_RATES,
            Self::GetAccount => &GET_ACCOUNT,
            Self::GetTrackingInformation => &GET_TRACKING_INFORMATION,
            Self::GetTimeSlots => &GET_TIME_SLOTS,
            Self::GetPackages => &GET_PACKAGES,
            Self::CreateScheduledPackages => &CREATE_SCHEDULED_PACKAGES,
            Self::UpdateScheduledPackages => &UPDATE_SCHEDULED_PACKAGES,
        }
    }

    /// Returns the snake_case operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.endpoint().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
