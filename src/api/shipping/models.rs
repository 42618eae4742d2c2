//! Request and response models for the Shipping v1 API.
//!
//! The client methods accept any `Serialize` body, so these types are
//! optional: they exist so callers can build requests with the compiler
//! checking field names instead of hand-writing JSON.
//!
//! # Example
//!
//! ```rust
//! use sp_api_shipping::api::shipping::models::{
//!     Address, Container, ContainerItem, Currency, Dimensions, DimensionUnit,
//!     CreateShipmentRequest, Weight, WeightUnit,
//! };
//!
//! let address = Address {
//!     name: "Jane Doe".to_string(),
//!     address_line1: "410 Terry Ave N".to_string(),
//!     state_or_region: "WA".to_string(),
//!     city: "Seattle".to_string(),
//!     country_code: "US".to_string(),
//!     postal_code: "98109".to_string(),
//!     ..Default::default()
//! };
//!
//! let request = CreateShipmentRequest {
//!     client_reference_id: "order-1001".to_string(),
//!     ship_to: address.clone(),
//!     ship_from: address,
//!     containers: vec![Container {
//!         container_reference_id: "box-1".to_string(),
//!         value: Currency::new(25.0, "USD"),
//!         dimensions: Dimensions::new(10.0, 8.0, 4.0, DimensionUnit::In),
//!         weight: Weight::new(2.5, WeightUnit::Lb),
//!         items: vec![ContainerItem {
//!             quantity: 1.0,
//!             unit_price: Currency::new(25.0, "USD"),
//!             unit_weight: Weight::new(2.5, WeightUnit::Lb),
//!             title: "Kettle".to_string(),
//!         }],
//!         ..Default::default()
//!     }],
//! };
//!
//! let json = serde_json::to_value(&request).unwrap();
//! assert_eq!(json["shipTo"]["addressLine1"], "410 Terry Ave N");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The name of the person, business or institution at the address.
    pub name: String,

    /// The first line of the address.
    pub address_line1: String,

    /// Additional address information, if required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    /// Additional address information, if required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,

    /// The state or region where the person, business or institution is located.
    pub state_or_region: String,

    /// The city where the person, business or institution is located.
    pub city: String,

    /// The two-digit country code (ISO 3166-1 alpha-2).
    pub country_code: String,

    /// The postal code of the address.
    pub postal_code: String,

    /// The email address of the contact associated with the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Email addresses to receive copies of shipment notifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copy_emails: Vec<String>,

    /// The phone number of the person, business or institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Unit of a [`Weight`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Grams.
    #[default]
    G,
    /// Kilograms.
    Kg,
    /// Ounces.
    Oz,
    /// Pounds.
    Lb,
}

/// The weight of a container or item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Weight {
    /// The unit of measurement.
    pub unit: WeightUnit,
    /// The measurement value.
    pub value: f64,
}

impl Weight {
    /// Creates a new weight.
    #[must_use]
    pub const fn new(value: f64, unit: WeightUnit) -> Self {
        Self { unit, value }
    }
}

/// Unit of [`Dimensions`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DimensionUnit {
    /// Inches.
    #[default]
    In,
    /// Centimeters.
    Cm,
}

/// A set of measurements for a three-dimensional object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Dimensions {
    /// The length of the container.
    pub length: f64,
    /// The width of the container.
    pub width: f64,
    /// The height of the container.
    pub height: f64,
    /// The unit of these measurements.
    pub unit: DimensionUnit,
}

impl Dimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub const fn new(length: f64, width: f64, height: f64, unit: DimensionUnit) -> Self {
        Self {
            length,
            width,
            height,
            unit,
        }
    }
}

/// A monetary value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Currency {
    /// The amount of currency.
    pub value: f64,
    /// A three-digit currency code (ISO 4217).
    pub unit: String,
}

impl Currency {
    /// Creates a new monetary value.
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// An item in a container.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerItem {
    /// The quantity of the item.
    pub quantity: f64,
    /// The unit price of the item.
    pub unit_price: Currency,
    /// The unit weight of the item.
    pub unit_weight: Weight,
    /// A descriptive title of the item.
    pub title: String,
}

/// The type of physical container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerType {
    /// A package.
    #[default]
    Package,
}

/// A physical container of items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// The type of physical container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,
    /// The client's own identifier for the container.
    pub container_reference_id: String,
    /// The total value of all items in the container.
    pub value: Currency,
    /// The dimensions of the container.
    pub dimensions: Dimensions,
    /// The items in the container.
    pub items: Vec<ContainerItem>,
    /// The weight of the container.
    pub weight: Weight,
}

/// Label image format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelFormat {
    /// PNG image.
    #[default]
    Png,
}

/// Label stock size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum LabelStockSize {
    /// 4 by 6 inches.
    #[default]
    #[serde(rename = "4x6")]
    FourBySix,
}

/// The label specification requested when purchasing or retrieving labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSpecification {
    /// The format of the label.
    pub label_format: LabelFormat,
    /// The label stock size specification.
    pub label_stock_size: LabelStockSize,
}

/// The type of shipping service offered by a carrier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// Amazon Shipping Ground.
    #[serde(rename = "Amazon Shipping Ground")]
    Ground,
    /// Amazon Shipping Standard.
    #[serde(rename = "Amazon Shipping Standard")]
    Standard,
    /// Amazon Shipping Premium.
    #[serde(rename = "Amazon Shipping Premium")]
    Premium,
}

/// Physical attributes of a container, used when requesting rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ContainerSpecification {
    /// The dimensions of the container.
    pub dimensions: Dimensions,
    /// The weight of the container.
    pub weight: Weight,
}

/// Body of `create_shipment`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    /// Client reference id, unique per shipment.
    pub client_reference_id: String,
    /// The destination address.
    pub ship_to: Address,
    /// The origin address.
    pub ship_from: Address,
    /// The containers in the shipment.
    pub containers: Vec<Container>,
}

/// Body of `purchase_labels`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLabelsRequest {
    /// The rate identifier returned by `create_shipment`.
    pub rate_id: String,
    /// The label specification.
    pub label_specification: LabelSpecification,
}

/// Body of `retrieve_shipping_label`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveShippingLabelRequest {
    /// The label specification.
    pub label_specification: LabelSpecification,
}

/// Body of `purchase_shipment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseShipmentRequest {
    /// Client reference id, unique per shipment.
    pub client_reference_id: String,
    /// The destination address.
    pub ship_to: Address,
    /// The origin address.
    pub ship_from: Address,
    /// The start date and time for the shipment, defaulting to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,
    /// The service to purchase.
    pub service_type: ServiceType,
    /// The containers in the shipment.
    pub containers: Vec<Container>,
    /// The label specification.
    pub label_specification: LabelSpecification,
}

/// Body of `get_rates`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetRatesRequest {
    /// The destination address.
    pub ship_to: Address,
    /// The origin address.
    pub ship_from: Address,
    /// The services to quote.
    pub service_types: Vec<ServiceType>,
    /// The start date and time for the shipment, defaulting to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,
    /// The containers to quote.
    pub container_specifications: Vec<ContainerSpecification>,
}

/// The account the access token belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The account id of a shipper.
    pub account_id: String,
}

/// A delivery promise window.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// The start of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// The end of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// Delivery and pickup promises of a rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPromiseSet {
    /// The delivery window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_window: Option<TimeRange>,
    /// The pickup window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_window: Option<TimeRange>,
}

/// A quoted rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// The identifier to pass to `purchase_labels`.
    #[serde(default)]
    pub rate_id: Option<String>,
    /// The total charge for the shipment.
    #[serde(default)]
    pub total_charge: Option<Currency>,
    /// The weight the carrier bills for.
    #[serde(default)]
    pub billed_weight: Option<Weight>,
    /// When the rate expires.
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
    /// The quoted service.
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    /// Delivery and pickup promises.
    #[serde(default)]
    pub promise: Option<ShippingPromiseSet>,
}

/// Payload of a successful `create_shipment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentResult {
    /// The unique shipment identifier.
    pub shipment_id: String,
    /// Rates the shipment can be purchased at.
    #[serde(default)]
    pub eligible_rates: Vec<Rate>,
}

/// A tracking event location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The state or region.
    #[serde(default)]
    pub state_or_region: Option<String>,
    /// The city.
    #[serde(default)]
    pub city: Option<String>,
    /// The two-digit country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// The postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// A tracking event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The event code, e.g. `Delivered` or `PickupDone`.
    pub event_code: String,
    /// Where the event happened.
    #[serde(default)]
    pub location: Option<Location>,
    /// When the event happened.
    pub event_time: DateTime<Utc>,
}

/// The latest tracking status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSummary {
    /// The derived status, e.g. `InTransit` or `Delivered`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Payload of `get_tracking_information`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInformation {
    /// The tracking identifier.
    pub tracking_id: String,
    /// The latest status.
    #[serde(default)]
    pub summary: TrackingSummary,
    /// The promised delivery date.
    #[serde(default)]
    pub promised_delivery_date: Option<DateTime<Utc>>,
    /// Every tracking event, oldest first.
    #[serde(default)]
    pub event_history: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address() -> Address {
        Address {
            name: "Jane Doe".to_string(),
            address_line1: "410 Terry Ave N".to_string(),
            state_or_region: "WA".to_string(),
            city: "Seattle".to_string(),
            country_code: "US".to_string(),
            postal_code: "98109".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_address_serializes_camel_case_and_skips_empty_fields() {
        let json = serde_json::to_value(address()).unwrap();
        assert_eq!(json["addressLine1"], "410 Terry Ave N");
        assert_eq!(json["stateOrRegion"], "WA");
        assert!(json.get("addressLine2").is_none());
        assert!(json.get("copyEmails").is_none());
        assert!(json.get("phoneNumber").is_none());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(serde_json::to_value(WeightUnit::Kg).unwrap(), json!("kg"));
        assert_eq!(serde_json::to_value(DimensionUnit::Cm).unwrap(), json!("CM"));
        assert_eq!(serde_json::to_value(ContainerType::Package).unwrap(), json!("PACKAGE"));
        assert_eq!(serde_json::to_value(LabelFormat::Png).unwrap(), json!("PNG"));
        assert_eq!(
            serde_json::to_value(LabelStockSize::FourBySix).unwrap(),
            json!("4x6")
        );
        assert_eq!(
            serde_json::to_value(ServiceType::Ground).unwrap(),
            json!("Amazon Shipping Ground")
        );
    }

    #[test]
    fn test_purchase_labels_request_shape() {
        let request = PurchaseLabelsRequest {
            rate_id: "rate-1".to_string(),
            label_specification: LabelSpecification::default(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "rateId": "rate-1",
                "labelSpecification": {"labelFormat": "PNG", "labelStockSize": "4x6"}
            })
        );
    }

    #[test]
    fn test_get_rates_request_serializes_ship_date_as_rfc3339() {
        let request = GetRatesRequest {
            ship_to: address(),
            ship_from: address(),
            service_types: vec![ServiceType::Ground],
            ship_date: Some("2019-08-24T14:15:22Z".parse().unwrap()),
            container_specifications: vec![ContainerSpecification {
                dimensions: Dimensions::new(1.0, 2.0, 3.0, DimensionUnit::In),
                weight: Weight::new(100.0, WeightUnit::G),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["shipDate"], "2019-08-24T14:15:22Z");
        assert_eq!(json["serviceTypes"][0], "Amazon Shipping Ground");
        assert_eq!(json["containerSpecifications"][0]["weight"]["unit"], "g");
    }

    #[test]
    fn test_create_shipment_result_deserializes() {
        let payload = json!({
            "shipmentId": "89108749065090",
            "eligibleRates": [{
                "rateId": "rate-1",
                "totalCharge": {"value": 4.99, "unit": "USD"},
                "billedWeight": {"value": 2.0, "unit": "lb"},
                "expirationTime": "2019-08-24T14:15:22Z",
                "serviceType": "Amazon Shipping Standard",
                "promise": {
                    "deliveryWindow": {"start": "2019-08-26T14:15:22Z", "end": "2019-08-27T14:15:22Z"}
                }
            }]
        });

        let result: CreateShipmentResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.shipment_id, "89108749065090");
        let rate = &result.eligible_rates[0];
        assert_eq!(rate.rate_id.as_deref(), Some("rate-1"));
        assert_eq!(rate.service_type, Some(ServiceType::Standard));
        assert_eq!(rate.billed_weight.unwrap().unit, WeightUnit::Lb);
        assert!(rate.promise.as_ref().unwrap().delivery_window.is_some());
    }

    #[test]
    fn test_tracking_information_deserializes() {
        let payload = json!({
            "trackingId": "1Z999",
            "summary": {"status": "InTransit"},
            "eventHistory": [
                {"eventCode": "PickupDone", "eventTime": "2019-08-24T14:15:22Z",
                 "location": {"city": "Seattle", "countryCode": "US"}}
            ]
        });

        let info: TrackingInformation = serde_json::from_value(payload).unwrap();
        assert_eq!(info.summary.status.as_deref(), Some("InTransit"));
        assert_eq!(info.event_history.len(), 1);
        assert_eq!(
            info.event_history[0].location.as_ref().unwrap().city.as_deref(),
            Some("Seattle")
        );
        assert!(info.promised_delivery_date.is_none());
    }
}
