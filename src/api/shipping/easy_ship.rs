//! Request and response models for Easy Ship scheduling.
//!
//! Easy Ship lets a seller hand packages to an Amazon carrier in a chosen
//! time slot. The usual flow is:
//!
//! 1. `get_time_slots` with a [`TimeSlotsRequest`]
//! 2. `create_scheduled_packages` with a [`CreateScheduledPackageRequest`]
//! 3. `get_packages` with a [`GetScheduledPackageQuery`]
//! 4. `update_scheduled_packages` to move a package to another slot

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit of [`PackageDimensions`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum PackageDimensionUnit {
    /// Centimeters.
    #[default]
    #[serde(rename = "cm")]
    Cm,
}

/// Dimensions of a scheduled package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDimensions {
    /// The length of the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// The width of the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// The height of the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// The unit of these measurements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<PackageDimensionUnit>,
    /// Identifier of a package dimension preset saved in Seller Central.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Unit of [`PackageWeight`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum PackageWeightUnit {
    /// Grams.
    #[default]
    #[serde(rename = "grams")]
    Grams,
    /// Grams, abbreviated form some responses use.
    #[serde(rename = "g")]
    G,
}

/// Weight of a scheduled package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct PackageWeight {
    /// The weight value.
    pub value: f64,
    /// The unit of the weight.
    pub unit: PackageWeightUnit,
}

impl PackageWeight {
    /// Creates a weight in grams.
    #[must_use]
    pub const fn grams(value: f64) -> Self {
        Self {
            value,
            unit: PackageWeightUnit::Grams,
        }
    }
}

/// How a package is handed to the carrier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HandoverMethod {
    /// The carrier collects the package from the seller.
    Pickup,
    /// The seller drops the package at a carrier location.
    Dropoff,
}

/// A window in which a package can be handed over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// The slot identifier returned by `get_time_slots`.
    pub slot_id: String,
    /// Start of the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// End of the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// How the package is handed over in this slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handover_method: Option<HandoverMethod>,
}

impl TimeSlot {
    /// Creates a slot reference from an identifier alone, as accepted by
    /// the create and update calls.
    #[must_use]
    pub fn with_id(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            start_time: None,
            end_time: None,
            handover_method: None,
        }
    }
}

/// Identifies a package within an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPackageId {
    /// The Amazon order identifier.
    pub amazon_order_id: String,
    /// The package identifier, when the order has more than one package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
}

/// An order item inside a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageItem {
    /// The order item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<String>,
    /// Serial numbers of the units in the package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_item_serial_number_list: Vec<String>,
}

/// Body of `get_time_slots`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsRequest {
    /// The Amazon order identifier.
    pub amazon_order_id: String,
    /// The marketplace of the order.
    pub marketplace_id: String,
    /// The package dimensions.
    pub package_dimensions: PackageDimensions,
    /// The package weight.
    pub package_weight: PackageWeight,
}

/// Package details used when scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageRequestDetails {
    /// The package dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_dimensions: Option<PackageDimensions>,
    /// The package weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_weight: Option<PackageWeight>,
    /// The items in the package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package_item_list: Vec<PackageItem>,
    /// The chosen handover slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_time_slot: Option<TimeSlot>,
    /// The seller's own package identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_identifier: Option<String>,
}

/// Body of `create_scheduled_packages`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduledPackageRequest {
    /// The Amazon order identifier.
    pub amazon_order_id: String,
    /// The marketplace of the order.
    pub marketplace_id: String,
    /// The package to schedule.
    pub package_request_details: PackageRequestDetails,
}

/// A package moved to a new slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPackageUpdateDetails {
    /// The package to move.
    pub scheduled_package_id: ScheduledPackageId,
    /// The new handover slot.
    pub package_time_slot: TimeSlot,
}

/// Body of `update_scheduled_packages`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduledPackagesRequest {
    /// The marketplace of the orders.
    pub marketplace_id: String,
    /// The packages to reschedule.
    pub scheduled_package_update_details_list: Vec<ScheduledPackageUpdateDetails>,
}

/// Lifecycle status of a scheduled package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum PackageStatus {
    /// Waiting for the carrier.
    ReadyForPickup,
    /// Collected by the carrier.
    PickedUp,
    /// Accepted at the origin facility.
    #[serde(rename = "AtOriginFC")]
    AtOriginFc,
    /// Arrived at the destination facility.
    #[serde(rename = "AtDestinationFC")]
    AtDestinationFc,
    /// Delivered to the buyer.
    Delivered,
    /// Rejected by the buyer.
    Rejected,
    /// The buyer was not reachable.
    Undeliverable,
    /// Returned to the seller.
    ReturnedToSeller,
    /// Lost in transit.
    LostInTransit,
    /// The label was canceled.
    LabelCanceled,
    /// Damaged in transit.
    DamagedInTransit,
    /// Out for delivery.
    OutForDelivery,
    /// Any status this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// An invoice attached to a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    /// The invoice number.
    pub invoice_number: String,
    /// The invoice date.
    #[serde(default)]
    pub invoice_date: Option<DateTime<Utc>>,
}

/// Carrier tracking for a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingDetails {
    /// The carrier tracking identifier.
    #[serde(default)]
    pub tracking_id: Option<String>,
}

/// A scheduled Easy Ship package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// The order the package belongs to.
    pub scheduled_package_id: ScheduledPackageId,
    /// The package dimensions.
    #[serde(default)]
    pub package_dimensions: Option<PackageDimensions>,
    /// The package weight.
    #[serde(default)]
    pub package_weight: Option<PackageWeight>,
    /// The items in the package.
    #[serde(default)]
    pub package_item_list: Vec<PackageItem>,
    /// The handover slot.
    #[serde(default)]
    pub package_time_slot: Option<TimeSlot>,
    /// The seller's own package identifier.
    #[serde(default)]
    pub package_identifier: Option<String>,
    /// The invoice for the package.
    #[serde(default)]
    pub invoice: Option<InvoiceData>,
    /// The package status.
    #[serde(default)]
    pub package_status: Option<PackageStatus>,
    /// Carrier tracking for the package.
    #[serde(default)]
    pub tracking_details: Option<TrackingDetails>,
}

/// Payload of `get_time_slots`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResult {
    /// The Amazon order identifier.
    pub amazon_order_id: String,
    /// The slots available for the order.
    #[serde(default)]
    pub time_slot_list: Vec<TimeSlot>,
}

/// Query of `get_packages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetScheduledPackageQuery {
    /// The Amazon order identifier.
    pub amazon_order_id: String,
    /// The marketplace of the order.
    pub marketplace_id: String,
}

impl GetScheduledPackageQuery {
    /// Creates a new query.
    #[must_use]
    pub fn new(amazon_order_id: impl Into<String>, marketplace_id: impl Into<String>) -> Self {
        Self {
            amazon_order_id: amazon_order_id.into(),
            marketplace_id: marketplace_id.into(),
        }
    }

    /// Converts the query into the parameter map `get_packages` accepts.
    #[must_use]
    pub fn into_query(self) -> HashMap<String, String> {
        HashMap::from([
            ("amazonOrderId".to_string(), self.amazon_order_id),
            ("marketplaceId".to_string(), self.marketplace_id),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_time_slots_request_shape() {
        let request = TimeSlotsRequest {
            amazon_order_id: "171-0000000-0000000".to_string(),
            marketplace_id: "A21TJRUUN4KGV".to_string(),
            package_dimensions: PackageDimensions {
                length: Some(15.0),
                width: Some(10.0),
                height: Some(5.0),
                unit: Some(PackageDimensionUnit::Cm),
                identifier: None,
            },
            package_weight: PackageWeight::grams(500.0),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "amazonOrderId": "171-0000000-0000000",
                "marketplaceId": "A21TJRUUN4KGV",
                "packageDimensions": {"length": 15.0, "width": 10.0, "height": 5.0, "unit": "cm"},
                "packageWeight": {"value": 500.0, "unit": "grams"}
            })
        );
    }

    #[test]
    fn test_update_request_uses_slot_id_only() {
        let request = UpdateScheduledPackagesRequest {
            marketplace_id: "A21TJRUUN4KGV".to_string(),
            scheduled_package_update_details_list: vec![ScheduledPackageUpdateDetails {
                scheduled_package_id: ScheduledPackageId {
                    amazon_order_id: "171-0000000-0000000".to_string(),
                    package_id: None,
                },
                package_time_slot: TimeSlot::with_id("slot-9"),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("updatePackageDetailsList").is_none());
        let detail = &json["scheduledPackageUpdateDetailsList"][0];
        assert_eq!(detail["packageTimeSlot"], json!({"slotId": "slot-9"}));
        assert!(detail["scheduledPackageId"].get("packageId").is_none());
    }

    #[test]
    fn test_handover_method_and_weight_unit_wire_values() {
        assert_eq!(serde_json::to_value(HandoverMethod::Pickup).unwrap(), json!("PICKUP"));
        assert_eq!(serde_json::to_value(HandoverMethod::Dropoff).unwrap(), json!("DROPOFF"));

        let weight: PackageWeight =
            serde_json::from_value(json!({"value": 10, "unit": "g"})).unwrap();
        assert_eq!(weight.unit, PackageWeightUnit::G);

        assert_eq!(
            serde_json::to_value(PackageWeight::default()).unwrap(),
            json!({"value": 0.0, "unit": "grams"})
        );
    }

    #[test]
    fn test_package_status_tolerates_unknown_values() {
        let status: PackageStatus = serde_json::from_value(json!("PickedUp")).unwrap();
        assert_eq!(status, PackageStatus::PickedUp);

        let status: PackageStatus = serde_json::from_value(json!("SomethingNew")).unwrap();
        assert_eq!(status, PackageStatus::Unknown);
    }

    #[test]
    fn test_package_deserializes() {
        let payload = json!({
            "scheduledPackageId": {"amazonOrderId": "171-0000000-0000000", "packageId": "p-1"},
            "packageTimeSlot": {
                "slotId": "slot-1",
                "startTime": "2022-03-24T09:00:00Z",
                "endTime": "2022-03-24T12:00:00Z",
                "handoverMethod": "PICKUP"
            },
            "packageItemList": [
                {"orderItemId": "item-1", "orderItemSerialNumberList": ["SN1", "SN2"]}
            ],
            "packageStatus": "ReadyForPickup",
            "trackingDetails": {"trackingId": "TRK1"}
        });

        let package: Package = serde_json::from_value(payload).unwrap();
        assert_eq!(package.scheduled_package_id.package_id.as_deref(), Some("p-1"));
        assert_eq!(package.package_status, Some(PackageStatus::ReadyForPickup));
        assert_eq!(
            package.package_time_slot.unwrap().handover_method,
            Some(HandoverMethod::Pickup)
        );
        assert_eq!(package.package_item_list.len(), 1);
        assert_eq!(
            package.package_item_list[0].order_item_serial_number_list,
            vec!["SN1".to_string(), "SN2".to_string()]
        );
    }

    #[test]
    fn test_create_request_uses_documented_keys() {
        let request = CreateScheduledPackageRequest {
            amazon_order_id: "171-0000000-0000000".to_string(),
            marketplace_id: "A21TJRUUN4KGV".to_string(),
            package_request_details: PackageRequestDetails {
                package_item_list: vec![PackageItem {
                    order_item_id: Some("item-1".to_string()),
                    order_item_serial_number_list: vec!["SN1".to_string()],
                }],
                package_time_slot: Some(TimeSlot::with_id("slot-1")),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "amazonOrderId": "171-0000000-0000000",
                "marketplaceId": "A21TJRUUN4KGV",
                "packageRequestDetails": {
                    "packageItemList": [
                        {"orderItemId": "item-1", "orderItemSerialNumberList": ["SN1"]}
                    ],
                    "packageTimeSlot": {"slotId": "slot-1"}
                }
            })
        );
    }

    #[test]
    fn test_time_slots_result_reads_slot_list() {
        let payload = json!({
            "amazonOrderId": "171-0000000-0000000",
            "timeSlotList": [
                {"slotId": "slot-1", "handoverMethod": "PICKUP"},
                {"slotId": "slot-2", "handoverMethod": "DROPOFF"}
            ]
        });

        let result: TimeSlotsResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.time_slot_list.len(), 2);
        assert_eq!(result.time_slot_list[1].handover_method, Some(HandoverMethod::Dropoff));
    }

    #[test]
    fn test_get_scheduled_package_query_into_query() {
        let query = GetScheduledPackageQuery::new("171-0000000-0000000", "A21TJRUUN4KGV").into_query();
        assert_eq!(query.len(), 2);
        assert_eq!(query["amazonOrderId"], "171-0000000-0000000");
        assert_eq!(query["marketplaceId"], "A21TJRUUN4KGV");
    }
}
