//! Integration tests for configuration and the operation registry.

use std::time::Duration;

use sp_api_shipping::api::shipping::endpoints::{GET_TRACKING_INFORMATION, RETRIEVE_SHIPPING_LABEL};
use sp_api_shipping::api::{fill_path, PayloadKind};
use sp_api_shipping::{
    AccessToken, BaseUrl, ConfigError, HttpMethod, Marketplace, Operation, Region, ShippingClient,
    SpApiConfig,
};

fn token() -> AccessToken {
    AccessToken::new("Atza|token").unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_marketplace_determines_region_and_endpoint() {
    let cases = [
        (Marketplace::US, "https://sellingpartnerapi-na.amazon.com"),
        (Marketplace::BR, "https://sellingpartnerapi-na.amazon.com"),
        (Marketplace::DE, "https://sellingpartnerapi-eu.amazon.com"),
        (Marketplace::IN, "https://sellingpartnerapi-eu.amazon.com"),
        (Marketplace::JP, "https://sellingpartnerapi-fe.amazon.com"),
        (Marketplace::AU, "https://sellingpartnerapi-fe.amazon.com"),
    ];

    for (marketplace, endpoint) in cases {
        let config = SpApiConfig::builder()
            .access_token(token())
            .marketplace(marketplace)
            .build()
            .unwrap();
        assert_eq!(config.endpoint(), endpoint, "endpoint for {marketplace}");
    }
}

#[test]
fn test_sandbox_and_region_override() {
    let config = SpApiConfig::builder()
        .access_token(token())
        .marketplace(Marketplace::US)
        .region(Region::Europe)
        .sandbox(true)
        .build()
        .unwrap();

    assert_eq!(config.region(), Region::Europe);
    assert!(config.sandbox());
    assert_eq!(
        config.endpoint(),
        "https://sandbox.sellingpartnerapi-eu.amazon.com"
    );
}

#[test]
fn test_endpoint_override_wins_over_sandbox() {
    let config = SpApiConfig::builder()
        .access_token(token())
        .sandbox(true)
        .endpoint(BaseUrl::new("http://localhost:8080/").unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(config.endpoint(), "http://localhost:8080");
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn test_missing_access_token_fails_build() {
    let result = SpApiConfig::builder().marketplace(Marketplace::UK).build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "access_token"
        })
    ));
}

#[test]
fn test_access_token_is_masked_in_debug_output() {
    let config = SpApiConfig::builder()
        .access_token(AccessToken::new("Atza|super-secret").unwrap())
        .build()
        .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_marketplace_parses_country_codes() {
    assert_eq!("de".parse::<Marketplace>().unwrap(), Marketplace::DE);
    assert_eq!("GB".parse::<Marketplace>().unwrap(), Marketplace::UK);
    assert!(matches!(
        "XX".parse::<Marketplace>(),
        Err(ConfigError::UnknownMarketplace { .. })
    ));
}

#[test]
fn test_client_builds_from_config() {
    let config = SpApiConfig::builder()
        .access_token(token())
        .marketplace(Marketplace::JP)
        .build()
        .unwrap();
    let client = ShippingClient::new(&config).unwrap();

    assert_eq!(client.marketplace(), Marketplace::JP);
    assert_eq!(
        client.http_client().base_uri(),
        "https://sellingpartnerapi-fe.amazon.com"
    );
}

// ============================================================================
// Operation Registry
// ============================================================================

#[test]
fn test_registry_covers_every_operation() {
    assert_eq!(Operation::ALL.len(), 13);

    let names: Vec<&str> = Operation::ALL.iter().map(Operation::as_str).collect();
    for expected in [
        "create_shipment",
        "get_shipment",
        "cancel_shipment",
        "purchase_labels",
        "retrieve_shipping_label",
        "purchase_shipment",
        "get_rates",
        "get_account",
        "get_tracking_information",
        "get_time_slots",
        "get_packages",
        "create_scheduled_packages",
        "update_scheduled_packages",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_registry_methods() {
    assert_eq!(
        Operation::CancelShipment.endpoint().http_method,
        HttpMethod::Post
    );
    assert_eq!(
        Operation::UpdateScheduledPackages.endpoint().http_method,
        HttpMethod::Patch
    );
    assert_eq!(
        Operation::GetPackages.endpoint().payload_kind(),
        PayloadKind::Query
    );
    assert_eq!(
        Operation::CreateScheduledPackages.endpoint().payload_kind(),
        PayloadKind::Body
    );
}

#[test]
fn test_registry_paths_resolve() {
    assert_eq!(
        fill_path(&RETRIEVE_SHIPPING_LABEL, &["S1", "T1"]).unwrap(),
        "/shipping/v1/shipments/S1/containers/T1/label"
    );
    assert_eq!(
        GET_TRACKING_INFORMATION.path(&["1Z999"]).unwrap(),
        "/shipping/v1/tracking/1Z999"
    );
    assert!(GET_TRACKING_INFORMATION.path(&[]).is_err());
}
