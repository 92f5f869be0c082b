//! Edge case tests
//!
//! Tests for unusual but valid data scenarios.

use pdq_connect_exporter::collectors::{self, CollectionContext};
use pdq_connect_exporter::config::MetricsConfig;
use pdq_connect_exporter::metrics::MetricsCollector;
use pdq_connect_exporter::pdq::types::Device;
use serde_json::json;

/// Helper to create a test metrics instance
fn create_test_metrics() -> MetricsCollector {
    MetricsCollector::new().expect("Failed to create metrics")
}

fn full_config() -> MetricsConfig {
    MetricsConfig {
        poll_interval_seconds: 60,
        collect_device_info: true,
        collect_entity_metrics: true,
        clear_stale_metrics: true,
    }
}

fn device_from(value: serde_json::Value) -> Device {
    serde_json::from_value(value).expect("Failed to parse device")
}

#[test]
fn test_empty_inventory_renders_without_error() {
    // Given: A poll that returned no devices
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing the empty inventory
    collectors::publish_device_metrics(&ctx, &[]);

    // Then: Rendering succeeds and the count is zero
    let rendered = metrics.render().expect("Failed to render");
    assert!(rendered.contains("# HELP"));
    assert!(rendered.contains("pdq_device_count 0"));
}

#[test]
fn test_hostname_with_spaces() {
    // Given: A device whose hostname contains spaces
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing
    collectors::publish_device_metrics(
        &ctx,
        &[device_from(json!({"id": "dev-1", "hostname": "front desk pc"}))],
    );

    // Then: Should escape or handle spaces correctly
    let rendered = metrics.render().expect("Failed to render");
    assert!(rendered.contains("front desk pc"));
}

#[test]
fn test_unicode_in_labels() {
    // Given: Devices with Unicode hostnames and user names
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing
    collectors::publish_device_metrics(
        &ctx,
        &[
            device_from(json!({"id": "dev-1", "hostname": "poste-été"})), // French
            device_from(json!({"id": "dev-2", "hostname": "端末", "lastUser": "佐藤"})), // Japanese
        ],
    );

    // Then: Rendering should not panic and should preserve the characters
    let rendered = metrics.render().expect("Failed to render");
    assert!(rendered.contains("poste-été"));
    assert!(rendered.contains("端末"));
    assert!(rendered.contains("佐藤"));
}

#[test]
fn test_very_large_disk_capacity() {
    // Given: A petabyte-scale disk
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing
    collectors::publish_device_metrics(
        &ctx,
        &[device_from(json!({
            "id": "dev-1",
            "hostname": "san-head",
            "disks": [{"id": "disk-1", "model": "Array", "mediaType": "SAN", "totalSpaceKb": 5_000_000_000_000u64}]
        }))],
    );

    // Then: Should handle very large numbers
    let rendered = metrics.render().expect("Failed to render");
    assert!(rendered.contains("pdq_device_disk_total_space_kilobytes"));
    assert!(rendered.contains("san-head"));
}

#[test]
fn test_label_values_with_quotes_and_backslashes() {
    // Given: A custom field value containing characters the text format escapes
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing
    collectors::publish_device_metrics(
        &ctx,
        &[device_from(json!({
            "id": "dev-1",
            "hostname": "ws-001",
            "customFields": [{"name": "note", "value": "rack \"B\" \\ bay 3"}]
        }))],
    );

    // Then: Rendering should not panic
    let result = metrics.render();
    assert!(result.is_ok());
}

#[test]
fn test_many_entities_on_one_device() {
    // Given: A device with a large driver inventory
    let drivers: Vec<serde_json::Value> = (0..500)
        .map(|i| json!({"id": format!("drv-{i}"), "name": format!("driver_{i}")}))
        .collect();
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };

    // When: Publishing
    collectors::publish_device_metrics(
        &ctx,
        &[device_from(json!({
            "id": "dev-1",
            "hostname": "ws-001",
            "drivers": drivers
        }))],
    );

    // Then: Every driver gets its own series
    let rendered = metrics.render().expect("Failed to render");
    assert!(rendered.contains("driver_0"));
    assert!(rendered.contains("driver_499"));
}

#[test]
fn test_duplicate_devices_collapse_to_one_series() {
    // Given: The same device appearing twice in one poll (API quirk)
    let metrics = create_test_metrics();
    let config = full_config();
    let ctx = CollectionContext {
        metrics: &metrics,
        config: &config,
    };
    let device = device_from(json!({"id": "dev-1", "hostname": "ws-001"}));

    // When: Publishing
    collectors::publish_device_metrics(&ctx, &[device.clone(), device]);

    // Then: Identical label sets collapse into a single series, count shows 2
    let rendered = metrics.render().expect("Failed to render");
    assert_eq!(rendered.matches("hostname=\"ws-001\"").count(), 1);
    assert!(rendered.contains("pdq_device_count 2"));
}
