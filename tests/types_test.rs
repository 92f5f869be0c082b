use pdq_connect_exporter::pdq::types::*;
use serde_json::json;

#[test]
fn test_deserialize_device() {
    let json = json!({
        "id": "dev-1",
        "hostname": "ws-042",
        "name": "WS-042",
        "architecture": "x86_64",
        "insertedAt": "2024-03-01T10:00:00Z",
        "lastUser": "jdoe",
        "model": "OptiPlex 7090",
        "osVersion": "10.0.19045",
        "publicIpAddress": "203.0.113.9",
        "serialNumber": "SN-1234",
        "servicePack": "SP1",
        "activeDirectory": {"deviceName": "WS-042.corp.example.com"},
        "activeDirectoryGroups": [{"name": "Workstations"}],
        "customFields": [{"name": "owner", "value": "finance"}],
        "disks": [{"id": "disk-1", "model": "Samsung SSD", "mediaType": "SSD", "totalSpaceKb": 512000}],
        "drivers": [{"id": "drv-1", "name": "e1000e", "version": "12.19.2", "provider": "Intel"}]
    });

    let device: Device = serde_json::from_value(json).expect("Failed to parse Device");
    assert_eq!(device.hostname.as_deref(), Some("ws-042"));
    assert_eq!(device.inserted_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert_eq!(device.os_version.as_deref(), Some("10.0.19045"));
    assert_eq!(
        device
            .active_directory
            .as_ref()
            .and_then(|ad| ad.device_name.as_deref()),
        Some("WS-042.corp.example.com")
    );

    let disks = device.disks.expect("disks missing");
    assert_eq!(disks.len(), 1);
    assert_eq!(disks[0].media_type.as_deref(), Some("SSD"));
    assert_eq!(disks[0].total_space_kb, Some(512_000));

    let drivers = device.drivers.expect("drivers missing");
    assert_eq!(drivers[0].provider.as_deref(), Some("Intel"));
}

#[test]
fn test_deserialize_device_with_missing_fields() {
    // Agents on older OS versions omit most of the record
    let json = json!({"id": "dev-2"});

    let device: Device = serde_json::from_value(json).expect("Failed to parse Device");
    assert_eq!(device.id.as_deref(), Some("dev-2"));
    assert_eq!(device.hostname, None);
    assert_eq!(device.service_pack, None);
    assert!(device.active_directory.is_none());
    assert!(device.disks.is_none());
    assert!(device.custom_fields.is_none());
}

#[test]
fn test_deserialize_device_with_null_fields() {
    // Explicit nulls behave the same as absent keys
    let json = json!({
        "id": "dev-3",
        "hostname": null,
        "activeDirectory": null,
        "disks": null,
        "drivers": null,
        "customFields": null,
        "activeDirectoryGroups": null
    });

    let device: Device = serde_json::from_value(json).expect("Failed to parse Device");
    assert_eq!(device.hostname, None);
    assert!(device.active_directory.is_none());
    assert!(device.disks.is_none());
    assert!(device.drivers.is_none());
    assert!(device.active_directory_groups.is_none());
}

#[test]
fn test_deserialize_devices_page() {
    let json = json!({
        "data": [
            {"id": "dev-1", "hostname": "ws-001"},
            {"id": "dev-2", "hostname": "ws-002"}
        ]
    });

    let page: DevicesPage = serde_json::from_value(json).expect("Failed to parse DevicesPage");
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].hostname.as_deref(), Some("ws-002"));
}

#[test]
fn test_deserialize_devices_page_without_data() {
    let page: DevicesPage =
        serde_json::from_value(json!({})).expect("Failed to parse empty DevicesPage");
    assert!(page.data.is_empty());
}

#[test]
fn test_deserialize_partial_disk() {
    let json = json!({"id": "disk-7"});

    let disk: Disk = serde_json::from_value(json).expect("Failed to parse Disk");
    assert_eq!(disk.id.as_deref(), Some("disk-7"));
    assert_eq!(disk.model, None);
    assert_eq!(disk.total_space_kb, None);
}

#[test]
fn test_deserialize_custom_field_without_value() {
    let json = json!({"name": "site"});

    let field: CustomField = serde_json::from_value(json).expect("Failed to parse CustomField");
    assert_eq!(field.name.as_deref(), Some("site"));
    assert_eq!(field.value, None);
}
