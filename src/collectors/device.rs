//! Combined Device Info Publisher
//!
//! Flattens a whole device record into a single `pdq_device_info` series: one
//! label per scalar field, with disks, drivers, and custom fields collapsed
//! into formatted summary strings.
//!
//! # Metrics Produced
//! - `pdq_device_info` - Device information (value is always 1)
//!   - Labels: hostname, architecture, id, inserted_at, last_user, model,
//!     name, os_version, public_ip_address, serial_number, service_pack,
//!     active_directory, custom_fields, disks, drivers

use super::label_or_unknown;
use crate::metrics::MetricsCollector;
use crate::pdq::types::{CustomField, Device, Disk, Driver};

/// Format custom fields into a `name=value` summary string
pub fn format_custom_fields(fields: &[CustomField]) -> String {
    fields
        .iter()
        .map(|field| {
            format!(
                "{}={}",
                label_or_unknown(field.name.as_deref()),
                label_or_unknown(field.value.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format disks into a `Disk id: model, media type, size` summary string
pub fn format_disks(disks: &[Disk]) -> String {
    disks
        .iter()
        .map(|disk| {
            let total_space = disk
                .total_space_kb
                .map(|kb| kb.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!(
                "Disk {}: {}, {}, {} KB",
                label_or_unknown(disk.id.as_deref()),
                label_or_unknown(disk.model.as_deref()),
                label_or_unknown(disk.media_type.as_deref()),
                total_space
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format drivers into a `Driver id: name, version, provider` summary string
pub fn format_drivers(drivers: &[Driver]) -> String {
    drivers
        .iter()
        .map(|driver| {
            format!(
                "Driver {}: {}, {}, {}",
                label_or_unknown(driver.id.as_deref()),
                label_or_unknown(driver.name.as_deref()),
                label_or_unknown(driver.version.as_deref()),
                label_or_unknown(driver.provider.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Publishes the combined `pdq_device_info` series for one device
///
/// An absent or empty sub-entity list collapses to the `"unknown"` sentinel,
/// matching the substitution applied to missing scalar fields.
pub fn publish_device_info(metrics: &MetricsCollector, device: &Device) {
    let active_directory = device
        .active_directory
        .as_ref()
        .and_then(|ad| ad.device_name.as_deref())
        .unwrap_or("unknown");

    let custom_fields = match device.custom_fields.as_deref() {
        Some(fields) if !fields.is_empty() => format_custom_fields(fields),
        _ => "unknown".to_string(),
    };
    let disks = match device.disks.as_deref() {
        Some(disks) if !disks.is_empty() => format_disks(disks),
        _ => "unknown".to_string(),
    };
    let drivers = match device.drivers.as_deref() {
        Some(drivers) if !drivers.is_empty() => format_drivers(drivers),
        _ => "unknown".to_string(),
    };

    metrics
        .device_info
        .with_label_values(&[
            label_or_unknown(device.hostname.as_deref()),
            label_or_unknown(device.architecture.as_deref()),
            label_or_unknown(device.id.as_deref()),
            label_or_unknown(device.inserted_at.as_deref()),
            label_or_unknown(device.last_user.as_deref()),
            label_or_unknown(device.model.as_deref()),
            label_or_unknown(device.name.as_deref()),
            label_or_unknown(device.os_version.as_deref()),
            label_or_unknown(device.public_ip_address.as_deref()),
            label_or_unknown(device.serial_number.as_deref()),
            label_or_unknown(device.service_pack.as_deref()),
            active_directory,
            &custom_fields,
            &disks,
            &drivers,
        ])
        .set(1);
}
