//! Disk Metrics Publisher
//!
//! Publishes one info series and one capacity series per disk attached to a
//! managed device.
//!
//! # Metrics Produced
//! - `pdq_device_disk_info` - Disk information (value is always 1)
//!   - Labels: hostname, device_id, disk_id, model, media_type
//! - `pdq_device_disk_total_space_kilobytes` - Disk capacity in KB
//!   - Labels: hostname, device_id, disk_id

use super::label_or_unknown;
use crate::metrics::MetricsCollector;
use crate::pdq::types::Device;

/// Publishes disk series for one device
///
/// Disks with no reported capacity publish 0 KB.
pub fn publish_disk_metrics(metrics: &MetricsCollector, device: &Device) {
    let hostname = label_or_unknown(device.hostname.as_deref());
    let device_id = label_or_unknown(device.id.as_deref());

    for disk in device.disks.as_deref().unwrap_or(&[]) {
        let disk_id = label_or_unknown(disk.id.as_deref());

        metrics
            .device_disk_info
            .with_label_values(&[
                hostname,
                device_id,
                disk_id,
                label_or_unknown(disk.model.as_deref()),
                label_or_unknown(disk.media_type.as_deref()),
            ])
            .set(1);

        metrics
            .device_disk_total_space_kilobytes
            .with_label_values(&[hostname, device_id, disk_id])
            .set(disk.total_space_kb.unwrap_or(0) as f64);
    }
}
