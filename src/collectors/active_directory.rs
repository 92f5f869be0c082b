//! Active Directory Metrics Publisher
//!
//! # Metrics Produced
//! - `pdq_device_active_directory_info` - AD computer account (value is always 1)
//!   - Labels: hostname, device_id, ad_device_name
//! - `pdq_device_active_directory_group_member` - AD group membership (value is always 1)
//!   - Labels: hostname, device_id, group

use super::label_or_unknown;
use crate::metrics::MetricsCollector;
use crate::pdq::types::Device;

/// Publishes Active Directory series for one device
///
/// Devices that are not domain-joined produce no AD info series. Group
/// membership is one series per group.
pub fn publish_active_directory_metrics(metrics: &MetricsCollector, device: &Device) {
    let hostname = label_or_unknown(device.hostname.as_deref());
    let device_id = label_or_unknown(device.id.as_deref());

    if let Some(ad) = &device.active_directory {
        metrics
            .device_active_directory_info
            .with_label_values(&[
                hostname,
                device_id,
                label_or_unknown(ad.device_name.as_deref()),
            ])
            .set(1);
    }

    for group in device.active_directory_groups.as_deref().unwrap_or(&[]) {
        metrics
            .device_active_directory_group_member
            .with_label_values(&[hostname, device_id, label_or_unknown(group.name.as_deref())])
            .set(1);
    }
}
