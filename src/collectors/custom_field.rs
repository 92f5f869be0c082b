//! Custom Field Metrics Publisher
//!
//! # Metrics Produced
//! - `pdq_device_custom_field_info` - Custom field value (value is always 1)
//!   - Labels: hostname, device_id, field, value

use super::label_or_unknown;
use crate::metrics::MetricsCollector;
use crate::pdq::types::Device;

/// Publishes one series per custom field set on the device
pub fn publish_custom_field_metrics(metrics: &MetricsCollector, device: &Device) {
    let hostname = label_or_unknown(device.hostname.as_deref());
    let device_id = label_or_unknown(device.id.as_deref());

    for field in device.custom_fields.as_deref().unwrap_or(&[]) {
        metrics
            .device_custom_field_info
            .with_label_values(&[
                hostname,
                device_id,
                label_or_unknown(field.name.as_deref()),
                label_or_unknown(field.value.as_deref()),
            ])
            .set(1);
    }
}
