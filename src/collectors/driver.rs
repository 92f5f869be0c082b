//! Driver Metrics Publisher
//!
//! # Metrics Produced
//! - `pdq_device_driver_info` - Driver information (value is always 1)
//!   - Labels: hostname, device_id, driver_id, name, version, provider

use super::label_or_unknown;
use crate::metrics::MetricsCollector;
use crate::pdq::types::Device;

/// Publishes one driver info series per driver installed on the device
pub fn publish_driver_metrics(metrics: &MetricsCollector, device: &Device) {
    let hostname = label_or_unknown(device.hostname.as_deref());
    let device_id = label_or_unknown(device.id.as_deref());

    for driver in device.drivers.as_deref().unwrap_or(&[]) {
        metrics
            .device_driver_info
            .with_label_values(&[
                hostname,
                device_id,
                label_or_unknown(driver.id.as_deref()),
                label_or_unknown(driver.name.as_deref()),
                label_or_unknown(driver.version.as_deref()),
                label_or_unknown(driver.provider.as_deref()),
            ])
            .set(1);
    }
}
