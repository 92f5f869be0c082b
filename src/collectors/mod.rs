//! Metric Publishers
//!
//! This module flattens fetched device records into Prometheus label sets.
//! Each submodule is responsible for one metric family; `publish_device_metrics`
//! runs them all over a freshly fetched inventory.
//!
//! # Architecture
//!
//! Unlike exporters where every collector issues its own upstream query, the
//! PDQ Connect inventory arrives as a single paginated fetch. Publishers are
//! therefore synchronous functions over the shared device slice, and the
//! fetch/error boundary lives in the polling loop.
//!
//! # Missing Data
//!
//! Optional string fields the API omitted are substituted with the sentinel
//! `"unknown"` in every label position; missing numeric fields publish as 0.

use crate::config::MetricsConfig;
use crate::metrics::MetricsCollector;
use crate::pdq::types::Device;
use tracing::info;

/// Shared context passed to the publishers
///
/// This struct uses public fields for ergonomic access patterns.
/// All fields are immutable references, so no invariants can be violated.
#[derive(Clone, Copy)]
pub struct CollectionContext<'a> {
    /// Metrics collector for updating Prometheus metrics
    pub metrics: &'a MetricsCollector,
    /// Metrics configuration (flattening variants, stale handling)
    pub config: &'a MetricsConfig,
}

/// Sentinel substituted for label values the upstream API omitted
pub fn label_or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}

/// Publish all metric families for a fetched inventory
///
/// When `clear_stale_metrics` is set, every device-scoped series is cleared
/// first so devices missing from `devices` disappear from the exposition.
/// The configured flattening variants then repopulate the registry, and
/// `pdq_device_count` is updated last.
pub fn publish_device_metrics(ctx: &CollectionContext<'_>, devices: &[Device]) {
    if ctx.config.clear_stale_metrics {
        ctx.metrics.reset_device_metrics();
    }

    for device in devices {
        if ctx.config.collect_device_info {
            device::publish_device_info(ctx.metrics, device);
        }
        if ctx.config.collect_entity_metrics {
            disk::publish_disk_metrics(ctx.metrics, device);
            driver::publish_driver_metrics(ctx.metrics, device);
            custom_field::publish_custom_field_metrics(ctx.metrics, device);
            active_directory::publish_active_directory_metrics(ctx.metrics, device);
        }
    }

    ctx.metrics.device_count.set(devices.len() as f64);
    info!("Updated metrics for {} devices", devices.len());
}

// Publisher modules
pub mod active_directory;
pub mod custom_field;
pub mod device;
pub mod disk;
pub mod driver;

// Re-export publisher functions for convenient access
pub use active_directory::publish_active_directory_metrics;
pub use custom_field::publish_custom_field_metrics;
pub use device::publish_device_info;
pub use disk::publish_disk_metrics;
pub use driver::publish_driver_metrics;
