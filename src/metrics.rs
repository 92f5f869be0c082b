//! Prometheus Metrics Definitions
//!
//! This module defines all Prometheus metrics exposed by the PDQ Connect
//! exporter.
//!
//! # Metric Categories
//!
//! ## Device Inventory
//! - `pdq_device_info` - one series per device carrying the complete flattened
//!   label set, including the formatted disk/driver/custom-field summaries
//!
//! ## Per-Entity Inventory
//! - Disk info and capacity, labeled by device and disk id
//! - Driver info, labeled by device and driver id
//! - Custom field values and Active Directory membership
//!
//! ## Operational
//! - `pdq_up` - whether the last poll cycle succeeded
//! - `pdq_device_count` - devices returned by the last successful poll
//!
//! # Metric Types
//!
//! - **Gauge**: Current value (e.g., device count)
//! - **IntGaugeVec**: Labeled presence gauge (value is always 1)
//! - **GaugeVec**: Labeled numeric gauge (e.g., disk capacity)
//!
//! All metrics use the `pdq_` namespace prefix. Every inventory gauge carries
//! the stable identifying labels (`hostname`, `device_id`, plus the entity's
//! own id) so series survive re-publication across poll cycles.

use prometheus::{Encoder, Gauge, GaugeVec, IntGaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Metrics collector for the PDQ Connect exporter
#[derive(Clone)]
pub struct MetricsCollector {
    registry: Arc<Registry>,

    // Combined per-device variant: one giant label set per device
    pub device_info: Arc<IntGaugeVec>,

    // Per-entity variant: narrower gauges keyed by stable ids
    pub device_disk_info: Arc<IntGaugeVec>,
    pub device_disk_total_space_kilobytes: Arc<GaugeVec>,
    pub device_driver_info: Arc<IntGaugeVec>,
    pub device_custom_field_info: Arc<IntGaugeVec>,
    pub device_active_directory_info: Arc<IntGaugeVec>,
    pub device_active_directory_group_member: Arc<IntGaugeVec>,

    // Operational metrics
    pub device_count: Arc<Gauge>,
    pub up: Arc<Gauge>,
}

impl MetricsCollector {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let device_info = IntGaugeVec::new(
            Opts::new(
                "device_info",
                "Information about devices managed by PDQ Connect (value is always 1)",
            )
            .namespace("pdq"),
            &[
                "hostname",
                "architecture",
                "id",
                "inserted_at",
                "last_user",
                "model",
                "name",
                "os_version",
                "public_ip_address",
                "serial_number",
                "service_pack",
                "active_directory",
                "custom_fields",
                "disks",
                "drivers",
            ],
        )?;

        let device_disk_info = IntGaugeVec::new(
            Opts::new(
                "device_disk_info",
                "Disk attached to a managed device (value is always 1)",
            )
            .namespace("pdq"),
            &["hostname", "device_id", "disk_id", "model", "media_type"],
        )?;

        let device_disk_total_space_kilobytes = GaugeVec::new(
            Opts::new(
                "device_disk_total_space_kilobytes",
                "Total capacity of a disk attached to a managed device, in KB",
            )
            .namespace("pdq"),
            &["hostname", "device_id", "disk_id"],
        )?;

        let device_driver_info = IntGaugeVec::new(
            Opts::new(
                "device_driver_info",
                "Driver installed on a managed device (value is always 1)",
            )
            .namespace("pdq"),
            &[
                "hostname",
                "device_id",
                "driver_id",
                "name",
                "version",
                "provider",
            ],
        )?;

        let device_custom_field_info = IntGaugeVec::new(
            Opts::new(
                "device_custom_field_info",
                "Custom field set on a managed device (value is always 1)",
            )
            .namespace("pdq"),
            &["hostname", "device_id", "field", "value"],
        )?;

        let device_active_directory_info = IntGaugeVec::new(
            Opts::new(
                "device_active_directory_info",
                "Active Directory computer account linked to a managed device (value is always 1)",
            )
            .namespace("pdq"),
            &["hostname", "device_id", "ad_device_name"],
        )?;

        let device_active_directory_group_member = IntGaugeVec::new(
            Opts::new(
                "device_active_directory_group_member",
                "Active Directory group membership of a managed device (value is always 1)",
            )
            .namespace("pdq"),
            &["hostname", "device_id", "group"],
        )?;

        let device_count = Gauge::new(
            "pdq_device_count",
            "Number of devices returned by the last successful poll",
        )?;

        let up = Gauge::new(
            "pdq_up",
            "Whether the last PDQ Connect poll succeeded (1=up, 0=down)",
        )?;

        // Register all metrics
        registry.register(Box::new(device_info.clone()))?;
        registry.register(Box::new(device_disk_info.clone()))?;
        registry.register(Box::new(device_disk_total_space_kilobytes.clone()))?;
        registry.register(Box::new(device_driver_info.clone()))?;
        registry.register(Box::new(device_custom_field_info.clone()))?;
        registry.register(Box::new(device_active_directory_info.clone()))?;
        registry.register(Box::new(device_active_directory_group_member.clone()))?;
        registry.register(Box::new(device_count.clone()))?;
        registry.register(Box::new(up.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            device_info: Arc::new(device_info),
            device_disk_info: Arc::new(device_disk_info),
            device_disk_total_space_kilobytes: Arc::new(device_disk_total_space_kilobytes),
            device_driver_info: Arc::new(device_driver_info),
            device_custom_field_info: Arc::new(device_custom_field_info),
            device_active_directory_info: Arc::new(device_active_directory_info),
            device_active_directory_group_member: Arc::new(device_active_directory_group_member),
            device_count: Arc::new(device_count),
            up: Arc::new(up),
        })
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Clear every device-scoped series
    ///
    /// Called before republishing a fresh inventory so devices that have been
    /// decommissioned upstream drop out of the exposition instead of
    /// accumulating forever. Operational gauges (`pdq_up`, `pdq_device_count`)
    /// are left untouched.
    pub fn reset_device_metrics(&self) {
        self.device_info.reset();
        self.device_disk_info.reset();
        self.device_disk_total_space_kilobytes.reset();
        self.device_driver_info.reset();
        self.device_custom_field_info.reset();
        self.device_active_directory_info.reset();
        self.device_active_directory_group_member.reset();
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics collector")
    }
}
