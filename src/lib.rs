//! PDQ Connect Prometheus Exporter
//!
//! A Prometheus metrics exporter for device inventory managed by PDQ Connect.
//!
//! # Overview
//!
//! This exporter polls the PDQ Connect REST API on a fixed interval, flattens
//! each device record (including disks, drivers, custom fields, and Active
//! Directory membership) into labeled gauges, and exposes them in Prometheus
//! format for scraping by Prometheus/Grafana.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      HTTPS           ┌──────────────┐
//! │ PDQ Connect │ ◄─────────────────►  │   Exporter   │
//! │     API     │   JSON + Bearer      │              │
//! └─────────────┘                      │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                      │  │ Client │  │ ◄────────────► │ Prometheus │
//!                                      │  └────────┘  │   /metrics     └────────────┘
//!                                      │  ┌────────┐  │
//!                                      │  │Metrics │  │
//!                                      │  └────────┘  │
//!                                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pdq`] - HTTP API client and response type definitions
//! - [`collectors`] - Flattening of device records into labeled gauges
//! - [`metrics`] - Prometheus metric definitions
//! - [`server`] - HTTP server and polling loop
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use pdq_connect_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - ✅ Full paginated inventory fetch per poll cycle
//! - ✅ Per-device info gauge with the complete flattened label set
//! - ✅ Per-entity gauges for disks, drivers, custom fields, and AD membership
//! - ✅ Stale series cleared when devices leave the inventory
//! - ✅ API key sourced from environment or config, never hardcoded

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pdq;
pub mod server;
