//! PDQ Connect HTTP API Client
//!
//! This module provides a client for the PDQ Connect REST API. All requests
//! are plain HTTPS with JSON bodies and bearer-token authentication.
//!
//! # Pagination
//!
//! `GET /devices` is paginated. [`PdqClient::query_devices`] requests
//! successive pages (sorted by `insertedAt` so page boundaries stay stable)
//! until the API returns a page shorter than the configured page size, and
//! returns the accumulated inventory.
//!
//! # Example
//!
//! ```no_run
//! use pdq_connect_exporter::config::PdqConfig;
//! use pdq_connect_exporter::pdq::PdqClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PdqConfig {
//!     base_url: "https://app.pdq.com/v1/api".to_string(),
//!     api_key: SecretString::from("your-api-key"),
//!     page_size: 100,
//!     request_timeout_seconds: 30,
//! };
//!
//! let client = PdqClient::new(config)?;
//! let devices = client.query_devices().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::PdqConfig;
use crate::error::{ExporterError, Result};
use crate::pdq::types::{Device, DevicesPage};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Sub-entities requested alongside each device record
const DEVICE_INCLUDES: &str = "disks,drivers,features,networking,processors,updates,software,activeDirectory,activeDirectoryGroups,customFields";

/// Client for the PDQ Connect REST API
///
/// Wraps a pooled `reqwest::Client`; cheap to share behind an `Arc` across
/// async tasks. The API key is only exposed at the point the Authorization
/// header is built.
pub struct PdqClient {
    http: reqwest::Client,
    config: Arc<PdqConfig>,
}

impl PdqClient {
    pub fn new(config: PdqConfig) -> Result<Self> {
        if config.page_size == 0 {
            return Err(ExporterError::Config(
                "pdq.page_size must be at least 1".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("pdq-connect-exporter/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Fetch the complete device inventory
    ///
    /// Walks `GET /devices` page by page until a short page signals the end of
    /// the result set. Returns the full accumulated device list, or an error if
    /// any page request fails:
    /// - 401/403 map to [`ExporterError::Auth`]
    /// - other non-success statuses map to [`ExporterError::PdqApi`]
    /// - transport and decode failures map through [`ExporterError::Http`]
    pub async fn query_devices(&self) -> Result<Vec<Device>> {
        let url = format!("{}/devices", self.config.base_url.trim_end_matches('/'));
        let page_size = self.config.page_size.to_string();
        let mut devices = Vec::new();
        let mut page: u32 = 1;

        loop {
            let page_number = page.to_string();
            let response = self
                .http
                .get(&url)
                .bearer_auth(self.config.api_key.expose_secret())
                .header("accept", "application/json")
                .query(&[
                    ("includes", DEVICE_INCLUDES),
                    ("pageSize", page_size.as_str()),
                    ("page", page_number.as_str()),
                    ("sort", "insertedAt"),
                ])
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(ExporterError::Auth(format!(
                    "PDQ Connect rejected the API key (HTTP {})",
                    status
                )));
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ExporterError::PdqApi(format!(
                    "GET /devices page {} returned HTTP {}: {}",
                    page, status, body
                )));
            }

            let batch: DevicesPage = response.json().await?;
            let fetched = batch.data.len();
            debug!("Fetched {} devices from page {}", fetched, page);
            devices.extend(batch.data);

            if fetched < self.config.page_size as usize {
                break;
            }
            page += 1;
        }

        info!("Fetched {} devices across {} page(s)", devices.len(), page);
        Ok(devices)
    }
}
