//! PDQ Connect API Type Definitions
//!
//! This module contains Rust struct definitions for the PDQ Connect REST API
//! responses, used for deserializing the JSON body of `GET /devices`.
//!
//! # Design Notes
//!
//! - **Optional Fields**: Nearly every field is `Option<T>` because the API may
//!   omit them or return null depending on the agent version and OS.
//! - **Serde Defaults**: `#[serde(default)]` is used extensively to handle
//!   missing fields gracefully; nested collections are `Option<Vec<T>>` so an
//!   explicit JSON null deserializes the same as an absent key.
//! - **Naming**: The API uses camelCase field names; `rename_all` maps them to
//!   snake_case.

use serde::Deserialize;

/// One page of the paginated `GET /devices` response
#[derive(Debug, Deserialize)]
pub struct DevicesPage {
    #[serde(default)]
    pub data: Vec<Device>,
}

/// A managed device record
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    pub id: Option<String>,
    pub hostname: Option<String>,
    pub name: Option<String>,
    pub architecture: Option<String>,
    pub inserted_at: Option<String>,
    pub last_user: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub public_ip_address: Option<String>,
    pub serial_number: Option<String>,
    pub service_pack: Option<String>,
    pub active_directory: Option<ActiveDirectory>,
    pub active_directory_groups: Option<Vec<ActiveDirectoryGroup>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub disks: Option<Vec<Disk>>,
    pub drivers: Option<Vec<Driver>>,
}

/// Active Directory computer account linked to a device
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveDirectory {
    pub device_name: Option<String>,
}

/// Active Directory group the device is a member of
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveDirectoryGroup {
    pub name: Option<String>,
}

/// User-defined custom field attached to a device
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Physical disk reported by the device agent
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Disk {
    pub id: Option<String>,
    pub model: Option<String>,
    pub media_type: Option<String>,
    pub total_space_kb: Option<u64>,
}

/// Installed driver reported by the device agent
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Driver {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub provider: Option<String>,
}
