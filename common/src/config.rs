//! # Configuration
//!
//! The YAML file describing where NetBox lives and how its devices map onto
//! an Ansible inventory. Everything sits below a top-level `netbox` key:
//!
//! ```yaml
//! netbox:
//!   main:
//!     api_url: https://netbox.example.com/api/dcim/devices/
//!     api_token: 0123456789abcdef
//!   group_by:
//!     - grouping:
//!         netbox_fields:
//!           - path: [rack, name]
//!   hosts_vars:
//!     - inventory_var_name: ansible_ssh_host
//!       netbox_field: { path: [primary_ip, address] }
//!       is_address: true
//!   host_key: [name]
//! ```
//!
//! The file is parsed once at start-up into a [`Config`] that is handed to the
//! services that need it.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::inventory::{FieldPath, GroupingRule, InventorySchema, VariableRule};

pub const DEFAULT_CONFIG_FILE: &str = "netbox.yml";
pub const CONFIG_FILE_ENV: &str = "NETBOX_CONFIG_FILE";

/// Where and how to reach the NetBox API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub url: String,
    /// Sent as `Authorization: Token <token>` when present.
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    pub schema: InventorySchema,
}

#[derive(Deserialize)]
struct ConfigFile {
    netbox: Option<NetboxSection>,
}

#[derive(Default, Deserialize)]
struct NetboxSection {
    main: Option<MainSection>,
    group_by: Option<Vec<GroupBy>>,
    hosts_vars: Option<Vec<VariableRule>>,
    host_key: Option<Vec<FieldPath>>,
}

#[derive(Default, Deserialize)]
struct MainSection {
    api_url: Option<String>,
    api_token: Option<String>,
}

#[derive(Deserialize)]
struct GroupBy {
    grouping: GroupingRule,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document parses to null; treat it like `{}`.
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        let file: ConfigFile = if raw.is_null() {
            ConfigFile { netbox: None }
        } else {
            serde_yaml::from_value(raw)?
        };

        let netbox = file.netbox.unwrap_or_default();
        let main = netbox.main.unwrap_or_default();

        let url = main
            .api_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingKey("netbox.main.api_url"))?;
        let token = main.api_token.filter(|token| !token.is_empty());
        if token.is_none() {
            debug!("No api_token configured, querying NetBox anonymously");
        }

        let host_key = match netbox.host_key {
            Some(fields) if !fields.is_empty() => fields,
            _ => {
                debug!("No host_key configured, keying hosts by name");
                InventorySchema::default_host_key()
            }
        };

        let schema = InventorySchema {
            group_by: netbox
                .group_by
                .unwrap_or_default()
                .into_iter()
                .map(|entry| entry.grouping)
                .collect(),
            host_vars: netbox.hosts_vars.unwrap_or_default(),
            host_key,
        };

        Ok(Self {
            api: ApiConfig { url, token },
            schema,
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
