//! Per-host variable extraction.

use nbinv_common::error::InventoryError;
use nbinv_common::inventory::{HostVars, VariableRule};
use serde_json::Value;
use tracing::debug;

use super::resolver::{self, OnMissing};

/// Collects the configured variables of one host.
///
/// Fields that are missing or `null` are left out. A missing field only fails
/// the run when its rule has `ignore_missing: false`.
pub fn extract(record: &Value, rules: &[VariableRule]) -> Result<HostVars, InventoryError> {
    let mut vars = HostVars::new();

    for rule in rules {
        let policy = if rule.ignore_missing {
            OnMissing::Ignore
        } else {
            OnMissing::Fail
        };

        let value: &Value = match resolver::resolve(record, rule.path(), policy)? {
            Some(Value::Null) | None => continue,
            Some(value) => value,
        };

        let value: Value = if rule.is_address {
            strip_mask(value).unwrap_or_else(|| {
                debug!("{} is flagged as an address but is not a string", rule.name);
                value.clone()
            })
        } else {
            value.clone()
        };

        vars.insert(rule.name.clone(), value);
    }

    Ok(vars)
}

/// `"192.168.0.2/32"` → `"192.168.0.2"`. Returns `None` for non-strings.
pub fn strip_mask(value: &Value) -> Option<Value> {
    let address: &str = value.as_str()?;
    let bare: &str = address.split_once('/').map_or(address, |(ip, _mask)| ip);
    Some(Value::String(bare.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
