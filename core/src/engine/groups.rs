//! Group assignment.

use nbinv_common::error::InventoryError;
use nbinv_common::inventory::{GroupingRule, Inventory, UNGROUPED};
use serde_json::Value;
use tracing::{debug, trace};

use super::composer::{self, Placeholder, SENTINEL};
use super::resolver::{self, OnMissing};

/// Places `host_key` into every group its `rules` produce for `record`.
///
/// Without rules the host goes to the `ungrouped` bucket. Each rule yields at
/// most one group; rules are applied in configuration order. The first segment
/// of every grouping path must exist at the top level of the record, otherwise
/// the rule refers to something NetBox does not have and the run is aborted.
pub fn assign(
    rules: &[GroupingRule],
    host_key: &str,
    record: &Value,
    inventory: &mut Inventory,
) -> Result<(), InventoryError> {
    if rules.is_empty() {
        inventory.add_to_group(UNGROUPED, host_key)?;
        return Ok(());
    }

    for rule in rules {
        ensure_known_fields(rule, host_key, record)?;

        let group: String =
            composer::compose(record, rule.paths(), &rule.separator, Placeholder::Sentinel(SENTINEL))?;

        if group.is_empty() {
            debug!("Rule produced no group name for {host_key}, skipping it");
            continue;
        }

        if inventory.add_to_group(&group, host_key)? {
            trace!("{host_key} joined {group}");
        }
    }

    Ok(())
}

fn ensure_known_fields(rule: &GroupingRule, host_key: &str, record: &Value) -> Result<(), InventoryError> {
    for path in rule.paths() {
        resolver::resolve(record, &path.root_path(), OnMissing::Fail).map_err(|_| {
            InventoryError::UnknownGroupField {
                path: path.to_string(),
                host: host_key.to_string(),
            }
        })?;
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
