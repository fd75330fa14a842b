//! Batch orchestration: records in, inventory out.

use nbinv_common::error::InventoryError;
use nbinv_common::inventory::{DEFAULT_SEPARATOR, HostVars, Inventory, InventorySchema};
use serde_json::Value;
use tracing::debug;

use super::composer::{self, Placeholder};
use super::{groups, host_vars};

pub struct InventoryBuilder<'s> {
    schema: &'s InventorySchema,
}

impl<'s> InventoryBuilder<'s> {
    pub fn new(schema: &'s InventorySchema) -> Self {
        Self { schema }
    }

    /// Runs every record through group assignment and variable extraction.
    ///
    /// An empty batch yields an inventory without `_meta`. The first error
    /// aborts the build and nothing built so far is returned.
    pub fn build(&self, hosts: &[Value]) -> Result<Inventory, InventoryError> {
        let mut inventory = Inventory::new();
        if hosts.is_empty() {
            return Ok(inventory);
        }

        inventory.init_meta();

        for record in hosts {
            let host_key: String = self.host_key(record)?;
            groups::assign(&self.schema.group_by, &host_key, record, &mut inventory)?;

            let vars: HostVars = host_vars::extract(record, &self.schema.host_vars)?;
            debug!("{host_key}: {} variable(s)", vars.len());
            if !vars.is_empty() {
                inventory.set_host_vars(&host_key, vars);
            }
        }

        Ok(inventory)
    }

    /// The inventory name of `record`: its identity fields joined by `_`,
    /// leaving out any that are missing or empty.
    pub fn host_key(&self, record: &Value) -> Result<String, InventoryError> {
        let key: String =
            composer::compose(record, &self.schema.host_key, DEFAULT_SEPARATOR, Placeholder::Skip)?;

        if key.is_empty() {
            let fields: Vec<String> = self.schema.host_key.iter().map(ToString::to_string).collect();
            return Err(InventoryError::EmptyHostKey {
                fields: fields.join(", "),
            });
        }
        Ok(key)
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
