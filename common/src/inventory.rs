//! # Inventory Model
//!
//! Everything the remapping engine reads and writes:
//!
//! * [`FieldPath`]: where a value lives inside a host record.
//! * [`GroupingRule`] / [`VariableRule`]: how records become groups and host variables.
//! * [`Inventory`]: the Ansible dynamic inventory document being accumulated.

mod document;
mod path;
mod rules;

pub use document::{HostVars, Inventory, META_KEY, Request, UNGROUPED};
pub use path::FieldPath;
pub use rules::{DEFAULT_SEPARATOR, GroupingRule, InventorySchema, NetboxField, VariableRule};
