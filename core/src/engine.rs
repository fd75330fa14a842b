//! The **remapping engine**.
//!
//! Pure, synchronous functions over `serde_json::Value` host records:
//!
//! 1. [`resolver`] walks a [`FieldPath`](nbinv_common::inventory::FieldPath) through a record.
//! 2. [`composer`] joins several resolved fields into one name.
//! 3. [`groups`] places a host into the groups its grouping rules produce.
//! 4. [`host_vars`] extracts the per-host variables.
//! 5. [`builder`] runs all of the above over a batch of records.
//!
//! Any error aborts the whole batch; the engine never returns a partial inventory.

pub mod builder;
pub mod composer;
pub mod groups;
pub mod host_vars;
pub mod resolver;

pub use builder::InventoryBuilder;
pub use composer::{Placeholder, SENTINEL};
pub use resolver::OnMissing;
