//! # nbinv core
//!
//! * **[`engine`]**: turns NetBox host records into an Ansible inventory.
//! * **[`netbox`]**: paginated HTTP client for the NetBox API.
//! * **[`service`]**: the "generate inventory" use case tying both together.

pub mod engine;
pub mod netbox;
pub mod service;
