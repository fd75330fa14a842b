//! # Inventory Service
//!
//! Implements the core "generate inventory" use case.
//!
//! Host records are pulled from a [`HostSource`] (normally the NetBox API) and
//! only then handed to the [`InventoryBuilder`]; fetching and remapping never
//! interleave.

use nbinv_common::inventory::{Inventory, InventorySchema, Request};
use nbinv_common::source::HostSource;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::engine::InventoryBuilder;

/// Application Service for inventory generation.
///
/// Orchestrates the process by:
/// 1. delegating record retrieval to the [`HostSource`] trait.
/// 2. remapping the records according to the [`InventorySchema`].
pub struct InventoryService {
    source: Box<dyn HostSource>,
    schema: InventorySchema,
}

impl InventoryService {
    pub fn new(source: Box<dyn HostSource>, schema: InventorySchema) -> Self {
        Self { source, schema }
    }

    /// Builds the inventory needed to answer `request`.
    ///
    /// A single-host request only fetches records carrying that name when
    /// hosts are keyed by their NetBox name; composite keys need the full
    /// listing. Nothing is fetched when nothing was requested.
    pub async fn generate(&self, request: &Request) -> anyhow::Result<Inventory> {
        if *request == Request::Nothing {
            warn!("Neither --list nor --host was given, returning an empty inventory");
            return Ok(Inventory::new());
        }

        let filter: Option<&str> = if self.schema.keyed_by_name() {
            request.host_filter()
        } else {
            debug!("Host key is not the plain device name, fetching every host");
            None
        };
        let hosts: Vec<Value> = self.source.fetch_hosts(filter).await?;

        let inventory: Inventory = InventoryBuilder::new(&self.schema).build(&hosts)?;
        info!(
            "Mapped {} host(s) into {} group(s), {} with variables",
            hosts.len(),
            inventory.groups().count(),
            inventory.host_count()
        );

        Ok(inventory)
    }

    /// Convenience wrapper returning the JSON document for `request`.
    pub async fn render(&self, request: &Request) -> anyhow::Result<Value> {
        Ok(self.generate(request).await?.render(request))
    }
}
