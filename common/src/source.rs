use async_trait::async_trait;
use serde_json::Value;

/// Supplies raw host records, fully materialized.
///
/// Implementations handle transport concerns (HTTP, pagination, auth) so the
/// inventory engine only ever sees a finished list of records.
#[async_trait]
pub trait HostSource: Send + Sync {
    /// Fetches every host, or only those named `name` when a filter is given.
    async fn fetch_hosts(&self, name: Option<&str>) -> anyhow::Result<Vec<Value>>;
}
