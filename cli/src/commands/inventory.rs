use anyhow::Context;
use nbinv_common::config::Config;
use nbinv_common::inventory::Request;
use nbinv_core::netbox::NetboxClient;
use nbinv_core::service::InventoryService;
use serde_json::Value;
use tracing::{Instrument, debug, info_span};

use crate::commands::CommandLine;
use crate::terminal::{print, spinner};

pub async fn inventory(commands: &CommandLine) -> anyhow::Result<()> {
    let cfg: Config = Config::from_file(&commands.config_file)
        .with_context(|| format!("loading {}", commands.config_file.display()))?;
    debug!(
        "{} grouping rule(s), {} host var(s)",
        cfg.schema.group_by.len(),
        cfg.schema.host_vars.len()
    );

    let request: Request = commands.request();
    let client = NetboxClient::new(&cfg.api)?.with_progress(Box::new(spinner::report_fetch_progress));
    let service = InventoryService::new(Box::new(client), cfg.schema);

    let rendered: anyhow::Result<Value> = service
        .render(&request)
        .instrument(info_span!("inventory"))
        .await;
    spinner::finish();

    print::json(&rendered?, commands.pretty)
}
