use std::io::Write;

use anyhow::Context;
use serde_json::Value;

/// Writes the inventory document to stdout, the only thing Ansible reads.
pub fn json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let rendered: String = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("writing inventory to stdout")?;
    stdout.flush().context("writing inventory to stdout")
}
