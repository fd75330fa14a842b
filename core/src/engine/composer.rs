//! Builds group names and host identities out of several record fields.

use nbinv_common::error::InventoryError;
use nbinv_common::inventory::FieldPath;
use serde_json::Value;

use super::resolver::{self, OnMissing};

/// Stand-in for fields that are missing or empty when naming a group.
pub const SENTINEL: &str = "na";

/// How to treat a part that resolved to nothing (absent or falsy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'s> {
    /// Substitute this text.
    Sentinel(&'s str),
    /// Leave the part out of the key.
    Skip,
}

/// Resolves every path in order and joins the parts with `separator`.
///
/// Strings are used verbatim, numbers and booleans through their JSON text.
/// A non-empty object or array cannot be turned into a name and is an error.
pub fn compose<'p>(
    record: &Value,
    paths: impl IntoIterator<Item = &'p FieldPath>,
    separator: &str,
    placeholder: Placeholder<'_>,
) -> Result<String, InventoryError> {
    let fallback = match placeholder {
        Placeholder::Sentinel(text) => Value::String(text.to_string()),
        Placeholder::Skip => Value::Null,
    };

    let mut parts: Vec<String> = Vec::new();

    for path in paths {
        let value: &Value =
            resolver::resolve(record, path, OnMissing::Default(&fallback))?.unwrap_or(&fallback);

        let part: String = match value {
            v if resolver::is_falsy(v) => match placeholder {
                Placeholder::Sentinel(text) => text.to_string(),
                Placeholder::Skip => continue,
            },
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) | Value::Null => {
                return Err(InventoryError::NonScalarKeyPart {
                    path: path.to_string(),
                    kind: kind_of(value),
                });
            }
        };
        parts.push(part);
    }

    Ok(parts.join(separator))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
        Value::Null => "null",
        _ => "scalar",
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
