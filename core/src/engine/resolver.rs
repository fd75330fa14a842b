//! Field lookup inside nested host records.

use nbinv_common::error::InventoryError;
use nbinv_common::inventory::FieldPath;
use serde_json::Value;

/// What to do when a path cannot be followed to the end.
#[derive(Debug, Clone, Copy)]
pub enum OnMissing<'a> {
    /// Abort with [`InventoryError::MissingField`].
    Fail,
    /// Report the value as absent (`None`).
    Ignore,
    /// Hand back this value instead.
    Default(&'a Value),
}

/// Follows `path` through `record` one segment at a time.
///
/// Descends only through objects; reaching a scalar or array before the last
/// segment counts as a missing key. A leaf that exists but is `null` comes back
/// as `Some(Value::Null)`, which is not the same as absent (`None`).
pub fn resolve<'a>(
    record: &'a Value,
    path: &FieldPath,
    on_missing: OnMissing<'a>,
) -> Result<Option<&'a Value>, InventoryError> {
    let mut current: &Value = record;

    for segment in path.segments() {
        match current.as_object().and_then(|map| map.get(segment)) {
            Some(next) => current = next,
            None => return missing(path, segment, on_missing),
        }
    }

    Ok(Some(current))
}

fn missing<'a>(
    path: &FieldPath,
    segment: &str,
    on_missing: OnMissing<'a>,
) -> Result<Option<&'a Value>, InventoryError> {
    match on_missing {
        OnMissing::Fail => Err(InventoryError::MissingField {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
        OnMissing::Ignore => Ok(None),
        OnMissing::Default(value) => Ok(Some(value)),
    }
}

/// Python-style truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
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
