use thiserror::Error;

/// Problems with the configuration document itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required key is absent. Holds the dotted key, e.g. `netbox.main.api_url`.
    #[error("the key {0} is not found in config file")]
    MissingKey(&'static str),

    #[error("a field path needs at least one segment")]
    EmptyFieldPath,
}

/// Failures raised while turning host records into an inventory.
///
/// Every variant is fatal for the whole batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// A fail-fast lookup did not find `segment` while walking `path`.
    #[error("the key '{segment}' of field path '{path}' is not found (keys are case sensitive)")]
    MissingField { path: String, segment: String },

    /// A grouping rule points at a top-level field the host record does not have.
    #[error("grouping field '{path}' is not a known field of host '{host}'")]
    UnknownGroupField { path: String, host: String },

    #[error("host identity fields [{fields}] are all empty")]
    EmptyHostKey { fields: String },

    #[error("field '{path}' holds a {kind}, which cannot be used as part of a name")]
    NonScalarKeyPart { path: String, kind: &'static str },

    #[error("'{0}' is reserved and cannot be used as a group name")]
    ReservedGroupName(String),
}
