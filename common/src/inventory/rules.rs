use serde::Deserialize;

use super::FieldPath;

pub const DEFAULT_SEPARATOR: &str = "_";

/// A `{ path: [...] }` entry of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetboxField {
    pub path: FieldPath,
}

impl From<FieldPath> for NetboxField {
    fn from(path: FieldPath) -> Self {
        Self { path }
    }
}

/// One group-name template. Each host yields at most one group per rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupingRule {
    #[serde(rename = "netbox_fields")]
    pub fields: Vec<NetboxField>,
    #[serde(default = "default_separator", alias = "seperator")]
    pub separator: String,
}

impl GroupingRule {
    pub fn new(paths: Vec<FieldPath>) -> Self {
        Self {
            fields: paths.into_iter().map(NetboxField::from).collect(),
            separator: default_separator(),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.fields.iter().map(|field| &field.path)
    }
}

/// Maps one NetBox field onto one Ansible host variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableRule {
    #[serde(rename = "inventory_var_name")]
    pub name: String,
    #[serde(rename = "netbox_field")]
    pub field: NetboxField,
    /// Strip a trailing `/<mask>` from the value.
    #[serde(default)]
    pub is_address: bool,
    /// When false a host missing this field aborts the run.
    #[serde(default = "default_true")]
    pub ignore_missing: bool,
}

impl VariableRule {
    pub fn new(name: &str, path: FieldPath) -> Self {
        Self {
            name: name.to_string(),
            field: NetboxField::from(path),
            is_address: false,
            ignore_missing: true,
        }
    }

    pub fn address(mut self) -> Self {
        self.is_address = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.ignore_missing = false;
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.field.path
    }
}

/// The mapping half of the configuration: how hosts become groups, variables and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySchema {
    pub group_by: Vec<GroupingRule>,
    pub host_vars: Vec<VariableRule>,
    pub host_key: Vec<FieldPath>,
}

impl InventorySchema {
    pub fn default_host_key() -> Vec<FieldPath> {
        vec![FieldPath::single("name")]
    }

    /// Whether host keys are plain NetBox device names, so a host can be
    /// looked up upstream with the `name` filter.
    pub fn keyed_by_name(&self) -> bool {
        self.host_key == Self::default_host_key()
    }
}

impl Default for InventorySchema {
    fn default() -> Self {
        Self {
            group_by: Vec::new(),
            host_vars: Vec::new(),
            host_key: Self::default_host_key(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_rule_accepts_misspelled_separator() {
        let yaml = "netbox_fields:\n  - path: [rack, name]\nseperator: \"-\"\n";
        let rule: GroupingRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.separator, "-");
        assert_eq!(rule.paths().count(), 1);
    }

    #[test]
    fn grouping_rule_defaults_to_underscore() {
        let yaml = "netbox_fields:\n  - path: [device_role, slug]\n  - path: site.slug\n";
        let rule: GroupingRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.separator, DEFAULT_SEPARATOR);
        let paths: Vec<String> = rule.paths().map(ToString::to_string).collect();
        assert_eq!(paths, ["device_role.slug", "site.slug"]);
    }

    #[test]
    fn variable_rule_flags_have_defaults() {
        let yaml = "inventory_var_name: rack_name\nnetbox_field:\n  path: [rack, name]\n";
        let rule: VariableRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule, VariableRule::new("rack_name", "rack.name".parse().unwrap()));
        assert!(!rule.is_address);
        assert!(rule.ignore_missing);
    }

    #[test]
    fn only_the_default_host_key_is_keyed_by_name() {
        assert!(InventorySchema::default().keyed_by_name());

        let composite = InventorySchema {
            host_key: vec![FieldPath::single("name"), "rack.name".parse().unwrap()],
            ..InventorySchema::default()
        };
        assert!(!composite.keyed_by_name());
    }
}
