use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::InventoryError;

/// Reserved top-level key holding per-host variables.
pub const META_KEY: &str = "_meta";
/// Catch-all group used when no grouping rules are configured.
pub const UNGROUPED: &str = "ungrouped";

/// Variables of a single host, keyed by Ansible variable name.
pub type HostVars = Map<String, Value>;

/// What the caller asked the inventory for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// The whole inventory (`--list`).
    List,
    /// The variables of one host (`--host <name>`).
    Host(String),
    /// Neither was requested.
    Nothing,
}

impl Request {
    /// Name filter to send upstream, if any.
    pub fn host_filter(&self) -> Option<&str> {
        match self {
            Request::Host(name) => Some(name),
            _ => None,
        }
    }
}

/// Members in first-seen order, with a set for constant-time membership checks.
#[derive(Debug, Default, Clone, PartialEq)]
struct Group {
    hosts: Vec<String>,
    members: HashSet<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
struct Meta {
    hostvars: BTreeMap<String, HostVars>,
}

/// An Ansible dynamic inventory under construction.
///
/// Serializes as `{ "<group>": [hosts...], ..., "_meta": { "hostvars": {...} } }`.
/// The `_meta` section only exists once [`Inventory::init_meta`] has been called,
/// which lets callers tell "no hosts fetched" apart from "hosts without variables".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inventory {
    groups: BTreeMap<String, Group>,
    meta: Option<Meta>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_meta(&mut self) {
        self.meta.get_or_insert_with(Meta::default);
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Adds `host` to `group`, creating the group on first use.
    ///
    /// Returns `false` when the host was already a member.
    pub fn add_to_group(&mut self, group: &str, host: &str) -> Result<bool, InventoryError> {
        if group == META_KEY {
            return Err(InventoryError::ReservedGroupName(group.to_string()));
        }

        let entry: &mut Group = self.groups.entry(group.to_string()).or_default();
        if !entry.members.insert(host.to_string()) {
            return Ok(false);
        }
        entry.hosts.push(host.to_string());
        Ok(true)
    }

    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(|group| group.hosts.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.groups.iter().map(|(name, group)| (name, &group.hosts))
    }

    /// Stores the variables of `host`, initializing `_meta` if needed.
    pub fn set_host_vars(&mut self, host: &str, vars: HostVars) {
        self.meta
            .get_or_insert_with(Meta::default)
            .hostvars
            .insert(host.to_string(), vars);
    }

    pub fn host_vars(&self, host: &str) -> Option<&HostVars> {
        self.meta.as_ref()?.hostvars.get(host)
    }

    /// Number of hosts that ended up with at least one variable.
    pub fn host_count(&self) -> usize {
        self.meta.as_ref().map_or(0, |meta| meta.hostvars.len())
    }

    /// Shapes the inventory into the JSON document answering `request`.
    pub fn render(&self, request: &Request) -> Value {
        match request {
            Request::List => serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new())),
            Request::Host(name) => {
                Value::Object(self.host_vars(name).cloned().unwrap_or_default())
            }
            Request::Nothing => Value::Object(Map::new()),
        }
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.groups.len() + usize::from(self.meta.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, &group.hosts)?;
        }
        if let Some(meta) = &self.meta {
            map.serialize_entry(META_KEY, meta)?;
        }
        map.end()
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
