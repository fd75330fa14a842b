use async_trait::async_trait;
use nbinv_common::source::HostSource;
use serde_json::{Value, json};

/// Serves a fixed device list, narrowing it by name like the API's `name` filter.
pub struct FakeNetbox {
    hosts: Vec<Value>,
}

impl FakeNetbox {
    pub fn new(hosts: Vec<Value>) -> Self {
        Self { hosts }
    }
}

#[async_trait]
impl HostSource for FakeNetbox {
    async fn fetch_hosts(&self, name: Option<&str>) -> anyhow::Result<Vec<Value>> {
        Ok(self
            .hosts
            .iter()
            .filter(|host| name.is_none_or(|wanted| host["name"] == wanted))
            .cloned()
            .collect())
    }
}

pub fn device(name: &str, role: &str, ip: Option<&str>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "display_name": name,
        "device_type": { "id": 1, "manufacturer": { "id": 8, "name": "Fake Manufacturer" }, "model": "all" },
        "device_role": { "id": 8, "name": role, "slug": role.to_lowercase().replace(' ', "-") },
        "tenant": null,
        "platform": null,
        "serial": "",
        "asset_tag": "fake_tag",
        "site": { "id": 1, "name": "fake_site", "slug": "fake_site" },
        "rack": { "id": 1, "name": "fake_rack01", "display_name": "fake_rack01" },
        "position": null,
        "face": null,
        "primary_ip": ip.map(|address| json!({ "id": 1, "family": 4, "address": address })),
        "comments": "",
        "custom_fields": { "label": "web", "env": null }
    })
}

pub fn fleet() -> Vec<Value> {
    vec![
        device("fake_host01", "Fake Server", Some("192.168.0.2/32")),
        device("fake_host02", "Server", None),
    ]
}
