use nbinv_common::config::Config;
use nbinv_common::error::InventoryError;
use nbinv_common::inventory::Request;
use nbinv_core::service::InventoryService;
use serde_json::{Value, json};

use super::utils::{FakeNetbox, device, fleet};

const NETBOX_YML: &str = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
    api_token: "0123456789abcdef"
  group_by:
    - grouping:
        netbox_fields:
          - path: [rack, name]
    - grouping:
        netbox_fields:
          - path: [device_role, name]
    - grouping:
        netbox_fields:
          - path: [site, slug]
          - path: [tenant, slug]
        seperator: "-"
  hosts_vars:
    - inventory_var_name: ansible_ssh_host
      netbox_field:
        path: [primary_ip, address]
      is_address: true
    - inventory_var_name: label
      netbox_field:
        path: [custom_fields, label]
    - inventory_var_name: env
      netbox_field:
        path: [custom_fields, env]
"#;

fn service_from(yaml: &str, hosts: Vec<Value>) -> InventoryService {
    let cfg: Config = Config::from_yaml_str(yaml).expect("config should parse");
    InventoryService::new(Box::new(FakeNetbox::new(hosts)), cfg.schema)
}

/// Full `--list` run: config file through to the document Ansible reads.
#[tokio::test]
async fn list_builds_groups_and_hostvars() {
    let service = service_from(NETBOX_YML, fleet());

    let rendered = service.render(&Request::List).await;
    assert!(rendered.is_ok(), "Inventory failed: {:?}", rendered.err());

    assert_eq!(
        rendered.unwrap(),
        json!({
            "Fake Server": ["fake_host01"],
            "Server": ["fake_host02"],
            "fake_rack01": ["fake_host01", "fake_host02"],
            "fake_site-na": ["fake_host01", "fake_host02"],
            "_meta": {
                "hostvars": {
                    "fake_host01": { "ansible_ssh_host": "192.168.0.2", "label": "web" },
                    "fake_host02": { "label": "web" }
                }
            }
        })
    );
}

#[tokio::test]
async fn host_request_returns_bare_vars() {
    let service = service_from(NETBOX_YML, fleet());

    let rendered: Value = service
        .render(&Request::Host("fake_host01".into()))
        .await
        .unwrap();

    assert_eq!(rendered, json!({ "ansible_ssh_host": "192.168.0.2", "label": "web" }));
}

#[tokio::test]
async fn host_request_for_unknown_host_is_empty() {
    let service = service_from(NETBOX_YML, fleet());

    let rendered: Value = service
        .render(&Request::Host("not_in_netbox".into()))
        .await
        .unwrap();

    assert_eq!(rendered, json!({}));
}

#[tokio::test]
async fn unknown_grouping_field_aborts() {
    let yaml = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
  group_by:
    - grouping:
        netbox_fields:
          - path: [arbitrary_group_name]
"#;
    let service = service_from(yaml, fleet());

    let err = service.render(&Request::List).await.unwrap_err();
    let inventory_err = err.downcast_ref::<InventoryError>();

    assert!(
        matches!(inventory_err, Some(InventoryError::UnknownGroupField { .. })),
        "Unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn no_grouping_rules_fall_back_to_ungrouped() {
    let yaml = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
"#;
    let service = service_from(yaml, fleet());

    let rendered: Value = service.render(&Request::List).await.unwrap();

    assert_eq!(
        rendered,
        json!({
            "ungrouped": ["fake_host01", "fake_host02"],
            "_meta": { "hostvars": {} }
        })
    );
}

#[tokio::test]
async fn required_var_missing_on_one_host_fails_run() {
    let yaml = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
  hosts_vars:
    - inventory_var_name: ansible_ssh_host
      netbox_field:
        path: [primary_ip, address]
      is_address: true
      ignore_missing: false
"#;
    let service = service_from(yaml, fleet());

    let err = service.render(&Request::List).await.unwrap_err();

    assert!(
        matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::MissingField { .. })
        ),
        "Unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn composite_host_key_names_hosts() {
    let yaml = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
  host_key:
    - [name]
    - [serial]
    - [rack, name]
"#;
    let service = service_from(yaml, vec![device("fake_host01", "Server", None)]);

    let rendered: Value = service.render(&Request::List).await.unwrap();

    assert_eq!(rendered["ungrouped"], json!(["fake_host01_fake_rack01"]));
}

#[tokio::test]
async fn empty_netbox_gives_empty_inventory() {
    let service = service_from(NETBOX_YML, Vec::new());

    let rendered: Value = service.render(&Request::List).await.unwrap();

    assert_eq!(rendered, json!({}));
}

#[tokio::test]
async fn host_request_with_composite_host_key() {
    let yaml = r#"
netbox:
  main:
    api_url: "http://localhost/api/dcim/devices/"
  hosts_vars:
    - inventory_var_name: rack_name
      netbox_field:
        path: [rack, name]
  host_key:
    - [name]
    - [rack, name]
"#;
    let service = service_from(yaml, fleet());

    let listed: Value = service.render(&Request::List).await.unwrap();
    assert_eq!(
        listed["_meta"]["hostvars"]["fake_host01_fake_rack01"],
        json!({ "rack_name": "fake_rack01" })
    );

    let rendered: Value = service
        .render(&Request::Host("fake_host01_fake_rack01".into()))
        .await
        .unwrap();

    assert_eq!(rendered, json!({ "rack_name": "fake_rack01" }));
}
