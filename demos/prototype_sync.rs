//! Item prototype sync example
//!
//! Makes sure an LLD rule has a "free space" prototype for each filesystem
//! metric in a fixed list, creating the missing ones and re-enabling any that
//! were disabled.
//!
//! Like the other demos it talks to a JSON-RPC WebSocket proxy fronting the
//! Zabbix API, which handles authentication.
//!
//! Run with: ZBX_URL=ws://127.0.0.1:8080 ZBX_HOSTID=10084 ZBX_RULEID=27293 cargo run --example prototype_sync

use zbx::api::{ItemPrototypeTagObject, ItemStatus, ItemType, ValueType};
use zbx::{ItemPrototypeGetParams, ItemPrototypeObject, RpcClient, ZabbixApi};

const METRICS: &[(&str, &str)] = &[
    ("free", "Free disk space on {#FSNAME}"),
    ("used", "Used disk space on {#FSNAME}"),
    ("pfree", "Free disk space on {#FSNAME}, in %"),
];

fn env_id(name: &str, default: u64) -> Result<u64, std::num::ParseIntError> {
    match std::env::var(name) {
        Ok(value) => value.parse(),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let url = std::env::var("ZBX_URL").unwrap_or_else(|_| "ws://127.0.0.1:8080".to_string());
    let hostid = env_id("ZBX_HOSTID", 10084)?;
    let ruleid = env_id("ZBX_RULEID", 27293)?;

    let api = ZabbixApi::new(RpcClient::connect(&url).await?);

    let existing = api
        .item_prototype_get(&ItemPrototypeGetParams {
            discoveryids: vec![ruleid],
            ..Default::default()
        })
        .await?;

    let mut missing = Vec::new();
    let mut to_enable = Vec::new();

    for (mode, name) in METRICS {
        let key = format!("vfs.fs.size[{{#FSNAME}},{}]", mode);
        match existing.iter().find(|p| p.key.as_deref() == Some(key.as_str())) {
            Some(prototype) if prototype.status == Some(ItemStatus::Disabled) => {
                to_enable.push(ItemPrototypeObject {
                    item_prototype_id: prototype.item_prototype_id,
                    status: Some(ItemStatus::Enabled),
                    ..Default::default()
                });
            }
            Some(_) => {}
            None => missing.push(ItemPrototypeObject {
                hostid: Some(hostid),
                ruleid: Some(ruleid),
                name: Some(name.to_string()),
                key: Some(key),
                item_type: Some(ItemType::ZabbixAgentActive),
                value_type: Some(if *mode == "pfree" {
                    ValueType::NumericFloat
                } else {
                    ValueType::NumericUnsigned
                }),
                units: Some(if *mode == "pfree" { "%" } else { "B" }.to_string()),
                delay: Some("1m".to_string()),
                tags: Some(vec![ItemPrototypeTagObject::new("component", "storage")]),
                ..Default::default()
            }),
        }
    }

    if !missing.is_empty() {
        let ids = api.item_prototype_create(&missing).await?;
        println!("Created prototypes: {:?}", ids);
    }
    if !to_enable.is_empty() {
        let ids = api.item_prototype_update(&to_enable).await?;
        println!("Re-enabled prototypes: {:?}", ids);
    }

    let total = api
        .item_prototype_count(&ItemPrototypeGetParams {
            discoveryids: vec![ruleid],
            ..Default::default()
        })
        .await?;
    println!("Rule {} now has {} item prototypes", ruleid, total);

    api.transport().close().await;
    Ok(())
}
