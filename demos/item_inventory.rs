//! Item inventory example
//!
//! Lists the items of one host grouped by type, with structured logging and
//! request tracing.
//!
//! Expects a JSON-RPC WebSocket endpoint that fronts the Zabbix API and
//! handles authentication.
//!
//! Run with: ZBX_URL=ws://127.0.0.1:8080 ZBX_HOSTID=10084 cargo run --example item_inventory

use std::collections::BTreeMap;
use zbx::api::{ItemStatus, ItemType, SortOrder};
use zbx::{ClientBuilder, GetParameters, ItemGetParams, ObservabilityConfig, SelectQuery, ZabbixApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("ZBX_URL").unwrap_or_else(|_| "ws://127.0.0.1:8080".to_string());
    let hostid: u64 = std::env::var("ZBX_HOSTID")
        .unwrap_or_else(|_| "10084".to_string())
        .parse()?;

    let client = ClientBuilder::new(url)
        .with_observability(
            ObservabilityConfig::new("item-inventory")
                .with_json_logs(false)
                .with_log_level("info"),
        )
        .connect()
        .await?;
    let api = ZabbixApi::new(client);

    let params = ItemGetParams {
        common: GetParameters::default()
            .output(SelectQuery::fields(["itemid", "name", "key_", "type", "status"]))
            .sort_by("name", SortOrder::Asc),
        hostids: vec![hostid],
        ..Default::default()
    };

    let total = api.item_count(&params).await?;
    println!("Host {} has {} items\n", hostid, total);

    let mut by_type: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for item in api.item_get(&params).await? {
        let code = item.item_type.map(ItemType::code).unwrap_or(-1);
        let disabled = if item.status == Some(ItemStatus::Disabled) {
            " (disabled)"
        } else {
            ""
        };
        by_type.entry(code).or_default().push(format!(
            "{} [{}]{}",
            item.name.unwrap_or_default(),
            item.key.unwrap_or_default(),
            disabled
        ));
    }

    for (code, items) in by_type {
        println!("{:?}:", ItemType::from_code(code));
        for line in items {
            println!("  {}", line);
        }
    }

    api.transport().close().await;
    zbx::core::shutdown_observability();
    Ok(())
}
