//! zbx - typed Zabbix item API over JSON-RPC 2.0
//!
//! This is the convenience crate that re-exports the zbx sub-crates. Depend
//! on it to get the API bindings together with the shipped WebSocket
//! transport.
//!
//! # Architecture
//!
//! - **zbx-core**: JSON-RPC types, codec, errors, the `RpcTransport` trait, observability
//! - **zbx-client**: WebSocket JSON-RPC client implementing `RpcTransport`
//! - **zbx-api**: `ZabbixApi` with the `item.*` and `itemprototype.*` methods
//!
//! The shipped WebSocket client needs a JSON-RPC proxy in front of the
//! Zabbix frontend; see the [`client`] crate docs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zbx::{GetParameters, ItemGetParams, RpcClient, SelectQuery, ZabbixApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::connect("ws://localhost:8080").await?;
//!     let api = ZabbixApi::new(client);
//!
//!     let params = ItemGetParams {
//!         common: GetParameters::default().output(SelectQuery::fields(["itemid", "name"])),
//!         hostids: vec![10084],
//!         ..Default::default()
//!     };
//!
//!     for item in api.item_get(&params).await? {
//!         println!("{:?} {:?}", item.itemid, item.name);
//!     }
//!
//!     api.transport().close().await;
//!     Ok(())
//! }
//! ```

pub use zbx_api as api;
pub use zbx_client as client;
pub use zbx_core as core;

// Most callers only need these
pub use zbx_api::{
    GetParameters, ItemGetParams, ItemObject, ItemPrototypeGetParams, ItemPrototypeObject,
    SelectQuery, ZabbixApi,
};
pub use zbx_client::{ClientBuilder, RpcClient};
pub use zbx_core::{Error, ObservabilityConfig, Result, RpcTransport};
