//! Typed bindings for the Zabbix `item` and `itemprototype` API methods
//!
//! Each method serializes its typed parameters, issues one call through a
//! [`zbx_core::RpcTransport`] with a fixed method name, and deserializes the
//! result. Transport failures and remote API errors come back unchanged as
//! [`zbx_core::Error`].
//!
//! # Wire conventions
//!
//! - Ids are `u64`, sent as decimal strings and read from strings or numbers
//! - Integer codes are typed enums with an `Other(code)` fallback
//! - Every resource property is an `Option`; only set properties are sent
//!
//! # Example
//!
//! ```rust,no_run
//! use zbx_api::{ItemGetParams, ItemObject, ItemStatus, ZabbixApi};
//! use zbx_core::RpcTransport;
//!
//! async fn disable_host_items<T: RpcTransport>(api: &ZabbixApi<T>, hostid: u64) -> zbx_core::Result<()> {
//!     let items = api
//!         .item_get(&ItemGetParams {
//!             hostids: vec![hostid],
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let updates: Vec<ItemObject> = items
//!         .into_iter()
//!         .map(|item| ItemObject {
//!             itemid: item.itemid,
//!             status: Some(ItemStatus::Disabled),
//!             ..Default::default()
//!         })
//!         .collect();
//!
//!     api.item_update(&updates).await?;
//!     Ok(())
//! }
//! ```

mod api;
pub mod common;
pub mod item;
pub mod itemprototype;
pub mod objects;
mod wire;

pub use api::ZabbixApi;
pub use common::{Evaltype, GetParameters, SelectQuery, SortOrder, TagFilter, TagOperator};
pub use item::{ItemGetParams, ItemObject, ItemStatus, ItemTagObject, ItemType, ValueType};
pub use itemprototype::{
    ItemPrototypeDiscover, ItemPrototypeGetParams, ItemPrototypeObject, ItemPrototypeTagObject,
};
pub use objects::{
    HostInterfaceObject, HostObject, HostStatus, HostgroupObject, InterfaceType, TemplateObject,
    TriggerObject, UsermacroObject, UsermacroType,
};
pub use zbx_core::{Error, Result, RpcTransport};
