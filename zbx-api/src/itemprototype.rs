//! `itemprototype.*` methods
//!
//! Item prototypes share the item vocabulary: [`ItemType`] (without
//! `WebItem`), [`ValueType`] and [`ItemStatus`] apply unchanged.
//!
//! see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/itemprototype>

use crate::api::ZabbixApi;
use crate::common::{Evaltype, GetParameters, SelectQuery, TagFilter};
use crate::item::{Count, ItemIds, ItemStatus, ItemType, ValueType};
use crate::objects::{
    HostInterfaceObject, HostObject, HostgroupObject, TemplateObject, TriggerObject,
    UsermacroObject,
};
use crate::wire::{self, is_false, zabbix_enum};
use serde::{Deserialize, Serialize};
use zbx_core::{Result, RpcTransport};

zabbix_enum! {
    /// Whether discovered items are created from the prototype (`discover`)
    pub enum ItemPrototypeDiscover {
        Discover = 0,
        NoDiscover = 1,
    }
}

/// Item prototype
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/itemprototype/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPrototypeObject {
    #[serde(rename = "itemid", default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub item_prototype_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub interfaceid: Option<u64>,
    /// Key, normally containing LLD macros such as `{#FSNAME}`
    #[serde(rename = "key_", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_oid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub templateid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub master_itemid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discover: Option<ItemPrototypeDiscover>,
    /// Owning LLD rule; required on create, never returned
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub ruleid: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<HostgroupObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ItemPrototypeTagObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<TemplateObject>>,
    #[serde(rename = "parentTemplates", default, skip_serializing_if = "Option::is_none")]
    pub parent_templates: Option<Vec<TemplateObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<UsermacroObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<HostInterfaceObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<TriggerObject>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPrototypeTagObject {
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

impl ItemPrototypeTagObject {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Parameters for `itemprototype.get`
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/itemprototype/get#parameters>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPrototypeGetParams {
    #[serde(flatten)]
    pub common: GetParameters,

    /// Item prototype ids
    #[serde(rename = "itemids", skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub item_prototype_ids: Vec<u64>,
    /// LLD rule ids
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub discoveryids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub groupids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub templateids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub hostids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub proxyids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub graphids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub triggerids: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub monitored: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_triggers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaltype: Option<Evaltype>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagFilter>,

    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,
    #[serde(rename = "selectInterfaces", skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<SelectQuery>,
    #[serde(rename = "selectTriggers", skip_serializing_if = "Option::is_none")]
    pub select_triggers: Option<SelectQuery>,
}

/// `{"prototypeids": [...]}`, the answer to `itemprototype.delete`
#[derive(Debug, Deserialize)]
struct PrototypeIds {
    #[serde(alias = "itemids", deserialize_with = "wire::deserialize_ids")]
    prototypeids: Vec<u64>,
}

impl<T: RpcTransport> ZabbixApi<T> {
    pub async fn item_prototype_get(
        &self,
        params: &ItemPrototypeGetParams,
    ) -> Result<Vec<ItemPrototypeObject>> {
        let prototypes: Vec<ItemPrototypeObject> =
            self.request("itemprototype.get", params).await?;
        tracing::debug!(count = prototypes.len(), "Item prototypes retrieved");
        Ok(prototypes)
    }

    pub async fn item_prototype_count(&self, params: &ItemPrototypeGetParams) -> Result<u64> {
        let mut params = params.clone();
        params.common.count_output = true;
        let Count(count) = self.request("itemprototype.get", &params).await?;
        Ok(count)
    }

    /// Create item prototypes; each needs `ruleid` and `hostid`
    pub async fn item_prototype_create(
        &self,
        prototypes: &[ItemPrototypeObject],
    ) -> Result<Vec<u64>> {
        let result: ItemIds = self.request("itemprototype.create", prototypes).await?;
        tracing::info!(count = result.itemids.len(), "Item prototypes created");
        Ok(result.itemids)
    }

    pub async fn item_prototype_update(
        &self,
        prototypes: &[ItemPrototypeObject],
    ) -> Result<Vec<u64>> {
        let result: ItemIds = self.request("itemprototype.update", prototypes).await?;
        tracing::info!(count = result.itemids.len(), "Item prototypes updated");
        Ok(result.itemids)
    }

    pub async fn item_prototype_delete(&self, item_prototype_ids: &[u64]) -> Result<Vec<u64>> {
        let ids: Vec<String> = item_prototype_ids.iter().map(u64::to_string).collect();
        let result: PrototypeIds = self.request("itemprototype.delete", &ids).await?;
        tracing::info!(count = result.prototypeids.len(), "Item prototypes deleted");
        Ok(result.prototypeids)
    }
}
