//! `item.*` methods
//!
//! see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/item>

use crate::api::ZabbixApi;
use crate::common::{Evaltype, GetParameters, SelectQuery, TagFilter};
use crate::objects::{
    HostInterfaceObject, HostObject, HostgroupObject, TemplateObject, TriggerObject,
    UsermacroObject,
};
use crate::wire::{self, is_false, zabbix_enum};
use serde::{Deserialize, Serialize};
use zbx_core::{Result, RpcTransport};

zabbix_enum! {
    /// Item type (`type`)
    ///
    /// Item prototypes accept every type except `WebItem`.
    pub enum ItemType {
        ZabbixAgent = 0,
        ZabbixTrapper = 2,
        SimpleCheck = 3,
        ZabbixInternal = 5,
        ZabbixAgentActive = 7,
        /// Created by web scenarios, read-only
        WebItem = 9,
        ExternalCheck = 10,
        DbMonitor = 11,
        IpmiAgent = 12,
        SshAgent = 13,
        TelnetAgent = 14,
        Calculated = 15,
        JmxAgent = 16,
        SnmpTrap = 17,
        DependentItem = 18,
        HttpAgent = 19,
        SnmpAgent = 20,
        Script = 21,
        Browser = 22,
    }
}

zabbix_enum! {
    /// Type of information (`value_type`)
    pub enum ValueType {
        NumericFloat = 0,
        Character = 1,
        Log = 2,
        NumericUnsigned = 3,
        Text = 4,
        Binary = 5,
    }
}

zabbix_enum! {
    pub enum ItemStatus {
        Enabled = 0,
        Disabled = 1,
    }
}

/// Item
///
/// Every property is optional so the same type serves `get` results and
/// `create`/`update` input: only what is set goes on the wire.
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/item/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub itemid: Option<u64>,
    /// Update interval, e.g. `"1m"` or `"30s;wd1-5,9:00-18:00"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub interfaceid: Option<u64>,
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
    /// Parent template item, read-only
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub templateid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// History storage period, e.g. `"31d"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,
    /// Formula, SQL query or script body depending on the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    /// Source item of a dependent item
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub master_itemid: Option<u64>,
    /// Last collection error, read-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<HostgroupObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ItemTagObject>>,
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

/// Item tag
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/item/object#item-tag>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTagObject {
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

impl ItemTagObject {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Parameters for `item.get`
///
/// Id lists are only sent when non-empty. `select*` members embed related
/// objects; `SelectQuery::Count` makes the server return a number in place
/// of the list, which `ItemObject` does not decode.
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/item/get#parameters>
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemGetParams {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub itemids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub groupids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub templateids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub hostids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub proxyids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub interfaceids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub graphids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "wire::serialize_ids")]
    pub triggerids: Vec<u64>,

    /// Include web items
    #[serde(skip_serializing_if = "is_false")]
    pub webitems: bool,
    /// `Some(true)` only inherited items, `Some(false)` only own items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited: Option<bool>,
    /// `Some(true)` only template items, `Some(false)` only host items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    /// Only enabled items on monitored hosts
    #[serde(skip_serializing_if = "is_false")]
    pub monitored: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub with_triggers: bool,
    /// Host group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Technical host name
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

/// `{"itemids": [...]}`, the answer to every item and item prototype mutation
#[derive(Debug, Deserialize)]
pub(crate) struct ItemIds {
    #[serde(deserialize_with = "wire::deserialize_ids")]
    pub itemids: Vec<u64>,
}

/// A `countOutput` answer
#[derive(Debug, Deserialize)]
pub(crate) struct Count(#[serde(deserialize_with = "wire::deserialize_count")] pub u64);

impl<T: RpcTransport> ZabbixApi<T> {
    /// Retrieve items
    pub async fn item_get(&self, params: &ItemGetParams) -> Result<Vec<ItemObject>> {
        let items: Vec<ItemObject> = self.request("item.get", params).await?;
        tracing::debug!(count = items.len(), "Items retrieved");
        Ok(items)
    }

    /// Number of items matching `params`
    ///
    /// `countOutput` is forced on; `output` and `select*` are left to the
    /// server to ignore.
    pub async fn item_count(&self, params: &ItemGetParams) -> Result<u64> {
        let mut params = params.clone();
        params.common.count_output = true;
        let Count(count) = self.request("item.get", &params).await?;
        Ok(count)
    }

    /// Create items, returning the new ids in input order
    pub async fn item_create(&self, items: &[ItemObject]) -> Result<Vec<u64>> {
        let result: ItemIds = self.request("item.create", items).await?;
        tracing::info!(count = result.itemids.len(), "Items created");
        Ok(result.itemids)
    }

    /// Update items; each must carry its `itemid`
    pub async fn item_update(&self, items: &[ItemObject]) -> Result<Vec<u64>> {
        let result: ItemIds = self.request("item.update", items).await?;
        tracing::info!(count = result.itemids.len(), "Items updated");
        Ok(result.itemids)
    }

    /// Delete items by id
    pub async fn item_delete(&self, itemids: &[u64]) -> Result<Vec<u64>> {
        let ids: Vec<String> = itemids.iter().map(u64::to_string).collect();
        let result: ItemIds = self.request("item.delete", &ids).await?;
        tracing::info!(count = result.itemids.len(), "Items deleted");
        Ok(result.itemids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SortOrder;
    use serde_json::json;

    #[test]
    fn test_item_from_get_result() {
        let item: ItemObject = serde_json::from_value(json!({
            "itemid": "23296",
            "type": "0",
            "hostid": "10084",
            "name": "CPU load",
            "key_": "system.cpu.load[percpu,avg1]",
            "delay": "1m",
            "history": "7d",
            "trends": "365d",
            "status": "0",
            "value_type": "0",
            "units": "",
            "templateid": "0",
            "master_itemid": "0",
            "interfaceid": "1",
            "error": "",
            "lastclock": "1700000000",
            "tags": [{"tag": "component", "value": "cpu"}]
        }))
        .unwrap();

        assert_eq!(item.itemid, Some(23296));
        assert_eq!(item.item_type, Some(ItemType::ZabbixAgent));
        assert_eq!(item.value_type, Some(ValueType::NumericFloat));
        assert_eq!(item.status, Some(ItemStatus::Enabled));
        assert_eq!(item.key.as_deref(), Some("system.cpu.load[percpu,avg1]"));
        assert_eq!(item.templateid, Some(0));
        assert_eq!(item.tags, Some(vec![ItemTagObject::new("component", "cpu")]));
        assert_eq!(item.hosts, None);
    }

    #[test]
    fn test_zero_codes_are_sent_when_set() {
        let item = ItemObject {
            itemid: Some(23296),
            status: Some(ItemStatus::Enabled),
            item_type: Some(ItemType::ZabbixAgent),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"itemid": "23296", "status": 0, "type": 0})
        );
    }

    #[test]
    fn test_empty_tag_list_is_sent() {
        // An empty list on update clears the item's tags
        let item = ItemObject {
            itemid: Some(1),
            tags: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"itemid": "1", "tags": []}));
    }

    #[test]
    fn test_unknown_type_code_survives() {
        let item: ItemObject = serde_json::from_value(json!({"type": "99"})).unwrap();
        assert_eq!(item.item_type, Some(ItemType::Other(99)));
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"type": 99}));
    }

    #[test]
    fn test_get_params_wire_shape() {
        let params = ItemGetParams {
            common: GetParameters::default()
                .output(SelectQuery::fields(["itemid", "name"]))
                .sort_by("name", SortOrder::Asc),
            hostids: vec![10084, 10085],
            templated: Some(false),
            monitored: true,
            evaltype: Some(Evaltype::Or),
            tags: vec![TagFilter::new("component")],
            select_tags: Some(SelectQuery::Extend),
            select_triggers: Some(SelectQuery::fields(["triggerid"])),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "output": ["itemid", "name"],
                "sortfield": ["name"],
                "sortorder": "ASC",
                "hostids": ["10084", "10085"],
                "templated": false,
                "monitored": true,
                "evaltype": 2,
                "tags": [{"tag": "component"}],
                "selectTags": "extend",
                "selectTriggers": ["triggerid"]
            })
        );
    }

    #[test]
    fn test_default_get_params_are_empty() {
        assert_eq!(serde_json::to_value(ItemGetParams::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_mutation_result_accepts_numbers() {
        let result: ItemIds = serde_json::from_value(json!({"itemids": ["7", 8]})).unwrap();
        assert_eq!(result.itemids, vec![7, 8]);
    }

    #[test]
    fn test_item_type_codes() {
        assert_eq!(ItemType::Browser.code(), 22);
        assert_eq!(ItemType::from_code(18), ItemType::DependentItem);
        assert_eq!(ValueType::from_code(5), ValueType::Binary);
        assert_eq!(ItemStatus::Disabled.code(), 1);
    }
}
