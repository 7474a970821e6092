//! Related objects embedded in items and item prototypes
//!
//! These come back through `select*` parameters or as the `groups` /
//! `templates` / `hosts` members of a resource. Only the identifier and the
//! commonly used properties are modelled; unknown keys are ignored.

use crate::wire::{self, zabbix_enum};
use serde::{Deserialize, Serialize};

/// Host group
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/hostgroup/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostgroupObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub groupid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Template
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/template/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub templateid: Option<u64>,
    /// Technical name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Visible name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

zabbix_enum! {
    /// Kind of user macro value
    pub enum UsermacroType {
        Text = 0,
        Secret = 1,
        VaultSecret = 2,
    }
}

/// Host or template level user macro
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/usermacro/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsermacroObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostmacroid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostid: Option<u64>,
    /// Macro name, e.g. `{$SNMP_COMMUNITY}`
    #[serde(rename = "macro", default, skip_serializing_if = "Option::is_none")]
    pub macro_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub macro_type: Option<UsermacroType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

zabbix_enum! {
    /// Host monitoring status
    pub enum HostStatus {
        Monitored = 0,
        Unmonitored = 1,
    }
}

/// Host
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/host/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostid: Option<u64>,
    /// Technical name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Visible name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

zabbix_enum! {
    /// Host interface kind
    pub enum InterfaceType {
        Agent = 1,
        Snmp = 2,
        Ipmi = 3,
        Jmx = 4,
    }
}

/// Host interface
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/hostinterface/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInterfaceObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub interfaceid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub hostid: Option<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<InterfaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// "1" when the interface is connected by IP, "0" for DNS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useip: Option<String>,
    /// "1" for the default interface of its type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

/// Trigger
///
/// see: <https://www.zabbix.com/documentation/7.0/en/manual/api/reference/trigger/object>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerObject {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::id")]
    pub triggerid: Option<u64>,
    /// Trigger name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// Severity, "0" (not classified) to "5" (disaster)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// "0" enabled, "1" disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
