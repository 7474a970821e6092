//! Parameters shared by every `*.get` method
//!
//! See <https://www.zabbix.com/documentation/7.0/en/manual/api/reference_commentary#common-get-method-parameters>.

use crate::wire::{is_false, zabbix_enum};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Which properties to return (`output`) or which related objects to embed
/// (`select*`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectQuery {
    /// All properties: `"extend"`
    Extend,
    /// Only the number of related objects: `"count"`
    Count,
    /// The named properties only
    Fields(Vec<String>),
}

impl SelectQuery {
    /// Build a field list
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectQuery::Fields(fields.into_iter().map(Into::into).collect())
    }
}

impl Serialize for SelectQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectQuery::Extend => serializer.serialize_str("extend"),
            SelectQuery::Count => serializer.serialize_str("count"),
            SelectQuery::Fields(fields) => {
                let mut seq = serializer.serialize_seq(Some(fields.len()))?;
                for field in fields {
                    seq.serialize_element(field)?;
                }
                seq.end()
            }
        }
    }
}

/// Sort direction for `sortorder`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

zabbix_enum! {
    /// How `tags` filters combine (`evaltype`)
    pub enum Evaltype {
        /// And/Or
        AndOr = 0,
        /// Or
        Or = 2,
    }
}

zabbix_enum! {
    /// Comparison used by a [`TagFilter`]
    pub enum TagOperator {
        Contains = 0,
        Equals = 1,
        NotLike = 2,
        NotEqual = 3,
        Exists = 4,
        NotExists = 5,
    }
}

/// One entry of the `tags` get parameter
///
/// ```rust
/// use zbx_api::{TagFilter, TagOperator};
///
/// let filter = TagFilter::new("component").with_value("cpu").with_operator(TagOperator::Equals);
/// assert_eq!(
///     serde_json::to_value(&filter).unwrap(),
///     serde_json::json!({"tag": "component", "value": "cpu", "operator": 1})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<TagOperator>,
}

impl TagFilter {
    /// Filter on a tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Compare against a value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Use a specific comparison (the server defaults to `Contains`)
    pub fn with_operator(mut self, operator: TagOperator) -> Self {
        self.operator = Some(operator);
        self
    }
}

/// Common `get` parameters, flattened into every resource's get params
///
/// Flags are only sent when `true`; everything else only when set.
/// `preservekeys` is not exposed: it turns the result array into an object
/// keyed by id, which the typed `*_get` methods do not decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetParameters {
    /// Return a count instead of objects; prefer the `*_count` methods
    #[serde(rename = "countOutput", skip_serializing_if = "is_false")]
    pub count_output: bool,

    /// Only objects the user may write to
    #[serde(skip_serializing_if = "is_false")]
    pub editable: bool,

    /// Return objects that do not match `search`
    #[serde(rename = "excludeSearch", skip_serializing_if = "is_false")]
    pub exclude_search: bool,

    /// Exact matches: property name to value or list of values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<SelectQuery>,

    /// Case-insensitive substring matches on string properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<BTreeMap<String, serde_json::Value>>,

    /// Match any `search`/`filter` condition instead of all
    #[serde(rename = "searchByAny", skip_serializing_if = "is_false")]
    pub search_by_any: bool,

    /// Allow `*` wildcards in `search`
    #[serde(rename = "searchWildcardsEnabled", skip_serializing_if = "is_false")]
    pub search_wildcards_enabled: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sortfield: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortorder: Option<SortOrder>,

    /// `search` matches prefixes instead of substrings
    #[serde(rename = "startSearch", skip_serializing_if = "is_false")]
    pub start_search: bool,
}

impl GetParameters {
    /// Add an exact-match condition to `filter`
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.filter
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), value.into());
        self
    }

    /// Add a substring condition to `search`
    pub fn search(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.search
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), serde_json::Value::String(value.into()));
        self
    }

    pub fn output(mut self, output: SelectQuery) -> Self {
        self.output = Some(output);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sortfield.push(field.into());
        self.sortorder = Some(order);
        self
    }
}
