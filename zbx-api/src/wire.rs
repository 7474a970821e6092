//! Wire encoding helpers
//!
//! The Zabbix API documents IDs as strings and returns every integer field
//! (types, statuses, flags) as a numeric string, while accepting plain
//! numbers on input. The helpers here keep the Rust side typed (`u64` ids,
//! enums) and tolerate both forms when decoding.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected a numeric string, got {:?}", s))),
        }
    }

    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        let n = self.into_i64::<E>()?;
        u64::try_from(n).map_err(|_| E::custom(format!("expected a non-negative id, got {}", n)))
    }
}

/// `Option<u64>` id fields: written as a decimal string, read from string or number
pub mod id {
    use super::NumberOrString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => serializer.serialize_str(&id.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Option::<NumberOrString>::deserialize(deserializer)?
            .map(NumberOrString::into_u64)
            .transpose()
    }
}

/// Write a list of ids as decimal strings
pub fn serialize_ids<S: Serializer>(ids: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(ids.len()))?;
    for id in ids {
        seq.serialize_element(&id.to_string())?;
    }
    seq.end()
}

/// Read a list of ids given as strings or numbers
pub fn deserialize_ids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    Vec::<NumberOrString>::deserialize(deserializer)?
        .into_iter()
        .map(NumberOrString::into_u64)
        .collect()
}

/// Read a count given as a string or number (`countOutput` results)
pub fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    NumberOrString::deserialize(deserializer)?.into_u64()
}

/// Read an enum code given as a string or number
pub fn deserialize_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let n = NumberOrString::deserialize(deserializer)?.into_i64::<D::Error>()?;
    i32::try_from(n).map_err(|_| D::Error::custom(format!("code {} out of range", n)))
}

/// `skip_serializing_if` helper for flag parameters that only matter when set
pub fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Declare an integer-coded API enum
///
/// Generates the enum plus an `Other(i32)` variant for codes newer than this
/// crate, `code` / `from_code`, and serde impls that write a number and read
/// a number or numeric string.
macro_rules! zabbix_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code not known to this crate
            Other(i32),
        }

        impl $name {
            /// Numeric code sent on the wire
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code,
                }
            }

            /// Map a wire code to a variant, falling back to `Other`
            pub fn from_code(code: i32) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Other(other),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                crate::wire::deserialize_code(deserializer).map(Self::from_code)
            }
        }
    };
}

pub(crate) use zabbix_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Ref {
        #[serde(default, skip_serializing_if = "Option::is_none", with = "id")]
        hostid: Option<u64>,
        #[serde(default, serialize_with = "serialize_ids", deserialize_with = "deserialize_ids")]
        itemids: Vec<u64>,
    }

    zabbix_enum! {
        pub enum Colour {
            Red = 0,
            Blue = 2,
        }
    }

    #[test]
    fn test_ids_written_as_strings() {
        let value = serde_json::to_value(Ref { hostid: Some(10084), itemids: vec![1, 22] }).unwrap();
        assert_eq!(value, json!({"hostid": "10084", "itemids": ["1", "22"]}));
    }

    #[test]
    fn test_ids_read_from_strings_or_numbers() {
        let parsed: Ref = serde_json::from_value(json!({"hostid": 10084, "itemids": ["1", 22]})).unwrap();
        assert_eq!(parsed, Ref { hostid: Some(10084), itemids: vec![1, 22] });
    }

    #[test]
    fn test_missing_or_null_id_is_none() {
        let parsed: Ref = serde_json::from_value(json!({"hostid": null})).unwrap();
        assert_eq!(parsed.hostid, None);
        assert!(parsed.itemids.is_empty());

        let unset = serde_json::to_value(Ref { hostid: None, itemids: vec![] }).unwrap();
        assert_eq!(unset, json!({"itemids": []}));
    }

    #[test]
    fn test_bad_ids_are_rejected() {
        assert!(serde_json::from_value::<Ref>(json!({"hostid": "abc"})).is_err());
        assert!(serde_json::from_value::<Ref>(json!({"hostid": -5})).is_err());
    }

    #[test]
    fn test_enum_codes() {
        assert_eq!(serde_json::to_value(Colour::Blue).unwrap(), json!(2));
        assert_eq!(serde_json::from_value::<Colour>(json!("0")).unwrap(), Colour::Red);
        assert_eq!(serde_json::from_value::<Colour>(json!(2)).unwrap(), Colour::Blue);
        assert_eq!(serde_json::from_value::<Colour>(json!("7")).unwrap(), Colour::Other(7));
        assert_eq!(Colour::Other(7).code(), 7);
        assert!(serde_json::from_value::<Colour>(json!("red")).is_err());
    }

    mod shadowed_result {
        // A one-parameter `Result` alias in scope at the invocation site
        #[allow(unused_imports)]
        use zbx_core::Result;

        crate::wire::zabbix_enum! {
            pub enum Flag {
                Off = 0,
                On = 1,
            }
        }
    }

    #[test]
    fn test_enum_with_result_alias_in_scope() {
        use shadowed_result::Flag;

        assert_eq!(serde_json::to_value(Flag::On).unwrap(), json!(1));
        assert_eq!(serde_json::from_value::<Flag>(json!("0")).unwrap(), Flag::Off);
    }

    #[test]
    fn test_is_false() {
        assert!(is_false(&false));
        assert!(!is_false(&true));
    }
}
