//! Datum input in the shape wallet front-ends pass around.
//!
//! Strings stand for byte strings: an even-length hex string is decoded as
//! hex, anything else is taken as its UTF-8 bytes. Constructors are written
//! `{ "alternative": n, "fields": [...] }` and maps, which JSON objects
//! cannot key by arbitrary data, as `{ "map": [[key, value], ...] }`.

use std::fmt;

use chain_ada::plutus::{self, PlutusData};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// A structured datum prior to Plutus encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    String(String),
    Integer(i128),
    List(Vec<Data>),
    Map(Vec<(Data, Data)>),
    Constr { alternative: u64, fields: Vec<Data> },
}

impl Data {
    pub fn constr(alternative: u64, fields: Vec<Data>) -> Self {
        Data::Constr {
            alternative,
            fields,
        }
    }

    pub fn to_plutus_data(&self) -> PlutusData {
        match self {
            Data::String(s) => plutus::bytes(string_to_bytes(s)),
            Data::Integer(n) => plutus::integer(*n),
            Data::List(items) => plutus::list(items.iter().map(Data::to_plutus_data).collect()),
            Data::Map(entries) => plutus::map(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_plutus_data(), v.to_plutus_data()))
                    .collect(),
            ),
            Data::Constr {
                alternative,
                fields,
            } => plutus::constr(
                *alternative,
                fields.iter().map(Data::to_plutus_data).collect(),
            ),
        }
    }
}

fn string_to_bytes(s: &str) -> Vec<u8> {
    if s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Ok(bytes) = hex::decode(s) {
            return bytes;
        }
    }
    s.as_bytes().to_vec()
}

impl From<&Data> for PlutusData {
    fn from(data: &Data) -> Self {
        data.to_plutus_data()
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_owned())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Integer(n.into())
    }
}

impl From<u64> for Data {
    fn from(n: u64) -> Self {
        Data::Integer(n.into())
    }
}

impl From<i128> for Data {
    fn from(n: i128) -> Self {
        Data::Integer(n)
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::List(items)
    }
}

const OBJECT_FIELDS: &[&str] = &["alternative", "fields", "map"];

impl<'de> Deserialize<'de> for Data {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DataVisitor)
    }
}

struct DataVisitor;

impl<'de> Visitor<'de> for DataVisitor {
    type Value = Data;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, integer, list, {alternative, fields} or {map}")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Data, E> {
        Ok(Data::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Data, E> {
        Ok(Data::String(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Data, E> {
        Ok(Data::Integer(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Data, E> {
        Ok(Data::Integer(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Data, E> {
        Ok(Data::Integer(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Data, E> {
        i128::try_from(v)
            .map(Data::Integer)
            .map_err(|_| E::custom(format!("integer {v} out of range")))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Data, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Data::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Data, A::Error> {
        let mut alternative: Option<u64> = None;
        let mut fields: Option<Vec<Data>> = None;
        let mut entries: Option<Vec<(Data, Data)>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "alternative" => {
                    if alternative.is_some() {
                        return Err(de::Error::duplicate_field("alternative"));
                    }
                    alternative = Some(map.next_value()?);
                }
                "fields" => {
                    if fields.is_some() {
                        return Err(de::Error::duplicate_field("fields"));
                    }
                    fields = Some(map.next_value()?);
                }
                "map" => {
                    if entries.is_some() {
                        return Err(de::Error::duplicate_field("map"));
                    }
                    entries = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, OBJECT_FIELDS)),
            }
        }

        match (alternative, fields, entries) {
            (Some(alternative), Some(fields), None) => Ok(Data::Constr {
                alternative,
                fields,
            }),
            (None, None, Some(entries)) => Ok(Data::Map(entries)),
            (Some(_), None, None) => Err(de::Error::missing_field("fields")),
            (None, Some(_), None) => Err(de::Error::missing_field("alternative")),
            _ => Err(de::Error::custom(
                "expected either {alternative, fields} or {map}",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Data {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn hex_string_becomes_raw_bytes() {
        assert_eq!(
            Data::from("abcd").to_plutus_data(),
            plutus::bytes(vec![0xab, 0xcd])
        );
        assert_eq!(
            Data::from("ABCD").to_plutus_data(),
            plutus::bytes(vec![0xab, 0xcd])
        );
    }

    #[test]
    fn other_strings_become_utf8() {
        assert_eq!(
            Data::from("supersecret").to_plutus_data(),
            plutus::bytes(b"supersecret".to_vec())
        );
        // odd length hex digits
        assert_eq!(
            Data::from("abc").to_plutus_data(),
            plutus::bytes(b"abc".to_vec())
        );
    }

    #[test]
    fn empty_string_is_empty_bytes() {
        assert_eq!(Data::from("").to_plutus_data(), plutus::bytes(vec![]));
    }

    #[test]
    fn nested_conversion() {
        let data = Data::constr(
            1,
            vec![
                Data::from(7i64),
                Data::from(vec![Data::from("00")]),
                Data::Map(vec![(Data::from(1u64), Data::from("ff"))]),
            ],
        );
        let expected = plutus::constr(
            1,
            vec![
                plutus::integer(7),
                plutus::list(vec![plutus::bytes(vec![0x00])]),
                plutus::map(vec![(plutus::integer(1), plutus::bytes(vec![0xff]))]),
            ],
        );
        assert_eq!(
            plutus::to_cbor(&PlutusData::from(&data)).unwrap(),
            plutus::to_cbor(&expected).unwrap()
        );
    }

    #[test]
    fn json_scalars() {
        assert_eq!(parse(r#""supersecret""#), Data::from("supersecret"));
        assert_eq!(parse("42"), Data::Integer(42));
        assert_eq!(parse("-7"), Data::Integer(-7));
    }

    #[test]
    fn json_constructor() {
        assert_eq!(
            parse(r#"{"alternative": 0, "fields": [42, "abcd"]}"#),
            Data::constr(0, vec![Data::from(42i64), Data::from("abcd")])
        );
    }

    #[test]
    fn json_map_and_list() {
        assert_eq!(
            parse(r#"{"map": [[1, "abcd"]]}"#),
            Data::Map(vec![(Data::from(1i64), Data::from("abcd"))])
        );
        assert_eq!(
            parse("[1, [2]]"),
            Data::List(vec![Data::from(1i64), Data::List(vec![Data::from(2i64)])])
        );
    }

    #[test]
    fn json_rejects_unsupported_shapes() {
        assert!(serde_json::from_str::<Data>("1.5").is_err());
        assert!(serde_json::from_str::<Data>("true").is_err());
        assert!(serde_json::from_str::<Data>("null").is_err());
        assert!(serde_json::from_str::<Data>(r#"{"alternative": 0}"#).is_err());
        assert!(serde_json::from_str::<Data>(r#"{"fields": []}"#).is_err());
        assert!(serde_json::from_str::<Data>(r#"{"foo": 1}"#).is_err());
        assert!(serde_json::from_str::<Data>(r#"{"alternative": -1, "fields": []}"#).is_err());
        assert!(
            serde_json::from_str::<Data>(r#"{"alternative": 0, "fields": [], "map": []}"#)
                .is_err()
        );
    }
}
