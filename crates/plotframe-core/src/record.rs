// File: crates/plotframe-core/src/record.rs
// Summary: Tabular data record: open set of text keys mapped to number-or-text scalars.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A single cell value. Booleans, null and nested values are outside the domain.
/// Non-finite numbers can be held but refuse to serialize.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Number,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Number => f.write_str("number"),
            ScalarKind::Text => f.write_str("text"),
        }
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::Text(_) => ScalarKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Scalar::Number(n) => Some(n),
            Scalar::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self { Scalar::Number(v) }
}
impl From<i64> for Scalar {
    fn from(v: i64) -> Self { Scalar::Number(v as f64) }
}
impl From<i32> for Scalar {
    fn from(v: i32) -> Self { Scalar::Number(v.into()) }
}
impl From<u32> for Scalar {
    fn from(v: u32) -> Self { Scalar::Number(v.into()) }
}
impl From<&str> for Scalar {
    fn from(v: &str) -> Self { Scalar::Text(v.to_owned()) }
}
impl From<String> for Scalar {
    fn from(v: String) -> Self { Scalar::Text(v) }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Scalar::Number(n) => Err(ser::Error::custom(format!(
                "non-finite number {n} is not a valid record value"
            ))),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Scalar, E> {
        Ok(Scalar::Text(v))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// One row of input data. Keys are unique; which keys exist is decided by the data source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord(BTreeMap<String, Scalar>);

impl DataRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace; returns the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Scalar> {
        self.0.remove(key)
    }

    /// Checks that every number is finite, naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        match self.0.iter().find(|(_, v)| matches!(v, Scalar::Number(n) if !n.is_finite())) {
            Some((key, _)) => Err(Error::InvalidValue {
                key: key.clone(),
                found: "non-finite number",
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Numeric value at `key`, or an error naming what was found instead.
    pub fn number(&self, key: &str) -> Result<f64> {
        match self.0.get(key) {
            Some(Scalar::Number(n)) => Ok(*n),
            Some(other) => Err(Error::WrongKind {
                key: key.to_owned(),
                expected: ScalarKind::Number,
                found: other.kind(),
            }),
            None => Err(Error::MissingKey(key.to_owned())),
        }
    }

    /// Text value at `key`, or an error naming what was found instead.
    pub fn text(&self, key: &str) -> Result<&str> {
        match self.0.get(key) {
            Some(Scalar::Text(s)) => Ok(s),
            Some(other) => Err(Error::WrongKind {
                key: key.to_owned(),
                expected: ScalarKind::Text,
                found: other.kind(),
            }),
            None => Err(Error::MissingKey(key.to_owned())),
        }
    }

    /// Parse one JSON object.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Convert an already parsed JSON value; errors name the offending key.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(map) => map,
            other => return Err(Error::NotAnObject(json_kind(&other))),
        };
        let mut record = Self::new();
        for (key, v) in object {
            let scalar = match v {
                Value::Number(n) => match n.as_f64() {
                    Some(f) => Scalar::Number(f),
                    None => return Err(Error::InvalidValue { key, found: "number out of range" }),
                },
                Value::String(s) => Scalar::Text(s),
                other => {
                    let found = json_kind(&other);
                    log::warn!("rejecting key '{key}': {found} is not a number or string");
                    return Err(Error::InvalidValue { key, found });
                }
            };
            record.0.insert(key, scalar);
        }
        Ok(record)
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for DataRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parse a JSON array of records.
pub fn parse_records(s: &str) -> Result<Vec<DataRecord>> {
    let records: Vec<DataRecord> = serde_json::from_str(s)?;
    log::debug!("parsed {} records", records.len());
    Ok(records)
}

/// Union of keys across a record set.
pub fn column_keys(records: &[DataRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.0.keys().cloned())
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
