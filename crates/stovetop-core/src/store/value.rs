//! Firestore typed values.
//!
//! The REST API wraps every field in a single-key object naming its type
//! (`{"stringValue": "Dal"}`, `{"integerValue": "10"}`). This module decodes
//! those wrappers into plain JSON so the domain models can be deserialized
//! with their ordinary serde derives.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Number, Value};

/// A single Firestore field value.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue,
    BooleanValue(bool),
    /// 64-bit integers travel as decimal strings
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(Value),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

/// Payload of an `arrayValue`; empty arrays omit `values`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

/// Payload of a `mapValue`; empty maps omit `fields`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreValue {
    /// Converts into untyped JSON.
    pub fn into_json(self) -> Value {
        match self {
            Self::NullValue => Value::Null,
            Self::BooleanValue(b) => Value::Bool(b),
            Self::IntegerValue(raw) => match raw.parse::<i64>() {
                Ok(n) => Value::Number(n.into()),
                Err(_) => Value::String(raw),
            },
            Self::DoubleValue(d) => Number::from_f64(d).map_or(Value::Null, Value::Number),
            Self::TimestampValue(s)
            | Self::StringValue(s)
            | Self::BytesValue(s)
            | Self::ReferenceValue(s) => Value::String(s),
            Self::GeoPointValue(v) => v,
            Self::ArrayValue(array) => Value::Array(
                array
                    .values
                    .into_iter()
                    .map(FirestoreValue::into_json)
                    .collect(),
            ),
            Self::MapValue(map) => fields_to_json(map.fields),
        }
    }
}

/// Converts a document's field map into a JSON object.
pub fn fields_to_json(fields: BTreeMap<String, FirestoreValue>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(k, v)| (k, v.into_json()))
            .collect::<Map<String, Value>>(),
    )
}

/// A Firestore document as returned by `get` and `runQuery`.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Full resource name, ending in `/documents/{collection}/{id}`
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl Document {
    /// The document ID (last segment of the resource name).
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Decodes the document's fields into `T`, with the document ID injected
    /// as the `id` field.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        let id = self.id().to_string();
        let mut json = fields_to_json(self.fields);
        if let Value::Object(map) = &mut json {
            map.insert("id".to_string(), Value::String(id));
        }
        serde_json::from_value(json)
    }
}

/// One row of a `runQuery` response stream.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRow {
    /// Absent on rows that only carry a read time
    #[serde(default)]
    pub document: Option<Document>,
}
