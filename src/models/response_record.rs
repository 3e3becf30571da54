// Start of file: /src/models/response_record.rs

/*
    * Defines the uniform response record returned to API handlers, the
    * policy that decides how absent optional fields are serialized, and the
    * trait every extension bag implements.
*/

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The default extension bag: an open string-keyed JSON map.
pub type ExtraFields = Map<String, Value>;

/// How absent or empty optional fields show up once a record is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OmissionPolicy {
    /// Leave the key out entirely.
    #[default]
    Omit,
    /// Always write the key, as `null` or an empty bag.
    Include,
}

/// Caller-defined extension fields attached under `extraFields`.
///
/// Implement this for a struct to get static checking of custom fields.
/// `is_empty` decides whether the bag is dropped under [`OmissionPolicy::Omit`].
pub trait FieldBag: Serialize + Default {
    fn is_empty(&self) -> bool;
}

impl FieldBag for Map<String, Value> {
    fn is_empty(&self) -> bool {
        Map::is_empty(self)
    }
}

impl<V: Serialize, S: BuildHasher + Default> FieldBag for HashMap<String, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<V: Serialize> FieldBag for BTreeMap<String, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord<X = ExtraFields> {
    success: bool,
    status_code: u16,
    message: String,
    data: Option<Value>,
    error: Option<Value>,
    metadata: Option<Value>,
    timestamp: DateTime<Utc>,
    extra_fields: X,
    policy: OmissionPolicy,
}

impl<X: FieldBag> ResponseRecord<X> {
    // * Only the builder creates records; normalization happens here so every
    // * record honors the same presence rules.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        success: bool,
        status_code: u16,
        message: String,
        data: Option<Value>,
        error: Option<Value>,
        metadata: Option<Value>,
        extra_fields: X,
        policy: OmissionPolicy,
    ) -> Self {
        Self {
            success,
            status_code,
            message,
            data: data.filter(|value| !value.is_null()),
            error: error.filter(is_truthy),
            metadata: metadata.filter(is_truthy),
            timestamp: Utc::now(),
            extra_fields,
            policy,
        }
    }
}

impl<X> ResponseRecord<X> {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }

    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// The instant the record was built.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn extra_fields(&self) -> &X {
        &self.extra_fields
    }

    pub fn policy(&self) -> OmissionPolicy {
        self.policy
    }

    /// Compares every field except `timestamp`.
    pub fn same_content(&self, other: &Self) -> bool
    where
        X: PartialEq,
    {
        self.success == other.success
            && self.status_code == other.status_code
            && self.message == other.message
            && self.data == other.data
            && self.error == other.error
            && self.metadata == other.metadata
            && self.extra_fields == other.extra_fields
            && self.policy == other.policy
    }
}

impl<X: FieldBag> Serialize for ResponseRecord<X> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResponseRecord", 8)?;

        state.serialize_field("success", &self.success)?;
        state.serialize_field("statusCode", &self.status_code)?;
        state.serialize_field("message", &self.message)?;

        match self.policy {
            OmissionPolicy::Omit => {
                serialize_present(&mut state, "data", &self.data)?;
                serialize_present(&mut state, "error", &self.error)?;
                serialize_present(&mut state, "metadata", &self.metadata)?;
            }
            OmissionPolicy::Include => {
                state.serialize_field("data", &self.data)?;
                state.serialize_field("error", &self.error)?;
                state.serialize_field("metadata", &self.metadata)?;
            }
        }

        state.serialize_field(
            "timestamp",
            &self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;

        if self.policy == OmissionPolicy::Include || !self.extra_fields.is_empty() {
            state.serialize_field("extraFields", &self.extra_fields)?;
        } else {
            state.skip_field("extraFields")?;
        }

        state.end()
    }
}

fn serialize_present<S: SerializeStruct>(
    state: &mut S,
    key: &'static str,
    value: &Option<Value>,
) -> Result<(), S::Error> {
    match value {
        Some(value) => state.serialize_field(key, value),
        None => state.skip_field(key),
    }
}

// null, false, 0 and "" are falsy; everything else, empty containers included, is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}


// End of file: /src/models/response_record.rs
