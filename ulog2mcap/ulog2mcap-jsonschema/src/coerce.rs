//! Raw row values -> JSON message objects.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;
use ulog2mcap_core::{FieldValue, PrimitiveType, RawValue, ScalarKind, split_array_index};

/// A coerced message: JSON values keyed by field name.
///
/// Keys keep the order in which their field first appeared in the row; an
/// array sits where its first element was declared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoercedMessage {
    entries: Vec<(String, Value)>,
}

impl CoercedMessage {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON encoding used as the message payload.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl Serialize for CoercedMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

enum Slot {
    Scalar(Value),
    Elements(Vec<(Option<usize>, Value)>),
}

/// Coerce one row.
///
/// Plain fields map to their coerced scalar under their own name. Fields
/// named `base[i]` are collected into one array under `base`, ordered by
/// index; the per-index names never appear in the output. Padding fields are
/// dropped.
pub fn coerce_record<'a>(values: impl IntoIterator<Item = FieldValue<'a>>) -> CoercedMessage {
    let mut slots: Vec<(&'a str, Slot)> = Vec::new();
    let mut arrays: HashMap<&'a str, usize> = HashMap::new();

    for field in values {
        if field.name.starts_with(ulog2mcap_core::PADDING_PREFIX) {
            continue;
        }
        let value = coerce_value(field.type_name, field.value);

        match split_array_index(field.name) {
            Some((base, index)) => {
                let slot = *arrays.entry(base).or_insert_with(|| {
                    slots.push((base, Slot::Elements(Vec::new())));
                    slots.len() - 1
                });
                if let Slot::Elements(elements) = &mut slots[slot].1 {
                    elements.push((index, value));
                }
            }
            None => slots.push((field.name, Slot::Scalar(value))),
        }
    }

    let entries = slots
        .into_iter()
        .map(|(key, slot)| {
            let value = match slot {
                Slot::Scalar(value) => value,
                Slot::Elements(mut elements) => {
                    // Stable: unparsable indices keep their row order, after the rest.
                    elements.sort_by_key(|(index, _)| index.unwrap_or(usize::MAX));
                    Value::Array(elements.into_iter().map(|(_, v)| v).collect())
                }
            };
            (key.to_string(), value)
        })
        .collect();

    CoercedMessage { entries }
}

/// An integer-typed cell stored as a float. Truncates toward zero while the
/// result fits `u64`/`i64`; larger magnitudes stay JSON numbers instead of
/// saturating.
fn integral_float(v: f64) -> Value {
    const U64_END: f64 = 18_446_744_073_709_551_616.0;
    const I64_START: f64 = -9_223_372_036_854_775_808.0;

    let t = v.trunc();
    if !t.is_finite() {
        Value::Null
    } else if (0.0..U64_END).contains(&t) {
        Value::from(t as u64)
    } else if (I64_START..0.0).contains(&t) {
        Value::from(t as i64)
    } else {
        Value::from(v)
    }
}

/// Coerce a single cell according to its declared type.
///
/// NaN becomes `null` whatever the declared type. Integers keep their
/// integer representation (floats are truncated), `float`/`double` become
/// JSON numbers (non-finite values become `null`), booleans are read from a
/// 0/1 store, and `char` or unknown types become strings.
pub fn coerce_value(type_name: &PrimitiveType, raw: &RawValue) -> Value {
    if raw.is_nan() {
        return Value::Null;
    }

    match type_name.scalar_kind() {
        ScalarKind::Integer => match raw {
            RawValue::UInt(v) => Value::from(*v),
            RawValue::Int(v) => Value::from(*v),
            RawValue::Float(v) => integral_float(*v),
            RawValue::Bool(v) => Value::from(u8::from(*v)),
            RawValue::Text(s) => Value::from(s.as_ref()),
        },
        ScalarKind::Number => match raw.as_f64() {
            Some(v) => Value::from(v),
            None => Value::Null,
        },
        ScalarKind::Boolean => match raw {
            RawValue::Bool(v) => Value::Bool(*v),
            RawValue::Text(s) => Value::from(s.as_ref()),
            other => Value::Bool(other.as_f64().is_some_and(|v| v != 0.0)),
        },
        ScalarKind::String => match raw {
            RawValue::Text(s) => Value::from(s.as_ref()),
            RawValue::Bool(v) => Value::from(v.to_string()),
            RawValue::UInt(v) => Value::from(v.to_string()),
            RawValue::Int(v) => Value::from(v.to_string()),
            RawValue::Float(v) => Value::from(v.to_string()),
        },
    }
}
