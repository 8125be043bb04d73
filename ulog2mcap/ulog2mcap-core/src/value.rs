//! Raw cell values as stored by the log decoder.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValueTypeError;

/// One stored cell of a data stream column.
///
/// Booleans usually arrive as `0`/`1` integers; the declared field type,
/// not the variant, decides how a cell is interpreted. JSON `null` cells are
/// read as NaN, which is also how NaN serializes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    Text(Arc<str>),
}

impl RawValue {
    pub fn text(s: impl AsRef<str>) -> Self {
        Self::Text(Arc::from(s.as_ref()))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, RawValue::Float(v) if v.is_nan())
    }

    /// Read the cell as an unsigned integer, accepting non-negative signed
    /// values and integral floats.
    pub fn try_u64(&self) -> Result<u64, ValueTypeError> {
        match self {
            RawValue::UInt(v) => Ok(*v),
            RawValue::Int(v) => u64::try_from(*v).map_err(|_| self.type_mismatch("UInt")),
            RawValue::Float(v) if v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64 => {
                Ok(*v as u64)
            }
            _ => Err(self.type_mismatch("UInt")),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            RawValue::UInt(v) => Some(*v as f64),
            RawValue::Int(v) => Some(*v as f64),
            RawValue::Float(v) => Some(*v),
            RawValue::Text(_) => None,
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "Bool",
            RawValue::UInt(_) => "UInt",
            RawValue::Int(_) => "Int",
            RawValue::Float(v) if v.is_nan() => "Float(NaN)",
            RawValue::Float(_) => "Float",
            RawValue::Text(_) => "Text",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRepr {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawRepr::deserialize(deserializer)? {
            RawRepr::Bool(v) => RawValue::Bool(v),
            RawRepr::UInt(v) => RawValue::UInt(v),
            RawRepr::Int(v) => RawValue::Int(v),
            RawRepr::Float(v) => RawValue::Float(v),
            RawRepr::Text(v) => RawValue::Text(Arc::from(v)),
            RawRepr::Null(()) => RawValue::Float(f64::NAN),
        })
    }
}

impl From<u64> for RawValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}
