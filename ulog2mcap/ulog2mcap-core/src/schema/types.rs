use std::fmt::{Display, Formatter, Result};

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeStruct},
};

/// JSON-Schema scalar kinds a primitive field can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Integer,
    Number,
    Boolean,
    String,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::String => "string",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScalarKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Schema of a single property: a scalar or a fixed-length array of scalars.
///
/// Serialized keys are emitted in lexicographic order so the same bytes serve
/// both the stored schema and its canonical checksum form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySpec {
    Scalar(ScalarKind),
    Array { items: ScalarKind, size: usize },
}

impl PropertySpec {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertySpec::Scalar(kind) => kind.as_str(),
            PropertySpec::Array { .. } => "array",
        }
    }

    pub fn item_kind(&self) -> ScalarKind {
        match self {
            PropertySpec::Scalar(kind) => *kind,
            PropertySpec::Array { items, .. } => *items,
        }
    }
}

struct ItemsSpec(ScalarKind);

impl Serialize for ItemsSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Items", 1)?;
        s.serialize_field("type", &self.0)?;
        s.end()
    }
}

impl Serialize for PropertySpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PropertySpec::Scalar(kind) => ItemsSpec(*kind).serialize(serializer),
            PropertySpec::Array { items, size } => {
                let mut s = serializer.serialize_struct("ArraySpec", 4)?;
                s.serialize_field("items", &ItemsSpec(*items))?;
                s.serialize_field("maxItems", size)?;
                s.serialize_field("minItems", size)?;
                s.serialize_field("type", "array")?;
                s.end()
            }
        }
    }
}

/// One named property, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub spec: PropertySpec,
}

impl Property {
    pub fn new(name: impl Into<String>, spec: PropertySpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// Object schema describing one message format.
///
/// Serializes as `{"type": "object", "properties": {...}, "required": [...]}`
/// with properties in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub properties: Vec<Property>,
    pub required: Vec<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property and mark it required.
    pub fn push(&mut self, name: impl Into<String>, spec: PropertySpec) {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push(Property::new(name, spec));
    }

    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.spec)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

struct OrderedProperties<'a>(&'a [Property]);

impl Serialize for OrderedProperties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in self.0 {
            map.serialize_entry(&property.name, &property.spec)?;
        }
        map.end()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Schema", 3)?;
        s.serialize_field("type", "object")?;
        s.serialize_field("properties", &OrderedProperties(&self.properties))?;
        s.serialize_field("required", &self.required)?;
        s.end()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}
