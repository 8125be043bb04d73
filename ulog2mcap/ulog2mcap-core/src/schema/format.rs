use std::fmt::{Error, Result, Write as _};

use super::{Property, PropertySpec, Schema};

/// Format a schema in a readable style:
/// scalar properties are rendered in one line, array properties are
/// pretty-printed, and the required list closes the block.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for property in &schema.properties {
        format_property(property, 0, &mut out)?;
    }
    writeln!(out, "required: [{}]", schema.required.join(", "))?;

    Ok(out)
}

fn format_property(property: &Property, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match property.spec {
        PropertySpec::Scalar(kind) => {
            writeln!(out, "{pad}{}: {{ type: {kind} }}", property.name)?;
        }
        PropertySpec::Array { items, size } => {
            let inner = " ".repeat(indent + 4);
            writeln!(out, "{pad}{}:", property.name)?;
            writeln!(out, "{inner}type: array")?;
            writeln!(out, "{inner}items: {{ type: {items} }}")?;
            writeln!(out, "{inner}size: {size}")?;
        }
    }
    Ok(())
}
