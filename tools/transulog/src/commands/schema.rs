use std::{fs, path::PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;
use ulog2mcap::{
    core::{MessagePath, Schema},
    jsonschema::{SchemaChecksum, SchemaRegistry, message_paths},
};

use crate::{format::OutputFormat, input::load_log};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the decoded log (.json)
    input: PathBuf,

    /// Only show this message format
    #[arg(short, long)]
    topic: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct SchemaEntry<'a> {
    name: &'a str,
    checksum: SchemaChecksum,
    schema: &'a Schema,
    message_paths: Vec<MessagePath>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let log = load_log(&self.input)?;
        let formats: Vec<_> = log
            .message_formats
            .values()
            .filter(|f| self.topic.as_ref().is_none_or(|t| *t == f.name))
            .collect();
        if formats.is_empty() {
            bail!("no matching message format in {}", self.input.display());
        }

        let registry = SchemaRegistry::from_formats(formats.iter().copied());
        let mut entries = Vec::with_capacity(formats.len());
        for format in &formats {
            let Some(registered) = registry.get(&format.name) else {
                continue;
            };
            let registered = registered.map_err(Clone::clone)?;
            entries.push(SchemaEntry {
                name: &registered.name,
                checksum: registered.checksum,
                schema: &registered.schema,
                message_paths: message_paths(&format.fields),
            });
        }

        let text = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&entries)?,
            OutputFormat::Text => entries
                .iter()
                .map(|e| {
                    let paths: Vec<_> = e
                        .message_paths
                        .iter()
                        .map(|p| format!("  {}: {} ({})", p.path, p.data_type, p.canonical_type))
                        .collect();
                    format!(
                        "{} [{}]\n{}\npaths:\n{}",
                        e.name,
                        e.checksum,
                        e.schema,
                        paths.join("\n")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        };

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
