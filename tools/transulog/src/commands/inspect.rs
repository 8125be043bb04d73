use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ulog2mcap::inspect_container;

#[derive(Args)]
pub struct InspectArgs {
    /// Converted mcap files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn time_or_dash(time: Option<u64>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.to_string())
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        for path in &self.inputs {
            let info = inspect_container(path)
                .with_context(|| format!("failed to inspect {}", path.display()))?;
            println!("{}", path.display());
            println!("  topic:            {}", info.topic);
            println!(
                "  schema:           {} ({})",
                info.schema_name, info.schema_encoding
            );
            println!("  message encoding: {}", info.message_encoding);
            println!("  messages:         {}", info.message_count);
            println!(
                "  time range (ns):  {} .. {}",
                time_or_dash(info.start_time),
                time_or_dash(info.end_time)
            );
        }
        Ok(())
    }
}
