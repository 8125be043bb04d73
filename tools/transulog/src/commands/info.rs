use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;

use crate::{input::load_log, report::render_info};

#[derive(Args)]
pub struct InfoArgs {
    /// Path to the decoded log (.json)
    input: PathBuf,

    /// Also list `perf_` info keys
    #[arg(short, long)]
    verbose: bool,

    /// Output Markdown file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl InfoArgs {
    pub fn run(self) -> Result<()> {
        let log = load_log(&self.input)?;
        let markdown = render_info(&log, self.verbose)?;

        match self.output {
            Some(path) => {
                fs::write(&path, markdown)?;
                tracing::info!(report = %path.display(), "info report written");
            }
            None => print!("{markdown}"),
        }
        Ok(())
    }
}
