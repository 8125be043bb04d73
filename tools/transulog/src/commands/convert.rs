use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use ulog2mcap::{ConversionReport, Converter, DirectorySink, TopicSummary};

use crate::input::{discover_inputs, load_log};

#[derive(Args)]
pub struct ConvertArgs {
    /// Decoded log (.json) or a directory searched recursively for them
    #[arg(env = "ULOG2MCAP_INPUT")]
    input: PathBuf,

    /// Output directory; each log gets `<output>/<relative dir>/<stem>/`
    #[arg(short, long, env = "ULOG2MCAP_OUTPUT_DIR")]
    output: PathBuf,

    /// Only convert these topics (base or suffixed names, comma separated)
    #[arg(short, long, env = "ULOG2MCAP_TOPICS", value_delimiter = ',')]
    topics: Vec<String>,

    /// Number of worker threads (default: number of cores)
    #[arg(short, long, env = "ULOG2MCAP_JOBS")]
    jobs: Option<usize>,

    /// Write a JSON manifest of every converted topic to this file
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    input: &'a Path,
    topics: &'a [TopicSummary],
    failures: Vec<ManifestFailure>,
}

#[derive(Serialize)]
struct ManifestFailure {
    topic: String,
    error: String,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let converter = self.converter();
        let inputs = discover_inputs(&self.input)?;
        if inputs.is_empty() {
            bail!("no decoded logs found under {}", self.input.display());
        }

        let mut reports = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let log = load_log(&input.path)?;
            let sink = DirectorySink::new(input.output_dir(&self.output))?;
            tracing::info!(
                input = %input.path.display(),
                output = %sink.root().display(),
                "converting"
            );

            let pb = ProgressBar::new(converter.planned_topics(&log) as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("=>-"),
            );
            let report = converter.convert_with_progress(&log, &sink, |topic| {
                pb.set_message(topic.to_string());
                pb.inc(1);
            })?;
            pb.finish_with_message("done");

            reports.push((input.path.as_path(), report));
        }

        if let Some(path) = &self.manifest {
            write_manifest(path, &reports)?;
        }

        let failed: usize = reports.iter().map(|(_, r)| r.failures.len()).sum();
        for (input, report) in &reports {
            for failure in &report.failures {
                eprintln!(
                    "{}: {}: {}",
                    input.display(),
                    failure.topic,
                    failure.error
                );
            }
        }
        if failed > 0 {
            bail!("{failed} topic(s) failed to convert");
        }
        Ok(())
    }

    fn converter(&self) -> Converter {
        let mut builder = Converter::builder();
        if let Some(jobs) = self.jobs {
            builder = builder.with_jobs(jobs);
        }
        if !self.topics.is_empty() {
            builder = builder.with_topic_filter(self.topics.iter().map(|t| t.trim()));
        }
        builder.build()
    }
}

fn write_manifest(path: &Path, reports: &[(&Path, ConversionReport)]) -> Result<()> {
    let entries: Vec<_> = reports
        .iter()
        .map(|(input, report)| ManifestEntry {
            input,
            topics: &report.topics,
            failures: report
                .failures
                .iter()
                .map(|f| ManifestFailure {
                    topic: f.topic.clone(),
                    error: f.error.to_string(),
                })
                .collect(),
        })
        .collect();

    fs::write(path, serde_json::to_vec_pretty(&entries)?)?;
    tracing::info!(manifest = %path.display(), "manifest written");
    Ok(())
}
