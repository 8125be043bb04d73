//! Markdown summary of a decoded log.

use std::fmt::{self, Write};

use ulog2mcap::core::DecodedLog;

const PERF_PREFIX: &str = "perf_";

fn hms(micros: u64) -> String {
    let secs = micros / 1_000_000;
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

/// Render the info report. `perf_` info keys are listed only when
/// `verbose` is set.
pub fn render_info(log: &DecodedLog, verbose: bool) -> Result<String, fmt::Error> {
    let mut md = String::new();
    write_info(&mut md, log, verbose)?;
    Ok(md)
}

fn write_info(md: &mut String, log: &DecodedLog, verbose: bool) -> fmt::Result {
    writeln!(md, "# ULog Information\n")?;

    writeln!(md, "## Logging start time")?;
    match (log.start_timestamp, log.last_timestamp) {
        (Some(start), Some(last)) => writeln!(
            md,
            "`Logging start time: {}, duration: {}`\n",
            hms(start),
            hms(last.saturating_sub(start))
        )?,
        _ => writeln!(md, "`Logging start time: unknown`\n")?,
    }

    writeln!(md, "## Info Messages")?;
    for (key, value) in &log.info {
        if verbose || !key.starts_with(PERF_PREFIX) {
            writeln!(md, "- **{key}**: {value}")?;
        }
    }
    writeln!(md)?;

    writeln!(md, "## Data Points Information")?;
    writeln!(
        md,
        "| Name (multi id, message size in bytes) | number of data points | total bytes |"
    )?;
    writeln!(md, "| --- | --- | --- |")?;

    let mut streams: Vec<_> = log.data_list.iter().collect();
    streams.sort_by(|a, b| (&a.name, a.multi_id).cmp(&(&b.name, b.multi_id)));
    for stream in streams {
        let size = stream.message_size();
        let points = stream.row_count();
        writeln!(
            md,
            "| {} ({}, {}) | {} | {} |",
            stream.name,
            stream.multi_id,
            size,
            points,
            size * points
        )?;
    }
    writeln!(md)
}
