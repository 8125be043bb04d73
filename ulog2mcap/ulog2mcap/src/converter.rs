//! Log -> per-topic container conversion on a bounded worker pool.

use std::{
    collections::{BTreeSet, HashSet},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use rayon::prelude::*;
use ulog2mcap_core::{DataStream, DecodedLog};
use ulog2mcap_jsonschema::{SchemaRegistry, message_paths};

use crate::{
    error::{ConvertError, RunError},
    sink::ContainerSink,
    summary::{ConversionReport, TopicFailure, TopicSummary},
    topics::{TopicKey, disambiguate_topics},
    writer::{CONTAINER_EXTENSION, write_container},
};

/// Immutable state shared by every worker of one run.
pub struct ConversionContext<'a> {
    pub registry: &'a SchemaRegistry,
    pub sink: &'a dyn ContainerSink,
    pub cancel: &'a AtomicBool,
}

/// Converts decoded logs into one container per topic.
pub struct Converter {
    jobs: Option<usize>,
    topic_filter: Option<BTreeSet<String>>,
    cancel: Arc<AtomicBool>,
}

/// Builder for configuring [`Converter`].
pub struct ConverterBuilder {
    jobs: Option<usize>,
    topic_filter: Option<BTreeSet<String>>,
    cancel: Arc<AtomicBool>,
}

struct TopicJob<'a> {
    stream: &'a DataStream,
    topic: String,
}

impl Converter {
    /// Create a builder for [`Converter`].
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder {
            jobs: None,
            topic_filter: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Flag that, once set, makes in-flight topics abort and discard their
    /// containers.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Convert every selected data stream of `log` and hand the finalized
    /// containers to `sink`.
    ///
    /// Per-topic failures are collected in the report; only a failure to
    /// start the worker pool aborts the run.
    pub fn convert(
        &self,
        log: &DecodedLog,
        sink: &dyn ContainerSink,
    ) -> Result<ConversionReport, RunError> {
        self.convert_with_progress(log, sink, |_| {})
    }

    /// Like [`convert`](Self::convert), calling `progress` with each topic
    /// name as soon as that topic is done, in completion order.
    pub fn convert_with_progress(
        &self,
        log: &DecodedLog,
        sink: &dyn ContainerSink,
        progress: impl Fn(&str) + Sync,
    ) -> Result<ConversionReport, RunError> {
        let registry = SchemaRegistry::from_formats(log.message_formats.values());
        tracing::debug!(formats = registry.len(), "schemas inferred");

        let (jobs, mut failures) = self.plan(log);
        tracing::info!(
            topics = jobs.len(),
            streams = log.data_list.len(),
            "topics disambiguated"
        );

        let ctx = ConversionContext {
            registry: &registry,
            sink,
            cancel: &self.cancel,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs.unwrap_or(0))
            .build()?;

        let outcomes: Vec<(String, Result<TopicSummary, ConvertError>)> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let outcome = convert_topic(&ctx, job.stream, &job.topic);
                    progress(&job.topic);
                    (job.topic.clone(), outcome)
                })
                .collect()
        });

        let mut report = ConversionReport::default();
        for (topic, outcome) in outcomes {
            match outcome {
                Ok(summary) => report.topics.push(summary),
                Err(error) => failures.push(TopicFailure { topic, error }),
            }
        }
        for failure in &failures {
            tracing::warn!(topic = %failure.topic, error = %failure.error, "topic failed");
        }
        failures.sort_by(|a, b| a.topic.cmp(&b.topic));
        report.failures = failures;
        report
            .topics
            .sort_by(|a, b| a.topic_name.cmp(&b.topic_name));

        tracing::info!(
            converted = report.topics.len(),
            failed = report.failures.len(),
            "conversion finished"
        );
        Ok(report)
    }

    /// Number of topics a [`convert`](Self::convert) of `log` would hand to
    /// workers, after filtering and collision checks.
    pub fn planned_topics(&self, log: &DecodedLog) -> usize {
        self.plan(log).0.len()
    }

    fn selected(&self, stream: &DataStream, topic: &str) -> bool {
        self.topic_filter
            .as_ref()
            .is_none_or(|filter| filter.contains(&stream.name) || filter.contains(topic))
    }

    /// Name every stream, drop the ones outside the filter and reject
    /// streams whose final name is already taken.
    fn plan<'a>(&self, log: &'a DecodedLog) -> (Vec<TopicJob<'a>>, Vec<TopicFailure>) {
        let names = disambiguate_topics(&log.data_list);

        let mut streams: Vec<&DataStream> = log.data_list.iter().collect();
        streams.sort_by(|a, b| (&a.name, a.multi_id).cmp(&(&b.name, b.multi_id)));

        let mut taken = HashSet::new();
        let mut jobs = Vec::new();
        let mut failures = Vec::new();

        for stream in streams {
            let topic = names
                .get(&TopicKey::of(stream))
                .cloned()
                .unwrap_or_else(|| stream.name.clone());
            if !self.selected(stream, &topic) {
                continue;
            }
            if !taken.insert(topic.clone()) {
                failures.push(TopicFailure {
                    error: ConvertError::TopicNameCollision {
                        topic: topic.clone(),
                    },
                    topic,
                });
                continue;
            }
            jobs.push(TopicJob { stream, topic });
        }

        (jobs, failures)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// Number of worker threads (default: one per available core).
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Only convert streams whose base name or final topic name is listed.
    pub fn with_topic_filter<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topic_filter = Some(topics.into_iter().map(Into::into).collect());
        self
    }

    /// Share a cancellation flag with the caller.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Build the converter.
    pub fn build(self) -> Converter {
        Converter {
            jobs: self.jobs,
            topic_filter: self.topic_filter,
            cancel: self.cancel,
        }
    }
}

/// Convert one data stream into a container named after `topic` and persist
/// it through the context's sink.
pub fn convert_topic(
    ctx: &ConversionContext<'_>,
    stream: &DataStream,
    topic: &str,
) -> Result<TopicSummary, ConvertError> {
    let registered = match ctx.registry.get(&stream.name) {
        Some(Ok(registered)) => registered,
        Some(Err(source)) => {
            return Err(ConvertError::Schema {
                format: stream.name.clone(),
                source: source.clone(),
            });
        }
        None => {
            return Err(ConvertError::FormatNotFound {
                format: stream.name.clone(),
            });
        }
    };

    let container = write_container(stream, registered, topic, ctx.cancel)?;
    if ctx.cancel.load(Ordering::Relaxed) {
        return Err(ConvertError::Cancelled);
    }
    let file_name = format!("{topic}.{CONTAINER_EXTENSION}");
    let location = ctx
        .sink
        .persist(&file_name, &container.bytes)
        .map_err(|source| ConvertError::ContainerIo {
            topic: topic.to_string(),
            source,
        })?;

    tracing::debug!(topic, location = %location.display(), "topic written");

    Ok(TopicSummary {
        topic_name: topic.to_string(),
        schema_name: registered.name.clone(),
        multi_id: stream.multi_id,
        schema: registered.schema.clone(),
        schema_checksum: registered.checksum,
        message_paths: message_paths(&stream.field_data),
        message_count: container.stats.message_count,
        start_time: container.stats.start_time,
        end_time: container.stats.end_time,
        location,
    })
}
