mod converter;
mod error;
mod reader;
mod sink;
mod summary;
mod topics;
mod writer;

pub use converter::{ConversionContext, Converter, ConverterBuilder, convert_topic};
pub use error::{ConvertError, InspectError, RunError};
pub use reader::{ContainerInfo, inspect_container};
pub use sink::{ContainerSink, DirectorySink, MemorySink};
pub use summary::{ConversionReport, TopicFailure, TopicSummary};
pub use topics::{TopicKey, disambiguate_topics};
pub use ulog2mcap_core as core;
pub use ulog2mcap_jsonschema as jsonschema;
pub use writer::{CONTAINER_EXTENSION, ContainerStats, FinishedContainer, write_container};
