//! The fetch, resolve, transform and write stages of a run, plus the configuration they share.

mod config;
mod outcome;
mod report;
mod runner;
mod sources;
mod writer;

pub use config::{ConfigError, DEFAULT_FEED_URL, DEFAULT_SBDB_URL, DateWindow, PipelineConfig};
pub use outcome::{ObjectOutcome, SkipReason};
pub use report::{OrbitMap, PipelineReport, PropertiesMap};
pub use runner::{Pipeline, PipelineError};
pub(crate) use sources::{ElementSource, FeedSource};
pub use writer::{ArtifactWriter, ORBIT_ARTIFACT, PROPERTIES_ARTIFACT};
