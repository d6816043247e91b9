use super::config::DateWindow;
use super::outcome::SkipReason;
use super::report::PipelineReport;
use super::sources::{ElementSource, FeedSource};
use crate::http_handler::http_handler_common::{HTTPError, NearEarthObjectRecord};
use crate::neo::{ObjectProperties, sbdb_lookup_key};
use crate::orbit::{OrbitPath, OrbitalElements};
use crate::{error, event, info, log, skip, warn};
use itertools::Itertools;
use std::fmt;
use std::path::PathBuf;

/// Drives a single run: one feed request, then one element lookup per object, strictly in
/// sequence.
pub struct Pipeline<S> {
    pub(super) source: S,
    window: DateWindow,
}

impl<S> Pipeline<S>
where S: FeedSource + ElementSource
{
    pub fn new(source: S, window: DateWindow) -> Self { Self { source, window } }


    /// Fetches the feed and processes every object in it.
    ///
    /// Per-object failures are recorded in the report and never abort the run.
    ///
    /// # Errors
    /// Returns [`PipelineError::Feed`] if the feed itself cannot be fetched or decoded.
    pub async fn run(&self) -> Result<PipelineReport, PipelineError> {
        info!("Requesting near-earth objects for {}.", self.window);
        let feed = self.source.fetch_feed(self.window).await.map_err(PipelineError::Feed)?;
        info!(
            "Feed returned {} objects on {} days.",
            feed.record_count(),
            feed.objects_by_date().len()
        );
        if feed.element_count() != feed.record_count() {
            warn!(
                "Feed announced {} objects but contained {}.",
                feed.element_count(),
                feed.record_count()
            );
        }

        let mut report = PipelineReport::new();
        for (date, records) in feed.objects_by_date() {
            log!("Processing {} objects approaching on {date}.", records.len());
            for record in records {
                match self.process_object(record).await {
                    Ok((path, props)) => report.record(record.name(), path, props),
                    Err(reason @ SkipReason::IncompleteElements(_)) => {
                        skip!("Skipping asteroid {}: {reason}", record.name());
                        report.record_skip(record.name(), reason);
                    }
                    Err(reason) => {
                        error!("Could not create orbit for asteroid {}: {reason}", record.name());
                        report.record_skip(record.name(), reason);
                    }
                }
            }
        }
        Ok(report)
    }

    /// Resolves, samples and describes a single object.
    ///
    /// # Errors
    /// Returns the [`SkipReason`] that keeps the object out of both artifacts.
    pub async fn process_object(
        &self,
        record: &NearEarthObjectRecord,
    ) -> Result<(OrbitPath, ObjectProperties), SkipReason> {
        let key = sbdb_lookup_key(record.name());
        log!(
            "Asteroid: {} (id {}, {}, SBDB search string {key:?})",
            record.name(),
            record.id().or(record.neo_reference_id()).unwrap_or("unknown"),
            match record.is_hazardous() {
                Some(true) => "potentially hazardous",
                Some(false) => "not hazardous",
                None => "hazard unknown",
            }
        );
        if let Some(approach) = record.close_approaches().first() {
            event!(
                "First close approach of {} on {} to {}.",
                record.name(),
                approach.date().unwrap_or("an unknown date"),
                approach.orbiting_body().unwrap_or("an unknown body")
            );
        }
        let sbdb = self.source.lookup_elements(&key).await?;
        event!(
            "SBDB orbital element keys for {}: {}",
            record.name(),
            sbdb.element_map().keys().sorted().join(", ")
        );
        if let Some(message) = sbdb.message() {
            event!("SBDB message for {}: {message}", record.name());
        }
        let elements = OrbitalElements::from_sbdb(&sbdb)?;
        info!(
            "Orbit created for asteroid {}: {elements}",
            sbdb.full_name().unwrap_or(record.name())
        );
        let path = OrbitPath::sample(&elements);
        event!(
            "Sampled {} orbit points for {}, farthest at {:.0} km.",
            path.len(),
            record.name(),
            path.max_radius()
        );
        let props = ObjectProperties::extract(record)?;
        Ok((path, props))
    }
}

#[derive(Debug)]
pub enum PipelineError {
    /// The feed request failed. Nothing can be processed.
    Feed(HTTPError),
    /// An artifact could not be written or read.
    Artifact { path: PathBuf, source: std::io::Error },
    /// An artifact could not be encoded or decoded.
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Feed(err) => write!(f, "could not fetch the NEO feed: {err}"),
            PipelineError::Artifact { path, source } => {
                write!(f, "could not access {}: {source}", path.display())
            }
            PipelineError::Json { path, source } => {
                write!(f, "invalid JSON for {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Feed(err) => Some(err),
            PipelineError::Artifact { source, .. } => Some(source),
            PipelineError::Json { source, .. } => Some(source),
        }
    }
}
