use super::outcome::{ObjectOutcome, SkipReason};
use crate::neo::ObjectProperties;
use crate::orbit::OrbitPath;
use crate::{info, log};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Orbit paths keyed by object name.
pub type OrbitMap = BTreeMap<String, OrbitPath>;
/// Object properties keyed by object name.
pub type PropertiesMap = BTreeMap<String, ObjectProperties>;

/// The result of a pipeline run.
///
/// `orbits` and `properties` always hold the same set of names.
#[derive(Debug, Default)]
pub struct PipelineReport {
    orbits: OrbitMap,
    properties: PropertiesMap,
    outcomes: Vec<ObjectOutcome>,
}

impl PipelineReport {
    pub fn new() -> Self { Self::default() }

    /// Records a successfully processed object. A name seen before is overwritten in both maps.
    pub fn record(&mut self, name: &str, path: OrbitPath, props: ObjectProperties) {
        self.orbits.insert(name.to_string(), path);
        self.properties.insert(name.to_string(), props);
        self.outcomes.push(ObjectOutcome::Processed { name: name.to_string() });
    }

    /// Records an object that is left out of both maps.
    pub fn record_skip(&mut self, name: &str, reason: SkipReason) {
        self.outcomes.push(ObjectOutcome::Skipped { name: name.to_string(), reason });
    }

    pub fn orbits(&self) -> &OrbitMap { &self.orbits }
    pub fn properties(&self) -> &PropertiesMap { &self.properties }
    pub fn outcomes(&self) -> &[ObjectOutcome] { &self.outcomes }

    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_processed()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ObjectOutcome> {
        self.outcomes.iter().filter(|o| !o.is_processed())
    }

    /// Logs totals and the number of skips per reason.
    pub fn log_summary(&self) {
        info!(
            "Processed {} of {} objects, {} distinct names recorded.",
            self.processed_count(),
            self.outcomes.len(),
            self.orbits.len()
        );
        let by_kind = self
            .skipped()
            .filter_map(ObjectOutcome::skip_reason)
            .counts_by(|reason| reason.kind());
        for (kind, count) in by_kind.into_iter().sorted() {
            log!("Skipped {count} objects due to {kind}.");
        }
    }
}
