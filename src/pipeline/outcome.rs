use crate::http_handler::http_handler_common::{ConversionError, HTTPError};
use crate::orbit::{ElementsError, RequiredElement};
use itertools::Itertools;
use std::fmt;

/// What happened to a single feed object during a run.
#[derive(Debug)]
pub enum ObjectOutcome {
    /// Orbit and properties were recorded.
    Processed { name: String },
    /// The object was left out of both artifacts.
    Skipped { name: String, reason: SkipReason },
}

impl ObjectOutcome {
    pub fn name(&self) -> &str {
        match self {
            ObjectOutcome::Processed { name } | ObjectOutcome::Skipped { name, .. } => name,
        }
    }

    pub fn is_processed(&self) -> bool { matches!(self, ObjectOutcome::Processed { .. }) }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            ObjectOutcome::Processed { .. } => None,
            ObjectOutcome::Skipped { reason, .. } => Some(reason),
        }
    }
}

/// Why an object was dropped from the batch.
#[derive(Debug)]
pub enum SkipReason {
    /// The small-body database did not provide all required orbital elements.
    IncompleteElements(Vec<RequiredElement>),
    /// The small-body database lookup failed.
    Lookup(HTTPError),
    /// A value was present but not numeric.
    Conversion(ConversionError),
}

impl SkipReason {
    /// Short category name, used for grouping in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::IncompleteElements(_) => "incomplete elements",
            SkipReason::Lookup(_) => "lookup failure",
            SkipReason::Conversion(_) => "conversion failure",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::IncompleteElements(missing) => {
                write!(f, "missing SBDB orbital elements: {}", missing.iter().join(", "))
            }
            SkipReason::Lookup(err) => write!(f, "SBDB lookup failed: {err}"),
            SkipReason::Conversion(err) => write!(f, "{err}"),
        }
    }
}

impl From<ElementsError> for SkipReason {
    fn from(value: ElementsError) -> Self {
        match value {
            ElementsError::Incomplete(missing) => SkipReason::IncompleteElements(missing),
            ElementsError::Conversion(err) => SkipReason::Conversion(err),
        }
    }
}

impl From<HTTPError> for SkipReason {
    fn from(value: HTTPError) -> Self { SkipReason::Lookup(value) }
}

impl From<ConversionError> for SkipReason {
    fn from(value: ConversionError) -> Self { SkipReason::Conversion(value) }
}
