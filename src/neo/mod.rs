mod designation;
mod properties;

pub use designation::{NAME_PREFIX_LEN, sbdb_lookup_key};
pub use properties::ObjectProperties;
