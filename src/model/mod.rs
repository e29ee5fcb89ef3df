//! Snapshot document model.
//!
//! These types mirror the JSON document written to disk. Field names are
//! serialized in camelCase, snowflake IDs as decimal strings, and any value that
//! could not be determined for the run is written as `null`.

pub mod bot;
pub mod guild;
pub mod snapshot;
pub mod stats;
