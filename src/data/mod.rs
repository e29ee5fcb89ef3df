//! Data access: the Discord cache and REST API, the process table, and the
//! snapshot file on disk.

pub mod discord;
pub mod process;
pub mod snapshot;
