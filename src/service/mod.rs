pub mod guild;
pub mod snapshot;

pub use snapshot::SnapshotService;

#[cfg(test)]
mod test;
