use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{bot::BotIdentity, guild::GuildRecord, stats::RuntimeStats};

/// Root document written to `<dir>/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    pub bot: BotIdentity,
    pub stats: RuntimeStats,
    /// Guild records keyed by guild ID, in ascending ID order.
    pub servers: BTreeMap<u64, GuildRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    pub generated_at: String,
    /// Guilds present in the cache when collection started.
    pub guild_count: usize,
    pub guild_entries_written: usize,
    /// Guilds that were collected without error. Never exceeds `guild_count`.
    pub guild_entries_fetched: usize,
}
