//! Guild enumeration and best-effort enrichment.
//!
//! Each guild known to the cache is refreshed over REST and, when the owner is
//! still unknown afterwards, an owner lookup is issued. Both calls are allowed to
//! fail: a failed refresh keeps the cached data and a failed owner lookup leaves
//! `owner_id` empty. Only a guild with neither cached nor refreshed data is
//! reported as a failure, and that failure never stops the remaining guilds.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use serenity::all::{GuildId, UserId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::guild::GuildRecord;

/// Read access to the guilds the bot belongs to.
///
/// Implemented over a live Serenity context in production and by in-memory fakes
/// in tests.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// IDs of every guild in the cache, including ones still unavailable.
    fn guild_ids(&self) -> Vec<GuildId>;

    /// Cached data for a guild, if the cache holds any.
    fn cached_guild(&self, guild_id: GuildId) -> Option<GuildRecord>;

    /// Fetches fresh guild data from the REST API.
    async fn refresh_guild(&self, guild_id: GuildId) -> Result<GuildRecord, AppError>;

    /// Looks up the guild owner when neither cache nor refresh provided one.
    async fn fetch_owner_id(&self, guild_id: GuildId) -> Result<UserId, AppError>;
}

/// Result of one enumeration pass.
#[derive(Debug, Default)]
pub struct GuildCollection {
    /// Number of guilds in the cache when the pass started.
    pub guild_count: usize,
    /// Number of guilds collected without error.
    pub fetched: usize,
    pub records: BTreeMap<u64, GuildRecord>,
}

pub struct GuildService<'a, D: GuildDirectory + ?Sized> {
    directory: &'a D,
}

impl<'a, D: GuildDirectory + ?Sized> GuildService<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Collects every cached guild, one at a time, in ascending ID order.
    ///
    /// Per-guild failures are logged with the guild ID and skipped.
    ///
    /// # Returns
    /// - `GuildCollection` - Records of the guilds that could be collected plus counters
    pub async fn collect_all(&self) -> GuildCollection {
        let mut guild_ids = self.directory.guild_ids();
        guild_ids.sort_unstable();

        let mut collection = GuildCollection {
            guild_count: guild_ids.len(),
            ..Default::default()
        };

        for guild_id in guild_ids {
            match self.collect_one(guild_id).await {
                Ok(record) => {
                    collection.records.insert(guild_id.get(), record);
                    collection.fetched += 1;
                }
                Err(e) => {
                    tracing::error!("[GUILD] Failed for {}: {}", guild_id, e);
                }
            }
        }

        collection
    }

    /// Builds the record for a single guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to collect
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - Cached and/or refreshed data, owner resolved if possible
    /// - `Err(AppError::NotFound)` - Guild is neither cached nor reachable over REST
    pub async fn collect_one(&self, guild_id: GuildId) -> Result<GuildRecord, AppError> {
        let cached = self.directory.cached_guild(guild_id);

        tracing::info!(
            "[GUILD] Processing {} - {}",
            guild_id,
            cached
                .as_ref()
                .and_then(|record| record.name.as_deref())
                .unwrap_or("<unavailable>")
        );

        let refreshed = match self.directory.refresh_guild(guild_id).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("[GUILD] Refresh failed for {}, using cache: {}", guild_id, e);
                None
            }
        };

        let mut record = match (cached, refreshed) {
            (Some(cached), Some(refreshed)) => cached.merge(refreshed),
            (Some(record), None) | (None, Some(record)) => record,
            (None, None) => {
                return Err(AppError::NotFound(format!(
                    "Guild {} is unavailable and could not be fetched",
                    guild_id
                )))
            }
        };

        if record.owner_id.is_none() {
            record.owner_id = match self.directory.fetch_owner_id(guild_id).await {
                Ok(owner_id) => Some(owner_id.to_string()),
                Err(e) => {
                    tracing::debug!("[GUILD] Owner lookup failed for {}: {}", guild_id, e);
                    None
                }
            };
        }

        Ok(record)
    }
}
