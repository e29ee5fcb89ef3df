//! Snapshot assembly and the single collection pass.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::bot::start::{BotSession, SessionReady};
use crate::data::discord::DiscordDirectory;
use crate::data::process::read_memory_usage;
use crate::data::snapshot::SnapshotWriter;
use crate::error::AppError;
use crate::model::{
    bot::BotIdentity,
    snapshot::{Snapshot, SnapshotMeta},
    stats::{GatewayInfo, RuntimeInfo, RuntimeStats},
};
use crate::service::guild::{GuildCollection, GuildService};
use crate::util::discord::format_timestamp;

/// Returns the value when it is a finite number of milliseconds.
pub fn finite_ms(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Average heartbeat latency across shards, in whole milliseconds.
///
/// Shards that have not received a heartbeat acknowledgement yet are ignored.
///
/// # Returns
/// - `Some(f64)` - Average of the known latencies
/// - `None` - No shard has a latency, or the average is not finite
pub fn ping_ms(latencies: &[Option<Duration>]) -> Option<f64> {
    let known: Vec<f64> = latencies
        .iter()
        .flatten()
        .map(|latency| latency.as_secs_f64() * 1000.0)
        .collect();

    if known.is_empty() {
        return None;
    }

    finite_ms((known.iter().sum::<f64>() / known.len() as f64).round())
}

pub struct SnapshotService<'a> {
    session: &'a BotSession,
    writer: &'a SnapshotWriter,
}

impl<'a> SnapshotService<'a> {
    pub fn new(session: &'a BotSession, writer: &'a SnapshotWriter) -> Self {
        Self { session, writer }
    }

    /// Runs the collection pass and writes the snapshot.
    ///
    /// The output directory is prepared first so a run that cannot write does not
    /// spend requests on guild enrichment.
    ///
    /// # Arguments
    /// - `ready` - Context handed over by the ready signal
    ///
    /// # Returns
    /// - `Ok(SnapshotSummary)` - Snapshot written
    /// - `Err(AppError::SnapshotErr)` - Directory or file could not be written
    pub async fn collect_and_write(&self, ready: &SessionReady) -> Result<SnapshotSummary, AppError> {
        self.writer.ensure_dir().await?;

        let directory = DiscordDirectory::new(&ready.ctx);
        let bot = directory.current_user();

        let guilds = GuildService::new(&directory).collect_all().await;

        let stats = RuntimeStats {
            cached_users: directory.cached_user_count(),
            cached_channels: directory.cached_channel_count(),
            ping_ms: ping_ms(&self.session.shard_latencies().await),
            uptime_ms: u64::try_from(ready.ready_at.elapsed().as_millis()).ok(),
            memory: read_memory_usage(),
            runtime: RuntimeInfo::current(),
            gateway: GatewayInfo::from_intents(self.session.intents()),
        };

        let snapshot = Self::build(Utc::now(), bot, stats, guilds);
        let path = self.writer.write(&snapshot).await?;

        tracing::info!(
            "[FS] Wrote snapshot with {} guilds to {}",
            snapshot.meta.guild_entries_written,
            path.display()
        );

        Ok(SnapshotSummary::new(&snapshot, path))
    }

    /// Assembles the root document from the collected parts.
    pub fn build(
        generated_at: DateTime<Utc>,
        bot: BotIdentity,
        stats: RuntimeStats,
        guilds: GuildCollection,
    ) -> Snapshot {
        Snapshot {
            meta: SnapshotMeta {
                generated_at: format_timestamp(generated_at),
                guild_count: guilds.guild_count,
                guild_entries_written: guilds.records.len(),
                guild_entries_fetched: guilds.fetched,
            },
            bot,
            stats,
            servers: guilds.records,
        }
    }
}

/// Human-readable summary printed after a successful write.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    pub name: String,
    pub id: Option<String>,
    pub guild_count: usize,
    pub ping_ms: Option<f64>,
    pub uptime_ms: Option<u64>,
    pub created_at: Option<String>,
    pub path: PathBuf,
}

impl SnapshotSummary {
    pub fn new(snapshot: &Snapshot, path: PathBuf) -> Self {
        Self {
            name: snapshot.bot.name().to_string(),
            id: snapshot.bot.id.clone(),
            guild_count: snapshot.meta.guild_count,
            ping_ms: snapshot.stats.ping_ms,
            uptime_ms: snapshot.stats.uptime_ms,
            created_at: snapshot.bot.created_at.clone(),
            path,
        }
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bot snapshot:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id.as_deref().unwrap_or("n/a"))?;
        writeln!(f, "Servers: {}", self.guild_count)?;
        match self.ping_ms {
            Some(ping) => writeln!(f, "Ping: {}ms", ping)?,
            None => writeln!(f, "Ping: n/a")?,
        }
        writeln!(f, "Uptime: {}ms", self.uptime_ms.unwrap_or(0))?;
        writeln!(f, "Created at: {}", self.created_at.as_deref().unwrap_or("n/a"))?;
        write!(f, "Saved to: {}", self.path.display())
    }
}
