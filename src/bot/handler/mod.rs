use std::sync::Arc;
use std::time::Duration;

use serenity::all::{Context, EventHandler, GuildId, Ready, ResumedEvent, ShardStageUpdateEvent};
use serenity::async_trait;
use serenity::http::RatelimitInfo;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::bot::start::SessionReady;

pub mod ready;
pub mod shard;

/// One-time completion signal.
///
/// Wraps a oneshot sender so the first `fire` delivers its value and every later
/// call is a no-op, no matter how many events try to complete it.
pub struct ReadySignal<T> {
    tx: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> ReadySignal<T> {
    pub fn new() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Mutex::new(Some(tx)),
            },
            rx,
        )
    }

    /// Delivers `value` if the signal has not fired yet.
    ///
    /// # Returns
    /// - `true` - This call fired the signal and the receiver got the value
    /// - `false` - Already fired, or the receiver was dropped
    pub async fn fire(&self, value: T) -> bool {
        match self.tx.lock().await.take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }
}

/// Fires `signal` with `value` once `delay` has elapsed.
///
/// The task resolves to `false` when something else fired the signal first.
pub fn fire_after<T: Send + 'static>(
    signal: Arc<ReadySignal<T>>,
    delay: Duration,
    value: T,
) -> JoinHandle<bool> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        signal.fire(value).await
    })
}

/// Discord bot event handler
pub struct Handler {
    pub ready: Arc<ReadySignal<SessionReady>>,
}

impl Handler {
    pub fn new(ready: Arc<ReadySignal<SessionReady>>) -> Self {
        Self { ready }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the gateway handshake completes
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }

    /// Called once every guild announced in `ready` has arrived in the cache
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.ready, ctx, guilds).await;
    }

    /// Called when a shard changes connection stage
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        shard::handle_shard_stage_update(ctx, event).await;
    }

    /// Called when a shard resumes a dropped session
    async fn resume(&self, ctx: Context, event: ResumedEvent) {
        shard::handle_resume(ctx, event).await;
    }

    /// Called when a REST request hits a rate limit
    async fn ratelimit(&self, data: RatelimitInfo) {
        shard::handle_ratelimit(data).await;
    }
}
