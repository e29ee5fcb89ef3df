//! Ready event handlers that release the collection pass.
//!
//! The `ready` event fires once the gateway handshake completes, while the guilds
//! it lists are still arriving as `GUILD_CREATE` events. The collection pass must
//! see a populated cache, so the signal normally fires from `cache_ready`. A bot
//! in no guilds never gets `cache_ready` and is released from `ready` directly.
//!
//! Serenity skips `cache_ready` while any guild stays unavailable, so `ready`
//! also arms a fallback that releases the pass after [`WAIT_GUILD_TIMEOUT`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::bot::handler::{fire_after, ReadySignal};
use crate::bot::start::SessionReady;

/// How long `ready` waits for `cache_ready` before releasing anyway.
pub const WAIT_GUILD_TIMEOUT: Duration = Duration::from_secs(15);

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `signal` - Signal that releases the collection pass
/// - `ctx` - Discord context handed to the collection pass
/// - `ready` - Ready event data containing bot user and guild list
pub async fn handle_ready(signal: &Arc<ReadySignal<SessionReady>>, ctx: Context, ready: Ready) {
    tracing::info!(
        "[CLIENT] {} is connected to Discord, waiting for {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    if ready.guilds.is_empty() {
        release(signal, ctx).await;
        return;
    }

    let fallback = SessionReady {
        ctx,
        ready_at: Instant::now(),
    };
    let fallback = fire_after(signal.clone(), WAIT_GUILD_TIMEOUT, fallback);

    tokio::spawn(async move {
        if let Ok(true) = fallback.await {
            tracing::warn!(
                "[CLIENT] Guilds still unavailable after {:?}, continuing with a partial cache",
                WAIT_GUILD_TIMEOUT
            );
        }
    });
}

/// Handles the cache_ready event once every guild from `ready` is cached.
pub async fn handle_cache_ready(
    signal: &Arc<ReadySignal<SessionReady>>,
    ctx: Context,
    guilds: Vec<GuildId>,
) {
    tracing::info!("[CLIENT] Cache ready with {} guilds", guilds.len());

    release(signal, ctx).await;
}

async fn release(signal: &ReadySignal<SessionReady>, ctx: Context) {
    let fired = signal
        .fire(SessionReady {
            ctx,
            ready_at: Instant::now(),
        })
        .await;

    if !fired {
        tracing::debug!("[CLIENT] Ready signal already delivered, ignoring");
    }
}
