use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus_logger::tracing;
use serenity::all::{Client, Context, GatewayIntents, ShardManager};
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

use crate::bot::handler::{Handler, ReadySignal};
use crate::config::Config;
use crate::error::AppError;

/// Gateway intents requested by the snapshot bot.
pub const INTENTS: GatewayIntents = GatewayIntents::GUILDS;

/// How long `close` waits for the gateway task after shutting shards down.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Payload of the ready signal.
pub struct SessionReady {
    /// Context of the shard that became ready, used for cache and REST access.
    pub ctx: Context,
    /// When the ready signal fired; uptime is measured from here.
    pub ready_at: Instant,
}

type GatewayResult = Result<Result<(), serenity::Error>, JoinError>;

enum ReadyOutcome {
    Ready(SessionReady),
    SignalDropped,
    GatewayEnded(GatewayResult),
}

/// A live gateway connection with an explicit lifecycle.
///
/// `connect` → `wait_ready` → collection → `close`. The gateway runs in its own
/// task; the session keeps the shard manager to read latencies and shut down.
pub struct BotSession {
    shard_manager: Arc<ShardManager>,
    gateway: Option<JoinHandle<Result<(), serenity::Error>>>,
    ready_rx: Option<oneshot::Receiver<SessionReady>>,
    intents: GatewayIntents,
}

impl BotSession {
    /// Builds the client and starts the gateway in a background task.
    ///
    /// # Arguments
    /// - `config` - Application configuration holding the bot token
    ///
    /// # Returns
    /// - `Ok(BotSession)` - Gateway task started
    /// - `Err(AppError)` - Client could not be built (malformed token, HTTP setup)
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let (signal, ready_rx) = ReadySignal::new();

        let mut client = Client::builder(&config.discord_bot_token, INTENTS)
            .event_handler(Handler::new(Arc::new(signal)))
            .await?;

        let shard_manager = client.shard_manager.clone();

        tracing::info!("[LOGIN] Connecting to Discord...");

        let gateway = tokio::spawn(async move { client.start().await });

        Ok(Self {
            shard_manager,
            gateway: Some(gateway),
            ready_rx: Some(ready_rx),
            intents: INTENTS,
        })
    }

    /// Waits for the one-time ready signal.
    ///
    /// If the gateway task ends first (for example because Discord rejected the
    /// token), its error is returned instead.
    ///
    /// # Returns
    /// - `Ok(SessionReady)` - Bot is logged in and the guild cache is populated
    /// - `Err(AppError)` - Login failed or the gateway closed before ready
    pub async fn wait_ready(&mut self) -> Result<SessionReady, AppError> {
        let ready_rx = self
            .ready_rx
            .take()
            .ok_or_else(|| AppError::InternalError("Ready signal already awaited".to_string()))?;

        let outcome = match self.gateway.as_mut() {
            Some(gateway) => tokio::select! {
                ready = ready_rx => match ready {
                    Ok(ready) => ReadyOutcome::Ready(ready),
                    Err(_) => ReadyOutcome::SignalDropped,
                },
                result = gateway => ReadyOutcome::GatewayEnded(result),
            },
            None => return Err(AppError::GatewayClosed),
        };

        match outcome {
            ReadyOutcome::Ready(ready) => Ok(ready),
            ReadyOutcome::GatewayEnded(result) => {
                self.gateway = None;
                Err(gateway_error(result))
            }
            // The handler was dropped with the client, so the gateway task is
            // finishing; its result carries the real cause.
            ReadyOutcome::SignalDropped => match self.gateway.take() {
                Some(gateway) => Err(gateway_error(gateway.await)),
                None => Err(AppError::GatewayClosed),
            },
        }
    }

    pub fn intents(&self) -> GatewayIntents {
        self.intents
    }

    /// Latest heartbeat latency of every shard, `None` where no ACK arrived yet.
    pub async fn shard_latencies(&self) -> Vec<Option<Duration>> {
        self.shard_manager
            .runners
            .lock()
            .await
            .values()
            .map(|runner| runner.latency)
            .collect()
    }

    /// Shuts down every shard and waits briefly for the gateway task.
    ///
    /// Shutdown problems are logged at debug level and otherwise ignored.
    pub async fn close(mut self) {
        tracing::info!("[CLIENT] Disconnecting from Discord");

        self.shard_manager.shutdown_all().await;

        let Some(gateway) = self.gateway.take() else {
            return;
        };

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, gateway).await {
            Ok(Ok(Ok(()))) => {}
            Ok(Ok(Err(e))) => tracing::debug!("[SHARD] Gateway ended with error: {}", e),
            Ok(Err(e)) => tracing::debug!("[SHARD] Gateway task failed: {}", e),
            Err(_) => tracing::debug!("[SHARD] Gateway did not stop within {:?}", SHUTDOWN_TIMEOUT),
        }
    }
}

fn gateway_error(result: GatewayResult) -> AppError {
    match result {
        Ok(Ok(())) => AppError::GatewayClosed,
        Ok(Err(e)) => e.into(),
        Err(e) => AppError::InternalError(format!("Gateway task failed: {}", e)),
    }
}
