//! One-shot inventory of a Discord bot.
//!
//! Logs in with the configured bot token, waits until the guild cache is ready,
//! collects bot identity, runtime statistics and per-guild metadata, writes them
//! as `<dir>/<bot-slug>.json`, and disconnects.

mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod util;

use std::process::ExitCode;

use dioxus_logger::tracing::{self, Level};

use crate::bot::start::BotSession;
use crate::config::Config;
use crate::data::snapshot::SnapshotWriter;
use crate::error::AppError;
use crate::service::SnapshotService;

/// Reads the configuration, mapping any error to the process exit code.
///
/// Runs before the gateway is contacted or the snapshot directory is touched.
fn load_config(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ExitCode> {
    Config::from_lookup(lookup).map_err(|e| {
        tracing::error!("[CONFIG] {}", e);
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();

    let config = match load_config(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let mut session = match BotSession::connect(&config).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("[LOGIN] Failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ready = match session.wait_ready().await {
        Ok(ready) => ready,
        Err(e) => {
            tracing::error!("[LOGIN] Failed: {}", e);
            session.close().await;
            return ExitCode::FAILURE;
        }
    };

    let writer = SnapshotWriter::new(&config.snapshot_dir);

    match SnapshotService::new(&session, &writer)
        .collect_and_write(&ready)
        .await
    {
        Ok(summary) => println!("\n{}\n", summary),
        Err(AppError::SnapshotErr(e)) => tracing::error!("[FS] {}", e),
        Err(e) => tracing::error!("[RUN] Failed: {}", e),
    }

    session.close().await;

    ExitCode::SUCCESS
}
