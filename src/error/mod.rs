//! Error types for the snapshot run.
//!
//! `AppError` is the top-level error that wraps configuration, output and Discord
//! errors. Which variant surfaces decides how the run ends: configuration and
//! login errors abort with a non-zero exit code, snapshot errors only abort the
//! write step, and everything else is logged and the run still closes cleanly.

pub mod config;
pub mod snapshot;

use thiserror::Error;

use crate::error::{config::ConfigError, snapshot::SnapshotError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the bot never connects without a usable configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure preparing the output directory or writing the snapshot file.
    #[error(transparent)]
    SnapshotErr(#[from] SnapshotError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The gateway task ended before the bot became ready.
    ///
    /// Seen when Discord closes the connection during login without Serenity
    /// reporting a more specific error.
    #[error("Gateway connection closed before the bot became ready")]
    GatewayClosed,

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
