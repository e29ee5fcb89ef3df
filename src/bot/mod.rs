//! Discord gateway session for the snapshot run.
//!
//! The session logs in with the configured bot token, waits for a single ready
//! signal, hands the ready context to the collection pass, and then shuts every
//! shard down so the process can exit.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. It is enough to populate the guild cache with
//! names, owners, channels and boost data, and it is not a privileged intent, so
//! the bot needs no extra switches in the Discord Developer Portal.
//!
//! # Ready Signal
//!
//! Serenity fires `ready` as soon as the gateway handshake completes, before the
//! guilds listed in it have streamed into the cache. The session therefore treats
//! `cache_ready` as the ready signal, or `ready` itself when the bot is in no
//! guilds and `cache_ready` would never fire.

pub mod handler;
pub mod start;
