//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway and REST API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_partial_guild};
//!
//! // Cached guild as delivered by GUILD_CREATE
//! let cached = create_test_guild(123456789, "Test Guild", Some("abc123"));
//!
//! // Same guild as returned by GET /guilds/{id}?with_counts=true
//! let fresh = create_test_partial_guild(123456789, "Renamed Guild", Some(2500));
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_partial_guild` - Create Serenity PartialGuild objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod guild;
pub mod user;

// Re-export commonly used functions for convenience
pub use guild::{create_test_guild, create_test_partial_guild};
pub use user::create_test_user;
