//! Bot Snapshot Test Utils
//!
//! Provides shared testing utilities for the bot snapshot crate. The factories in
//! [`serenity`] build Serenity model objects by deserializing JSON shaped like the
//! payloads Discord returns, so tests exercise the same conversion code that runs
//! against the live API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_user};
//!
//! #[test]
//! fn converts_guild() {
//!     let guild = create_test_guild(123456789, "Test Guild", Some("abc123"));
//!     let user = create_test_user(987654321, "coolbot", Some("Cool Bot"));
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
