//! Test factories for creating Serenity Guild and PartialGuild objects.
//!
//! Both factories start from the same guild payload. The cached variant adds the
//! gateway-only fields (`large`, `member_count`, `joined_at`, ...); the partial
//! variant adds the approximate counts returned with `?with_counts=true`.

use serenity::all::{Guild, PartialGuild};
use serde_json::Value;

/// Owner ID used by every factory guild.
pub const TEST_OWNER_ID: u64 = 100000000000000000;

/// Pads a short icon hash to Discord's 32 hex character format.
///
/// Animated hashes keep their `a_` prefix and are padded to 34 characters.
fn format_icon_hash(hash: &str) -> String {
    if hash.starts_with("a_") {
        if hash.len() < 34 {
            format!("{:0<34}", hash)
        } else {
            hash.to_string()
        }
    } else if hash.len() < 32 {
        format!("{:0<32}", hash)
    } else {
        hash.to_string()
    }
}

/// Fields shared by the gateway and REST guild payloads.
fn base_guild_json(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Value {
    let formatted_icon = icon_hash.map(format_icon_hash);

    serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": formatted_icon,
        "icon_hash": formatted_icon,
        "banner": null,
        "splash": null,
        "discovery_splash": null,
        "description": null,
        "owner_id": TEST_OWNER_ID.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "rules_channel_id": null,
        "public_updates_channel_id": null,
        "vanity_url_code": null,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "max_presences": 25000,
        "max_members": 100000,
    })
}

/// Creates a test Serenity Guild as it would sit in the gateway cache.
///
/// The icon hash is automatically padded to 32 characters (Discord's icon hash
/// format) if it's shorter. The guild has 100 members, is not large, and is owned
/// by [`TEST_OWNER_ID`].
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `icon_hash` - Optional icon hash (will be padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
    let mut json = base_guild_json(guild_id, name, icon_hash);
    let extra = serde_json::json!({
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    });
    merge(&mut json, extra);

    serde_json::from_value(json).expect("Failed to create test guild - invalid JSON structure")
}

/// Creates a test Serenity PartialGuild as returned by a REST guild fetch.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `approximate_member_count` - Member count included with `?with_counts=true`
///
/// # Panics
/// - If the JSON cannot be deserialized into a PartialGuild (indicates invalid test data)
pub fn create_test_partial_guild(
    guild_id: u64,
    name: &str,
    approximate_member_count: Option<u64>,
) -> PartialGuild {
    let mut json = base_guild_json(guild_id, name, None);
    let extra = serde_json::json!({
        "approximate_member_count": approximate_member_count,
        "approximate_presence_count": approximate_member_count.map(|count| count / 2),
    });
    merge(&mut json, extra);

    serde_json::from_value(json)
        .expect("Failed to create test partial guild - invalid JSON structure")
}

fn merge(base: &mut Value, extra: Value) {
    if let (Value::Object(base), Value::Object(extra)) = (base, extra) {
        base.extend(extra);
    }
}
