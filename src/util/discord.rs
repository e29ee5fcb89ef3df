use chrono::{DateTime, SecondsFormat, Utc};

/// First millisecond of 2015, the epoch Discord snowflakes count from.
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Formats a timestamp the way the snapshot stores it: RFC 3339, millisecond
/// precision, `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creation time encoded in a Discord snowflake.
///
/// # Returns
/// - `Some(String)` - Formatted creation timestamp
/// - `None` - Snowflake encodes a time chrono cannot represent
pub fn snowflake_created_at(id: u64) -> Option<String> {
    let millis = (id >> 22) as i64 + DISCORD_EPOCH_MS;
    DateTime::<Utc>::from_timestamp_millis(millis).map(format_timestamp)
}

/// Builds a CDN image URL for an icon, banner or avatar hash.
///
/// Animated hashes (prefixed `a_`) resolve to GIFs, everything else to PNG.
///
/// # Arguments
/// - `route` - CDN route segment such as `icons`, `banners` or `avatars`
/// - `id` - Owning guild or user ID
/// - `hash` - Image hash as returned by Discord
/// - `size` - Requested edge length in pixels (power of two)
pub fn cdn_image_url(route: &str, id: u64, hash: &str, size: u16) -> String {
    let extension = if hash.starts_with("a_") { "gif" } else { "png" };
    format!("{CDN_BASE_URL}/{route}/{id}/{hash}.{extension}?size={size}")
}
