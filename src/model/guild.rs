use serde::Serialize;
use serenity::all::{Guild, GuildId, PartialGuild};

use crate::util::discord::{cdn_image_url, snowflake_created_at};

const ICON_SIZE: u16 = 256;
const BANNER_SIZE: u16 = 512;

/// Member count above which the gateway flags a guild as large. Serenity
/// identifies with this threshold.
const LARGE_THRESHOLD: u64 = 250;

/// Per-guild entry of the snapshot's `servers` map.
///
/// Every field except `id` is optional. A record may be built from the cached
/// guild, from a REST refresh, or from both merged together, and whatever could
/// not be determined stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildRecord {
    /// Discord guild ID as a decimal string.
    pub id: String,
    pub name: Option<String>,
    /// Cached member count, or the approximate count from a refresh.
    pub member_count: Option<u64>,
    pub owner_id: Option<String>,
    pub created_at: Option<String>,
    pub large: Option<bool>,
    pub preferred_locale: Option<String>,
    /// Discord's numeric verification level.
    pub verification_level: Option<u8>,
    /// Discord's numeric NSFW level.
    pub nsfw_level: Option<u8>,
    /// Discord's numeric boost tier.
    pub premium_tier: Option<u8>,
    pub premium_subscription_count: Option<u64>,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
    #[serde(rename = "bannerURL")]
    pub banner_url: Option<String>,
}

impl GuildRecord {
    /// Creates a record that knows nothing but the guild's identity.
    pub fn new(guild_id: GuildId) -> Self {
        let id = guild_id.get();

        Self {
            id: id.to_string(),
            name: None,
            member_count: None,
            owner_id: None,
            created_at: snowflake_created_at(id),
            large: None,
            preferred_locale: None,
            verification_level: None,
            nsfw_level: None,
            premium_tier: None,
            premium_subscription_count: None,
            icon_url: None,
            banner_url: None,
        }
    }

    /// Converts a guild from the gateway cache.
    ///
    /// # Arguments
    /// - `guild` - Cached guild as delivered by `GUILD_CREATE`
    pub fn from_guild(guild: &Guild) -> Self {
        let id = guild.id.get();

        Self {
            name: Some(guild.name.clone()),
            member_count: Some(guild.member_count),
            owner_id: Some(guild.owner_id.to_string()),
            large: Some(guild.large),
            preferred_locale: Some(guild.preferred_locale.clone()),
            verification_level: Some(u8::from(guild.verification_level)),
            nsfw_level: Some(u8::from(guild.nsfw_level)),
            premium_tier: Some(u8::from(guild.premium_tier)),
            premium_subscription_count: guild.premium_subscription_count,
            icon_url: guild
                .icon
                .as_ref()
                .map(|hash| cdn_image_url("icons", id, &hash.to_string(), ICON_SIZE)),
            banner_url: guild
                .banner
                .as_ref()
                .map(|hash| cdn_image_url("banners", id, &hash.to_string(), BANNER_SIZE)),
            ..Self::new(guild.id)
        }
    }

    /// Converts a guild fetched over REST with counts.
    ///
    /// The REST payload has no `large` flag and only an approximate member count,
    /// so `member_count` carries the approximation and `large` is derived from it
    /// with the gateway's threshold.
    ///
    /// # Arguments
    /// - `guild` - Guild returned by `GET /guilds/{id}?with_counts=true`
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        let id = guild.id.get();

        Self {
            name: Some(guild.name.clone()),
            member_count: guild.approximate_member_count,
            large: guild
                .approximate_member_count
                .map(|count| count > LARGE_THRESHOLD),
            owner_id: Some(guild.owner_id.to_string()),
            preferred_locale: Some(guild.preferred_locale.clone()),
            verification_level: Some(u8::from(guild.verification_level)),
            nsfw_level: Some(u8::from(guild.nsfw_level)),
            premium_tier: Some(u8::from(guild.premium_tier)),
            premium_subscription_count: guild.premium_subscription_count,
            icon_url: guild
                .icon
                .as_ref()
                .map(|hash| cdn_image_url("icons", id, &hash.to_string(), ICON_SIZE)),
            banner_url: guild
                .banner
                .as_ref()
                .map(|hash| cdn_image_url("banners", id, &hash.to_string(), BANNER_SIZE)),
            ..Self::new(guild.id)
        }
    }

    /// Overlays fresher data on top of this record.
    ///
    /// Values present in `newer` win; values it lacks keep what this record had.
    /// `large` is the exception: the gateway flag beats the derived one.
    pub fn merge(self, newer: GuildRecord) -> GuildRecord {
        GuildRecord {
            id: self.id,
            name: newer.name.or(self.name),
            member_count: newer.member_count.or(self.member_count),
            owner_id: newer.owner_id.or(self.owner_id),
            created_at: newer.created_at.or(self.created_at),
            large: self.large.or(newer.large),
            preferred_locale: newer.preferred_locale.or(self.preferred_locale),
            verification_level: newer.verification_level.or(self.verification_level),
            nsfw_level: newer.nsfw_level.or(self.nsfw_level),
            premium_tier: newer.premium_tier.or(self.premium_tier),
            premium_subscription_count: newer
                .premium_subscription_count
                .or(self.premium_subscription_count),
            icon_url: newer.icon_url.or(self.icon_url),
            banner_url: newer.banner_url.or(self.banner_url),
        }
    }
}
