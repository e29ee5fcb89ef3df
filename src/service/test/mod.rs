use std::collections::HashMap;
use std::sync::Mutex;

use serenity::all::{GuildId, UserId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::guild::GuildRecord;
use crate::service::guild::GuildDirectory;

mod guild;

/// In-memory guild directory.
///
/// Guilds without a cached, refreshed or owner entry behave like the matching
/// Discord call failing. Every REST call is recorded so tests can assert which
/// lookups were issued.
#[derive(Default)]
pub struct FakeDirectory {
    pub guild_ids: Vec<GuildId>,
    pub cached: HashMap<GuildId, GuildRecord>,
    pub refreshed: HashMap<GuildId, GuildRecord>,
    pub owners: HashMap<GuildId, UserId>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn with_guild(mut self, guild_id: u64) -> Self {
        self.guild_ids.push(GuildId::new(guild_id));
        self
    }

    pub fn with_cached(mut self, record: GuildRecord) -> Self {
        let guild_id = GuildId::new(record.id.parse().unwrap());
        self.cached.insert(guild_id, record);
        self
    }

    pub fn with_refreshed(mut self, record: GuildRecord) -> Self {
        let guild_id = GuildId::new(record.id.parse().unwrap());
        self.refreshed.insert(guild_id, record);
        self
    }

    pub fn with_owner(mut self, guild_id: u64, owner_id: u64) -> Self {
        self.owners
            .insert(GuildId::new(guild_id), UserId::new(owner_id));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuildDirectory for FakeDirectory {
    fn guild_ids(&self) -> Vec<GuildId> {
        self.guild_ids.clone()
    }

    fn cached_guild(&self, guild_id: GuildId) -> Option<GuildRecord> {
        self.cached.get(&guild_id).cloned()
    }

    async fn refresh_guild(&self, guild_id: GuildId) -> Result<GuildRecord, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("refresh:{}", guild_id));
        self.refreshed
            .get(&guild_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown guild {}", guild_id)))
    }

    async fn fetch_owner_id(&self, guild_id: GuildId) -> Result<UserId, AppError> {
        self.calls.lock().unwrap().push(format!("owner:{}", guild_id));
        self.owners
            .get(&guild_id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Unknown owner for {}", guild_id)))
    }
}

/// Record with every field populated except the owner.
pub fn ownerless_record(guild_id: u64, name: &str) -> GuildRecord {
    GuildRecord {
        name: Some(name.to_string()),
        member_count: Some(42),
        large: Some(false),
        preferred_locale: Some("en-US".to_string()),
        verification_level: Some(1),
        nsfw_level: Some(0),
        premium_tier: Some(2),
        premium_subscription_count: Some(7),
        icon_url: Some(format!(
            "https://cdn.discordapp.com/icons/{}/abc.png?size=256",
            guild_id
        )),
        ..GuildRecord::new(GuildId::new(guild_id))
    }
}

/// Record as a refresh would return it, owner included.
pub fn owned_record(guild_id: u64, name: &str, owner_id: u64) -> GuildRecord {
    GuildRecord {
        owner_id: Some(owner_id.to_string()),
        ..ownerless_record(guild_id, name)
    }
}
