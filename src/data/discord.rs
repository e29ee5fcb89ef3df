use serenity::all::{Context, GuildId, UserId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::{bot::BotIdentity, guild::GuildRecord};
use crate::service::guild::GuildDirectory;

/// Guild directory backed by a live Serenity context.
///
/// Cache reads never hold a cache guard across an await point; records are
/// converted while the guard is held and returned owned.
pub struct DiscordDirectory<'a> {
    ctx: &'a Context,
}

impl<'a> DiscordDirectory<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Identity of the bot account the gateway authenticated as.
    pub fn current_user(&self) -> BotIdentity {
        let user = self.ctx.cache.current_user().clone();
        BotIdentity::from_user(&user)
    }

    pub fn cached_user_count(&self) -> usize {
        self.ctx.cache.user_count()
    }

    /// Channels and active threads across all cached guilds.
    pub fn cached_channel_count(&self) -> usize {
        self.ctx
            .cache
            .guilds()
            .into_iter()
            .filter_map(|guild_id| {
                self.ctx
                    .cache
                    .guild(guild_id)
                    .map(|guild| guild.channels.len() + guild.threads.len())
            })
            .sum()
    }
}

#[async_trait]
impl<'a> GuildDirectory for DiscordDirectory<'a> {
    fn guild_ids(&self) -> Vec<GuildId> {
        self.ctx.cache.guilds()
    }

    fn cached_guild(&self, guild_id: GuildId) -> Option<GuildRecord> {
        self.ctx
            .cache
            .guild(guild_id)
            .map(|guild| GuildRecord::from_guild(&guild))
    }

    async fn refresh_guild(&self, guild_id: GuildId) -> Result<GuildRecord, AppError> {
        let guild = self.ctx.http.get_guild_with_counts(guild_id).await?;

        Ok(GuildRecord::from_partial_guild(&guild))
    }

    /// Resolves the owner through the guild payload and confirms membership.
    async fn fetch_owner_id(&self, guild_id: GuildId) -> Result<UserId, AppError> {
        let guild = self.ctx.http.get_guild(guild_id).await?;
        let owner = guild_id.member(self.ctx, guild.owner_id).await?;

        Ok(owner.user.id)
    }
}
