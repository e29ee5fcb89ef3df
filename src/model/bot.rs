use serde::Serialize;
use serenity::all::User;

use crate::util::{
    discord::{cdn_image_url, snowflake_created_at},
    slug::DEFAULT_SLUG,
};

const AVATAR_SIZE: u16 = 256;

/// Identity of the authenticated bot account.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotIdentity {
    pub id: Option<String>,
    pub username: Option<String>,
    /// Global display name, falling back to the username like Discord clients do.
    pub display_name: Option<String>,
    pub tag: Option<String>,
    pub created_at: Option<String>,
    pub verified: Option<bool>,
    #[serde(rename = "avatarURL")]
    pub avatar_url: Option<String>,
}

impl BotIdentity {
    /// Converts the current user reported by the gateway.
    ///
    /// Without a custom avatar the URL points at Discord's default avatar.
    pub fn from_user(user: &User) -> Self {
        let id = user.id.get();
        let avatar_url = match &user.avatar {
            Some(hash) => cdn_image_url("avatars", id, &hash.to_string(), AVATAR_SIZE),
            None => user.default_avatar_url(),
        };

        Self {
            id: Some(id.to_string()),
            username: Some(user.name.clone()),
            display_name: Some(user.global_name.clone().unwrap_or_else(|| user.name.clone())),
            tag: Some(user.tag()),
            created_at: snowflake_created_at(id),
            verified: user.verified,
            avatar_url: Some(avatar_url),
        }
    }

    /// Name used for the output file and the console summary.
    ///
    /// Display name first, then username, then `"bot"`; blank names are skipped.
    pub fn name(&self) -> &str {
        [self.display_name.as_deref(), self.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_SLUG)
    }
}
