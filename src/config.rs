use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
const SNAPSHOT_DIR: &str = "SNAPSHOT_DIR";

/// Directory snapshots are written to when `SNAPSHOT_DIR` is not set.
pub const DEFAULT_SNAPSHOT_DIR: &str = "./bots";

pub struct Config {
    pub discord_bot_token: String,
    pub snapshot_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from an arbitrary variable source.
    ///
    /// The bot token is required and must not be blank. The snapshot directory
    /// falls back to [`DEFAULT_SNAPSHOT_DIR`] when unset or blank.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Usable configuration
    /// - `Err(AppError::ConfigErr)` - Token missing or empty
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup(DISCORD_BOT_TOKEN)
            .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_BOT_TOKEN.to_string()))?
            .trim()
            .to_string();

        if discord_bot_token.is_empty() {
            return Err(ConfigError::EmptyEnvVar(DISCORD_BOT_TOKEN.to_string()).into());
        }

        let snapshot_dir = lookup(SNAPSHOT_DIR)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_DIR.to_string());

        Ok(Self {
            discord_bot_token,
            snapshot_dir: PathBuf::from(snapshot_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == DISCORD_BOT_TOKEN
        ));
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(DISCORD_BOT_TOKEN, "   ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::EmptyEnvVar(_)))
        ));
    }

    #[test]
    fn test_token_is_trimmed_and_dir_defaults() {
        let config = Config::from_lookup(lookup_from(&[(DISCORD_BOT_TOKEN, " abc.def \n")]))
            .expect("config should load");

        assert_eq!(config.discord_bot_token, "abc.def");
        assert_eq!(config.snapshot_dir, PathBuf::from(DEFAULT_SNAPSHOT_DIR));
    }

    #[test]
    fn test_snapshot_dir_override() {
        let config = Config::from_lookup(lookup_from(&[
            (DISCORD_BOT_TOKEN, "token"),
            (SNAPSHOT_DIR, "/tmp/snapshots"),
        ]))
        .expect("config should load");

        assert_eq!(config.snapshot_dir, PathBuf::from("/tmp/snapshots"));
    }
}
