use serenity::all::{ChannelId, GuildId};

use crate::error::{config::ConfigError, AppError};

/// Runtime configuration, loaded from the environment at startup.
#[derive(Clone)]
pub struct Config {
    /// Bot token used to authenticate against the Discord gateway.
    pub discord_bot_token: String,
    /// The guild the `/moveusers` command is registered on.
    pub guild_id: GuildId,
    /// Voice channels whose members are offered in the selection form.
    pub voice_channel_ids: Vec<ChannelId>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let guild_id = std::env::var("DISCORD_GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_GUILD_ID".to_string()))?;
        let guild_id = parse_snowflake("DISCORD_GUILD_ID", &guild_id)?;

        let voice_channels = std::env::var("VOICE_CHANNELS")
            .map_err(|_| ConfigError::MissingEnvVar("VOICE_CHANNELS".to_string()))?;
        let voice_channel_ids = parse_channel_list(&voice_channels)?;

        Ok(Self {
            discord_bot_token,
            guild_id: GuildId::new(guild_id),
            voice_channel_ids,
        })
    }
}

/// Parses the comma-separated `VOICE_CHANNELS` value into channel ids.
///
/// Whitespace around each entry is tolerated. An empty value, an empty entry,
/// or a non-numeric entry is a configuration error.
///
/// # Arguments
/// - `raw` - The raw environment variable value
///
/// # Returns
/// - `Ok(Vec<ChannelId>)` - Parsed channel ids in configuration order
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An entry failed to parse
pub fn parse_channel_list(raw: &str) -> Result<Vec<ChannelId>, AppError> {
    let mut ids = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        let id = parse_snowflake("VOICE_CHANNELS", entry)?;
        ids.push(ChannelId::new(id));
    }

    Ok(ids)
}

/// Parses a single non-zero snowflake id from an environment value.
fn parse_snowflake(name: &str, value: &str) -> Result<u64, AppError> {
    let id = value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::config::ConfigError;

    /// Tests the list parser tolerates whitespace around entries.
    ///
    /// Expected: all ids parsed in configuration order
    #[test]
    fn parses_comma_separated_channel_list() {
        let ids = parse_channel_list("2001, 2002 ,2003").unwrap();

        assert_eq!(
            ids,
            vec![
                ChannelId::new(2001),
                ChannelId::new(2002),
                ChannelId::new(2003)
            ]
        );
    }

    /// Tests an empty value is a configuration error, not an empty list.
    ///
    /// A bot with no configured channels renders a useless form; fail fast
    /// at startup instead.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar)
    #[test]
    fn rejects_empty_channel_list() {
        let err = parse_channel_list("").unwrap_err();

        assert!(matches!(
            err,
            AppError::ConfigErr(ConfigError::InvalidEnvVar { .. })
        ));
    }

    /// Tests non-numeric and zero entries are rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming the variable
    #[test]
    fn rejects_malformed_channel_entries() {
        for raw in ["2001,abc", "2001,,2002", "0"] {
            let err = parse_channel_list(raw).unwrap_err();
            match err {
                AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. }) => {
                    assert_eq!(name, "VOICE_CHANNELS");
                }
                other => panic!("Expected InvalidEnvVar, got {other:?}"),
            }
        }
    }
}
