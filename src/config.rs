use serenity::all::ChannelId;

use crate::Error;

/// Process configuration, read from the environment once at startup.
///
/// Owned by the entry point and injected into the framework data; nothing
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub log_channel: ChannelId,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(
            std::env::var("DISCORD_BOT_TOKEN").ok(),
            std::env::var("LOG_CHANNEL").ok(),
        )
    }

    fn from_vars(token: Option<String>, log_channel: Option<String>) -> Result<Self, Error> {
        let discord_token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err("DISCORD_BOT_TOKEN is not set".into()),
        };

        let log_channel = log_channel.ok_or("LOG_CHANNEL is not set")?;
        let log_channel: u64 = log_channel
            .trim()
            .parse()
            .map_err(|_| format!("LOG_CHANNEL is not a valid channel id: {}", log_channel))?;

        // ChannelId requires a non-zero id
        if log_channel == 0 {
            return Err("LOG_CHANNEL must be a non-zero channel id".into());
        }

        Ok(Self {
            discord_token,
            log_channel: ChannelId::new(log_channel),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_vars_produce_config() {
        let config = Config::from_vars(
            Some("token".to_string()),
            Some("1147962239618383873".to_string()),
        )
        .unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.log_channel.get(), 1147962239618383873);
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(Config::from_vars(None, Some("123".to_string())).is_err());
        assert!(Config::from_vars(Some(String::new()), Some("123".to_string())).is_err());
    }

    #[test]
    fn missing_log_channel_is_an_error() {
        assert!(Config::from_vars(Some("token".to_string()), None).is_err());
    }

    #[test]
    fn non_numeric_log_channel_is_an_error() {
        for bad in ["general", "12x4", "", "-5", "0"] {
            assert!(
                Config::from_vars(Some("token".to_string()), Some(bad.to_string())).is_err(),
                "accepted {:?}",
                bad
            );
        }
    }
}
