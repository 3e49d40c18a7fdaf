use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_WELCOME_STORE_PATH: &str = "data/welcome.json";
const DEFAULT_COMMAND_PREFIX: &str = "!";

pub struct Config {
    pub discord_bot_token: String,

    pub welcome_store_path: PathBuf,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or blank
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let welcome_store_path = lookup("WELCOME_STORE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WELCOME_STORE_PATH));

        let command_prefix = match lookup("COMMAND_PREFIX") {
            Some(prefix) if prefix.chars().any(char::is_whitespace) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "COMMAND_PREFIX".to_string(),
                    value: prefix,
                }
                .into())
            }
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => DEFAULT_COMMAND_PREFIX.to_string(),
        };

        Ok(Self {
            discord_bot_token,
            welcome_store_path,
            command_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_bot_token, "abc");
        assert_eq!(config.welcome_store_path, PathBuf::from("data/welcome.json"));
        assert_eq!(config.command_prefix, "!");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("WELCOME_STORE_PATH", "/var/lib/greeter/welcome.json"),
            ("COMMAND_PREFIX", "?"),
        ]))
        .unwrap();

        assert_eq!(
            config.welcome_store_path,
            PathBuf::from("/var/lib/greeter/welcome.json")
        );
        assert_eq!(config.command_prefix, "?");
    }

    #[test]
    fn missing_token_is_an_error() {
        for vars in [&[][..], &[("DISCORD_BOT_TOKEN", "  ")][..]] {
            match Config::from_lookup(lookup_from(vars)) {
                Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                    assert_eq!(name, "DISCORD_BOT_TOKEN")
                }
                Err(e) => panic!("Expected MissingEnvVar, got: {:?}", e),
                Ok(_) => panic!("Expected MissingEnvVar, got a config"),
            }
        }
    }

    #[test]
    fn rejects_prefix_with_whitespace() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("COMMAND_PREFIX", "! "),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
