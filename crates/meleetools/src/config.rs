use crate::prelude::Error;

/// Default Melee.gg API host
pub const DEFAULT_BASE_URL: &str = "https://melee.gg";

/// Melee.gg configuration, resolved once at startup from CLI flags and
/// environment variables and passed down to the client and commands.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub default_tournament_id: Option<String>,
    pub base_url: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Build the configuration. Both credentials are required.
    pub fn resolve(
        client_id: Option<String>,
        client_secret: Option<String>,
        default_tournament_id: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, Error> {
        let (Some(client_id), Some(client_secret)) =
            (non_empty(client_id), non_empty(client_secret))
        else {
            return Err(Error::MissingConfig(
                "CLIENT_ID and CLIENT_SECRET must be set in the environment or .env file"
                    .to_string(),
            ));
        };

        Ok(Self {
            client_id,
            client_secret,
            default_tournament_id: non_empty(default_tournament_id),
            base_url: non_empty(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Tournament to report on: the explicit argument wins over the default.
    pub fn tournament_id(&self, explicit: Option<String>, command: &str) -> Result<String, Error> {
        non_empty(explicit)
            .or_else(|| self.default_tournament_id.clone())
            .ok_or_else(|| {
                Error::MissingArgument(format!("Tournament ID is required for {command} command"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(default_tournament_id: Option<&str>) -> Config {
        Config::resolve(
            Some("id".to_string()),
            Some("secret".to_string()),
            default_tournament_id.map(String::from),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_requires_both_credentials() {
        let missing_secret = Config::resolve(Some("id".to_string()), None, None, None);
        assert!(matches!(missing_secret, Err(Error::MissingConfig(_))));

        let missing_id = Config::resolve(None, Some("secret".to_string()), None, None);
        assert!(matches!(missing_id, Err(Error::MissingConfig(_))));
    }

    #[test]
    fn test_resolve_treats_empty_values_as_missing() {
        let result = Config::resolve(Some(String::new()), Some("secret".to_string()), None, None);
        assert!(matches!(result, Err(Error::MissingConfig(_))));

        let config = Config::resolve(
            Some("id".to_string()),
            Some("secret".to_string()),
            Some("  ".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(config.default_tournament_id, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_override() {
        let config = Config::resolve(
            Some("id".to_string()),
            Some("secret".to_string()),
            None,
            Some("http://localhost:1234".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_tournament_id_explicit_wins() {
        let config = config(Some("default"));
        assert_eq!(
            config.tournament_id(Some("explicit".to_string()), "pairings").unwrap(),
            "explicit"
        );
        assert_eq!(config.tournament_id(None, "pairings").unwrap(), "default");
    }

    #[test]
    fn test_tournament_id_missing() {
        let err = config(None).tournament_id(None, "standings").unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Tournament ID is required for standings command");
    }
}
