use meleetools_core::types::{Envelope, Match, Player, Standing, Tournament, TournamentBody};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::prelude::Error;

/// Create an authenticated HTTP client with Basic Auth headers
pub fn create_authenticated_client(config: &Config) -> Result<reqwest::Client, Error> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

    let auth_string = format!("{}:{}", config.client_id, config.client_secret);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut auth_value = HeaderValue::from_str(&format!("Basic {auth_encoded}"))
        .map_err(|e| Error::InvalidHeader(e.to_string()))?;
    auth_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))
}

/// Path for a tournament-scoped endpoint
fn endpoint(prefix: &str, tournament_id: &str) -> String {
    format!("{prefix}/{}", urlencoding::encode(tournament_id))
}

/// Read-only client for the Melee.gg API
#[derive(Debug, Clone)]
pub struct MeleeClient {
    http: reqwest::Client,
    base_url: String,
}

impl MeleeClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            http: create_authenticated_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` and decode the JSON body. Any status other than 200 is an error.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(Error::Transport {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub async fn participants(&self, tournament_id: &str) -> Result<Vec<Player>, Error> {
        let envelope: Envelope<Vec<Player>> = self
            .fetch(&endpoint("/api/player/list", tournament_id))
            .await?;
        Ok(envelope.into_content())
    }

    pub async fn current_matches(&self, tournament_id: &str) -> Result<Vec<Match>, Error> {
        let envelope: Envelope<Vec<Match>> = self
            .fetch(&endpoint("/api/match/list/current", tournament_id))
            .await?;
        Ok(envelope.into_content())
    }

    pub async fn tournament(&self, tournament_id: &str) -> Result<Tournament, Error> {
        let body: TournamentBody = self
            .fetch(&endpoint("/api/tournament", tournament_id))
            .await?;
        Ok(body.into_tournament())
    }

    pub async fn current_standings(&self, tournament_id: &str) -> Result<Vec<Standing>, Error> {
        let envelope: Envelope<Vec<Standing>> = self
            .fetch(&endpoint("/api/standing/list/current", tournament_id))
            .await?;
        Ok(envelope.into_content())
    }
}
