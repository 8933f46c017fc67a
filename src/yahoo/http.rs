//! Minimal Yahoo Fantasy Sports API client.
//!
//! Issues authenticated GET requests for game resources and returns them
//! flattened into the mapping form of the typed models, ready to be handed to
//! [`YahooData::save_async`] as a producer.
//! The access token is taken as-is; obtaining and refreshing it is up to the
//! caller.
//!
//! [`YahooData::save_async`]: crate::storage::YahooData::save_async

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    yahoo::{
        content::{game_resource_from_response, games_from_response},
        ids::GameKey,
        records::{GameCode, GameResource},
    },
    Result, YahooError, ACCESS_TOKEN_ENV_VAR, API_BASE_URL_ENV_VAR,
};


/// Base path for the Yahoo Fantasy Sports v2 API.
pub const YAHOO_API_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl YahooClient {
    pub fn new(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Build a client from `YAHOO_ACCESS_TOKEN` and optional `YAHOO_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var(ACCESS_TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| YahooError::MissingConfig {
                env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
            })?;
        let base_url = std::env::var(API_BASE_URL_ENV_VAR)
            .unwrap_or_else(|_| YAHOO_API_BASE_URL.to_string());

        Ok(Self::new(access_token.trim(), base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.access_token))?,
        );
        Ok(h)
    }

    async fn get_json(&self, resource_path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, resource_path);
        debug!(%url, "querying Yahoo Fantasy API");

        let res = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// Every game (one per season) of a sport.
    pub async fn get_games(&self, code: GameCode) -> Result<Value> {
        let body = self.get_json(&format!("games;game_codes={}", code)).await?;
        games_from_response(body)
    }

    /// A resource of the current season's game of a sport.
    pub async fn get_current_game(
        &self,
        code: GameCode,
        resource: GameResource,
    ) -> Result<Value> {
        let body = self
            .get_json(&format!("game/{}{}", code, resource.api_path()))
            .await?;
        game_resource_from_response(body, resource)
    }

    pub async fn get_game_resource(
        &self,
        game_key: &GameKey,
        resource: GameResource,
    ) -> Result<Value> {
        let body = self
            .get_json(&format!("game/{}{}", game_key, resource.api_path()))
            .await?;
        game_resource_from_response(body, resource)
    }
}
