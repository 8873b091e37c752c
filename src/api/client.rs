use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{HoleQuery, RemoteLeaderboardRow, ScoringApi};
use crate::error::CoreError;
use crate::model::{Course, HoleScore, HoleUpdate, Player, Tournament, TournamentId};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// `ScoringApi` over HTTP with reqwest.
#[derive(Clone, Debug)]
pub struct HttpScoringApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpScoringApi {
    /// # Errors
    ///
    /// Returns an error if the base url is empty or the HTTP client cannot be built.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CoreError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CoreError::Config("api base url is empty".into()));
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CoreError> {
        let url = self.url(path);
        tracing::info!(%url, "fetching");
        let request = self.authorize(self.client.get(&url).query(query));
        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ScoringApi for HttpScoringApi {
    async fn get_tournament(&self, tournament_id: &TournamentId) -> Result<Tournament, CoreError> {
        self.get_json(&format!("v1/tournament/{tournament_id}"), &[])
            .await
    }

    async fn get_course(&self, tournament_id: &TournamentId) -> Result<Course, CoreError> {
        self.get_json(&format!("v1/course/{tournament_id}"), &[]).await
    }

    async fn get_players(&self, tournament_id: &TournamentId) -> Result<Vec<Player>, CoreError> {
        self.get_json("v1/players", &[("tournamentId", tournament_id.as_str())])
            .await
    }

    async fn get_holes(&self, query: &HoleQuery) -> Result<Vec<HoleScore>, CoreError> {
        let (key, value) = query.query_pair();
        self.get_json("v1/holes", &[(key, value)]).await
    }

    async fn get_tournament_holes(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<HoleScore>, CoreError> {
        self.get_json(&format!("v1/tournament/{tournament_id}/holes"), &[])
            .await
    }

    async fn get_leaderboard(
        &self,
        tournament_id: &TournamentId,
        individuals: bool,
    ) -> Result<Vec<RemoteLeaderboardRow>, CoreError> {
        let individuals = if individuals { "true" } else { "false" };
        self.get_json(
            &format!("v1/tournament/{tournament_id}/leaderboard"),
            &[("individuals", individuals)],
        )
        .await
    }

    async fn update_holes(&self, updates: &[HoleUpdate]) -> Result<(), CoreError> {
        let url = self.url("v1/holes");
        tracing::info!(%url, count = updates.len(), "updating hole scores");
        self.authorize(self.client.put(&url).json(updates))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
