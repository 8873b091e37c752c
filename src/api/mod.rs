pub mod client;

pub use client::HttpScoringApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{
    AggregateRow, Course, HoleScore, HoleUpdate, Player, PlayerId, RowId, TeamId, Thru,
    Tournament, TournamentId,
};

/// Which hole records `GET /v1/holes` should return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoleQuery {
    Player(PlayerId),
    Team(TeamId),
    Tournament(TournamentId),
}

impl HoleQuery {
    #[must_use]
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            HoleQuery::Player(id) => ("playerId", id.as_str()),
            HoleQuery::Team(id) => ("teamId", id.as_str()),
            HoleQuery::Tournament(id) => ("tournamentId", id.as_str()),
        }
    }
}

/// Row of a leaderboard the server already aggregated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLeaderboardRow {
    #[serde(default, alias = "id")]
    pub team_id: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub gross_score: i32,
    #[serde(default)]
    pub net_score: i32,
    #[serde(default)]
    pub thru: u8,
    #[serde(default)]
    pub course_par: i32,
}

impl RemoteLeaderboardRow {
    /// Individual leaderboards carry the player in the team fields.
    #[must_use]
    pub fn into_aggregate_row(self, individuals: bool) -> AggregateRow {
        let id = if individuals {
            RowId::Player(PlayerId::new(self.team_id))
        } else {
            RowId::Team(TeamId::new(self.team_id))
        };
        AggregateRow {
            id,
            name: self.team_name,
            gross_score: self.gross_score,
            net_score: self.net_score,
            thru: Thru::from(self.thru),
            course_par: self.course_par,
        }
    }
}

/// The remote scoring API. Everything the scoring core reads or writes
/// goes through here.
#[async_trait]
pub trait ScoringApi: Send + Sync {
    async fn get_tournament(&self, tournament_id: &TournamentId) -> Result<Tournament, CoreError>;

    async fn get_course(&self, tournament_id: &TournamentId) -> Result<Course, CoreError>;

    async fn get_players(&self, tournament_id: &TournamentId) -> Result<Vec<Player>, CoreError>;

    async fn get_holes(&self, query: &HoleQuery) -> Result<Vec<HoleScore>, CoreError>;

    async fn get_tournament_holes(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<HoleScore>, CoreError> {
        self.get_holes(&HoleQuery::Tournament(tournament_id.clone()))
            .await
    }

    async fn get_leaderboard(
        &self,
        tournament_id: &TournamentId,
        individuals: bool,
    ) -> Result<Vec<RemoteLeaderboardRow>, CoreError>;

    async fn update_holes(&self, updates: &[HoleUpdate]) -> Result<(), CoreError>;
}
