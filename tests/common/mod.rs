#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use live_golf_scoring::api::{HoleQuery, RemoteLeaderboardRow, ScoringApi};
use live_golf_scoring::error::CoreError;
use live_golf_scoring::model::{
    Course, HoleScore, HoleUpdate, Player, RowId, Tournament, TournamentId,
};
use live_golf_scoring::score::{
    StrokePolicy, TeamScoring, TournamentSnapshot, group_by_player, group_by_team,
    holes_with_strokes,
};

pub fn course() -> Course {
    serde_json::from_str(include_str!("../fixtures/course.json")).unwrap()
}

pub fn players() -> Vec<Player> {
    serde_json::from_str(include_str!("../fixtures/players.json")).unwrap()
}

pub fn stroke_play_snapshot() -> TournamentSnapshot {
    TournamentSnapshot {
        tournament: serde_json::from_str(include_str!("../fixtures/tournament_stroke.json"))
            .unwrap(),
        course: course(),
        players: players(),
        holes: serde_json::from_str(include_str!("../fixtures/holes_stroke.json")).unwrap(),
    }
}

pub fn match_play_snapshot() -> TournamentSnapshot {
    TournamentSnapshot {
        tournament: serde_json::from_str(include_str!("../fixtures/tournament_match.json"))
            .unwrap(),
        course: course(),
        players: players(),
        holes: serde_json::from_str(include_str!("../fixtures/holes_match.json")).unwrap(),
    }
}

pub fn set_score(holes: &mut [HoleScore], player_id: &str, number: u8, score: Option<u32>) {
    let hole = holes
        .iter_mut()
        .find(|h| h.player_id.as_str() == player_id && h.number == number)
        .unwrap();
    hole.score = score;
}

/// In-memory scoring API serving one snapshot.
pub struct FakeApi {
    pub snapshot: Mutex<TournamentSnapshot>,
    pub offline: AtomicBool,
    pub tournament_fetches: AtomicUsize,
    pub updates: Mutex<Vec<HoleUpdate>>,
}

impl FakeApi {
    pub fn new(snapshot: TournamentSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            offline: AtomicBool::new(false),
            tournament_fetches: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> usize {
        self.tournament_fetches.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), CoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CoreError::Network("connection refused".into()));
        }
        Ok(())
    }

    fn snapshot_for(&self, tournament_id: &TournamentId) -> Result<TournamentSnapshot, CoreError> {
        self.check_online()?;
        let snapshot = self.snapshot.lock().unwrap().clone();
        if snapshot.tournament.id != *tournament_id {
            return Err(CoreError::NotFound(format!("tournament {tournament_id}")));
        }
        Ok(snapshot)
    }
}

#[async_trait]
impl ScoringApi for FakeApi {
    async fn get_tournament(&self, tournament_id: &TournamentId) -> Result<Tournament, CoreError> {
        self.tournament_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot_for(tournament_id)?.tournament)
    }

    async fn get_course(&self, tournament_id: &TournamentId) -> Result<Course, CoreError> {
        Ok(self.snapshot_for(tournament_id)?.course)
    }

    async fn get_players(&self, tournament_id: &TournamentId) -> Result<Vec<Player>, CoreError> {
        Ok(self.snapshot_for(tournament_id)?.players)
    }

    async fn get_holes(&self, query: &HoleQuery) -> Result<Vec<HoleScore>, CoreError> {
        self.check_online()?;
        let holes = self.snapshot.lock().unwrap().holes.clone();
        Ok(holes
            .into_iter()
            .filter(|h| match query {
                HoleQuery::Player(id) => h.player_id == *id,
                HoleQuery::Team(id) => h.team_id == *id,
                HoleQuery::Tournament(id) => h.tournament_id == *id,
            })
            .collect())
    }

    async fn get_leaderboard(
        &self,
        tournament_id: &TournamentId,
        individuals: bool,
    ) -> Result<Vec<RemoteLeaderboardRow>, CoreError> {
        let snapshot = self.snapshot_for(tournament_id)?;
        let holes = holes_with_strokes(&snapshot, StrokePolicy::MultiLap);
        let course_par = Some(snapshot.course.total_par());
        let rows = if individuals {
            group_by_player(&holes, course_par)
        } else {
            group_by_team(&holes, course_par, TeamScoring::Aggregate)
        };
        Ok(rows
            .into_iter()
            .map(|row| RemoteLeaderboardRow {
                team_id: match row.id {
                    RowId::Team(id) => id.to_string(),
                    RowId::Player(id) => id.to_string(),
                },
                team_name: row.name,
                gross_score: row.gross_score,
                net_score: row.net_score,
                thru: row.thru.count(),
                course_par: row.course_par,
            })
            .collect())
    }

    async fn update_holes(&self, updates: &[HoleUpdate]) -> Result<(), CoreError> {
        self.check_online()?;
        self.updates.lock().unwrap().extend_from_slice(updates);
        Ok(())
    }
}
