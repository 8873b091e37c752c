use serde::{Deserialize, Serialize};

use crate::api::ScoringApi;
use crate::cache::{self, SnapshotCache};
use crate::error::CoreError;
use crate::model::{
    Course, HoleScore, HoleUpdate, Leaderboard, Player, Team, Tournament, TournamentFormat,
    TournamentId,
};
use crate::score::handicap::{StrokePolicy, apply_stroke_holes};
use crate::score::match_play::{MatchPlayOptions, resolve_match};
use crate::score::score_aggregators::{TeamScoring, group_by_player, group_by_team};
use crate::score::sort_utils::rank_rows;

/// The fetched inputs of one leaderboard computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    pub course: Course,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub holes: Vec<HoleScore>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardOptions {
    /// Rank players instead of teams in stroke play.
    pub individuals: bool,
    pub team_scoring: TeamScoring,
    pub stroke_policy: StrokePolicy,
    pub match_play: MatchPlayOptions,
}

#[derive(Clone, Debug)]
pub struct LeaderboardRequest {
    pub tournament_id: TournamentId,
    pub options: LeaderboardOptions,
    pub use_cache: bool,
    pub cache_max_age: i64,
}

/// Snapshot holes with course par/index merged in and strokes stamped.
#[must_use]
pub fn holes_with_strokes(snapshot: &TournamentSnapshot, policy: StrokePolicy) -> Vec<HoleScore> {
    let mut holes = snapshot.holes.clone();
    apply_stroke_holes(
        &mut holes,
        &snapshot.players,
        &snapshot.course,
        &snapshot.tournament,
        policy,
    );
    holes
}

/// Recomputes the leaderboard for the tournament's format.
#[must_use]
pub fn build_leaderboard(
    snapshot: &TournamentSnapshot,
    options: &LeaderboardOptions,
) -> Leaderboard {
    let holes = holes_with_strokes(snapshot, options.stroke_policy);
    let format = snapshot.tournament.format();
    tracing::debug!(
        tournament_id = %snapshot.tournament.id,
        %format,
        holes = holes.len(),
        "building leaderboard"
    );

    match format {
        TournamentFormat::StrokePlay => {
            let course = &snapshot.course;
            let course_par =
                (course.par.is_some() || !course.holes.is_empty()).then(|| course.total_par());
            let rows = if options.individuals {
                group_by_player(&holes, course_par)
            } else {
                group_by_team(&holes, course_par, options.team_scoring)
            };
            Leaderboard::StrokePlay(rank_rows(&rows))
        }
        TournamentFormat::MatchPlay => Leaderboard::MatchPlay {
            result: resolve_match(&holes, options.match_play),
        },
    }
}

/// Fetches tournament, course, players and holes concurrently.
///
/// # Errors
/// Returns an error if any of the fetches fails.
pub async fn load_snapshot(
    api: &dyn ScoringApi,
    tournament_id: &TournamentId,
) -> Result<TournamentSnapshot, CoreError> {
    let (tournament, course, players, holes) = futures::try_join!(
        api.get_tournament(tournament_id),
        api.get_course(tournament_id),
        api.get_players(tournament_id),
        api.get_tournament_holes(tournament_id),
    )?;
    if !course.has_valid_hole_indices() {
        tracing::warn!(
            course_id = %course.id,
            "course hole handicaps are not a permutation of 1..=n"
        );
    }
    Ok(TournamentSnapshot {
        tournament,
        course,
        players,
        holes,
    })
}

/// Snapshot from cache when fresh, otherwise from the API. A failed fetch
/// falls back to whatever is cached.
///
/// # Errors
/// Returns an error if the fetch fails and nothing is cached.
pub async fn load_snapshot_cached(
    api: &dyn ScoringApi,
    cache: &SnapshotCache,
    request: &LeaderboardRequest,
) -> Result<TournamentSnapshot, CoreError> {
    if request.use_cache {
        if let Some(snapshot) =
            cache::get_fresh(cache, &request.tournament_id, request.cache_max_age).await
        {
            tracing::debug!(tournament_id = %request.tournament_id, "snapshot cache hit");
            return Ok(snapshot);
        }
    }

    match load_snapshot(api, &request.tournament_id).await {
        Ok(snapshot) => {
            cache::store(cache, snapshot.clone()).await;
            Ok(snapshot)
        }
        Err(err) => match cache::get_any(cache, &request.tournament_id).await {
            Some(stale) => {
                tracing::warn!(
                    error = %err,
                    cached_time = %stale.cached_time,
                    "fetch failed, serving stale snapshot"
                );
                Ok(stale.snapshot)
            }
            None => Err(err),
        },
    }
}

/// Load (or reuse) a snapshot and compute the leaderboard.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded.
pub async fn load_leaderboard(
    api: &dyn ScoringApi,
    cache: &SnapshotCache,
    request: &LeaderboardRequest,
) -> Result<Leaderboard, CoreError> {
    let snapshot = load_snapshot_cached(api, cache, request).await?;
    Ok(build_leaderboard(&snapshot, &request.options))
}

/// Sends score updates for a team and drops the cached snapshot so the
/// next refresh sees them.
///
/// # Errors
/// Returns an error if the team has not started, its round is finished, or
/// the update fails.
pub async fn record_scores(
    api: &dyn ScoringApi,
    cache: &SnapshotCache,
    team: &Team,
    updates: Vec<HoleUpdate>,
) -> Result<usize, CoreError> {
    if !team.started {
        return Err(CoreError::Other(format!(
            "team {} has not started, scores cannot be recorded yet",
            team.id
        )));
    }
    if team.finished {
        return Err(CoreError::Other(format!(
            "team {} has finished, scores are locked",
            team.id
        )));
    }
    let updates: Vec<HoleUpdate> = updates.into_iter().filter(|u| !u.is_empty()).collect();
    if updates.is_empty() {
        return Ok(0);
    }
    api.update_holes(&updates).await?;
    cache::invalidate(cache, &team.tournament_id).await;
    Ok(updates.len())
}
