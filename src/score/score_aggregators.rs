use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{AggregateRow, HoleScore, PlayerId, RowId, TeamId, Thru};

/// How a team's players combine into one team score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TeamScoring {
    /// Every scored hole of every player counts.
    #[default]
    Aggregate,
    /// Per hole, only the player with the lowest gross score counts.
    BestBall,
}

type HolesByNumber<'a> = BTreeMap<u8, &'a HoleScore>;
type TeamHoles<'a> = BTreeMap<u8, BTreeMap<PlayerId, &'a HoleScore>>;

/// Drops records outside 1..=18 and logs them.
fn valid_holes(holes: &[HoleScore]) -> impl Iterator<Item = &HoleScore> {
    holes.iter().filter(|hole| {
        let ok = hole.is_valid();
        if !ok {
            tracing::warn!(
                player_id = %hole.player_id,
                number = hole.number,
                "ignoring hole record with an out of range hole number"
            );
        }
        ok
    })
}

fn resolve_course_par<'a>(
    course_par: Option<i32>,
    holes: impl Iterator<Item = &'a HoleScore> + Clone,
) -> i32 {
    course_par
        .or_else(|| holes.clone().find_map(|h| h.course_par))
        .unwrap_or_else(|| {
            let pars: BTreeMap<u8, i32> = holes.map(|h| (h.number, h.par)).collect();
            pars.values().sum()
        })
}

/// One row per player. Duplicate records for the same hole keep the first.
#[must_use]
pub fn group_by_player(holes: &[HoleScore], course_par: Option<i32>) -> Vec<AggregateRow> {
    let mut by_player: BTreeMap<PlayerId, HolesByNumber<'_>> = BTreeMap::new();
    for hole in valid_holes(holes) {
        by_player
            .entry(hole.player_id.clone())
            .or_default()
            .entry(hole.number)
            .or_insert(hole);
    }

    by_player
        .into_iter()
        .map(|(player_id, holes)| {
            let name = holes
                .values()
                .map(|h| h.player_name.as_str())
                .find(|n| !n.is_empty())
                .unwrap_or(player_id.as_str())
                .to_string();
            let scored: Vec<&HoleScore> =
                holes.values().copied().filter(|h| h.is_scored()).collect();

            AggregateRow {
                id: RowId::Player(player_id),
                name,
                gross_score: scored.iter().filter_map(|h| h.gross_to_par()).sum(),
                net_score: scored.iter().filter_map(|h| h.net_to_par()).sum(),
                thru: Thru::from_count(scored.len()),
                course_par: resolve_course_par(course_par, holes.values().copied()),
            }
        })
        .collect()
}

/// Picks the team's ball on a hole: lowest gross, ties to the lower net.
fn best_ball<'a>(players: &BTreeMap<PlayerId, &'a HoleScore>) -> Option<&'a HoleScore> {
    players
        .values()
        .copied()
        .filter(|h| h.is_scored())
        .min_by_key(|h| (h.gross_to_par(), h.net_to_par()))
}

/// One row per team, named after its players.
#[must_use]
pub fn group_by_team(
    holes: &[HoleScore],
    course_par: Option<i32>,
    scoring: TeamScoring,
) -> Vec<AggregateRow> {
    let mut by_team: BTreeMap<TeamId, TeamHoles<'_>> = BTreeMap::new();
    let mut names: BTreeMap<TeamId, BTreeSet<String>> = BTreeMap::new();

    for hole in valid_holes(holes) {
        by_team
            .entry(hole.team_id.clone())
            .or_default()
            .entry(hole.number)
            .or_default()
            .entry(hole.player_id.clone())
            .or_insert(hole);
        if !hole.player_name.is_empty() {
            names
                .entry(hole.team_id.clone())
                .or_default()
                .insert(hole.player_name.clone());
        }
    }

    by_team
        .into_iter()
        .map(|(team_id, team_holes)| {
            let mut gross_score = 0;
            let mut net_score = 0;
            let mut thru = 0;

            for players in team_holes.values() {
                let counted: Vec<&HoleScore> = match scoring {
                    TeamScoring::Aggregate => {
                        players.values().copied().filter(|h| h.is_scored()).collect()
                    }
                    TeamScoring::BestBall => best_ball(players).into_iter().collect(),
                };
                if counted.is_empty() {
                    continue;
                }
                thru += 1;
                gross_score += counted.iter().filter_map(|h| h.gross_to_par()).sum::<i32>();
                net_score += counted.iter().filter_map(|h| h.net_to_par()).sum::<i32>();
            }

            let name = names
                .remove(&team_id)
                .map(|set| set.into_iter().collect::<Vec<_>>().join(", "))
                .unwrap_or_else(|| team_id.to_string());
            let all_records = team_holes.values().flat_map(|p| p.values().copied());

            AggregateRow {
                name,
                gross_score,
                net_score,
                thru: Thru::from_count(thru),
                course_par: resolve_course_par(course_par, all_records),
                id: RowId::Team(team_id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HoleScore, PlayerId, TeamId};

    fn hole(
        player: &str,
        team: &str,
        number: u8,
        par: i32,
        score: Option<u32>,
        strokes: u32,
    ) -> HoleScore {
        HoleScore {
            id: None,
            tournament_id: "t1".into(),
            team_id: TeamId::new(team),
            player_id: PlayerId::new(player),
            player_name: player.to_uppercase(),
            number,
            par,
            handicap: number,
            score,
            stroke_hole: strokes,
            course_par: None,
        }
    }

    #[test]
    fn unscored_holes_are_skipped() {
        let holes = vec![
            hole("a", "t", 1, 4, Some(5), 1),
            hole("a", "t", 2, 3, None, 1),
            hole("a", "t", 3, 5, Some(4), 0),
        ];
        let rows = group_by_player(&holes, Some(72));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gross_score, 0);
        assert_eq!(rows[0].net_score, -1);
        assert_eq!(rows[0].thru, Thru::Holes(2));
        assert_eq!(rows[0].course_par, 72);
        assert_eq!(rows[0].name, "A");
    }

    #[test]
    fn player_with_no_scores_is_not_started() {
        let holes = vec![hole("b", "t", 1, 4, None, 0), hole("b", "t", 2, 4, None, 0)];
        let rows = group_by_player(&holes, None);
        assert_eq!(rows[0].thru, Thru::NotStarted);
        assert_eq!(rows[0].net_score, 0);
        assert_eq!(rows[0].course_par, 8);
    }

    #[test]
    fn out_of_range_holes_are_dropped() {
        let holes = vec![hole("a", "t", 1, 4, Some(4), 0), hole("a", "t", 19, 4, Some(9), 0)];
        let rows = group_by_player(&holes, None);
        assert_eq!(rows[0].gross_score, 0);
        assert_eq!(rows[0].thru, Thru::Holes(1));
    }

    #[test]
    fn best_ball_takes_lowest_gross_then_net() {
        let holes = vec![
            hole("a", "t", 1, 4, Some(5), 1),
            hole("b", "t", 1, 4, Some(5), 0),
            hole("a", "t", 2, 4, Some(6), 0),
            hole("b", "t", 2, 4, None, 0),
        ];
        let rows = group_by_team(&holes, None, TeamScoring::BestBall);
        assert_eq!(rows[0].gross_score, 3);
        assert_eq!(rows[0].net_score, 2);
        assert_eq!(rows[0].thru, Thru::Holes(2));
        assert_eq!(rows[0].name, "A, B");
    }

    #[test]
    fn aggregate_team_counts_every_ball() {
        let holes = vec![
            hole("a", "t", 1, 4, Some(5), 1),
            hole("b", "t", 1, 4, Some(5), 0),
            hole("a", "t", 2, 4, Some(6), 0),
        ];
        let rows = group_by_team(&holes, Some(8), TeamScoring::Aggregate);
        assert_eq!(rows[0].gross_score, 4);
        assert_eq!(rows[0].net_score, 3);
        assert_eq!(rows[0].thru, Thru::Holes(2));
        assert_eq!(rows[0].course_par, 8);
    }
}
