use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{
    HoleOutcome, HoleResult, HoleScore, MAX_HOLES, MatchPlayResult, MatchSide, MatchStatus,
    PlayerId, TeamId,
};

/// Four-ball: two players a side, four scores settle a hole.
pub const PLAYERS_PER_SIDE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchPlayOptions {
    /// Holes after this one are still resolved and shown but do not move
    /// the match. Set to 17 for the legacy scoring loop.
    pub last_counted_hole: u8,
}

impl Default for MatchPlayOptions {
    fn default() -> Self {
        Self {
            last_counted_hole: MAX_HOLES,
        }
    }
}

/// Resolves a best-ball match between the first two teams found in the
/// records. Returns `None` when fewer than two teams have records.
#[must_use]
pub fn resolve_match(holes: &[HoleScore], options: MatchPlayOptions) -> Option<MatchPlayResult> {
    let mut teams: Vec<&TeamId> = Vec::new();
    for hole in holes {
        if !teams.contains(&&hole.team_id) {
            teams.push(&hole.team_id);
        }
    }

    match teams.as_slice() {
        [] | [_] => {
            tracing::debug!(teams = teams.len(), "not enough teams for match play");
            None
        }
        [team_a, team_b, rest @ ..] => {
            if !rest.is_empty() {
                tracing::warn!(
                    extra_teams = rest.len(),
                    "match play records hold more than two teams, using the first two"
                );
            }
            Some(resolve_match_between(holes, team_a, team_b, options))
        }
    }
}

fn side_name(names: Option<BTreeSet<&str>>, team_id: &TeamId) -> String {
    names
        .filter(|n| !n.is_empty())
        .map(|n| n.into_iter().collect::<Vec<_>>().join(", "))
        .unwrap_or_else(|| team_id.to_string())
}

/// Resolves holes strictly in order from hole 1. The first hole without
/// all four scores ends evaluation, even if later holes are complete.
#[must_use]
pub fn resolve_match_between(
    holes: &[HoleScore],
    team_a: &TeamId,
    team_b: &TeamId,
    options: MatchPlayOptions,
) -> MatchPlayResult {
    let mut by_hole: BTreeMap<u8, BTreeMap<&PlayerId, &HoleScore>> = BTreeMap::new();
    let mut names: BTreeMap<&TeamId, BTreeSet<&str>> = BTreeMap::new();

    for hole in holes {
        if hole.team_id != *team_a && hole.team_id != *team_b {
            continue;
        }
        if !hole.player_name.is_empty() {
            names
                .entry(&hole.team_id)
                .or_default()
                .insert(hole.player_name.as_str());
        }
        if hole.is_valid() && hole.is_scored() {
            by_hole
                .entry(hole.number)
                .or_default()
                .entry(&hole.player_id)
                .or_insert(hole);
        }
    }

    let best_net = |entries: &BTreeMap<&PlayerId, &HoleScore>, team: &TeamId| {
        entries
            .values()
            .filter(|h| h.team_id == *team)
            .filter_map(|h| h.net_strokes())
            .min()
    };

    let mut results = Vec::new();
    let mut differential = 0;
    for number in 1..=MAX_HOLES {
        let Some(entries) = by_hole.get(&number) else {
            break;
        };
        if entries.len() != PLAYERS_PER_SIDE * 2 {
            break;
        }
        let (Some(team_a_net), Some(team_b_net)) =
            (best_net(entries, team_a), best_net(entries, team_b))
        else {
            break;
        };

        let outcome = match team_a_net.cmp(&team_b_net) {
            Ordering::Less => HoleOutcome::TeamA,
            Ordering::Greater => HoleOutcome::TeamB,
            Ordering::Equal => HoleOutcome::Halved,
        };
        let counted = number <= options.last_counted_hole;
        if counted {
            differential += match outcome {
                HoleOutcome::TeamA => 1,
                HoleOutcome::TeamB => -1,
                HoleOutcome::Halved => 0,
            };
        }
        results.push(HoleResult {
            number,
            team_a_net,
            team_b_net,
            outcome,
            counted,
        });
    }

    tracing::debug!(
        team_a = %team_a,
        team_b = %team_b,
        thru = results.len(),
        differential,
        "resolved match"
    );

    MatchPlayResult {
        team_a: MatchSide {
            team_id: team_a.clone(),
            name: side_name(names.remove(team_a), team_a),
            status: MatchStatus::from_differential(differential),
        },
        team_b: MatchSide {
            team_id: team_b.clone(),
            name: side_name(names.remove(team_b), team_b),
            status: MatchStatus::from_differential(-differential),
        },
        differential,
        thru: results.len() as u8,
        holes: results,
    }
}
