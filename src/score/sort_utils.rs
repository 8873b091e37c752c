use std::cmp::Reverse;

use crate::model::{AggregateRow, Position, RankedLeaderboard, RankedRow};

fn leaderboard_order(row: &AggregateRow) -> (i32, Reverse<u8>, &str, String) {
    (
        row.net_score,
        Reverse(row.thru.count()),
        row.name.as_str(),
        row.id.to_string(),
    )
}

/// Ranks rows by net score. Rows sharing a net score share a place, and the
/// next group takes the next place ("T1, T1, 2"). Rows that have not
/// started are kept apart, sorted by name.
#[must_use]
pub fn rank_rows(rows: &[AggregateRow]) -> RankedLeaderboard {
    let (mut started, mut not_started): (Vec<AggregateRow>, Vec<AggregateRow>) =
        rows.iter().cloned().partition(|r| r.thru.is_started());

    started.sort_by(|a, b| leaderboard_order(a).cmp(&leaderboard_order(b)));
    not_started.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let mut ranked = Vec::with_capacity(started.len());
    for (group_index, group) in started.chunk_by(|a, b| a.net_score == b.net_score).enumerate() {
        let position = Position {
            place: group_index + 1,
            tied: group.len() > 1,
        };
        ranked.extend(group.iter().cloned().map(|row| RankedRow { position, row }));
    }

    RankedLeaderboard {
        started: ranked,
        not_started,
    }
}

/// Ranks an already ranked leaderboard again; the result is unchanged.
#[must_use]
pub fn rerank(leaderboard: &RankedLeaderboard) -> RankedLeaderboard {
    let rows: Vec<AggregateRow> = leaderboard
        .started
        .iter()
        .map(|r| r.row.clone())
        .chain(leaderboard.not_started.iter().cloned())
        .collect();
    rank_rows(&rows)
}
