mod common;

use live_golf_scoring::model::{Leaderboard, RankedLeaderboard, Thru};
use live_golf_scoring::score::{
    LeaderboardOptions, StrokePolicy, TeamScoring, build_leaderboard, group_by_player,
    holes_with_strokes, rank_rows, rerank,
};
use live_golf_scoring::view::render_stroke_play;

fn stroke_play(leaderboard: Leaderboard) -> RankedLeaderboard {
    match leaderboard {
        Leaderboard::StrokePlay(ranked) => ranked,
        Leaderboard::MatchPlay { .. } => panic!("expected a stroke play leaderboard"),
    }
}

fn summary(ranked: &RankedLeaderboard) -> Vec<String> {
    ranked
        .started
        .iter()
        .map(|r| {
            format!(
                "{} {} {}/{} thru {}",
                r.position, r.row.name, r.row.gross_score, r.row.net_score, r.row.thru
            )
        })
        .collect()
}

#[test]
fn test2_individual_leaderboard() {
    let snapshot = common::stroke_play_snapshot();
    let options = LeaderboardOptions {
        individuals: true,
        ..LeaderboardOptions::default()
    };
    let ranked = stroke_play(build_leaderboard(&snapshot, &options));

    assert_eq!(
        summary(&ranked),
        vec![
            "1 Ann Lee 1/-1 thru 3",
            "2 Bo Park 1/0 thru 2",
            "3 Cy Diaz 5/1 thru 3",
        ]
    );
    assert_eq!(ranked.not_started.len(), 1);
    assert_eq!(ranked.not_started[0].name, "Di Ross");
    assert_eq!(ranked.not_started[0].thru, Thru::NotStarted);
    assert!(ranked.started.iter().all(|r| r.row.course_par == 72));
}

#[test]
fn test2_ties_share_a_place() {
    let mut snapshot = common::stroke_play_snapshot();
    common::set_score(&mut snapshot.holes, "p4", 1, Some(4));
    common::set_score(&mut snapshot.holes, "p4", 2, Some(4));
    common::set_score(&mut snapshot.holes, "p4", 3, Some(3));

    let options = LeaderboardOptions {
        individuals: true,
        ..LeaderboardOptions::default()
    };
    let ranked = stroke_play(build_leaderboard(&snapshot, &options));
    let places: Vec<String> = ranked
        .started
        .iter()
        .map(|r| format!("{} {}", r.position, r.row.name))
        .collect();

    // Di has played more holes than Bo so is listed first in the tie
    assert_eq!(
        places,
        vec!["1 Ann Lee", "T2 Di Ross", "T2 Bo Park", "3 Cy Diaz"]
    );
    assert!(ranked.not_started.is_empty());
    assert_eq!(rerank(&ranked), ranked);
}

#[test]
fn test2_team_aggregate_and_best_ball() {
    let snapshot = common::stroke_play_snapshot();

    let aggregate = stroke_play(build_leaderboard(&snapshot, &LeaderboardOptions::default()));
    assert_eq!(
        summary(&aggregate),
        vec![
            "1 Ann Lee, Bo Park 2/-1 thru 3",
            "2 Cy Diaz, Di Ross 5/1 thru 3",
        ]
    );

    let options = LeaderboardOptions {
        team_scoring: TeamScoring::BestBall,
        ..LeaderboardOptions::default()
    };
    let best_ball = stroke_play(build_leaderboard(&snapshot, &options));
    assert_eq!(
        summary(&best_ball),
        vec![
            "1 Ann Lee, Bo Park 0/-1 thru 3",
            "2 Cy Diaz, Di Ross 5/1 thru 3",
        ]
    );
}

#[test]
fn test2_input_order_does_not_change_ranking() {
    let snapshot = common::stroke_play_snapshot();
    let options = LeaderboardOptions {
        individuals: true,
        ..LeaderboardOptions::default()
    };
    let forward = stroke_play(build_leaderboard(&snapshot, &options));

    let mut reversed = snapshot.clone();
    reversed.holes.reverse();
    assert_eq!(stroke_play(build_leaderboard(&reversed, &options)), forward);
}

#[test]
fn test2_net_is_gross_minus_strokes() {
    let snapshot = common::stroke_play_snapshot();
    let holes = holes_with_strokes(&snapshot, StrokePolicy::MultiLap);
    let rows = group_by_player(&holes, Some(72));

    for row in &rows {
        let strokes: i32 = holes
            .iter()
            .filter(|h| h.player_id.to_string() == row.id.to_string() && h.is_scored())
            .map(|h| h.stroke_hole as i32)
            .sum();
        assert_eq!(row.net_score, row.gross_score - strokes, "{}", row.name);
        assert!(row.thru.count() <= 18);
    }

    let ranked = rank_rows(&rows);
    assert_eq!(ranked.started.len() + ranked.not_started.len(), rows.len());
}

#[test]
fn test2_out_of_range_holes_are_ignored() {
    let mut snapshot = common::stroke_play_snapshot();
    let mut stray = snapshot.holes[0].clone();
    stray.number = 19;
    stray.score = Some(1);
    snapshot.holes.push(stray);

    let options = LeaderboardOptions {
        individuals: true,
        ..LeaderboardOptions::default()
    };
    let ranked = stroke_play(build_leaderboard(&snapshot, &options));
    assert_eq!(ranked.started[0].row.thru, Thru::Holes(3));
    assert_eq!(ranked.started[0].row.net_score, -1);
}

#[test]
fn test2_table_shows_positions_and_thru() {
    let snapshot = common::stroke_play_snapshot();
    let options = LeaderboardOptions {
        individuals: true,
        ..LeaderboardOptions::default()
    };
    let ranked = stroke_play(build_leaderboard(&snapshot, &options));
    let table = render_stroke_play(&ranked);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("1 ") && lines[1].contains("Ann Lee") && lines[1].contains("-1"));
    assert!(lines[2].contains("Bo Park") && lines[2].contains(" E ") && lines[2].ends_with('2'));
    assert!(lines[4].contains("Di Ross") && lines[4].ends_with('-'));
}
