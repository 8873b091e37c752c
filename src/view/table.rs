use crate::model::{
    AggregateRow, HoleOutcome, Leaderboard, MatchPlayResult, RankedLeaderboard, RowId,
};
use crate::view::format::{
    format_final_or_to_par, format_position, format_thru, format_to_par, short_player_name,
};

const NAME_WIDTH: usize = 28;

fn fit(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        format!("{cut}…")
    }
}

/// Team totals add every counted ball against par, so they stay relative
/// to par even once the round is finished.
fn row_score(row: &AggregateRow, score: i32) -> String {
    match row.id {
        RowId::Team(_) => format_to_par(score),
        RowId::Player(_) => format_final_or_to_par(score, row.thru, row.course_par),
    }
}

/// "Ann Lee, Bo Park" becomes "A. Lee, B. Park".
fn short_side_name(name: &str) -> String {
    name.split(", ")
        .map(short_player_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text stroke play table. Rows that have not teed off are listed
/// last with an even score and no thru.
#[must_use]
pub fn render_stroke_play(leaderboard: &RankedLeaderboard) -> String {
    let mut lines = vec![format!(
        "{:<5} {:<width$} {:>6} {:>6} {:>5}",
        "Pos.",
        "Name",
        "Gross",
        "Net",
        "Thru",
        width = NAME_WIDTH
    )];

    for ranked in &leaderboard.started {
        let row = &ranked.row;
        lines.push(format!(
            "{:<5} {:<width$} {:>6} {:>6} {:>5}",
            format_position(Some(ranked.position)),
            fit(&row.name),
            row_score(row, row.gross_score),
            row_score(row, row.net_score),
            format_thru(row.thru),
            width = NAME_WIDTH
        ));
    }
    for row in &leaderboard.not_started {
        lines.push(format!(
            "{:<5} {:<width$} {:>6} {:>6} {:>5}",
            format_position(None),
            fit(&row.name),
            "",
            "E",
            format_thru(row.thru),
            width = NAME_WIDTH
        ));
    }

    lines.join("\n")
}

#[must_use]
pub fn render_match_play(result: Option<&MatchPlayResult>) -> String {
    let Some(result) = result else {
        return String::new();
    };

    let team_a = short_side_name(&result.team_a.name);
    let team_b = short_side_name(&result.team_b.name);
    let mut lines = vec![
        format!(
            "{:<width$} {:>4}",
            fit(&team_a),
            result.team_a.status.to_string(),
            width = NAME_WIDTH
        ),
        format!(
            "{:<width$} {:>4}",
            fit(&team_b),
            result.team_b.status.to_string(),
            width = NAME_WIDTH
        ),
        format!("thru {}", result.thru),
    ];

    for hole in &result.holes {
        let winner = match hole.outcome {
            HoleOutcome::TeamA => team_a.as_str(),
            HoleOutcome::TeamB => team_b.as_str(),
            HoleOutcome::Halved => "halved",
        };
        let note = if hole.counted { "" } else { " (not counted)" };
        lines.push(format!(
            "  {:>2}: {} v {} {winner}{note}",
            hole.number, hole.team_a_net, hole.team_b_net
        ));
    }

    lines.join("\n")
}

#[must_use]
pub fn render_leaderboard(leaderboard: &Leaderboard) -> String {
    match leaderboard {
        Leaderboard::StrokePlay(ranked) => render_stroke_play(ranked),
        Leaderboard::MatchPlay { result } => render_match_play(result.as_ref()),
    }
}
