use crate::model::{Position, Thru};

/// Score relative to par: "E", "+3" or "-2".
#[must_use]
pub fn format_to_par(score: i32) -> String {
    match score {
        0 => "E".to_string(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}

/// Finished rounds show the stroke total, rounds in progress show the
/// score relative to par.
#[must_use]
pub fn format_final_or_to_par(score: i32, thru: Thru, course_par: i32) -> String {
    match thru {
        Thru::Finished => (course_par + score).to_string(),
        _ => format_to_par(score),
    }
}

#[must_use]
pub fn format_thru(thru: Thru) -> String {
    thru.to_string()
}

#[must_use]
pub fn format_position(position: Option<Position>) -> String {
    position.map(|p| p.to_string()).unwrap_or_default()
}

#[must_use]
pub fn short_player_name(player_name: &str) -> String {
    let parts: Vec<&str> = player_name.split_whitespace().collect();

    match (parts.first().and_then(|s| s.chars().next()), parts.len()) {
        (Some(first_initial), n) if n > 1 => {
            let last_name = parts.last().unwrap_or(&"");
            format!("{first_initial}. {last_name}")
        }
        _ => player_name.trim().to_string(),
    }
}
