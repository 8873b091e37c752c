use crate::error::CoreError;
use crate::model::{Player, Team, TeamId, TournamentId};

fn player_label(player: &Player) -> String {
    match player.handicap {
        Some(handicap) => format!("{} ({handicap})", player.name),
        None => player.name.clone(),
    }
}

/// Splits players into teams of `team_size` balanced by handicap: players
/// are sorted by handicap and dealt out snake-draft style (1, 2, .., n,
/// n, .., 2, 1, ..). Players without a handicap are dealt last.
///
/// # Errors
///
/// Returns an error if `team_size` is zero or does not divide the player count.
pub fn generate_teams(
    tournament_id: &TournamentId,
    players: &[Player],
    team_size: usize,
) -> Result<Vec<Team>, CoreError> {
    if team_size == 0 {
        return Err(CoreError::Other("team size must be at least 1".into()));
    }
    if players.is_empty() || players.len() % team_size != 0 {
        return Err(CoreError::Other(format!(
            "player count ({}) must be divisible by team size ({team_size})",
            players.len()
        )));
    }

    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| match (a.handicap, b.handicap) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });

    let team_count = players.len() / team_size;
    let mut rosters: Vec<Vec<Player>> = vec![Vec::with_capacity(team_size); team_count];
    for (i, player) in sorted.into_iter().enumerate() {
        let lap = i / team_count;
        let offset = i % team_count;
        let index = if lap % 2 == 0 {
            offset
        } else {
            team_count - 1 - offset
        };
        rosters[index].push(player.clone());
    }

    Ok(rosters
        .into_iter()
        .enumerate()
        .map(|(n, roster)| {
            let id = TeamId::new(format!("{tournament_id}-team-{}", n + 1));
            let name = roster
                .iter()
                .map(player_label)
                .collect::<Vec<_>>()
                .join(" + ");
            let players = roster
                .into_iter()
                .map(|mut p| {
                    p.team_id = Some(id.clone());
                    p
                })
                .collect();
            Team {
                id,
                name,
                display_name: None,
                tournament_id: tournament_id.clone(),
                started: false,
                finished: false,
                players,
            }
        })
        .collect())
}
