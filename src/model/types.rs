use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::model::hole::{HoleScore, MAX_HOLES};
use crate::model::ids::{CourseId, PlayerId, TeamId, TournamentId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Handicap index; fractional values are allowed.
    #[serde(default)]
    pub handicap: Option<f64>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub tee: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    /// True once every player on the team has a score on all 18 holes.
    #[must_use]
    pub fn is_finished_by(&self, holes: &[HoleScore]) -> bool {
        if self.players.is_empty() {
            return false;
        }
        self.players.iter().all(|player| {
            let scored: BTreeSet<u8> = holes
                .iter()
                .filter(|h| h.player_id == player.id && h.is_valid() && h.is_scored())
                .map(|h| h.number)
                .collect();
            scored.len() == usize::from(MAX_HOLES)
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseHole {
    pub number: u8,
    pub par: i32,
    pub handicap: u8,
}

/// Rating data for one set of tees.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CourseTee {
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub slope_rating: Option<f64>,
    #[serde(default)]
    pub course_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub slope: Option<f64>,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub holes: Vec<CourseHole>,
    #[serde(default)]
    pub tees: BTreeMap<String, CourseTee>,
}

impl Course {
    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&CourseHole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.par.unwrap_or_else(|| self.holes.iter().map(|h| h.par).sum())
    }

    /// Slope for a player's tee, falling back to the course slope.
    #[must_use]
    pub fn slope_for_tee(&self, tee: Option<&str>) -> Option<f64> {
        tee.and_then(|t| self.tees.get(t))
            .and_then(|t| t.slope_rating)
            .or(self.slope)
    }

    /// Hole handicap indices form a permutation of 1..=n.
    #[must_use]
    pub fn has_valid_hole_indices(&self) -> bool {
        let indices: BTreeSet<u8> = self.holes.iter().map(|h| h.handicap).collect();
        indices.len() == self.holes.len()
            && indices
                .iter()
                .copied()
                .eq(1..=u8::try_from(self.holes.len()).unwrap_or(u8::MAX))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TournamentFormat {
    #[default]
    StrokePlay,
    MatchPlay,
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentFormat::StrokePlay => "stroke play",
            TournamentFormat::MatchPlay => "match play",
        };
        write!(f, "{s}")
    }
}

fn full_handicap() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub format: Option<TournamentFormat>,
    #[serde(default)]
    pub is_match_play: Option<bool>,
    /// Fraction of the full handicap applied, 1.0 is 100%.
    #[serde(default = "full_handicap")]
    pub awarded_handicap: f64,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub complete: bool,
}

impl Tournament {
    #[must_use]
    pub fn format(&self) -> TournamentFormat {
        match (self.format, self.is_match_play) {
            (Some(format), _) => format,
            (None, Some(true)) => TournamentFormat::MatchPlay,
            _ => TournamentFormat::StrokePlay,
        }
    }

    #[must_use]
    pub fn awarded_handicap_percent(&self) -> f64 {
        self.awarded_handicap * 100.0
    }
}
