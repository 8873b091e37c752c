use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::hole::MAX_HOLES;
use crate::model::ids::{PlayerId, TeamId};

/// Holes completed in the current round.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "u8", into = "u8")]
pub enum Thru {
    NotStarted,
    Holes(u8),
    Finished,
}

impl Thru {
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NotStarted,
            n if n >= usize::from(MAX_HOLES) => Self::Finished,
            n => Self::Holes(n as u8),
        }
    }

    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::Holes(n) => n,
            Self::Finished => MAX_HOLES,
        }
    }

    #[must_use]
    pub fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }
}

impl From<u8> for Thru {
    fn from(value: u8) -> Self {
        Self::from_count(usize::from(value))
    }
}

impl From<Thru> for u8 {
    fn from(value: Thru) -> Self {
        value.count()
    }
}

impl fmt::Display for Thru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "-"),
            Self::Holes(n) => write!(f, "{n}"),
            Self::Finished => write!(f, "F"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum RowId {
    Team(TeamId),
    Player(PlayerId),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team(id) => write!(f, "{id}"),
            Self::Player(id) => write!(f, "{id}"),
        }
    }
}

/// Cumulative gross/net for one team or player, scores relative to par.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub id: RowId,
    pub name: String,
    pub gross_score: i32,
    pub net_score: i32,
    pub thru: Thru,
    pub course_par: i32,
}

/// Leaderboard place; tied places render with a "T" prefix.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub place: usize,
    pub tied: bool,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tied {
            write!(f, "T{}", self.place)
        } else {
            write!(f, "{}", self.place)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedRow {
    pub position: Position,
    #[serde(flatten)]
    pub row: AggregateRow,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedLeaderboard {
    pub started: Vec<RankedRow>,
    pub not_started: Vec<AggregateRow>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HoleOutcome {
    TeamA,
    TeamB,
    Halved,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    pub number: u8,
    pub team_a_net: i32,
    pub team_b_net: i32,
    pub outcome: HoleOutcome,
    /// False for holes past the last counted hole.
    pub counted: bool,
}

/// Match standing from one side's point of view.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    Up(u8),
    Down(u8),
    Even,
}

impl MatchStatus {
    #[must_use]
    pub fn from_differential(differential: i32) -> Self {
        match differential {
            0 => Self::Even,
            d if d > 0 => Self::Up(d.unsigned_abs() as u8),
            d => Self::Down(d.unsigned_abs() as u8),
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up(n) => write!(f, "{n}↑"),
            Self::Down(n) => write!(f, "{n}↓"),
            Self::Even => write!(f, "Ev"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    pub team_id: TeamId,
    pub name: String,
    pub status: MatchStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayResult {
    pub team_a: MatchSide,
    pub team_b: MatchSide,
    /// Holes won by team A minus holes won by team B.
    pub differential: i32,
    pub thru: u8,
    pub holes: Vec<HoleResult>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum Leaderboard {
    StrokePlay(RankedLeaderboard),
    MatchPlay { result: Option<MatchPlayResult> },
}
