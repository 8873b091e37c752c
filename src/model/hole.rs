use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::{HoleId, PlayerId, TeamId, TournamentId};

pub const MAX_HOLES: u8 = 18;
/// Highest stroke count accepted for one hole; anything above is unscored.
pub const MAX_STROKES: u32 = 99;

/// One player's recorded result for one hole of a round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    #[serde(default)]
    pub id: Option<HoleId>,
    #[serde(default)]
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub team_id: TeamId,
    pub player_id: PlayerId,
    #[serde(default)]
    pub player_name: String,
    pub number: u8,
    pub par: i32,
    /// Difficulty rank of the hole, 1 is the hardest.
    #[serde(default)]
    pub handicap: u8,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_stroke_hole")]
    pub stroke_hole: u32,
    #[serde(default)]
    pub course_par: Option<i32>,
}

impl HoleScore {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..=MAX_HOLES).contains(&self.number)
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.strokes().is_some()
    }

    /// Raw strokes, if within 1..=`MAX_STROKES`.
    #[must_use]
    pub fn strokes(&self) -> Option<i32> {
        self.score
            .filter(|s| (1..=MAX_STROKES).contains(s))
            .and_then(|s| i32::try_from(s).ok())
    }

    /// Raw strokes minus handicap strokes received.
    #[must_use]
    pub fn net_strokes(&self) -> Option<i32> {
        let received = i32::try_from(self.stroke_hole.min(MAX_STROKES)).unwrap_or(0);
        self.strokes().map(|s| s - received)
    }

    #[must_use]
    pub fn gross_to_par(&self) -> Option<i32> {
        self.strokes().map(|s| s.saturating_sub(self.par))
    }

    #[must_use]
    pub fn net_to_par(&self) -> Option<i32> {
        self.net_strokes().map(|n| n.saturating_sub(self.par))
    }
}

fn in_range(score: u32) -> Option<u32> {
    (1..=MAX_STROKES).contains(&score).then_some(score)
}

/// Parses a wire score. `"X"`, blanks and anything that is not an integer
/// in 1..=`MAX_STROKES` mean the hole is unscored.
#[must_use]
pub fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("x") {
        return None;
    }
    trimmed.parse::<u32>().ok().and_then(in_range)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawScore> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScore::Int(i)) => u32::try_from(i).ok().and_then(in_range),
        Some(RawScore::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
            u32::try_from(f as i64).ok().and_then(in_range)
        }
        Some(RawScore::Text(s)) => parse_score(&s),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStrokeHole {
    Flag(bool),
    Count(u32),
    Other(IgnoredAny),
}

fn deserialize_stroke_hole<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawStrokeHole> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawStrokeHole::Flag(true)) => 1,
        Some(RawStrokeHole::Count(c)) => c,
        _ => 0,
    })
}

/// Partial hole update sent with `PUT /v1/holes`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleUpdate {
    pub id: HoleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub par: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handicap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
}

impl HoleUpdate {
    #[must_use]
    pub fn new(id: HoleId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score.to_string());
        self
    }

    /// Marks the hole as not finished ("X").
    #[must_use]
    pub fn did_not_finish(mut self) -> Self {
        self.score = Some("X".to_string());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.par.is_none()
            && self.handicap.is_none()
            && self.number.is_none()
            && self.player_id.is_none()
            && self.tournament_id.is_none()
    }
}
