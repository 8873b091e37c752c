use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Course, HoleScore, MAX_HOLES, Player, PlayerId, Tournament};

/// USGA slope of a course of standard difficulty.
pub const NEUTRAL_SLOPE: f64 = 113.0;
/// Used when a course or tee has no usable slope rating.
pub const DEFAULT_SLOPE: f64 = 130.0;

/// How strokes are handed out once a handicap passes 18.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StrokePolicy {
    /// At most one stroke per hole.
    SingleLap,
    /// A second lap of strokes starts again from the hardest hole.
    #[default]
    MultiLap,
}

fn usable_slope(slope: Option<f64>) -> f64 {
    match slope {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => DEFAULT_SLOPE,
    }
}

/// Course handicap: `round(index * slope / 113)`. Missing, negative or
/// non-numeric indexes count as scratch.
#[must_use]
pub fn course_handicap(handicap_index: Option<f64>, slope: Option<f64>) -> i32 {
    let Some(index) = handicap_index.filter(|i| i.is_finite() && *i > 0.0) else {
        return 0;
    };
    (index * usable_slope(slope) / NEUTRAL_SLOPE).round() as i32
}

/// Applies the tournament's awarded percentage to a course handicap.
#[must_use]
pub fn adjusted_handicap(course_handicap: i32, awarded_percent: f64) -> i32 {
    if course_handicap <= 0 || !awarded_percent.is_finite() || awarded_percent <= 0.0 {
        return 0;
    }
    (f64::from(course_handicap) * awarded_percent / 100.0).round() as i32
}

/// Strokes received on a hole with difficulty rank `hole_index`.
#[must_use]
pub fn strokes_for_hole(adjusted_handicap: i32, hole_index: u8, policy: StrokePolicy) -> u32 {
    if adjusted_handicap <= 0 || !(1..=MAX_HOLES).contains(&hole_index) {
        return 0;
    }
    let allotted = adjusted_handicap.unsigned_abs();
    let index = u32::from(hole_index);
    match policy {
        StrokePolicy::SingleLap => u32::from(allotted >= index),
        StrokePolicy::MultiLap => {
            let laps = u32::from(MAX_HOLES);
            allotted / laps + u32::from(allotted % laps >= index)
        }
    }
}

/// Everything needed to turn a handicap index into per-hole strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandicapContext {
    pub slope: Option<f64>,
    pub awarded_percent: f64,
    pub policy: StrokePolicy,
}

impl HandicapContext {
    #[must_use]
    pub fn playing_handicap(&self, handicap_index: Option<f64>) -> i32 {
        adjusted_handicap(
            course_handicap(handicap_index, self.slope),
            self.awarded_percent,
        )
    }

    #[must_use]
    pub fn strokes(&self, handicap_index: Option<f64>, hole_index: u8) -> u32 {
        strokes_for_hole(self.playing_handicap(handicap_index), hole_index, self.policy)
    }
}

/// Stamps `stroke_hole` on every record. Par and hole index come from the
/// course layout when it knows the hole, otherwise from the record itself.
pub fn apply_stroke_holes(
    holes: &mut [HoleScore],
    players: &[Player],
    course: &Course,
    tournament: &Tournament,
    policy: StrokePolicy,
) {
    let by_id: AHashMap<&PlayerId, &Player> = players.iter().map(|p| (&p.id, p)).collect();
    let awarded_percent = tournament.awarded_handicap_percent();

    for hole in holes.iter_mut() {
        if let Some(course_hole) = course.hole(hole.number) {
            hole.par = course_hole.par;
            hole.handicap = course_hole.handicap;
        }
        if hole.course_par.is_none() {
            hole.course_par = course.par;
        }

        let Some(player) = by_id.get(&hole.player_id) else {
            tracing::debug!(
                player_id = %hole.player_id,
                hole = hole.number,
                "no player record, no strokes given"
            );
            hole.stroke_hole = 0;
            continue;
        };

        let ctx = HandicapContext {
            slope: course.slope_for_tee(player.tee.as_deref()),
            awarded_percent,
            policy,
        };
        hole.stroke_hole = ctx.strokes(player.handicap, hole.handicap);
    }
}
