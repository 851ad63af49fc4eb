//! Scoring module - flat points per cleared row

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `rows` rows in one sweep.
pub fn line_clear_points(rows: usize) -> u32 {
    u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(LINE_CLEAR_POINTS)
}

/// Add `points` to `score` without wrapping.
pub fn add_points(score: u32, points: u32) -> u32 {
    score.saturating_add(points)
}
