//! Scoring module - line clear points, levels and fall speed
//!
//! Classic rules: a fixed table of points per lock, multiplied by the level
//! in effect before the lock, a level every ten lines, and gravity that
//! speeds up by a fixed step per level down to a floor.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    MIN_FALL_MS,
};

/// Points for clearing `lines` rows in one lock at `level` (1-based).
///
/// Counts outside the table (more than 4) score nothing.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    LINE_SCORES
        .get(lines as usize)
        .map_or(0, |&base| base.saturating_mul(level))
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(reduction).max(MIN_FALL_MS)
}

/// Bonus for a hard drop that descended `rows` rows
pub fn hard_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}
