//! Pure leveling math over the fixed threshold table.

use crate::constants::LEVEL_THRESHOLDS;

/// Distance from a total to the next level boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLevel {
    Remaining(i64),
    /// The total meets or exceeds the final threshold.
    Maxed,
}

/// Level held at a given total: the number of thresholds the total has
/// reached. Meeting a threshold exactly counts as reaching it, so a total
/// sitting on a boundary already holds that level.
pub fn level_for_total(total: i64) -> u32 {
    LEVEL_THRESHOLDS.partition_point(|&t| total >= t) as u32
}

/// Gap to the first unreached threshold, or `Maxed` at the level cap.
/// A total exactly on a boundary reports the gap to the boundary after it,
/// never zero.
pub fn xp_to_next(total: i64) -> NextLevel {
    match LEVEL_THRESHOLDS.iter().find(|&&t| total < t) {
        Some(&t) => NextLevel::Remaining(t - total),
        None => NextLevel::Maxed,
    }
}
