// Central constants for the experience system: thresholds, caps, display.

/// Total experience required to hold each level; index = level - 1.
/// A zero total is level 0; the final entry is the level cap.
pub const LEVEL_THRESHOLDS: [i64; 40] = [
    1, 40, 90, 165, 250, 400, 600, 810, 1250, 1740, 2450, 3300, 4400, 5550, 6740, 8120, 9630,
    11370, 13290, 15520, 18050, 23000, 28000, 33720, 39900, 46440, 52690, 58000, 63600, 69250,
    75070, 81170, 87470, 93970, 100810, 107890, 115270, 122960, 131080, 140000,
];

/// Highest attainable level.
pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Experience granted for each ordinary guild message.
pub const MESSAGE_XP: i64 = 1;

/// Upper bound for a single administrative grant or deduction.
pub const MAX_GRANT: i64 = 1000;

/// Target names at or above this length are rejected before resolution.
pub const MAX_TARGET_NAME_LEN: usize = 19;

/// Rows returned by the ladder when the caller gives no (or a bad) limit.
pub const DEFAULT_LADDER_LIMIT: i64 = 100;

pub const CURRENCY_NAME: &str = "coin";
pub const CURRENCY_NAME_PLURAL: &str = "coins";

/// "1 coin" / "50 coins".
pub fn coin_amount(n: i64) -> String {
    if n == 1 {
        format!("1 {CURRENCY_NAME}")
    } else {
        format!("{n} {CURRENCY_NAME_PLURAL}")
    }
}
