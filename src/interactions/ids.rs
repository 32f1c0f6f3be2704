//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and keeps the handler's routing table
//! in one place.

pub const EXP_RESET_CONFIRM_PREFIX: &str = "exp_reset_confirm_"; // followed by user id
pub const EXP_RESET_CANCEL: &str = "exp_reset_cancel";
pub const EXP_LADDER_REFRESH: &str = "exp_ladder_refresh";

/// Parse a reset-confirm custom_id into the target user id.
pub fn parse_reset_confirm_id(id: &str) -> Option<u64> {
    id.strip_prefix(EXP_RESET_CONFIRM_PREFIX)?.parse().ok()
}
