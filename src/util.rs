//! Small shared helpers: account-name normalization, amount validation, and
//! member resolution for prefix commands.

use serenity::model::id::{GuildId, UserId};
use serenity::prelude::Context;

use crate::constants::MAX_GRANT;
use crate::error::ExpError;

/// Folds a raw display name into its canonical lookup form: lowercase ASCII
/// alphanumerics only. Deterministic and idempotent.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses an administrative experience amount. Whole numbers only, at least
/// 1 and at most [`MAX_GRANT`].
pub fn parse_exp_amount(raw: &str) -> Result<i64, ExpError> {
    let trimmed = raw.trim();
    if trimmed.contains('.') {
        return Err(ExpError::InvalidAmount("Cannot contain a decimal.".into()));
    }
    let amount: i64 = trimmed
        .parse()
        .map_err(|_| ExpError::InvalidAmount("Must be a number.".into()))?;
    if amount < 1 {
        return Err(ExpError::InvalidAmount("Cannot be less than one EXP.".into()));
    }
    if amount > MAX_GRANT {
        return Err(ExpError::InvalidAmount(format!(
            "You cannot give more than {MAX_GRANT} exp at a time."
        )));
    }
    Ok(amount)
}

/// Validates an administrative amount already parsed by the slash layer.
pub fn validate_exp_amount(amount: i64) -> Result<i64, ExpError> {
    if amount < 1 {
        return Err(ExpError::InvalidAmount("Cannot be less than one EXP.".into()));
    }
    if amount > MAX_GRANT {
        return Err(ExpError::InvalidAmount(format!(
            "You cannot give more than {MAX_GRANT} exp at a time."
        )));
    }
    Ok(amount)
}

/// Resolves a raw name argument to a guild member by comparing normalized
/// forms of usernames, global display names, and nicknames. Returns the
/// member's id and username.
pub fn resolve_member_by_name(ctx: &Context, guild_id: GuildId, raw: &str) -> Option<(UserId, String)> {
    let wanted = normalize_name(raw);
    if wanted.is_empty() {
        return None;
    }
    let guild = ctx.cache.guild(guild_id)?;
    for member in guild.members.values() {
        let user = &member.user;
        let nick_matches = member
            .nick
            .as_deref()
            .is_some_and(|n| normalize_name(n) == wanted);
        let global_matches = user
            .global_name
            .as_deref()
            .is_some_and(|n| normalize_name(n) == wanted);
        if normalize_name(&user.name) == wanted || nick_matches || global_matches {
            return Some((user.id, user.name.clone()));
        }
    }
    None
}
