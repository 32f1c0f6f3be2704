//! Entitlement grants issued by the reward policy.

use serenity::model::id::UserId;

use super::init::DbPool;
use crate::experience::rewards::EntitlementKind;

/// Records an entitlement for a user. Each kind is issued at most once per
/// account; a repeat grant is a no-op. Returns whether a new row was
/// written.
pub async fn grant(
    pool: &DbPool,
    user_id: UserId,
    kind: EntitlementKind,
) -> Result<bool, sqlx::Error> {
    let id = user_id.get() as i64;
    let res = sqlx::query(
        "INSERT INTO entitlements (user_id, kind) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(id)
    .bind(kind.as_str())
    .execute(pool)
    .await?;
    Ok(res.rows_affected() > 0)
}
