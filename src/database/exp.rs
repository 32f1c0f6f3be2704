//! Persistence for experience totals, exemption flags, and the ladder.

use serenity::model::id::UserId;
use sqlx::FromRow;

use super::init::DbPool;

/// A single row of the experience ladder.
#[derive(FromRow, Debug)]
pub struct LadderEntry {
    pub user_id: i64,
    pub total: i64,
}

/// Stored total for a user, or 0 if they have never earned any.
pub async fn fetch_total(pool: &DbPool, user_id: UserId) -> Result<i64, sqlx::Error> {
    let id = user_id.get() as i64;
    let total: Option<i64> = sqlx::query_scalar("SELECT total FROM exp_totals WHERE user_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(total.unwrap_or(0))
}

/// Atomically adds `amount` (which must be non-negative) to a user's total
/// and returns the new value. The single upsert is the only write, so
/// concurrent grants for the same user cannot lose an update.
pub async fn add_total(pool: &DbPool, user_id: UserId, amount: i64) -> Result<i64, sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO exp_totals (user_id, total) VALUES ($1, $2)
         ON CONFLICT (user_id) DO UPDATE SET total = exp_totals.total + EXCLUDED.total
         RETURNING total",
    )
    .bind(id)
    .bind(amount)
    .fetch_one(pool)
    .await
}

/// Subtracts up to `amount`, clamping the stored total at zero. Returns the
/// new total; a user with no row stays at 0.
pub async fn deduct_total(pool: &DbPool, user_id: UserId, amount: i64) -> Result<i64, sqlx::Error> {
    let id = user_id.get() as i64;
    let total: Option<i64> = sqlx::query_scalar(
        "UPDATE exp_totals SET total = GREATEST(total - $2, 0) WHERE user_id = $1 RETURNING total",
    )
    .bind(id)
    .bind(amount)
    .fetch_optional(pool)
    .await?;
    Ok(total.unwrap_or(0))
}

/// Sets a user's total to exactly zero.
pub async fn reset_total(pool: &DbPool, user_id: UserId) -> Result<(), sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query(
        "INSERT INTO exp_totals (user_id, total) VALUES ($1, 0)
         ON CONFLICT (user_id) DO UPDATE SET total = 0",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn set_opt_out(pool: &DbPool, user_id: UserId) -> Result<(), sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query("INSERT INTO exp_optout (user_id) VALUES ($1) ON CONFLICT DO NOTHING")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn clear_opt_out(pool: &DbPool, user_id: UserId) -> Result<(), sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query("DELETE FROM exp_optout WHERE user_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn is_opt_out(pool: &DbPool, user_id: UserId) -> Result<bool, sqlx::Error> {
    let id = user_id.get() as i64;
    let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM exp_optout WHERE user_id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Top totals, descending; ties broken by user id so the ordering is stable.
pub async fn top_totals(pool: &DbPool, limit: i64) -> Result<Vec<LadderEntry>, sqlx::Error> {
    sqlx::query_as::<_, LadderEntry>(
        "SELECT user_id, total FROM exp_totals ORDER BY total DESC, user_id ASC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
