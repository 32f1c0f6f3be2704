//! Currency-side collaborators of the reward policy: balances and the
//! reward audit log.

use serenity::model::id::UserId;

use super::init::DbPool;

/// Adds `delta` coins to a user's balance, creating the profile row if it
/// does not exist yet. Returns the new balance.
pub async fn add_balance(pool: &DbPool, user_id: UserId, delta: i64) -> Result<i64, sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO profiles (user_id, balance) VALUES ($1, $2)
         ON CONFLICT (user_id) DO UPDATE SET balance = profiles.balance + EXCLUDED.balance
         RETURNING balance",
    )
    .bind(id)
    .bind(delta)
    .fetch_one(pool)
    .await
}

/// Appends a line to the reward audit log.
pub async fn log_transaction(pool: &DbPool, user_id: UserId, note: &str) -> Result<(), sqlx::Error> {
    let id = user_id.get() as i64;
    sqlx::query("INSERT INTO exp_transactions (user_id, note) VALUES ($1, $2)")
        .bind(id)
        .bind(note)
        .execute(pool)
        .await?;
    Ok(())
}
