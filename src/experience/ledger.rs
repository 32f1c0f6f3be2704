//! The experience ledger service: read/write primitives, the grant
//! orchestration, exemptions, resets, and the ladder query.
//!
//! Every mutation is a single-statement atomic upsert, so two concurrent
//! grants for the same account cannot lose an update: the post-increment
//! total comes back from the statement that wrote it, and the pre-increment
//! total is derived from it by subtraction.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::model::id::UserId;
use tracing::info;

use crate::constants::{coin_amount, DEFAULT_LADDER_LIMIT};
use crate::database::exp::{self, LadderEntry};
use crate::database::init::DbPool;
use crate::database::{economy, entitlements};
use crate::error::ExpResult;
use crate::experience::leveling::level_for_total;
use crate::experience::rewards::{reward_for_level, Reward};

/// A level boundary was crossed. Callers announce this to the originating
/// channel; the reward itself has already been issued.
#[derive(Debug, Clone, Copy)]
pub struct LevelUp {
    pub new_level: u32,
    pub reward: Reward,
}

/// Outcome of a grant attempt.
#[derive(Debug)]
pub enum GrantOutcome {
    /// The account has opted out; nothing was written.
    Exempt,
    Granted {
        /// Amount actually persisted, after any doubling.
        amount: i64,
        new_total: i64,
        level_up: Option<LevelUp>,
    },
}

pub struct ExpLedger {
    db: DbPool,
    double_exp: AtomicBool,
}

impl ExpLedger {
    pub fn new(db: DbPool) -> Self {
        Self {
            db,
            double_exp: AtomicBool::new(false),
        }
    }

    /// Stored total for the account, zero if it has never earned any.
    pub async fn read_exp(&self, user_id: UserId) -> ExpResult<i64> {
        Ok(exp::fetch_total(&self.db, user_id).await?)
    }

    /// Adds `delta` to the stored total and returns the new value. Negative
    /// deltas clamp the total at zero; it never goes below.
    pub async fn write_exp(&self, user_id: UserId, delta: i64) -> ExpResult<i64> {
        let total = if delta >= 0 {
            exp::add_total(&self.db, user_id, delta).await?
        } else {
            exp::deduct_total(&self.db, user_id, -delta).await?
        };
        Ok(total)
    }

    /// Grants experience and issues the reward for any level boundary
    /// crossed. When several boundaries fall inside one grant, only the
    /// final level's reward is issued.
    pub async fn grant(
        &self,
        user_id: UserId,
        user_name: &str,
        amount: i64,
    ) -> ExpResult<GrantOutcome> {
        if exp::is_opt_out(&self.db, user_id).await? {
            return Ok(GrantOutcome::Exempt);
        }
        let amount = if self.double_exp_active() {
            amount * 2
        } else {
            amount
        };
        let new_total = exp::add_total(&self.db, user_id, amount).await?;
        let old_level = level_for_total(new_total - amount);
        let new_level = level_for_total(new_total);
        let mut level_up = None;
        if new_level > old_level {
            let reward = reward_for_level(new_level);
            self.issue_reward(user_id, user_name, new_level, reward).await?;
            level_up = Some(LevelUp { new_level, reward });
        }
        Ok(GrantOutcome::Granted {
            amount,
            new_total,
            level_up,
        })
    }

    async fn issue_reward(
        &self,
        user_id: UserId,
        user_name: &str,
        level: u32,
        reward: Reward,
    ) -> ExpResult<()> {
        match reward {
            Reward::Coins(n) => {
                economy::add_balance(&self.db, user_id, n).await?;
                let note =
                    format!("{user_name} received {} for reaching level {level}.", coin_amount(n));
                economy::log_transaction(&self.db, user_id, &note).await?;
            }
            Reward::Entitlement(kind) => {
                entitlements::grant(&self.db, user_id, kind).await?;
                let note = format!(
                    "{user_name} received a {} for reaching level {level}.",
                    kind.display_name()
                );
                economy::log_transaction(&self.db, user_id, &note).await?;
                info!(
                    target: "exp.reward",
                    user = %user_name,
                    level,
                    entitlement = kind.as_str(),
                    "entitlement granted"
                );
            }
        }
        Ok(())
    }

    /// Sets the account's total to exactly zero. Callers own the two-phase
    /// confirmation; this is the committed second phase.
    pub async fn reset(&self, user_id: UserId) -> ExpResult<()> {
        Ok(exp::reset_total(&self.db, user_id).await?)
    }

    pub async fn set_exempt(&self, user_id: UserId, exempt: bool) -> ExpResult<()> {
        if exempt {
            exp::set_opt_out(&self.db, user_id).await?;
        } else {
            exp::clear_opt_out(&self.db, user_id).await?;
        }
        Ok(())
    }

    /// Top totals, descending. `limit` defaults to [`DEFAULT_LADDER_LIMIT`]
    /// and is clamped to that many rows.
    pub async fn ladder(&self, limit: Option<i64>) -> ExpResult<Vec<LadderEntry>> {
        let limit = limit.unwrap_or(DEFAULT_LADDER_LIMIT).clamp(1, DEFAULT_LADDER_LIMIT);
        Ok(exp::top_totals(&self.db, limit).await?)
    }

    /// Flips the double-experience flag and returns the new state. The flag
    /// is process-local and off at startup.
    pub fn toggle_double_exp(&self) -> bool {
        !self.double_exp.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn double_exp_active(&self) -> bool {
        self.double_exp.load(Ordering::Relaxed)
    }
}
