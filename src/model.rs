//! Shared data structures stored in serenity's global context.

use std::collections::HashSet;
use std::sync::Arc;

use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

use crate::experience::ledger::ExpLedger;

/// A container for the ShardManager, allowing it to be stored in the global
/// context. Used by `ping` to report gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application. An `Arc<AppState>` is
/// stored in the global context for safe access from any command or event
/// handler.
pub struct AppState {
    /// The experience ledger service; owns the leveling policy state,
    /// including the double-experience flag.
    pub exp: Arc<ExpLedger>,
    /// The current command prefix, changeable at runtime by administrators.
    pub prefix: Arc<RwLock<String>>,
    /// User ids that pass the administrative gate in addition to the guild
    /// owner and ADMINISTRATOR roles.
    pub admin_ids: HashSet<u64>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
