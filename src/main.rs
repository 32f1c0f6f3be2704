use std::collections::HashSet;
use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use expmaster_bot::database;
use expmaster_bot::experience::ledger::ExpLedger;
use expmaster_bot::handler::Handler;
use expmaster_bot::model::{AppState, ShardManagerContainer};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id = env::var("SERVER_ID")
        .expect("Expected SERVER_ID in the environment.")
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let database_url = env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");
    let admin_ids: HashSet<u64> = env::var("ADMIN_USER_IDS")
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    let pool = database::init::connect(&database_url)
        .await
        .expect("Failed to connect to the database.");
    database::init::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = Arc::new(AppState {
        exp: Arc::new(ExpLedger::new(pool)),
        prefix: Arc::new(RwLock::new("!".to_string())),
        admin_ids,
    });

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler {
            allowed_guild_id: GuildId::new(server_id),
        })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    info!("starting gateway client");
    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
    }
}
