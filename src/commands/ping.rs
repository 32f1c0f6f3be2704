//! Gateway latency check.

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::ShardManagerContainer;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check the bot's gateway latency.")
}

async fn latency_line(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        return "Pong!".to_string();
    };
    let runners = shard_manager.runners.lock().await;
    match runners.get(&ctx.shard_id) {
        Some(runner) => {
            let latency = runner.latency.map_or_else(
                || "N/A".to_string(),
                |latency| format!("{:.2} ms", latency.as_millis()),
            );
            format!("Pong! Heartbeat Latency: `{latency}`")
        }
        None => "Pong!".to_string(),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let content = latency_line(ctx).await;
    let builder = CreateInteractionResponseMessage::new().content(content);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let content = latency_line(ctx).await;
    msg.channel_id.say(&ctx.http, content).await.ok();
}
