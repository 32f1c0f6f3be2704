//! Self-service exemption toggles: `expoff` stops the caller earning
//! experience, `expon` resumes it. Only ever affects the calling user.

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;

pub fn register_off() -> CreateCommand {
    CreateCommand::new("expoff").description("Stop earning experience.")
}

pub fn register_on() -> CreateCommand {
    CreateCommand::new("expon").description("Resume earning experience.")
}

fn confirmation(exempt: bool) -> &'static str {
    if exempt {
        "You are now exempt from exp."
    } else {
        "You are no longer exempt from exp."
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, exempt: bool) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let content = match app_state.exp.set_exempt(interaction.user.id, exempt).await {
        Ok(()) => confirmation(exempt).to_string(),
        Err(e) => {
            tracing::warn!(target: "exp.grant", error = %e, "exemption toggle failed");
            "Failed to update your exemption.".to_string()
        }
    };
    let builder = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, exempt: bool) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let content = match app_state.exp.set_exempt(msg.author.id, exempt).await {
        Ok(()) => confirmation(exempt).to_string(),
        Err(e) => {
            tracing::warn!(target: "exp.grant", error = %e, "exemption toggle failed");
            "Failed to update your exemption.".to_string()
        }
    };
    msg.reply(&ctx.http, content).await.ok();
}
