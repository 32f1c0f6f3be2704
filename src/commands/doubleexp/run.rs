//! Toggles the process-wide double-experience flag and broadcasts the new
//! state to every text channel in the guild.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::{ChannelType, Message};
use serenity::model::id::GuildId;
use serenity::prelude::*;

use crate::error::ExpError;
use crate::model::AppState;
use crate::perms;
use crate::ui::style::{COLOR_DOUBLE_OFF, COLOR_DOUBLE_ON};

pub fn register() -> CreateCommand {
    CreateCommand::new("doubleexp").description("Toggle double experience (admin only).")
}

fn broadcast_embed(active: bool) -> CreateEmbed {
    let (color, text) = if active {
        (
            COLOR_DOUBLE_ON,
            "**Double XP is turned on! You will now receive double XP.**",
        )
    } else {
        (
            COLOR_DOUBLE_OFF,
            "**Double XP is turned off! You will no longer receive double XP.**",
        )
    };
    CreateEmbed::new().description(text).color(color)
}

async fn broadcast(ctx: &Context, guild_id: GuildId, active: bool) {
    let Ok(channels) = guild_id.channels(&ctx.http).await else {
        return;
    };
    for (channel_id, channel) in channels {
        if channel.kind != ChannelType::Text {
            continue;
        }
        channel_id
            .send_message(&ctx.http, CreateMessage::new().embed(broadcast_embed(active)))
            .await
            .ok();
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !perms::interaction_is_admin(&app_state, interaction) {
        interaction
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content(ExpError::PermissionDenied.to_string()),
            )
            .await
            .ok();
        return;
    }
    let active = app_state.exp.toggle_double_exp();
    tracing::info!(target: "exp.admin", admin = %interaction.user.name, active, "double exp toggled");
    if let Some(guild_id) = interaction.guild_id {
        broadcast(ctx, guild_id, active).await;
    }
    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(format!(
                "Double XP was turned {}.",
                if active { "ON" } else { "OFF" }
            )),
        )
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !perms::message_is_admin(ctx, &app_state, msg) {
        msg.reply(&ctx.http, ExpError::PermissionDenied.to_string())
            .await
            .ok();
        return;
    }
    let active = app_state.exp.toggle_double_exp();
    tracing::info!(target: "exp.admin", admin = %msg.author.name, active, "double exp toggled");
    if let Some(guild_id) = msg.guild_id {
        broadcast(ctx, guild_id, active).await;
    }
    msg.reply(
        &ctx.http,
        format!("Double XP was turned {}.", if active { "ON" } else { "OFF" }),
    )
    .await
    .ok();
}
