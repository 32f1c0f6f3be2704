//! First phase of the experience reset: posts the confirmation prompt.
//! The write itself only happens in the component handler when the
//! confirm button is pressed by an administrator.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::ui::{create_confirm_buttons, create_confirm_embed};
use crate::commands::giveexp::run::resolve_target;
use crate::error::ExpError;
use crate::model::AppState;
use crate::perms;

pub fn register() -> CreateCommand {
    CreateCommand::new("resetxp")
        .description("Reset a user's experience to 0 (admin only, irreversible).")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to reset")
                .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !perms::interaction_is_admin(&app_state, interaction) {
        let builder = CreateInteractionResponseMessage::new()
            .content(ExpError::PermissionDenied.to_string())
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
            .await
            .ok();
        return;
    }
    let Some(target_id) = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == "user")
        .and_then(|o| o.value.as_user_id())
    else {
        return;
    };
    let target_name = target_id
        .to_user(&ctx.http)
        .await
        .map_or_else(|_| target_id.to_string(), |u| u.name);

    let builder = CreateInteractionResponseMessage::new()
        .embed(create_confirm_embed(&target_name))
        .components(vec![create_confirm_buttons(target_id)]);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !perms::message_is_admin(ctx, &app_state, msg) {
        msg.reply(&ctx.http, ExpError::PermissionDenied.to_string())
            .await
            .ok();
        return;
    }
    let Some(raw_name) = args.first() else {
        msg.reply(&ctx.http, "Usage: `resetxp <user>`").await.ok();
        return;
    };
    let Some((target_id, target_name)) = resolve_target(ctx, msg, raw_name) else {
        msg.reply(&ctx.http, ExpError::UnknownAccount.to_string())
            .await
            .ok();
        return;
    };

    let builder = CreateMessage::new()
        .embed(create_confirm_embed(&target_name))
        .components(vec![create_confirm_buttons(target_id)])
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
