//! Implements the run logic for the `exp` command: shows a user's total,
//! level, and distance to the next boundary. Defaults to the caller.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::ui::create_exp_embed;
use crate::experience::leveling::{level_for_total, xp_to_next};
use crate::util::resolve_member_by_name;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("exp")
        .description("Show a user's experience, level, and progress.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The user to look up. Defaults to you.",
            )
            .required(false),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let (target_id, target_name) = match interaction
        .data
        .options
        .iter()
        .find(|o| o.name == "user")
        .and_then(|o| o.value.as_user_id())
    {
        Some(user_id) => match user_id.to_user(&ctx.http).await {
            Ok(user) => (user.id, user.name),
            Err(_) => (user_id, user_id.to_string()),
        },
        None => (interaction.user.id, interaction.user.name.clone()),
    };

    let embed = match app_state.exp.read_exp(target_id).await {
        Ok(total) => create_exp_embed(
            &target_name,
            total,
            level_for_total(total),
            xp_to_next(total),
        ),
        Err(e) => {
            tracing::warn!(target: "exp.grant", error = %e, "exp lookup failed");
            crate::ui::style::error_embed("Error", "Failed to read the experience ledger.")
        }
    };
    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let (target_id, target_name) = if let Some(user) = msg.mentions.first() {
        (user.id, user.name.clone())
    } else if args.is_empty() {
        (msg.author.id, msg.author.name.clone())
    } else {
        let raw = args.join(" ");
        let Some(guild_id) = msg.guild_id else {
            return;
        };
        match resolve_member_by_name(ctx, guild_id, &raw) {
            Some(found) => found,
            None => {
                msg.reply(&ctx.http, "The target user could not be found.")
                    .await
                    .ok();
                return;
            }
        }
    };

    match app_state.exp.read_exp(target_id).await {
        Ok(total) => {
            let embed = create_exp_embed(
                &target_name,
                total,
                level_for_total(total),
                xp_to_next(total),
            );
            let builder = CreateMessage::new().embed(embed).reference_message(msg);
            msg.channel_id.send_message(&ctx.http, builder).await.ok();
        }
        Err(e) => {
            tracing::warn!(target: "exp.grant", error = %e, "exp lookup failed");
            msg.reply(&ctx.http, "Failed to read the experience ledger.")
                .await
                .ok();
        }
    }
}
