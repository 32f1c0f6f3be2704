//! Administrative experience grant: `giveexp user amount`.
//!
//! All validation happens before any mutation: permission, amount bounds,
//! target name length, target resolution. The grant itself goes through the
//! same ledger path as passive message experience, so exemptions, doubling,
//! and level-up rewards all apply.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;

use crate::commands::exp::ui::create_level_up_embed;
use crate::constants::{MAX_GRANT, MAX_TARGET_NAME_LEN};
use crate::error::ExpError;
use crate::experience::ledger::GrantOutcome;
use crate::model::AppState;
use crate::perms;
use crate::util::{parse_exp_amount, resolve_member_by_name, validate_exp_amount};

pub fn register() -> CreateCommand {
    CreateCommand::new("giveexp")
        .description("Give a user experience (admin only).")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to grant exp to")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "How much exp to give (1-1000)",
            )
            .required(true)
            .min_int_value(1)
            .max_int_value(MAX_GRANT as u64),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer_ephemeral(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let reply = |content: String| EditInteractionResponse::new().content(content);

    if !perms::interaction_is_admin(&app_state, interaction) {
        interaction
            .edit_response(&ctx.http, reply(ExpError::PermissionDenied.to_string()))
            .await
            .ok();
        return;
    }

    let options = &interaction.data.options;
    let Some(target_id) = options
        .iter()
        .find(|o| o.name == "user")
        .and_then(|o| o.value.as_user_id())
    else {
        interaction
            .edit_response(&ctx.http, reply("Missing user option.".into()))
            .await
            .ok();
        return;
    };
    let amount = options
        .iter()
        .find(|o| o.name == "amount")
        .and_then(|o| o.value.as_i64())
        .unwrap_or(0);
    let amount = match validate_exp_amount(amount) {
        Ok(a) => a,
        Err(e) => {
            interaction.edit_response(&ctx.http, reply(e.to_string())).await.ok();
            return;
        }
    };
    let Ok(target) = target_id.to_user(&ctx.http).await else {
        interaction
            .edit_response(&ctx.http, reply(ExpError::UnknownAccount.to_string()))
            .await
            .ok();
        return;
    };
    if target.name.chars().count() >= MAX_TARGET_NAME_LEN {
        interaction
            .edit_response(&ctx.http, reply(ExpError::UsernameTooLong.to_string()))
            .await
            .ok();
        return;
    }

    match app_state.exp.grant(target.id, &target.name, amount).await {
        Ok(GrantOutcome::Exempt) => {
            interaction
                .edit_response(
                    &ctx.http,
                    reply(format!("{} is currently exempt from exp.", target.name)),
                )
                .await
                .ok();
        }
        Ok(GrantOutcome::Granted { amount, level_up, .. }) => {
            interaction
                .edit_response(
                    &ctx.http,
                    reply(format!("{} has received {amount} exp.", target.name)),
                )
                .await
                .ok();
            if let Some(up) = level_up {
                let embed = create_level_up_embed(&target.name, &up);
                interaction
                    .channel_id
                    .send_message(&ctx.http, CreateMessage::new().embed(embed))
                    .await
                    .ok();
            }
        }
        Err(e) => {
            tracing::warn!(target: "exp.admin", error = %e, "giveexp failed");
            interaction
                .edit_response(&ctx.http, reply("Failed to write the experience ledger.".into()))
                .await
                .ok();
        }
    }
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
    let (Some(raw_name), Some(raw_amount)) = (args.first(), args.get(1)) else {
        msg.reply(&ctx.http, "Usage: `giveexp <user> <amount>`")
            .await
            .ok();
        return;
    };
    let amount = match parse_exp_amount(raw_amount) {
        Ok(a) => a,
        Err(e) => {
            msg.reply(&ctx.http, e.to_string()).await.ok();
            return;
        }
    };
    if raw_name.chars().count() >= MAX_TARGET_NAME_LEN {
        msg.reply(&ctx.http, ExpError::UsernameTooLong.to_string())
            .await
            .ok();
        return;
    }
    let Some((target_id, target_name)) = resolve_target(ctx, msg, raw_name) else {
        msg.reply(&ctx.http, ExpError::UnknownAccount.to_string())
            .await
            .ok();
        return;
    };

    match app_state.exp.grant(target_id, &target_name, amount).await {
        Ok(GrantOutcome::Exempt) => {
            msg.reply(&ctx.http, format!("{target_name} is currently exempt from exp."))
                .await
                .ok();
        }
        Ok(GrantOutcome::Granted { amount, level_up, .. }) => {
            msg.reply(&ctx.http, format!("{target_name} has received {amount} exp."))
                .await
                .ok();
            if let Some(up) = level_up {
                let embed = create_level_up_embed(&target_name, &up);
                msg.channel_id
                    .send_message(&ctx.http, CreateMessage::new().embed(embed))
                    .await
                    .ok();
            }
        }
        Err(e) => {
            tracing::warn!(target: "exp.admin", error = %e, "giveexp failed");
            msg.reply(&ctx.http, "Failed to write the experience ledger.")
                .await
                .ok();
        }
    }
}

/// A mention wins; otherwise the name is matched against the member cache.
pub(crate) fn resolve_target(ctx: &Context, msg: &Message, raw: &str) -> Option<(UserId, String)> {
    if let Some(user) = msg.mentions.first() {
        return Some((user.id, user.name.clone()));
    }
    resolve_member_by_name(ctx, msg.guild_id?, raw)
}
