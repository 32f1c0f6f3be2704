//! Administrative experience deduction: `takeexp user amount`. The stored
//! total clamps at zero; deductions never announce level changes.

use serenity::builder::{CreateCommand, CreateCommandOption, EditInteractionResponse};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::commands::giveexp::run::resolve_target;
use crate::constants::{MAX_GRANT, MAX_TARGET_NAME_LEN};
use crate::error::ExpError;
use crate::model::AppState;
use crate::perms;
use crate::util::{parse_exp_amount, validate_exp_amount};

pub fn register() -> CreateCommand {
    CreateCommand::new("takeexp")
        .description("Take experience from a user (admin only).")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "The user to take exp from")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "How much exp to take (1-1000)",
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

    match app_state.exp.write_exp(target.id, -amount).await {
        Ok(new_total) => {
            interaction
                .edit_response(
                    &ctx.http,
                    reply(format!(
                        "Took {amount} exp from {}; they now have {new_total} exp.",
                        target.name
                    )),
                )
                .await
                .ok();
        }
        Err(e) => {
            tracing::warn!(target: "exp.admin", error = %e, "takeexp failed");
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
        msg.reply(&ctx.http, "Usage: `takeexp <user> <amount>`")
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

    match app_state.exp.write_exp(target_id, -amount).await {
        Ok(new_total) => {
            msg.reply(
                &ctx.http,
                format!("Took {amount} exp from {target_name}; they now have {new_total} exp."),
            )
            .await
            .ok();
        }
        Err(e) => {
            tracing::warn!(target: "exp.admin", error = %e, "takeexp failed");
            msg.reply(&ctx.http, "Failed to write the experience ledger.")
                .await
                .ok();
        }
    }
}
