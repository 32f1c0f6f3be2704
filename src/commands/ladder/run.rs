//! Implements the run logic for the `xpladder` command.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::ui::{create_ladder_buttons, create_ladder_embed};
use crate::constants::DEFAULT_LADDER_LIMIT;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("xpladder")
        .description("Show the top users ranked by experience.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "limit",
                "How many rows to show. Defaults to 100.",
            )
            .required(false)
            .min_int_value(1)
            .max_int_value(DEFAULT_LADDER_LIMIT as u64),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let limit = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == "limit")
        .and_then(|o| o.value.as_i64());

    let entries = app_state.exp.ladder(limit).await.unwrap_or_default();
    let embed = create_ladder_embed(ctx, &entries).await;
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(vec![create_ladder_buttons()]);
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    // A missing or non-numeric argument falls back to the default limit.
    let limit = args.first().and_then(|a| a.parse::<i64>().ok());

    let entries = app_state.exp.ladder(limit).await.unwrap_or_default();
    let embed = create_ladder_embed(ctx, &entries).await;
    let builder = CreateMessage::new()
        .embed(embed)
        .components(vec![create_ladder_buttons()])
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
