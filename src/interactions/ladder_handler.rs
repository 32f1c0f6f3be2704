//! Handles the refresh button on the exp ladder.

use std::sync::Arc;

use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

use crate::commands::ladder::ui::{create_ladder_buttons, create_ladder_embed};
use crate::AppState;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    component.defer(&ctx.http).await.ok();

    let entries = app_state.exp.ladder(None).await.unwrap_or_default();
    let embed = create_ladder_embed(ctx, &entries).await;
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(vec![create_ladder_buttons()]);
    component.edit_response(&ctx.http, builder).await.ok();
}
