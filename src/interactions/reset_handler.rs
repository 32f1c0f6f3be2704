//! Second phase of the experience reset: the confirm/cancel buttons.
//! Permission is re-checked here; the prompt may sit in a channel where
//! anyone can press the button.

use std::sync::Arc;

use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::UserId;
use serenity::prelude::Context;

use crate::commands::resetxp::ui::{create_cancelled_embed, create_done_embed};
use crate::error::ExpError;
use crate::interactions::ids::{parse_reset_confirm_id, EXP_RESET_CANCEL};
use crate::perms;
use crate::ui::style::error_embed;
use crate::AppState;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    let custom_id = component.data.custom_id.clone();

    if custom_id == EXP_RESET_CANCEL {
        let builder = CreateInteractionResponseMessage::new()
            .embed(create_cancelled_embed())
            .components(vec![]);
        component
            .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
            .await
            .ok();
        return;
    }

    let Some(target_id) = parse_reset_confirm_id(&custom_id) else {
        return;
    };
    if !perms::component_is_admin(&app_state, component) {
        let builder = CreateInteractionResponseMessage::new()
            .content(ExpError::PermissionDenied.to_string())
            .ephemeral(true);
        component
            .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
            .await
            .ok();
        return;
    }

    let target_id = UserId::new(target_id);
    if let Err(e) = app_state.exp.reset(target_id).await {
        tracing::warn!(target: "exp.admin", error = %e, "exp reset failed");
        let builder = CreateInteractionResponseMessage::new()
            .embed(error_embed("Error", "Failed to reset the experience ledger."))
            .components(vec![]);
        component
            .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
            .await
            .ok();
        return;
    }

    let target_name = match target_id.to_user(&ctx.http).await {
        Ok(user) => {
            user.dm(
                &ctx.http,
                CreateMessage::new().content(
                    "Your XP was reset by an administrator. This cannot be undone.",
                ),
            )
            .await
            .ok();
            user.name
        }
        Err(_) => target_id.to_string(),
    };
    tracing::info!(
        target: "exp.admin",
        admin = %component.user.name,
        target = %target_name,
        "exp reset"
    );

    let builder = CreateInteractionResponseMessage::new()
        .embed(create_done_embed(&target_name))
        .components(vec![]);
    component
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
        .await
        .ok();
}
