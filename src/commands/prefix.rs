//! Runtime prefix management for prefix commands. Admin-gated; the value
//! lives in `AppState` and is not persisted across restarts.

use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::error::ExpError;
use crate::model::AppState;
use crate::perms;

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

    match args.first() {
        Some(&"set") => {
            if let Some(new_prefix) = args.get(1) {
                let mut prefix_guard = app_state.prefix.write().await;
                *prefix_guard = new_prefix.to_string();
                msg.reply(&ctx.http, format!("Prefix has been updated to `{new_prefix}`"))
                    .await
                    .ok();
            } else {
                msg.reply(&ctx.http, "Usage: `prefix set <new_prefix>`")
                    .await
                    .ok();
            }
        }
        _ => {
            let current_prefix = app_state.prefix.read().await.clone();
            msg.reply(
                &ctx.http,
                format!(
                    "The current prefix is `{current_prefix}`. Use `prefix set <new_prefix>` to change it."
                ),
            )
            .await
            .ok();
        }
    }
}
