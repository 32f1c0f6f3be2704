//! The administrative permission gate: the guild owner, any role carrying
//! ADMINISTRATOR, or a user id listed in `ADMIN_USER_IDS`.

use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::model::channel::Message;
use serenity::model::permissions::Permissions;
use serenity::prelude::Context;

use crate::model::AppState;

pub fn interaction_is_admin(app: &AppState, interaction: &CommandInteraction) -> bool {
    if app.admin_ids.contains(&interaction.user.id.get()) {
        return true;
    }
    interaction
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.administrator())
}

pub fn component_is_admin(app: &AppState, component: &ComponentInteraction) -> bool {
    if app.admin_ids.contains(&component.user.id.get()) {
        return true;
    }
    component
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.administrator())
}

/// Prefix-command variant; interactions carry resolved permissions, but a
/// plain message only carries role ids, so roles are resolved through the
/// guild cache.
pub fn message_is_admin(ctx: &Context, app: &AppState, msg: &Message) -> bool {
    if app.admin_ids.contains(&msg.author.id.get()) {
        return true;
    }
    let Some(guild_id) = msg.guild_id else {
        return false;
    };
    let (owner_id, roles) = {
        let Some(guild) = ctx.cache.guild(guild_id) else {
            return false;
        };
        (guild.owner_id, guild.roles.clone())
    };
    if msg.author.id == owner_id {
        return true;
    }
    if let Some(member) = &msg.member {
        member.roles.iter().any(|role_id| {
            roles
                .get(role_id)
                .is_some_and(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
        })
    } else {
        false
    }
}
