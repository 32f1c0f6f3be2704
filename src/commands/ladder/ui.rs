//! Embed and button construction for the experience ladder.

use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::prelude::Context;

use crate::database::exp::LadderEntry;
use crate::interactions::ids::EXP_LADDER_REFRESH;
use crate::ui::buttons::Btn;
use crate::ui::style::COLOR_LADDER;

pub async fn create_ladder_embed(ctx: &Context, entries: &[LadderEntry]) -> CreateEmbed {
    let mut description_lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let rank = i + 1;
        let user_id = serenity::model::id::UserId::new(entry.user_id as u64);
        let user_name = user_id
            .to_user(&ctx.http)
            .await
            .map_or_else(|_| "Unknown User".to_string(), |u| u.name);

        let medal = match rank {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "🔹",
        };

        description_lines.push(format!(
            "{} **{}**. {} - `{} exp`",
            medal, rank, user_name, entry.total
        ));
    }

    let description = if description_lines.is_empty() {
        "The exp ladder is currently empty.".to_string()
    } else {
        description_lines.join("\n")
    };

    CreateEmbed::new()
        .title("Exp Ladder")
        .description(description)
        .color(COLOR_LADDER)
}

pub fn create_ladder_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![Btn::secondary(EXP_LADDER_REFRESH, "Refresh")])
}
