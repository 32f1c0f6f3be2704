//! Confirmation UI for the irreversible experience reset.

use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::id::UserId;

use crate::interactions::ids::{EXP_RESET_CANCEL, EXP_RESET_CONFIRM_PREFIX};
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_ALERT, COLOR_EXP};

pub fn create_confirm_embed(target_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Confirm XP Reset")
        .description(format!(
            "Reset the exp of **{target_name}** to 0? This is only to be used in \
             emergencies and cannot be undone."
        ))
        .color(COLOR_ALERT)
}

pub fn create_confirm_buttons(target_id: UserId) -> CreateActionRow {
    let confirm_id = format!("{EXP_RESET_CONFIRM_PREFIX}{}", target_id.get());
    CreateActionRow::Buttons(vec![
        Btn::danger(&confirm_id, "Confirm Reset"),
        Btn::secondary(EXP_RESET_CANCEL, "Cancel"),
    ])
}

pub fn create_done_embed(target_name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("XP Reset")
        .description(format!("The exp of **{target_name}** has been reset to 0."))
        .color(COLOR_EXP)
}

pub fn create_cancelled_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("XP Reset")
        .description("Reset cancelled. No changes were made.")
        .color(COLOR_EXP)
}
