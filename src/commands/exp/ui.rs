//! Embed construction for the `exp` command and level-up announcements.

use serenity::builder::CreateEmbed;

use crate::experience::ledger::LevelUp;
use crate::experience::leveling::NextLevel;
use crate::ui::style::{COLOR_EXP, COLOR_LEVEL_UP};

pub fn create_exp_embed(name: &str, total: i64, level: u32, next: NextLevel) -> CreateEmbed {
    let progress = match next {
        NextLevel::Remaining(n) => format!("needs **{n}** exp to reach the next level"),
        NextLevel::Maxed => "is at the level cap".to_string(),
    };
    CreateEmbed::new()
        .title(format!("{name}'s Experience"))
        .description(format!(
            "**{name}** has **{total}** exp, is level **{level}**, and {progress}."
        ))
        .color(COLOR_EXP)
}

/// The announcement posted to the originating channel when a grant crosses
/// a level boundary.
pub fn create_level_up_embed(name: &str, level_up: &LevelUp) -> CreateEmbed {
    CreateEmbed::new()
        .title("Level Up!")
        .description(format!(
            "**{name}** has reached level **{}** and earned {}",
            level_up.new_level,
            punctuate(level_up.reward.describe())
        ))
        .color(COLOR_LEVEL_UP)
}

fn punctuate(mut s: String) -> String {
    if !s.ends_with('.') && !s.ends_with('!') {
        s.push('.');
    }
    s
}
