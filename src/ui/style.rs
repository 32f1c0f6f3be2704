//! Central UI style constants and helpers.

pub const COLOR_EXP: u32 = 0x3498DB; // Blue
pub const COLOR_LADDER: u32 = 0xFFD700; // Gold
pub const COLOR_LEVEL_UP: u32 = 0xFFD700; // Gold
pub const COLOR_DOUBLE_ON: u32 = 0x2ECC71; // Green
pub const COLOR_DOUBLE_OFF: u32 = 0xE74C3C; // Red
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
