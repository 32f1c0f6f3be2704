//! Central button construction helpers ensuring consistent style.

use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Secondary)
    }
    pub fn danger(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id).label(label).style(ButtonStyle::Danger)
    }
}
