//! Categorized help for the exp command family. `help <command>` shows a
//! detailed view with usage lines.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ui::style::COLOR_EXP;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    General,
    SelfService,
    Admin,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::SelfService => "Self-Service",
            Self::Admin => "Admin",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static [&'static str],
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "exp",
        description: "Displays a user's exp, level, and progress; defaults to you.",
        usage: &["exp", "exp <user>", "xp", "level"],
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "xpladder",
        description: "Displays the user rankings by amount of exp.",
        usage: &["xpladder", "xpladder <limit>", "expladder"],
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "ping",
        description: "Checks the bot's gateway latency.",
        usage: &["ping"],
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: &["help", "help <command>"],
        category: CommandCategory::General,
    },
    CommandInfo {
        name: "expoff",
        description: "Turns off gaining exp for yourself.",
        usage: &["expoff"],
        category: CommandCategory::SelfService,
    },
    CommandInfo {
        name: "expon",
        description: "Turns on gaining exp for yourself.",
        usage: &["expon"],
        category: CommandCategory::SelfService,
    },
    CommandInfo {
        name: "giveexp",
        description: "Gives a user a certain amount of exp.",
        usage: &["giveexp <user> <amount>"],
        category: CommandCategory::Admin,
    },
    CommandInfo {
        name: "takeexp",
        description: "Takes a certain amount of exp from a user.",
        usage: &["takeexp <user> <amount>"],
        category: CommandCategory::Admin,
    },
    CommandInfo {
        name: "resetxp",
        description: "Resets a user's exp to 0. Asks for confirmation first.",
        usage: &["resetxp <user>"],
        category: CommandCategory::Admin,
    },
    CommandInfo {
        name: "doubleexp",
        description: "Toggles double exp for every grant.",
        usage: &["doubleexp"],
        category: CommandCategory::Admin,
    },
    CommandInfo {
        name: "prefix",
        description: "Shows or changes the prefix for prefix commands.",
        usage: &["prefix", "prefix set <new_prefix>"],
        category: CommandCategory::Admin,
    },
];

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Show the command list or details for one command.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "command",
                "The command to show details for",
            )
            .required(false),
        )
}

fn overview_embed() -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Expmaster Commands")
        .color(COLOR_EXP);
    for category in [
        CommandCategory::General,
        CommandCategory::SelfService,
        CommandCategory::Admin,
    ] {
        let lines: Vec<String> = COMMANDS
            .iter()
            .filter(|c| c.category == category)
            .map(|c| format!("`{}` - {}", c.name, c.description))
            .collect();
        embed = embed.field(category.name(), lines.join("\n"), false);
    }
    embed.footer(CreateEmbedFooter::new("Use `help <command>` for details."))
}

fn detail_embed(name: &str) -> Option<CreateEmbed> {
    let info = COMMANDS.iter().find(|c| c.name == name)?;
    let usage: Vec<String> = info.usage.iter().map(|u| format!("`{u}`")).collect();
    Some(
        CreateEmbed::new()
            .title(format!("Command: {}", info.name))
            .description(info.description)
            .field("Usage", usage.join("\n"), false)
            .color(COLOR_EXP),
    )
}

fn embed_for(arg: Option<&str>) -> CreateEmbed {
    match arg {
        Some(name) => detail_embed(name).unwrap_or_else(overview_embed),
        None => overview_embed(),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let arg = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == "command")
        .and_then(|o| o.value.as_str());
    let builder = CreateInteractionResponseMessage::new().embed(embed_for(arg));
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let builder = CreateMessage::new()
        .embed(embed_for(args.first().copied()))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
