use std::str::FromStr;

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{info, warn};

use crate::commands::exp::ui::create_level_up_embed;
use crate::constants::MESSAGE_XP;
use crate::experience::ledger::GrantOutcome;
use crate::interactions::ids::EXP_LADDER_REFRESH;
use crate::{commands, interactions, AppState};

enum Command {
    Exp,
    Ladder,
    GiveExp,
    TakeExp,
    ResetXp,
    DoubleExp,
    ExpOn,
    ExpOff,
    Help,
    Ping,
    Prefix,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exp" | "xp" | "level" => Ok(Command::Exp),
            "xpladder" | "expladder" | "ladder" => Ok(Command::Ladder),
            "giveexp" | "givexp" => Ok(Command::GiveExp),
            "takeexp" => Ok(Command::TakeExp),
            "resetxp" | "resetexp" => Ok(Command::ResetXp),
            "doubleexp" | "doublexp" => Ok(Command::DoubleExp),
            "expon" => Ok(Command::ExpOn),
            "expoff" => Ok(Command::ExpOff),
            "help" | "h" => Ok(Command::Help),
            "ping" => Ok(Command::Ping),
            "prefix" => Ok(Command::Prefix),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let app_state = {
            ctx.data
                .read()
                .await
                .get::<AppState>()
                .expect("Expected AppState in TypeMap.")
                .clone()
        };
        if let Interaction::Command(command) = &mut interaction {
            match command.data.name.as_str() {
                "exp" => commands::exp::run::run_slash(&ctx, command).await,
                "xpladder" => commands::ladder::run::run_slash(&ctx, command).await,
                "giveexp" => commands::giveexp::run::run_slash(&ctx, command).await,
                "takeexp" => commands::takeexp::run::run_slash(&ctx, command).await,
                "resetxp" => commands::resetxp::run::run_slash(&ctx, command).await,
                "doubleexp" => commands::doubleexp::run::run_slash(&ctx, command).await,
                "expon" => commands::optout::run_slash(&ctx, command, false).await,
                "expoff" => commands::optout::run_slash(&ctx, command, true).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                "ping" => commands::ping::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &mut interaction {
            let custom_id = component.data.custom_id.as_str();
            if custom_id.starts_with("exp_reset_") {
                interactions::reset_handler::handle(&ctx, component, app_state).await;
            } else if custom_id == EXP_LADDER_REFRESH {
                interactions::ladder_handler::handle(&ctx, component, app_state).await;
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let app_state = {
            ctx.data
                .read()
                .await
                .get::<AppState>()
                .expect("Expected AppState in TypeMap.")
                .clone()
        };
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            // Ordinary chat: grant passive experience and announce any
            // level-up in the channel the message landed in.
            match app_state
                .exp
                .grant(msg.author.id, &msg.author.name, MESSAGE_XP)
                .await
            {
                Ok(GrantOutcome::Granted {
                    level_up: Some(up), ..
                }) => {
                    let embed = create_level_up_embed(&msg.author.name, &up);
                    msg.channel_id
                        .send_message(
                            &ctx.http,
                            serenity::builder::CreateMessage::new().embed(embed),
                        )
                        .await
                        .ok();
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(target: "exp.grant", error = %e, "passive grant failed");
                }
            }
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Exp => commands::exp::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Ladder => commands::ladder::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::GiveExp => commands::giveexp::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::TakeExp => commands::takeexp::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::ResetXp => commands::resetxp::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::DoubleExp => commands::doubleexp::run::run_prefix(&ctx, &msg).await,
            Command::ExpOn => commands::optout::run_prefix(&ctx, &msg, false).await,
            Command::ExpOff => commands::optout::run_prefix(&ctx, &msg, true).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec).await,
            Command::Ping => commands::ping::run_prefix(&ctx, &msg).await,
            Command::Prefix => commands::prefix::run_prefix(&ctx, &msg, args_vec).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::exp::run::register(),
            commands::ladder::run::register(),
            commands::giveexp::run::register(),
            commands::takeexp::run::register(),
            commands::resetxp::run::register(),
            commands::doubleexp::run::register(),
            commands::optout::register_on(),
            commands::optout::register_off(),
            commands::help::register(),
            commands::ping::register(),
        ];
        if let Err(e) = self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            warn!(error = ?e, "error creating guild commands");
        } else {
            info!("registered guild commands");
        }
    }
}
