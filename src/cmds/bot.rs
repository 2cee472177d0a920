use std::io::Write;

use log::{error, info};
use serenity::all::{FullEvent, GatewayIntents};

use crate::config::Config;
use crate::{Data, Error};

async fn event_listener(
    _ctx: &serenity::all::Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let FullEvent::Ready { data_about_bot, .. } = event {
        info!("Logged in as {}", data_about_bot.user.name);
    }

    Ok(())
}

fn setup_logging() {
    let debug_mode = std::env::var("DEBUG").unwrap_or_default() == "true";

    let mut env_builder = env_logger::builder();

    env_builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "({}) {} - {}",
                record.target(),
                record.level(),
                record.args()
            )
        })
        .parse_filters("serenity=error,modbot=info")
        .filter(None, log::LevelFilter::Info);

    if debug_mode {
        env_builder.filter(None, log::LevelFilter::Debug);
    }

    env_builder.init();
}

pub async fn start() {
    setup_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut intents = GatewayIntents::all();

    // Remove the really spammy intents
    intents.remove(GatewayIntents::GUILD_PRESENCES);
    intents.remove(GatewayIntents::GUILD_MESSAGE_TYPING);
    intents.remove(GatewayIntents::DIRECT_MESSAGE_TYPING);

    let framework_opts = poise::FrameworkOptions {
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some("!".into()),
            ..poise::PrefixFrameworkOptions::default()
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_listener(ctx, event, framework, data))
        },
        commands: crate::bot::raw_commands(),
        command_check: Some(|ctx| Box::pin(crate::binutils::command_check(ctx))),
        pre_command: |ctx| {
            Box::pin(async move {
                info!(
                    "Executing command {} for user {} ({})...",
                    ctx.command().qualified_name,
                    ctx.author().name,
                    ctx.author().id
                );
            })
        },
        post_command: |ctx| {
            Box::pin(async move {
                info!(
                    "Done executing command {} for user {} ({})...",
                    ctx.command().qualified_name,
                    ctx.author().name,
                    ctx.author().id
                );
            })
        },
        on_error: |error| Box::pin(crate::binutils::on_error(error)),
        ..Default::default()
    };

    let token = config.discord_token.clone();

    let framework = poise::Framework::builder()
        .options(framework_opts)
        .setup(move |_ctx, _ready, _framework| Box::pin(async move { Ok(Data { config }) }))
        .build();

    let client = serenity::all::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await;

    let mut client = match client {
        Ok(client) => client,
        Err(e) => {
            error!("Error creating client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
        std::process::exit(1);
    }
}
