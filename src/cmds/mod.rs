use clap::Parser;

mod bot;
mod webhook;

#[derive(Parser, Debug)]
#[command(name = "modbot", about = "Moderation bot and helper tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(clap::Subcommand, Debug)]
enum Cmd {
    /// Run the Discord gateway client
    Bot,
    /// Send a one-shot message to a webhook
    Webhook(webhook::WebhookArgs),
}

pub async fn cmd_loader() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Cmd::Bot) {
        Cmd::Bot => bot::start().await,
        Cmd::Webhook(args) => webhook::send(args).await,
    }
}
