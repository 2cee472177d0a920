use poise::CreateReply;
use serenity::all::{Colour, CreateEmbed};

use crate::{bot, Context, Error};

const EMBED_GREEN: Colour = Colour::new(0x00FF00);

/// Show the invoking guild's name and member count.
#[poise::command(prefix_command, guild_only)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let (name, member_count) = {
        let Some(guild) = ctx.guild() else {
            return Err("This command can only be run from servers".into());
        };
        (guild.name.clone(), guild.member_count)
    };

    let embed = CreateEmbed::new()
        .title("Server Information")
        .description(format!(
            "Server Name: {}\nMember Count: {}",
            name, member_count
        ))
        .colour(EMBED_GREEN);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// List every documented command.
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut embed = CreateEmbed::new().title("Help Commands").colour(EMBED_GREEN);

    for (name, meta) in bot::command_metadata() {
        if let Some(usage) = meta.usage {
            embed = embed.field(name, usage, false);
        }
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
