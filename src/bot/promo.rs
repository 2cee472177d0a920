use poise::CreateReply;
use serenity::all::{Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter};

use crate::{Context, Error};

const DOWNLOAD_LINKS: [(&str, &str); 9] = [
    ("Arceus X", "https://spdmteam.com/index?os=android"),
    ("Delta-Android", "https://deltaexploits.gg/delta-executor-mobile"),
    ("Delta-iOS", "https://deltaexploits.gg/delta-executor-ios"),
    ("CodeX", "https://codex.lol/android"),
    ("Fluxus", "https://fluxteam.cc/android"),
    ("Apple-Ware", "https://appleware.dev/download"),
    ("Cryptic", "https://getcryptic.net/"),
    ("Solara", "https://getsolara.dev/download"),
    ("Wave", "https://getwave.gg/"),
];

const BANNER_URL: &str = "https://cdn.discordapp.com/attachments/1147962239618383873/1302024437813477446/9cec0437907931599f4c953f19232066.gif?ex=67269c40&is=67254ac0&hm=31a8d98d9e41e54c1461f61a60fe1a684b6d597ee93a8b1c0a7df59de691664f&";

/// Post the download embed with one link button per executor.
#[poise::command(prefix_command, guild_only)]
pub async fn ex(ctx: Context<'_>) -> Result<(), Error> {
    let buttons: Vec<CreateButton> = DOWNLOAD_LINKS
        .iter()
        .map(|(label, url)| CreateButton::new_link(*url).label(*label))
        .collect();

    // An action row holds at most five buttons
    let components: Vec<CreateActionRow> = buttons
        .chunks(5)
        .map(|row| CreateActionRow::Buttons(row.to_vec()))
        .collect();

    let embed = CreateEmbed::new()
        .title("🌟 Click Button to Download Roblox Executor! 🌟")
        .description("เลือกตัวรันที่คุณต้องการใช้")
        .colour(Colour::new(0xFF0000))
        .image(BANNER_URL)
        .footer(CreateEmbedFooter::new(
            "BOT // POWERED BY .wavechayakon // VERSION 1.0",
        ));

    ctx.send(CreateReply::default().embed(embed).components(components))
        .await?;
    Ok(())
}
