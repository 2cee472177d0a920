use chrono::Utc;
use log::info;
use serenity::all::{GetMessages, Member, Mentionable, MessageId, Timestamp, User};

use crate::botlib::durationstring::parse_duration_string;
use crate::botlib::{audit, text};
use crate::{bot, Context, Error};

/// Format the line mirrored to the audit log and the invoking channel.
fn audit_line(action: &str, target: impl std::fmt::Display, reason: Option<&str>) -> String {
    format!(
        "{} {} for: {}",
        action,
        target,
        reason.unwrap_or("No reason provided.")
    )
}

/// Send an action description to the audit log, then echo it back to the
/// invoking channel.
async fn log_and_respond(
    ctx: Context<'_>,
    action: &str,
    target: &User,
    reason: Option<&str>,
) -> Result<(), Error> {
    let line = audit_line(action, target.mention(), reason);
    audit::send_log(ctx.http(), ctx.data().config.log_channel, &line).await;
    ctx.say(line).await?;
    Ok(())
}

/// Delete the most recent messages in the invoking channel.
#[poise::command(prefix_command, guild_only)]
pub async fn cl(ctx: Context<'_>, amount: i64) -> Result<(), Error> {
    if amount < 1 {
        ctx.say(text::CLEAR_NO_POSITIVE).await?;
        return Ok(());
    }

    let channel = ctx.channel_id();
    let mut deleted: u64 = 0;
    let mut remaining = amount as u64;

    // The bulk-delete endpoint takes at most 100 messages per call
    while remaining > 0 {
        let batch = remaining.min(100);
        let messages = channel
            .messages(ctx.http(), GetMessages::new().limit(batch as u8))
            .await?;
        if messages.is_empty() {
            break;
        }

        let ids: Vec<MessageId> = messages.iter().map(|m| m.id).collect();
        let got = ids.len() as u64;
        if got == 1 {
            channel.delete_message(ctx.http(), ids[0]).await?;
        } else {
            channel.delete_messages(ctx.http(), ids).await?;
        }

        deleted += got;
        remaining -= got;
        if got < batch {
            break;
        }
    }

    info!(
        "Cleared {} messages in channel {} for {}",
        deleted,
        channel,
        ctx.author().id
    );

    ctx.say(format!("ลบข้อความ {} ข้อความ", deleted)).await?;
    Ok(())
}

/// Ban a member from the server.
#[poise::command(prefix_command, guild_only)]
pub async fn ban(
    ctx: Context<'_>,
    member: Member,
    #[rest] reason: Option<String>,
) -> Result<(), Error> {
    let reason = reason.as_deref();
    member
        .ban_with_reason(ctx.http(), 0, reason.unwrap_or("No reason provided."))
        .await?;

    log_and_respond(ctx, "Banned", &member.user, reason).await
}

/// Kick a member from the server.
#[poise::command(prefix_command, guild_only)]
pub async fn kick(
    ctx: Context<'_>,
    member: Member,
    #[rest] reason: Option<String>,
) -> Result<(), Error> {
    let reason = reason.as_deref();
    member
        .kick_with_reason(ctx.http(), reason.unwrap_or("No reason provided."))
        .await?;

    log_and_respond(ctx, "Kicked", &member.user, reason).await
}

/// Restrict a member's communication for a duration such as `10s`, `5m` or
/// `2h`.
#[poise::command(prefix_command, guild_only)]
pub async fn timeout(
    ctx: Context<'_>,
    mut member: Member,
    duration: String,
) -> Result<(), Error> {
    let Ok((amount, unit)) = parse_duration_string(&duration) else {
        ctx.say(text::TIMEOUT_BAD_ARG).await?;
        if let Some(usage) = bot::usage("timeout") {
            ctx.say(usage).await?;
        }
        return Ok(());
    };

    let seconds = amount.saturating_mul(unit.to_seconds());
    let until = Utc::now() + chrono::Duration::seconds(seconds.min(i64::MAX as u64) as i64);
    member
        .disable_communication_until_datetime(
            ctx.http(),
            Timestamp::from_unix_timestamp(until.timestamp())?,
        )
        .await?;

    let line = format!("Timed out {} for {}.", member.user.mention(), duration);
    audit::send_log(ctx.http(), ctx.data().config.log_channel, &line).await;
    ctx.say(line).await?;
    Ok(())
}

/// Add a role to a member or remove one from them.
#[poise::command(prefix_command, guild_only)]
pub async fn role(
    ctx: Context<'_>,
    action: String,
    member: Member,
    #[rest] role: serenity::all::Role,
) -> Result<(), Error> {
    match action.as_str() {
        "add" => {
            member.add_role(ctx.http(), role.id).await?;
            log_and_respond(ctx, "Added role", &member.user, Some(role.name.as_str())).await
        }
        "remove" => {
            member.remove_role(ctx.http(), role.id).await?;
            log_and_respond(ctx, "Removed role", &member.user, Some(role.name.as_str())).await
        }
        _ => {
            ctx.say(text::ROLE_BAD_ARG).await?;
            if let Some(usage) = bot::usage("role") {
                ctx.say(usage).await?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::UserId;

    #[test]
    fn audit_line_with_a_reason() {
        let mention = UserId::new(526498931571064842).mention();
        let line = audit_line("Banned", mention, Some("spam"));
        assert_eq!(line, "Banned <@526498931571064842> for: spam");
    }

    #[test]
    fn audit_line_defaults_the_reason() {
        let mention = UserId::new(526498931571064842).mention();
        let line = audit_line("Kicked", mention, None);
        assert_eq!(line, "Kicked <@526498931571064842> for: No reason provided.");
    }
}
