use log::warn;
use serenity::all::{ChannelId, CreateMessage, Http};

/// Send one entry to the audit log channel.
///
/// Best effort: if the channel cannot be resolved or the send fails, the
/// entry is dropped without retrying.
pub async fn send_log(http: &Http, channel: ChannelId, message: &str) {
    let builder = CreateMessage::new().content(message);

    if let Err(e) = channel.send_message(http, builder).await {
        warn!("Dropping audit entry for channel {}: {}", channel, e);
    }
}
