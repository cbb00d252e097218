// Answer FAQ questions when someone mentions the bot in a channel.

use crate::discord::commands::chatbot::reply_embed;
use crate::discord::Data;
use poise::serenity_prelude as serenity;

/// Reply to `message` if it mentions the bot. Messages that only contain the
/// mention get a short usage hint instead of a fallback answer.
pub async fn handle_message(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) -> Result<(), serenity::Error> {
    let bot_id = ctx.cache.current_user().id;
    if !message.mentions.iter().any(|u| u.id == bot_id) {
        return Ok(());
    }

    let question = strip_mention(&message.content, bot_id.get());
    if question.is_empty() {
        message
            .reply(&ctx.http, "Halo! Tulis pertanyaan setelah menyebut saya, atau pakai `/ask`.")
            .await?;
        return Ok(());
    }

    let _ = message.channel_id.broadcast_typing(&ctx.http).await;

    let reply = data.chat.ask(message.author.id.get(), &question);
    message
        .channel_id
        .send_message(
            &ctx.http,
            serenity::CreateMessage::new()
                .embed(reply_embed(&question, &reply))
                .reference_message(message),
        )
        .await?;

    Ok(())
}

/// Remove `<@id>` and `<@!id>` mentions of the bot and tidy the whitespace.
fn strip_mention(content: &str, bot_id: u64) -> String {
    let plain = format!("<@{}>", bot_id);
    let nick = format!("<@!{}>", bot_id);
    content
        .replace(&nick, " ")
        .replace(&plain, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
