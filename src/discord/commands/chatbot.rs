// Discord commands for the FAQ chatbot
//
// 1. Pass the question to the chat service
// 2. Format the reply (and the session transcript) as embeds

use crate::core::faq::{ChatReply, ChatTurn, Speaker};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

const CHAT_COLOR: u32 = 0x2E8B57; // Sea green

// Discord caps embed descriptions at 4096 characters.
const HISTORY_CHAR_BUDGET: usize = 3800;

/// Ask the farming assistant a question
#[poise::command(slash_command)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question, e.g. \"mengapa padi saya kuning\""] question: String,
) -> Result<(), Error> {
    let reply = ctx.data().chat.ask(ctx.author().id.get(), &question);
    let embed = reply_embed(&question, &reply);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Build the embed shown for one chatbot answer. Also used for mentions.
pub fn reply_embed(question: &str, reply: &ChatReply) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title("🌾 Asisten Tani Sidrap")
        .color(CHAT_COLOR)
        .field("Pertanyaan", truncate(question, 1000), false)
        .description(reply.text.clone());

    if let (Some(matched), Some(score)) = (&reply.matched_question, reply.score) {
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Cocok dengan: \"{}\" ({:.0}%)",
            matched, score
        )));
    }

    embed
}

/// Manage your chat session with the assistant
#[poise::command(slash_command, subcommands("history", "reset"))]
pub async fn chat(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Show your conversation with the assistant
#[poise::command(slash_command)]
pub async fn history(ctx: Context<'_>) -> Result<(), Error> {
    let turns = ctx.data().chat.history(ctx.author().id.get());

    if turns.is_empty() {
        ctx.send(
            poise::CreateReply::default()
                .content("Belum ada percakapan. Coba `/ask` dulu.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let embed = serenity::CreateEmbed::new()
        .title("💬 Riwayat Percakapan")
        .description(format_history(&turns, HISTORY_CHAR_BUDGET))
        .color(CHAT_COLOR)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "{} pesan dalam sesi ini",
            turns.len()
        )));

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

/// Clear your conversation with the assistant
#[poise::command(slash_command)]
pub async fn reset(ctx: Context<'_>) -> Result<(), Error> {
    let dropped = ctx.data().chat.end_session(ctx.author().id.get());
    tracing::info!(user_id = ctx.author().id.get(), dropped, "Chat session ended");

    ctx.send(
        poise::CreateReply::default()
            .content(format!("🧹 Sesi dihapus ({} pesan).", dropped))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Render the most recent turns that fit in `budget` characters, oldest first.
fn format_history(turns: &[ChatTurn], budget: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut used = 0;

    for turn in turns.iter().rev() {
        let speaker = match turn.speaker {
            Speaker::User => "🧑‍🌾 **Anda**",
            Speaker::Bot => "🤖 **Asisten**",
        };
        let line = format!("{}: {}", speaker, truncate(&turn.text, 500));
        let cost = line.chars().count() + 1;
        if used + cost > budget {
            break;
        }
        used += cost;
        lines.push(line);
    }

    lines.reverse();
    lines.join("\n")
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(speaker: Speaker, text: &str) -> ChatTurn {
        ChatTurn {
            speaker,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_format_history_keeps_order() {
        let turns = vec![
            turn(Speaker::User, "padi kuning"),
            turn(Speaker::Bot, "Kurang nitrogen."),
        ];
        let text = format_history(&turns, 1000);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("padi kuning"));
        assert!(lines[1].ends_with("Kurang nitrogen."));
    }

    #[test]
    fn test_format_history_drops_oldest_when_over_budget() {
        let turns = vec![
            turn(Speaker::User, "pertanyaan pertama yang cukup panjang"),
            turn(Speaker::Bot, "jawaban terakhir"),
        ];
        let text = format_history(&turns, 40);
        assert!(text.contains("jawaban terakhir"));
        assert!(!text.contains("pertanyaan pertama"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("sawah", 10), "sawah");
        assert_eq!(truncate("sawahku", 5), "sawah…");
    }
}
