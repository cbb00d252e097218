// Discord commands for the commodity price board

use crate::core::records::{PriceEntry, RecordError};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

const PRICE_COLOR: u32 = 0xF1C40F; // Gold

/// Local commodity prices per kilogram
#[poise::command(slash_command, subcommands("list", "set", "remove"))]
pub async fn prices(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Show current commodity prices
#[poise::command(slash_command)]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    let entries = ctx.data().prices.list().await;

    let embed = serenity::CreateEmbed::new()
        .title("💰 Harga Komoditas Sidrap")
        .description(price_table(&entries))
        .color(PRICE_COLOR)
        .footer(serenity::CreateEmbedFooter::new("Harga per kilogram"))
        .timestamp(serenity::Timestamp::now());

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Set the price of a commodity (adds it if new)
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_MESSAGES")]
pub async fn set(
    ctx: Context<'_>,
    #[description = "Commodity name, e.g. Padi"] commodity: String,
    #[description = "Price per kg in Rupiah"]
    #[min = 0]
    price: i64,
) -> Result<(), Error> {
    match ctx.data().prices.set_price(&commodity, price).await {
        Ok(entry) => {
            tracing::info!(
                commodity = %entry.commodity,
                price = entry.price_per_kg,
                user_id = ctx.author().id.get(),
                "Price updated"
            );
            ctx.say(format!(
                "✅ Harga **{}** sekarang {} /kg.",
                entry.commodity,
                format_rupiah(entry.price_per_kg)
            ))
            .await?;
        }
        Err(RecordError::Store(e)) => {
            tracing::error!(error = %e, "Failed to save prices");
            return Err(e.into());
        }
        Err(_) => {
            ctx.say("⚠️ Nama komoditas wajib diisi.").await?;
        }
    }

    Ok(())
}

/// Remove a commodity from the price board
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_MESSAGES")]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Commodity name"] commodity: String,
) -> Result<(), Error> {
    match ctx.data().prices.remove_commodity(&commodity).await {
        Ok(Some(entry)) => {
            tracing::info!(commodity = %entry.commodity, "Commodity removed from price board");
            ctx.say(format!("🗑️ **{}** dihapus dari daftar harga.", entry.commodity))
                .await?;
        }
        Ok(None) => {
            ctx.say(format!("Komoditas **{}** tidak ada di daftar.", commodity.trim()))
                .await?;
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save prices");
            return Err(e.into());
        }
    }

    Ok(())
}

fn price_table(entries: &[PriceEntry]) -> String {
    if entries.is_empty() {
        return "Belum ada data harga.".to_string();
    }

    entries
        .iter()
        .map(|e| format!("**{}**: {} /kg", e.commodity, format_rupiah(e.price_per_kg)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `7000` -> `Rp. 7,000`
pub fn format_rupiah(amount: i64) -> String {
    format!("Rp. {}", format_number(amount))
}

/// Format a number with commas for readability
fn format_number(n: i64) -> String {
    let s = n.to_string();
    let negative = s.starts_with('-');
    let s = if negative { &s[1..] } else { &s };

    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    if negative {
        result.insert(0, '-');
    }

    result
}
