use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;

// Category definitions in display order
const CATEGORY_ORDER: &[&str] = &["Asisten Tani", "Laporan Warga", "Harga & Pupuk", "Utilitas"];

fn get_category_emoji(category: &str) -> &'static str {
    match category {
        "Asisten Tani" => "🌾",
        "Laporan Warga" => "📋",
        "Harga & Pupuk" => "💰",
        "Utilitas" => "🧰",
        _ => "•",
    }
}

struct CommandMetadata {
    category: &'static str,
    priority: i32,
    description: Option<&'static str>,
    note: Option<&'static str>,
}

fn get_command_metadata(name: &str) -> CommandMetadata {
    match name {
        "ask" => CommandMetadata {
            category: "Asisten Tani",
            priority: 120,
            description: Some("Tanya apa saja seputar bertani, hama, pupuk dan panen."),
            note: Some("Bisa juga dengan menyebut bot di channel."),
        },
        "chat" => CommandMetadata {
            category: "Asisten Tani",
            priority: 100,
            description: Some("Lihat riwayat percakapan atau mulai sesi baru."),
            note: None,
        },
        "report" => CommandMetadata {
            category: "Laporan Warga",
            priority: 90,
            description: Some("Kirim laporan irigasi, hama atau cuaca, lengkap dengan foto."),
            note: None,
        },
        "prices" => CommandMetadata {
            category: "Harga & Pupuk",
            priority: 80,
            description: Some("Harga komoditas per kilogram di Sidrap."),
            note: None,
        },
        "fertilizer" => CommandMetadata {
            category: "Harga & Pupuk",
            priority: 70,
            description: Some("Hitung kebutuhan pupuk sesuai tanaman dan luas lahan."),
            note: None,
        },
        "todo" => CommandMetadata {
            category: "Utilitas",
            priority: 60,
            description: Some("Daftar pengingat kegiatan harian."),
            note: None,
        },
        _ => CommandMetadata {
            category: "Utilitas",
            priority: 0,
            description: None,
            note: None,
        },
    }
}

/// Show what the bot can do
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut categories: HashMap<&str, Vec<(i32, String)>> = HashMap::new();

    for command in &ctx.framework().options().commands {
        if command.hide_in_help || command.name == "help" {
            continue;
        }

        let metadata = get_command_metadata(&command.name);
        let description = metadata
            .description
            .or(command.description.as_deref())
            .unwrap_or("Tidak ada deskripsi.");

        let mut entry = format!("• **/{}**: {}", command.name, description);
        if !command.subcommands.is_empty() {
            let subs: Vec<&str> = command.subcommands.iter().map(|c| c.name.as_str()).collect();
            entry.push_str(&format!(" `{}`", subs.join(" | ")));
        }
        if let Some(note) = metadata.note {
            entry.push_str(&format!("\n  ⤷ {}", note));
        }

        categories
            .entry(metadata.category)
            .or_default()
            .push((metadata.priority, entry));
    }

    let mut embed = serenity::CreateEmbed::new()
        .title("Panduan Bot Tani Sidrap")
        .description("Gunakan perintah dengan `/`. Perintah paling sering dipakai ada di atas.")
        .color(serenity::Colour::from_rgb(46, 139, 87))
        .timestamp(serenity::Timestamp::now());

    let mut sorted_categories: Vec<_> = categories.keys().cloned().collect();
    sorted_categories.sort_by_key(|c| CATEGORY_ORDER.iter().position(|x| x == c).unwrap_or(999));

    for category in sorted_categories {
        if let Some(entries) = categories.get_mut(category) {
            // Priority descending, then name
            entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            let lines: Vec<&str> = entries.iter().map(|(_, s)| s.as_str()).collect();
            embed = embed.field(
                format!("{} {}", get_category_emoji(category), category),
                lines.join("\n"),
                false,
            );
        }
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
