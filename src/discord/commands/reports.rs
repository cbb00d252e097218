// Discord commands for citizen reports
//
// 1. Collect the form fields (and optional photo) from the slash command
// 2. Call the report service
// 3. Show validation problems inline, everything else as embeds

use super::chatbot::truncate;
use crate::core::records::{ImageUpload, NewReport, RecordError, Report, ReportCategory};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use std::ops::Range;
use std::path::Path;

const REPORT_COLOR: u32 = 0xE67E22; // Orange
const REPORTS_PER_PAGE: usize = 5;

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum CategoryChoice {
    #[name = "Masalah Irigasi"]
    Irrigation,
    #[name = "Gangguan Hama"]
    Pest,
    #[name = "Kondisi Cuaca"]
    Weather,
    #[name = "Lainnya"]
    Other,
}

impl From<CategoryChoice> for ReportCategory {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Irrigation => ReportCategory::IrrigationProblem,
            CategoryChoice::Pest => ReportCategory::PestOutbreak,
            CategoryChoice::Weather => ReportCategory::WeatherCondition,
            CategoryChoice::Other => ReportCategory::Other,
        }
    }
}

/// Citizen reports about irrigation, pests and weather
#[poise::command(slash_command, subcommands("submit", "list", "delete"))]
pub async fn report(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Submit a report from the field
#[poise::command(slash_command)]
pub async fn submit(
    ctx: Context<'_>,
    #[description = "Your name"] name: String,
    #[description = "Phone or WhatsApp number"] contact: String,
    #[description = "What kind of problem"] category: CategoryChoice,
    #[description = "What is happening"] description: String,
    #[description = "Village or field location"] location: Option<String>,
    #[description = "Photo of the problem (png, jpg, jpeg)"] photo: Option<serenity::Attachment>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let image = match photo {
        Some(attachment) => Some(ImageUpload {
            file_name: attachment.filename.clone(),
            bytes: attachment.download().await?,
        }),
        None => None,
    };

    let new = NewReport {
        name,
        contact,
        category: category.into(),
        location: location.unwrap_or_default(),
        description,
        image,
    };

    let (index, report) = match ctx.data().reports.submit(new).await {
        Ok(submitted) => submitted,
        Err(RecordError::Store(e)) => {
            tracing::error!(error = %e, "Failed to save report");
            return Err(e.into());
        }
        Err(e) => {
            ctx.say(validation_message(&e)).await?;
            return Ok(());
        }
    };

    let embed = report_embed(index, &report)
        .title("✅ Laporan terkirim")
        .footer(serenity::CreateEmbedFooter::new(
            "Terima kasih! Laporan Anda akan ditindaklanjuti.",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// List submitted reports
#[poise::command(slash_command)]
pub async fn list(
    ctx: Context<'_>,
    #[description = "Page number (5 reports per page)"]
    #[min = 1]
    page: Option<u32>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let reports = ctx.data().reports.list().await;
    if reports.is_empty() {
        ctx.say("📭 Belum ada laporan warga.").await?;
        return Ok(());
    }

    let page = page.unwrap_or(1) as usize;
    let Some(range) = page_range(reports.len(), page, REPORTS_PER_PAGE) else {
        ctx.say(format!(
            "Halaman {} tidak ada. Total {} halaman.",
            page,
            page_count(reports.len(), REPORTS_PER_PAGE)
        ))
        .await?;
        return Ok(());
    };

    let mut reply = poise::CreateReply::default().content(format!(
        "📋 **Laporan Warga** · halaman {}/{} ({} laporan)",
        page,
        page_count(reports.len(), REPORTS_PER_PAGE),
        reports.len()
    ));

    for index in range {
        let report = &reports[index];
        let mut embed = report_embed(index, report);

        if let Some(path) = &report.image_path {
            match ctx.data().reports.image(report).await {
                Ok(Some(bytes)) => {
                    let file_name = attachment_name(index, path);
                    embed = embed.image(format!("attachment://{}", file_name));
                    reply = reply.attachment(serenity::CreateAttachment::bytes(bytes, file_name));
                }
                Ok(None) => {
                    embed = embed.field("⚠️ Foto", "File foto tidak ditemukan.", false);
                }
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Failed to read report image");
                    embed = embed.field("⚠️ Foto", "File foto tidak dapat dibaca.", false);
                }
            }
        }

        reply = reply.embed(embed);
    }

    ctx.send(reply).await?;
    Ok(())
}

/// Delete a report (and its photo)
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_MESSAGES")]
pub async fn delete(
    ctx: Context<'_>,
    #[description = "Report number as shown in /report list"]
    #[min = 1]
    number: u32,
) -> Result<(), Error> {
    let Some(index) = (number as usize).checked_sub(1) else {
        ctx.say("Nomor laporan dimulai dari 1.").await?;
        return Ok(());
    };

    match ctx.data().reports.delete(index).await {
        Ok(Some(report)) => {
            tracing::info!(index, user_id = ctx.author().id.get(), "Report deleted");
            ctx.say(format!(
                "🗑️ Laporan #{} dari **{}** ({}) dihapus.",
                number,
                report.name,
                report.category.label()
            ))
            .await?;
        }
        Ok(None) => {
            ctx.say(format!("Laporan #{} tidak ditemukan.", number))
                .await?;
        }
        Err(e) => {
            tracing::error!(error = %e, index, "Failed to delete report");
            return Err(e.into());
        }
    }

    Ok(())
}

fn report_embed(index: usize, report: &Report) -> serenity::CreateEmbed {
    let location = if report.location.is_empty() {
        "-"
    } else {
        report.location.as_str()
    };

    serenity::CreateEmbed::new()
        .title(format!("#{} · {}", index + 1, report.category.label()))
        .color(REPORT_COLOR)
        .field("🕒 Waktu", &report.timestamp, true)
        .field(
            "👤 Pelapor",
            format!("{} ({})", report.name, report.contact),
            true,
        )
        .field("📍 Lokasi", location, true)
        .field("📝 Deskripsi", truncate(&report.description, 1000), false)
}

fn validation_message(err: &RecordError) -> String {
    match err {
        RecordError::MissingField(field) => {
            let label = match *field {
                "name" => "Nama",
                "contact" => "Kontak",
                "description" => "Deskripsi",
                other => other,
            };
            format!("⚠️ {} wajib diisi. Laporan belum disimpan.", label)
        }
        RecordError::UnsupportedImage(name) => format!(
            "⚠️ Format foto `{}` tidak didukung. Gunakan png, jpg, atau jpeg.",
            name
        ),
        RecordError::Store(e) => format!("❌ Gagal menyimpan laporan: {}", e),
    }
}

/// Attachment names must be unique within one message.
fn attachment_name(index: usize, image_path: &str) -> String {
    let extension = Path::new(image_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();
    format!("laporan_{}.{}", index + 1, extension)
}

fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page).max(1)
}

/// Indices shown on 1-based `page`, `None` past the last page.
fn page_range(total: usize, page: usize, per_page: usize) -> Option<Range<usize>> {
    if page == 0 {
        return None;
    }
    let start = (page - 1) * per_page;
    if start >= total {
        return None;
    }
    Some(start..(start + per_page).min(total))
}
