use crate::core::fertilizer::{plan, Crop, FertilizerDose, FertilizerError};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum CropChoice {
    Padi,
    Jagung,
    Kedelai,
    Kopi,
    Kakao,
    Kelapa,
    Porang,
}

impl From<CropChoice> for Crop {
    fn from(choice: CropChoice) -> Self {
        match choice {
            CropChoice::Padi => Crop::Padi,
            CropChoice::Jagung => Crop::Jagung,
            CropChoice::Kedelai => Crop::Kedelai,
            CropChoice::Kopi => Crop::Kopi,
            CropChoice::Kakao => Crop::Kakao,
            CropChoice::Kelapa => Crop::Kelapa,
            CropChoice::Porang => Crop::Porang,
        }
    }
}

/// Calculate fertilizer needs for your field
#[poise::command(slash_command)]
pub async fn fertilizer(
    ctx: Context<'_>,
    #[description = "Crop you are growing"] crop: CropChoice,
    #[description = "Field area in hectares, e.g. 0.5"] area: f64,
) -> Result<(), Error> {
    let crop: Crop = crop.into();

    let doses = match plan(crop, area) {
        Ok(doses) => doses,
        Err(FertilizerError::AreaTooSmall(_)) => {
            ctx.say("⚠️ Luas lahan minimal 0.01 ha.").await?;
            return Ok(());
        }
    };

    let mut embed = serenity::CreateEmbed::new()
        .title(format!("🧪 Kebutuhan Pupuk {}", crop.name()))
        .description(format!("Untuk lahan seluas **{} ha**:", area))
        .color(0x27AE60); // Green

    for dose in &doses {
        embed = embed.field(dose_title(dose), dose.purpose, false);
    }

    embed = embed.footer(serenity::CreateEmbedFooter::new(
        "Dosis umum per hektar. Sesuaikan dengan hasil uji tanah bila ada.",
    ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn dose_title(dose: &FertilizerDose) -> String {
    format!("{}: {:.2} kg", dose.fertilizer, dose.total_kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_title() {
        let doses = plan(CropChoice::Padi.into(), 0.5).unwrap();
        assert_eq!(dose_title(&doses[0]), "Urea: 125.00 kg");
    }
}
