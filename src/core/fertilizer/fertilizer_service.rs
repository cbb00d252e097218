// Fertilizer dosage calculator.
//
// Recommended doses are per hectare; a plan scales them to the farmer's field
// size. The table is fixed and follows common local extension guidance.

use thiserror::Error;

/// Smallest field we will compute a plan for, in hectares.
pub const MIN_AREA_HA: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Padi,
    Jagung,
    Kedelai,
    Kopi,
    Kakao,
    Kelapa,
    Porang,
}

impl Crop {
    #[cfg(test)]
    pub fn all() -> [Crop; 7] {
        [
            Crop::Padi,
            Crop::Jagung,
            Crop::Kedelai,
            Crop::Kopi,
            Crop::Kakao,
            Crop::Kelapa,
            Crop::Porang,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Padi => "Padi",
            Crop::Jagung => "Jagung",
            Crop::Kedelai => "Kedelai",
            Crop::Kopi => "Kopi",
            Crop::Kakao => "Kakao",
            Crop::Kelapa => "Kelapa",
            Crop::Porang => "Porang",
        }
    }
}

/// One fertilizer in the per-hectare recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub fertilizer: &'static str,
    pub kg_per_ha: u32,
    pub purpose: &'static str,
}

/// Scaled dose for a specific field.
#[derive(Debug, Clone, PartialEq)]
pub struct FertilizerDose {
    pub fertilizer: &'static str,
    pub total_kg: f64,
    pub purpose: &'static str,
}

#[derive(Debug, Error, PartialEq)]
pub enum FertilizerError {
    #[error("Field area must be at least 0.01 ha (got {0})")]
    AreaTooSmall(f64),
}

const fn rec(fertilizer: &'static str, kg_per_ha: u32, purpose: &'static str) -> Recommendation {
    Recommendation {
        fertilizer,
        kg_per_ha,
        purpose,
    }
}

const PADI: &[Recommendation] = &[
    rec("Urea", 250, "Merangsang pertumbuhan daun dan batang"),
    rec("SP-36", 100, "Membentuk akar dan anakan, serta meningkatkan hasil malai"),
    rec("KCl", 100, "Meningkatkan ketahanan terhadap hama/penyakit dan kualitas gabah"),
];

const JAGUNG: &[Recommendation] = &[
    rec("Urea", 300, "Mendorong pertumbuhan vegetatif (daun dan batang)"),
    rec("SP-36", 150, "Meningkatkan perkembangan akar dan pembentukan tongkol"),
    rec("KCl", 100, "Meningkatkan pengisian biji dan ketahanan tanaman"),
];

const KEDELAI: &[Recommendation] = &[
    rec("Urea", 100, "Dosis rendah karena kedelai bisa fiksasi nitrogen sendiri"),
    rec("SP-36", 100, "Mendukung pembentukan bunga dan polong"),
    rec("KCl", 75, "Meningkatkan kualitas dan daya simpan hasil panen"),
];

const KOPI: &[Recommendation] = &[rec(
    "NPK",
    500,
    "Meningkatkan pertumbuhan dan produksi buah kopi",
)];

const KAKAO: &[Recommendation] = &[
    rec("Urea", 150, "Meningkatkan pertumbuhan daun dan buah kakao"),
    rec("TSP", 100, "Meningkatkan pembentukan bunga dan buah"),
    rec("KCl", 150, "Meningkatkan rasa dan mutu biji kakao"),
];

const KELAPA: &[Recommendation] = &[rec(
    "NPK",
    300,
    "Memperbaiki pertumbuhan dan produktivitas kelapa",
)];

const PORANG: &[Recommendation] = &[
    rec("Urea", 200, "Meningkatkan pertumbuhan daun dan umbi porang"),
    rec("KCl", 100, "Meningkatkan pembentukan dan bobot umbi"),
];

/// Per-hectare recommendation for a crop.
pub fn recommendations(crop: Crop) -> &'static [Recommendation] {
    match crop {
        Crop::Padi => PADI,
        Crop::Jagung => JAGUNG,
        Crop::Kedelai => KEDELAI,
        Crop::Kopi => KOPI,
        Crop::Kakao => KAKAO,
        Crop::Kelapa => KELAPA,
        Crop::Porang => PORANG,
    }
}

/// Doses for a field of `area_ha` hectares, rounded to 2 decimals.
pub fn plan(crop: Crop, area_ha: f64) -> Result<Vec<FertilizerDose>, FertilizerError> {
    if !area_ha.is_finite() || area_ha < MIN_AREA_HA {
        return Err(FertilizerError::AreaTooSmall(area_ha));
    }

    Ok(recommendations(crop)
        .iter()
        .map(|r| FertilizerDose {
            fertilizer: r.fertilizer,
            total_kg: round2(f64::from(r.kg_per_ha) * area_ha),
            purpose: r.purpose,
        })
        .collect())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
