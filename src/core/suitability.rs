use crate::core::fetch::fetch_soil_data;
use crate::domain::model::{
    Coordinate, SoilProperties, SuitabilityCriteria, SuitabilityVerdict, TextureCriterion,
    ValueCriterion,
};
use crate::domain::ports::SoilTransport;
use crate::utils::error::{Result, SoilError};

/// Exclusive bounds.
pub const PH_RANGE: (f64, f64) = (5.5, 7.5);
pub const MIN_ORGANIC_CARBON: f64 = 1.5;
/// Exclusive bounds, percent.
pub const CLAY_RANGE: (f64, f64) = (20.0, 30.0);
pub const MIN_SILT: f64 = 30.0;
pub const MIN_CRITERIA_MET: u8 = 2;

/// Fetches soil data for `coordinate` and scores it. A failed fetch comes back
/// exactly as [`fetch_soil_data`] reported it.
pub async fn analyze_soil_suitability<T: SoilTransport + ?Sized>(
    coordinate: Coordinate,
    transport: &T,
) -> Result<SuitabilityVerdict> {
    let soil = fetch_soil_data(coordinate, transport).await?;
    evaluate_suitability(&soil)
}

/// Scores already-validated soil data against the pH, organic carbon and
/// texture criteria. Soil is suitable when at least two of the three hold.
pub fn evaluate_suitability(soil: &SoilProperties) -> Result<SuitabilityVerdict> {
    ensure_finite(soil)?;

    let ph_suitable = PH_RANGE.0 < soil.ph && soil.ph < PH_RANGE.1;
    let organic_carbon_suitable = soil.organic_carbon > MIN_ORGANIC_CARBON;
    // TODO: confirm with the agronomy owners whether silt was meant to be
    // compared against clay. As written, clay and silt are checked
    // independently: clay in (20, 30) and silt above 30.
    let texture_suitable = CLAY_RANGE.0 < soil.clay_content
        && soil.clay_content < CLAY_RANGE.1
        && MIN_SILT < soil.silt_content;

    let score = [ph_suitable, organic_carbon_suitable, texture_suitable]
        .into_iter()
        .filter(|met| *met)
        .count() as u8;

    tracing::debug!(
        "Suitability: pH={} organic_carbon={} texture={} (score {}/3)",
        ph_suitable,
        organic_carbon_suitable,
        texture_suitable,
        score
    );

    Ok(SuitabilityVerdict {
        suitable: score >= MIN_CRITERIA_MET,
        score,
        criteria: SuitabilityCriteria {
            ph: ValueCriterion {
                value: soil.ph,
                suitable: ph_suitable,
            },
            organic_carbon: ValueCriterion {
                value: soil.organic_carbon,
                suitable: organic_carbon_suitable,
            },
            texture: TextureCriterion {
                clay: soil.clay_content,
                silt: soil.silt_content,
                sand: soil.sand_content,
                suitable: texture_suitable,
            },
        },
    })
}

fn ensure_finite(soil: &SoilProperties) -> Result<()> {
    let fields = [
        ("pH", soil.ph),
        ("organic_carbon", soil.organic_carbon),
        ("clay_content", soil.clay_content),
        ("sand_content", soil.sand_content),
        ("silt_content", soil.silt_content),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(SoilError::processing(format!(
            "{} is not a finite number ({})",
            name, value
        ))),
        None => Ok(()),
    }
}
