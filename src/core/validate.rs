use crate::domain::model::{PartialSoilProperties, SoilProperties};
use crate::utils::error::AcquisitionError;

pub fn validate_soil_properties(
    properties: PartialSoilProperties,
) -> Result<SoilProperties, AcquisitionError> {
    match properties {
        PartialSoilProperties {
            clay_content: Some(clay_content),
            organic_carbon: Some(organic_carbon),
            ph: Some(ph),
            sand_content: Some(sand_content),
            silt_content: Some(silt_content),
        } => Ok(SoilProperties {
            clay_content,
            organic_carbon,
            ph,
            sand_content,
            silt_content,
        }),
        partial => Err(AcquisitionError::IncompleteData {
            missing: partial.missing().iter().map(|p| p.field_name()).collect(),
        }),
    }
}
