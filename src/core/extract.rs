use crate::domain::model::{PartialSoilProperties, RawPropertyPayload, SoilProperty};
use crate::utils::error::AcquisitionError;

/// Maps the mean of each layer's first depth band onto its domain field.
///
/// A null mean and a mean of exactly zero are both treated as "no data", so a
/// genuine zero reading is reported as missing. A layer without any depth band
/// makes the whole payload malformed.
pub fn extract_soil_properties(
    payload: &RawPropertyPayload,
) -> Result<PartialSoilProperties, AcquisitionError> {
    let mut properties = PartialSoilProperties::default();

    for layer in &payload.properties.layers {
        let band = layer
            .depths
            .first()
            .ok_or_else(|| AcquisitionError::MalformedPayload {
                message: format!("layer '{}' has no depth bands", layer.name),
            })?;

        let Some(mean) = band.values.mean.filter(|m| *m != 0.0) else {
            tracing::debug!("Layer '{}' has no usable mean", layer.name);
            continue;
        };

        match SoilProperty::from_code(&layer.name) {
            Some(property) => properties.set(property, mean / property.scale_divisor()),
            None => tracing::debug!("Ignoring unrecognized layer '{}'", layer.name),
        }
    }

    Ok(properties)
}
