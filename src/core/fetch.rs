use crate::core::extract::extract_soil_properties;
use crate::core::query::build_query;
use crate::core::validate::validate_soil_properties;
use crate::domain::model::{Coordinate, RawPropertyPayload, SoilProperties};
use crate::domain::ports::SoilTransport;
use crate::utils::error::{AcquisitionError, Result, SoilError};

/// Query, decode, extract and validate. Every failure along the way comes
/// back as [`SoilError::FetchError`] carrying the cause text.
pub async fn fetch_soil_data<T: SoilTransport + ?Sized>(
    coordinate: Coordinate,
    transport: &T,
) -> Result<SoilProperties> {
    acquire(coordinate, transport).await.map_err(SoilError::fetch)
}

async fn acquire<T: SoilTransport + ?Sized>(
    coordinate: Coordinate,
    transport: &T,
) -> std::result::Result<SoilProperties, AcquisitionError> {
    let query = build_query(coordinate);
    tracing::debug!(
        "Requesting soil properties at lat={}, lon={}",
        query.lat,
        query.lon
    );

    let body = transport.fetch(&query).await?;
    let payload: RawPropertyPayload = serde_json::from_value(body)?;
    tracing::debug!("Payload carries {} layers", payload.properties.layers.len());

    let partial = extract_soil_properties(&payload)?;
    validate_soil_properties(partial)
}
