use crate::core::fetch::fetch_soil_data;
use crate::core::suitability::analyze_soil_suitability;
use crate::domain::model::{Coordinate, SoilProperties, SuitabilityVerdict};
use crate::domain::ports::SoilTransport;
use crate::utils::error::Result;

/// Inbound surface for the two read-only queries. Coordinates are checked
/// here, before anything reaches the core, and every failure is logged on
/// its way out.
pub struct SoilService<T: SoilTransport> {
    transport: T,
}

impl<T: SoilTransport> SoilService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn soil_info(&self, lat: f64, lon: f64) -> Result<SoilProperties> {
        tracing::info!("Soil info requested for lat={}, lon={}", lat, lon);

        let result = match Coordinate::new(lat, lon) {
            Ok(coordinate) => fetch_soil_data(coordinate, &self.transport).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::error!("soil_info failed ({:?}): {}", e.category(), e);
        }
        result
    }

    pub async fn soil_suitability(&self, lat: f64, lon: f64) -> Result<SuitabilityVerdict> {
        tracing::info!("Soil suitability requested for lat={}, lon={}", lat, lon);

        let result = match Coordinate::new(lat, lon) {
            Ok(coordinate) => analyze_soil_suitability(coordinate, &self.transport).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(verdict) => tracing::info!(
                "Suitability for lat={}, lon={}: {} ({}/3 criteria)",
                lat,
                lon,
                verdict.suitable,
                verdict.score
            ),
            Err(e) => tracing::error!("soil_suitability failed ({:?}): {}", e.category(), e),
        }
        result
    }
}
