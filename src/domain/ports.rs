use crate::core::query::QueryParameters;
use crate::utils::error::AcquisitionError;
use async_trait::async_trait;

/// One round trip to the soil data provider. Implementations return the raw
/// JSON body; decoding it is left to the core.
#[async_trait]
pub trait SoilTransport: Send + Sync {
    async fn fetch(
        &self,
        query: &QueryParameters,
    ) -> std::result::Result<serde_json::Value, AcquisitionError>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn log_level(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
