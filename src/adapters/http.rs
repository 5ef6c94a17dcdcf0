use crate::core::query::QueryParameters;
use crate::domain::ports::{ConfigProvider, SoilTransport};
use crate::utils::error::AcquisitionError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// SoilGrids transport. A fresh `reqwest::Client` is built for each call and
/// dropped before the call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            endpoint: config.api_endpoint().to_string(),
            timeout: config.timeout_seconds().map(Duration::from_secs),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session(&self) -> Result<Client, AcquisitionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    async fn get(&self, query: &QueryParameters) -> Result<serde_json::Value, AcquisitionError> {
        let session = self.session()?;

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = session
            .get(&self.endpoint)
            .query(&query.to_pairs())
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        tracing::debug!("Successfully retrieved soil data: {}", body);
        Ok(body)
    }
}

#[async_trait]
impl SoilTransport for HttpTransport {
    async fn fetch(&self, query: &QueryParameters) -> Result<serde_json::Value, AcquisitionError> {
        self.get(query).await.inspect_err(|e| {
            tracing::error!("Error making request to SoilGrids API: {}", e);
        })
    }
}
