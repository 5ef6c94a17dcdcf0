use crate::core::query::QueryParameters;
use crate::domain::ports::SoilTransport;
use crate::utils::error::AcquisitionError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Layers whose means convert to clay=30, organic carbon=5, pH=6.5, sand=40,
/// silt=30.
pub fn complete_payload() -> serde_json::Value {
    serde_json::json!({
        "properties": {
            "layers": [
                {"name": "clay", "depths": [{"values": {"mean": 300}}]},
                {"name": "ocd", "depths": [{"values": {"mean": 500}}]},
                {"name": "phh2o", "depths": [{"values": {"mean": 65}}]},
                {"name": "sand", "depths": [{"values": {"mean": 400}}]},
                {"name": "silt", "depths": [{"values": {"mean": 300}}]}
            ]
        }
    })
}

pub struct StaticTransport {
    body: serde_json::Value,
    queries: Mutex<Vec<QueryParameters>>,
}

impl StaticTransport {
    pub fn new(body: serde_json::Value) -> Self {
        Self {
            body,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<QueryParameters> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoilTransport for StaticTransport {
    async fn fetch(
        &self,
        query: &QueryParameters,
    ) -> std::result::Result<serde_json::Value, AcquisitionError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.body.clone())
    }
}

pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl SoilTransport for FailingTransport {
    async fn fetch(
        &self,
        _query: &QueryParameters,
    ) -> std::result::Result<serde_json::Value, AcquisitionError> {
        Err(AcquisitionError::Transport {
            message: self.message.clone(),
        })
    }
}
