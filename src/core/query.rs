use crate::domain::model::{Coordinate, SoilProperty};

pub const DEPTH_BAND: &str = "0-5cm";

/// The provider rejects queries that omit any of these, even though only
/// `mean` is read back.
pub const STATISTICS: [&str; 5] = ["Q0.05", "Q0.5", "Q0.95", "mean", "uncertainty"];

#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    pub lon: f64,
    pub lat: f64,
    pub properties: Vec<&'static str>,
    pub depths: Vec<&'static str>,
    pub values: Vec<&'static str>,
}

impl QueryParameters {
    /// Flattens into repeated `key=value` pairs, the form the provider expects
    /// for list parameters (`property=phh2o&property=clay&...`).
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("lon", self.lon.to_string()), ("lat", self.lat.to_string())];
        pairs.extend(self.properties.iter().map(|p| ("property", p.to_string())));
        pairs.extend(self.depths.iter().map(|d| ("depth", d.to_string())));
        pairs.extend(self.values.iter().map(|v| ("value", v.to_string())));
        pairs
    }
}

pub fn build_query(coordinate: Coordinate) -> QueryParameters {
    QueryParameters {
        lon: coordinate.lon(),
        lat: coordinate.lat(),
        properties: SoilProperty::ALL.iter().map(|p| p.code()).collect(),
        depths: vec![DEPTH_BAND],
        values: STATISTICS.to_vec(),
    }
}
