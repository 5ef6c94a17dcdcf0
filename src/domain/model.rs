use crate::utils::error::Result;
use crate::utils::validation::{validate_coordinate_component, LATITUDE_RANGE, LONGITUDE_RANGE};
use serde::{Deserialize, Serialize};

/// A validated point on the globe. The only way to build one is through
/// [`Coordinate::new`], so the core never re-checks ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        validate_coordinate_component("lat", lat, LATITUDE_RANGE)?;
        validate_coordinate_component("lon", lon, LONGITUDE_RANGE)?;
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// The five soil properties requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilProperty {
    Ph,
    Clay,
    OrganicCarbon,
    Sand,
    Silt,
}

impl SoilProperty {
    /// Query order used by the provider request.
    pub const ALL: [SoilProperty; 5] = [
        SoilProperty::Ph,
        SoilProperty::Clay,
        SoilProperty::OrganicCarbon,
        SoilProperty::Sand,
        SoilProperty::Silt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SoilProperty::Ph => "phh2o",
            SoilProperty::Clay => "clay",
            SoilProperty::OrganicCarbon => "ocd",
            SoilProperty::Sand => "sand",
            SoilProperty::Silt => "silt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Provider values are stored as scaled integers; dividing by this
    /// yields percent, pH units, or the provider's carbon density unit.
    pub fn scale_divisor(&self) -> f64 {
        match self {
            SoilProperty::OrganicCarbon => 100.0,
            _ => 10.0,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            SoilProperty::Ph => "pH",
            SoilProperty::Clay => "clay_content",
            SoilProperty::OrganicCarbon => "organic_carbon",
            SoilProperty::Sand => "sand_content",
            SoilProperty::Silt => "silt_content",
        }
    }
}

// Provider payload. Unknown fields are ignored by serde.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPropertyPayload {
    pub properties: PropertyCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCollection {
    pub layers: Vec<PropertyLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyLayer {
    pub name: String,
    #[serde(default)]
    pub depths: Vec<DepthBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthBand {
    #[serde(default)]
    pub label: Option<String>,
    pub values: DepthStatistics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepthStatistics {
    pub mean: Option<f64>,
    #[serde(rename = "Q0.05", default)]
    pub q05: Option<f64>,
    #[serde(rename = "Q0.5", default)]
    pub q50: Option<f64>,
    #[serde(rename = "Q0.95", default)]
    pub q95: Option<f64>,
    #[serde(default)]
    pub uncertainty: Option<f64>,
}

/// Extractor output: any of the five fields may still be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialSoilProperties {
    pub clay_content: Option<f64>,
    pub organic_carbon: Option<f64>,
    pub ph: Option<f64>,
    pub sand_content: Option<f64>,
    pub silt_content: Option<f64>,
}

impl PartialSoilProperties {
    pub fn get(&self, property: SoilProperty) -> Option<f64> {
        match property {
            SoilProperty::Ph => self.ph,
            SoilProperty::Clay => self.clay_content,
            SoilProperty::OrganicCarbon => self.organic_carbon,
            SoilProperty::Sand => self.sand_content,
            SoilProperty::Silt => self.silt_content,
        }
    }

    pub fn set(&mut self, property: SoilProperty, value: f64) {
        let slot = match property {
            SoilProperty::Ph => &mut self.ph,
            SoilProperty::Clay => &mut self.clay_content,
            SoilProperty::OrganicCarbon => &mut self.organic_carbon,
            SoilProperty::Sand => &mut self.sand_content,
            SoilProperty::Silt => &mut self.silt_content,
        };
        *slot = Some(value);
    }

    pub fn missing(&self) -> Vec<SoilProperty> {
        SoilProperty::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_none())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    pub clay_content: f64,
    pub organic_carbon: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub sand_content: f64,
    pub silt_content: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityVerdict {
    pub suitable: bool,
    /// Number of criteria met, out of three.
    pub score: u8,
    pub criteria: SuitabilityCriteria,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityCriteria {
    #[serde(rename = "pH")]
    pub ph: ValueCriterion,
    pub organic_carbon: ValueCriterion,
    pub texture: TextureCriterion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueCriterion {
    pub value: f64,
    pub suitable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextureCriterion {
    pub clay: f64,
    pub silt: f64,
    pub sand: f64,
    pub suitable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.0001, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.0001).is_err());
    }

    #[test]
    fn test_property_codes_round_trip_through_lookup() {
        for property in SoilProperty::ALL {
            assert_eq!(SoilProperty::from_code(property.code()), Some(property));
        }
        assert_eq!(SoilProperty::from_code("soc"), None);
        assert_eq!(SoilProperty::from_code("CLAY"), None);
    }

    #[test]
    fn test_partial_properties_report_missing_in_query_order() {
        let mut partial = PartialSoilProperties::default();
        partial.set(SoilProperty::Clay, 30.0);
        partial.set(SoilProperty::Sand, 40.0);
        assert_eq!(
            partial.missing(),
            vec![SoilProperty::Ph, SoilProperty::OrganicCarbon, SoilProperty::Silt]
        );
        assert_eq!(partial.get(SoilProperty::Clay), Some(30.0));
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: RawPropertyPayload = serde_json::from_value(serde_json::json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [33.0, 25.0]},
            "properties": {
                "layers": [{
                    "name": "clay",
                    "unit_measure": {"d_factor": 10, "mapped_units": "g/kg"},
                    "depths": [{
                        "range": {"top_depth": 0, "bottom_depth": 5},
                        "label": "0-5cm",
                        "values": {
                            "Q0.05": 120,
                            "Q0.5": 161,
                            "Q0.95": 250,
                            "mean": 161,
                            "uncertainty": 40
                        }
                    }]
                }]
            }
        }))
        .unwrap();

        let band = &payload.properties.layers[0].depths[0];
        assert_eq!(band.label.as_deref(), Some("0-5cm"));
        assert_eq!(band.values.mean, Some(161.0));
        assert_eq!(band.values.q95, Some(250.0));
    }

    #[test]
    fn test_soil_properties_serialize_with_response_field_names() {
        let props = SoilProperties {
            clay_content: 16.1,
            organic_carbon: 1.75,
            ph: 8.1,
            sand_content: 58.2,
            silt_content: 25.7,
        };
        assert_eq!(
            serde_json::to_value(props).unwrap(),
            serde_json::json!({
                "clay_content": 16.1,
                "organic_carbon": 1.75,
                "pH": 8.1,
                "sand_content": 58.2,
                "silt_content": 25.7
            })
        );
    }
}
