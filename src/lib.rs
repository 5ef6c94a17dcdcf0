pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpTransport;
pub use config::Settings;
pub use core::{
    engine::SoilService, fetch::fetch_soil_data, suitability::analyze_soil_suitability,
};
pub use domain::model::{Coordinate, SoilProperties, SuitabilityVerdict};
pub use utils::error::{Result, SoilError};
