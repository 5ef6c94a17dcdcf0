pub mod engine;
pub mod extract;
pub mod fetch;
pub mod query;
pub mod suitability;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    Coordinate, PartialSoilProperties, RawPropertyPayload, SoilProperties, SuitabilityVerdict,
};
pub use crate::domain::ports::{ConfigProvider, SoilTransport};
pub use crate::utils::error::Result;
