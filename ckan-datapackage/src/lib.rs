//! Bidirectional mapping between CKAN dataset metadata and Frictionless
//! Data Package descriptors.

pub mod config;
mod convert;
pub mod error;
pub mod fields;
pub mod mapper;
pub mod models;

use serde_json::{Map, Value};

pub use config::{LicenseUrlSource, MapperConfig};
pub use error::{ConversionError, Result};
pub use mapper::Mapper;
pub use models::{DataPackage, PackageResource, ResourceSource};

/// Convert a CKAN dataset into a Data Package descriptor with the default configuration
pub fn dataset_to_datapackage(dataset: &Map<String, Value>) -> Result<Map<String, Value>> {
    Mapper::default().dataset_to_datapackage(dataset)
}

/// Convert a Data Package into a CKAN dataset with the default configuration
pub fn datapackage_to_dataset(datapackage: &DataPackage) -> Result<Map<String, Value>> {
    Mapper::default().datapackage_to_dataset(datapackage)
}
