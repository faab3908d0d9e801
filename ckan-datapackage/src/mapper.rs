use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::MapperConfig;
use crate::convert::{to_datapackage, to_dataset};
use crate::error::Result;
use crate::models::DataPackage;

/// # CKAN / Data Package mapper
///
/// Converts metadata between CKAN dataset records and Frictionless Data
/// Package descriptors. Every call is a pure function of its input: the
/// mapper holds nothing but its configuration and can be shared freely
/// between threads.
///
/// ## Usage
///
/// ```rust
/// use ckan_datapackage::{DataPackage, Mapper, MapperConfig};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mapper = Mapper::new(Arc::new(MapperConfig::default()));
///
/// let dataset = json!({
///     "name": "gdp",
///     "title": "Gross Domestic Product",
///     "tags": [{"name": "economy"}],
///     "resources": [{"name": "GDP Data", "url": "http://x.org/gdp.csv"}],
/// });
/// let descriptor = mapper.dataset_to_datapackage(dataset.as_object().unwrap())?;
/// assert_eq!(descriptor["keywords"], json!(["economy"]));
/// assert_eq!(descriptor["resources"][0]["name"], json!("gdp-data"));
///
/// let package = DataPackage::from_descriptor(descriptor)?;
/// let restored = mapper.datapackage_to_dataset(&package)?;
/// assert_eq!(restored["resources"][0]["url"], json!("http://x.org/gdp.csv"));
/// # Ok(())
/// # }
/// ```
pub struct Mapper {
    configuration: Arc<MapperConfig>,
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("configuration", &self.configuration)
            .finish()
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(Arc::new(MapperConfig::default()))
    }
}

impl Mapper {
    /// Create a new mapper with the given configuration
    pub fn new(configuration: Arc<MapperConfig>) -> Self {
        Self { configuration }
    }

    /// The configuration this mapper was built with
    pub fn config(&self) -> &MapperConfig {
        &self.configuration
    }

    /// Convert a CKAN dataset record into a Data Package descriptor.
    ///
    /// Fields that are missing or empty in the dataset are left out of the
    /// descriptor entirely. Resource names are slugified and, unless disabled
    /// in the configuration, made unique.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::MissingField`](crate::ConversionError::MissingField)
    ///   if the dataset has no `name`, or a resource has neither `name` nor `id`
    /// * [`ConversionError::InvalidResource`](crate::ConversionError::InvalidResource)
    ///   if a resource entry is not an object
    pub fn dataset_to_datapackage(&self, dataset: &Map<String, Value>) -> Result<Map<String, Value>> {
        to_datapackage::dataset_to_datapackage(dataset, &self.configuration)
    }

    /// Convert a Data Package into a CKAN dataset record.
    ///
    /// Descriptor fields without a CKAN counterpart are kept as extras, with
    /// structured values stored as JSON text.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::MissingField`](crate::ConversionError::MissingField)
    ///   if the descriptor has no `name`
    /// * [`ConversionError::UnsupportedResourceMode`](crate::ConversionError::UnsupportedResourceMode)
    ///   if any resource is multi-part
    pub fn datapackage_to_dataset(&self, datapackage: &DataPackage) -> Result<Map<String, Value>> {
        to_dataset::datapackage_to_dataset(datapackage, &self.configuration)
    }
}
