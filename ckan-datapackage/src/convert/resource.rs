//! Single-resource conversion in both directions.

use serde_json::{Map, Value};

use crate::error::{ConversionError, Result};
use crate::fields::{decode_or_keep, present, slugify, text_of};
use crate::models::{PackageResource, ResourceSource};

/// Fields copied verbatim from a CKAN resource to a package resource
const DATASET_RESOURCE_FIELDS: &[&str] = &["description", "format", "hash"];

/// Fields copied verbatim from a package resource to a CKAN resource
const PACKAGE_RESOURCE_FIELDS: &[&str] = &["description", "format", "hash", "schema"];

/// Convert a CKAN resource into a Data Package resource descriptor.
pub fn dataset_resource_to_package(
    index: usize,
    resource: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let mut converted = Map::new();

    if let Some(url) = present(resource, "url") {
        converted.insert("path".to_owned(), url.clone());
    }

    for field in DATASET_RESOURCE_FIELDS {
        if let Some(value) = present(resource, field) {
            converted.insert((*field).to_owned(), value.clone());
        }
    }

    if let Some(name) = present(resource, "name") {
        let name_text = text_of(name);
        converted.insert("name".to_owned(), Value::String(slugify(&name_text).to_lowercase()));
        converted.insert("title".to_owned(), name.clone());
    } else {
        let id = present(resource, "id")
            .ok_or_else(|| ConversionError::missing_field(format!("resources[{index}].id")))?;
        converted.insert("name".to_owned(), Value::String(text_of(id)));
    }

    match resource.get("schema") {
        // A string schema is either inline JSON or a path/URL to one
        Some(Value::String(schema)) => {
            converted.insert("schema".to_owned(), decode_or_keep(schema));
        }
        Some(schema @ Value::Object(_)) => {
            converted.insert("schema".to_owned(), schema.clone());
        }
        _ => {}
    }

    Ok(converted)
}

/// Convert a Data Package resource into a CKAN resource.
///
/// Multi-part resources have no CKAN equivalent and fail the conversion.
pub fn package_resource_to_dataset(resource: &PackageResource) -> Result<Map<String, Value>> {
    let descriptor = &resource.descriptor;
    let mut converted = Map::new();

    if let Some(name) = present(descriptor, "name") {
        let display = present(descriptor, "title").unwrap_or(name);
        converted.insert("name".to_owned(), display.clone());
    }

    match &resource.source {
        ResourceSource::Local(path) => {
            converted.insert("path".to_owned(), Value::String(path.clone()));
        }
        ResourceSource::Remote(url) => {
            converted.insert("url".to_owned(), Value::String(url.clone()));
        }
        ResourceSource::Inline(data) => {
            converted.insert("data".to_owned(), data.clone());
        }
        ResourceSource::MultiPart(_) => {
            let label = descriptor.get("name").map(text_of).unwrap_or_default();
            return Err(ConversionError::unsupported_mode(label, resource.source.mode()));
        }
    }

    for field in PACKAGE_RESOURCE_FIELDS {
        if let Some(value) = present(descriptor, field) {
            converted.insert((*field).to_owned(), value.clone());
        }
    }

    Ok(converted)
}
