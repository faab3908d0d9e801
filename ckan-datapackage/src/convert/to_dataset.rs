//! Data Package → CKAN dataset.

use serde_json::{Map, Value};

use super::{FieldParser, resource, run_parsers};
use crate::config::{LicenseUrlSource, MapperConfig};
use crate::error::{ConversionError, Result};
use crate::fields::{is_truthy, present, slugify, text_of};
use crate::models::{AuthorRef, DataPackage, Extra, LicenseRef, Source, Tag};

/// Descriptor fields with a dedicated mapping. Everything else ends up in extras.
const KNOWN_FIELDS: &[&str] = &[
    "name",
    "resources",
    "license",
    "title",
    "description",
    "homepage",
    "version",
    "sources",
    "author",
    "keywords",
];

const PARSERS: &[FieldParser] = &[
    FieldParser::Rename("title", "title"),
    FieldParser::Rename("version", "version"),
    FieldParser::Rename("description", "notes"),
    FieldParser::Parse(parse_license),
    FieldParser::Parse(parse_sources),
    FieldParser::Parse(parse_author),
    FieldParser::Parse(parse_keywords),
    FieldParser::Parse(parse_unknown_fields_as_extras),
];

pub fn datapackage_to_dataset(
    datapackage: &DataPackage,
    config: &MapperConfig,
) -> Result<Map<String, Value>> {
    let descriptor = datapackage.descriptor();
    let name = present(descriptor, "name")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .ok_or_else(|| ConversionError::missing_field("name"))?;
    tracing::debug!("converting data package {name} to a dataset");

    let mut dataset = Map::new();
    dataset.insert("name".to_owned(), Value::String(name.clone()));
    run_parsers(PARSERS, descriptor, config, &mut dataset);

    if !datapackage.resources().is_empty() {
        let resources = datapackage
            .resources()
            .iter()
            .map(|r| resource::package_resource_to_dataset(r).map(Value::Object))
            .collect::<Result<Vec<_>>>()?;
        dataset.insert("resources".to_owned(), Value::Array(resources));
    }

    tracing::debug!("data package {name} converted with {} fields", dataset.len());
    Ok(dataset)
}

fn parse_license(descriptor: &Map<String, Value>, config: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    match present(descriptor, "license").and_then(LicenseRef::from_value) {
        Some(LicenseRef::Identifier(id)) => {
            result.insert("license_id".to_owned(), Value::String(id));
        }
        Some(LicenseRef::Detailed(license)) => {
            let url = match config.license_url_source {
                LicenseUrlSource::Url => license.url,
                LicenseUrlSource::TitleGated => license
                    .url
                    .filter(|_| license.title.as_ref().is_some_and(is_truthy)),
            };
            let fields = [
                ("license_id", license.kind),
                ("license_title", license.title),
                ("license_url", url),
            ];
            for (key, value) in fields {
                if let Some(value) = value.filter(is_truthy) {
                    result.insert(key.to_owned(), value);
                }
            }
        }
        None => {}
    }

    result
}

fn parse_sources(descriptor: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    let first = match present(descriptor, "sources") {
        Some(Value::Array(sources)) => sources.first(),
        _ => None,
    };
    let Some(source) = first.and_then(|s| serde_json::from_value::<Source>(s.clone()).ok()) else {
        return result;
    };

    let fields = [
        ("author", source.name),
        ("author_email", source.email),
        ("url", source.web),
    ];
    for (key, value) in fields {
        if let Some(value) = value.filter(is_truthy) {
            result.insert(key.to_owned(), value);
        }
    }

    result
}

fn parse_author(descriptor: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    let contact = present(descriptor, "author")
        .and_then(AuthorRef::from_value)
        .and_then(AuthorRef::into_contact);
    let Some(contact) = contact else {
        return result;
    };

    if let Some(name) = contact.name.filter(is_truthy) {
        let name = match name {
            Value::String(text) => Value::String(text.trim().to_owned()),
            other => other,
        };
        if is_truthy(&name) {
            result.insert("maintainer".to_owned(), name);
        }
    }
    if let Some(email) = contact.email.filter(is_truthy) {
        result.insert("maintainer_email".to_owned(), email);
    }

    result
}

fn parse_keywords(descriptor: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    if let Some(Value::Array(keywords)) = present(descriptor, "keywords") {
        let tags = keywords
            .iter()
            .map(|keyword| {
                let tag = Tag::new(slugify(&text_of(keyword)));
                serde_json::to_value(tag).unwrap_or(Value::Null)
            })
            .collect();
        result.insert("tags".to_owned(), Value::Array(tags));
    }

    result
}

fn parse_unknown_fields_as_extras(
    descriptor: &Map<String, Value>,
    config: &MapperConfig,
) -> Map<String, Value> {
    let mut result = Map::new();
    // CKAN extras keys are unique; a top-level field beats an entry of the
    // same name inside the package `extras` object
    let mut extras: Map<String, Value> = Map::new();

    for (key, value) in descriptor {
        if KNOWN_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            // A package-level extras object came from a CKAN dataset; unpack it
            Value::Object(nested) if key == "extras" && config.expand_package_extras => {
                for (key, value) in nested {
                    if !extras.contains_key(key) {
                        extras.insert(key.clone(), value.clone());
                    } else {
                        tracing::trace!("extra {key} shadowed by a top-level field");
                    }
                }
            }
            _ => {
                extras.insert(key.clone(), value.clone());
            }
        }
    }

    if !extras.is_empty() {
        let extras = extras
            .into_iter()
            .map(|(key, value)| {
                serde_json::to_value(Extra::encoded(key, &value)).unwrap_or(Value::Null)
            })
            .collect();
        result.insert("extras".to_owned(), Value::Array(extras));
    }

    result
}
