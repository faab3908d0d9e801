//! CKAN dataset → Data Package descriptor.

use serde_json::{Map, Value};

use super::{FieldParser, dedupe, resource, run_parsers};
use crate::config::MapperConfig;
use crate::error::{ConversionError, Result};
use crate::fields::present;
use crate::models::{Contact, Extra, License, Source, Tag};

const PARSERS: &[FieldParser] = &[
    FieldParser::Rename("title", "title"),
    FieldParser::Rename("version", "version"),
    FieldParser::Rename("ckan_url", "homepage"),
    FieldParser::Rename("notes", "description"),
    FieldParser::Parse(parse_license),
    FieldParser::Parse(parse_author_and_source),
    FieldParser::Parse(parse_maintainer),
    FieldParser::Parse(parse_tags),
    FieldParser::Parse(parse_extras),
];

pub fn dataset_to_datapackage(
    dataset: &Map<String, Value>,
    config: &MapperConfig,
) -> Result<Map<String, Value>> {
    let name = present(dataset, "name")
        .filter(|name| name.is_string())
        .ok_or_else(|| ConversionError::missing_field("name"))?;
    tracing::debug!("converting dataset {name} to a data package");

    let mut datapackage = Map::new();
    datapackage.insert("name".to_owned(), name.clone());
    run_parsers(PARSERS, dataset, config, &mut datapackage);

    if let Some(Value::Array(resources)) = present(dataset, "resources") {
        let mut converted = resources
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(resource) => resource::dataset_resource_to_package(index, resource),
                _ => Err(ConversionError::invalid_resource(
                    index,
                    "resource must be an object",
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        if config.unique_resource_names {
            dedupe::ensure_unique_names(&mut converted);
        }

        datapackage.insert(
            "resources".to_owned(),
            Value::Array(converted.into_iter().map(Value::Object).collect()),
        );
    }

    tracing::debug!("dataset {name} converted with {} fields", datapackage.len());
    Ok(datapackage)
}

fn parse_license(dataset: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();
    let license = License {
        kind: present(dataset, "license_id").cloned(),
        title: present(dataset, "license_title").cloned(),
        url: present(dataset, "license_url").cloned(),
    };

    if !license.is_empty() {
        result.insert("license".to_owned(), to_value(&license));
    }

    result
}

fn parse_author_and_source(dataset: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();
    let source = Source {
        name: present(dataset, "author").cloned(),
        email: present(dataset, "author_email").cloned(),
        web: present(dataset, "url").cloned(),
    };

    if !source.is_empty() {
        result.insert("sources".to_owned(), Value::Array(vec![to_value(&source)]));
    }

    result
}

fn parse_maintainer(dataset: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();
    let author = Contact {
        name: present(dataset, "maintainer").cloned(),
        email: present(dataset, "maintainer_email").cloned(),
    };

    if !author.is_empty() {
        result.insert("author".to_owned(), to_value(&author));
    }

    result
}

fn parse_tags(dataset: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    let keywords: Vec<Value> = list_of::<Tag>(dataset, "tags")
        .into_iter()
        .map(|tag| tag.name)
        .collect();

    if !keywords.is_empty() {
        result.insert("keywords".to_owned(), Value::Array(keywords));
    }

    result
}

fn parse_extras(dataset: &Map<String, Value>, _: &MapperConfig) -> Map<String, Value> {
    let mut result = Map::new();

    let extras: Map<String, Value> = list_of::<Extra>(dataset, "extras")
        .into_iter()
        .map(|extra| {
            let value = extra.decoded_value();
            (extra.key, value)
        })
        .collect();

    if !extras.is_empty() {
        result.insert("extras".to_owned(), Value::Object(extras));
    }

    result
}

/// Entries of a list field that deserialize as `T`; others are skipped.
fn list_of<T: serde::de::DeserializeOwned>(record: &Map<String, Value>, key: &str) -> Vec<T> {
    match record.get(key) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::trace!("skipping malformed {key} entry: {err}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn to_value<T: serde::Serialize>(model: &T) -> Value {
    // Models here hold only JSON values, so serialization cannot fail
    serde_json::to_value(model).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(dataset: Value) -> Map<String, Value> {
        dataset_to_datapackage(dataset.as_object().unwrap(), &MapperConfig::default()).unwrap()
    }

    #[test]
    fn test_license_parts() {
        let package = convert(json!({
            "name": "x",
            "license_id": "cc-by",
            "license_title": "Creative Commons Attribution",
            "license_url": "http://opendefinition.org/licenses/cc-by",
        }));
        assert_eq!(
            package["license"],
            json!({
                "type": "cc-by",
                "title": "Creative Commons Attribution",
                "url": "http://opendefinition.org/licenses/cc-by",
            })
        );
    }

    #[test]
    fn test_author_becomes_source_and_maintainer_becomes_author() {
        let package = convert(json!({
            "name": "x",
            "author": "Jane",
            "author_email": "",
            "url": "http://jane.org",
            "maintainer": "Joe",
            "maintainer_email": "joe@x.org",
        }));
        assert_eq!(package["sources"], json!([{"name": "Jane", "web": "http://jane.org"}]));
        assert_eq!(package["author"], json!({"name": "Joe", "email": "joe@x.org"}));
    }

    #[test]
    fn test_tags_become_keywords() {
        let package = convert(json!({
            "name": "x",
            "tags": [{"name": "economy"}, {"name": "world bank"}, {"display_name": "no name"}],
        }));
        assert_eq!(package["keywords"], json!(["economy", "world bank"]));

        let package = convert(json!({"name": "x", "tags": []}));
        assert!(!package.contains_key("keywords"));
    }

    #[test]
    fn test_extras_are_decoded() {
        let package = convert(json!({
            "name": "x",
            "extras": [
                {"key": "k", "value": "{\"a\":1}"},
                {"key": "plain", "value": "plain"},
                {"key": "number", "value": 3},
            ],
        }));
        assert_eq!(
            package["extras"],
            json!({"k": {"a": 1}, "plain": "plain", "number": 3})
        );
    }

    #[test]
    fn test_null_name_is_missing() {
        for dataset in [json!({"name": null}), json!({"name": ""}), json!({"name": ["x"]})] {
            let err = dataset_to_datapackage(dataset.as_object().unwrap(), &MapperConfig::default())
                .unwrap_err();
            assert!(
                matches!(err, ConversionError::MissingField { ref field } if field == "name"),
                "{dataset}"
            );
        }
    }

    #[test]
    fn test_duplicate_resources_without_dedupe() {
        let dataset = json!({"name": "x", "resources": [{"name": "a"}, {"name": "a"}]});
        let config = MapperConfig::new().with_unique_resource_names(false);
        let package = dataset_to_datapackage(dataset.as_object().unwrap(), &config).unwrap();
        assert_eq!(package["resources"][0]["name"], json!("a"));
        assert_eq!(package["resources"][1]["name"], json!("a"));
    }
}
