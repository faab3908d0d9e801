//! Field-by-field conversion pipelines.
//!
//! Each direction is an ordered list of [`FieldParser`]s run over the same
//! read-only record. Every parser returns only the keys it owns, and the
//! partial results are merged into the output in order.

pub mod dedupe;
pub mod resource;
pub mod to_datapackage;
pub mod to_dataset;

use serde_json::{Map, Value};

use crate::config::MapperConfig;
use crate::fields::present;

pub(crate) type ParseFn = fn(&Map<String, Value>, &MapperConfig) -> Map<String, Value>;

/// One step of a conversion pipeline
pub(crate) enum FieldParser {
    /// Copy a present field under a new key
    Rename(&'static str, &'static str),
    /// Arbitrary reshaping
    Parse(ParseFn),
}

impl FieldParser {
    fn parse(&self, record: &Map<String, Value>, config: &MapperConfig) -> Map<String, Value> {
        match self {
            FieldParser::Rename(from, to) => {
                let mut result = Map::new();
                if let Some(value) = present(record, from) {
                    result.insert((*to).to_owned(), value.clone());
                }
                result
            }
            FieldParser::Parse(parse) => parse(record, config),
        }
    }
}

pub(crate) fn run_parsers(
    parsers: &[FieldParser],
    record: &Map<String, Value>,
    config: &MapperConfig,
    output: &mut Map<String, Value>,
) {
    for parser in parsers {
        output.extend(parser.parse(record, config));
    }
}
