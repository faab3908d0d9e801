use serde_json::{Map, Value};
use std::path::Path;
use url::Url;

use crate::error::{ConversionError, Result};

/// URL schemes whose paths are fetched rather than read from disk
const REMOTE_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "s3"];

/// Where a Data Package resource's bytes live
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceSource {
    /// A file on the local filesystem
    Local(String),
    /// A file behind a URL
    Remote(String),
    /// Data embedded in the descriptor itself
    Inline(Value),
    /// A resource split over several files
    MultiPart(Vec<String>),
}

impl ResourceSource {
    /// Short name of the storage mode, used in error messages
    pub fn mode(&self) -> &'static str {
        match self {
            ResourceSource::Local(_) => "local",
            ResourceSource::Remote(_) => "remote",
            ResourceSource::Inline(_) => "inline",
            ResourceSource::MultiPart(_) => "multipart",
        }
    }

    /// Classify a single `path` entry as local or remote.
    pub fn from_path(path: &str, base_path: Option<&Path>) -> ResourceSource {
        if is_remote(path) {
            return ResourceSource::Remote(path.to_owned());
        }
        match base_path {
            Some(base) => ResourceSource::Local(base.join(path).to_string_lossy().into_owned()),
            None => ResourceSource::Local(path.to_owned()),
        }
    }
}

fn is_remote(path: &str) -> bool {
    Url::parse(path)
        .map(|url| REMOTE_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// A single Data Package resource: its descriptor plus resolved storage mode
#[derive(Clone, Debug, PartialEq)]
pub struct PackageResource {
    pub descriptor: Map<String, Value>,
    pub source: ResourceSource,
}

impl PackageResource {
    pub fn new(descriptor: Map<String, Value>, source: ResourceSource) -> Self {
        Self { descriptor, source }
    }

    /// Work out the storage mode of a resource descriptor.
    ///
    /// `data` wins over `path`. A `path` list with a single entry is treated
    /// like a plain path; longer lists are multi-part.
    pub fn from_descriptor(
        index: usize,
        descriptor: Map<String, Value>,
        base_path: Option<&Path>,
    ) -> Result<Self> {
        let source = match (descriptor.get("data"), descriptor.get("path")) {
            (Some(data), _) if !data.is_null() => ResourceSource::Inline(data.clone()),
            (_, Some(Value::String(path))) => ResourceSource::from_path(path, base_path),
            (_, Some(Value::Array(parts))) => {
                let parts = parts
                    .iter()
                    .map(|part| {
                        part.as_str().map(str::to_owned).ok_or_else(|| {
                            ConversionError::invalid_resource(index, "path entries must be strings")
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                if parts.len() > 1 {
                    ResourceSource::MultiPart(parts)
                } else if let Some(single) = parts.first() {
                    ResourceSource::from_path(single, base_path)
                } else {
                    return Err(ConversionError::invalid_resource(index, "path list is empty"));
                }
            }
            _ => {
                return Err(ConversionError::invalid_resource(
                    index,
                    "resource has neither `path` nor `data`",
                ));
            }
        };

        Ok(Self { descriptor, source })
    }
}

/// A Data Package: the top-level descriptor and its resources
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataPackage {
    descriptor: Map<String, Value>,
    resources: Vec<PackageResource>,
}

impl DataPackage {
    /// Assemble a package from already classified resources
    pub fn new(descriptor: Map<String, Value>, resources: Vec<PackageResource>) -> Self {
        Self {
            descriptor,
            resources,
        }
    }

    /// Build a package from a descriptor, classifying `descriptor.resources`
    pub fn from_descriptor(descriptor: Map<String, Value>) -> Result<Self> {
        Self::load(descriptor, None)
    }

    /// Like [`DataPackage::from_descriptor`], resolving local paths against `base_path`
    pub fn from_descriptor_with_base_path<P: AsRef<Path>>(
        descriptor: Map<String, Value>,
        base_path: P,
    ) -> Result<Self> {
        Self::load(descriptor, Some(base_path.as_ref()))
    }

    /// Parse a `datapackage.json` document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let descriptor: Map<String, Value> = serde_json::from_str(text)?;
        Self::from_descriptor(descriptor)
    }

    fn load(descriptor: Map<String, Value>, base_path: Option<&Path>) -> Result<Self> {
        let resources = match descriptor.get("resources") {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| match entry {
                    Value::Object(resource) => {
                        PackageResource::from_descriptor(index, resource.clone(), base_path)
                    }
                    _ => Err(ConversionError::invalid_resource(
                        index,
                        "resource descriptor must be an object",
                    )),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            descriptor,
            resources,
        })
    }

    pub fn descriptor(&self) -> &Map<String, Value> {
        &self.descriptor
    }

    pub fn resources(&self) -> &[PackageResource] {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_classifies_storage_modes() {
        let local = PackageResource::from_descriptor(0, object(json!({"path": "data/x.csv"})), None).unwrap();
        assert_eq!(local.source, ResourceSource::Local("data/x.csv".to_string()));

        let remote =
            PackageResource::from_descriptor(0, object(json!({"path": "https://x.org/y.csv"})), None).unwrap();
        assert_eq!(remote.source, ResourceSource::Remote("https://x.org/y.csv".to_string()));

        let inline =
            PackageResource::from_descriptor(0, object(json!({"data": [[1, 2]], "path": "ignored.csv"})), None)
                .unwrap();
        assert_eq!(inline.source, ResourceSource::Inline(json!([[1, 2]])));

        let multipart =
            PackageResource::from_descriptor(0, object(json!({"path": ["a.csv", "b.csv"]})), None).unwrap();
        assert_eq!(
            multipart.source,
            ResourceSource::MultiPart(vec!["a.csv".to_string(), "b.csv".to_string()])
        );
        assert_eq!(multipart.source.mode(), "multipart");
    }

    #[test]
    fn test_single_entry_path_list_is_not_multipart() {
        let resource =
            PackageResource::from_descriptor(0, object(json!({"path": ["http://x/y.csv"]})), None).unwrap();
        assert_eq!(resource.source, ResourceSource::Remote("http://x/y.csv".to_string()));
    }

    #[test]
    fn test_base_path_applies_to_local_only() {
        let base = Path::new("/srv/data");
        let local = ResourceSource::from_path("x.csv", Some(base));
        assert_eq!(local, ResourceSource::Local("/srv/data/x.csv".to_string()));
        let remote = ResourceSource::from_path("s3://bucket/x.csv", Some(base));
        assert_eq!(remote, ResourceSource::Remote("s3://bucket/x.csv".to_string()));
    }

    #[test]
    fn test_resource_without_location_is_invalid() {
        let err = PackageResource::from_descriptor(3, object(json!({"name": "x"})), None).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidResource { index: 3, .. }));
    }

    #[test]
    fn test_from_json_str() {
        let package = DataPackage::from_json_str(
            r#"{"name": "pkg", "resources": [{"name": "r", "path": "r.csv"}]}"#,
        )
        .unwrap();
        assert_eq!(package.resources().len(), 1);
        assert_eq!(package.descriptor()["name"], json!("pkg"));

        let err = DataPackage::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConversionError::ParseError(_)));
    }
}
