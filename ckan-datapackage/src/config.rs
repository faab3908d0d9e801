/// Where `license_url` comes from when a package license object is mapped
/// back onto a CKAN dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseUrlSource {
    /// `license.url` becomes `license_url`
    #[default]
    Url,
    /// `license.url` becomes `license_url` only when the license also has a
    /// `title`; a url without a title is dropped
    TitleGated,
}

/// Configuration for the CKAN / Data Package mapper
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Field the package license url is read from
    pub license_url_source: LicenseUrlSource,
    /// Rename duplicate resource names when producing a Data Package
    pub unique_resource_names: bool,
    /// Flatten a package-level `extras` object back into individual CKAN extras
    pub expand_package_extras: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            license_url_source: LicenseUrlSource::Url,
            unique_resource_names: true,
            expand_package_extras: true,
        }
    }
}

impl MapperConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which license field feeds `license_url`
    pub fn with_license_url_source(mut self, source: LicenseUrlSource) -> Self {
        self.license_url_source = source;
        self
    }

    /// Enable or disable resource name de-duplication
    pub fn with_unique_resource_names(mut self, unique: bool) -> Self {
        self.unique_resource_names = unique;
        self
    }

    /// Enable or disable flattening of a package `extras` object
    pub fn with_expand_package_extras(mut self, expand: bool) -> Self {
        self.expand_package_extras = expand;
        self
    }
}
