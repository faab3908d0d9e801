use thiserror::Error;

/// Errors that can occur while mapping between CKAN datasets and Data Packages
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A field the conversion cannot proceed without is absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A resource's storage mode has no counterpart in the CKAN schema
    #[error("Unsupported storage mode for resource {resource}: {mode} resources are not supported")]
    UnsupportedResourceMode { resource: String, mode: String },

    /// A package resource descriptor could not be classified
    #[error("Invalid resource at index {index}: {message}")]
    InvalidResource { index: usize, message: String },

    /// Descriptor text was not valid JSON
    #[error("Failed to parse descriptor: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl ConversionError {
    /// Create a new missing field error
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new unsupported storage mode error
    pub fn unsupported_mode<R: Into<String>, M: Into<String>>(resource: R, mode: M) -> Self {
        Self::UnsupportedResourceMode {
            resource: resource.into(),
            mode: mode.into(),
        }
    }

    /// Create a new invalid resource error
    pub fn invalid_resource<S: Into<String>>(index: usize, message: S) -> Self {
        Self::InvalidResource {
            index,
            message: message.into(),
        }
    }
}

/// Type alias for Results using ConversionError
pub type Result<T> = std::result::Result<T, ConversionError>;
