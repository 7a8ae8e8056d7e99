use std::fmt;

#[derive(Debug)]
pub enum FormError {
    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// YAML parsing failed (form spec, responses, config)
    Yaml { context: String, source: serde_yaml::Error },

    /// JSON serialization failed (snapshot, report)
    Json { context: String, source: serde_json::Error },

    /// A field definition is structurally unusable
    InvalidDefinition { index: usize, reason: String },

    /// A responses file entry could not be used
    InvalidResponse { key: String, reason: String },

    /// Unrecognized output format name
    UnknownFormat(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            FormError::Yaml { context, source } => {
                write!(f, "YAML error ({}): {}", context, source)
            }
            FormError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            FormError::InvalidDefinition { index, reason } => {
                write!(f, "Invalid definition for field {}: {}", index, reason)
            }
            FormError::InvalidResponse { key, reason } => {
                write!(f, "Invalid response '{}': {}", key, reason)
            }
            FormError::UnknownFormat(name) => {
                write!(f, "Unknown output format '{}' (expected console or json)", name)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Io { source, .. } => Some(source),
            FormError::Yaml { source, .. } => Some(source),
            FormError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
