//! Error types for the migration library.

use thiserror::Error;

/// Main error type for migration operations.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Movable Type database connection or query error
    #[error("Source database error: {0}")]
    Source(#[from] sqlx::Error),

    /// WordPress database connection or query error
    #[error("Target database error: {0}")]
    Target(#[from] mysql_async::Error),

    /// An enumerated source value with no destination mapping.
    ///
    /// Always fatal. Silently coercing an unknown status or flag to a
    /// default would corrupt content semantics, so we stop instead.
    #[error("No mapping for {entity}.{field} value '{value}'")]
    Mapping {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Data transfer failed for a specific entity type
    #[error("Transfer failed for {entity}: {message}")]
    Transfer { entity: String, message: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Process exit codes by error class.
pub const EXIT_CONFIG_ERROR: u8 = 1;
pub const EXIT_SOURCE_ERROR: u8 = 2;
pub const EXIT_TARGET_ERROR: u8 = 3;
pub const EXIT_MAPPING_ERROR: u8 = 4;
pub const EXIT_TRANSFER_ERROR: u8 = 5;
pub const EXIT_IO_ERROR: u8 = 7;

impl MigrateError {
    /// Create a Mapping error for an unmapped enumerated value.
    pub fn mapping(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        MigrateError::Mapping {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Create a Transfer error.
    pub fn transfer(entity: impl Into<String>, message: impl Into<String>) -> Self {
        MigrateError::Transfer {
            entity: entity.into(),
            message: message.into(),
        }
    }

    /// Exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrateError::Config(_) | MigrateError::Yaml(_) => EXIT_CONFIG_ERROR,
            MigrateError::Source(_) => EXIT_SOURCE_ERROR,
            MigrateError::Target(_) => EXIT_TARGET_ERROR,
            MigrateError::Mapping { .. } => EXIT_MAPPING_ERROR,
            MigrateError::Transfer { .. } => EXIT_TRANSFER_ERROR,
            MigrateError::Io(_) => EXIT_IO_ERROR,
            MigrateError::Json(_) => EXIT_CONFIG_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        // Add error chain for wrapped errors
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_message() {
        let err = MigrateError::mapping("post", "entry_status", 9);
        assert_eq!(err.to_string(), "No mapping for post.entry_status value '9'");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MigrateError::Config("x".into()).exit_code(),
            EXIT_CONFIG_ERROR
        );
        assert_eq!(
            MigrateError::mapping("comment", "comment_visible", 2).exit_code(),
            EXIT_MAPPING_ERROR
        );
        assert_eq!(
            MigrateError::transfer("category", "boom").exit_code(),
            EXIT_TRANSFER_ERROR
        );
    }
}
