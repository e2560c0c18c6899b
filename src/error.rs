//! Error types for the timecard engine.
//!
//! The day calculation itself never fails. These errors cover configuration
//! loading and request validation at the edges of the crate.

use thiserror::Error;

/// The main error type for the timecard engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A manual entry referenced a leave/overtime code missing from the catalog.
    #[error("Catalog code not found: code-{code}")]
    CatalogCodeNotFound {
        /// The numeric catalog code.
        code: u32,
    },

    /// A request field was invalid.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/settings.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/settings.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_catalog_code_not_found_displays_code() {
        let error = EngineError::CatalogCodeNotFound { code: 42 };
        assert_eq!(error.to_string(), "Catalog code not found: code-42");
    }

    #[test]
    fn test_invalid_request_displays_field_and_message() {
        let error = EngineError::InvalidRequest {
            field: "manual_entries[0].duration_ms".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request field 'manual_entries[0].duration_ms': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_catalog_error() -> EngineResult<()> {
            Err(EngineError::CatalogCodeNotFound { code: 7 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_catalog_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
