//! Error types for configuration operations.

use std::path::PathBuf;

use ripple_core::FilterError;
use thiserror::Error;

/// Errors that can occur while loading, saving, or building a filter bank.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Two definitions share a name
    #[error("duplicate filter name: {0}")]
    DuplicateFilter(String),

    /// No definition with the requested name
    #[error("filter not found: {0}")]
    FilterNotFound(String),

    /// A definition's coefficients were rejected
    #[error("invalid filter '{name}': {source}")]
    InvalidFilter {
        /// Name of the rejected definition.
        name: String,
        /// Why the coefficients were rejected.
        #[source]
        source: FilterError,
    },

    /// Engine name or selection problem
    #[error("engine configuration: {0}")]
    Engine(#[from] FilterError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid filter error.
    pub fn invalid_filter(name: impl Into<String>, source: FilterError) -> Self {
        ConfigError::InvalidFilter {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn write_file_display() {
        let err = ConfigError::write_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
    }

    #[test]
    fn create_dir_source_is_some() {
        let err = ConfigError::create_dir("/x", mock_io_err());
        assert!(err.source().is_some(), "CreateDir must expose I/O source");
    }

    #[test]
    fn invalid_filter_exposes_filter_error() {
        let err = ConfigError::invalid_filter(
            "smooth",
            FilterError::invalid_coefficients("numerator is empty"),
        );
        assert_eq!(
            err.to_string(),
            "invalid filter 'smooth': invalid filter coefficients: numerator is empty"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn duplicate_filter_display() {
        let err = ConfigError::DuplicateFilter("lp".to_string());
        assert_eq!(err.to_string(), "duplicate filter name: lp");
        assert!(err.source().is_none());
    }

    #[test]
    fn engine_error_converts() {
        let err: ConfigError = FilterError::UnknownEngine("gpu".to_string()).into();
        assert!(matches!(err, ConfigError::Engine(FilterError::UnknownEngine(_))));
    }
}
