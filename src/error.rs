//! Application error types using thiserror
//!
//! Error kinds:
//! - ConfigError: Issues with the package list document (fatal at startup)
//! - RegistryError: Issues with remote registry communication (contained per package)
//!
//! The binary reports both through `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to loading the package list
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Package list file not found
    #[error("package list not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read package list file
    #[error("failed to read package list {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Structurally valid document with an unusable entry
    #[error("invalid entry in group '{group}': {message}")]
    InvalidEntry { group: String, message: String },
}

/// Errors related to remote registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Non-success HTTP status
    #[error("{registry} returned HTTP {status} for '{package}'")]
    HttpStatus {
        package: String,
        registry: String,
        status: u16,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidEntry error
    pub fn invalid_entry(group: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidEntry {
            group: group.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(package: impl Into<String>, registry: impl Into<String>, status: u16) -> Self {
        RegistryError::HttpStatus {
            package: package.into(),
            registry: registry.into(),
            status,
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}
