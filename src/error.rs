//! Domain error types for pageslider
//!
//! Provides structured error types for different domains:
//! - `CatalogError` for catalog construction and validation
//! - `NavigationError` for route changes
//! - `ConfigError` for loading the configuration file
//! - `AppError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pageslider
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors raised while building a catalog. All of them are configuration
/// errors and are reported before any slider is mounted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("{0} catalog has no items")]
    Empty(&'static str),

    #[error("item '{name}' has position {position} outside 0..=100")]
    PositionOutOfRange { name: String, position: f64 },

    #[error("item '{0}' has a non-finite position")]
    NonFinitePosition(String),

    #[error("item name '{0}' appears more than once")]
    DuplicateName(String),

    #[error("items '{first}' and '{second}' share position {position}")]
    DuplicatePosition {
        first: String,
        second: String,
        position: f64,
    },

    #[error("item '{name}' at {position} comes after a higher position")]
    OutOfOrder { name: String, position: f64 },

    #[error("year catalog item '{0}' is not a year")]
    InvalidYear(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
}

/// Errors returned by the router
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NavigationError {
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    #[error("already at the root route")]
    AtRoot,
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for CatalogError
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result type alias for NavigationError
pub type NavigationResult<T> = std::result::Result<T, NavigationError>;
