//! Error types of the store and its configuration.

use thiserror::Error;

/// Error returned by mutations that address an existing entry by its title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No optional layer with the given title.
    #[error("optional layer '{0}' is not registered")]
    UnknownOptionalLayer(String),

    /// No map control with the given title.
    #[error("map control '{0}' is not registered")]
    UnknownMapControl(String),

    /// No draw option with the given title.
    #[error("draw option '{0}' does not exist")]
    UnknownDrawOption(String),
}

/// Error loading or validating a [`StoreConfig`](crate::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON or has unexpected fields.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Default base layer opacity is outside of `[0, 1]`.
    #[error("base layer opacity must be in [0, 1], got {0}")]
    InvalidOpacity(f64),

    /// Default projection code is empty.
    #[error("default projection code is empty")]
    EmptyProjection,

    /// Two draw options share a title.
    #[error("draw option '{0}' is listed more than once")]
    DuplicateDrawOption(String),

    /// More draw options than the drawing toolbar can show.
    #[error("at most {max} draw options are supported, got {count}")]
    TooManyDrawOptions {
        /// Number of configured options.
        count: usize,
        /// Supported maximum.
        max: usize,
    },
}
