//! # UI Error Types
//!
//! All errors that can occur while tracking input or building widgets.

use thiserror::Error;

/// A key or button outside the set registered at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The key was not part of the tracker's initial set.
    #[error("key {key} is not tracked")]
    NotTracked {
        /// Debug rendering of the offending key.
        key: String,
    },
}

impl InputError {
    pub(crate) fn not_tracked(key: &impl std::fmt::Debug) -> Self {
        Self::NotTracked {
            key: format!("{key:?}"),
        }
    }
}

/// Construction-time contract violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The widget cannot be built from the given arguments.
    #[error("invalid configuration for {widget}: {reason}")]
    InvalidConfiguration {
        /// Widget kind being constructed.
        widget: &'static str,
        /// What was wrong.
        reason: String,
    },

    /// An asset collection produced nothing usable.
    #[error("no usable frames found in {source_name}")]
    ExhaustedResource {
        /// Where the frames were looked for.
        source_name: String,
    },
}

impl WidgetError {
    pub(crate) fn invalid(widget: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            widget,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading configuration or assets.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Any error produced by this crate.
#[derive(Error, Debug)]
pub enum UiError {
    /// Input tracking failure.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Widget construction failure.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// Configuration or asset loading failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for input tracking.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for widget construction.
pub type BuildResult<T> = Result<T, WidgetError>;

/// Result type for operations that may fail in several layers.
pub type UiResult<T> = Result<T, UiError>;
