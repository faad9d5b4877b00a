//! Loading overlay configuration.
//!
//! Configuration is JSON. Every field is optional; missing fields keep their
//! defaults:
//!
//! ```json
//! {
//!   "style": {
//!     "sibling_color": "#4CAF50",
//!     "highlight": { "hex": "#2196F3", "opacity": 0.8 },
//!     "label_font": { "size": 12.0 }
//!   },
//!   "log_filter": "waterui_measure=debug"
//! }
//! ```

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use waterui_measure_overlay::OverlayStyle;

/// Environment variable holding the path of a configuration file.
pub const CONFIG_ENV: &str = "WATERUI_MEASURE_CONFIG";

/// Errors raised while loading a [`MeasureConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read measure config {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`MeasureConfig`].
    #[error("invalid measure config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Overlay settings a host can load at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Drawing style for the overlay.
    pub style: OverlayStyle,
    /// `tracing` filter directives, used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

impl MeasureConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "measure config loaded");
        Ok(config)
    }

    /// Reads the file named by [`CONFIG_ENV`], or returns the defaults when
    /// the variable is unset.
    ///
    /// # Errors
    ///
    /// Same as [`from_path`](Self::from_path).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_optional_path(std::env::var_os(CONFIG_ENV))
    }

    fn from_optional_path(path: Option<OsString>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_path)
    }
}
