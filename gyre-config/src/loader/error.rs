use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or parsing a preset file. These are the only
/// real errors the engine surface has; everything downstream of a loaded
/// config degrades silently with defaults instead of failing.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read preset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse preset: {0}")]
    ParseInline(#[from] toml::de::Error),
}
