//! Config loading errors

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed reading config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("unsupported config extension '.{extension}' for file {}", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("environment override parse error for {key}=`{value}`: {reason}")]
    EnvParse { key: String, value: String, reason: String },
}
