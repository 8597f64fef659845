//! Override failures

use std::io;
use std::path::PathBuf;

use crate::domain::OsType;

#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("error reading user supplied linux public ssh key file {}", .path.display())]
    ReadPublicKey {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading user supplied windows admin password file {}", .path.display())]
    ReadWindowsPassword {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("api model has no {0} agent pool to override")]
    MissingAgentPool(OsType),
}
