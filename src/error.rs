use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("missing dependency: {tool}")]
    Precondition { tool: String },

    #[error("failed to fetch {url}: {cause}")]
    Network { url: String, cause: String },

    #[error("invalid release index: {0}")]
    Format(String),

    #[error("version {version} not found in index")]
    VersionNotFound { version: String },

    #[error("no release found for platform {platform} and version {version}")]
    PlatformNotFound { version: String, platform: String },

    #[error("checksum mismatch for {}: expected {expected}, got {actual}", .path.display())]
    Checksum {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("tar extraction failed ({status}): {output}")]
    Extraction { status: String, output: String },

    #[error("{message}: {source}")]
    Installation {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallError {
    pub(crate) fn network(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn installation(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Installation {
            message: message.into(),
            source,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True for both the missing-version and missing-platform cases.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VersionNotFound { .. } | Self::PlatformNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
