//! Release index client.
//!
//! The index is a JSON document keyed by version (`"master"`, `"0.11.0"`, ...).
//! Each version maps platform keys (`"x86_64-linux"`, `"aarch64-macos"`, ...)
//! to an artifact object carrying at least `tarball` and `shasum`:
//!
//! ```json
//! {
//!   "0.11.0": {
//!     "date": "2023-08-04",
//!     "x86_64-linux": {
//!       "tarball": "https://ziglang.org/download/0.11.0/zig-linux-x86_64-0.11.0.tar.xz",
//!       "shasum": "2d00e789fec4f71790a6e7bf83ff91d564943c5ee843c5fd966efc474b423047",
//!       "size": "44961892"
//!     }
//!   }
//! }
//! ```
//!
//! Version entries also carry plain metadata strings such as `date`, so the
//! document is kept as loosely typed JSON and validated only along the path
//! that is actually resolved.
//!
//! # Examples
//!
//! ```
//! use zig_installer::index::ReleaseIndex;
//!
//! let index = ReleaseIndex::from_json(
//!     r#"{"0.11.0": {"x86_64-linux": {"tarball": "http://x/z.tar.xz", "shasum": "ab"}}}"#,
//! )
//! .unwrap();
//! let artifact = index.resolve("0.11.0", "x86_64-linux").unwrap();
//! assert_eq!(artifact.tarball, "http://x/z.tar.xz");
//! ```

use crate::error::{InstallError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Download location and checksum for one version on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub tarball: String,
    /// Lowercase hex SHA-256 of the tarball
    pub shasum: String,
}

/// Parsed release index, version key → raw version entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ReleaseIndex {
    releases: HashMap<String, Value>,
}

impl ReleaseIndex {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| InstallError::Format(format!("failed to parse index: {}", e)))
    }

    /// Version keys present in the index, sorted.
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.releases.keys().map(String::as_str).collect();
        versions.sort_unstable();
        versions
    }

    /// Look up the artifact for `version` on `platform`.
    ///
    /// No fuzzy matching and no fallback to a more generic platform key.
    pub fn resolve(&self, version: &str, platform: &str) -> Result<ArtifactDescriptor> {
        let entry = self
            .releases
            .get(version)
            .ok_or_else(|| {
                tracing::debug!(available = ?self.versions(), "requested version missing");
                InstallError::VersionNotFound {
                    version: version.to_string(),
                }
            })?;

        let entry = entry.as_object().ok_or_else(|| {
            InstallError::Format(format!("entry for version {} is not an object", version))
        })?;

        let release = entry
            .get(platform)
            .and_then(Value::as_object)
            .ok_or_else(|| InstallError::PlatformNotFound {
                version: version.to_string(),
                platform: platform.to_string(),
            })?;

        let field = |name: &str| -> Result<String> {
            release
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    InstallError::Format(format!(
                        "missing or invalid `{}` for {} on {}",
                        name, version, platform
                    ))
                })
        };

        Ok(ArtifactDescriptor {
            tarball: field("tarball")?,
            shasum: field("shasum")?,
        })
    }
}

/// Build the HTTP client shared by the index fetch and the artifact download.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(format!("zig-installer/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            InstallError::Other(anyhow::Error::new(e).context("failed to build HTTP client"))
        })
}

/// Fetch and decode the release index.
///
/// Any status outside 2xx is a [`InstallError::Network`] error carrying the
/// status; an undecodable body is a [`InstallError::Format`] error.
pub async fn fetch_index(client: &reqwest::Client, url: &str) -> Result<ReleaseIndex> {
    tracing::debug!(%url, "fetching release index");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| InstallError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::network(url, format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| InstallError::network(url, e))?;

    ReleaseIndex::from_json(&body)
}

/// Resolve `version` on `platform` within an already fetched index.
pub fn resolve_artifact(
    index: &ReleaseIndex,
    version: &str,
    platform: &str,
) -> Result<ArtifactDescriptor> {
    index.resolve(version, platform)
}
