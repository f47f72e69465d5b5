//! Artifact download with local reuse and progress tracking.

use crate::checksum;
use crate::error::{InstallError, Result};
use crate::index::ArtifactDescriptor;
use crate::output;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// How the archive ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// An existing file already matched the checksum
    Cached,
    /// The archive was downloaded during this run
    Downloaded,
}

/// Make sure a verified copy of `artifact` exists at `dest`.
///
/// A file already present at `dest` is reused when its checksum matches and
/// deleted otherwise. A freshly downloaded file that fails verification is
/// removed and reported as [`InstallError::Checksum`]; it is never retried.
pub async fn fetch_artifact(
    client: &reqwest::Client,
    artifact: &ArtifactDescriptor,
    dest: &Path,
) -> Result<FetchOutcome> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            InstallError::io(
                format!("failed to create tarball directory {}", parent.display()),
                e,
            )
        })?;
    }

    if dest.exists() {
        output::info("found existing file, checking checksum...");
        match checksum::verify(dest, &artifact.shasum).await {
            Ok(()) => {
                output::success("existing file matches checksum, skipping download");
                return Ok(FetchOutcome::Cached);
            }
            Err(e) => {
                tracing::debug!(error = %e, "cached archive rejected");
                output::warning("existing file has incorrect checksum, will download fresh copy");
                fs::remove_file(dest).await.map_err(|e| {
                    InstallError::io(format!("failed to remove {}", dest.display()), e)
                })?;
            }
        }
    }

    download_file(client, &artifact.tarball, dest).await?;

    output::step("verifying checksum...");
    if let Err(e) = checksum::verify(dest, &artifact.shasum).await {
        if let Err(rm) = fs::remove_file(dest).await {
            tracing::warn!(path = %dest.display(), error = %rm, "failed to remove corrupt download");
        }
        return Err(e);
    }

    Ok(FetchOutcome::Downloaded)
}

fn progress_bar(total: Option<u64>) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total.unwrap_or(0));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );
    pb.set_message("⬇ zig");
    Ok(pb)
}

/// Stream `url` into `dest`, creating or truncating it.
///
/// On a failed request the partially written file stays on disk.
pub async fn download_file(client: &reqwest::Client, url: &str, dest: &Path) -> Result<u64> {
    tracing::debug!(%url, dest = %dest.display(), "downloading");

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| InstallError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::network(url, format!("HTTP {}", status)));
    }

    let pb = progress_bar(response.content_length())?;

    let mut file = fs::File::create(dest)
        .await
        .map_err(|e| InstallError::io(format!("failed to create {}", dest.display()), e))?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| InstallError::network(url, e))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| InstallError::io(format!("failed to write {}", dest.display()), e))?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()
        .await
        .map_err(|e| InstallError::io(format!("failed to write {}", dest.display()), e))?;

    pb.finish_and_clear();
    tracing::debug!(bytes = downloaded, "download complete");

    Ok(downloaded)
}
