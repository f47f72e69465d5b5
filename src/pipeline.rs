//! The install run, from index lookup to cleanup.
//!
//! Stages run strictly in order and the first failure ends the run:
//!
//! 1. check that `tar` is available
//! 2. fetch the release index and resolve the artifact for the platform
//! 3. reuse or download the archive, verifying its checksum
//! 4. extract and move the files into place
//! 5. remove the archive and scratch directory

use crate::config::RunConfig;
use crate::download::{self, FetchOutcome};
use crate::error::Result;
use crate::{extract, index, install, output};

pub async fn run(config: &RunConfig) -> Result<FetchOutcome> {
    let tar = extract::find_tar()?;
    tracing::debug!(tar = %tar.display(), ?config, "starting install");

    let client = index::build_client()?;

    output::step(format!("fetching release index from {}...", config.index_url));
    let release_index = index::fetch_index(&client, &config.index_url).await?;
    let artifact = index::resolve_artifact(&release_index, &config.version, &config.platform)?;
    tracing::debug!(tarball = %artifact.tarball, shasum = %artifact.shasum, "resolved artifact");

    output::step(format!(
        "preparing Zig {} for {}...",
        config.version, config.platform
    ));
    let outcome = download::fetch_artifact(&client, &artifact, &config.tar_dest).await?;

    install::install(config)?;

    output::step("cleaning up...");
    install::cleanup(config);

    output::success(format!("Zig {} installed successfully! 🎉", config.version));
    Ok(outcome)
}
