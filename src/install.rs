//! Placing an extracted release into the installation directories.
//!
//! After extraction the scratch directory holds `zig` and `lib/`. The binary
//! is moved to `<bin-dir>/zig` and the library tree to `<lib-dir>/zig`, after
//! any previous installation at those paths has been removed. Nothing is
//! rolled back: if the library move fails the new binary stays in place.

use crate::config::{RunConfig, TOOL_NAME};
use crate::error::{InstallError, Result};
use crate::{extract, output};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the library directory inside the extracted archive.
const LIB_DIR_NAME: &str = "lib";

fn ensure_dir(path: &Path, what: &str) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        InstallError::installation(
            format!("failed to create {} directory {}", what, path.display()),
            e,
        )
    })
}

/// Remove a file or directory tree, treating "already gone" as success.
fn remove_path(path: &Path) -> io::Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Remove any existing binary and library tree for the tool.
pub fn remove_previous(config: &RunConfig) -> Result<()> {
    for path in [config.bin_path(), config.lib_path()] {
        tracing::debug!(path = %path.display(), "removing previous installation");
        remove_path(&path).map_err(|e| {
            InstallError::installation(format!("failed to remove {}", path.display()), e)
        })?;
    }
    Ok(())
}

/// Move the extracted binary and library tree out of the scratch directory.
pub fn place_files(config: &RunConfig) -> Result<()> {
    ensure_dir(&config.bin_dir, "bin")?;
    ensure_dir(&config.lib_dir, "lib")?;

    remove_previous(config)?;

    let bin_src = config.dest.join(TOOL_NAME);
    let bin_dst = config.bin_path();
    fs::rename(&bin_src, &bin_dst).map_err(|e| {
        InstallError::installation(
            format!(
                "failed to install {} binary {} -> {}",
                TOOL_NAME,
                bin_src.display(),
                bin_dst.display()
            ),
            e,
        )
    })?;

    let lib_src = config.dest.join(LIB_DIR_NAME);
    fs::read_dir(&lib_src).map_err(|e| {
        InstallError::installation(
            format!("failed to read lib directory {}", lib_src.display()),
            e,
        )
    })?;

    let lib_dst = config.lib_path();
    fs::rename(&lib_src, &lib_dst).map_err(|e| {
        InstallError::installation(
            format!(
                "failed to install {} libraries {} -> {}",
                TOOL_NAME,
                lib_src.display(),
                lib_dst.display()
            ),
            e,
        )
    })?;

    Ok(())
}

/// Extract the verified archive and install its contents.
pub fn install(config: &RunConfig) -> Result<()> {
    // Leftovers from an interrupted run would mix with the new release
    remove_path(&config.dest).map_err(|e| {
        InstallError::installation(
            format!("failed to clear extraction directory {}", config.dest.display()),
            e,
        )
    })?;

    output::step("extracting...");
    extract::extract_tarball(&config.tar_dest, &config.dest)?;

    output::step("installing...");
    place_files(config)
}

/// Best-effort removal of the downloaded archive and the scratch directory.
pub fn cleanup(config: &RunConfig) {
    for path in [&config.tar_dest, &config.dest] {
        if let Err(e) = remove_path(path) {
            tracing::warn!(path = %path.display(), error = %e, "cleanup failed");
        }
    }
}
