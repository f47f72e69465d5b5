//! Archive extraction through the system `tar`.
//!
//! Release archives wrap everything in a single top-level directory
//! (`zig-linux-x86_64-0.11.0/`). Extraction strips that component so the
//! binary and `lib/` land directly in the scratch directory:
//!
//! ```text
//! Input:  zig-linux-x86_64-0.11.0.tar.xz
//!   zig-linux-x86_64-0.11.0/zig
//!   zig-linux-x86_64-0.11.0/lib/std/std.zig
//! Output: <scratch>/zig
//!         <scratch>/lib/std/std.zig
//! ```
//!
//! Compression is chosen from the file name suffix alone, the archive
//! contents are never sniffed.

use crate::error::{InstallError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The external archive tool.
pub const TAR: &str = "tar";

/// Compression implied by an archive's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Xz,
    Gzip,
    /// Left for `tar` to handle without a flag
    None,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if name.ends_with(".tar.xz") {
            Self::Xz
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Self::Gzip
        } else {
            Self::None
        }
    }

    fn flag(self) -> Option<&'static str> {
        match self {
            Self::Xz => Some("-J"),
            Self::Gzip => Some("-z"),
            Self::None => None,
        }
    }
}

/// Locate the archive tool on `PATH`.
pub fn find_tar() -> Result<PathBuf> {
    which::which(TAR).map_err(|_| InstallError::Precondition {
        tool: TAR.to_string(),
    })
}

/// Arguments passed to `tar` for extracting `archive` into `dest`.
pub fn tar_args(archive: &Path, dest: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    if let Some(flag) = Compression::from_path(archive).flag() {
        args.push(flag.into());
    }
    args.push("-xf".into());
    args.push(archive.into());
    args.push("-C".into());
    args.push(dest.into());
    args.push("--strip-components=1".into());
    args
}

/// Extract `archive` into `dest`, creating `dest` if needed.
pub fn extract_tarball(archive: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| {
        InstallError::installation(
            format!("failed to create extraction directory {}", dest.display()),
            e,
        )
    })?;

    let args = tar_args(archive, dest);
    tracing::debug!(?args, "running tar");

    let output = Command::new(TAR).args(&args).output().map_err(|e| {
        InstallError::Extraction {
            status: "failed to start".to_string(),
            output: e.to_string(),
        }
    })?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(InstallError::Extraction {
            status: output.status.to_string(),
            output: combined.trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_from_suffix() {
        assert_eq!(
            Compression::from_path(Path::new("/tmp/zig.tar.xz")),
            Compression::Xz
        );
        assert_eq!(
            Compression::from_path(Path::new("zig.tar.gz")),
            Compression::Gzip
        );
        assert_eq!(Compression::from_path(Path::new("zig.tgz")), Compression::Gzip);
        assert_eq!(Compression::from_path(Path::new("zig.tar")), Compression::None);
        // Only the suffix counts
        assert_eq!(
            Compression::from_path(Path::new("/tmp/tar.xz.d/zig.zip")),
            Compression::None
        );
    }

    #[test]
    fn test_tar_args_for_xz() {
        let args = tar_args(Path::new("/tmp/zig.tar.xz"), Path::new("/tmp/zig"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            ["-J", "-xf", "/tmp/zig.tar.xz", "-C", "/tmp/zig", "--strip-components=1"]
        );
    }

    #[test]
    fn test_tar_args_without_compression_flag() {
        let args = tar_args(Path::new("/tmp/zig.tar"), Path::new("/tmp/zig"));
        assert_eq!(args.len(), 5);
        assert_eq!(args[0], "-xf");
        assert_eq!(args[4], "--strip-components=1");
    }

    #[test]
    fn test_extract_garbage_is_extraction_error() {
        if find_tar().is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("broken.tar.gz");
        std::fs::write(&archive, b"definitely not gzip").unwrap();

        let err = extract_tarball(&archive, &dir.path().join("out")).unwrap_err();
        match err {
            InstallError::Extraction { output, .. } => assert!(!output.is_empty()),
            other => panic!("expected extraction error, got {:?}", other),
        }
    }
}
