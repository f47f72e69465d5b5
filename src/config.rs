//! Command-line and environment configuration.
//!
//! Every option resolves in the same order: explicit flag, then the named
//! `ZIG_*` environment variable, then a hard-coded default. The result is
//! frozen into a [`RunConfig`] before any other work happens.

use crate::platform;
use clap::Parser;
use std::path::PathBuf;

/// Name of the installed binary and of the library directory.
pub const TOOL_NAME: &str = "zig";

/// Official release index.
pub const DEFAULT_INDEX_URL: &str = "https://ziglang.org/download/index.json";

#[derive(Parser, Debug)]
#[command(name = "zig-install")]
#[command(
    author,
    about = "Download, verify and install a Zig release",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to download the Zig tarball
    #[arg(long, env = "ZIG_TAR_DEST", default_value = "/tmp/zig.tar.xz")]
    pub tar_dest: PathBuf,

    /// Temporary directory for extraction
    #[arg(long, env = "ZIG_DEST", default_value = "/tmp/zig")]
    pub dest: PathBuf,

    /// Installation directory for the Zig binary
    #[arg(long, env = "ZIG_BIN_DIR", default_value = "/usr/local/bin")]
    pub bin_dir: PathBuf,

    /// Installation directory for the Zig libraries
    #[arg(long, env = "ZIG_LIB_DIR", default_value = "/usr/local/lib")]
    pub lib_dir: PathBuf,

    /// URL of the Zig download index
    #[arg(long, env = "ZIG_INDEX_URL", default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// Zig version to install (e.g. master, 0.11.0)
    #[arg(long, env = "ZIG_VERSION", default_value = "master")]
    pub version: String,

    /// Platform key to install for (defaults to the running host, e.g. x86_64-linux)
    #[arg(long, env = "ZIG_PLATFORM")]
    pub platform: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            tar_dest: self.tar_dest,
            dest: self.dest,
            bin_dir: self.bin_dir,
            lib_dir: self.lib_dir,
            index_url: self.index_url,
            version: self.version,
            platform: self.platform.unwrap_or_else(platform::detect),
        }
    }
}

/// Immutable settings for a single install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where the release archive is downloaded (and cached between runs)
    pub tar_dest: PathBuf,
    /// Scratch directory the archive is extracted into
    pub dest: PathBuf,
    pub bin_dir: PathBuf,
    pub lib_dir: PathBuf,
    pub index_url: String,
    pub version: String,
    /// `<arch>-<os>` key used to pick the artifact
    pub platform: String,
}

impl RunConfig {
    /// Final location of the binary.
    pub fn bin_path(&self) -> PathBuf {
        self.bin_dir.join(TOOL_NAME)
    }

    /// Final location of the library tree.
    pub fn lib_path(&self) -> PathBuf {
        self.lib_dir.join(TOOL_NAME)
    }
}
