//! Library interface for the Zig installer.
//!
//! Exposes each install stage so it can be tested on its own, plus
//! [`run`] which drives the whole flow.

pub mod checksum;
pub mod colors;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod index;
pub mod install;
pub mod output;
pub mod pipeline;
pub mod platform;

// Re-export commonly used items
pub use config::{Cli, RunConfig};
pub use error::{InstallError, Result};
pub use pipeline::run;
