//! User-facing status lines.
//!
//! These are the messages an operator reads while the installer runs; they
//! are separate from `tracing` diagnostics, which stay quiet unless
//! `--verbose` or `RUST_LOG` asks for them.

use colored::Colorize;
use std::fmt::Display;

pub fn step(msg: impl Display) {
    println!("👉 {} {}", "step:".cyan(), msg);
}

pub fn info(msg: impl Display) {
    println!("💡 {} {}", "info:".blue(), msg);
}

pub fn success(msg: impl Display) {
    println!("✅ {} {}", "success:".green(), msg);
}

pub fn warning(msg: impl Display) {
    println!("⚠️  {} {}", "warning:".yellow(), msg);
}

/// Errors go to stderr.
pub fn error(msg: impl Display) {
    eprintln!("❌ {} {}", "error:".red(), msg);
}
