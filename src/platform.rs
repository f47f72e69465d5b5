//! Platform detection for selecting the correct release artifact.
//!
//! The release index keys its artifacts by `<arch>-<os>` pairs such as
//! `x86_64-linux` or `aarch64-macos`. Rust's own target names already match
//! that vocabulary for the common hosts, but other ecosystems spell some of
//! them differently (`amd64`, `386`, `darwin`), so every component is passed
//! through an explicit alias table before the key is formed.
//!
//! # Examples
//!
//! ```
//! use zig_installer::platform;
//!
//! assert_eq!(platform::platform_key("amd64", "darwin"), "x86_64-macos");
//! assert_eq!(platform::platform_key("aarch64", "linux"), "aarch64-linux");
//! ```

/// Architecture spellings that differ from the index vocabulary.
const ARCH_ALIASES: &[(&str, &str)] = &[("amd64", "x86_64"), ("386", "x86")];

/// Operating system spellings that differ from the index vocabulary.
const OS_ALIASES: &[(&str, &str)] = &[("darwin", "macos")];

fn normalize<'a>(value: &'a str, aliases: &[(&str, &'a str)]) -> &'a str {
    aliases
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
        .unwrap_or(value)
}

/// Normalize an architecture name through the alias table.
pub fn normalize_arch(arch: &str) -> &str {
    normalize(arch, ARCH_ALIASES)
}

/// Normalize an operating system name through the alias table.
pub fn normalize_os(os: &str) -> &str {
    normalize(os, OS_ALIASES)
}

/// Build the `<arch>-<os>` key for an arbitrary architecture/OS pair.
pub fn platform_key(arch: &str, os: &str) -> String {
    format!("{}-{}", normalize_arch(arch), normalize_os(os))
}

/// Platform key of the running host.
pub fn detect() -> String {
    platform_key(std::env::consts::ARCH, std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_applied() {
        assert_eq!(platform_key("amd64", "darwin"), "x86_64-macos");
        assert_eq!(platform_key("386", "linux"), "x86-linux");
        assert_eq!(platform_key("amd64", "linux"), "x86_64-linux");
    }

    #[test]
    fn test_unmapped_values_pass_through() {
        assert_eq!(platform_key("aarch64", "macos"), "aarch64-macos");
        assert_eq!(platform_key("riscv64", "freebsd"), "riscv64-freebsd");
        assert_eq!(normalize_arch("arm64"), "arm64");
        assert_eq!(normalize_os("windows"), "windows");
    }

    #[test]
    fn test_detect() {
        let key = detect();
        assert!(key.contains('-'));
        #[cfg(all(target_arch = "x86_64", target_os = "linux"))]
        assert_eq!(key, "x86_64-linux");
        #[cfg(all(target_arch = "aarch64", target_os = "macos"))]
        assert_eq!(key, "aarch64-macos");
    }
}
