//! Terminal colour control.
//!
//! Honours `NO_COLOR` (<https://no-color.org/>) and the `CLICOLOR` /
//! `CLICOLOR_FORCE` conventions. Without any of them, colours are enabled only
//! when stdout is a terminal.
use colored::control;

/// Decide whether output is coloured, given the relevant environment values.
fn should_colorize(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
    is_tty: bool,
) -> bool {
    // NO_COLOR wins over everything
    if no_color.is_some() {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}

/// Configure colour output for the whole process. Call once, early in `main`.
pub fn init_colors() {
    let no_color = std::env::var("NO_COLOR").ok();
    let clicolor = std::env::var("CLICOLOR").ok();
    let clicolor_force = std::env::var("CLICOLOR_FORCE").ok();
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());

    control::set_override(should_colorize(
        no_color.as_deref(),
        clicolor.as_deref(),
        clicolor_force.as_deref(),
        is_tty,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_wins() {
        assert!(!should_colorize(Some(""), None, Some("1"), true));
    }

    #[test]
    fn test_clicolor_force() {
        assert!(should_colorize(None, None, Some("1"), false));
        assert!(!should_colorize(None, None, Some("0"), false));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!should_colorize(None, Some("0"), None, true));
    }

    #[test]
    fn test_tty_default() {
        assert!(should_colorize(None, None, None, true));
        assert!(!should_colorize(None, Some("1"), None, false));
    }
}
