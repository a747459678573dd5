//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdin};

/// Check if the user can answer a prompt
///
/// The question goes to stderr and the answer comes from stdin, so both
/// must be terminals.
pub fn is_interactive() -> bool {
    if !stdin_is_terminal() || !stderr().is_terminal() {
        return false;
    }

    // Check for non-interactive shell indicators
    if env::var("DEBIAN_FRONTEND").unwrap_or_default() == "noninteractive" {
        return false;
    }

    true
}

/// Check if stdin is connected to a terminal
pub fn stdin_is_terminal() -> bool {
    stdin().is_terminal()
}

/// Check if colored output should be used
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // CI logs often keep escape codes verbatim
    if is_ci_environment() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return false;
    }

    stderr().is_terminal()
}

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "BUILDKITE",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}
