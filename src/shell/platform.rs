//! Platform-specific shell selection.

/// Shell used to interpret step command lines.
///
/// Always a plain POSIX `sh` on Unix so that step behavior does not
/// depend on the user's login shell or rc files.
pub fn shell_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd.exe"
    } else {
        "sh"
    }
}

/// Flag that makes [`shell_program`] run a single command string.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
