use std::io::IsTerminal;

/// Whether the author can be prompted. CI environments and piped stdin are
/// non-interactive; `CHRONICLE_FORCE_TTY` overrides the detection for tests
/// and unusual terminals.
pub fn is_interactive() -> bool {
    if std::env::var("CHRONICLE_FORCE_TTY").is_ok() {
        return true;
    }

    if detect_ci_env_var().is_some() {
        return false;
    }

    std::io::stdin().is_terminal()
}

fn detect_ci_env_var() -> Option<&'static str> {
    const CI_ENV_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
        "BUILDKITE",
        "TF_BUILD",
    ];

    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok())
        .copied()
}
