pub fn git_commit_hash() -> &'static str {
    match option_env!("JOBPORTAL_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Version banner logged once at startup.
pub fn banner() -> String {
    format!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        git_commit_hash()
    )
}
