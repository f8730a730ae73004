/// Result alias used for app-level plumbing across binaries.
pub type Result<T> = anyhow::Result<T>;
