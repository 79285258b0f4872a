//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can prepare the
//! store location through the service layer that owns it.

/// Ensure the data file's directory exists; warn on a missing public directory.
pub async fn ensure_env(public_dir: &str, data_file: &str) -> anyhow::Result<()> {
    common::env::ensure_env(public_dir, data_file).await
}
