// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Log events go through `tracing` and are written to stderr. The filter is
//! taken from `--log-level` if given, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither the CLI nor the environment sets one.
pub const DEFAULT_FILTER: &str = "photo_lightbox=info";

/// Builds the filter for a `--log-level` value.
///
/// A bare level ("debug") applies to this crate only so dependencies stay
/// quiet; anything else is handed to [`EnvFilter`] as a directive string.
#[must_use]
pub fn filter_for(cli_level: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level.map(str::trim).filter(|level| !level.is_empty()) {
        let directive = if is_bare_level(level) {
            format!("photo_lightbox={}", level.to_ascii_lowercase())
        } else {
            level.to_string()
        };
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("Ignoring invalid --log-level '{level}': {err}"),
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(cli_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(cli_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn is_bare_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "off" | "error" | "warn" | "info" | "debug" | "trace"
    )
}
