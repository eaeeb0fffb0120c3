// Suite configuration
//
// Everything is overridable from the environment so the same suite can run
// headed locally and headless in CI without code changes.

use std::path::PathBuf;
use std::time::Duration;

/// Landing page of the search engine under test.
pub const DEFAULT_BASE_URL: &str = "https://start.duckduckgo.com/";

/// Default wait window for navigation, selectors, and responses.
///
/// Matches Playwright's standard 30-second default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Extended wait window for the one scenario with a slow redirect chain
/// (URL shortening resolves through an external redirector).
pub const DEFAULT_SLOW_TIMEOUT: Duration = Duration::from_secs(60);

/// Runtime configuration for a suite run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// URL of the landing page.
    pub base_url: String,
    /// Launch the browser headless.
    pub headless: bool,
    /// Directory holding reference snapshots (and mismatch artifacts).
    pub snapshot_dir: PathBuf,
    /// Rewrite reference snapshots instead of comparing against them.
    pub update_snapshots: bool,
    /// Default wait window.
    pub timeout: Duration,
    /// Extended wait window for slow redirect chains.
    pub slow_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            snapshot_dir: PathBuf::from("snapshots"),
            update_snapshots: false,
            timeout: DEFAULT_TIMEOUT,
            slow_timeout: DEFAULT_SLOW_TIMEOUT,
        }
    }
}

impl SuiteConfig {
    /// Reads configuration from `SMOKE_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests can drive it
    /// without mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("SMOKE_BASE_URL").unwrap_or(defaults.base_url),
            headless: lookup("SMOKE_HEADLESS")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.headless),
            snapshot_dir: lookup("SMOKE_SNAPSHOT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_dir),
            update_snapshots: lookup("SMOKE_UPDATE_SNAPSHOTS")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.update_snapshots),
            timeout: lookup("SMOKE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            slow_timeout: lookup("SMOKE_SLOW_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.slow_timeout),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "True" | "yes")
}
