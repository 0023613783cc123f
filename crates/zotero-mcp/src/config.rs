//! Configuration for the Zotero MCP helpers.

/// Environment variable constants.
pub mod env {
    /// Selects local mode (the local Zotero HTTP API) when set to a truthy value.
    pub const ZOTERO_LOCAL: &str = "ZOTERO_LOCAL";

    /// Values accepted as true, compared case-insensitively.
    pub const TRUTHY: &[&str] = &["true", "yes", "1"];
}

/// Helper configuration.
///
/// Captures the local-mode flag once at startup so callers can inject it
/// instead of reading the process environment ad hoc. [`is_local_mode`]
/// remains available where a fresh read is wanted.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to target the local Zotero API instead of the web API.
    pub local_mode: bool,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(local_mode: bool) -> Self {
        Self { local_mode }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(is_local_mode()))
    }

    /// Check if local mode is enabled.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.local_mode
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Check whether local mode is enabled.
///
/// Reads `ZOTERO_LOCAL` fresh on every call; changes to the environment
/// between calls are observable.
#[must_use]
pub fn is_local_mode() -> bool {
    local_mode_from(std::env::var(env::ZOTERO_LOCAL).ok().as_deref())
}

/// Decide local mode from a raw environment value (`None` = unset).
#[must_use]
pub fn local_mode_from(value: Option<&str>) -> bool {
    value.is_some_and(|v| env::TRUTHY.iter().any(|t| v.eq_ignore_ascii_case(t)))
}
