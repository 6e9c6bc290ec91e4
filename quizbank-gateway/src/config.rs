//! Gateway runtime configuration.

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_ENV: &str = "QUIZBANK_LISTEN_ADDR";

/// Address used when [`LISTEN_ADDR_ENV`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Settings read once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
}

impl GatewayConfig {
    /// Build the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = lookup(LISTEN_ADDR_ENV)
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        Self { listen_addr }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { listen_addr: DEFAULT_LISTEN_ADDR.to_owned() }
    }
}
