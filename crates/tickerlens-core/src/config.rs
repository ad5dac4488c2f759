use std::env;

/// Environment variable carrying the data service base URL.
pub const ENV_BASE_URL: &str = "TICKERLENS_API_URL";

/// Hard client-side timeout applied to every snapshot request.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Externally supplied client configuration.
///
/// The base URL is never hard-coded in core logic; it comes from the
/// environment or an explicit override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Read the base URL from [`ENV_BASE_URL`], if set and non-empty.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var(ENV_BASE_URL).ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ApiConfig::new("https://data.example.test");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn timeout_override() {
        let config = ApiConfig::new("https://data.example.test").with_timeout_ms(1_500);
        assert_eq!(config.timeout_ms, 1_500);
    }
}
