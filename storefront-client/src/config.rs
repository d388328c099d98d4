//! Client configuration

use std::time::Duration;

/// Connection settings for the workbook endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint URL (e.g., "http://localhost:8787")
    pub base_url: String,

    /// Per-request timeout for writes, in seconds
    pub timeout: u64,

    /// Upper bound for a whole read, in milliseconds
    pub read_timeout_ms: u64,

    /// Extra attempts after the first failed write
    pub max_retries: u32,

    /// Delay before the first retry; doubles on each further attempt
    pub retry_base_delay_ms: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            read_timeout_ms: 5000,
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }

    /// Load from `SHEET_API_URL` and friends (reads `.env` if present)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::new(
            std::env::var("SHEET_API_URL").unwrap_or_else(|_| "http://localhost:8787".into()),
        );
        Self {
            timeout: env_parse("SHEET_TIMEOUT_SECS").unwrap_or(defaults.timeout),
            read_timeout_ms: env_parse("SHEET_READ_TIMEOUT_MS").unwrap_or(defaults.read_timeout_ms),
            max_retries: env_parse("SHEET_MAX_RETRIES").unwrap_or(defaults.max_retries),
            retry_base_delay_ms: env_parse("SHEET_RETRY_DELAY_MS")
                .unwrap_or(defaults.retry_base_delay_ms),
            ..defaults
        }
    }

    /// Set the write timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the read deadline
    pub fn with_read_timeout_ms(mut self, millis: u64) -> Self {
        self.read_timeout_ms = millis;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_retry_base_delay_ms(mut self, millis: u64) -> Self {
        self.retry_base_delay_ms = millis;
        self
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Backoff before retry number `attempt` (1-based)
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.retry_base_delay_ms.saturating_mul(factor))
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::SheetClient> {
        crate::SheetClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8787")
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_delay_doubles() {
        let config = ClientConfig::default().with_retry_base_delay_ms(100);
        assert_eq!(config.retry_delay(1), Duration::from_millis(100));
        assert_eq!(config.retry_delay(2), Duration::from_millis(200));
        assert_eq!(config.retry_delay(4), Duration::from_millis(800));
    }

    #[test]
    fn test_retry_delay_saturates() {
        let config = ClientConfig::default().with_retry_base_delay_ms(u64::MAX);
        assert_eq!(config.retry_delay(10), Duration::from_millis(u64::MAX));
    }
}
