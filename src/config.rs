//! Configuration for page fetching and extraction

use std::env;

/// Desktop browser user agent sent with every request, to avoid trivial
/// bot-blocking on sites that reject default client strings.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

/// Configuration for the page cache
#[derive(Debug, Clone)]
pub struct PageCacheConfig {
    /// Maximum characters returned by text extraction (default: 2000)
    pub max_chars: usize,
    /// HTTP request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User agent sent with every request (default: a desktop Chrome string)
    pub user_agent: String,
}

impl PageCacheConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_chars: env::var("PAGE_CACHE_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_chars),
            timeout_secs: env::var("PAGE_CACHE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: env::var("PAGE_CACHE_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars == 0 {
            return Err("max_chars must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for PageCacheConfig {
    fn default() -> Self {
        Self {
            max_chars: 2000,
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
