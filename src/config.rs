//! Configuration management for the admin engine.
//!
//! Loads configuration from environment variables with a default for
//! every knob, so the binary runs with no .env file at all. The only
//! tunables are the simulated backend latencies, the resend cooldown
//! for verification codes, and the page sizes of the list screens.

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub latency: LatencyConfig,
    pub auth: AuthConfig,
    pub paging: PagingConfig,
}

/// Simulated backend latency in milliseconds. Zero disables the delay.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    pub fetch_ms: u64,
    pub send_ms: u64,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Seconds an operator must wait before requesting another code.
    pub resend_cooldown_secs: i64,
}

#[derive(Debug, Clone)]
pub struct PagingConfig {
    pub default_page_size: usize,
    pub activity_page_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            latency: LatencyConfig {
                fetch_ms: env_or("LOCKER_FETCH_DELAY_MS", "1000").parse().unwrap_or(1000),
                send_ms: env_or("LOCKER_SEND_DELAY_MS", "2000").parse().unwrap_or(2000),
            },
            auth: AuthConfig {
                resend_cooldown_secs: env_or("LOCKER_RESEND_COOLDOWN_SECS", "60")
                    .parse()
                    .unwrap_or(60),
            },
            paging: PagingConfig {
                default_page_size: env_or("LOCKER_PAGE_SIZE", "20").parse().unwrap_or(20),
                activity_page_size: env_or("LOCKER_ACTIVITY_PAGE_SIZE", "10")
                    .parse()
                    .unwrap_or(10),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_to_default() {
        assert_eq!(env_or("LOCKER_NO_SUCH_KEY", "7"), "7");
    }

    #[test]
    fn test_env_or_prefers_environment() {
        env::set_var("LOCKER_CONFIG_TEST_KEY", "13");
        assert_eq!(env_or("LOCKER_CONFIG_TEST_KEY", "7"), "13");
        env::remove_var("LOCKER_CONFIG_TEST_KEY");
    }
}
