//! Metrics configuration.

use std::env;

/// Whether route metrics are collected and exposed
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .ok()
            .and_then(|v| v.to_lowercase().parse().ok())
            .unwrap_or(true);

        Self { enabled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::ENV_MUTEX;

    #[test]
    fn test_metrics_config_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();

        unsafe { env::set_var("METRICS_ENABLED", "FALSE") };
        assert!(!MetricsConfig::from_env().enabled);

        unsafe { env::set_var("METRICS_ENABLED", "not-a-bool") };
        assert!(MetricsConfig::from_env().enabled);

        unsafe { env::remove_var("METRICS_ENABLED") };
        assert!(MetricsConfig::from_env().enabled);
    }
}
