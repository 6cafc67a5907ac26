use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Replacement profile table; the embedded one is used when unset.
    pub profiles_path: Option<String>,
    /// Artificial delay before answering a score request, in milliseconds.
    pub simulated_delay_ms: u64,
    pub max_body_bytes: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            profiles_path: None,
            simulated_delay_ms: 0,
            max_body_bytes: 64 * 1024,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, applying defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            port: var("PORT")
                .map(|p| p.trim().parse::<u16>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?
                .unwrap_or(defaults.port),
            profiles_path: var("CREDIT_PROFILES_PATH"),
            simulated_delay_ms: var("SIMULATED_DELAY_MS")
                .map(|d| d.trim().parse::<u64>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("SIMULATED_DELAY_MS must be a whole number"))?
                .unwrap_or(defaults.simulated_delay_ms),
            max_body_bytes: var("MAX_BODY_BYTES")
                .map(|b| b.trim().parse::<usize>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a whole number"))?
                .unwrap_or(defaults.max_body_bytes),
            rate_limit_per_second: var("RATE_LIMIT_PER_SECOND")
                .map(|r| r.trim().parse::<u64>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a whole number"))?
                .unwrap_or(defaults.rate_limit_per_second),
            rate_limit_burst: var("RATE_LIMIT_BURST")
                .map(|r| r.trim().parse::<u32>())
                .transpose()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_BURST must be a whole number"))?
                .unwrap_or(defaults.rate_limit_burst),
        };

        if config.port == 0 {
            anyhow::bail!("PORT must be a valid number between 1-65535");
        }
        if config.max_body_bytes == 0 {
            anyhow::bail!("MAX_BODY_BYTES must be greater than zero");
        }
        if config.rate_limit_per_second == 0 || config.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be greater than zero");
        }

        tracing::debug!("Server Port: {}", config.port);
        if let Some(ref path) = config.profiles_path {
            tracing::info!("Credit profiles override: {}", path);
        }
        tracing::debug!(
            "Rate limit: {}/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }

    /// Delay to apply before answering, if any.
    pub fn simulated_delay(&self) -> Option<Duration> {
        (self.simulated_delay_ms > 0).then(|| Duration::from_millis(self.simulated_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.profiles_path.is_none());
        assert!(config.simulated_delay().is_none());
        assert_eq!(config.max_body_bytes, 64 * 1024);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CREDIT_PROFILES_PATH", "/etc/profiles.json"),
            ("SIMULATED_DELAY_MS", "1500"),
            ("RATE_LIMIT_BURST", "5"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.profiles_path.as_deref(), Some("/etc/profiles.json"));
        assert_eq!(config.simulated_delay(), Some(Duration::from_millis(1500)));
        assert_eq!(config.rate_limit_burst, 5);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("PORT", "  "), ("CREDIT_PROFILES_PATH", "")]))
            .unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.profiles_path.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(Config::from_lookup(lookup(&[("PORT", "abc")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PORT", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("MAX_BODY_BYTES", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("RATE_LIMIT_PER_SECOND", "0")])).is_err());
    }
}
