//! Server configuration

use std::str::FromStr;

/// Where history records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub store_backend: StoreBackend,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    pub google_api_key: Option<String>,
    pub nlp_api_url: Option<String>,
    pub strict_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to postgres store");
                StoreBackend::Postgres
            }),
            None => StoreBackend::Postgres,
        };

        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "host=localhost user=postgres dbname=healthspeak".into()),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".into()),
            store_backend,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec!["*".to_string()]),
            rate_limit_rps: lookup("RATE_LIMIT_RPS")
                .and_then(|v| v.parse().ok())
                .filter(|&rps| rps > 0)
                .unwrap_or(100),
            google_api_key: lookup("GOOGLE_API_KEY").filter(|k| !k.is_empty()),
            nlp_api_url: lookup("NLP_API_URL").filter(|u| !u.is_empty()),
            strict_validation: lookup("HISTORY_STRICT_VALIDATION")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.rate_limit_rps, 100);
        assert!(config.google_api_key.is_none());
        assert!(!config.strict_validation);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STORE_BACKEND", "Memory"),
            ("CORS_ORIGINS", "http://localhost:3000, https://healthspeak.app"),
            ("RATE_LIMIT_RPS", "25"),
            ("GOOGLE_API_KEY", "key"),
            ("HISTORY_STRICT_VALIDATION", "true"),
        ]);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://healthspeak.app"]
        );
        assert_eq!(config.rate_limit_rps, 25);
        assert_eq!(config.google_api_key.as_deref(), Some("key"));
        assert!(config.strict_validation);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = load(&[
            ("STORE_BACKEND", "mongo"),
            ("RATE_LIMIT_RPS", "0"),
            ("GOOGLE_API_KEY", ""),
        ]);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.rate_limit_rps, 100);
        assert!(config.google_api_key.is_none());
    }
}
