use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A missing URL or key must not abort startup: the service comes up
        // anyway and answers 503 until both are provided.
        let supabase_url = env::var("SUPABASE_URL").unwrap_or_default();
        let supabase_anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            supabase_url,
            supabase_anon_key,
            service_port,
            service_host,
        })
    }

    /// True iff both the Supabase URL and the anon key are non-empty.
    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Supabase URL: {}",
            if self.supabase_url.is_empty() { "(not set)" } else { &self.supabase_url });
        tracing::info!("  Supabase anon key: {}",
            if self.supabase_anon_key.is_empty() { "(not set)" } else { "(set)" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SUPABASE_URL");
            env::remove_var("SUPABASE_ANON_KEY");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    fn config_with(url: &str, key: &str) -> Config {
        Config {
            supabase_url: url.to_string(),
            supabase_anon_key: key.to_string(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        }
    }

    #[test]
    fn test_is_configured_both_set() {
        assert!(config_with("https://example.supabase.co", "anon-key").is_configured());
    }

    #[test]
    fn test_is_configured_missing_url() {
        assert!(!config_with("", "anon-key").is_configured());
    }

    #[test]
    fn test_is_configured_missing_key() {
        assert!(!config_with("https://example.supabase.co", "").is_configured());
    }

    #[test]
    fn test_is_configured_both_missing() {
        assert!(!config_with("", "").is_configured());
    }

    // All scenarios that touch the process environment live in one test:
    // cargo runs tests on parallel threads and env vars are process-wide.
    #[test]
    fn test_from_env() {
        clear_env_vars();
        unsafe {
            env::set_var("SUPABASE_URL", "https://example.supabase.co");
            env::set_var("SUPABASE_ANON_KEY", "anon-key");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert!(config.is_configured());

        // Missing Supabase values default to empty instead of failing
        clear_env_vars();
        let config = Config::from_env().unwrap();

        assert_eq!(config.supabase_url, "");
        assert_eq!(config.supabase_anon_key, "");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert!(!config.is_configured());

        // The service port is still validated
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SERVICE_PORT"));

        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }
        assert!(Config::from_env().is_err());

        clear_env_vars();
    }
}
