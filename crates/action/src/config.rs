//! Action configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `WHATSAPP_COUNTRY_CODE` - Country code (digits, no `+`) prepended to
//!   resolved phone numbers that do not already carry it. Unset disables
//!   the insertion step.

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_API_VERSION: &str = "2026-01";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Messaging action configuration.
///
/// Implements `Debug` manually to redact the Admin API token.
#[derive(Clone)]
pub struct ActionConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Admin API access token (HIGH PRIVILEGE - full store access)
    pub admin_token: SecretString,
    /// Country code inserted into resolved phone numbers, when configured
    pub whatsapp_country_code: Option<String>,
}

impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field("admin_token", &"[REDACTED]")
            .field("whatsapp_country_code", &self.whatsapp_country_code)
            .finish()
    }
}

impl ActionConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let whatsapp_country_code = get_optional_env("WHATSAPP_COUNTRY_CODE");
        if let Some(code) = &whatsapp_country_code
            && !code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidEnvVar(
                "WHATSAPP_COUNTRY_CODE".to_string(),
                format!("expected digits only, got {code:?}"),
            ));
        }

        Ok(Self {
            store: get_required_env("SHOPIFY_STORE")?,
            api_version: get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            admin_token: SecretString::from(get_required_env("SHOPIFY_ADMIN_TOKEN")?),
            whatsapp_country_code,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_admin_token() {
        let config = ActionConfig {
            store: "test.myshopify.com".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            admin_token: SecretString::from("shpat_super_secret_token"),
            whatsapp_country_code: Some("65".to_string()),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("65"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret_token"));
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let err = ConfigError::MissingEnvVar("SHOPIFY_STORE".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHOPIFY_STORE"
        );
    }

    #[test]
    fn test_default_api_version() {
        assert_eq!(DEFAULT_API_VERSION, "2026-01");
    }
}
