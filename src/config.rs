//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Startup fails closed: a missing token or a malformed repository
//! string stops the service instead of failing individual requests later.
//!
//! ## Required Variables
//!
//! - `GITHUB_TOKEN` - Token used to open issues
//! - `MATTERMOST_URL` - Mattermost server URL used for API calls
//! - `MATTERMOST_TOKEN` - Bot or personal access token for the Mattermost API
//!
//! ## Optional Variables
//!
//! - `MATTERMOST_SITE_URL` - Public site URL for permalinks (default: `MATTERMOST_URL`)
//! - `GITHUB_API_URL` - GitHub API root (default: `https://api.github.com`)
//! - `DOCUP_ADMIN_REPOSITORY` - `owner/name` receiving admin requests
//! - `DOCUP_DEVELOPER_REPOSITORY` - `owner/name` receiving developer requests
//! - `DOCUP_HANDBOOK_REPOSITORY` - `owner/name` receiving handbook requests
//! - `DOCUP_LABELS` - Comma-separated labels for every created issue
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Repository and label settings can be reloaded at runtime with `SIGHUP`;
//! everything else needs a restart.

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::domain::entities::IssueRouting;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    pub github_api_url: String,
    pub github_token: String,

    /// Where the Mattermost API is reached.
    pub mattermost_url: String,
    /// Public address used when building permalinks.
    pub mattermost_site_url: String,
    pub mattermost_token: String,

    // ── Routing (reloadable) ────────────────────────────────────────────────
    pub admin_repository: String,
    pub developer_repository: String,
    pub handbook_repository: String,
    pub labels: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());
        let github_token = env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?;

        let mattermost_url = env::var("MATTERMOST_URL").context("MATTERMOST_URL must be set")?;
        let mattermost_site_url = env::var("MATTERMOST_SITE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| mattermost_url.clone());
        let mattermost_token =
            env::var("MATTERMOST_TOKEN").context("MATTERMOST_TOKEN must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            github_api_url,
            github_token,
            mattermost_url,
            mattermost_site_url,
            mattermost_token,
            admin_repository: env::var("DOCUP_ADMIN_REPOSITORY").unwrap_or_default(),
            developer_repository: env::var("DOCUP_DEVELOPER_REPOSITORY").unwrap_or_default(),
            handbook_repository: env::var("DOCUP_HANDBOOK_REPOSITORY").unwrap_or_default(),
            labels: env::var("DOCUP_LABELS").unwrap_or_default(),
        })
    }

    /// Builds the routing snapshot from the repository and label settings.
    pub fn routing(&self) -> IssueRouting {
        IssueRouting::from_raw(
            &self.admin_repository,
            &self.developer_repository,
            &self.handbook_repository,
            &self.labels,
        )
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a token is empty
    /// - a server or site URL is not an absolute `http`/`https` URL
    /// - a repository setting is not `owner/name`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.github_token.trim().is_empty() {
            anyhow::bail!("GITHUB_TOKEN must not be empty");
        }
        if self.mattermost_token.trim().is_empty() {
            anyhow::bail!("MATTERMOST_TOKEN must not be empty");
        }

        validate_http_url("GITHUB_API_URL", &self.github_api_url)?;
        validate_http_url("MATTERMOST_URL", &self.mattermost_url)?;
        validate_http_url("MATTERMOST_SITE_URL", &self.mattermost_site_url)?;

        self.routing()
            .validate()
            .context("Invalid repository configuration")?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Mattermost: {}", self.mattermost_url);
        tracing::info!("  Mattermost site URL: {}", self.mattermost_site_url);
        tracing::info!("  Mattermost token: {}", mask_secret(&self.mattermost_token));
        tracing::info!("  GitHub API: {}", self.github_api_url);
        tracing::info!("  GitHub token: {}", mask_secret(&self.github_token));
        tracing::info!("  Admin repository: {}", display_or_unset(&self.admin_repository));
        tracing::info!(
            "  Developer repository: {}",
            display_or_unset(&self.developer_repository)
        );
        tracing::info!(
            "  Handbook repository: {}",
            display_or_unset(&self.handbook_repository)
        );
        tracing::info!("  Labels: {}", display_or_unset(&self.labels));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
    }
    Ok(())
}

fn display_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(unset)"
    } else {
        value
    }
}

/// Masks a token for logging, keeping only its last four characters.
///
/// Tokens of eight characters or fewer are masked entirely.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use serial_test::serial;

    const VARS: [&str; 11] = [
        "GITHUB_TOKEN",
        "GITHUB_API_URL",
        "MATTERMOST_URL",
        "MATTERMOST_SITE_URL",
        "MATTERMOST_TOKEN",
        "DOCUP_ADMIN_REPOSITORY",
        "DOCUP_DEVELOPER_REPOSITORY",
        "DOCUP_HANDBOOK_REPOSITORY",
        "DOCUP_LABELS",
        "LISTEN",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            github_token: "ghp_0123456789".to_string(),
            mattermost_url: "http://mattermost:8065".to_string(),
            mattermost_site_url: "https://chat.example.com".to_string(),
            mattermost_token: "mm-token-value".to_string(),
            admin_repository: "mattermost/docs".to_string(),
            developer_repository: "mattermost/mattermost-developer-documentation".to_string(),
            handbook_repository: String::new(),
            labels: "Docs/Needed".to_string(),
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("ghp_0123456789"), "***6789");
        assert_eq!(mask_secret("short"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Empty tokens fail closed
        config.github_token = "  ".to_string();
        assert!(config.validate().is_err());
        config.github_token = "ghp_0123456789".to_string();

        config.mattermost_token = String::new();
        assert!(config.validate().is_err());
        config.mattermost_token = "mm-token-value".to_string();

        // Site URL must be absolute http(s)
        config.mattermost_site_url = "chat.example.com".to_string();
        assert!(config.validate().is_err());
        config.mattermost_site_url = "ftp://chat.example.com".to_string();
        assert!(config.validate().is_err());
        config.mattermost_site_url = "https://chat.example.com".to_string();

        // Repository strings must be owner/name
        config.handbook_repository = "handbook".to_string();
        assert!(config.validate().is_err());
        config.handbook_repository = "/handbook".to_string();
        assert!(config.validate().is_err());
        config.handbook_repository = "mattermost/handbook".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_routing_from_config() {
        let routing = valid_config().routing();

        assert_eq!(
            routing.resolve(Category::Admin).unwrap().to_string(),
            "mattermost/docs"
        );
        assert!(routing.resolve(Category::Handbook).is_err());
        assert_eq!(routing.labels().as_slice(), ["Docs/Needed"]);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GITHUB_TOKEN", "ghp_0123456789");
            env::set_var("MATTERMOST_URL", "http://mattermost:8065");
            env::set_var("MATTERMOST_TOKEN", "mm-token-value");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert_eq!(config.mattermost_site_url, "http://mattermost:8065");
        assert_eq!(config.labels, "");
        assert!(config.routing().routed_categories().is_empty());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_tokens() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("MATTERMOST_URL", "http://mattermost:8065");
            env::set_var("MATTERMOST_TOKEN", "mm-token-value");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_site_url_override() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GITHUB_TOKEN", "ghp_0123456789");
            env::set_var("MATTERMOST_URL", "http://mattermost:8065");
            env::set_var("MATTERMOST_SITE_URL", "https://chat.example.com");
            env::set_var("MATTERMOST_TOKEN", "mm-token-value");
            env::set_var("DOCUP_DEVELOPER_REPOSITORY", "org/repo");
            env::set_var("DOCUP_LABELS", "a,b,c");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.mattermost_site_url, "https://chat.example.com");
        assert_eq!(
            config.routing().routed_categories(),
            vec![Category::Developer]
        );

        clear_env();
    }
}
