//! Configuration management.
//!
//! Loaded once at startup from environment variables; immutable afterwards.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Outbound email (SMTP) configuration
    pub email: EmailConfig,
    /// Site-level settings (absolute links, pagination)
    pub site: SiteConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Outbound email configuration.
///
/// An empty `smtp_host` puts the mailer in no-op mode (logs only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// Sender address for all share emails
    pub smtp_from: String,
    pub use_starttls: bool,
}

/// Site-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL used to build absolute links in share emails
    pub base_url: String,
    /// Posts per page on the listing view
    pub posts_per_page: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("BLOG_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/blog".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            email: EmailConfig {
                smtp_host: std::env::var("SMTP_HOST").unwrap_or_default(),
                smtp_port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(587),
                smtp_username: std::env::var("SMTP_USERNAME").ok(),
                smtp_password: std::env::var("SMTP_PASSWORD").ok(),
                smtp_from: std::env::var("SMTP_FROM")
                    .unwrap_or_else(|_| "noreply@localhost".to_string()),
                use_starttls: std::env::var("SMTP_STARTTLS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(true),
            },
            site: {
                let posts_per_page = match std::env::var("BLOG_POSTS_PER_PAGE") {
                    Ok(raw) => raw
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| {
                            format!("BLOG_POSTS_PER_PAGE must be a positive integer, got '{raw}'")
                        })?,
                    Err(_) => 3,
                };

                SiteConfig {
                    base_url: std::env::var("SITE_BASE_URL")
                        .unwrap_or_else(|_| "http://localhost:8000".to_string())
                        .trim_end_matches('/')
                        .to_string(),
                    posts_per_page,
                }
            },
        })
    }
}
