use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_SITE_URL: &str = "https://www.magiccityair.com";
pub const DEFAULT_CONTACT_EMAIL: &str = "info@magiccityair.com";
pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    /// Public origin used for absolute URLs (sitemap), without trailing slash
    pub site_url: String,

    // Lead delivery
    /// Mailbox that both sends and receives lead notifications
    pub contact_email: String,
    pub mail_api_url: String,
    /// When unset, leads are only written to the log
    pub mail_api_key: Option<String>,
    pub mail_timeout_secs: u64,

    // Admin
    pub admin_api_key: Option<String>,

    // Certificate renewal
    pub acme_challenge_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },
            site_url: std::env::var("SITE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),

            // Lead delivery
            contact_email: non_empty_var("CONTACT_EMAIL")
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_string()),
            mail_api_key: non_empty_var("MAIL_API_KEY"),
            mail_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),

            // Admin
            admin_api_key: non_empty_var("ADMIN_API_KEY"),

            // Certificate renewal
            acme_challenge_dir: non_empty_var("ACME_CHALLENGE_DIR").map(PathBuf::from),
        })
    }

    /// Defaults for everything, with the given public origin.
    pub fn for_site(site_url: &str) -> Self {
        Self {
            port: 8080,
            site_url: site_url.trim_end_matches('/').to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            mail_api_url: DEFAULT_MAIL_API_URL.to_string(),
            mail_api_key: None,
            mail_timeout_secs: 15,
            admin_api_key: None,
            acme_challenge_dir: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
