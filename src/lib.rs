use serde::Deserialize;
use std::{sync::Once, time::Duration};
use url::Url;

pub mod error;
pub mod format;
pub mod message;
pub mod session;

pub use error::{Error, Result};
pub use format::{format_bytes, format_date};
pub use message::{MessagePresenter, Page, Severity};
pub use session::{
    HttpLogoutClient, LogoutClient, LogoutOutcome, Navigator, SessionTerminator, TracingNavigator,
};

static INIT: Once = Once::new();

/// Emits the startup line. Safe to call any number of times.
///
/// Only the first call logs, so install a tracing subscriber before calling
/// this or constructing a [`MessagePresenter`] or [`SessionTerminator`];
/// otherwise the line is lost.
pub fn init() {
    INIT.call_once(|| tracing::info!("VPN Cloud webui initialized"));
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebUiConfig {
    pub base_url: String,
    #[serde(default = "default_logout_path")]
    pub logout_path: String,
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_message_hide_ms")]
    pub message_hide_ms: u64,
}

fn default_logout_path() -> String {
    "/api/auth/logout".to_string()
}

fn default_redirect_path() -> String {
    "/".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_message_hide_ms() -> u64 {
    5_000
}

impl WebUiConfig {
    /// Reads `WEBUI_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed("WEBUI_").from_env::<Self>()?)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            logout_path: default_logout_path(),
            redirect_path: default_redirect_path(),
            request_timeout_ms: default_request_timeout_ms(),
            message_hide_ms: default_message_hide_ms(),
        }
    }

    pub fn logout_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?.join(&self.logout_path)?)
    }

    pub fn redirect_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?.join(&self.redirect_path)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn message_hide_delay(&self) -> Duration {
        Duration::from_millis(self.message_hide_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_against_base() {
        let config = WebUiConfig::new("http://vpn.local:8080/dashboard");
        assert_eq!(
            config.logout_url().unwrap().as_str(),
            "http://vpn.local:8080/api/auth/logout"
        );
        assert_eq!(config.redirect_url().unwrap().as_str(), "http://vpn.local:8080/");
    }

    #[test]
    fn defaults() {
        let config = WebUiConfig::new("http://localhost");
        assert_eq!(config.message_hide_delay(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = WebUiConfig::new("not a url");
        assert!(matches!(config.logout_url(), Err(Error::Url(_))));
    }
}
