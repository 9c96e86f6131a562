use crate::{Result, WebUiConfig};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::future::Future;
use tracing::instrument;
use url::Url;

/// Sends the logout request. Any response counts as success; only a failure
/// to get one is an error.
pub trait LogoutClient {
    fn post_logout(&self) -> impl Future<Output = Result<()>> + Send;
}

pub trait Navigator {
    fn navigate(&self, target: &Url);
}

#[derive(Clone, Debug)]
pub struct HttpLogoutClient {
    client: reqwest::Client,
    logout_url: Url,
}

impl HttpLogoutClient {
    pub fn new(config: &WebUiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            logout_url: config.logout_url()?,
        })
    }
}

impl LogoutClient for HttpLogoutClient {
    async fn post_logout(&self) -> Result<()> {
        // No body, but the JSON content type is still declared.
        let response = self
            .client
            .post(self.logout_url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        tracing::debug!("logout responded with {}", response.status());

        Ok(())
    }
}

/// Logs the redirect target instead of driving a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, target: &Url) {
        tracing::info!("redirecting to {}", target);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    Confirmed,
    Failed,
}

#[derive(Clone, Debug)]
pub struct SessionTerminator<C, N> {
    client: C,
    navigator: N,
    redirect_url: Url,
}

impl<N: Navigator> SessionTerminator<HttpLogoutClient, N> {
    pub fn from_config(config: &WebUiConfig, navigator: N) -> Result<Self> {
        let client = HttpLogoutClient::new(config)?;
        Ok(Self::new(client, navigator, config.redirect_url()?))
    }
}

impl<C: LogoutClient, N: Navigator> SessionTerminator<C, N> {
    pub fn new(client: C, navigator: N, redirect_url: Url) -> Self {
        crate::init();

        Self {
            client,
            navigator,
            redirect_url,
        }
    }

    /// Tells the server to drop the session, then redirects no matter what it said.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> LogoutOutcome {
        let outcome = match self.client.post_logout().await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(err) => {
                tracing::error!("Logout failed: {}", err);
                LogoutOutcome::Failed
            }
        };

        self.navigator.navigate(&self.redirect_url);

        outcome
    }
}
