use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vpn_webui::{SessionTerminator, TracingNavigator, WebUiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vpn_webui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    vpn_webui::init();

    let config = WebUiConfig::from_env()?;
    let terminator = SessionTerminator::from_config(&config, TracingNavigator)?;

    let outcome = terminator.logout().await;
    tracing::debug!("logout settled: {:?}", outcome);

    Ok(())
}
