use anyhow::Context;

use bankapi_api::app::{self, services};
use bankapi_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bankapi_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    if !config.seed {
        tracing::info!("starting with an empty bank store");
    }

    let app = app::build_app(services::build_services(&config));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
