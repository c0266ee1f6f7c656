use std::net::SocketAddr;

use anyhow::Context;

use portal_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    portal_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let mailer = app::mailer_from_config(&config).context("invalid SMTP configuration")?;
    let services = app::build_services(&config, mailer).await?;
    let _watcher = portal_contacts::spawn_watcher(services.contacts.clone(), config.contacts_check_interval);

    let router = app::build_router(&config, services);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, data_dir = %config.data_dir.display(), "portal listening");

    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("portal stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
