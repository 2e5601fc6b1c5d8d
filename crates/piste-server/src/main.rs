use std::sync::Arc;

use anyhow::Context;

use piste_core::{AppConfig, ResortTable};
use piste_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let _guard = piste_logging::init_for_profile(config.profile, config.log_dir.clone());

    let table = ResortTable::load_path(&config.data_path)
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;
    tracing::info!(
        profile = %config.profile,
        resorts = table.resorts().len(),
        "dataset loaded"
    );

    let app = router(AppState {
        table: Arc::new(table),
        profile: config.profile,
    });

    let listener = tokio::net::TcpListener::bind(&config.http_addr)
        .await
        .with_context(|| format!("binding {}", config.http_addr))?;
    tracing::info!(addr = %config.http_addr, "piste-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
